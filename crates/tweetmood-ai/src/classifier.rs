//! Binary sentiment classification on top of a polarity analyzer.
//!
//! Text is cleaned (see [`clean`]) before scoring. Any score in `[0, 1]` is
//! [`Sentiment::Positive`], any score in `[-1, 0)` is [`Sentiment::Negative`].
//! A score that is not a finite number in `[-1, 1]` is reported as an error
//! rather than being forced into a label.

use thiserror::Error;
use tweetmood_core::Sentiment;

use crate::cleaner::clean;
use crate::lexicon::Lexicon;

#[derive(Debug, Error)]
pub enum ClassificationError {
    #[error("polarity {score} for {text:?} is outside [-1, 1]")]
    OutOfRange { text: String, score: f64 },

    #[error("analyzer failed on {text:?}: {reason}")]
    Analyzer { text: String, reason: String },
}

/// A lexical sentiment function: cleaned text in, polarity in `[-1, 1]` out.
///
/// Implementations must be deterministic.
pub trait PolarityAnalyzer {
    fn polarity(&self, text: &str) -> Result<f64, ClassificationError>;
}

impl<A: PolarityAnalyzer + ?Sized> PolarityAnalyzer for &A {
    fn polarity(&self, text: &str) -> Result<f64, ClassificationError> {
        (**self).polarity(text)
    }
}

/// Map a polarity score to a label. Zero is positive.
pub fn label_for(score: f64) -> Sentiment {
    if score >= 0.0 {
        Sentiment::Positive
    } else {
        Sentiment::Negative
    }
}

/// Sentiment classifier over a [`PolarityAnalyzer`], the built-in
/// [`Lexicon`] by default.
pub struct SentimentClassifier<A = Lexicon> {
    analyzer: A,
}

impl Default for SentimentClassifier<Lexicon> {
    fn default() -> Self {
        Self::new(Lexicon::english())
    }
}

impl<A: PolarityAnalyzer> SentimentClassifier<A> {
    pub fn new(analyzer: A) -> Self {
        Self { analyzer }
    }

    pub fn analyzer(&self) -> &A {
        &self.analyzer
    }

    /// Polarity of the cleaned `text`, validated to lie in `[-1, 1]`.
    pub fn polarity(&self, text: &str) -> Result<f64, ClassificationError> {
        let cleaned = clean(text);
        let score = self.analyzer.polarity(&cleaned)?;
        if !score.is_finite() || !(-1.0..=1.0).contains(&score) {
            return Err(ClassificationError::OutOfRange {
                text: text.to_string(),
                score,
            });
        }
        Ok(score)
    }

    /// Classify a raw post body.
    pub fn classify(&self, text: &str) -> Result<Sentiment, ClassificationError> {
        self.polarity(text).map(label_for)
    }
}
