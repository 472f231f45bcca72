//! Word-level polarity lexicon with intensifiers and negation.
//!
//! Scores cleaned text the way pattern-based analyzers do: every word found
//! in the lexicon contributes its polarity, scaled by an immediately
//! preceding intensifier and flipped (at half strength) by a negation within
//! the two preceding words. The text score is the mean contribution, clamped
//! to `[-1, 1]`; text with no lexicon hits scores exactly `0.0`.

use std::collections::HashMap;
use std::path::{Path, PathBuf};

use thiserror::Error;
use tracing::info;

use crate::classifier::{ClassificationError, PolarityAnalyzer};

/// Negation flips polarity and halves its strength.
const NEGATION_FACTOR: f64 = -0.5;

/// How many preceding tokens are searched for a negation.
const NEGATION_WINDOW: usize = 2;

/// Built-in English lexicon.
const WORDS: &[(&str, f64)] = &[
    // positive
    ("good", 0.7),
    ("great", 0.8),
    ("excellent", 1.0),
    ("amazing", 0.6),
    ("awesome", 1.0),
    ("fantastic", 0.4),
    ("wonderful", 1.0),
    ("perfect", 1.0),
    ("best", 1.0),
    ("better", 0.5),
    ("nice", 0.6),
    ("love", 0.5),
    ("loved", 0.7),
    ("loving", 0.6),
    ("lovely", 0.5),
    ("like", 0.2),
    ("liked", 0.3),
    ("happy", 0.8),
    ("glad", 0.5),
    ("enjoy", 0.4),
    ("enjoyed", 0.5),
    ("fun", 0.3),
    ("cool", 0.35),
    ("fresh", 0.3),
    ("tasty", 0.5),
    ("delicious", 1.0),
    ("yummy", 0.6),
    ("beautiful", 0.85),
    ("brilliant", 0.9),
    ("fast", 0.2),
    ("quick", 0.33),
    ("friendly", 0.4),
    ("helpful", 0.5),
    ("polite", 0.4),
    ("recommend", 0.4),
    ("thanks", 0.2),
    ("thank", 0.2),
    ("win", 0.8),
    ("winning", 0.5),
    ("success", 0.3),
    ("successful", 0.75),
    ("easy", 0.43),
    ("favorite", 0.5),
    ("favourite", 0.5),
    ("super", 0.33),
    ("incredible", 0.9),
    ("impressive", 1.0),
    ("satisfied", 0.5),
    ("pleased", 0.5),
    ("fine", 0.42),
    ("well", 0.2),
    ("right", 0.29),
    ("free", 0.4),
    ("hot", 0.25),
    ("warm", 0.6),
    ("safe", 0.5),
    ("clean", 0.37),
    ("reliable", 0.5),
    ("positive", 0.23),
    ("interesting", 0.5),
    ("exciting", 0.3),
    ("excited", 0.38),
    ("proud", 0.8),
    ("fair", 0.7),
    ("cheap", 0.4),
    // negative
    ("bad", -0.7),
    ("worse", -0.4),
    ("worst", -1.0),
    ("terrible", -1.0),
    ("horrible", -1.0),
    ("awful", -1.0),
    ("poor", -0.4),
    ("sad", -0.5),
    ("angry", -0.5),
    ("mad", -0.62),
    ("hate", -0.8),
    ("hated", -0.9),
    ("disgusting", -1.0),
    ("gross", -0.3),
    ("cold", -0.6),
    ("late", -0.3),
    ("slow", -0.3),
    ("rude", -0.3),
    ("wrong", -0.5),
    ("broken", -0.4),
    ("stupid", -0.8),
    ("boring", -1.0),
    ("annoying", -0.8),
    ("disappointed", -0.75),
    ("disappointing", -0.6),
    ("fail", -0.5),
    ("failed", -0.5),
    ("failure", -0.32),
    ("useless", -0.5),
    ("ugly", -0.7),
    ("sick", -0.71),
    ("dirty", -0.6),
    ("expensive", -0.5),
    ("problem", -0.2),
    ("problems", -0.2),
    ("issue", -0.1),
    ("never", -0.1),
    ("sucks", -0.3),
    ("scam", -0.8),
    ("fake", -0.5),
    ("unhappy", -0.6),
    ("difficult", -0.5),
    ("hard", -0.29),
    ("dead", -0.2),
    ("lost", -0.2),
    ("missing", -0.2),
    ("crazy", -0.6),
    ("nasty", -1.0),
    ("unacceptable", -0.8),
    ("ridiculous", -0.33),
    ("pathetic", -1.0),
    ("dangerous", -0.6),
    ("painful", -0.7),
    ("negative", -0.3),
    ("hungry", -0.25),
    ("tired", -0.4),
    ("weird", -0.5),
];

/// Multipliers applied to the word that immediately follows.
const INTENSIFIERS: &[(&str, f64)] = &[
    ("very", 1.3),
    ("really", 1.2),
    ("so", 1.2),
    ("extremely", 1.5),
    ("incredibly", 1.4),
    ("absolutely", 1.5),
    ("totally", 1.3),
    ("completely", 1.3),
    ("super", 1.3),
    ("too", 1.2),
    ("quite", 1.1),
    ("pretty", 1.1),
    ("somewhat", 0.8),
    ("slightly", 0.7),
    ("barely", 0.6),
    ("little", 0.8),
];

/// `t` is what remains of an `n't` contraction after cleaning (`don t`).
const NEGATIONS: &[&str] = &[
    "not", "no", "never", "nothing", "nobody", "none", "neither", "nor", "cannot", "dont",
    "doesnt", "didnt", "isnt", "wasnt", "arent", "werent", "wont", "cant", "couldnt",
    "shouldnt", "wouldnt", "hasnt", "havent", "hadnt", "t",
];

#[derive(Debug, Error)]
pub enum LexiconError {
    #[error("cannot read lexicon {path}: {source}")]
    Read {
        path: PathBuf,
        source: std::io::Error,
    },

    #[error("invalid lexicon {path}: {source}")]
    Parse {
        path: PathBuf,
        source: serde_json::Error,
    },

    #[error("polarity for {word:?} must be within [-1, 1], got {polarity}")]
    OutOfRange { word: String, polarity: f64 },

    #[error("lexicon {path} has no words")]
    Empty { path: PathBuf },
}

/// Polarity lexicon keyed by lowercase word.
#[derive(Debug, Clone)]
pub struct Lexicon {
    words: HashMap<String, f64>,
    intensifiers: HashMap<&'static str, f64>,
}

impl Default for Lexicon {
    fn default() -> Self {
        Self::english()
    }
}

impl Lexicon {
    /// The built-in English lexicon.
    pub fn english() -> Self {
        let words = WORDS.iter().map(|&(w, p)| (w.to_string(), p)).collect();
        Self::with_words(words)
    }

    /// Build a lexicon from `(word, polarity)` entries.
    ///
    /// Words are lowercased; every polarity must be finite and within `[-1, 1]`.
    pub fn from_entries<I, S>(entries: I) -> Result<Self, LexiconError>
    where
        I: IntoIterator<Item = (S, f64)>,
        S: Into<String>,
    {
        let mut words = HashMap::new();
        for (word, polarity) in entries {
            let word = word.into();
            if !polarity.is_finite() || !(-1.0..=1.0).contains(&polarity) {
                return Err(LexiconError::OutOfRange { word, polarity });
            }
            words.insert(word.to_lowercase(), polarity);
        }
        Ok(Self::with_words(words))
    }

    /// Load a lexicon from a JSON object mapping words to polarities,
    /// e.g. `{"great": 0.8, "awful": -1.0}`. Replaces the built-in word list;
    /// intensifiers and negations stay as built in.
    pub fn load(path: &Path) -> Result<Self, LexiconError> {
        let raw = std::fs::read_to_string(path).map_err(|source| LexiconError::Read {
            path: path.to_path_buf(),
            source,
        })?;
        let entries: HashMap<String, f64> =
            serde_json::from_str(&raw).map_err(|source| LexiconError::Parse {
                path: path.to_path_buf(),
                source,
            })?;
        let lexicon = Self::from_entries(entries)?;
        if lexicon.is_empty() {
            return Err(LexiconError::Empty {
                path: path.to_path_buf(),
            });
        }
        info!(path = %path.display(), words = lexicon.len(), "loaded lexicon");
        Ok(lexicon)
    }

    fn with_words(words: HashMap<String, f64>) -> Self {
        Self {
            words,
            intensifiers: INTENSIFIERS.iter().copied().collect(),
        }
    }

    /// Number of scored words.
    pub fn len(&self) -> usize {
        self.words.len()
    }

    pub fn is_empty(&self) -> bool {
        self.words.is_empty()
    }

    /// Polarity of a single word, if known.
    pub fn get(&self, word: &str) -> Option<f64> {
        self.words.get(word).copied()
    }

    /// Score already-cleaned text.
    pub fn score(&self, text: &str) -> f64 {
        let tokens: Vec<String> = text.split_whitespace().map(str::to_lowercase).collect();

        let mut sum = 0.0;
        let mut hits = 0usize;
        for (i, token) in tokens.iter().enumerate() {
            let Some(mut polarity) = self.get(token) else {
                continue;
            };

            if i > 0
                && let Some(&factor) = self.intensifiers.get(tokens[i - 1].as_str())
            {
                polarity = (polarity * factor).clamp(-1.0, 1.0);
            }

            let window = &tokens[i.saturating_sub(NEGATION_WINDOW)..i];
            if window.iter().any(|t| NEGATIONS.contains(&t.as_str())) {
                polarity *= NEGATION_FACTOR;
            }

            sum += polarity;
            hits += 1;
        }

        if hits == 0 {
            return 0.0;
        }
        (sum / hits as f64).clamp(-1.0, 1.0)
    }
}

impl PolarityAnalyzer for Lexicon {
    fn polarity(&self, text: &str) -> Result<f64, ClassificationError> {
        Ok(self.score(text))
    }
}
