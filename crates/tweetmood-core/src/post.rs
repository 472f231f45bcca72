//! Post types shared between the search client, the analysis pipeline and the chart.

use std::fmt;

use serde::{Deserialize, Serialize};

/// A post as delivered by the search collaborator.
///
/// Read-only to the analysis pipeline: it is consumed once by the parser and
/// then dropped.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RawPost {
    pub text: String,
    /// How many times the platform reports this post has been re-shared.
    pub repost_count: u64,
}

impl RawPost {
    pub fn new(text: impl Into<String>, repost_count: u64) -> Self {
        Self {
            text: text.into(),
            repost_count,
        }
    }

    pub fn is_repost(&self) -> bool {
        self.repost_count > 0
    }
}

/// Binary sentiment label.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Sentiment {
    Positive,
    Negative,
}

impl Sentiment {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Positive => "positive",
            Self::Negative => "negative",
        }
    }

    /// Human-readable label used in the console report and the chart legend.
    pub fn label(&self) -> &'static str {
        match self {
            Self::Positive => "Positive Tweets",
            Self::Negative => "Negative Tweets",
        }
    }
}

impl fmt::Display for Sentiment {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A post with its sentiment attached. `text` is the original, uncleaned body.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct LabeledPost {
    pub text: String,
    pub sentiment: Sentiment,
}

/// Ordered labeled posts for one run. Insertion order is preserved.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ParsedCollection {
    posts: Vec<LabeledPost>,
}

impl ParsedCollection {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn push(&mut self, post: LabeledPost) {
        self.posts.push(post);
    }

    pub fn len(&self) -> usize {
        self.posts.len()
    }

    pub fn is_empty(&self) -> bool {
        self.posts.is_empty()
    }

    pub fn iter(&self) -> std::slice::Iter<'_, LabeledPost> {
        self.posts.iter()
    }

    /// Posts carrying the given label, in collection order.
    pub fn with_sentiment(&self, sentiment: Sentiment) -> impl Iterator<Item = &LabeledPost> {
        self.posts.iter().filter(move |p| p.sentiment == sentiment)
    }

    pub fn count(&self, sentiment: Sentiment) -> usize {
        self.with_sentiment(sentiment).count()
    }

    pub fn as_slice(&self) -> &[LabeledPost] {
        &self.posts
    }
}

impl<'a> IntoIterator for &'a ParsedCollection {
    type Item = &'a LabeledPost;
    type IntoIter = std::slice::Iter<'a, LabeledPost>;

    fn into_iter(self) -> Self::IntoIter {
        self.posts.iter()
    }
}

/// Percentage split of a non-empty [`ParsedCollection`], rounded to two decimals.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct AggregateResult {
    pub positive_percentage: f64,
    pub negative_percentage: f64,
}

impl AggregateResult {
    pub fn percentage(&self, sentiment: Sentiment) -> f64 {
        match sentiment {
            Sentiment::Positive => self.positive_percentage,
            Sentiment::Negative => self.negative_percentage,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn labeled(text: &str, sentiment: Sentiment) -> LabeledPost {
        LabeledPost {
            text: text.into(),
            sentiment,
        }
    }

    #[test]
    fn raw_post_repost_flag() {
        assert!(!RawPost::new("hello", 0).is_repost());
        assert!(RawPost::new("hello", 3).is_repost());
    }

    #[test]
    fn sentiment_labels() {
        assert_eq!(Sentiment::Positive.label(), "Positive Tweets");
        assert_eq!(Sentiment::Negative.label(), "Negative Tweets");
        assert_eq!(Sentiment::Negative.as_str(), "negative");
        assert_eq!(Sentiment::Positive.to_string(), "positive");
    }

    #[test]
    fn sentiment_serializes_lowercase() {
        let json = serde_json::to_string(&Sentiment::Positive).unwrap();
        assert_eq!(json, "\"positive\"");
    }

    #[test]
    fn collection_preserves_insertion_order() {
        let mut c = ParsedCollection::new();
        c.push(labeled("b", Sentiment::Negative));
        c.push(labeled("a", Sentiment::Positive));
        c.push(labeled("c", Sentiment::Negative));

        let texts: Vec<&str> = c.iter().map(|p| p.text.as_str()).collect();
        assert_eq!(texts, vec!["b", "a", "c"]);
    }

    #[test]
    fn collection_filters_by_label() {
        let mut c = ParsedCollection::new();
        c.push(labeled("good", Sentiment::Positive));
        c.push(labeled("bad", Sentiment::Negative));
        c.push(labeled("fine", Sentiment::Positive));

        assert_eq!(c.count(Sentiment::Positive), 2);
        assert_eq!(c.count(Sentiment::Negative), 1);
        let negatives: Vec<_> = c.with_sentiment(Sentiment::Negative).collect();
        assert_eq!(negatives[0].text, "bad");
    }

    #[test]
    fn empty_collection() {
        let c = ParsedCollection::new();
        assert!(c.is_empty());
        assert_eq!(c.len(), 0);
        assert_eq!(c.count(Sentiment::Positive), 0);
    }
}
