//! Sentiment pipeline: clean → score → label → dedup → aggregate.

pub mod aggregate;
pub mod classifier;
pub mod cleaner;
pub mod lexicon;
pub mod parser;

pub use aggregate::{EmptyCollectionError, aggregate};
pub use classifier::{ClassificationError, PolarityAnalyzer, SentimentClassifier};
pub use cleaner::clean;
pub use lexicon::{Lexicon, LexiconError};
pub use parser::parse;
