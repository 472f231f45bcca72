//! Raw posts → labeled collection, collapsing duplicate reposts.

use std::collections::HashSet;

use tracing::{debug, info};
use tweetmood_core::{LabeledPost, ParsedCollection, RawPost};

use crate::classifier::{ClassificationError, PolarityAnalyzer, SentimentClassifier};

/// Classify every post and assemble the collection in input order.
///
/// A post with `repost_count > 0` is kept only if no identical
/// `(text, sentiment)` pair is already in the collection; a post with
/// `repost_count == 0` is always kept, duplicate or not.
///
/// The first classification failure aborts the parse: dropping a post would
/// skew the percentages.
pub fn parse<A, I>(
    classifier: &SentimentClassifier<A>,
    posts: I,
) -> Result<ParsedCollection, ClassificationError>
where
    A: PolarityAnalyzer,
    I: IntoIterator<Item = RawPost>,
{
    let mut collection = ParsedCollection::new();
    let mut kept: HashSet<LabeledPost> = HashSet::new();
    let mut input = 0usize;
    let mut skipped = 0usize;

    for post in posts {
        input += 1;
        let sentiment = classifier.classify(&post.text)?;
        let is_repost = post.is_repost();
        let labeled = LabeledPost {
            text: post.text,
            sentiment,
        };

        if is_repost && kept.contains(&labeled) {
            debug!(
                text = %labeled.text,
                sentiment = %labeled.sentiment,
                "skipping duplicate repost"
            );
            skipped += 1;
            continue;
        }

        kept.insert(labeled.clone());
        collection.push(labeled);
    }

    info!(
        input,
        kept = collection.len(),
        skipped_reposts = skipped,
        "parsed posts"
    );
    Ok(collection)
}
