//! Percentage split of a parsed collection.

use thiserror::Error;
use tweetmood_core::{AggregateResult, ParsedCollection, Sentiment};

/// Returned when asked to aggregate nothing. Callers are expected to check
/// [`ParsedCollection::is_empty`] first and report "no data" instead.
#[derive(Debug, Error, PartialEq, Eq)]
#[error("cannot aggregate an empty collection")]
pub struct EmptyCollectionError;

/// Positive and negative shares in percent, each rounded half-up to two
/// decimals.
pub fn aggregate(collection: &ParsedCollection) -> Result<AggregateResult, EmptyCollectionError> {
    let total = collection.len();
    if total == 0 {
        return Err(EmptyCollectionError);
    }

    let positive = collection.count(Sentiment::Positive);
    let negative = total - positive;

    Ok(AggregateResult {
        positive_percentage: percent(positive, total),
        negative_percentage: percent(negative, total),
    })
}

/// `100 * part / total` rounded half-up to two decimals.
///
/// Rounded on the exact fraction in integers: for large totals the float
/// quotient can land just below a `.xx5` tie and round the wrong way.
fn percent(part: usize, total: usize) -> f64 {
    let (part, total) = (part as u128, total as u128);
    let hundredths = (20_000 * part + total) / (2 * total);
    hundredths as f64 / 100.0
}

#[cfg(test)]
mod tests {
    use super::*;
    use tweetmood_core::LabeledPost;

    fn collection(labels: &[Sentiment]) -> ParsedCollection {
        let mut c = ParsedCollection::new();
        for (i, &sentiment) in labels.iter().enumerate() {
            c.push(LabeledPost {
                text: format!("post {i}"),
                sentiment,
            });
        }
        c
    }

    use Sentiment::{Negative as N, Positive as P};

    #[test]
    fn empty_collection_is_an_error() {
        assert_eq!(aggregate(&ParsedCollection::new()), Err(EmptyCollectionError));
    }

    #[test]
    fn one_third_two_thirds() {
        let r = aggregate(&collection(&[P, N, N])).unwrap();
        assert_eq!(r.positive_percentage, 33.33);
        assert_eq!(r.negative_percentage, 66.67);
    }

    #[test]
    fn two_thirds_one_third() {
        let r = aggregate(&collection(&[P, P, N])).unwrap();
        assert_eq!(r.positive_percentage, 66.67);
        assert_eq!(r.negative_percentage, 33.33);
    }

    #[test]
    fn all_one_label() {
        let r = aggregate(&collection(&[P, P])).unwrap();
        assert_eq!(r.positive_percentage, 100.0);
        assert_eq!(r.negative_percentage, 0.0);

        let r = aggregate(&collection(&[N])).unwrap();
        assert_eq!(r.positive_percentage, 0.0);
        assert_eq!(r.negative_percentage, 100.0);
    }

    #[test]
    fn half_rounds_up() {
        // 1/8 = 12.5 % exactly; 1/16 = 6.25 %; 1/32 = 3.125 % -> 3.13.
        let mut labels = vec![N; 31];
        labels.push(P);
        let r = aggregate(&collection(&labels)).unwrap();
        assert_eq!(r.positive_percentage, 3.13);
        assert_eq!(r.negative_percentage, 96.88);
    }

    #[test]
    fn ties_on_large_totals_round_up() {
        // 23/4000 = 0.575 % exactly.
        assert_eq!(percent(23, 4000), 0.58);
        assert_eq!(percent(41, 4000), 1.03);
        assert_eq!(percent(51, 4000), 1.28);

        let mut labels = vec![N; 3977];
        labels.extend([P; 23]);
        let r = aggregate(&collection(&labels)).unwrap();
        assert_eq!(r.positive_percentage, 0.58);
        assert_eq!(r.negative_percentage, 99.43);
    }

    #[test]
    fn sums_to_one_hundred_within_rounding() {
        for total in 1..=60usize {
            for positive in 0..=total {
                let mut labels = vec![P; positive];
                labels.extend(std::iter::repeat_n(N, total - positive));
                let r = aggregate(&collection(&labels)).unwrap();
                let sum = r.positive_percentage + r.negative_percentage;
                assert!(
                    (sum - 100.0).abs() <= 0.01 + 1e-9,
                    "{positive}/{total}: {sum}"
                );
                assert!((0.0..=100.0).contains(&r.positive_percentage));
                assert!((0.0..=100.0).contains(&r.negative_percentage));
            }
        }
    }

    #[test]
    fn result_lookup_by_label() {
        let r = aggregate(&collection(&[P, N, N, N])).unwrap();
        assert_eq!(r.percentage(Sentiment::Positive), 25.0);
        assert_eq!(r.percentage(Sentiment::Negative), 75.0);
    }
}
