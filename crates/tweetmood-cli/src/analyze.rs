//! Fetched posts → console report and chart.

use std::io::Write;

use anyhow::Context;
use tracing::warn;
use tweetmood_ai::{PolarityAnalyzer, SentimentClassifier, aggregate, parse};
use tweetmood_chart::ChartRenderer;
use tweetmood_core::{AggregateResult, RawPost};

use crate::display;

#[derive(Debug, PartialEq)]
pub enum Outcome {
    /// Nothing survived parsing; the no-data notice was printed.
    NoData,
    Reported(AggregateResult),
}

/// Parse, aggregate, print, and render.
///
/// An empty collection prints the no-data notice and skips aggregation and
/// rendering. Classification errors abort before anything is printed. A
/// chart failure is only logged: the report is already on `out`.
pub fn run_analysis<A, R, W>(
    classifier: &SentimentClassifier<A>,
    posts: Vec<RawPost>,
    title: &str,
    renderer: &R,
    out: &mut W,
) -> anyhow::Result<Outcome>
where
    A: PolarityAnalyzer,
    R: ChartRenderer + ?Sized,
    W: Write,
{
    let collection = parse(classifier, posts).context("classifying posts")?;

    if collection.is_empty() {
        display::print_no_data(out)?;
        return Ok(Outcome::NoData);
    }

    let result = aggregate(&collection)?;
    display::print_report(out, &result)?;

    if let Err(err) = renderer.render(&result, title) {
        warn!(error = %err, "chart rendering failed");
    }

    Ok(Outcome::Reported(result))
}
