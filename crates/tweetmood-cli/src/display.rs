//! Console output: the percentage report, the no-data notice, and the search prompt.

use std::io::{self, BufRead, Write};

use tweetmood_core::{AggregateResult, Sentiment};

pub const NO_DATA_MESSAGE: &str =
    "No data to analyze. Sorry ! ... get more followers by the way =P ";

pub const PROMPT: &str =
    "Give a company for the analysis (use the Twitter format ex.: @dominos) : ";

/// `Positive Tweets : 33.33` / `Negative Tweets : 66.67`.
pub fn print_report<W: Write>(out: &mut W, result: &AggregateResult) -> io::Result<()> {
    for sentiment in [Sentiment::Positive, Sentiment::Negative] {
        writeln!(
            out,
            "{} : {:.2}",
            sentiment.label(),
            result.percentage(sentiment)
        )?;
    }
    Ok(())
}

pub fn print_no_data<W: Write>(out: &mut W) -> io::Result<()> {
    writeln!(out, "{NO_DATA_MESSAGE}")
}

/// Ask for the search term on `out` and read one line from `input`.
///
/// Returns the trimmed line; empty if the user entered nothing or input is closed.
pub fn prompt_term<R: BufRead, W: Write>(input: &mut R, out: &mut W) -> io::Result<String> {
    write!(out, "{PROMPT}")?;
    out.flush()?;

    let mut line = String::new();
    input.read_line(&mut line)?;
    Ok(line.trim().to_string())
}
