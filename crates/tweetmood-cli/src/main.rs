mod analyze;
mod display;

use std::io::{self, Write};
use std::path::PathBuf;
use std::process::ExitCode;

use anyhow::{Context, bail};
use chrono::NaiveDate;
use clap::Parser;
use tracing_subscriber::EnvFilter;
use tweetmood_ai::{Lexicon, SentimentClassifier};
use tweetmood_chart::PieChart;
use tweetmood_core::credentials::DEFAULT_CONFIG_FILE;
use tweetmood_core::search::{DEFAULT_LANG, DEFAULT_MAX_POSTS, default_since};
use tweetmood_core::{Credentials, SearchQuery};
use tweetmood_sync::{FetchError, SearchClient};
use tweetmood_sync::http::DEFAULT_BASE_URL;

/// Search recent posts and chart how positive or negative they are.
#[derive(Parser, Debug)]
#[command(name = "tweetmood", version)]
struct Cli {
    /// Search term, e.g. `@dominos`. Prompted for when omitted.
    term: Option<String>,

    /// JSON file holding consumer_key, consumer_secret, access_token, access_token_secret.
    #[arg(long, env = "TWEETMOOD_CONFIG", default_value = DEFAULT_CONFIG_FILE)]
    config: PathBuf,

    /// Maximum number of posts to analyze.
    #[arg(long, env = "TWEETMOOD_MAX_POSTS", default_value_t = DEFAULT_MAX_POSTS)]
    max_posts: usize,

    /// Only posts on or after this date (YYYY-MM-DD).
    #[arg(long, default_value_t = default_since())]
    since: NaiveDate,

    /// Language filter passed to the search endpoint.
    #[arg(long, default_value = DEFAULT_LANG)]
    lang: String,

    /// Where the SVG chart is written.
    #[arg(long, short, env = "TWEETMOOD_OUTPUT", default_value = tweetmood_chart::DEFAULT_OUTPUT)]
    output: PathBuf,

    /// JSON word → polarity map replacing the built-in lexicon.
    #[arg(long, env = "TWEETMOOD_LEXICON")]
    lexicon: Option<PathBuf>,

    /// Search API base URL.
    #[arg(long, env = "TWEETMOOD_API_URL", default_value = DEFAULT_BASE_URL)]
    api_url: String,

    /// Fail on rate limiting instead of waiting for the window to reset.
    #[arg(long)]
    no_wait: bool,
}

fn init_logging() {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(io::stderr)
        .init();
}

async fn run(cli: Cli) -> anyhow::Result<()> {
    let credentials = Credentials::load(&cli.config).context("loading API credentials")?;

    let classifier = match &cli.lexicon {
        Some(path) => SentimentClassifier::new(Lexicon::load(path)?),
        None => SentimentClassifier::default(),
    };

    let term = match cli.term {
        Some(term) => term,
        None => display::prompt_term(&mut io::stdin().lock(), &mut io::stdout())?,
    };
    if term.trim().is_empty() {
        bail!("no search term given");
    }

    let query = SearchQuery::new(term)
        .with_since(cli.since)
        .with_max_posts(cli.max_posts)
        .with_lang(cli.lang);

    let client = SearchClient::new(credentials, cli.api_url).wait_on_rate_limit(!cli.no_wait);
    let posts = client.search(&query).await.map_err(with_auth_hint)?;

    let renderer = PieChart::new(cli.output);
    let mut stdout = io::stdout().lock();
    analyze::run_analysis(&classifier, posts, &query.title(), &renderer, &mut stdout)?;
    stdout.flush()?;
    Ok(())
}

/// Point at the credential file when the API rejects the keys.
fn with_auth_hint(err: FetchError) -> anyhow::Error {
    if err.is_auth() {
        anyhow::Error::new(err)
            .context("API rejected the credentials; check the keys in the config file")
    } else {
        err.into()
    }
}

#[tokio::main]
async fn main() -> ExitCode {
    init_logging();
    tracing::info!("tweetmood v{}", env!("CARGO_PKG_VERSION"));

    let cli = Cli::parse();
    match run(cli).await {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => {
            eprintln!("Error : {err:#}");
            ExitCode::FAILURE
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::CommandFactory;

    #[test]
    fn cli_definition_is_valid() {
        Cli::command().debug_assert();
    }

    #[test]
    fn defaults() {
        let cli = Cli::try_parse_from(["tweetmood", "@dominos"]).unwrap();
        assert_eq!(cli.term.as_deref(), Some("@dominos"));
        assert_eq!(cli.max_posts, 500);
        assert_eq!(cli.lang, "en");
        assert_eq!(cli.since, NaiveDate::from_ymd_opt(2020, 1, 1).unwrap());
        assert!(!cli.no_wait);
    }

    #[test]
    fn term_is_optional() {
        let cli = Cli::try_parse_from(["tweetmood"]).unwrap();
        assert!(cli.term.is_none());
    }

    #[test]
    fn parses_overrides() {
        let cli = Cli::try_parse_from([
            "tweetmood",
            "rust",
            "--max-posts",
            "50",
            "--since",
            "2024-06-01",
            "-o",
            "out.svg",
            "--no-wait",
        ])
        .unwrap();
        assert_eq!(cli.max_posts, 50);
        assert_eq!(cli.since, NaiveDate::from_ymd_opt(2024, 6, 1).unwrap());
        assert_eq!(cli.output, PathBuf::from("out.svg"));
        assert!(cli.no_wait);
    }

    #[test]
    fn rejects_bad_date() {
        assert!(Cli::try_parse_from(["tweetmood", "x", "--since", "yesterday"]).is_err());
    }

    #[test]
    fn since_default_matches_query_default() {
        let cli = Cli::try_parse_from(["tweetmood", "x"]).unwrap();
        assert_eq!(cli.since, default_since());
        assert_eq!(cli.since, SearchQuery::new("x").since);
    }

    #[test]
    fn auth_failures_get_a_credentials_hint() {
        let err = with_auth_hint(FetchError::Auth {
            status: 401,
            body: "Could not authenticate you.".into(),
        });
        let msg = format!("{err:#}");
        assert!(msg.starts_with("API rejected the credentials"));
        assert!(msg.contains("401"));

        let err = with_auth_hint(FetchError::RateLimited { reset: None });
        assert!(!format!("{err:#}").contains("credentials"));
    }

    #[tokio::test]
    async fn missing_credentials_abort_before_search() {
        let tmp = tempfile::TempDir::new().unwrap();
        let cli = Cli::try_parse_from([
            "tweetmood",
            "rust",
            "--config",
            tmp.path().join("absent.json").to_str().unwrap(),
        ])
        .unwrap();

        let err = run(cli).await.unwrap_err();
        assert!(format!("{err:#}").contains("loading API credentials"));
    }
}
