//! HTTP search client for the v1.1 standard search endpoint.

use std::time::Duration;

use reqwest::StatusCode;
use reqwest::header::AUTHORIZATION;
use serde::Deserialize;
use thiserror::Error;
use tracing::{debug, info, warn};
use tweetmood_core::{Credentials, RawPost, SearchQuery};

use crate::oauth::{OAuthSigner, encode_query};

pub const DEFAULT_BASE_URL: &str = "https://api.twitter.com";

const SEARCH_PATH: &str = "/1.1/search/tweets.json";

/// Largest page the endpoint serves.
const PAGE_SIZE: usize = 100;

/// Upper bound on a single rate-limit wait (one full 15 minute window).
const MAX_RATE_LIMIT_WAIT: Duration = Duration::from_secs(15 * 60);

#[derive(Error, Debug)]
pub enum FetchError {
    #[error("HTTP request failed: {0}")]
    Http(#[from] reqwest::Error),
    #[error("authentication rejected ({status}): {body}")]
    Auth { status: u16, body: String },
    #[error("rate limit exceeded (resets at {reset:?})")]
    RateLimited { reset: Option<i64> },
    #[error("server returned {status}: {body}")]
    Server { status: u16, body: String },
    #[error("JSON parse error: {0}")]
    Json(#[from] serde_json::Error),
    #[error("status {id} carries no text")]
    Malformed { id: u64 },
    #[error("system random source unavailable")]
    Nonce,
}

impl FetchError {
    /// Whether the credentials were the problem.
    pub fn is_auth(&self) -> bool {
        matches!(self, Self::Auth { .. })
    }
}

#[derive(Deserialize)]
struct SearchResponse {
    statuses: Vec<Status>,
}

#[derive(Deserialize)]
struct Status {
    id: u64,
    #[serde(default)]
    full_text: Option<String>,
    #[serde(default)]
    text: Option<String>,
    retweet_count: u64,
}

impl TryFrom<Status> for RawPost {
    type Error = FetchError;

    fn try_from(status: Status) -> Result<Self, Self::Error> {
        let text = status
            .full_text
            .or(status.text)
            .ok_or(FetchError::Malformed { id: status.id })?;
        Ok(RawPost::new(text, status.retweet_count))
    }
}

/// One decoded page: posts plus the lowest status id seen, for `max_id` paging.
struct Page {
    posts: Vec<RawPost>,
    lowest_id: Option<u64>,
}

fn decode_page(body: &str) -> Result<Page, FetchError> {
    let response: SearchResponse = serde_json::from_str(body)?;
    let lowest_id = response.statuses.iter().map(|s| s.id).min();
    let posts = response
        .statuses
        .into_iter()
        .map(RawPost::try_from)
        .collect::<Result<Vec<_>, _>>()?;
    Ok(Page { posts, lowest_id })
}

/// How long to sleep for a rate-limit reset at epoch second `reset`.
fn rate_limit_wait(reset: Option<i64>, now: i64) -> Duration {
    let secs = reset.map(|r| r.saturating_sub(now)).unwrap_or(0).max(1) as u64;
    Duration::from_secs(secs).min(MAX_RATE_LIMIT_WAIT)
}

/// Client for the standard search endpoint.
pub struct SearchClient {
    client: reqwest::Client,
    base_url: String,
    signer: OAuthSigner,
    wait_on_rate_limit: bool,
}

impl SearchClient {
    /// Create a client for `base_url` (e.g. [`DEFAULT_BASE_URL`], no trailing slash needed).
    pub fn new(credentials: Credentials, base_url: String) -> Self {
        Self {
            client: reqwest::Client::new(),
            base_url: base_url.trim_end_matches('/').to_string(),
            signer: OAuthSigner::new(credentials),
            wait_on_rate_limit: true,
        }
    }

    /// When set (the default), a 429 sleeps until the window resets and the
    /// page is requested again; otherwise it fails with [`FetchError::RateLimited`].
    pub fn wait_on_rate_limit(mut self, wait: bool) -> Self {
        self.wait_on_rate_limit = wait;
        self
    }

    fn search_url(&self) -> String {
        format!("{}{}", self.base_url, SEARCH_PATH)
    }

    /// Collect up to `query.max_posts` posts, newest first, paging backwards
    /// with `max_id` until the limit is reached or a page comes back empty.
    pub async fn search(&self, query: &SearchQuery) -> Result<Vec<RawPost>, FetchError> {
        let mut posts: Vec<RawPost> = Vec::with_capacity(query.max_posts.min(PAGE_SIZE * 5));
        let mut max_id: Option<u64> = None;

        info!(term = %query.term, since = %query.since, max = query.max_posts, "searching posts");
        while posts.len() < query.max_posts {
            let count = (query.max_posts - posts.len()).min(PAGE_SIZE);
            let page = self.fetch_page(query, count, max_id).await?;
            if page.posts.is_empty() {
                break;
            }
            debug!(page = page.posts.len(), total = posts.len() + page.posts.len(), "fetched page");
            posts.extend(page.posts);

            match page.lowest_id {
                Some(id) if id > 0 => max_id = Some(id - 1),
                _ => break,
            }
        }

        posts.truncate(query.max_posts);
        info!(count = posts.len(), "search complete");
        Ok(posts)
    }

    fn page_params(query: &SearchQuery, count: usize, max_id: Option<u64>) -> Vec<(String, String)> {
        let mut params = vec![
            ("q".to_string(), query.query_string()),
            ("lang".to_string(), query.lang.clone()),
            ("count".to_string(), count.to_string()),
            ("tweet_mode".to_string(), "extended".to_string()),
        ];
        if let Some(id) = max_id {
            params.push(("max_id".to_string(), id.to_string()));
        }
        params
    }

    async fn fetch_page(
        &self,
        query: &SearchQuery,
        count: usize,
        max_id: Option<u64>,
    ) -> Result<Page, FetchError> {
        let url = self.search_url();
        let params = Self::page_params(query, count, max_id);

        loop {
            let nonce = self.signer.nonce().ok_or(FetchError::Nonce)?;
            let now = chrono::Utc::now().timestamp();
            let auth = self.signer.authorization("GET", &url, &params, &nonce, now);

            let resp = self
                .client
                .get(format!("{url}?{}", encode_query(&params)))
                .header(AUTHORIZATION, auth)
                .send()
                .await?;
            let status = resp.status();

            if status == StatusCode::TOO_MANY_REQUESTS {
                let reset = resp
                    .headers()
                    .get("x-rate-limit-reset")
                    .and_then(|v| v.to_str().ok())
                    .and_then(|v| v.parse::<i64>().ok());
                if !self.wait_on_rate_limit {
                    return Err(FetchError::RateLimited { reset });
                }
                let wait = rate_limit_wait(reset, chrono::Utc::now().timestamp());
                warn!(wait_secs = wait.as_secs(), "rate limit reached, waiting for reset");
                tokio::time::sleep(wait).await;
                continue;
            }

            let body = resp.text().await?;
            if status == StatusCode::UNAUTHORIZED || status == StatusCode::FORBIDDEN {
                return Err(FetchError::Auth {
                    status: status.as_u16(),
                    body,
                });
            }
            if !status.is_success() {
                return Err(FetchError::Server {
                    status: status.as_u16(),
                    body,
                });
            }

            return decode_page(&body);
        }
    }
}
