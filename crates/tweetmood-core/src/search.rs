//! Search settings handed to the fetch collaborator.

use chrono::{Datelike, NaiveDate};

pub const DEFAULT_MAX_POSTS: usize = 500;
pub const DEFAULT_LANG: &str = "en";

/// Earliest post date searched when none is given.
pub fn default_since() -> NaiveDate {
    NaiveDate::from_ymd_opt(2020, 1, 1).unwrap_or_default()
}

/// One search request: what to look for and how many posts to collect at most.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SearchQuery {
    pub term: String,
    pub lang: String,
    pub since: NaiveDate,
    pub max_posts: usize,
}

impl SearchQuery {
    pub fn new(term: impl Into<String>) -> Self {
        Self {
            term: term.into(),
            lang: DEFAULT_LANG.to_string(),
            since: default_since(),
            max_posts: DEFAULT_MAX_POSTS,
        }
    }

    pub fn with_since(mut self, since: NaiveDate) -> Self {
        self.since = since;
        self
    }

    pub fn with_max_posts(mut self, max_posts: usize) -> Self {
        self.max_posts = max_posts;
        self
    }

    pub fn with_lang(mut self, lang: impl Into<String>) -> Self {
        self.lang = lang.into();
        self
    }

    /// Query string with the date bound expressed as a search operator,
    /// e.g. `@dominos since:2020-01-01`.
    pub fn query_string(&self) -> String {
        format!("{} since:{}", self.term.trim(), self.since.format("%Y-%m-%d"))
    }

    /// Chart caption for this search.
    pub fn title(&self) -> String {
        format!(
            "Public Acceptance on Twitter {} : {}",
            self.since.year(),
            self.term.trim()
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults() {
        let q = SearchQuery::new("@dominos");
        assert_eq!(q.lang, "en");
        assert_eq!(q.max_posts, 500);
        assert_eq!(q.since, NaiveDate::from_ymd_opt(2020, 1, 1).unwrap());
    }

    #[test]
    fn query_string_carries_since_operator() {
        let q = SearchQuery::new(" @dominos ")
            .with_since(NaiveDate::from_ymd_opt(2021, 3, 9).unwrap());
        assert_eq!(q.query_string(), "@dominos since:2021-03-09");
    }

    #[test]
    fn title_uses_since_year() {
        let q = SearchQuery::new("@dominos");
        assert_eq!(q.title(), "Public Acceptance on Twitter 2020 : @dominos");
    }

    #[test]
    fn builders_override_defaults() {
        let q = SearchQuery::new("rust").with_max_posts(42).with_lang("fr");
        assert_eq!(q.max_posts, 42);
        assert_eq!(q.lang, "fr");
    }
}
