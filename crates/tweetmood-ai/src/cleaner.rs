//! Post body normalisation ahead of polarity scoring.

use std::sync::LazyLock;

use regex::Regex;

/// Mentions, stray punctuation/symbols, and URLs, matched left to right in one pass.
///
/// At a given position a URL is only tried after the first two alternatives
/// fail, which happens exactly when the position starts a word, so
/// `https://x.co/@a` is removed whole rather than split on `:`.
static NOISE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"(@[A-Za-z0-9]+)|([^0-9A-Za-z \t])|(\w+://\S+)").expect("static pattern compiles")
});

/// Strip mentions, URLs, and every character that is not an ASCII letter,
/// digit or whitespace, then collapse whitespace and trim.
///
/// Total: any input, including `""`, yields a (possibly empty) string.
pub fn clean(text: &str) -> String {
    let replaced = NOISE.replace_all(text, " ");
    replaced.split_whitespace().collect::<Vec<_>>().join(" ")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn empty_input() {
        assert_eq!(clean(""), "");
        assert_eq!(clean("   \t  "), "");
    }

    #[test]
    fn strips_mentions() {
        assert_eq!(clean("@dominos pizza was cold"), "pizza was cold");
        assert_eq!(clean("thanks @bob and @Alice99!"), "thanks and");
    }

    #[test]
    fn strips_urls() {
        assert_eq!(
            clean("read this https://t.co/AbC123 now"),
            "read this now"
        );
        assert_eq!(clean("ftp://files.example.org/x.zip"), "");
    }

    #[test]
    fn url_with_mention_in_path_removed_whole() {
        assert_eq!(clean("see https://x.com/@bob/status/1 ok"), "see ok");
    }

    #[test]
    fn replaces_punctuation_and_symbols() {
        assert_eq!(clean("Great day!!!"), "Great day");
        assert_eq!(clean("don't stop"), "don t stop");
        assert_eq!(clean("#blessed #win"), "blessed win");
    }

    #[test]
    fn non_ascii_becomes_separator() {
        assert_eq!(clean("café time"), "caf time");
        assert_eq!(clean("love it 😍😍"), "love it");
    }

    #[test]
    fn collapses_whitespace_and_newlines() {
        assert_eq!(clean("  a \n\n b\t\tc  "), "a b c");
    }

    #[test]
    fn bare_at_sign_is_just_punctuation() {
        assert_eq!(clean("meet @ noon"), "meet noon");
    }

    #[test]
    fn output_has_no_mentions_urls_or_edge_whitespace() {
        let inputs = [
            "RT @user: check https://a.b/c?d=e&f=g !!",
            "@a@b@c",
            "  x://y  @z  ",
            "mixed @Tag123 text http://foo.bar and more",
            "\u{a0}nbsp\u{a0}",
        ];
        for input in inputs {
            let out = clean(input);
            assert!(!out.contains('@'), "{input:?} -> {out:?}");
            assert!(!out.contains("://"), "{input:?} -> {out:?}");
            assert_eq!(out.trim(), out, "{input:?} -> {out:?}");
        }
    }

    #[test]
    fn deterministic() {
        let s = "Same @input https://same.url again!";
        assert_eq!(clean(s), clean(s));
    }
}
