//! Splitting raw text into normalized word tokens.
//!
//! Two strategies exist and a run uses exactly one of them:
//!
//! - [`TokenizerKind::Regex`]: whitespace split, URL-looking chunks dropped,
//!   word sub-tokens extracted with an optional contraction suffix, possessive
//!   `'s` stripped.
//! - [`TokenizerKind::Simple`]: whitespace split, punctuation and digits trimmed
//!   from both ends of each piece.
//!
//! Both lower-case their output and never yield empty tokens.

use once_cell::sync::Lazy;
use regex::Regex;
use serde::{Deserialize, Serialize};

/// Chunks matching this are links and produce no tokens.
static URL_PATTERN: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"^(https?://|www\.)|\.(com|it|net|org)($|/)").unwrap());

/// A word, optionally followed by one contraction suffix.
static TOKEN_PATTERN: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"\w+(?:'(?:d|ll|m|re|s|t|ve))?").unwrap());

const POSSESSIVE_SUFFIX: &str = "'s";

/// Tokenization strategy, fixed for a whole run.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum TokenizerKind {
    #[default]
    Regex,
    Simple,
}

impl TokenizerKind {
    /// Lazily tokenize `text`. Each call rescans from the start.
    pub fn tokenize<'a>(self, text: &'a str) -> Box<dyn Iterator<Item = String> + 'a> {
        match self {
            Self::Regex => Box::new(regex_tokens(text)),
            Self::Simple => Box::new(simple_tokens(text)),
        }
    }

    pub fn name(self) -> &'static str {
        match self {
            Self::Regex => "regex",
            Self::Simple => "simple",
        }
    }
}

/// Whether a whitespace-delimited chunk looks like a link.
pub fn looks_like_url(chunk: &str) -> bool {
    URL_PATTERN.is_match(chunk)
}

fn regex_tokens(text: &str) -> impl Iterator<Item = String> + '_ {
    text.split_whitespace()
        .filter(|chunk| !looks_like_url(chunk))
        .flat_map(|chunk| TOKEN_PATTERN.find_iter(chunk))
        .filter_map(|m| normalize_sub_token(m.as_str()))
}

fn normalize_sub_token(raw: &str) -> Option<String> {
    let mut token = raw.to_lowercase();
    if token.ends_with(POSSESSIVE_SUFFIX) {
        token.truncate(token.len() - POSSESSIVE_SUFFIX.len());
    }
    (!token.is_empty()).then_some(token)
}

fn simple_tokens(text: &str) -> impl Iterator<Item = String> + '_ {
    text.split_whitespace().filter_map(|piece| {
        let trimmed = piece.trim_matches(is_simple_trim_char);
        (!trimmed.is_empty()).then(|| trimmed.to_lowercase())
    })
}

/// Characters trimmed from both ends of a piece in simple mode.
pub fn is_simple_trim_char(c: char) -> bool {
    c.is_ascii_punctuation() || c.is_ascii_digit() || c.is_whitespace()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn regex(text: &str) -> Vec<String> {
        TokenizerKind::Regex.tokenize(text).collect()
    }

    fn simple(text: &str) -> Vec<String> {
        TokenizerKind::Simple.tokenize(text).collect()
    }

    #[test]
    fn test_regex_lowercases_and_splits_punctuation() {
        assert_eq!(regex("Hello, World!"), vec!["hello", "world"]);
        assert_eq!(regex("foo-bar"), vec!["foo", "bar"]);
    }

    #[test]
    fn test_regex_drops_url_chunks() {
        assert!(regex("http://example.com/x").is_empty());
        assert!(regex("https://a.b").is_empty());
        assert!(regex("www.rust-lang").is_empty());
        assert!(regex("reddit.com").is_empty());
        assert!(regex("imgur.com/abc").is_empty());
        assert_eq!(regex("see reddit.comments"), vec!["see", "reddit", "comments"]);

        for link in [
            "python.org",
            "python.org/downloads",
            "slashdot.net",
            "slashdot.net/",
            "repubblica.it",
            "repubblica.it/esteri",
        ] {
            assert!(regex(link).is_empty(), "{link} should be dropped");
        }
    }

    #[test]
    fn test_regex_keeps_words_resembling_domains() {
        assert_eq!(regex("commit"), vec!["commit"]);
        assert_eq!(regex("edit."), vec!["edit"]);
        assert_eq!(regex("sub.item"), vec!["sub", "item"]);
        assert_eq!(regex("cornet"), vec!["cornet"]);
        assert_eq!(regex("x.organic"), vec!["x", "organic"]);
    }

    #[test]
    fn test_regex_keeps_contractions_and_strips_possessive() {
        assert_eq!(regex("don't you'll"), vec!["don't", "you'll"]);
        assert_eq!(regex("Dog's bone"), vec!["dog", "bone"]);
    }

    #[test]
    fn test_regex_yields_numbers_and_nothing_for_symbols() {
        assert_eq!(regex("42 ..."), vec!["42"]);
        assert!(regex("*** --- !!!").is_empty());
        assert!(regex("").is_empty());
    }

    #[test]
    fn test_regex_handles_unicode_words() {
        assert_eq!(regex("Café naïve"), vec!["café", "naïve"]);
    }

    #[test]
    fn test_simple_trims_punctuation_and_digits() {
        assert_eq!(simple("\"Hello,\" 2cats!! 42"), vec!["hello", "cats"]);
        assert_eq!(simple("dog's"), vec!["dog's"]);
        assert_eq!(simple("http://example.com"), vec!["http://example.com"]);
    }

    #[test]
    fn test_tokenize_is_restartable() {
        let text = "one two three";
        let first: Vec<_> = TokenizerKind::Regex.tokenize(text).collect();
        let second: Vec<_> = TokenizerKind::Regex.tokenize(text).collect();
        assert_eq!(first, second);
    }
}
