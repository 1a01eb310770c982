//! Filter pipeline - decides which tokens are counted

use crate::core::config::IndexConfig;
use crate::core::trie::WordTrie;

/// Why a token was not counted
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum Rejection {
    /// Alpha-only mode and the token contains a digit
    NonAlphabetic,
    /// Shorter than the configured minimum
    TooShort,
    /// Present in the ignore list
    Ignored,
}

impl Rejection {
    pub fn as_str(&self) -> &'static str {
        match self {
            Rejection::NonAlphabetic => "non_alphabetic",
            Rejection::TooShort => "too_short",
            Rejection::Ignored => "ignored",
        }
    }
}

/// Per-token accept/reject rules, borrowed from the run configuration
#[derive(Debug, Clone, Copy)]
pub struct FilterPipeline<'a> {
    alpha_only: bool,
    min_len: usize,
    ignore: Option<&'a WordTrie>,
}

impl<'a> FilterPipeline<'a> {
    pub fn new(config: &IndexConfig, ignore: Option<&'a WordTrie>) -> Self {
        Self {
            alpha_only: config.alpha_only,
            min_len: config.min_len,
            ignore,
        }
    }

    /// `None` if the token should be counted, otherwise the first rule it failed
    pub fn check(&self, token: &str) -> Option<Rejection> {
        if self.alpha_only && !token.bytes().all(|b| b.is_ascii_alphabetic()) {
            return Some(Rejection::NonAlphabetic);
        }
        if self.min_len > 0 && token.len() < self.min_len {
            return Some(Rejection::TooShort);
        }
        if self.ignore.is_some_and(|ignore| ignore.contains(token)) {
            return Some(Rejection::Ignored);
        }
        None
    }

    #[allow(dead_code)]
    pub fn accepts(&self, token: &str) -> bool {
        self.check(token).is_none()
    }
}
