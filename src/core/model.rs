//! Shared data model
//!
//! Word records handed to the writer, the error taxonomy, and the per-run
//! report that collects every non-fatal diagnostic.

use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use std::path::PathBuf;
use thiserror::Error;

use crate::core::filter::Rejection;
use crate::core::trie::TrieError;

/// One word and its occurrence count, produced while writing or ranking
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct WordRecord {
    pub word: String,
    pub count: u64,
}

impl WordRecord {
    pub fn new(word: impl Into<String>, count: u64) -> Self {
        Self {
            word: word.into(),
            count,
        }
    }
}

impl From<(String, u64)> for WordRecord {
    fn from((word, count): (String, u64)) -> Self {
        Self { word, count }
    }
}

/// Everything that can go wrong during a run
#[derive(Debug, Error)]
pub enum IndexError {
    /// An exclude, ignore or output file could not be opened
    #[error("cannot open {role} file {path:?}: {source}")]
    Config {
        role: &'static str,
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("cannot open {path:?}: {source}")]
    Open {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// A file became unreadable part way through
    #[error("read error in {path:?}: {source}")]
    Stream {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("cannot read directory {path:?}: {source}")]
    Directory {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// A followed symlink does not resolve
    #[error("cannot resolve link {path:?}: {source}")]
    PathResolution {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("link {path:?} loops back to {ancestor:?}")]
    SymlinkCycle { path: PathBuf, ancestor: PathBuf },

    #[error("{path:?} is neither a directory, a regular file nor a symlink")]
    UnknownEntryType { path: PathBuf },

    #[error(transparent)]
    Trie(#[from] TrieError),
}

impl IndexError {
    /// Stable identifier used in diagnostics
    pub fn code(&self) -> &'static str {
        match self {
            IndexError::Config { .. } => "CONFIG_ERROR",
            IndexError::Open { .. } => "OPEN_ERROR",
            IndexError::Stream { .. } => "STREAM_ERROR",
            IndexError::Directory { .. } => "DIRECTORY_ERROR",
            IndexError::PathResolution { .. } => "PATH_RESOLUTION_ERROR",
            IndexError::SymlinkCycle { .. } => "SYMLINK_CYCLE",
            IndexError::UnknownEntryType { .. } => "UNKNOWN_ENTRY_TYPE",
            IndexError::Trie(_) => "TRIE_ERROR",
        }
    }

    /// Fatal errors abort the run; everything else skips one entry
    pub fn is_fatal(&self) -> bool {
        matches!(self, IndexError::Trie(_))
    }
}

/// Counters and diagnostics gathered over one run
#[derive(Debug, Default)]
pub struct ScanReport {
    pub files_indexed: usize,
    pub files_excluded: usize,
    /// Symlinks seen while `--follow` is off
    pub links_skipped: usize,
    /// Subdirectories seen while `--recursive` is off
    pub dirs_skipped: usize,
    /// Directories reached a second time through a link
    pub dirs_revisited: usize,
    pub tokens_seen: u64,
    pub tokens_accepted: u64,
    pub tokens_rejected: BTreeMap<Rejection, u64>,
    pub distinct_words: usize,
    pub errors: Vec<IndexError>,
}

impl ScanReport {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn reject(&mut self, reason: Rejection) {
        *self.tokens_rejected.entry(reason).or_insert(0) += 1;
    }

    pub fn rejected(&self, reason: Rejection) -> u64 {
        self.tokens_rejected.get(&reason).copied().unwrap_or(0)
    }

    /// Record a non-fatal error after it has been logged
    pub fn record(&mut self, error: IndexError) {
        self.errors.push(error);
    }

    #[allow(dead_code)]
    pub fn error_codes(&self) -> Vec<&'static str> {
        self.errors.iter().map(IndexError::code).collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io;

    #[test]
    fn test_word_record_serialization() {
        let record = WordRecord::new("dog", 3);
        let json = serde_json::to_string(&record).unwrap();
        assert_eq!(json, r#"{"word":"dog","count":3}"#);
    }

    #[test]
    fn test_word_record_from_pair() {
        let record: WordRecord = ("cat".to_string(), 2).into();
        assert_eq!(record, WordRecord::new("cat", 2));
    }

    #[test]
    fn test_error_codes_and_fatality() {
        let stream = IndexError::Stream {
            path: PathBuf::from("a.txt"),
            source: io::Error::new(io::ErrorKind::Other, "boom"),
        };
        assert_eq!(stream.code(), "STREAM_ERROR");
        assert!(!stream.is_fatal());
        assert!(stream.to_string().contains("a.txt"));

        let trie: IndexError = TrieError::EmptyWord.into();
        assert_eq!(trie.code(), "TRIE_ERROR");
        assert!(trie.is_fatal());
    }

    #[test]
    fn test_report_rejections() {
        let mut report = ScanReport::new();
        report.reject(Rejection::TooShort);
        report.reject(Rejection::TooShort);
        report.reject(Rejection::Ignored);

        assert_eq!(report.rejected(Rejection::TooShort), 2);
        assert_eq!(report.rejected(Rejection::Ignored), 1);
        assert_eq!(report.rejected(Rejection::NonAlphabetic), 0);
    }

    #[test]
    fn test_report_keeps_errors() {
        let mut report = ScanReport::new();
        report.record(IndexError::UnknownEntryType {
            path: PathBuf::from("fifo"),
        });
        assert_eq!(report.error_codes(), vec!["UNKNOWN_ENTRY_TYPE"]);
    }
}
