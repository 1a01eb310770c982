//! Run configuration
//!
//! Built once from the command line and passed by reference to every
//! component. Nothing mutates it after construction.

use std::path::PathBuf;

use crate::core::render::OutputFormat;

/// Output file used when `--output` is not given
pub const DEFAULT_OUTPUT: &str = "swordx.out";

/// Path value that selects stdout as the sink
pub const STDOUT_PATH: &str = "-";

/// Immutable settings for one indexing run
#[derive(Debug, Clone)]
pub struct IndexConfig {
    /// Roots to scan, in the order given
    pub inputs: Vec<PathBuf>,

    /// Descend into subdirectories below each root
    pub recursive: bool,

    /// Resolve and enter symbolic links
    pub follow: bool,

    /// Reject tokens containing digits
    pub alpha_only: bool,

    /// Emit the rank-order dump instead of the trie-order dump
    pub sort_by_occurrence: bool,

    /// Minimum accepted token length, 0 disables the check
    pub min_len: usize,

    /// File of bare filenames to skip
    pub exclude: Option<PathBuf>,

    /// File of words that are never counted
    pub ignore: Option<PathBuf>,

    /// Accepted for compatibility, has no effect
    pub log: Option<PathBuf>,

    /// Output sink, `-` for stdout
    pub output: PathBuf,

    /// Record format written to the sink
    pub format: OutputFormat,

    /// Truncate the sink instead of appending to it
    pub truncate: bool,
}

impl Default for IndexConfig {
    fn default() -> Self {
        Self {
            inputs: vec![PathBuf::from(".")],
            recursive: false,
            follow: false,
            alpha_only: false,
            sort_by_occurrence: false,
            min_len: 0,
            exclude: None,
            ignore: None,
            log: None,
            output: PathBuf::from(DEFAULT_OUTPUT),
            format: OutputFormat::default(),
            truncate: false,
        }
    }
}

impl IndexConfig {
    /// True when records go to stdout rather than a file
    pub fn writes_to_stdout(&self) -> bool {
        self.output.as_os_str() == STDOUT_PATH
    }
}
