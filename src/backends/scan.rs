//! File scanning backend
//!
//! Walks every root with walkdir, classifies each entry without following
//! links (unless `--follow`), and feeds regular files through
//! tokenizer -> filter pipeline -> word trie.
//!
//! A failure on one entry is logged, kept in the report and skipped. Only
//! trie errors stop the walk.

use std::collections::HashSet;
use std::fs::{self, File};
use std::io::{self, BufReader};
use std::path::{Path, PathBuf};
use tracing::{debug, warn};
use walkdir::{DirEntry, WalkDir};

use crate::core::config::IndexConfig;
use crate::core::filter::FilterPipeline;
use crate::core::model::{IndexError, ScanReport};
use crate::core::tokenizer::Tokenizer;
use crate::core::trie::WordTrie;
use crate::lists::exclude::ExclusionSet;

/// Traversal state for one run
pub struct Scanner<'a> {
    config: &'a IndexConfig,
    exclusions: &'a ExclusionSet,
    filter: FilterPipeline<'a>,
    /// Canonical paths of directories already entered through `--follow`
    visited: HashSet<PathBuf>,
}

impl<'a> Scanner<'a> {
    pub fn new(
        config: &'a IndexConfig,
        exclusions: &'a ExclusionSet,
        filter: FilterPipeline<'a>,
    ) -> Self {
        Self {
            config,
            exclusions,
            filter,
            visited: HashSet::new(),
        }
    }

    /// Scan every configured root into `trie`
    pub fn scan_all(&mut self, trie: &mut WordTrie) -> Result<ScanReport, IndexError> {
        let mut report = ScanReport::new();
        for root in &self.config.inputs {
            self.scan_root(root, trie, &mut report)?;
        }
        report.distinct_words = trie.len();
        Ok(report)
    }

    /// Scan a single root.
    ///
    /// The root itself is always processed. Below it, subdirectories are only
    /// entered with `--recursive`, and symlinks only with `--follow`.
    pub fn scan_root(
        &mut self,
        root: &Path,
        trie: &mut WordTrie,
        report: &mut ScanReport,
    ) -> Result<(), IndexError> {
        let mut walker = WalkDir::new(root)
            .follow_links(self.config.follow)
            .follow_root_links(self.config.follow)
            .sort_by_file_name();
        if !self.config.recursive {
            walker = walker.max_depth(1);
        }

        let mut entries = walker.into_iter();
        while let Some(next) = entries.next() {
            let entry = match next {
                Ok(entry) => entry,
                Err(err) => {
                    note(report, classify_walk_error(err));
                    continue;
                }
            };

            let path = entry.path();
            let file_type = entry.file_type();

            if file_type.is_dir() {
                if !self.config.recursive && entry.depth() > 0 {
                    debug!(path = %path.display(), "directory skipped, recursion disabled");
                    report.dirs_skipped += 1;
                    continue;
                }
                if self.config.follow {
                    match self.first_visit(path) {
                        Ok(true) => {}
                        Ok(false) => {
                            debug!(path = %path.display(), "directory already indexed, skipped");
                            report.dirs_revisited += 1;
                            entries.skip_current_dir();
                            continue;
                        }
                        Err(err) => {
                            note(report, err);
                            entries.skip_current_dir();
                            continue;
                        }
                    }
                }
                debug!(path = %path.display(), "entering directory");
            } else if file_type.is_file() {
                if self.is_excluded(&entry) {
                    debug!(path = %path.display(), "file excluded");
                    report.files_excluded += 1;
                    continue;
                }
                match index_file(path, &self.filter, trie, report) {
                    Ok(()) => report.files_indexed += 1,
                    Err(err) if err.is_fatal() => return Err(err),
                    Err(err) => note(report, err),
                }
            } else if file_type.is_symlink() {
                debug!(path = %path.display(), "symlink skipped, follow disabled");
                report.links_skipped += 1;
            } else {
                note(
                    report,
                    IndexError::UnknownEntryType {
                        path: path.to_path_buf(),
                    },
                );
            }
        }

        Ok(())
    }

    /// A followed link is excluded under its own name or its target's name
    fn is_excluded(&self, entry: &DirEntry) -> bool {
        if self.exclusions.excludes(entry.path()) {
            return true;
        }
        entry.path_is_symlink()
            && fs::canonicalize(entry.path())
                .is_ok_and(|target| self.exclusions.excludes(&target))
    }

    /// Record a directory's canonical path; false if it was seen before
    fn first_visit(&mut self, path: &Path) -> Result<bool, IndexError> {
        let canonical = fs::canonicalize(path).map_err(|source| IndexError::PathResolution {
            path: path.to_path_buf(),
            source,
        })?;
        Ok(self.visited.insert(canonical))
    }
}

/// Tokenize one file into the trie.
///
/// The file handle is owned by this call and closed on every exit path.
/// Tokens counted before a read error stay counted.
pub fn index_file(
    path: &Path,
    filter: &FilterPipeline<'_>,
    trie: &mut WordTrie,
    report: &mut ScanReport,
) -> Result<(), IndexError> {
    let file = File::open(path).map_err(|source| IndexError::Open {
        path: path.to_path_buf(),
        source,
    })?;

    for token in Tokenizer::new(BufReader::new(file)) {
        let token = token.map_err(|source| IndexError::Stream {
            path: path.to_path_buf(),
            source,
        })?;

        report.tokens_seen += 1;
        match filter.check(&token) {
            Some(reason) => report.reject(reason),
            None => {
                trie.insert_or_increment(&token)?;
                report.tokens_accepted += 1;
            }
        }
    }

    debug!(path = %path.display(), "file indexed");
    Ok(())
}

/// Log a non-fatal error and keep it in the report
fn note(report: &mut ScanReport, err: IndexError) {
    warn!(code = err.code(), "{}", err);
    report.record(err);
}

fn classify_walk_error(err: walkdir::Error) -> IndexError {
    let path = err.path().map(Path::to_path_buf).unwrap_or_default();

    if let Some(ancestor) = err.loop_ancestor() {
        return IndexError::SymlinkCycle {
            ancestor: ancestor.to_path_buf(),
            path,
        };
    }

    let is_link = fs::symlink_metadata(&path)
        .map(|meta| meta.file_type().is_symlink())
        .unwrap_or(false);
    let is_dir = path.is_dir();
    let source = err
        .into_io_error()
        .unwrap_or_else(|| io::Error::new(io::ErrorKind::Other, "walk failed"));

    if is_link {
        IndexError::PathResolution { path, source }
    } else if is_dir {
        IndexError::Directory { path, source }
    } else {
        IndexError::Open { path, source }
    }
}
