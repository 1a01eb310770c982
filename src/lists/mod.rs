//! Operator-supplied word and filename lists
//!
//! Both lists are read once before traversal starts and are read-only
//! afterwards:
//! - exclude: bare filenames that are never opened
//! - ignore: words that are never counted

pub mod exclude;
pub mod ignore;

use std::fs::File;
use std::io::{BufRead, BufReader};
use std::path::Path;
use tracing::warn;

use crate::core::model::IndexError;

/// Read every line of a list file, reporting failures as config errors.
///
/// Lines that are not valid UTF-8 can never match a token or filename; they
/// are skipped with a warning and the rest of the list is kept.
fn read_lines(role: &'static str, path: &Path) -> Result<Vec<String>, IndexError> {
    let config_error = |source: std::io::Error| IndexError::Config {
        role,
        path: path.to_path_buf(),
        source,
    };

    let file = File::open(path).map_err(config_error)?;
    let mut lines = Vec::new();
    for (index, line) in BufReader::new(file).split(b'\n').enumerate() {
        let mut line = line.map_err(config_error)?;
        if line.last() == Some(&b'\r') {
            line.pop();
        }
        match String::from_utf8(line) {
            Ok(line) => lines.push(line),
            Err(_) => warn!(
                list = role,
                path = %path.display(),
                line = index + 1,
                "skipping list entry that is not valid UTF-8"
            ),
        }
    }
    Ok(lines)
}
