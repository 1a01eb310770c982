//! Path helpers

use std::path::Path;

/// Bare filename of a path, as matched against the exclusion list
pub fn bare_name(path: &Path) -> Option<&str> {
    path.file_name().and_then(|name| name.to_str())
}
