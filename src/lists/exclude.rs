//! Exclusion set - bare filenames skipped during traversal

use std::collections::HashSet;
use std::path::Path;
use tracing::debug;

use crate::core::model::IndexError;
use crate::core::paths::bare_name;
use crate::lists::read_lines;

/// Append-only set of filenames, matched exactly against an entry's bare name
#[derive(Debug, Clone, Default)]
pub struct ExclusionSet {
    names: HashSet<String>,
}

impl ExclusionSet {
    pub fn new() -> Self {
        Self::default()
    }

    /// Load one filename per line; blank lines are ignored
    pub fn load(path: &Path) -> Result<Self, IndexError> {
        let set: Self = read_lines("exclude", path)?.iter().map(String::as_str).collect();
        debug!(path = %path.display(), entries = set.len(), "loaded exclusion list");
        Ok(set)
    }

    pub fn insert(&mut self, name: &str) {
        let name = name.trim();
        if !name.is_empty() {
            self.names.insert(name.to_string());
        }
    }

    /// Exact match on a bare filename
    pub fn contains(&self, name: &str) -> bool {
        self.names.contains(name)
    }

    /// True if the last component of `path` is excluded
    pub fn excludes(&self, path: &Path) -> bool {
        bare_name(path).is_some_and(|name| self.contains(name))
    }

    pub fn len(&self) -> usize {
        self.names.len()
    }
}

impl<'a> FromIterator<&'a str> for ExclusionSet {
    fn from_iter<I: IntoIterator<Item = &'a str>>(iter: I) -> Self {
        let mut set = Self::new();
        for name in iter {
            set.insert(name);
        }
        set
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;
    use tempfile::tempdir;

    #[test]
    fn test_load_skips_blank_lines() {
        let temp = tempdir().unwrap();
        let list = temp.path().join("exclude.txt");
        fs::write(&list, "a.txt\n\n  b.md  \n").unwrap();

        let set = ExclusionSet::load(&list).unwrap();
        assert_eq!(set.len(), 2);
        assert!(set.contains("a.txt"));
        assert!(set.contains("b.md"));
    }

    #[test]
    fn test_matches_bare_names_only() {
        let set: ExclusionSet = ["a.txt"].into_iter().collect();

        assert!(set.excludes(Path::new("a.txt")));
        assert!(set.excludes(Path::new("deep/dir/a.txt")));
        assert!(!set.excludes(Path::new("a.txt.bak")));
        assert!(!set.excludes(Path::new("A.TXT")));
        assert!(!set.contains("dir/a.txt"));
    }

    #[test]
    fn test_invalid_utf8_line_keeps_rest_of_list() {
        let temp = tempdir().unwrap();
        let list = temp.path().join("exclude.txt");
        fs::write(&list, b"a.txt\n\xffbad\nb.md\n").unwrap();

        let set = ExclusionSet::load(&list).unwrap();
        assert_eq!(set.len(), 2);
        assert!(set.excludes(Path::new("dir/a.txt")));
        assert!(set.excludes(Path::new("b.md")));
    }

    #[test]
    fn test_missing_file_is_config_error() {
        let temp = tempdir().unwrap();
        let err = ExclusionSet::load(&temp.path().join("nope")).unwrap_err();
        assert_eq!(err.code(), "CONFIG_ERROR");
        assert!(!err.is_fatal());
    }
}
