//! Ignore index - words that are never counted
//!
//! A separate `WordTrie` used as a set: only the terminal flag matters.

use std::path::Path;
use tracing::{debug, warn};

use crate::core::model::IndexError;
use crate::core::tokenizer::normalize_word;
use crate::core::trie::WordTrie;
use crate::lists::read_lines;

/// Load one word per line into a fresh trie.
///
/// Words are case-folded. Lines that are not a single `[0-9A-Za-z]` word
/// could never match a token, so they are reported and skipped.
pub fn load_ignore_index(path: &Path) -> Result<WordTrie, IndexError> {
    let lines = read_lines("ignore", path)?;
    let index = build_ignore_index(lines.iter().map(String::as_str))?;
    debug!(path = %path.display(), words = index.len(), "loaded ignore list");
    Ok(index)
}

/// Build an ignore index from raw lines
pub fn build_ignore_index<'a, I>(lines: I) -> Result<WordTrie, IndexError>
where
    I: IntoIterator<Item = &'a str>,
{
    let mut index = WordTrie::new();
    for (lineno, line) in lines.into_iter().enumerate() {
        if line.trim().is_empty() {
            continue;
        }
        match normalize_word(line) {
            Some(word) => index.insert_member(&word)?,
            None => warn!(line = lineno + 1, entry = line, "ignore entry is not a single word, skipped"),
        }
    }
    Ok(index)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;
    use tempfile::tempdir;

    #[test]
    fn test_load_case_folds() {
        let temp = tempdir().unwrap();
        let list = temp.path().join("ignore.txt");
        fs::write(&list, "Dog\nTHE\n\n").unwrap();

        let index = load_ignore_index(&list).unwrap();
        assert!(index.contains("dog"));
        assert!(index.contains("the"));
        assert_eq!(index.len(), 2);
    }

    #[test]
    fn test_invalid_entries_are_skipped() {
        let index = build_ignore_index(["it's", "two words", "ok"]).unwrap();
        assert_eq!(index.len(), 1);
        assert!(index.contains("ok"));
    }

    #[test]
    fn test_prefix_of_ignored_word_is_not_ignored() {
        let index = build_ignore_index(["category"]).unwrap();
        assert!(!index.contains("cat"));
    }

    #[test]
    fn test_missing_file_is_config_error() {
        let temp = tempdir().unwrap();
        let err = load_ignore_index(&temp.path().join("nope")).unwrap_err();
        assert_eq!(err.code(), "CONFIG_ERROR");
    }
}
