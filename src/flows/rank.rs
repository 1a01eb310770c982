//! Occurrence ranker - words ordered by descending count

use crate::core::model::WordRecord;
use crate::core::trie::WordTrie;

/// Drain the trie into records sorted by descending count.
///
/// The sort is stable and the trie enumerates lexicographically, so words
/// with equal counts stay in alphabetical order.
pub fn rank_by_occurrence(trie: &WordTrie) -> Vec<WordRecord> {
    let mut records = Vec::with_capacity(trie.len());
    trie.traverse(|word, count| records.push(WordRecord::new(word, count)));
    records.sort_by(|a, b| b.count.cmp(&a.count));
    records
}

#[cfg(test)]
mod tests {
    use super::*;

    fn trie_from(words: &[&str]) -> WordTrie {
        let mut trie = WordTrie::new();
        for word in words {
            trie.insert_or_increment(word).unwrap();
        }
        trie
    }

    #[test]
    fn test_rank_orders_by_count() {
        let trie = trie_from(&["cat", "cat", "dog", "dog", "dog"]);
        let ranked = rank_by_occurrence(&trie);
        assert_eq!(
            ranked,
            vec![WordRecord::new("dog", 3), WordRecord::new("cat", 2)]
        );
    }

    #[test]
    fn test_ties_keep_lexicographic_order() {
        let trie = trie_from(&["pear", "apple", "zebra", "mango", "mango", "kiwi"]);
        let ranked: Vec<_> = rank_by_occurrence(&trie)
            .into_iter()
            .map(|r| r.word)
            .collect();
        assert_eq!(ranked, vec!["mango", "apple", "kiwi", "pear", "zebra"]);
    }

    #[test]
    fn test_counts_never_increase() {
        let trie = trie_from(&["a", "b", "b", "c", "c", "c", "d", "e", "e"]);
        let ranked = rank_by_occurrence(&trie);
        assert!(ranked.windows(2).all(|w| w[0].count >= w[1].count));
        assert_eq!(ranked.len(), trie.len());
    }

    #[test]
    fn test_empty_trie_ranks_to_nothing() {
        assert!(rank_by_occurrence(&WordTrie::new()).is_empty());
    }
}
