//! Word trie - arena-backed prefix tree mapping normalized words to counts
//!
//! Nodes live in a single contiguous `Vec` and refer to their children by
//! index. The root is always slot 0, so a child link of `0` means "absent".
//! Child slots are ordered by byte value (`0-9` before `a-z`), which makes a
//! depth-first walk yield words in plain lexicographic order.
//!
//! The same type backs both the word index and the ignore list; the two are
//! independent instances and share nothing.

use thiserror::Error;

/// Number of characters in the recognized alphabet (digits + lowercase letters)
pub const ALPHABET_SIZE: usize = 36;

/// Index of a node inside the arena
type NodeId = u32;

/// Link value used for a missing child (the root can never be a child)
const NO_CHILD: NodeId = 0;

/// Errors raised while growing the trie. All of them abort the run.
#[derive(Debug, Error)]
pub enum TrieError {
    #[error("cannot index an empty word")]
    EmptyWord,

    #[error("word {word:?} contains {ch:?}, which is outside the [0-9a-z] alphabet")]
    UnsupportedChar { word: String, ch: char },

    #[error("trie node arena is full ({nodes} nodes)")]
    CapacityExceeded { nodes: usize },
}

/// Map a character to its child slot, or `None` if it is not in the alphabet
#[inline]
pub fn slot_of(c: char) -> Option<usize> {
    match c {
        '0'..='9' => Some(c as usize - '0' as usize),
        'a'..='z' => Some(10 + (c as usize - 'a' as usize)),
        _ => None,
    }
}

/// Inverse of [`slot_of`]
#[inline]
fn char_of(slot: usize) -> char {
    if slot < 10 {
        (b'0' + slot as u8) as char
    } else {
        (b'a' + (slot - 10) as u8) as char
    }
}

#[derive(Debug, Clone)]
struct TrieNode {
    children: [NodeId; ALPHABET_SIZE],
    count: u64,
    terminal: bool,
}

impl TrieNode {
    fn new() -> Self {
        Self {
            children: [NO_CHILD; ALPHABET_SIZE],
            count: 0,
            terminal: false,
        }
    }
}

/// Prefix tree over `[0-9a-z]` with a per-word occurrence counter
#[derive(Debug, Clone)]
pub struct WordTrie {
    nodes: Vec<TrieNode>,
    words: usize,
}

impl Default for WordTrie {
    fn default() -> Self {
        Self::new()
    }
}

impl WordTrie {
    /// Create a trie holding only the root node
    pub fn new() -> Self {
        Self {
            nodes: vec![TrieNode::new()],
            words: 0,
        }
    }

    /// Insert `word`, or bump its counter if already present.
    ///
    /// Missing nodes along the path are created. Returns the new count.
    /// The word must already be case-folded and restricted to `[0-9a-z]`.
    pub fn insert_or_increment(&mut self, word: &str) -> Result<u64, TrieError> {
        if word.is_empty() {
            return Err(TrieError::EmptyWord);
        }

        let mut node = 0usize;
        for ch in word.chars() {
            let slot = slot_of(ch).ok_or_else(|| TrieError::UnsupportedChar {
                word: word.to_string(),
                ch,
            })?;

            let child = self.nodes[node].children[slot];
            node = if child == NO_CHILD {
                let id = self.allocate()?;
                self.nodes[node].children[slot] = id;
                id as usize
            } else {
                child as usize
            };
        }

        let terminal = &mut self.nodes[node];
        if !terminal.terminal {
            terminal.terminal = true;
            self.words += 1;
        }
        terminal.count += 1;
        Ok(terminal.count)
    }

    /// Insert a word for set membership only (counter left untouched on repeats)
    pub fn insert_member(&mut self, word: &str) -> Result<(), TrieError> {
        if !self.contains(word) {
            self.insert_or_increment(word)?;
        }
        Ok(())
    }

    /// True only if `word` was inserted as a word in its own right
    pub fn contains(&self, word: &str) -> bool {
        self.find(word)
            .map(|node| self.nodes[node].terminal)
            .unwrap_or(false)
    }

    /// Occurrence count for `word` (0 when absent)
    #[allow(dead_code)]
    pub fn count(&self, word: &str) -> u64 {
        self.find(word)
            .filter(|&node| self.nodes[node].terminal)
            .map(|node| self.nodes[node].count)
            .unwrap_or(0)
    }

    /// Number of distinct words stored
    pub fn len(&self) -> usize {
        self.words
    }

    #[allow(dead_code)]
    pub fn is_empty(&self) -> bool {
        self.words == 0
    }

    /// Number of allocated nodes, root included
    #[allow(dead_code)]
    pub fn node_count(&self) -> usize {
        self.nodes.len()
    }

    /// Depth-first walk in lexicographic order, calling `visit(word, count)`
    /// once per stored word.
    pub fn traverse<F>(&self, mut visit: F)
    where
        F: FnMut(&str, u64),
    {
        for (word, count) in self.iter() {
            visit(&word, count);
        }
    }

    /// Lexicographic iterator over `(word, count)` pairs
    pub fn iter(&self) -> Iter<'_> {
        Iter {
            trie: self,
            stack: vec![Frame {
                node: 0,
                next_slot: 0,
            }],
            prefix: String::new(),
        }
    }

    fn find(&self, word: &str) -> Option<usize> {
        if word.is_empty() {
            return None;
        }
        let mut node = 0usize;
        for ch in word.chars() {
            let child = self.nodes[node].children[slot_of(ch)?];
            if child == NO_CHILD {
                return None;
            }
            node = child as usize;
        }
        Some(node)
    }

    fn allocate(&mut self) -> Result<NodeId, TrieError> {
        let id = NodeId::try_from(self.nodes.len()).map_err(|_| TrieError::CapacityExceeded {
            nodes: self.nodes.len(),
        })?;
        self.nodes.push(TrieNode::new());
        Ok(id)
    }
}

struct Frame {
    node: usize,
    next_slot: usize,
}

/// Iterator returned by [`WordTrie::iter`]
///
/// Uses an explicit stack, so word length never grows the call stack.
pub struct Iter<'a> {
    trie: &'a WordTrie,
    stack: Vec<Frame>,
    prefix: String,
}

impl Iterator for Iter<'_> {
    type Item = (String, u64);

    fn next(&mut self) -> Option<Self::Item> {
        while let Some(frame) = self.stack.last_mut() {
            let children = &self.trie.nodes[frame.node].children;
            let next = (frame.next_slot..ALPHABET_SIZE).find(|&s| children[s] != NO_CHILD);

            match next {
                Some(slot) => {
                    frame.next_slot = slot + 1;
                    let child = children[slot] as usize;
                    self.prefix.push(char_of(slot));
                    self.stack.push(Frame {
                        node: child,
                        next_slot: 0,
                    });

                    let node = &self.trie.nodes[child];
                    if node.terminal {
                        return Some((self.prefix.clone(), node.count));
                    }
                }
                None => {
                    self.stack.pop();
                    self.prefix.pop();
                }
            }
        }
        None
    }
}
