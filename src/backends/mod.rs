//! Backends module - Filesystem access
//!
//! Provides:
//! - scan: Root traversal with walkdir, feeding files into the word trie

pub mod scan;
