//! Core module - Contains the fundamental data structures and utilities
//!
//! This module provides:
//! - Run configuration (IndexConfig)
//! - Word records, error taxonomy and run report
//! - The streaming tokenizer and the filter pipeline
//! - The arena-backed word trie
//! - Record rendering for the output sink
//! - Path helpers (bare filename extraction)

pub mod config;
pub mod filter;
pub mod model;
pub mod paths;
pub mod render;
pub mod tokenizer;
pub mod trie;
