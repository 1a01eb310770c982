//! Flows module - Complete runs built from the core pieces
//!
//! Provides:
//! - index: Load lists, walk roots, write the index
//! - rank: Order words by descending occurrence count

pub mod index;
pub mod rank;
