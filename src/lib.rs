//! # triedict
//!
//! A persistent word→translation dictionary backed by a trie over
//! bounded-width integer symbols (`u8`, `u16` or `u32`).
//!
//! Each node stores its sparse child set as a gap list (sorted ranges of
//! absent symbols) next to a dense, rank-indexed array of owned
//! children, so memory scales with the children that exist rather than
//! the alphabet. Dictionaries persist in a compact binary file; loading
//! streams records back through the normal insert path, and prefix
//! queries return a bounded number of matches in ascending symbol order.
pub mod trie;

// Re-export the main types for convenience
pub use trie::{
    bulk::{self, BulkReport},
    codec::{MAX_TRANSLATION_SYMBOLS, MAX_WORD_SYMBOLS},
    gaps::{GapList, GapRange},
    node::TrieNode,
    Result, Symbol, SymbolWidth, Trie, TrieError,
};
