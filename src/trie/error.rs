//! Custom error types for dictionary operations.

use std::path::PathBuf;

use thiserror::Error;

use super::codec::{MAX_TRANSLATION_SYMBOLS, MAX_WORD_SYMBOLS};

/// The primary error type for all operations in this crate.
///
/// Domain misses (searching or deleting a word that is not stored) are not
/// errors; those operations return `Option` instead.
#[derive(Debug, Error)]
pub enum TrieError {
    /// An error originating from I/O operations.
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// The dictionary file could not be opened or created.
    #[error("error opening dictionary file {path}: {source}")]
    FileOpen {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// The file stores a different symbol width than the trie uses.
    #[error("dictionary {path} stores {actual}-byte symbols, this trie uses {expected}-byte symbols")]
    FileFormatMismatch {
        path: PathBuf,
        expected: u8,
        actual: u8,
    },

    /// The width field in a file header is not one of 1, 2 or 4.
    #[error("unsupported symbol width {0}, must be 1, 2 or 4 bytes")]
    UnsupportedSymbolWidth(u8),

    /// A save was requested on a trie with no backing file.
    #[error("no dictionary file is bound to this trie")]
    DictionaryNotConfigured,

    /// The word does not fit the record format.
    #[error("word of {0} symbols exceeds the maximum of {MAX_WORD_SYMBOLS}")]
    WordTooLong(usize),

    /// The translation does not fit the record format.
    #[error("translation of {0} symbols exceeds the maximum of {MAX_TRANSLATION_SYMBOLS}")]
    TranslationTooLong(usize),

    /// Words and translations must contain at least one symbol.
    #[error("words and translations must contain at least one symbol")]
    EmptyWord,

    /// The sequence contains the reserved terminator symbol.
    #[error("sequence contains the reserved terminator symbol")]
    ReservedSymbol,

    /// The word already has a stored translation.
    #[error("word already has a stored translation")]
    DuplicateWord,

    /// A stored record is structurally invalid or duplicates another.
    #[error("malformed dictionary record: {0}")]
    CorruptRecord(String),
}

/// A convenience `Result` type alias using the crate's `TrieError` type.
pub type Result<T> = std::result::Result<T, TrieError>;
