//! Binary dictionary encoding: header and record layout.
//!
//! Layout, big-endian, declared here once and used for both read and
//! write:
//!
//! - Header: `symbol_width` u8 (1, 2 or 4), `entry_count` u64.
//! - Record: `word_len` u8, `word_len` symbols (`symbol_width` bytes
//!   each, raw value, no terminator), `translation_len` u16,
//!   `translation_len` symbols.
//!
//! Record order in a file is unconstrained; decoders must not rely on
//! any particular order.

use std::io::{Read, Write};

use byteorder::{BigEndian, ReadBytesExt, WriteBytesExt};

use super::error::{Result, TrieError};
use super::symbol::{Symbol, SymbolWidth};

/// Longest storable word, in symbols (`word_len` is a u8; 255 is reserved).
pub const MAX_WORD_SYMBOLS: usize = 254;

/// Longest storable translation, in symbols (`translation_len` is a u16;
/// 65535 is reserved).
pub const MAX_TRANSLATION_SYMBOLS: usize = 65534;

/// Parsed dictionary file header.
#[derive(Debug, Clone, Copy)]
pub struct DictHeader {
    pub symbol_width: SymbolWidth,
    pub entry_count: u64,
}

pub fn read_header<R: Read>(reader: &mut R) -> Result<DictHeader> {
    let symbol_width = SymbolWidth::try_from(reader.read_u8()?)?;
    let entry_count = reader.read_u64::<BigEndian>()?;
    Ok(DictHeader {
        symbol_width,
        entry_count,
    })
}

pub fn write_header<W: Write>(
    writer: &mut W,
    symbol_width: SymbolWidth,
    entry_count: u64,
) -> Result<()> {
    writer.write_u8(symbol_width.bytes())?;
    writer.write_u64::<BigEndian>(entry_count)?;
    Ok(())
}

/// Read one `(word, translation)` record.
///
/// Length fields outside `1..=MAX` are corruption, not I/O errors.
pub fn read_record<S: Symbol, R: Read>(reader: &mut R) -> Result<(Vec<S>, Vec<S>)> {
    let word_len = reader.read_u8()? as usize;
    if word_len == 0 || word_len > MAX_WORD_SYMBOLS {
        return Err(TrieError::CorruptRecord(format!(
            "word length {word_len} outside 1..={MAX_WORD_SYMBOLS}"
        )));
    }
    let word = read_symbols(reader, word_len)?;

    let translation_len = reader.read_u16::<BigEndian>()? as usize;
    if translation_len == 0 || translation_len > MAX_TRANSLATION_SYMBOLS {
        return Err(TrieError::CorruptRecord(format!(
            "translation length {translation_len} outside 1..={MAX_TRANSLATION_SYMBOLS}"
        )));
    }
    let translation = read_symbols(reader, translation_len)?;

    Ok((word, translation))
}

/// Write one `(word, translation)` record.
///
/// Lengths must already satisfy the `MAX_*` bounds; the trie validates
/// them on insert.
pub fn write_record<S: Symbol, W: Write>(
    writer: &mut W,
    word: &[S],
    translation: &[S],
) -> Result<()> {
    debug_assert!((1..=MAX_WORD_SYMBOLS).contains(&word.len()));
    debug_assert!((1..=MAX_TRANSLATION_SYMBOLS).contains(&translation.len()));

    writer.write_u8(word.len() as u8)?;
    for &symbol in word {
        symbol.write_to(writer)?;
    }
    writer.write_u16::<BigEndian>(translation.len() as u16)?;
    for &symbol in translation {
        symbol.write_to(writer)?;
    }
    Ok(())
}

fn read_symbols<S: Symbol, R: Read>(reader: &mut R, len: usize) -> Result<Vec<S>> {
    let mut symbols = Vec::with_capacity(len);
    for _ in 0..len {
        symbols.push(S::read_from(reader)?);
    }
    Ok(symbols)
}
