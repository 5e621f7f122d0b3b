//! Symbol alphabet abstraction over the supported integer widths.
//!
//! A dictionary is fixed at construction to one symbol width (1, 2 or 4
//! bytes); the width stored in a dictionary file must match the width of
//! the trie loading it.

use std::fmt;
use std::io::{self, Read, Write};

use byteorder::{BigEndian, ReadBytesExt, WriteBytesExt};

use super::error::TrieError;

/// Byte width of one symbol, on disk and in memory.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SymbolWidth {
    One,
    Two,
    Four,
}

impl SymbolWidth {
    /// Returns the width in bytes, as stored in the file header.
    pub fn bytes(self) -> u8 {
        match self {
            SymbolWidth::One => 1,
            SymbolWidth::Two => 2,
            SymbolWidth::Four => 4,
        }
    }
}

impl TryFrom<u8> for SymbolWidth {
    type Error = TrieError;

    fn try_from(value: u8) -> Result<Self, TrieError> {
        match value {
            1 => Ok(SymbolWidth::One),
            2 => Ok(SymbolWidth::Two),
            4 => Ok(SymbolWidth::Four),
            other => Err(TrieError::UnsupportedSymbolWidth(other)),
        }
    }
}

impl fmt::Display for SymbolWidth {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "{}", self.bytes())
    }
}

/// An integer type usable as the trie alphabet.
///
/// Implemented for `u8`, `u16` and `u32`, giving alphabets of 2^8, 2^16
/// and 2^32 symbols. Values are raw integers; the crate performs no text
/// normalization.
pub trait Symbol: Copy + Eq + Ord + fmt::Debug + 'static {
    /// On-disk width of one symbol.
    const WIDTH: SymbolWidth;
    /// Number of distinct symbol values, `2^(8 * width)`.
    const ALPHABET_SIZE: u64;

    fn as_u64(self) -> u64;

    /// Truncating conversion; callers stay within `ALPHABET_SIZE`.
    fn from_u64(value: u64) -> Self;

    /// Read one big-endian symbol.
    fn read_from<R: Read>(reader: &mut R) -> io::Result<Self>;

    /// Write one big-endian symbol.
    fn write_to<W: Write>(self, writer: &mut W) -> io::Result<()>;
}

impl Symbol for u8 {
    const WIDTH: SymbolWidth = SymbolWidth::One;
    const ALPHABET_SIZE: u64 = 1 << 8;

    fn as_u64(self) -> u64 {
        u64::from(self)
    }

    fn from_u64(value: u64) -> Self {
        value as u8
    }

    fn read_from<R: Read>(reader: &mut R) -> io::Result<Self> {
        reader.read_u8()
    }

    fn write_to<W: Write>(self, writer: &mut W) -> io::Result<()> {
        writer.write_u8(self)
    }
}

impl Symbol for u16 {
    const WIDTH: SymbolWidth = SymbolWidth::Two;
    const ALPHABET_SIZE: u64 = 1 << 16;

    fn as_u64(self) -> u64 {
        u64::from(self)
    }

    fn from_u64(value: u64) -> Self {
        value as u16
    }

    fn read_from<R: Read>(reader: &mut R) -> io::Result<Self> {
        reader.read_u16::<BigEndian>()
    }

    fn write_to<W: Write>(self, writer: &mut W) -> io::Result<()> {
        writer.write_u16::<BigEndian>(self)
    }
}

impl Symbol for u32 {
    const WIDTH: SymbolWidth = SymbolWidth::Four;
    const ALPHABET_SIZE: u64 = 1 << 32;

    fn as_u64(self) -> u64 {
        u64::from(self)
    }

    fn from_u64(value: u64) -> Self {
        value as u32
    }

    fn read_from<R: Read>(reader: &mut R) -> io::Result<Self> {
        reader.read_u32::<BigEndian>()
    }

    fn write_to<W: Write>(self, writer: &mut W) -> io::Result<()> {
        writer.write_u32::<BigEndian>(self)
    }
}
