//! Line-oriented bulk import/export of `word,translation` pairs.
//!
//! This is the text boundary: the trie core stays raw-integer, and chars
//! map to symbols here, one Unicode code point per symbol, bounds-checked
//! against the alphabet. The first comma on a line separates word from
//! translation; lines without one are skipped, never fatal.

use std::fs::File;
use std::io::{BufRead, BufReader, BufWriter, Write};
use std::ops::ControlFlow;
use std::path::Path;

use log::{debug, warn};

use super::error::{Result, TrieError};
use super::symbol::Symbol;
use super::trie::Trie;

/// Outcome counts of a bulk import or bulk delete.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub struct BulkReport {
    /// Lines applied to the trie.
    pub applied: usize,
    /// Lines skipped: no separator, unmappable text, duplicates, misses.
    pub skipped: usize,
}

/// Map text to a symbol sequence, one code point per symbol.
///
/// Returns `None` when a code point does not fit the alphabet or equals
/// the reserved terminator.
pub fn encode_text<S: Symbol>(text: &str, terminator: S) -> Option<Vec<S>> {
    let mut symbols = Vec::with_capacity(text.len());
    for ch in text.chars() {
        let value = u64::from(u32::from(ch));
        if value >= S::ALPHABET_SIZE {
            return None;
        }
        let symbol = S::from_u64(value);
        if symbol == terminator {
            return None;
        }
        symbols.push(symbol);
    }
    Some(symbols)
}

/// Map a symbol sequence back to text.
///
/// Symbols with no valid scalar value render as U+FFFD.
pub fn decode_text<S: Symbol>(symbols: &[S]) -> String {
    symbols
        .iter()
        .map(|s| char::from_u32(s.as_u64() as u32).unwrap_or(char::REPLACEMENT_CHARACTER))
        .collect()
}

/// Add every `word,translation` line of the file at `path` to the trie.
///
/// Malformed lines and duplicate words are counted and skipped; only I/O
/// failures abort the import.
pub fn import_pairs<S: Symbol>(trie: &mut Trie<S>, path: impl AsRef<Path>) -> Result<BulkReport> {
    let path = path.as_ref();
    let reader = open_lines(path)?;

    let mut report = BulkReport::default();
    for (number, line) in reader.lines().enumerate() {
        let line = line?;
        let Some((word, translation)) = line.split_once(',') else {
            warn!("{}:{}: no separator, line skipped", path.display(), number + 1);
            report.skipped += 1;
            continue;
        };
        let terminator = trie.terminator();
        let encoded = encode_text(word, terminator).zip(encode_text(translation, terminator));
        let Some((word, translation)) = encoded else {
            warn!(
                "{}:{}: text does not fit the alphabet, line skipped",
                path.display(),
                number + 1
            );
            report.skipped += 1;
            continue;
        };
        match trie.add_word(&word, &translation) {
            Ok(()) => report.applied += 1,
            Err(e) => {
                debug!("{}:{}: {}, line skipped", path.display(), number + 1, e);
                report.skipped += 1;
            }
        }
    }
    debug!(
        "imported {} pairs from {} ({} skipped)",
        report.applied,
        path.display(),
        report.skipped
    );
    Ok(report)
}

/// Delete the word of every `word,translation` line of the file at
/// `path`; the translation column is ignored. Mainly a debugging aid.
pub fn delete_pairs<S: Symbol>(trie: &mut Trie<S>, path: impl AsRef<Path>) -> Result<BulkReport> {
    let path = path.as_ref();
    let reader = open_lines(path)?;

    let mut report = BulkReport::default();
    for (number, line) in reader.lines().enumerate() {
        let line = line?;
        let Some((word, _translation)) = line.split_once(',') else {
            warn!("{}:{}: no separator, line skipped", path.display(), number + 1);
            report.skipped += 1;
            continue;
        };
        let Some(word) = encode_text(word, trie.terminator()) else {
            report.skipped += 1;
            continue;
        };
        match trie.delete_word(&word) {
            Some(_) => report.applied += 1,
            None => report.skipped += 1,
        }
    }
    Ok(report)
}

/// Write every stored pair to `path` as a `word,translation` line, in
/// ascending symbol order. Returns the number of lines written.
pub fn export_pairs<S: Symbol>(trie: &Trie<S>, path: impl AsRef<Path>) -> Result<usize> {
    let path = path.as_ref();
    let file = File::create(path).map_err(|e| TrieError::FileOpen {
        path: path.to_path_buf(),
        source: e,
    })?;
    let mut writer = BufWriter::new(file);

    let mut written = 0usize;
    let flow = trie.for_each_entry(|word, translation| {
        match writeln!(writer, "{},{}", decode_text(word), decode_text(translation)) {
            Ok(()) => {
                written += 1;
                ControlFlow::Continue(())
            }
            Err(e) => ControlFlow::Break(TrieError::Io(e)),
        }
    });
    if let ControlFlow::Break(e) = flow {
        return Err(e);
    }
    writer.flush()?;
    Ok(written)
}

fn open_lines(path: &Path) -> Result<BufReader<File>> {
    let file = File::open(path).map_err(|e| TrieError::FileOpen {
        path: path.to_path_buf(),
        source: e,
    })?;
    Ok(BufReader::new(file))
}
