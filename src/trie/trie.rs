//! Word-level trie operations and persistence orchestration.

use std::fs::File;
use std::io::{self, BufReader, BufWriter, Read, Write};
use std::ops::ControlFlow;
use std::path::{Path, PathBuf};

use log::{debug, info};

use super::codec::{self, MAX_TRANSLATION_SYMBOLS, MAX_WORD_SYMBOLS};
use super::error::{Result, TrieError};
use super::node::TrieNode;
use super::symbol::Symbol;

/// A persistent word→translation dictionary over symbols of type `S`.
///
/// Words and translations are non-empty sequences of raw integer symbols.
/// The trie owns its node tree exclusively; all operations are
/// synchronous and run to completion. Callers sharing a trie across
/// threads must serialize access externally.
///
/// # Example
/// ```no_run
/// # use triedict::Trie;
/// let mut trie: Trie<u8> = Trie::open("dictionaries/en-es")?;
/// trie.add_word(b"cat", b"gato")?;
/// assert_eq!(trie.search_word(b"cat"), Some(&b"gato"[..]));
/// trie.save_changes()?;
/// # Ok::<(), triedict::TrieError>(())
/// ```
#[derive(Debug)]
pub struct Trie<S: Symbol = u8> {
    root: TrieNode<S>,
    entry_count: u64,
    source_path: Option<PathBuf>,
    save_on_close: bool,
    terminator: S,
}

impl<S: Symbol> Trie<S> {
    /// An empty in-memory trie with no backing file.
    pub fn new() -> Self {
        Self {
            root: TrieNode::new(),
            entry_count: 0,
            source_path: None,
            save_on_close: false,
            terminator: S::from_u64(0),
        }
    }

    /// Use `terminator` as the reserved end-marker symbol instead of 0.
    ///
    /// The terminator is never storable as a data symbol; sequences
    /// containing it are rejected.
    pub fn with_terminator(mut self, terminator: S) -> Self {
        self.terminator = terminator;
        self
    }

    /// Open the dictionary at `path`, creating an empty file when none
    /// exists.
    ///
    /// An existing file is validated against this trie's symbol width and
    /// streamed record-by-record through the normal insert path.
    ///
    /// # Errors
    /// Returns an error if:
    /// - the file cannot be opened or created
    /// - the stored symbol width differs from `S` ([`TrieError::FileFormatMismatch`])
    /// - a record is malformed or duplicates an earlier one
    ///   ([`TrieError::CorruptRecord`]); a well-formed file written by
    ///   this crate never contains duplicates, so one is corruption, not
    ///   something to skip
    pub fn open(path: impl AsRef<Path>) -> Result<Self> {
        Self::open_with_terminator(path, S::from_u64(0))
    }

    /// Like [`open`](Trie::open), for dictionaries using a non-default
    /// terminator symbol.
    ///
    /// The terminator is trie configuration, not part of the file format;
    /// a dictionary written with a custom terminator must be reopened
    /// with the same one, or records using the default terminator's value
    /// as data are rejected as corrupt.
    pub fn open_with_terminator(path: impl AsRef<Path>, terminator: S) -> Result<Self> {
        let path = path.as_ref();
        let mut trie = Self::new().with_terminator(terminator);
        trie.source_path = Some(path.to_path_buf());

        match File::open(path) {
            Ok(file) => {
                info!("loading dictionary {}", path.display());
                trie.load_from(&mut BufReader::new(file), path)?;
            }
            Err(e) if e.kind() == io::ErrorKind::NotFound => {
                info!("dictionary {} not found, creating it", path.display());
                trie.create_empty_file(path)?;
            }
            Err(e) => {
                return Err(TrieError::FileOpen {
                    path: path.to_path_buf(),
                    source: e,
                })
            }
        }
        Ok(trie)
    }

    /// Translation stored for `word`, if any. Never mutates.
    pub fn search_word(&self, word: &[S]) -> Option<&[S]> {
        let mut node = &self.root;
        for &symbol in word {
            node = node.child(symbol)?;
        }
        node.translation()
    }

    /// Store `translation` under `word`.
    ///
    /// Walks as far as existing nodes allow, then materializes the
    /// missing suffix. Fails with [`TrieError::DuplicateWord`], without
    /// mutating the trie, when the word already has a translation.
    ///
    /// # Errors
    /// [`TrieError::WordTooLong`] / [`TrieError::TranslationTooLong`] when
    /// a sequence exceeds the record format, [`TrieError::EmptyWord`] for
    /// empty sequences, [`TrieError::ReservedSymbol`] when one contains
    /// the terminator.
    pub fn add_word(&mut self, word: &[S], translation: &[S]) -> Result<()> {
        self.check_word(word)?;
        self.check_translation(translation)?;

        let mut node = &mut self.root;
        for &symbol in word {
            node = node.insert_child(symbol);
        }
        if node.translation().is_some() {
            return Err(TrieError::DuplicateWord);
        }
        node.set_translation(Some(translation.to_vec()));
        self.entry_count += 1;
        Ok(())
    }

    /// Remove `word`, returning its stored translation.
    ///
    /// After the translation is cleared, every ancestor left with no
    /// children and no translation is pruned bottom-up; the cascade stops
    /// at the first still-populated node, and the root always stays.
    pub fn delete_word(&mut self, word: &[S]) -> Option<Vec<S>> {
        if word.is_empty() {
            return None;
        }
        let removed = Self::delete_below(&mut self.root, word)?;
        self.entry_count -= 1;
        debug!("deleted a {}-symbol word", word.len());
        Some(removed)
    }

    // Recursive unwind of the delete path: the frame holding the parent
    // removes the child exactly when the child came back prunable. The
    // root has no parent frame, so it is never removed.
    fn delete_below(node: &mut TrieNode<S>, word: &[S]) -> Option<Vec<S>> {
        let Some((&symbol, rest)) = word.split_first() else {
            return node.set_translation(None);
        };
        let (removed, prune) = {
            let child = node.child_mut(symbol)?;
            let removed = Self::delete_below(child, rest)?;
            let prune = child.is_empty();
            (removed, prune)
        };
        if prune {
            node.remove_child(symbol);
        }
        Some(removed)
    }

    /// Up to `limit` stored words starting with `prefix`, in ascending
    /// symbol order.
    ///
    /// A stored word equal to the prefix comes first. An absent prefix or
    /// a zero limit yields nothing.
    pub fn get_prefix_words(&self, prefix: &[S], limit: usize) -> Vec<Vec<S>> {
        if limit == 0 {
            return Vec::new();
        }
        let mut node = &self.root;
        for &symbol in prefix {
            match node.child(symbol) {
                Some(child) => node = child,
                None => return Vec::new(),
            }
        }

        let mut words = Vec::new();
        let mut path = prefix.to_vec();
        let _ = node.walk::<(), _>(&mut path, &mut |word, _| {
            words.push(word.to_vec());
            if words.len() == limit {
                ControlFlow::Break(())
            } else {
                ControlFlow::Continue(())
            }
        });
        words
    }

    /// Visit every `(word, translation)` pair in ascending symbol order,
    /// stopping early when `visit` breaks.
    pub fn for_each_entry<B, F>(&self, mut visit: F) -> ControlFlow<B>
    where
        F: FnMut(&[S], &[S]) -> ControlFlow<B>,
    {
        let mut path = Vec::new();
        self.root.walk(&mut path, &mut visit)
    }

    /// True when no words are stored.
    pub fn is_empty(&self) -> bool {
        self.root.is_empty()
    }

    /// Number of stored `(word, translation)` pairs.
    pub fn get_entry_count(&self) -> u64 {
        self.entry_count
    }

    /// Reserved end-marker symbol for this trie.
    pub fn terminator(&self) -> S {
        self.terminator
    }

    /// Path of the backing dictionary file, if one is bound.
    pub fn source_path(&self) -> Option<&Path> {
        self.source_path.as_deref()
    }

    /// Save automatically when the trie is dropped.
    pub fn set_save_on_close(&mut self, save: bool) {
        self.save_on_close = save;
    }

    /// Rewrite the bound dictionary file with the current contents.
    ///
    /// # Errors
    /// [`TrieError::DictionaryNotConfigured`] when no file is bound; I/O
    /// failures surface as [`TrieError::FileOpen`] / [`TrieError::Io`].
    pub fn save_changes(&self) -> Result<()> {
        let path = self
            .source_path
            .as_deref()
            .ok_or(TrieError::DictionaryNotConfigured)?;
        info!("saving {} entries to {}", self.entry_count, path.display());

        let file = File::create(path).map_err(|e| TrieError::FileOpen {
            path: path.to_path_buf(),
            source: e,
        })?;
        let mut writer = BufWriter::new(file);
        codec::write_header(&mut writer, S::WIDTH, self.entry_count)?;

        let flow = self.for_each_entry(|word, translation| {
            match codec::write_record(&mut writer, word, translation) {
                Ok(()) => ControlFlow::Continue(()),
                Err(e) => ControlFlow::Break(e),
            }
        });
        if let ControlFlow::Break(e) = flow {
            return Err(e);
        }
        writer.flush()?;
        Ok(())
    }

    fn load_from<R: Read>(&mut self, reader: &mut R, path: &Path) -> Result<()> {
        let header = codec::read_header(reader)?;
        if header.symbol_width != S::WIDTH {
            return Err(TrieError::FileFormatMismatch {
                path: path.to_path_buf(),
                expected: S::WIDTH.bytes(),
                actual: header.symbol_width.bytes(),
            });
        }

        for index in 0..header.entry_count {
            let (word, translation) = codec::read_record::<S, _>(reader)?;
            self.add_word(&word, &translation)
                .map_err(|e| TrieError::CorruptRecord(format!("record {index}: {e}")))?;
        }
        info!(
            "loaded {} entries from {}",
            self.entry_count,
            path.display()
        );
        Ok(())
    }

    fn create_empty_file(&self, path: &Path) -> Result<()> {
        let file = File::create(path).map_err(|e| TrieError::FileOpen {
            path: path.to_path_buf(),
            source: e,
        })?;
        let mut writer = BufWriter::new(file);
        codec::write_header(&mut writer, S::WIDTH, 0)?;
        writer.flush()?;
        Ok(())
    }

    fn check_word(&self, word: &[S]) -> Result<()> {
        if word.is_empty() {
            return Err(TrieError::EmptyWord);
        }
        if word.len() > MAX_WORD_SYMBOLS {
            return Err(TrieError::WordTooLong(word.len()));
        }
        if word.contains(&self.terminator) {
            return Err(TrieError::ReservedSymbol);
        }
        Ok(())
    }

    fn check_translation(&self, translation: &[S]) -> Result<()> {
        if translation.is_empty() {
            return Err(TrieError::EmptyWord);
        }
        if translation.len() > MAX_TRANSLATION_SYMBOLS {
            return Err(TrieError::TranslationTooLong(translation.len()));
        }
        if translation.contains(&self.terminator) {
            return Err(TrieError::ReservedSymbol);
        }
        Ok(())
    }
}

impl<S: Symbol> Default for Trie<S> {
    fn default() -> Self {
        Self::new()
    }
}

impl<S: Symbol> Drop for Trie<S> {
    fn drop(&mut self) {
        if self.save_on_close && self.source_path.is_some() {
            if let Err(e) = self.save_changes() {
                log::error!("failed to save dictionary on close: {e}");
            }
        }
    }
}
