//! A single trie node: compact child set plus optional translation.

use std::ops::ControlFlow;

use super::gaps::GapList;
use super::symbol::Symbol;

/// One symbol position in the trie.
///
/// Children are owned exclusively and stored densely, ordered by symbol;
/// the [`GapList`] says which symbol each slot belongs to. A translation
/// is present iff a word terminates here.
#[derive(Debug)]
pub struct TrieNode<S: Symbol> {
    gaps: GapList<S>,
    children: Vec<Box<TrieNode<S>>>,
    translation: Option<Vec<S>>,
}

impl<S: Symbol> TrieNode<S> {
    pub fn new() -> Self {
        Self {
            gaps: GapList::new(),
            children: Vec::new(),
            translation: None,
        }
    }

    /// The child reached by `symbol`, if present.
    pub fn child(&self, symbol: S) -> Option<&TrieNode<S>> {
        self.gaps.rank(symbol).map(|rank| &*self.children[rank])
    }

    /// Mutable counterpart of [`child`](TrieNode::child).
    pub fn child_mut(&mut self, symbol: S) -> Option<&mut TrieNode<S>> {
        self.gaps.rank(symbol).map(move |rank| &mut *self.children[rank])
    }

    /// The child reached by `symbol`, created empty first when absent.
    pub fn insert_child(&mut self, symbol: S) -> &mut TrieNode<S> {
        let rank = match self.gaps.insert(symbol) {
            Ok(rank) => {
                self.children.insert(rank, Box::new(TrieNode::new()));
                rank
            }
            Err(rank) => rank,
        };
        &mut self.children[rank]
    }

    /// Detach and return the child reached by `symbol`.
    ///
    /// Callers remove children only once they are prunable; the gap list
    /// reabsorbs the symbol so the node is restored to its pre-insert
    /// shape.
    pub fn remove_child(&mut self, symbol: S) -> Option<Box<TrieNode<S>>> {
        let rank = self.gaps.remove(symbol)?;
        Some(self.children.remove(rank))
    }

    pub fn translation(&self) -> Option<&[S]> {
        self.translation.as_deref()
    }

    /// Replace the stored translation, returning the previous one.
    pub fn set_translation(&mut self, translation: Option<Vec<S>>) -> Option<Vec<S>> {
        std::mem::replace(&mut self.translation, translation)
    }

    /// No children and no translation: eligible for pruning.
    pub fn is_empty(&self) -> bool {
        self.children.is_empty() && self.translation.is_none()
    }

    pub fn child_count(&self) -> usize {
        self.children.len()
    }

    /// The gap list backing this node's child set.
    pub fn gaps(&self) -> &GapList<S> {
        &self.gaps
    }

    /// Depth-first, ascending-symbol walk over every translation-bearing
    /// node under this one.
    ///
    /// `path` accumulates the symbols from the walk root; each visit sees
    /// the full path and the translation stored there, in ascending
    /// lexicographic order (a stored prefix is visited before its
    /// extensions). Returning `ControlFlow::Break` stops the walk early.
    pub fn walk<B, F>(&self, path: &mut Vec<S>, visit: &mut F) -> ControlFlow<B>
    where
        F: FnMut(&[S], &[S]) -> ControlFlow<B>,
    {
        if let Some(translation) = self.translation.as_deref() {
            visit(path, translation)?;
        }
        for (symbol, child) in self.gaps.present_symbols().zip(&self.children) {
            path.push(symbol);
            child.walk(path, visit)?;
            path.pop();
        }
        ControlFlow::Continue(())
    }
}

impl<S: Symbol> Default for TrieNode<S> {
    fn default() -> Self {
        Self::new()
    }
}
