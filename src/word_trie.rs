// Copyright (c) 2025 Huli Trie Authors
//
// Licensed under dual license:
// - MIT License (LICENSE-MIT or https://opensource.org/licenses/MIT)
// - Apache License, Version 2.0 (LICENSE-APACHE or https://www.apache.org/licenses/LICENSE-2.0)

//! Word index: a trie over individual normalized words.
//!
//! One child per character, occurrence counting at the terminal node, and
//! bottom-up pruning on deletion so the structure only ever holds live
//! content.

use crate::error::{HuliTrieError, HuliTrieResult};
use crate::node::{prune_path, walk_preorder, TrieNode};
use crate::stats::{subtree_stats, TrieStats};
use crate::text::normalize;

/// Trie over individual words with net occurrence counting.
///
/// All operations normalize their input first, so lookups are case- and
/// whitespace-insensitive. Mutation takes `&mut self`; wrap the trie in a
/// lock (as [`HuliEngine`](crate::HuliEngine) does) to share it across
/// threads.
#[derive(Debug, Default)]
pub struct WordTrie {
    root: TrieNode,
}

impl WordTrie {
    /// Creates an empty word trie.
    pub fn new() -> Self {
        Self::default()
    }

    /// Inserts one occurrence of `word`.
    ///
    /// # Errors
    ///
    /// Returns [`HuliTrieError::EmptyInput`] when the word is empty or all
    /// whitespace after normalization.
    pub fn insert(&mut self, word: &str) -> HuliTrieResult<()> {
        let word = normalize(word);
        if word.is_empty() {
            return Err(HuliTrieError::EmptyInput);
        }
        let mut node = &mut self.root;
        for c in word.chars() {
            node = node.ensure_child(c);
        }
        node.record_insert(&word);
        Ok(())
    }

    /// `true` iff `word` is currently stored (net occurrence count above
    /// zero). Blank input returns `false`, not an error.
    pub fn contains(&self, word: &str) -> bool {
        let word = normalize(word);
        !word.is_empty() && self.root.descend(word.chars()).is_some_and(TrieNode::is_live)
    }

    /// `true` iff any stored word starts with `prefix`. Unlike
    /// [`contains`](Self::contains), the mere existence of a continuation is
    /// sufficient; the prefix node itself need not be terminal.
    pub fn starts_with(&self, prefix: &str) -> bool {
        let prefix = normalize(prefix);
        !prefix.is_empty() && self.root.descend(prefix.chars()).is_some()
    }

    /// Net occurrence count of `word`, `0` for blank input or a miss.
    pub fn count(&self, word: &str) -> u64 {
        let word = normalize(word);
        if word.is_empty() {
            return 0;
        }
        self.root
            .descend(word.chars())
            .map_or(0, TrieNode::occurrence_count)
    }

    /// Removes one occurrence of `word`. Returns `false` when the word is
    /// not stored. When the count reaches zero the terminal is cleared and
    /// the word's path is pruned bottom-up.
    pub fn remove(&mut self, word: &str) -> bool {
        let word = normalize(word);
        if word.is_empty() {
            return false;
        }
        let path: Vec<char> = word.chars().collect();
        let cleared = match self.root.descend_mut(path.iter().copied()) {
            Some(node) if node.is_live() => node.record_delete(),
            _ => return false,
        };
        if cleared {
            prune_path(&mut self.root, &path);
        }
        true
    }

    /// Collects up to `limit` stored words starting with `prefix`, in
    /// pre-order (ascending character order within each node). Blank prefix
    /// or a zero limit yields an empty list.
    pub fn with_prefix(&self, prefix: &str, limit: usize) -> Vec<String> {
        let prefix = normalize(prefix);
        if prefix.is_empty() || limit == 0 {
            return Vec::new();
        }
        let Some(start) = self.root.descend(prefix.chars()) else {
            return Vec::new();
        };
        let mut results = Vec::new();
        walk_preorder(start, &prefix, |node, path| {
            if node.is_live() {
                results.push(path.to_string());
            }
            results.len() < limit
        });
        results
    }

    /// `true` iff no words are stored.
    pub fn is_empty(&self) -> bool {
        self.root.children.is_empty() && !self.root.is_live()
    }

    /// Resets the trie to the empty state.
    pub fn clear(&mut self) {
        self.root = TrieNode::default();
    }

    /// Node, unique-word, and occurrence totals for this trie.
    pub fn stats(&self) -> TrieStats {
        subtree_stats(&self.root)
    }
}
