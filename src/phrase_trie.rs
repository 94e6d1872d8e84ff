// Copyright (c) 2025 Huli Trie Authors
//
// Licensed under dual license:
// - MIT License (LICENSE-MIT or https://opensource.org/licenses/MIT)
// - Apache License, Version 2.0 (LICENSE-APACHE or https://www.apache.org/licenses/LICENSE-2.0)

//! Phrase index: a trie over encoded multi-word paths.
//!
//! A phrase is stored along a path built from its normalized words joined by
//! the reserved separator character rather than a literal space, so the
//! character-level traversal can tell a word boundary from an ordinary
//! space. Besides the complete phrase, every leading-word prefix of the
//! phrase is recorded as a non-terminal marker: autocomplete can surface a
//! phrase before it is fully typed, while the partial prefix never counts as
//! a stored phrase of its own. Each live terminal keeps the canonical phrase
//! text so enumeration never has to decode a path.

use crate::error::{HuliTrieError, HuliTrieResult};
use crate::node::{prune_path, walk_preorder, TrieNode};
use crate::stats::{subtree_stats, TrieStats};
use crate::text::{normalize, phrase_path};

/// Trie over whole phrases and their leading-word prefix chains.
///
/// Mutation takes `&mut self`; wrap the trie in a lock (as
/// [`HuliEngine`](crate::HuliEngine) does) to share it across threads.
#[derive(Debug, Default)]
pub struct PhraseTrie {
    root: TrieNode,
}

impl PhraseTrie {
    /// Creates an empty phrase trie.
    pub fn new() -> Self {
        Self::default()
    }

    /// Inserts one occurrence of `phrase`, plus a prefix marker for every
    /// non-empty proper prefix of its word sequence.
    ///
    /// # Errors
    ///
    /// Returns [`HuliTrieError::EmptyInput`] when the phrase is empty or all
    /// whitespace after normalization.
    pub fn insert(&mut self, phrase: &str) -> HuliTrieResult<()> {
        let phrase = normalize(phrase);
        if phrase.is_empty() {
            return Err(HuliTrieError::EmptyInput);
        }
        let words: Vec<&str> = phrase.split(' ').collect();

        for end in 1..words.len() {
            let prefix = words[..end].join(" ");
            let node = self.ensure_path(&phrase_path(&words[..end]));
            node.mark_prefix(&prefix);
        }

        let node = self.ensure_path(&phrase_path(&words));
        node.record_insert(&phrase);
        Ok(())
    }

    /// `true` iff `phrase` was inserted as a complete phrase and its net
    /// occurrence count is above zero. A mere prefix chain of some longer
    /// phrase does not match. Blank input returns `false`, not an error.
    pub fn contains(&self, phrase: &str) -> bool {
        let phrase = normalize(phrase);
        !phrase.is_empty() && self.node_for(&phrase).is_some_and(TrieNode::is_live)
    }

    /// Net occurrence count of `phrase` as a complete phrase, `0` for blank
    /// input, a miss, or a prefix-only chain.
    pub fn count(&self, phrase: &str) -> u64 {
        let phrase = normalize(phrase);
        if phrase.is_empty() {
            return 0;
        }
        self.node_for(&phrase)
            .map_or(0, TrieNode::occurrence_count)
    }

    /// Collects up to `limit` distinct stored phrases whose normalized text
    /// starts with `prefix`, crossing word boundaries during enumeration.
    ///
    /// The prefix itself comes first when it is a stored phrase; descendants
    /// follow in pre-order. Duplicates are never emitted even when several
    /// paths reach the same stored text. Blank prefix or a zero limit yields
    /// an empty list.
    pub fn with_prefix(&self, prefix: &str, limit: usize) -> Vec<String> {
        let prefix = normalize(prefix);
        if prefix.is_empty() || limit == 0 {
            return Vec::new();
        }
        let Some(start) = self.node_for(&prefix) else {
            return Vec::new();
        };
        let mut results: Vec<String> = Vec::new();
        walk_preorder(start, "", |node, _| {
            if let Some(original) = node.original() {
                if !results.iter().any(|r| r == original) {
                    results.push(original.to_string());
                }
            }
            results.len() < limit
        });
        results
    }

    /// Removes one occurrence of `phrase`. Returns `false` when the phrase
    /// is not stored as a complete phrase.
    ///
    /// When the count reaches zero the terminal and its stored text are
    /// discarded, every proper-prefix marker of the phrase is released, and
    /// the encoded path is pruned bottom-up. Because each proper-prefix path
    /// is a prefix of the full path, one bottom-up pass along the full path
    /// covers them all; the climb stops at any node that is live, still
    /// referenced, or branching.
    pub fn remove(&mut self, phrase: &str) -> bool {
        let phrase = normalize(phrase);
        if phrase.is_empty() {
            return false;
        }
        let words: Vec<&str> = phrase.split(' ').collect();
        let path: Vec<char> = phrase_path(&words).chars().collect();

        let cleared = match self.root.descend_mut(path.iter().copied()) {
            Some(node) if node.is_live() => node.record_delete(),
            _ => return false,
        };
        if cleared {
            for end in 1..words.len() {
                let prefix = words[..end].join(" ");
                let prefix_path = phrase_path(&words[..end]);
                if let Some(node) = self.root.descend_mut(prefix_path.chars()) {
                    node.unmark_prefix(&prefix);
                }
            }
            prune_path(&mut self.root, &path);
        }
        true
    }

    /// `true` iff no phrases (and no prefix chains) are stored.
    pub fn is_empty(&self) -> bool {
        self.root.children.is_empty() && !self.root.is_live()
    }

    /// Resets the trie to the empty state.
    pub fn clear(&mut self) {
        self.root = TrieNode::default();
    }

    /// Node, unique-phrase, and occurrence totals for this trie. Prefix
    /// markers contribute nodes but never entries or occurrences.
    pub fn stats(&self) -> TrieStats {
        subtree_stats(&self.root)
    }

    fn ensure_path(&mut self, path: &str) -> &mut TrieNode {
        let mut node = &mut self.root;
        for c in path.chars() {
            node = node.ensure_child(c);
        }
        node
    }

    fn node_for(&self, normalized: &str) -> Option<&TrieNode> {
        let words: Vec<&str> = normalized.split(' ').collect();
        self.root.descend(phrase_path(&words).chars())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn only_complete_phrases_match() {
        let mut trie = PhraseTrie::new();
        trie.insert("a b c").unwrap();

        assert!(trie.contains("a b c"));
        assert!(!trie.contains("a"));
        assert!(!trie.contains("a b"));
        assert!(!trie.contains("a b c d"));
        assert_eq!(trie.count("a b c"), 1);
        assert_eq!(trie.count("a b"), 0);
    }

    #[test]
    fn normalization_applies_to_phrases() {
        let mut trie = PhraseTrie::new();
        trie.insert("  Hello   WORLD ").unwrap();
        assert!(trie.contains("hello world"));
        assert!(trie.contains("HELLO\tworld"));
    }

    #[test]
    fn blank_input_is_an_error_on_insert_only() {
        let mut trie = PhraseTrie::new();
        assert_eq!(trie.insert(" \t "), Err(HuliTrieError::EmptyInput));
        assert!(!trie.contains("   "));
        assert!(!trie.remove(""));
        assert!(trie.with_prefix(" ", 10).is_empty());
    }

    #[test]
    fn suggestions_cross_word_boundaries() {
        let mut trie = PhraseTrie::new();
        trie.insert("hello world").unwrap();
        trie.insert("hello universe").unwrap();

        // Ascending character order: 'u' before 'w'.
        assert_eq!(
            trie.with_prefix("hello", 10),
            vec!["hello universe", "hello world"]
        );
        // A partial word of the second word still locates the branch.
        assert_eq!(trie.with_prefix("hello wor", 10), vec!["hello world"]);
        assert!(trie.with_prefix("hello x", 10).is_empty());
    }

    #[test]
    fn stored_prefix_phrase_comes_first_without_duplicates() {
        let mut trie = PhraseTrie::new();
        trie.insert("hello world").unwrap();
        trie.insert("hello universe").unwrap();
        trie.insert("hello").unwrap();

        let results = trie.with_prefix("hello", 10);
        assert_eq!(results, vec!["hello", "hello universe", "hello world"]);
    }

    #[test]
    fn repeated_insert_does_not_duplicate_suggestions() {
        let mut trie = PhraseTrie::new();
        trie.insert("deep blue sea").unwrap();
        trie.insert("deep blue sea").unwrap();

        assert_eq!(trie.with_prefix("deep", 10), vec!["deep blue sea"]);
        assert_eq!(trie.count("deep blue sea"), 2);
    }

    #[test]
    fn limit_bounds_the_whole_enumeration() {
        let mut trie = PhraseTrie::new();
        trie.insert("go east").unwrap();
        trie.insert("go north").unwrap();
        trie.insert("go south").unwrap();
        trie.insert("go west").unwrap();

        let results = trie.with_prefix("go", 2);
        assert_eq!(results, vec!["go east", "go north"]);
        assert!(trie.with_prefix("go", 0).is_empty());
    }

    #[test]
    fn counted_removal_keeps_earlier_occurrences() {
        let mut trie = PhraseTrie::new();
        trie.insert("red sky at night").unwrap();
        trie.insert("red sky at night").unwrap();

        assert!(trie.remove("red sky at night"));
        assert!(trie.contains("red sky at night"));
        assert!(trie.remove("red sky at night"));
        assert!(!trie.contains("red sky at night"));
        assert!(!trie.remove("red sky at night"));
        assert!(trie.is_empty());
    }

    #[test]
    fn removing_one_phrase_keeps_a_shared_prefix_sibling() {
        let mut trie = PhraseTrie::new();
        trie.insert("hello world").unwrap();
        trie.insert("hello universe").unwrap();

        assert!(trie.remove("hello world"));
        assert!(!trie.contains("hello world"));
        assert!(trie.contains("hello universe"));
        assert_eq!(trie.with_prefix("hello", 10), vec!["hello universe"]);

        assert!(trie.remove("hello universe"));
        assert!(trie.is_empty());
        assert_eq!(trie.stats().nodes, 1);
    }

    #[test]
    fn removing_a_long_phrase_keeps_a_stored_prefix_phrase() {
        let mut trie = PhraseTrie::new();
        trie.insert("hello").unwrap();
        trie.insert("hello world").unwrap();

        assert!(trie.remove("hello world"));
        assert!(trie.contains("hello"));
        assert_eq!(trie.with_prefix("hello", 10), vec!["hello"]);

        assert!(trie.remove("hello"));
        assert!(trie.is_empty());
    }

    #[test]
    fn promoting_a_prefix_node_survives_interleaved_deletes() {
        let mut trie = PhraseTrie::new();
        trie.insert("hello world").unwrap();
        // "hello" already ends a prefix chain; storing it promotes the node.
        trie.insert("hello").unwrap();

        assert!(trie.remove("hello"));
        assert!(!trie.contains("hello"));
        assert!(trie.contains("hello world"));
        assert_eq!(trie.with_prefix("hello", 10), vec!["hello world"]);

        // Re-insert while the longer phrase still holds the branch open.
        trie.insert("hello").unwrap();
        assert!(trie.remove("hello world"));
        assert!(trie.contains("hello"));

        assert!(trie.remove("hello"));
        assert!(trie.is_empty());
        assert_eq!(trie.stats().nodes, 1);
    }

    #[test]
    fn prefix_chains_are_invisible_to_stats() {
        let mut trie = PhraseTrie::new();
        trie.insert("one two three").unwrap();

        let stats = trie.stats();
        assert_eq!(stats.unique_entries, 1);
        assert_eq!(stats.total_occurrences, 1);

        trie.insert("one two three").unwrap();
        assert_eq!(trie.stats().unique_entries, 1);
        assert_eq!(trie.stats().total_occurrences, 2);
    }

    #[test]
    fn removal_restores_the_node_count() {
        let mut trie = PhraseTrie::new();
        trie.insert("keep me around").unwrap();
        let baseline = trie.stats().nodes;

        trie.insert("fleeting phrase here").unwrap();
        assert!(trie.stats().nodes > baseline);
        assert!(trie.remove("fleeting phrase here"));
        assert_eq!(trie.stats().nodes, baseline);
    }

    #[test]
    fn clear_resets_to_a_single_root() {
        let mut trie = PhraseTrie::new();
        trie.insert("alpha beta").unwrap();
        trie.clear();
        assert!(trie.is_empty());
        assert_eq!(trie.stats().nodes, 1);
    }
}
