// Copyright (c) 2025 Huli Trie Authors
//
// Licensed under dual license:
// - MIT License (LICENSE-MIT or https://opensource.org/licenses/MIT)
// - Apache License, Version 2.0 (LICENSE-APACHE or https://www.apache.org/licenses/LICENSE-2.0)

//! Statistics aggregation over the indexes.
//!
//! A single pass over a subtree counts every node visited, every live
//! terminal (unique entries), and the sum of occurrence counts (total
//! insertions including duplicates). The structs derive serde traits so the
//! calling layer can hand them straight to its response shapes.

use serde::{Deserialize, Serialize};

use crate::node::{Terminal, TrieNode};

/// Totals for a single trie.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct TrieStats {
    /// Nodes in the trie, the root included.
    pub nodes: u64,

    /// Distinct entries with a net occurrence count above zero.
    pub unique_entries: u64,

    /// Sum of occurrence counts, i.e. net insertions including duplicates.
    pub total_occurrences: u64,
}

/// Combined report over the word and phrase indexes.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct EngineStats {
    /// Nodes across both indexes.
    pub total_nodes: u64,

    /// Distinct stored words.
    pub total_words: u64,

    /// Distinct stored phrases (prefix chains excluded).
    pub total_phrases: u64,

    /// Net word insertions including duplicates.
    pub total_word_occurrences: u64,

    /// Net phrase insertions including duplicates.
    pub total_phrase_occurrences: u64,
}

impl EngineStats {
    /// Combines per-trie totals into the engine-level report.
    pub fn from_tries(words: TrieStats, phrases: TrieStats) -> Self {
        Self {
            total_nodes: words.nodes + phrases.nodes,
            total_words: words.unique_entries,
            total_phrases: phrases.unique_entries,
            total_word_occurrences: words.total_occurrences,
            total_phrase_occurrences: phrases.total_occurrences,
        }
    }
}

/// One-pass counter over the subtree rooted at `root`. Iterative so deep
/// encoded paths cannot overflow the call stack; visit order does not affect
/// the totals.
pub(crate) fn subtree_stats(root: &TrieNode) -> TrieStats {
    let mut stats = TrieStats::default();
    let mut stack = vec![root];
    while let Some(node) = stack.pop() {
        stats.nodes += 1;
        if let Terminal::Complete { count, .. } = &node.terminal {
            stats.unique_entries += 1;
            stats.total_occurrences += *count;
        }
        stack.extend(node.children.values());
    }
    stats
}
