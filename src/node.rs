// Copyright (c) 2025 Huli Trie Authors
//
// Licensed under dual license:
// - MIT License (LICENSE-MIT or https://opensource.org/licenses/MIT)
// - Apache License, Version 2.0 (LICENSE-APACHE or https://www.apache.org/licenses/LICENSE-2.0)

//! Node implementation shared by the word and phrase indexes.
//!
//! Each node maps single characters to exclusively-owned children and
//! carries terminal metadata as a tagged state, so a node is always in
//! exactly one of three conditions: plain interior node, end of one or more
//! phrase-prefix chains, or live terminal of a stored entry. Children live
//! in a `BTreeMap`, which makes enumeration order deterministic (ascending
//! character code).

use std::collections::{BTreeMap, BTreeSet};

/// Terminal state of a node.
///
/// The occurrence-count invariant (`isTerminal` iff the count is positive)
/// is structural: a `Complete` node always holds `count >= 1`, and a
/// decrement to zero transitions the node back to `Empty`.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub(crate) enum Terminal {
    /// Interior node with no semantic payload.
    #[default]
    Empty,
    /// End of one or more phrase-prefix chains that are not themselves
    /// stored entries. The set holds the distinct prefix strings which keep
    /// this node (and its path) alive.
    Prefix(BTreeSet<String>),
    /// Live terminal of a stored word or phrase.
    Complete {
        /// Net insertions (inserts minus deletes) of this entry.
        count: u64,
        /// Canonical text this terminal represents, stored once on first
        /// insertion so traversal need not reconstruct it from the path.
        original: String,
    },
}

/// A node in the trie. The root of each index is just a node like any other.
#[derive(Debug, Default)]
pub(crate) struct TrieNode {
    /// Map of characters to exclusively-owned child nodes.
    pub(crate) children: BTreeMap<char, TrieNode>,

    /// Terminal metadata for the path ending at this node.
    pub(crate) terminal: Terminal,
}

impl TrieNode {
    /// Returns the child for `c`, creating an empty one if missing.
    pub(crate) fn ensure_child(&mut self, c: char) -> &mut TrieNode {
        self.children.entry(c).or_default()
    }

    /// Walks `path` character by character, returning the destination node
    /// or `None` as soon as a character has no child. A missing character is
    /// the normal "not present" case, never an error.
    pub(crate) fn descend(&self, path: impl IntoIterator<Item = char>) -> Option<&TrieNode> {
        let mut node = self;
        for c in path {
            node = node.children.get(&c)?;
        }
        Some(node)
    }

    /// Mutable variant of [`descend`](Self::descend).
    pub(crate) fn descend_mut(
        &mut self,
        path: impl IntoIterator<Item = char>,
    ) -> Option<&mut TrieNode> {
        let mut node = self;
        for c in path {
            node = node.children.get_mut(&c)?;
        }
        Some(node)
    }

    /// `true` iff this node is a live terminal of a stored entry.
    pub(crate) fn is_live(&self) -> bool {
        matches!(self.terminal, Terminal::Complete { .. })
    }

    /// Net occurrence count of the entry ending here, `0` for non-terminals.
    pub(crate) fn occurrence_count(&self) -> u64 {
        match &self.terminal {
            Terminal::Complete { count, .. } => *count,
            _ => 0,
        }
    }

    /// Canonical text of the entry ending here, if this is a live terminal.
    pub(crate) fn original(&self) -> Option<&str> {
        match &self.terminal {
            Terminal::Complete { original, .. } => Some(original),
            _ => None,
        }
    }

    /// Records one insertion of the entry ending at this node. The stored
    /// text is set on the first insertion only and never overwritten.
    pub(crate) fn record_insert(&mut self, text: &str) {
        match &mut self.terminal {
            Terminal::Complete { count, .. } => *count += 1,
            _ => {
                self.terminal = Terminal::Complete {
                    count: 1,
                    original: text.to_string(),
                };
            }
        }
    }

    /// Records one deletion of the entry ending at this node. Returns `true`
    /// when the count reached zero and the terminal (with its stored text)
    /// was discarded; the caller is then responsible for pruning.
    pub(crate) fn record_delete(&mut self) -> bool {
        if let Terminal::Complete { count, .. } = &mut self.terminal {
            *count -= 1;
            if *count == 0 {
                self.terminal = Terminal::Empty;
                return true;
            }
        }
        false
    }

    /// Records that `prefix` (a leading-word chain of some stored phrase)
    /// ends at this node.
    ///
    /// A live terminal is left untouched: refs only matter for pruning
    /// childless nodes, and a node with a live descendant phrase always has
    /// a child on that phrase's path.
    pub(crate) fn mark_prefix(&mut self, prefix: &str) {
        match &mut self.terminal {
            Terminal::Empty => {
                let mut refs = BTreeSet::new();
                refs.insert(prefix.to_string());
                self.terminal = Terminal::Prefix(refs);
            }
            Terminal::Prefix(refs) => {
                refs.insert(prefix.to_string());
            }
            Terminal::Complete { .. } => {}
        }
    }

    /// Removes `prefix` from this node's prefix set, reverting to `Empty`
    /// when the last ref is gone.
    pub(crate) fn unmark_prefix(&mut self, prefix: &str) {
        if let Terminal::Prefix(refs) = &mut self.terminal {
            refs.remove(prefix);
            if refs.is_empty() {
                self.terminal = Terminal::Empty;
            }
        }
    }

    /// A node may be detached once it is childless, not a live terminal, and
    /// referenced by no prefix chain.
    pub(crate) fn is_prunable(&self) -> bool {
        self.children.is_empty() && matches!(self.terminal, Terminal::Empty)
    }
}

/// Bottom-up pruning along `path` after a deletion.
///
/// Walks from the leaf candidate toward the root and detaches the deepest
/// run of dead nodes: a node goes once it is childless, not a live terminal,
/// and holds no prefix refs; the climb stops at the first keeper. The root
/// itself is never detached. A `path` that is no longer fully present is a
/// no-op.
pub(crate) fn prune_path(root: &mut TrieNode, path: &[char]) {
    if path.is_empty() {
        return;
    }

    // First pass, read-only: find how far up the dead branch extends.
    let cut = {
        let mut nodes: Vec<&TrieNode> = Vec::with_capacity(path.len() + 1);
        let mut cur: &TrieNode = root;
        nodes.push(cur);
        for &c in path {
            match cur.children.get(&c) {
                Some(next) => {
                    cur = next;
                    nodes.push(cur);
                }
                None => return,
            }
        }
        if !nodes[path.len()].is_prunable() {
            return;
        }
        // `cut` is the depth whose node gets detached from its parent. An
        // ancestor joins the dead run only when the path child is its sole
        // child and it carries no terminal state of its own.
        let mut cut = path.len();
        while cut > 1 {
            let parent = nodes[cut - 1];
            if parent.children.len() == 1 && matches!(parent.terminal, Terminal::Empty) {
                cut -= 1;
            } else {
                break;
            }
        }
        cut
    };

    // Second pass: detach the whole dead run at its highest point.
    let mut parent = root;
    for &c in &path[..cut - 1] {
        match parent.children.get_mut(&c) {
            Some(next) => parent = next,
            None => return,
        }
    }
    parent.children.remove(&path[cut - 1]);
}

/// Bounded pre-order traversal shared by both indexes.
///
/// Visits `start` and then its descendants depth-first, children in
/// ascending character order, handing each node and its accumulated path to
/// `visit`. Returning `false` from `visit` terminates the entire traversal,
/// not just the current branch. Iterative on an explicit stack, so encoded
/// phrase paths of arbitrary length cannot overflow the call stack.
pub(crate) fn walk_preorder<'a, F>(start: &'a TrieNode, start_path: &str, mut visit: F)
where
    F: FnMut(&'a TrieNode, &str) -> bool,
{
    let mut stack: Vec<(&'a TrieNode, String)> = vec![(start, start_path.to_string())];
    while let Some((node, path)) = stack.pop() {
        if !visit(node, &path) {
            return;
        }
        // Reverse push so the smallest character pops first.
        for (&c, child) in node.children.iter().rev() {
            let mut child_path = path.clone();
            child_path.push(c);
            stack.push((child, child_path));
        }
    }
}
