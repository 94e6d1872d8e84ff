// Copyright (c) 2025 Huli Trie Authors
//
// Licensed under dual license:
// - MIT License (LICENSE-MIT or https://opensource.org/licenses/MIT)
// - Apache License, Version 2.0 (LICENSE-APACHE or https://www.apache.org/licenses/LICENSE-2.0)

//! The dual-trie engine: one word index, one phrase index, one operation
//! set.
//!
//! Each index is guarded by its own writer-exclusive / multi-reader lock,
//! held for the whole operation, so a reader can never observe a node
//! mid-detachment. The engine is an owned value returned by a constructor;
//! there is no ambient instance, and each test creates its own.

use parking_lot::RwLock;
use tracing::{debug, trace};

use crate::config::HuliTrieConfig;
use crate::error::HuliTrieResult;
use crate::phrase_trie::PhraseTrie;
use crate::stats::EngineStats;
use crate::word_trie::WordTrie;

/// Word and phrase autocomplete engine.
///
/// Key features:
/// * Case- and whitespace-insensitive matching via up-front normalization
/// * Net occurrence counting, so repeated inserts and partial deletes balance
/// * Bounded, deterministic prefix enumeration for autocomplete
/// * Bottom-up pruning on deletion, keeping memory bounded by live content
///
/// # Example
///
/// ```
/// use huli_trie::HuliEngine;
///
/// let engine = HuliEngine::new();
/// engine.insert_word("Testing").unwrap();
/// engine.insert_phrase("hello world").unwrap();
///
/// assert!(engine.search(" testing "));
/// assert!(engine.starts_with("te"));
/// assert_eq!(engine.suggest_phrases("hello"), vec!["hello world".to_string()]);
/// ```
#[derive(Debug)]
pub struct HuliEngine {
    /// Trie over individual words.
    words: RwLock<WordTrie>,

    /// Trie over encoded phrase paths.
    phrases: RwLock<PhraseTrie>,

    /// Configuration options.
    config: HuliTrieConfig,
}

impl HuliEngine {
    /// Creates an empty engine with default configuration.
    pub fn new() -> Self {
        Self::with_config(HuliTrieConfig::default())
    }

    /// Creates an empty engine with the specified configuration.
    pub fn with_config(config: HuliTrieConfig) -> Self {
        Self {
            words: RwLock::new(WordTrie::new()),
            phrases: RwLock::new(PhraseTrie::new()),
            config,
        }
    }

    /// The engine's configuration.
    pub fn config(&self) -> &HuliTrieConfig {
        &self.config
    }

    /// Inserts one occurrence of `word` into the word index.
    ///
    /// # Errors
    ///
    /// Returns [`HuliTrieError::EmptyInput`](crate::HuliTrieError::EmptyInput)
    /// when the word is blank after normalization.
    pub fn insert_word(&self, word: &str) -> HuliTrieResult<()> {
        self.words.write().insert(word)?;
        debug!(word, "indexed word");
        Ok(())
    }

    /// Inserts one occurrence of `phrase` into the phrase index, recording
    /// its leading-word prefixes for autocomplete.
    ///
    /// # Errors
    ///
    /// Returns [`HuliTrieError::EmptyInput`](crate::HuliTrieError::EmptyInput)
    /// when the phrase is blank after normalization.
    pub fn insert_phrase(&self, phrase: &str) -> HuliTrieResult<()> {
        self.phrases.write().insert(phrase)?;
        debug!(phrase, "indexed phrase");
        Ok(())
    }

    /// `true` iff `word` is currently stored. Blank input returns `false`.
    pub fn search(&self, word: &str) -> bool {
        let found = self.words.read().contains(word);
        trace!(word, found, "word lookup");
        found
    }

    /// `true` iff `phrase` is stored as a complete phrase. A prefix chain
    /// recorded for some longer phrase does not match.
    pub fn search_phrase(&self, phrase: &str) -> bool {
        let found = self.phrases.read().contains(phrase);
        trace!(phrase, found, "phrase lookup");
        found
    }

    /// `true` iff any stored word starts with `prefix`.
    pub fn starts_with(&self, prefix: &str) -> bool {
        self.words.read().starts_with(prefix)
    }

    /// Up to `limit` stored words starting with `prefix`, in deterministic
    /// pre-order.
    pub fn words_with_prefix(&self, prefix: &str, limit: usize) -> Vec<String> {
        self.words.read().with_prefix(prefix, limit)
    }

    /// [`words_with_prefix`](Self::words_with_prefix) with the configured
    /// default limit.
    pub fn suggest_words(&self, prefix: &str) -> Vec<String> {
        self.words_with_prefix(prefix, self.config.default_limit())
    }

    /// Up to `limit` distinct stored phrases starting with `prefix`, the
    /// prefix itself first when it is a stored phrase.
    pub fn phrases_with_prefix(&self, prefix: &str, limit: usize) -> Vec<String> {
        self.phrases.read().with_prefix(prefix, limit)
    }

    /// [`phrases_with_prefix`](Self::phrases_with_prefix) with the
    /// configured default limit.
    pub fn suggest_phrases(&self, prefix: &str) -> Vec<String> {
        self.phrases_with_prefix(prefix, self.config.default_limit())
    }

    /// Net occurrence count of `word`, `0` when absent.
    pub fn word_count(&self, word: &str) -> u64 {
        self.words.read().count(word)
    }

    /// Net occurrence count of `phrase` as a complete phrase, `0` when
    /// absent or recorded only as a prefix chain.
    pub fn phrase_count(&self, phrase: &str) -> u64 {
        self.phrases.read().count(phrase)
    }

    /// Removes one occurrence of `word`. Returns `false` when the word is
    /// not stored.
    pub fn delete_word(&self, word: &str) -> bool {
        let removed = self.words.write().remove(word);
        if removed {
            debug!(word, "removed word occurrence");
        }
        removed
    }

    /// Removes one occurrence of `phrase`. Returns `false` when the phrase
    /// is not stored as a complete phrase.
    pub fn delete_phrase(&self, phrase: &str) -> bool {
        let removed = self.phrases.write().remove(phrase);
        if removed {
            debug!(phrase, "removed phrase occurrence");
        }
        removed
    }

    /// Combined node, entry, and occurrence totals over both indexes.
    pub fn stats(&self) -> EngineStats {
        EngineStats::from_tries(self.words.read().stats(), self.phrases.read().stats())
    }

    /// `true` iff neither index stores anything.
    pub fn is_empty(&self) -> bool {
        self.words.read().is_empty() && self.phrases.read().is_empty()
    }

    /// Resets both indexes to the empty state without destroying the engine.
    pub fn clear(&self) {
        self.words.write().clear();
        self.phrases.write().clear();
        debug!("cleared both indexes");
    }
}

impl Default for HuliEngine {
    fn default() -> Self {
        Self::new()
    }
}
