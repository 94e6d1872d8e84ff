//! Huli Trie Engine Library
//!
//! A dual prefix-tree ("trie") engine that indexes individual words and
//! multi-word phrases for exact lookup and prefix-bounded autocomplete,
//! with net occurrence counting so repeated insertions and partial
//! deletions balance correctly.
//!
//! # Architecture
//!
//! The engine is designed with the following principles in mind:
//! - Up-front normalization: every operation sees canonical lowercase,
//!   whitespace-collapsed text
//! - Exclusive tree-shaped ownership: no node is ever referenced by more
//!   than one parent
//! - Deterministic enumeration: children are visited in ascending character
//!   order, so results are reproducible within and across runs
//! - Bottom-up pruning after deletion, bounding memory to live content
//! - No ambient state: the engine is an owned value returned by a
//!   constructor
//!
//! The engine itself is synchronous and in-memory. Concurrent callers are
//! served through one writer-exclusive / multi-reader lock per index inside
//! [`HuliEngine`]; the underlying [`WordTrie`] and [`PhraseTrie`] are plain
//! owned structures that can also be used standalone.
//!
//! # Example
//!
//! ```
//! use huli_trie::HuliEngine;
//!
//! let engine = HuliEngine::new();
//! engine.insert_word("test").unwrap();
//! engine.insert_word("testing").unwrap();
//! engine.insert_phrase("hello world").unwrap();
//!
//! assert!(engine.search("TEST"));
//! assert!(engine.starts_with("tes"));
//! assert_eq!(engine.words_with_prefix("te", 10), vec!["test", "testing"]);
//! assert_eq!(engine.suggest_phrases("hello wor"), vec!["hello world"]);
//! ```

// Re-export public modules
pub mod config;
pub mod engine;
pub mod error;
pub mod phrase_trie;
pub mod stats;
pub mod word_trie;

// Internal building blocks shared by both indexes
mod node;
mod text;

pub use config::HuliTrieConfig;
pub use engine::HuliEngine;
pub use error::{HuliTrieError, HuliTrieResult};
pub use phrase_trie::PhraseTrie;
pub use stats::{EngineStats, TrieStats};
pub use word_trie::WordTrie;

/// Version information for the Huli Trie engine.
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
