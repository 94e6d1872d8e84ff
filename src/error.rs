// Copyright (c) 2025 Huli Trie Authors
//
// Licensed under dual license:
// - MIT License (LICENSE-MIT or https://opensource.org/licenses/MIT)
// - Apache License, Version 2.0 (LICENSE-APACHE or https://www.apache.org/licenses/LICENSE-2.0)

//! Error types for the Huli Trie engine.
//!
//! "Not found" conditions are never errors: misses, deletes of absent
//! entries, and empty suggestion lists are valid negative results returned
//! as `false` or an empty `Vec`.

/// Result type for Huli Trie operations.
pub type HuliTrieResult<T> = Result<T, HuliTrieError>;

/// Errors that can occur in Huli Trie operations.
#[derive(Debug, Clone, Copy, PartialEq, Eq, thiserror::Error)]
pub enum HuliTrieError {
    /// The word or phrase was empty (or all whitespace) after normalization.
    #[error("input must not be empty")]
    EmptyInput,
}
