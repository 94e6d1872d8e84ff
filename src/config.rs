// Copyright (c) 2025 Huli Trie Authors
//
// Licensed under dual license:
// - MIT License (LICENSE-MIT or https://opensource.org/licenses/MIT)
// - Apache License, Version 2.0 (LICENSE-APACHE or https://www.apache.org/licenses/LICENSE-2.0)

//! Configuration for the Huli Trie engine.

use serde::{Deserialize, Serialize};

/// Default number of suggestions returned when the caller does not pass an
/// explicit limit.
const DEFAULT_LIMIT: usize = 10;

/// Configuration for [`HuliEngine`](crate::HuliEngine).
///
/// Serde-derived so the calling layer can load it from a file alongside its
/// own settings.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct HuliTrieConfig {
    /// Suggestion-list size used by the `suggest_*` convenience methods.
    default_limit: usize,
}

impl HuliTrieConfig {
    /// Create a new default configuration.
    ///
    /// Default values:
    /// - default_limit: 10
    pub fn new() -> Self {
        Self {
            default_limit: DEFAULT_LIMIT,
        }
    }

    /// Set the suggestion-list size used when no explicit limit is passed.
    pub fn with_default_limit(mut self, default_limit: usize) -> Self {
        self.default_limit = default_limit;
        self
    }

    /// Suggestion-list size used when no explicit limit is passed.
    pub fn default_limit(&self) -> usize {
        self.default_limit
    }
}

impl Default for HuliTrieConfig {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_match_documentation() {
        assert_eq!(HuliTrieConfig::new().default_limit(), 10);
        assert_eq!(HuliTrieConfig::default(), HuliTrieConfig::new());
    }

    #[test]
    fn builder_overrides_the_limit() {
        let config = HuliTrieConfig::new().with_default_limit(3);
        assert_eq!(config.default_limit(), 3);
    }
}
