// Copyright (c) 2025 Huli Trie Authors
//
// Licensed under dual license:
// - MIT License (LICENSE-MIT or https://opensource.org/licenses/MIT)
// - Apache License, Version 2.0 (LICENSE-APACHE or https://www.apache.org/licenses/LICENSE-2.0)

//! Text canonicalization shared by both indexes.
//!
//! Every word and phrase is normalized before indexing, searching, or
//! deletion: lowercased, trimmed, with any run of whitespace collapsed to a
//! single space. Matching is therefore case- and whitespace-insensitive.

/// Reserved word-boundary marker used in encoded phrase paths.
///
/// Normalized text never contains this character (see [`normalize`]), so a
/// character-level traversal can never confuse a word boundary with an
/// ordinary space.
pub(crate) const WORD_SEPARATOR: char = '\u{1F}';

/// Returns the canonical form of `text`: lowercase, trimmed, interior
/// whitespace runs collapsed to a single space.
///
/// The reserved separator is stripped so that no raw input can forge a word
/// boundary in an encoded path. Input that is empty or all whitespace
/// normalizes to the empty string; callers decide whether that is an error.
pub(crate) fn normalize(text: &str) -> String {
    text.to_lowercase()
        .split_whitespace()
        .map(|word| word.chars().filter(|&c| c != WORD_SEPARATOR).collect::<String>())
        .filter(|word| !word.is_empty())
        .collect::<Vec<_>>()
        .join(" ")
}

/// Encodes a normalized word sequence into a single trie path, joining the
/// words with [`WORD_SEPARATOR`] instead of a space.
pub(crate) fn phrase_path(words: &[&str]) -> String {
    let mut path = String::with_capacity(words.iter().map(|w| w.len() + 1).sum());
    for (i, word) in words.iter().enumerate() {
        if i > 0 {
            path.push(WORD_SEPARATOR);
        }
        path.push_str(word);
    }
    path
}

#[cfg(test)]
mod tests {
    use super::*;
    use test_case::test_case;

    #[test_case("Hello", "hello" ; "lowercases")]
    #[test_case("  hello  ", "hello" ; "trims outer whitespace")]
    #[test_case("hello   world", "hello world" ; "collapses interior runs")]
    #[test_case("\tHeLLo\n WORLD ", "hello world" ; "mixed whitespace and case")]
    #[test_case("", "" ; "empty stays empty")]
    #[test_case("   \t\n", "" ; "all whitespace collapses to empty")]
    #[test_case("ПрИвЕт Мир", "привет мир" ; "non ascii case folding")]
    fn normalize_cases(input: &str, expected: &str) {
        assert_eq!(normalize(input), expected);
    }

    #[test]
    fn normalize_strips_reserved_separator() {
        let forged = format!("a{}b c", WORD_SEPARATOR);
        assert_eq!(normalize(&forged), "ab c");
        assert_eq!(normalize(&WORD_SEPARATOR.to_string()), "");
    }

    #[test]
    fn phrase_path_joins_words_with_separator() {
        assert_eq!(phrase_path(&["hello"]), "hello");
        assert_eq!(
            phrase_path(&["hello", "world"]),
            format!("hello{}world", WORD_SEPARATOR)
        );
    }

    #[test]
    fn phrase_path_round_trips_through_chars() {
        let path = phrase_path(&["a", "b", "c"]);
        let words: Vec<&str> = path.split(WORD_SEPARATOR).collect();
        assert_eq!(words, vec!["a", "b", "c"]);
    }
}
