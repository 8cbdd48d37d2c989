// Copyright (c) 2025 Steve Wagner (ciroque@live.com)
// SPDX-License-Identifier: MIT

//! Word extraction from tokenized sentences.

use lazy_static::lazy_static;
use regex::Regex;

lazy_static! {
    // Unicode-aware: anything that is not a letter, digit or underscore.
    static ref NON_WORD: Regex = Regex::new(r"\W+").unwrap();
}

/// Remove every non-word character from `text`.
pub fn strip_non_word(text: &str) -> String {
    NON_WORD.replace_all(text, "").into_owned()
}

/// Split each sentence on whitespace and strip non-word characters from
/// every token, sentence-major.
///
/// Punctuation-only tokens become empty strings and are kept, so the result
/// lines up one-to-one with the whitespace tokens of the sentences.
pub fn extract_words<S: AsRef<str>>(sentences: &[S]) -> Vec<String> {
    sentences
        .iter()
        .flat_map(|sentence| sentence.as_ref().split_whitespace())
        .map(strip_non_word)
        .collect()
}
