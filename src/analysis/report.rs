// Copyright (c) 2025 Steve Wagner (ciroque@live.com)
// SPDX-License-Identifier: MIT

use serde::{Deserialize, Serialize};
use std::collections::{BTreeMap, BTreeSet};

/// Report keys in serialization order.
pub const REPORT_KEYS: [&str; 19] = [
    "sentences",
    "words",
    "number_of_characters",
    "number_of_words",
    "number_of_sentences",
    "frequency_of_chars",
    "avrg_word_length",
    "avrg_words_in_sentence",
    "top10_words",
    "top10_long_words",
    "top10_short_words",
    "top10_long_sentences",
    "top10_short_sentences",
    "palindromes",
    "number_of_palindromes",
    "top10_long_palindromes",
    "text_is_palindrome",
    "reversed_text",
    "reversed_text_char_order",
];

/// Fixed-shape summary of one text.
///
/// Built in one go by [`crate::analysis::Analyzer::run`]; there is no way to
/// obtain a partially filled report.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Report {
    pub sentences: Vec<String>,
    pub words: Vec<String>,
    pub number_of_characters: usize,
    pub number_of_words: usize,
    pub number_of_sentences: usize,
    pub frequency_of_chars: BTreeMap<char, usize>,
    pub avrg_word_length: f64,
    pub avrg_words_in_sentence: f64,
    pub top10_words: Vec<(String, usize)>,
    pub top10_long_words: Vec<String>,
    pub top10_short_words: Vec<String>,
    pub top10_long_sentences: Vec<String>,
    pub top10_short_sentences: Vec<String>,
    pub palindromes: BTreeSet<String>,
    pub number_of_palindromes: usize,
    pub top10_long_palindromes: Vec<String>,
    pub text_is_palindrome: bool,
    pub reversed_text: String,
    pub reversed_text_char_order: String,
}

impl Report {
    /// Flat key/value view of the report.
    pub fn to_map(&self) -> Result<serde_json::Map<String, serde_json::Value>, serde_json::Error> {
        match serde_json::to_value(self)? {
            serde_json::Value::Object(map) => Ok(map),
            other => Err(serde::ser::Error::custom(format!(
                "report serialized to a non-object value: {}",
                other
            ))),
        }
    }
}
