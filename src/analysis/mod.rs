// Copyright (c) 2025 Steve Wagner (ciroque@live.com)
// SPDX-License-Identifier: MIT

//! Text analysis pipeline.
//!
//! ```text
//! raw text → sentences → words → metrics → Report
//! ```
//!
//! The pipeline is pure and synchronous. It needs a [`SentenceModel`], which
//! the caller installs once (see [`SentenceModel::global`]) before the first
//! analysis.

pub mod metrics;
pub mod report;
pub mod tokenizer;
pub mod words;


use std::sync::Arc;

use crate::errors::AnalysisError;
pub use metrics::TOP_K;
pub use report::{Report, REPORT_KEYS};
pub use tokenizer::{SentenceModel, SentenceTokenizer};
pub use words::extract_words;

/// Turns raw text into a [`Report`].
#[derive(Debug, Clone)]
pub struct Analyzer {
    tokenizer: SentenceTokenizer,
}

impl Analyzer {
    pub fn new(model: Arc<SentenceModel>) -> Self {
        Self {
            tokenizer: SentenceTokenizer::new(model),
        }
    }

    pub fn tokenizer(&self) -> &SentenceTokenizer {
        &self.tokenizer
    }

    /// Compute every metric for `text`.
    ///
    /// Fails with [`AnalysisError::EmptyInput`] when the text has no
    /// sentences (and therefore no words) to average over.
    pub fn run(&self, text: &str) -> Result<Report, AnalysisError> {
        let sentences = self.tokenizer.tokenize(text);
        let words = extract_words(&sentences);

        let avrg_word_length = metrics::mean_word_length(&words)?;
        let avrg_words_in_sentence = metrics::mean_words_per_sentence(&sentences)?;

        let palindromes = metrics::palindromes(&words);

        Ok(Report {
            number_of_characters: metrics::count_characters(text),
            number_of_words: words.len(),
            number_of_sentences: sentences.len(),
            frequency_of_chars: metrics::char_frequencies(text),
            avrg_word_length,
            avrg_words_in_sentence,
            top10_words: metrics::top_words(&words, TOP_K),
            top10_long_words: metrics::longest_words(&words, TOP_K),
            top10_short_words: metrics::shortest_words(&words, TOP_K),
            top10_long_sentences: metrics::longest_sentences(&sentences, TOP_K),
            top10_short_sentences: metrics::shortest_sentences(&sentences, TOP_K),
            number_of_palindromes: palindromes.len(),
            top10_long_palindromes: metrics::longest_palindromes(&palindromes, TOP_K),
            palindromes,
            text_is_palindrome: metrics::text_is_palindrome(text),
            reversed_text: metrics::reverse_text(text),
            reversed_text_char_order: metrics::reverse_token_order(text),
            sentences,
            words,
        })
    }
}
