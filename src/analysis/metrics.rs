// Copyright (c) 2025 Steve Wagner (ciroque@live.com)
// SPDX-License-Identifier: MIT

//! Derived metrics over raw text, sentences and words.
//!
//! Lengths are measured in characters, not bytes. Every ranking is
//! deterministic: distinct words and palindromes break length ties
//! lexicographically, sentences keep source order, and word frequencies keep
//! first-occurrence order.

use std::cmp::Reverse;
use std::collections::{BTreeMap, BTreeSet, HashMap};

use crate::analysis::words::strip_non_word;
use crate::errors::AnalysisError;

/// How many entries every `top10_*` ranking holds at most.
pub const TOP_K: usize = 10;

fn char_len(s: &str) -> usize {
    s.chars().count()
}

fn mean<I>(values: I, metric: &'static str) -> Result<f64, AnalysisError>
where
    I: ExactSizeIterator<Item = usize>,
{
    let count = values.len();
    if count == 0 {
        return Err(AnalysisError::EmptyInput { metric });
    }
    let total: usize = values.sum();
    Ok(total as f64 / count as f64)
}

/// Non-whitespace characters in `text`.
pub fn count_characters(text: &str) -> usize {
    text.chars().filter(|c| !c.is_whitespace()).count()
}

/// Occurrences of every character, whitespace included.
pub fn char_frequencies(text: &str) -> BTreeMap<char, usize> {
    let mut frequencies = BTreeMap::new();
    for c in text.chars() {
        *frequencies.entry(c).or_insert(0) += 1;
    }
    frequencies
}

pub fn mean_word_length<S: AsRef<str>>(words: &[S]) -> Result<f64, AnalysisError> {
    mean(
        words.iter().map(|word| char_len(word.as_ref())),
        "avrg_word_length",
    )
}

pub fn mean_words_per_sentence<S: AsRef<str>>(sentences: &[S]) -> Result<f64, AnalysisError> {
    mean(
        sentences
            .iter()
            .map(|sentence| sentence.as_ref().split_whitespace().count()),
        "avrg_words_in_sentence",
    )
}

/// The `k` most frequent lowercased words with their counts.
///
/// Equal counts keep the order in which the words were first seen.
pub fn top_words<S: AsRef<str>>(words: &[S], k: usize) -> Vec<(String, usize)> {
    let mut counts: Vec<(String, usize)> = Vec::new();
    let mut index: HashMap<String, usize> = HashMap::new();

    for word in words {
        let lowered = word.as_ref().to_lowercase();
        match index.get(&lowered) {
            Some(&position) => counts[position].1 += 1,
            None => {
                index.insert(lowered.clone(), counts.len());
                counts.push((lowered, 1));
            }
        }
    }

    counts.sort_by_key(|(_, count)| Reverse(*count));
    counts.truncate(k);
    counts
}

fn distinct_by_length<'a, I>(words: I, k: usize, longest: bool) -> Vec<String>
where
    I: IntoIterator<Item = &'a str>,
{
    // BTreeSet iteration is lexicographic, and the sort below is stable.
    let mut distinct: Vec<&str> = words.into_iter().collect::<BTreeSet<_>>().into_iter().collect();
    if longest {
        distinct.sort_by_key(|word| Reverse(char_len(word)));
    } else {
        distinct.sort_by_key(|word| char_len(word));
    }
    distinct.into_iter().take(k).map(str::to_string).collect()
}

/// The `k` longest distinct words, ties in lexicographic order.
pub fn longest_words<S: AsRef<str>>(words: &[S], k: usize) -> Vec<String> {
    distinct_by_length(words.iter().map(AsRef::as_ref), k, true)
}

/// The `k` shortest distinct words, ties in lexicographic order.
pub fn shortest_words<S: AsRef<str>>(words: &[S], k: usize) -> Vec<String> {
    distinct_by_length(words.iter().map(AsRef::as_ref), k, false)
}

/// The `k` longest sentences; duplicates are kept and ties keep source order.
pub fn longest_sentences<S: AsRef<str>>(sentences: &[S], k: usize) -> Vec<String> {
    let mut ranked: Vec<&str> = sentences.iter().map(AsRef::as_ref).collect();
    ranked.sort_by_key(|sentence| Reverse(char_len(sentence)));
    ranked.into_iter().take(k).map(str::to_string).collect()
}

/// The `k` shortest sentences; duplicates are kept and ties keep source order.
pub fn shortest_sentences<S: AsRef<str>>(sentences: &[S], k: usize) -> Vec<String> {
    let mut ranked: Vec<&str> = sentences.iter().map(AsRef::as_ref).collect();
    ranked.sort_by_key(|sentence| char_len(sentence));
    ranked.into_iter().take(k).map(str::to_string).collect()
}

fn is_palindrome(s: &str) -> bool {
    s.chars().eq(s.chars().rev())
}

/// Distinct words equal to their own reverse, compared case-sensitively.
///
/// The empty word counts, so punctuation-only tokens contribute `""`.
pub fn palindromes<S: AsRef<str>>(words: &[S]) -> BTreeSet<String> {
    words
        .iter()
        .map(AsRef::as_ref)
        .filter(|word| is_palindrome(word))
        .map(str::to_string)
        .collect()
}

/// The `k` longest palindromes, ties in lexicographic order.
pub fn longest_palindromes(palindromes: &BTreeSet<String>, k: usize) -> Vec<String> {
    distinct_by_length(palindromes.iter().map(String::as_str), k, true)
}

/// Whether `text` reads the same backwards once non-word characters are gone.
pub fn text_is_palindrome(text: &str) -> bool {
    is_palindrome(&strip_non_word(text))
}

/// `text` with its characters in reverse order.
pub fn reverse_text(text: &str) -> String {
    text.chars().rev().collect()
}

/// Whitespace tokens of `text` in reverse order, joined by single spaces.
pub fn reverse_token_order(text: &str) -> String {
    text.split_whitespace().rev().collect::<Vec<_>>().join(" ")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_count_characters_ignores_whitespace() {
        assert_eq!(count_characters("a b\tc\n d "), 4);
        assert_eq!(count_characters(""), 0);
        assert_eq!(count_characters("héllo wörld"), 10);
    }

    #[test]
    fn test_char_frequencies_include_whitespace() {
        let frequencies = char_frequencies("aa b");
        assert_eq!(frequencies.get(&'a'), Some(&2));
        assert_eq!(frequencies.get(&' '), Some(&1));
        assert_eq!(frequencies.get(&'b'), Some(&1));
        assert_eq!(frequencies.len(), 3);
    }

    #[test]
    fn test_means() {
        assert_eq!(mean_word_length(&["ab", "abcd"]).unwrap(), 3.0);
        assert_eq!(mean_word_length(&["", "abcd"]).unwrap(), 2.0);
        assert_eq!(
            mean_words_per_sentence(&["one two three.", "four."]).unwrap(),
            2.0
        );
    }

    #[test]
    fn test_means_fail_on_empty_input() {
        let empty: [&str; 0] = [];
        assert!(matches!(
            mean_word_length(&empty),
            Err(AnalysisError::EmptyInput { metric: "avrg_word_length" })
        ));
        assert!(matches!(
            mean_words_per_sentence(&empty),
            Err(AnalysisError::EmptyInput { metric: "avrg_words_in_sentence" })
        ));
    }

    #[test]
    fn test_top_words_ranks_by_count_then_first_seen() {
        let words = ["cat", "dog", "cat", "bird", "cat", "dog"];
        assert_eq!(
            top_words(&words, TOP_K),
            vec![
                ("cat".to_string(), 3),
                ("dog".to_string(), 2),
                ("bird".to_string(), 1),
            ]
        );
    }

    #[test]
    fn test_top_words_lowercases_and_truncates() {
        let words = ["The", "the", "b", "a", "THE", "a"];
        assert_eq!(
            top_words(&words, 2),
            vec![("the".to_string(), 3), ("a".to_string(), 2)]
        );

        let many: Vec<String> = (0..15).map(|i| format!("w{}", i)).collect();
        let top = top_words(&many, TOP_K);
        assert_eq!(top.len(), TOP_K);
        assert_eq!(top[0], ("w0".to_string(), 1));
        assert_eq!(top[9], ("w9".to_string(), 1));
    }

    #[test]
    fn test_word_length_rankings_are_distinct_and_deterministic() {
        let words = ["bb", "a", "ccc", "aa", "bb", "c", "ccc"];
        assert_eq!(longest_words(&words, TOP_K), vec!["ccc", "aa", "bb", "a", "c"]);
        assert_eq!(shortest_words(&words, TOP_K), vec!["a", "c", "aa", "bb", "ccc"]);
        assert_eq!(longest_words(&words, 2), vec!["ccc", "aa"]);
    }

    #[test]
    fn test_sentence_rankings_keep_duplicates() {
        let sentences = ["Hi.", "Hello there.", "Hi.", "Yo."];
        assert_eq!(
            longest_sentences(&sentences, TOP_K),
            vec!["Hello there.", "Hi.", "Hi.", "Yo."]
        );
        assert_eq!(
            shortest_sentences(&sentences, TOP_K),
            vec!["Hi.", "Hi.", "Yo.", "Hello there."]
        );
    }

    #[test]
    fn test_palindromes_are_case_sensitive_and_include_empty() {
        let words = ["racecar", "Anna", "anna", "level", "", "x", "racecar", "hello"];
        let found = palindromes(&words);
        let expected: BTreeSet<String> = ["", "anna", "level", "racecar", "x"]
            .iter()
            .map(|s| s.to_string())
            .collect();
        assert_eq!(found, expected);
        assert_eq!(
            longest_palindromes(&found, 3),
            vec!["racecar", "level", "anna"]
        );
    }

    #[test]
    fn test_text_is_palindrome_compares_against_reverse() {
        assert!(text_is_palindrome("step on, no pets!"));
        assert!(text_is_palindrome("racecar!"));
        assert!(!text_is_palindrome("A man, a plan, a canal: Panama"));
        assert!(!text_is_palindrome("hello"));
        assert!(text_is_palindrome(""));
    }

    #[test]
    fn test_reversals() {
        let text = "Hello  wide\nworld";
        assert_eq!(reverse_text(text), "dlrow\nediw  olleH");
        assert_eq!(reverse_text(&reverse_text(text)), text);
        assert_eq!(reverse_token_order(text), "world wide Hello");
        assert_eq!(reverse_token_order("   "), "");
    }
}
