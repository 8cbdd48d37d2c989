// Copyright (c) 2025 Steve Wagner (ciroque@live.com)
// SPDX-License-Identifier: MIT

//! Sentence boundary detection.
//!
//! The splitter is a rule-based take on the Punkt approach: a run of terminal
//! punctuation followed by whitespace is a candidate boundary, and candidates
//! are rejected when they are followed by a lowercase word, or when they look
//! like an abbreviation or an initial and the next word is not a known
//! sentence starter. The abbreviation and starter lists live in a
//! [`SentenceModel`] that is installed on disk once and then loaded; nothing
//! on the analysis path touches the network or the filesystem.

use std::collections::HashSet;
use std::fs;
use std::path::{Path, PathBuf};
use std::sync::{Arc, OnceLock};

use crate::config::consts::{MODEL_FILE, MODEL_SUBDIR};
use crate::errors::ModelError;
use crate::observability::messages::{
    model::{ModelInstalled, ModelLoaded},
    StructuredLog,
};

const BUNDLED_MODEL: &str = include_str!("../../data/punkt/english.abbrev");

static GLOBAL_MODEL: OnceLock<Arc<SentenceModel>> = OnceLock::new();

/// Language data used by [`SentenceTokenizer`].
#[derive(Debug, Clone, Default, PartialEq)]
pub struct SentenceModel {
    abbreviations: HashSet<String>,
    starters: HashSet<String>,
}

enum Section {
    Abbreviations,
    Starters,
    Unknown,
}

impl SentenceModel {
    /// Build a model from an explicit abbreviation list.
    ///
    /// Entries are lowercased and a trailing period is dropped, so `"Dr."`
    /// and `"dr"` are the same entry.
    pub fn from_abbreviations<I, S>(abbreviations: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        Self {
            abbreviations: normalize_entries(abbreviations),
            starters: HashSet::new(),
        }
    }

    /// Add words that open a sentence even after an abbreviation or initial.
    pub fn with_starters<I, S>(mut self, starters: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        self.starters.extend(normalize_entries(starters));
        self
    }

    /// The model compiled into the binary.
    pub fn bundled() -> Self {
        Self::parse(BUNDLED_MODEL)
    }

    /// Make sure the model file exists under `data_dir` and return its path.
    ///
    /// An existing file is never rewritten, which lets users curate their own
    /// list. The write goes through a temporary file and a rename so a
    /// concurrent process never sees a half-written model.
    pub fn install<P: AsRef<Path>>(data_dir: P) -> Result<PathBuf, ModelError> {
        let dir = data_dir.as_ref().join(MODEL_SUBDIR);
        let path = dir.join(MODEL_FILE);
        if path.is_file() {
            return Ok(path);
        }

        let install_error = |source| ModelError::Install {
            dir: dir.clone(),
            source,
        };

        fs::create_dir_all(&dir).map_err(install_error)?;
        let staging = dir.join(format!("{}.{}.tmp", MODEL_FILE, std::process::id()));
        fs::write(&staging, BUNDLED_MODEL).map_err(install_error)?;
        fs::rename(&staging, &path).map_err(install_error)?;

        ModelInstalled { path: &path }.log();
        Ok(path)
    }

    /// Read a model file: one entry per line, `#` starts a comment.
    ///
    /// Entries belong to the `[abbreviations]` section until a `[starters]`
    /// header switches sections.
    pub fn load<P: AsRef<Path>>(path: P) -> Result<Self, ModelError> {
        let path = path.as_ref();
        let content = fs::read_to_string(path).map_err(|source| ModelError::Read {
            path: path.to_path_buf(),
            source,
        })?;

        let model = Self::parse(&content);
        if model.abbreviations.is_empty() {
            return Err(ModelError::Empty {
                path: path.to_path_buf(),
            });
        }

        ModelLoaded {
            path,
            abbreviations: model.len(),
            starters: model.starters.len(),
        }
        .log();
        Ok(model)
    }

    /// Install and load the model once per process.
    ///
    /// The first successful call wins; later calls return the cached model
    /// even if they pass a different directory.
    pub fn global<P: AsRef<Path>>(data_dir: P) -> Result<Arc<Self>, ModelError> {
        if let Some(model) = GLOBAL_MODEL.get() {
            return Ok(Arc::clone(model));
        }

        let path = Self::install(data_dir)?;
        let model = Arc::new(Self::load(path)?);
        Ok(Arc::clone(GLOBAL_MODEL.get_or_init(|| model)))
    }

    pub fn is_abbreviation(&self, token: &str) -> bool {
        self.abbreviations.contains(&token.to_lowercase())
    }

    pub fn is_sentence_starter(&self, word: &str) -> bool {
        self.starters.contains(&word.to_lowercase())
    }

    /// Number of abbreviations.
    pub fn len(&self) -> usize {
        self.abbreviations.len()
    }

    pub fn is_empty(&self) -> bool {
        self.abbreviations.is_empty()
    }

    fn parse(content: &str) -> Self {
        let mut abbreviations = Vec::new();
        let mut starters = Vec::new();
        let mut section = Section::Abbreviations;

        for line in content.lines() {
            let entry = line.split('#').next().unwrap_or_default().trim();
            match entry {
                "[abbreviations]" => section = Section::Abbreviations,
                "[starters]" => section = Section::Starters,
                _ if entry.starts_with('[') && entry.ends_with(']') => section = Section::Unknown,
                _ => match section {
                    Section::Abbreviations => abbreviations.push(entry),
                    Section::Starters => starters.push(entry),
                    Section::Unknown => {}
                },
            }
        }

        Self::from_abbreviations(abbreviations).with_starters(starters)
    }
}

fn normalize_entries<I, S>(entries: I) -> HashSet<String>
where
    I: IntoIterator<Item = S>,
    S: AsRef<str>,
{
    entries
        .into_iter()
        .filter_map(|entry| normalize_entry(entry.as_ref()))
        .collect()
}

fn normalize_entry(entry: &str) -> Option<String> {
    let entry = entry.trim().trim_end_matches('.');
    if entry.is_empty() {
        None
    } else {
        Some(entry.to_lowercase())
    }
}

fn is_terminal(c: char) -> bool {
    matches!(c, '.' | '?' | '!')
}

fn is_closing(c: char) -> bool {
    matches!(c, '"' | '\'' | ')' | ']' | '}' | '”' | '’' | '»')
}

fn is_opening(c: char) -> bool {
    matches!(c, '"' | '\'' | '(' | '[' | '{' | '“' | '‘' | '«')
}

/// Splits raw text into sentences.
#[derive(Debug, Clone)]
pub struct SentenceTokenizer {
    model: Arc<SentenceModel>,
}

impl SentenceTokenizer {
    pub fn new(model: Arc<SentenceModel>) -> Self {
        Self { model }
    }

    pub fn model(&self) -> &SentenceModel {
        &self.model
    }

    /// Split `text` into trimmed sentences in source order.
    ///
    /// Terminal punctuation and closing quotes stay with their sentence.
    /// Text without a recognised boundary comes back as a single sentence;
    /// blank text yields none.
    pub fn tokenize(&self, text: &str) -> Vec<String> {
        let mut sentences = Vec::new();
        let mut start = 0;
        let mut chars = text.char_indices().peekable();

        while let Some((idx, c)) = chars.next() {
            if !is_terminal(c) {
                continue;
            }

            let run_start = idx;
            let mut run_end = idx + c.len_utf8();
            let mut single_period = c == '.';
            while let Some(&(next_idx, next)) = chars.peek() {
                if !is_terminal(next) {
                    break;
                }
                single_period = false;
                run_end = next_idx + next.len_utf8();
                chars.next();
            }

            let mut end = run_end;
            while let Some(&(next_idx, next)) = chars.peek() {
                if !is_closing(next) {
                    break;
                }
                end = next_idx + next.len_utf8();
                chars.next();
            }

            let rest = &text[end..];
            if !rest.is_empty() && !rest.starts_with(char::is_whitespace) {
                continue;
            }

            if self.is_boundary(&text[start..run_start], single_period, rest) {
                push_trimmed(&mut sentences, &text[start..end]);
                start = end;
            }
        }

        push_trimmed(&mut sentences, &text[start..]);
        sentences
    }

    fn is_boundary(&self, before: &str, single_period: bool, rest: &str) -> bool {
        let next_word = rest.trim_start();
        if next_word.is_empty() {
            return true;
        }

        let next_word = next_word
            .trim_start_matches(is_opening)
            .split(char::is_whitespace)
            .next()
            .unwrap_or_default();
        if next_word.chars().next().is_some_and(char::is_lowercase) {
            return false;
        }

        if single_period {
            let token = before
                .rsplit(char::is_whitespace)
                .next()
                .unwrap_or_default()
                .trim_start_matches(is_opening);
            let mut token_chars = token.chars();
            let is_initial = matches!(
                (token_chars.next(), token_chars.next()),
                (Some(first), None) if first.is_alphabetic()
            );
            if is_initial || self.model.is_abbreviation(token) {
                let next_word = next_word.trim_end_matches(|c: char| !c.is_alphanumeric());
                return self.model.is_sentence_starter(next_word);
            }
        }

        true
    }
}

fn push_trimmed(sentences: &mut Vec<String>, candidate: &str) {
    let trimmed = candidate.trim();
    if !trimmed.is_empty() {
        sentences.push(trimmed.to_string());
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn tokenizer() -> SentenceTokenizer {
        SentenceTokenizer::new(Arc::new(SentenceModel::bundled()))
    }

    #[test]
    fn test_splits_on_terminal_punctuation() {
        let sentences = tokenizer().tokenize("Hello there. How are you? I am fine!");
        assert_eq!(sentences, vec!["Hello there.", "How are you?", "I am fine!"]);
    }

    #[test]
    fn test_empty_and_blank_text() {
        assert!(tokenizer().tokenize("").is_empty());
        assert!(tokenizer().tokenize("  \n\t ").is_empty());
    }

    #[test]
    fn test_text_without_terminal_punctuation_is_one_sentence() {
        assert_eq!(tokenizer().tokenize("  racecar  "), vec!["racecar"]);
        assert_eq!(
            tokenizer().tokenize("A man, a plan, a canal: Panama"),
            vec!["A man, a plan, a canal: Panama"]
        );
    }

    #[test]
    fn test_abbreviations_do_not_split() {
        let sentences = tokenizer().tokenize("Dr. Smith met Mr. Jones at noon. Then they left.");
        assert_eq!(
            sentences,
            vec!["Dr. Smith met Mr. Jones at noon.", "Then they left."]
        );
        assert_eq!(
            tokenizer().tokenize("We met at 5 p.m. sharp."),
            vec!["We met at 5 p.m. sharp."]
        );
    }

    #[test]
    fn test_initials_do_not_split() {
        let sentences = tokenizer().tokenize("J. R. R. Tolkien wrote books. They sold well.");
        assert_eq!(
            sentences,
            vec!["J. R. R. Tolkien wrote books.", "They sold well."]
        );
    }

    #[test]
    fn test_initials_split_before_sentence_starters() {
        assert_eq!(
            tokenizer().tokenize("So did I. Then we left."),
            vec!["So did I.", "Then we left."]
        );
        assert_eq!(
            tokenizer().tokenize("He chose plan B. The rest followed."),
            vec!["He chose plan B.", "The rest followed."]
        );
    }

    #[test]
    fn test_abbreviations_split_before_sentence_starters() {
        assert_eq!(
            tokenizer().tokenize("I bought apples, pears, etc. The store closed."),
            vec!["I bought apples, pears, etc.", "The store closed."]
        );
        assert_eq!(
            tokenizer().tokenize("Meet me at 5 p.m. \"Tomorrow,\" she said, \"works too.\""),
            vec!["Meet me at 5 p.m.", "\"Tomorrow,\" she said, \"works too.\""]
        );
    }

    #[test]
    fn test_lowercase_continuation_does_not_split() {
        let sentences = tokenizer().tokenize("It costs approx. five dollars. wow. Next one.");
        assert_eq!(sentences, vec!["It costs approx. five dollars. wow.", "Next one."]);
    }

    #[test]
    fn test_decimal_numbers_do_not_split() {
        assert_eq!(
            tokenizer().tokenize("Pi is 3.14 roughly. Yes."),
            vec!["Pi is 3.14 roughly.", "Yes."]
        );
    }

    #[test]
    fn test_closing_quotes_stay_with_sentence() {
        let sentences = tokenizer().tokenize("He said \"stop!\" She stopped. (It worked.) Done");
        assert_eq!(
            sentences,
            vec!["He said \"stop!\"", "She stopped.", "(It worked.)", "Done"]
        );
    }

    #[test]
    fn test_ellipsis_and_mixed_runs() {
        let sentences = tokenizer().tokenize("Wait... What?! Fine.");
        assert_eq!(sentences, vec!["Wait...", "What?!", "Fine."]);
    }

    #[test]
    fn test_model_entries_are_normalized() {
        let model = SentenceModel::from_abbreviations(["Dr.", "  ETC ", "", "."]);
        assert_eq!(model.len(), 2);
        assert!(model.is_abbreviation("dr"));
        assert!(model.is_abbreviation("Etc"));

        let model = model.with_starters(["The", " then "]);
        assert!(model.is_sentence_starter("the"));
        assert!(model.is_sentence_starter("THEN"));
        assert!(!model.is_sentence_starter("dr"));
    }

    #[test]
    fn test_bundled_model_has_both_sections() {
        let model = SentenceModel::bundled();
        assert!(model.is_abbreviation("etc"));
        assert!(!model.is_abbreviation("the"));
        assert!(model.is_sentence_starter("The"));
        assert!(!model.is_sentence_starter("etc"));
        assert!(!model.is_sentence_starter("who"));
    }

    #[test]
    fn test_custom_model_changes_boundaries() {
        let empty = SentenceTokenizer::new(Arc::new(SentenceModel::default()));
        assert_eq!(empty.tokenize("See Dr. Who."), vec!["See Dr.", "Who."]);
        assert_eq!(tokenizer().tokenize("See Dr. Who."), vec!["See Dr. Who."]);
    }

    #[test]
    fn test_install_is_idempotent_and_keeps_existing_file() {
        let dir = tempfile::tempdir().unwrap();

        let path = SentenceModel::install(dir.path()).unwrap();
        assert!(path.ends_with("punkt/english.abbrev"));
        assert_eq!(SentenceModel::load(&path).unwrap(), SentenceModel::bundled());

        fs::write(&path, "foo\nbar # trailing comment\n[starters]\nthe\n").unwrap();
        let again = SentenceModel::install(dir.path()).unwrap();
        assert_eq!(again, path);

        let curated = SentenceModel::load(&path).unwrap();
        assert_eq!(curated.len(), 2);
        assert!(curated.is_abbreviation("bar"));
        assert!(curated.is_sentence_starter("the"));
        assert!(!curated.is_abbreviation("the"));
    }

    #[test]
    fn test_load_rejects_empty_model() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("empty.abbrev");
        fs::write(&path, "# nothing here\n\n").unwrap();

        assert!(matches!(SentenceModel::load(&path), Err(ModelError::Empty { .. })));
    }

    #[test]
    fn test_global_model_is_cached() {
        let dir = tempfile::tempdir().unwrap();
        let first = SentenceModel::global(dir.path()).unwrap();
        let second = SentenceModel::global("/nonexistent/is/never/touched").unwrap();
        assert!(Arc::ptr_eq(&first, &second));
    }
}
