//! Text segmentation for statistics
//!
//! This is the crude, punctuation-driven segmentation used by the readability metrics and for
//! paragraph normalization. Linguistically aware segmentation lives behind the
//! [`Annotator`](crate::annotation::Annotator) trait instead.
//!
//! Rules:
//! - Sentences end at `.`, `!` or `?`. Pieces that are empty after trimming are discarded.
//! - Words are whitespace-delimited tokens.

use once_cell::sync::Lazy;
use regex::Regex;

static SENTENCE_TERMINATOR: Lazy<Regex> = Lazy::new(|| Regex::new(r"[.!?]").unwrap());

/// A sentence and its words, borrowed from the source text
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Sentence<'a> {
    pub text: &'a str,
    pub words: Vec<&'a str>,
}

impl<'a> Sentence<'a> {
    fn new(text: &'a str) -> Self {
        Self {
            text,
            words: words(text),
        }
    }

    pub fn word_count(&self) -> usize {
        self.words.len()
    }
}

/// Split text into trimmed, non-empty sentences
pub fn sentences(text: &str) -> Vec<Sentence<'_>> {
    SENTENCE_TERMINATOR
        .split(text)
        .map(str::trim)
        .filter(|s| !s.is_empty())
        .map(Sentence::new)
        .collect()
}

/// Whitespace-delimited words
pub fn words(text: &str) -> Vec<&str> {
    text.split_whitespace().collect()
}

/// Trim a paragraph and report whether anything is left
pub fn normalize_paragraph(text: &str) -> Option<&str> {
    let trimmed = text.trim();
    (!trimmed.is_empty()).then_some(trimmed)
}
