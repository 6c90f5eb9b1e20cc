//! Content health metrics
//!
//! Sentence-length statistics over the punctuation-based segmentation in
//! [`crate::segmenter`]. The acceptable band for the average sentence length is 15 to 25 words
//! inclusive; sentences over 25 words count as long.

use crate::segmenter;
use serde::Serialize;
use std::fmt;

const LONG_SENTENCE_WORDS: usize = 25;
const READABLE_MIN: f64 = 15.0;
const READABLE_MAX: f64 = 25.0;

/// Coarse readability verdict
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum Readability {
    #[serde(rename = "good")]
    Good,
    #[serde(rename = "needs improvement")]
    NeedsImprovement,
}

impl fmt::Display for Readability {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Readability::Good => write!(f, "good"),
            Readability::NeedsImprovement => write!(f, "needs improvement"),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ContentHealth {
    pub word_count: usize,
    pub sentence_count: usize,
    pub average_sentence_length: f64,
    pub long_sentences: usize,
    pub readability: Readability,
}

pub fn analyze(text: &str) -> ContentHealth {
    let sentences = segmenter::sentences(text);
    let word_count: usize = sentences.iter().map(|s| s.word_count()).sum();
    let long_sentences = sentences
        .iter()
        .filter(|s| s.word_count() > LONG_SENTENCE_WORDS)
        .count();

    let average = if sentences.is_empty() {
        0.0
    } else {
        word_count as f64 / sentences.len() as f64
    };

    // The verdict looks at the unrounded mean
    let readability = if (READABLE_MIN..=READABLE_MAX).contains(&average) {
        Readability::Good
    } else {
        Readability::NeedsImprovement
    };

    ContentHealth {
        word_count,
        sentence_count: sentences.len(),
        average_sentence_length: round_one_decimal(average),
        long_sentences,
        readability,
    }
}

fn round_one_decimal(value: f64) -> f64 {
    (value * 10.0).round() / 10.0
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_empty_text_yields_zero() {
        let health = analyze("");
        assert_eq!(health.word_count, 0);
        assert_eq!(health.sentence_count, 0);
        assert_eq!(health.average_sentence_length, 0.0);
        assert_eq!(health.long_sentences, 0);
        assert_eq!(health.readability, Readability::NeedsImprovement);
    }

    #[test]
    fn test_average_is_rounded_to_one_decimal() {
        // 1, 2 and 2 words
        let health = analyze("One. Two words. Two more.");
        assert_eq!(health.sentence_count, 3);
        assert_eq!(health.word_count, 5);
        assert_eq!(health.average_sentence_length, 1.7);
    }

    #[test]
    fn test_band_is_inclusive() {
        let fifteen = vec!["word"; 15].join(" ");
        let health = analyze(&format!("{fifteen}."));
        assert_eq!(health.average_sentence_length, 15.0);
        assert_eq!(health.readability, Readability::Good);

        let twenty_five = vec!["word"; 25].join(" ");
        let health = analyze(&format!("{twenty_five}!"));
        assert_eq!(health.readability, Readability::Good);
        assert_eq!(health.long_sentences, 0);
    }

    #[test]
    fn test_long_sentence_threshold() {
        let twenty_six = vec!["word"; 26].join(" ");
        let health = analyze(&format!("{twenty_six}?"));
        assert_eq!(health.long_sentences, 1);
        assert_eq!(health.readability, Readability::NeedsImprovement);
    }

    #[test]
    fn test_readability_serializes_as_text() {
        let json = serde_json::to_string(&Readability::NeedsImprovement).unwrap();
        assert_eq!(json, "\"needs improvement\"");
        assert_eq!(Readability::Good.to_string(), "good");
    }
}
