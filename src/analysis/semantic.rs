//! Keyword context extraction
//!
//! For every keyword present in the text, collect the words that share sentences with it and
//! report the three most frequent ones.
//!
//! Per matching sentence only the first five alphabetic tokens count, and tokens whose
//! lowercase form equals any keyword (lowercased) are skipped. Sentence membership and keyword
//! presence are plain substring checks, same as the allocator. Ties keep first-seen order.

use crate::annotation::{AnnotatedText, Annotator};
use indexmap::IndexMap;
use serde::Serialize;
use tracing::debug;

const TOKENS_PER_SENTENCE: usize = 5;
const TOP_RELATED: usize = 3;

/// A co-occurring token and how often it was seen
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct RelatedTerm {
    pub term: String,
    pub count: usize,
}

impl RelatedTerm {
    pub fn new(term: impl Into<String>, count: usize) -> Self {
        Self {
            term: term.into(),
            count,
        }
    }
}

/// Keyword to ranked related terms, in keyword order
pub type SemanticRelations = IndexMap<String, Vec<RelatedTerm>>;

/// Annotate `text` with `annotator` and extract related terms for `keywords`
pub fn extract(text: &str, keywords: &[String], annotator: &dyn Annotator) -> SemanticRelations {
    let annotated = annotator.annotate(text);
    extract_from(text, &annotated, keywords)
}

/// Extract related terms from an already annotated text
pub fn extract_from(
    text: &str,
    annotated: &AnnotatedText,
    keywords: &[String],
) -> SemanticRelations {
    let lowered: Vec<String> = keywords.iter().map(|k| k.to_lowercase()).collect();
    let mut relations = SemanticRelations::new();

    for keyword in keywords {
        if keyword.is_empty() || relations.contains_key(keyword) || !text.contains(keyword.as_str())
        {
            continue;
        }

        let mut counts: IndexMap<&str, usize> = IndexMap::new();
        let mut matched_sentences = 0usize;

        for sentence in annotated
            .sentences
            .iter()
            .filter(|s| s.text.contains(keyword.as_str()))
        {
            matched_sentences += 1;
            sentence
                .tokens
                .iter()
                .filter(|t| t.is_alpha && !lowered.contains(&t.lower))
                .take(TOKENS_PER_SENTENCE)
                .for_each(|t| *counts.entry(t.text.as_str()).or_insert(0) += 1);
        }

        if matched_sentences == 0 {
            continue;
        }

        debug!(keyword = %keyword, sentences = matched_sentences, "collected keyword context");
        relations.insert(keyword.clone(), top_terms(counts));
    }

    relations
}

/// Highest counts first; the stable sort keeps first-seen order among equals
fn top_terms(counts: IndexMap<&str, usize>) -> Vec<RelatedTerm> {
    let mut ranked: Vec<(&str, usize)> = counts.into_iter().collect();
    ranked.sort_by(|a, b| b.1.cmp(&a.1));
    ranked
        .into_iter()
        .take(TOP_RELATED)
        .map(|(term, count)| RelatedTerm::new(term, count))
        .collect()
}
