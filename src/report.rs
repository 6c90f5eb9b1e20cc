//! Optimization report
//!
//! Everything an optimization run learned about a document, apart from the restructured
//! document itself. Analytics that were switched off are absent from the serialized form
//! rather than empty.

use crate::allocator::HeadingUsage;
use crate::analysis::{ContentHealth, Metadata, SemanticRelations};
use crate::config::AnalysisDepth;
use crate::error::{AnnotationError, Error, Result};
use crate::keywords::{KeywordKind, KeywordSet};
use serde::Serialize;

/// A keyword and the list it came from
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct KeywordEntry {
    pub keyword: String,
    pub kind: KeywordKind,
}

/// Outcome of the semantic analysis
///
/// A missing language model is a configuration problem, reported here instead of failing
/// the run.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(untagged)]
pub enum SemanticOutcome {
    Related { top_related_words: SemanticRelations },
    Unavailable { error: String },
}

impl SemanticOutcome {
    pub fn relations(&self) -> Option<&SemanticRelations> {
        match self {
            SemanticOutcome::Related { top_related_words } => Some(top_related_words),
            SemanticOutcome::Unavailable { .. } => None,
        }
    }

    pub fn error(&self) -> Option<&str> {
        match self {
            SemanticOutcome::Related { .. } => None,
            SemanticOutcome::Unavailable { error } => Some(error),
        }
    }
}

impl From<SemanticRelations> for SemanticOutcome {
    fn from(top_related_words: SemanticRelations) -> Self {
        SemanticOutcome::Related { top_related_words }
    }
}

impl From<&AnnotationError> for SemanticOutcome {
    fn from(err: &AnnotationError) -> Self {
        SemanticOutcome::Unavailable {
            error: err.to_string(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Report {
    pub language: String,
    pub analysis_depth: AnalysisDepth,
    pub keywords: Vec<KeywordEntry>,
    pub heading_usage: HeadingUsage,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub content_health: Option<ContentHealth>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub semantic: Option<SemanticOutcome>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub metadata: Option<Metadata>,
}

impl Report {
    /// Report with the keyword table and heading usage filled in, and no analytics
    pub fn new(
        language: impl Into<String>,
        analysis_depth: AnalysisDepth,
        keywords: &KeywordSet,
        heading_usage: HeadingUsage,
    ) -> Self {
        Self {
            language: language.into(),
            analysis_depth,
            keywords: keywords
                .tagged()
                .map(|(keyword, kind)| KeywordEntry {
                    keyword: keyword.to_string(),
                    kind,
                })
                .collect(),
            heading_usage,
            content_health: None,
            semantic: None,
            metadata: None,
        }
    }

    pub fn to_json(&self) -> Result<String> {
        serde_json::to_string_pretty(self).map_err(|e| Error::Report(e.to_string()))
    }

    pub fn to_yaml(&self) -> Result<String> {
        serde_yaml::to_string(self).map_err(|e| Error::Report(e.to_string()))
    }
}
