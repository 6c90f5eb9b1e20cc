//! Page metadata generation
//!
//! Title, description, focus keyword and tags derived from the text and the primary keywords.
//! Lengths are counted in characters (Unicode scalar values), never bytes, so Arabic and other
//! multi-byte scripts are cut on character boundaries.

use serde::{Deserialize, Serialize};

const DESCRIPTION_CHARS: usize = 300;
const MAX_TAGS: usize = 5;
const ELLIPSIS: &str = "...";

/// Wording used to build titles
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TitleTemplate {
    /// Appended to the focus keyword as `"{keyword} | {suffix}"`
    pub suffix: String,
    /// Used when there is no primary keyword
    pub fallback: String,
}

impl Default for TitleTemplate {
    fn default() -> Self {
        Self {
            suffix: "comprehensive guide".to_string(),
            fallback: "Complete article".to_string(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Metadata {
    pub meta_title: String,
    pub meta_description: String,
    pub focus_keyword: String,
    pub tags: Vec<String>,
}

pub fn generate(text: &str, primary: &[String], template: &TitleTemplate) -> Metadata {
    let focus_keyword = primary.first().cloned().unwrap_or_default();
    let meta_title = if focus_keyword.is_empty() {
        template.fallback.clone()
    } else {
        format!("{} | {}", focus_keyword, template.suffix)
    };

    Metadata {
        meta_title,
        meta_description: describe(text),
        focus_keyword,
        tags: primary.iter().take(MAX_TAGS).cloned().collect(),
    }
}

/// Short texts are returned untouched; long ones are cut, flattened to one line and marked
fn describe(text: &str) -> String {
    if text.chars().count() <= DESCRIPTION_CHARS {
        return text.to_string();
    }
    let head: String = text.chars().take(DESCRIPTION_CHARS).collect();
    format!("{}{}", head.replace('\n', " "), ELLIPSIS)
}
