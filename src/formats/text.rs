//! Plain text format
//!
//! One paragraph per non-blank line, the layout word processors produce when exporting to
//! plain text. Serialization writes one block per line and drops heading levels, so it is lossy.

use crate::ast::{Block, Document};
use crate::error::FormatError;
use crate::formats::format::Format;

pub struct TextFormat;

impl Format for TextFormat {
    fn name(&self) -> &str {
        "text"
    }

    fn description(&self) -> &str {
        "Plain text, one paragraph per line"
    }

    fn file_extensions(&self) -> &[&str] {
        &["txt", "text"]
    }

    fn supports_parsing(&self) -> bool {
        true
    }

    fn supports_serialization(&self) -> bool {
        true
    }

    fn parse(&self, source: &str) -> Result<Document, FormatError> {
        Ok(source
            .lines()
            .filter(|line| !line.trim().is_empty())
            .map(Block::body)
            .collect())
    }

    fn serialize(&self, doc: &Document) -> Result<String, FormatError> {
        Ok(doc
            .iter_non_blank()
            .map(|b| format!("{}\n", b.text.trim()))
            .collect())
    }
}
