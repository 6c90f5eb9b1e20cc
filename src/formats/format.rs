//! The seam between article files and the flat [`Document`] the allocator works on

use crate::ast::Document;
use crate::error::FormatError;

/// One article encoding, readable, writable or both
///
/// Reading keeps only paragraphs and `h1`-`h3` style headings. Whatever a format cannot map onto
/// a [`Block`](crate::ast::Block) is dropped, so `parse(serialize(doc))` only has to preserve
/// non-blank blocks.
pub trait Format: Send + Sync {
    /// Registry key and the value accepted by `--from`/`--to`
    fn name(&self) -> &str;

    /// Shown by `list-formats`
    fn description(&self) -> &str {
        ""
    }

    /// File extensions this format claims, without the dot
    fn file_extensions(&self) -> &[&str] {
        &[]
    }

    /// Whether articles can be read in this format
    fn supports_parsing(&self) -> bool {
        false
    }

    /// Whether outlined documents can be written in this format
    fn supports_serialization(&self) -> bool {
        false
    }

    fn parse(&self, _source: &str) -> Result<Document, FormatError> {
        Err(FormatError::NotSupported(format!(
            "Format '{}' does not support parsing",
            self.name()
        )))
    }

    fn serialize(&self, _doc: &Document) -> Result<String, FormatError> {
        Err(FormatError::NotSupported(format!(
            "Format '{}' does not support serialization",
            self.name()
        )))
    }
}
