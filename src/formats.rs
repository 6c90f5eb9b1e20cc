//! Document formats
//!
//! Every format implements [`Format`] and is discoverable through [`FormatRegistry`]:
//!
//! - `html`: the rendered markup (right-to-left by default), readable back
//! - `markdown`: CommonMark headings and paragraphs
//! - `text`: one paragraph per line
//! - `json`: lossless serde form of the document

pub mod format;
pub mod html;
pub mod json;
pub mod markdown;
pub mod registry;
pub mod text;

pub use format::Format;
pub use html::HtmlFormat;
pub use json::JsonFormat;
pub use markdown::MarkdownFormat;
pub use registry::FormatRegistry;
pub use text::TextFormat;
