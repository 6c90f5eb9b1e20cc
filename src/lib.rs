//! # seo-outline
//!
//! Keyword-driven heading restructuring for prose documents, plus the content analytics that
//! usually go with it.
//!
//! A document is a flat list of paragraphs. Given ranked primary and secondary keyword lists,
//! the [allocator](allocator) promotes paragraphs that mention a keyword into headings under
//! per-keyword, per-level quotas. The [analysis] module reports sentence-length health, words
//! that co-occur with each keyword and page metadata.
//!
//! ```text
//! Document + KeywordSet ──► allocator ──► restructured Document ──► formats (html, markdown, ...)
//!        │
//!        └─ full text ──► health / semantic / metadata ──► Report (json, yaml)
//! ```
//!
//! [`pipeline::Optimizer`] runs the whole thing from an [`config::OptimizerConfig`].

pub mod allocator;
pub mod analysis;
pub mod annotation;
pub mod ast;
pub mod config;
pub mod error;
pub mod formats;
pub mod keywords;
pub mod pipeline;
pub mod report;
pub mod segmenter;

pub use allocator::{allocate, Allocation, HeadingUsage, LevelCounts, QuotaLimits};
pub use ast::{Block, Document, Level};
pub use config::{Loader, OptimizerConfig};
pub use error::{Error, Result};
pub use formats::{Format, FormatRegistry};
pub use keywords::{KeywordKind, KeywordSet};
pub use pipeline::{Optimization, Optimizer};
pub use report::Report;
