//! Text analytics
//!
//! Three independent analyses run over the document's full text:
//!
//! - [`health`]: sentence-length readability metrics
//! - [`semantic`]: words that co-occur with each keyword
//! - [`metadata`]: page title, description and tags
//!
//! They share nothing at runtime, so a failure to set up one (typically a missing language
//! model for [`semantic`]) never blocks the others.

pub mod health;
pub mod metadata;
pub mod semantic;

pub use health::{ContentHealth, Readability};
pub use metadata::{Metadata, TitleTemplate};
pub use semantic::{RelatedTerm, SemanticRelations};
