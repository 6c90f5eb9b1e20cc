//! Document model
//!
//! The model is deliberately flat: a [`Document`] is an ordered list of [`Block`]s, each tagged
//! with a [`Level`]. Heading hierarchy is implied by level order, the same way flat formats
//! (Markdown, HTML) express it.

pub mod block;
pub mod document;

pub use block::{Block, Level};
pub use document::Document;
