//! Block element
//!
//! A block is one paragraph-equivalent unit of text. It is either body text or a heading at
//! one of the three levels the allocator hands out.
//!
//! Invariants:
//! - Heading blocks produced by the allocator carry the keyword, not the source paragraph.
//! - Body blocks carry the paragraph text as given (trimmed by the allocator).

use serde::{Deserialize, Serialize};
use std::fmt;

/// Structural level of a block
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum Level {
    Body,
    Heading1,
    Heading2,
    Heading3,
}

impl Level {
    /// All heading levels, most prominent first
    pub const HEADINGS: [Level; 3] = [Level::Heading1, Level::Heading2, Level::Heading3];

    /// Numeric heading depth (1-3), `None` for body text
    pub fn heading_number(self) -> Option<u8> {
        match self {
            Level::Body => None,
            Level::Heading1 => Some(1),
            Level::Heading2 => Some(2),
            Level::Heading3 => Some(3),
        }
    }

    /// Inverse of [`Level::heading_number`]
    pub fn from_heading_number(number: u8) -> Option<Level> {
        match number {
            1 => Some(Level::Heading1),
            2 => Some(Level::Heading2),
            3 => Some(Level::Heading3),
            _ => None,
        }
    }

    pub fn is_heading(self) -> bool {
        self != Level::Body
    }
}

impl fmt::Display for Level {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.heading_number() {
            Some(n) => write!(f, "h{n}"),
            None => write!(f, "body"),
        }
    }
}

/// A single unit of document text
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Block {
    pub text: String,
    pub level: Level,
}

impl Block {
    pub fn new(text: impl Into<String>, level: Level) -> Self {
        Self {
            text: text.into(),
            level,
        }
    }

    pub fn body(text: impl Into<String>) -> Self {
        Self::new(text, Level::Body)
    }

    pub fn heading(text: impl Into<String>, level: Level) -> Self {
        debug_assert!(level.is_heading(), "heading blocks need a heading level");
        Self::new(text, level)
    }

    /// True when the block has no visible text
    pub fn is_blank(&self) -> bool {
        self.text.trim().is_empty()
    }
}

impl fmt::Display for Block {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}('{}')", self.level, self.text)
    }
}
