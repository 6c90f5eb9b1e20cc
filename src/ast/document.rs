//! Document element
//!
//! A document is a flat, ordered list of blocks. Source documents come from a format parser
//! (see [`crate::formats`]); restructured documents come from the allocator, which always
//! builds a new document instead of editing its input.

use super::block::{Block, Level};
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Document {
    pub blocks: Vec<Block>,
}

impl Document {
    pub fn new() -> Self {
        Self { blocks: Vec::new() }
    }

    pub fn with_blocks(blocks: Vec<Block>) -> Self {
        Self { blocks }
    }

    /// Build a body-only document, one block per paragraph
    pub fn from_paragraphs<I, S>(paragraphs: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            blocks: paragraphs.into_iter().map(Block::body).collect(),
        }
    }

    pub fn push(&mut self, block: Block) {
        self.blocks.push(block);
    }

    pub fn len(&self) -> usize {
        self.blocks.len()
    }

    pub fn is_empty(&self) -> bool {
        self.blocks.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = &Block> {
        self.blocks.iter()
    }

    pub fn iter_headings(&self) -> impl Iterator<Item = &Block> {
        self.blocks.iter().filter(|b| b.level.is_heading())
    }

    pub fn iter_non_blank(&self) -> impl Iterator<Item = &Block> {
        self.blocks.iter().filter(|b| !b.is_blank())
    }

    pub fn count_level(&self, level: Level) -> usize {
        self.blocks.iter().filter(|b| b.level == level).count()
    }

    /// Newline-joined text of every non-blank block, as fed to the analytics
    pub fn full_text(&self) -> String {
        self.iter_non_blank()
            .map(|b| b.text.as_str())
            .collect::<Vec<_>>()
            .join("\n")
    }
}

impl FromIterator<Block> for Document {
    fn from_iter<T: IntoIterator<Item = Block>>(iter: T) -> Self {
        Self {
            blocks: iter.into_iter().collect(),
        }
    }
}

impl<'a> IntoIterator for &'a Document {
    type Item = &'a Block;
    type IntoIter = std::slice::Iter<'a, Block>;

    fn into_iter(self) -> Self::IntoIter {
        self.blocks.iter()
    }
}
