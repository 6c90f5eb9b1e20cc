//! Keyword to heading allocation
//!
//! The allocator walks a document's paragraphs in order and promotes paragraphs that mention a
//! keyword into headings, under per-keyword, per-level quotas.
//!
//! Policy
//!
//!     For every non-blank paragraph (trimmed):
//!
//!     1. Primary keywords are scanned in list order. The first keyword contained in the text
//!        takes the first heading level, H1 then H2 then H3, that still has capacity for that
//!        keyword. A keyword with no capacity left at any level does not match and the scan
//!        moves on to the next primary keyword.
//!     2. If no primary keyword produced a heading, secondary keywords are scanned the same
//!        way, except that only H2 and H3 are eligible.
//!     3. A match emits a heading whose text is the keyword itself, followed by the paragraph
//!        as body text unless the paragraph is exactly the keyword.
//!     4. Paragraphs with no match are emitted as body text.
//!
//!     The policy is greedy and local: the earliest occurrences of a keyword drain the most
//!     prominent levels first and there is no look-ahead. Matching is plain substring
//!     containment, case-sensitive, with no stemming.
//!
//! Quota state is created per call and handed back read-only as [`HeadingUsage`].

use crate::ast::{Block, Document, Level};
use crate::segmenter::normalize_paragraph;
use indexmap::IndexMap;
use serde::{Deserialize, Serialize};
use tracing::debug;

/// Maximum number of headings a single keyword may receive at each level
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct QuotaLimits {
    pub h1: usize,
    pub h2: usize,
    pub h3: usize,
}

impl QuotaLimits {
    pub fn new(h1: usize, h2: usize, h3: usize) -> Self {
        Self { h1, h2, h3 }
    }

    pub fn limit(&self, level: Level) -> usize {
        match level {
            Level::Heading1 => self.h1,
            Level::Heading2 => self.h2,
            Level::Heading3 => self.h3,
            Level::Body => 0,
        }
    }
}

impl Default for QuotaLimits {
    fn default() -> Self {
        Self::new(1, 3, 2)
    }
}

/// Headings used by one keyword, per level
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
pub struct LevelCounts {
    pub h1: usize,
    pub h2: usize,
    pub h3: usize,
}

impl LevelCounts {
    pub fn get(&self, level: Level) -> usize {
        match level {
            Level::Heading1 => self.h1,
            Level::Heading2 => self.h2,
            Level::Heading3 => self.h3,
            Level::Body => 0,
        }
    }

    fn bump(&mut self, level: Level) {
        match level {
            Level::Heading1 => self.h1 += 1,
            Level::Heading2 => self.h2 += 1,
            Level::Heading3 => self.h3 += 1,
            Level::Body => {}
        }
    }

    pub fn total(&self) -> usize {
        self.h1 + self.h2 + self.h3
    }
}

/// Final quota state of a run, keyed by keyword in first-use order
pub type HeadingUsage = IndexMap<String, LevelCounts>;

/// Result of an allocation run
#[derive(Debug, Clone, PartialEq)]
pub struct Allocation {
    pub document: Document,
    pub usage: HeadingUsage,
}

/// Levels a primary keyword may take, most prominent first
const PRIMARY_LEVELS: [Level; 3] = [Level::Heading1, Level::Heading2, Level::Heading3];

/// Levels a secondary keyword may take; H1 is reserved for primary keywords
const SECONDARY_LEVELS: [Level; 2] = [Level::Heading2, Level::Heading3];

/// Per-call quota bookkeeping
struct QuotaState<'k> {
    limits: QuotaLimits,
    used: IndexMap<&'k str, LevelCounts>,
}

impl<'k> QuotaState<'k> {
    fn new(limits: QuotaLimits) -> Self {
        Self {
            limits,
            used: IndexMap::new(),
        }
    }

    /// First eligible level with capacity left for `keyword`
    fn available_level(&self, keyword: &str, eligible: &[Level]) -> Option<Level> {
        let counts = self.used.get(keyword).copied().unwrap_or_default();
        eligible
            .iter()
            .copied()
            .find(|&level| counts.get(level) < self.limits.limit(level))
    }

    fn consume(&mut self, keyword: &'k str, level: Level) {
        self.used.entry(keyword).or_default().bump(level);
    }

    fn into_usage(self) -> HeadingUsage {
        self.used
            .into_iter()
            .map(|(kw, counts)| (kw.to_string(), counts))
            .collect()
    }
}

/// Restructure `source` so keywords become headings
///
/// The source document is not modified. Heading levels already present in `source` are
/// ignored: every block is treated as a plain paragraph.
pub fn allocate(
    source: &Document,
    primary: &[String],
    secondary: &[String],
    limits: QuotaLimits,
) -> Allocation {
    let mut quota = QuotaState::new(limits);
    let mut document = Document::new();

    for block in source.iter() {
        let Some(text) = normalize_paragraph(&block.text) else {
            continue;
        };

        let matched = scan(&quota, text, primary, &PRIMARY_LEVELS)
            .or_else(|| scan(&quota, text, secondary, &SECONDARY_LEVELS));

        match matched {
            Some((keyword, level)) => {
                debug!(keyword = %keyword, level = %level, "promoting paragraph to heading");
                quota.consume(keyword, level);
                document.push(Block::heading(keyword.as_str(), level));
                if text != keyword.as_str() {
                    document.push(Block::body(text));
                }
            }
            None => document.push(Block::body(text)),
        }
    }

    Allocation {
        document,
        usage: quota.into_usage(),
    }
}

/// First keyword contained in `text` that still has an eligible level with capacity
fn scan<'k>(
    quota: &QuotaState<'_>,
    text: &str,
    keywords: &'k [String],
    eligible: &[Level],
) -> Option<(&'k String, Level)> {
    keywords
        .iter()
        .filter(|kw| !kw.is_empty() && text.contains(kw.as_str()))
        .find_map(|kw| quota.available_level(kw, eligible).map(|level| (kw, level)))
}
