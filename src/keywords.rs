//! Keyword lists
//!
//! Keywords arrive as newline-delimited free text, one keyword or phrase per line. They are
//! matched verbatim (substring containment, case-sensitive) so no normalization beyond trimming
//! happens here.

use serde::Serialize;
use tracing::debug;

/// Which list a keyword belongs to
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum KeywordKind {
    Primary,
    Secondary,
}

/// Primary and secondary keywords, disjoint and in priority order
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct KeywordSet {
    primary: Vec<String>,
    secondary: Vec<String>,
}

impl KeywordSet {
    /// Build a set from two lists
    ///
    /// Blank entries and repeats within a list are dropped (first occurrence wins). A secondary
    /// keyword that is also primary is dropped from the secondary list.
    pub fn new<P, S>(primary: P, secondary: S) -> Self
    where
        P: IntoIterator,
        P::Item: AsRef<str>,
        S: IntoIterator,
        S::Item: AsRef<str>,
    {
        let primary = dedup(primary);
        let secondary: Vec<String> = dedup(secondary)
            .into_iter()
            .filter(|kw| {
                let shared = primary.contains(kw);
                if shared {
                    debug!(keyword = %kw, "dropping secondary keyword already listed as primary");
                }
                !shared
            })
            .collect();
        Self { primary, secondary }
    }

    /// Build a set from two newline-delimited texts
    pub fn from_lines(primary: &str, secondary: &str) -> Self {
        Self::new(parse_lines(primary), parse_lines(secondary))
    }

    pub fn primary(&self) -> &[String] {
        &self.primary
    }

    pub fn secondary(&self) -> &[String] {
        &self.secondary
    }

    pub fn is_empty(&self) -> bool {
        self.primary.is_empty() && self.secondary.is_empty()
    }

    /// Primary keywords followed by secondary ones
    pub fn all(&self) -> Vec<String> {
        self.primary
            .iter()
            .chain(self.secondary.iter())
            .cloned()
            .collect()
    }

    /// Every keyword tagged with its kind, primary first
    pub fn tagged(&self) -> impl Iterator<Item = (&str, KeywordKind)> {
        self.primary
            .iter()
            .map(|k| (k.as_str(), KeywordKind::Primary))
            .chain(
                self.secondary
                    .iter()
                    .map(|k| (k.as_str(), KeywordKind::Secondary)),
            )
    }
}

/// Split newline-delimited text into trimmed, non-empty entries
pub fn parse_lines(text: &str) -> Vec<String> {
    text.lines()
        .map(str::trim)
        .filter(|line| !line.is_empty())
        .map(str::to_string)
        .collect()
}

fn dedup<I>(items: I) -> Vec<String>
where
    I: IntoIterator,
    I::Item: AsRef<str>,
{
    let mut out: Vec<String> = Vec::new();
    for item in items {
        let kw = item.as_ref().trim();
        if !kw.is_empty() && !out.iter().any(|k| k == kw) {
            out.push(kw.to_string());
        }
    }
    out
}
