//! Rendering a restructured document to HTML and reading it back keeps every heading level

use proptest::prelude::*;
use seo_outline::formats::{Format, HtmlFormat};
use seo_outline::{allocate, Block, Document, KeywordSet, Level, QuotaLimits};

fn levels_and_text(doc: &Document) -> Vec<(Level, String)> {
    doc.iter_non_blank()
        .map(|b| (b.level, b.text.trim().to_string()))
        .collect()
}

#[test]
fn test_allocated_document_round_trips() {
    let keywords = KeywordSet::new(["SEO", "Q&A"], ["<guide>"]);
    let source = Document::from_paragraphs([
        "SEO for \"everyone\"",
        "A <guide> to it's details",
        "Q&A session",
        "SEO again",
        "SEO and more",
        "plain & simple",
    ]);
    let allocated = allocate(
        &source,
        keywords.primary(),
        keywords.secondary(),
        QuotaLimits::new(1, 1, 1),
    )
    .document;

    let format = HtmlFormat::default();
    let html = format.serialize(&allocated).unwrap();
    let parsed = format.parse(&html).unwrap();

    assert_eq!(parsed, allocated);
    assert_eq!(parsed.count_level(Level::Heading1), 2);
}

#[test]
fn test_markup_escapes_reserved_characters() {
    let doc = Document::with_blocks(vec![Block::heading("Q&A <tips>", Level::Heading2)]);
    let html = HtmlFormat::default().serialize(&doc).unwrap();
    assert!(html.contains(r#"<h2 dir="rtl">Q&amp;A &lt;tips&gt;</h2>"#));
    assert!(html.contains(r#"<meta charset="UTF-8">"#));
}

fn block_strategy() -> impl Strategy<Value = Block> {
    let level = prop::sample::select(vec![
        Level::Body,
        Level::Heading1,
        Level::Heading2,
        Level::Heading3,
    ]);
    (r#"[a-zA-Z0-9&<>"' \u{0627}-\u{064A}]{0,24}"#, level)
        .prop_map(|(text, level)| Block::new(text, level))
}

proptest! {
    #[test]
    fn test_levels_survive_markup(blocks in prop::collection::vec(block_strategy(), 0..12)) {
        let doc = Document::with_blocks(blocks);
        let format = HtmlFormat::default();
        let parsed = format.parse(&format.serialize(&doc).unwrap()).unwrap();
        prop_assert_eq!(levels_and_text(&parsed), levels_and_text(&doc));
    }
}
