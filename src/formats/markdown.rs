//! Markdown format implementation
//!
//! Parsing and serialization both go through comrak's CommonMark AST.
//!
//! Import keeps what the document model can express: ATX and setext headings (levels 4-6 are
//! folded into level 3) and paragraphs, including those nested in lists and block quotes.
//! Inline markup is flattened to its text and soft line breaks become spaces. Code blocks
//! become body text.
//!
//! Export builds one heading or paragraph node per non-blank block and lets comrak's
//! CommonMark writer handle escaping, so any block text reads back unchanged.

use crate::ast::{Block, Document, Level};
use crate::error::FormatError;
use crate::formats::format::Format;
use comrak::nodes::{Ast, AstNode, NodeHeading, NodeValue};
use comrak::{format_commonmark, parse_document, Arena, ComrakOptions};
use std::cell::RefCell;

pub struct MarkdownFormat;

impl Format for MarkdownFormat {
    fn name(&self) -> &str {
        "markdown"
    }

    fn description(&self) -> &str {
        "CommonMark headings and paragraphs"
    }

    fn file_extensions(&self) -> &[&str] {
        &["md", "markdown"]
    }

    fn supports_parsing(&self) -> bool {
        true
    }

    fn supports_serialization(&self) -> bool {
        true
    }

    fn parse(&self, source: &str) -> Result<Document, FormatError> {
        Ok(parse_markdown(source))
    }

    fn serialize(&self, doc: &Document) -> Result<String, FormatError> {
        serialize_markdown(doc)
    }
}

fn parse_markdown(source: &str) -> Document {
    let arena = Arena::new();
    let options = ComrakOptions::default();
    let root = parse_document(&arena, source, &options);

    let mut doc = Document::new();
    collect_blocks(root, &mut doc);
    doc
}

fn collect_blocks<'a>(node: &'a AstNode<'a>, doc: &mut Document) {
    for child in node.children() {
        let value = child.data.borrow().value.clone();
        let block = match value {
            NodeValue::Heading(heading) => {
                let level = Level::from_heading_number(heading.level.min(3))
                    .unwrap_or(Level::Heading3);
                Some((inline_text(child), level))
            }
            NodeValue::Paragraph => Some((inline_text(child), Level::Body)),
            NodeValue::CodeBlock(code) => Some((code.literal, Level::Body)),
            NodeValue::HtmlBlock(_) | NodeValue::ThematicBreak => None,
            _ => {
                collect_blocks(child, doc);
                None
            }
        };

        if let Some((text, level)) = block {
            let text = text.trim();
            if !text.is_empty() {
                doc.push(Block::new(text, level));
            }
        }
    }
}

/// Plain text of a heading or paragraph
fn inline_text<'a>(node: &'a AstNode<'a>) -> String {
    let mut out = String::new();
    collect_inline(node, &mut out);
    out
}

fn collect_inline<'a>(node: &'a AstNode<'a>, out: &mut String) {
    for child in node.children() {
        match &child.data.borrow().value {
            NodeValue::Text(text) => out.push_str(text),
            NodeValue::Code(code) => out.push_str(&code.literal),
            NodeValue::SoftBreak | NodeValue::LineBreak => out.push(' '),
            NodeValue::HtmlInline(_) => {}
            _ => collect_inline(child, out),
        }
    }
}

fn serialize_markdown(doc: &Document) -> Result<String, FormatError> {
    if doc.iter_non_blank().next().is_none() {
        return Ok(String::new());
    }

    let arena = Arena::new();
    let root = new_node(&arena, NodeValue::Document);
    for block in doc.iter_non_blank() {
        let value = match block.level.heading_number() {
            Some(level) => NodeValue::Heading(NodeHeading {
                level,
                setext: false,
            }),
            None => NodeValue::Paragraph,
        };
        let container = new_node(&arena, value);
        container.append(new_node(
            &arena,
            NodeValue::Text(block.text.trim().to_string()),
        ));
        root.append(container);
    }

    let mut output = Vec::new();
    format_commonmark(root, &ComrakOptions::default(), &mut output).map_err(|e| {
        FormatError::SerializationError(format!("Comrak serialization failed: {}", e))
    })?;

    String::from_utf8(output)
        .map_err(|e| FormatError::SerializationError(format!("UTF-8 conversion failed: {}", e)))
}

fn new_node<'a>(arena: &'a Arena<AstNode<'a>>, value: NodeValue) -> &'a AstNode<'a> {
    arena.alloc(AstNode::new(RefCell::new(Ast::new(value, (0, 0).into()))))
}
