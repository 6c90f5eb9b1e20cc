//! HTML format implementation
//!
//! Strategy: direct block → element mapping, both ways, through an `RcDom` tree.
//!
//! | Block     | HTML Element            |
//! |-----------|-------------------------|
//! | Heading N | `<hN dir="rtl">…</hN>`  |
//! | Body      | `<p dir="rtl">…</p>`    |
//!
//! Export builds the DOM (doctype, `html` with the configured language and direction, a head
//! declaring UTF-8, one element per non-blank block) and hands it to html5ever's serializer,
//! which does all escaping.
//!
//! Import runs the full HTML5 parser, so implied end tags, comments and entities behave as in a
//! browser. Every `h1`-`h3` element becomes a heading at that level (`h4`-`h6` are folded into
//! level 3) and every `p` becomes body text. Inline markup inside those elements is flattened to
//! its text. Anything outside those elements is ignored.

use crate::ast::{Block, Document, Level};
use crate::config::{ExportConfig, TextDirection};
use crate::error::FormatError;
use crate::formats::format::Format;
use html5ever::tendril::TendrilSink;
use html5ever::{
    ns, parse_document, serialize, serialize::SerializeOpts, serialize::TraversalScope, Attribute,
    LocalName, ParseOpts, QualName,
};
use markup5ever_rcdom::{Handle, Node, NodeData, RcDom, SerializableHandle};
use std::cell::{Cell, RefCell};
use std::rc::Rc;

/// HTML output options
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct HtmlFormat {
    pub lang: String,
    pub direction: TextDirection,
    pub title: String,
}

impl Default for HtmlFormat {
    fn default() -> Self {
        Self {
            lang: "ar".to_string(),
            direction: TextDirection::Rtl,
            title: "SEO optimized document".to_string(),
        }
    }
}

impl From<&ExportConfig> for HtmlFormat {
    fn from(config: &ExportConfig) -> Self {
        Self {
            lang: config.lang.clone(),
            direction: config.direction,
            title: config.title.clone(),
        }
    }
}

impl Format for HtmlFormat {
    fn name(&self) -> &str {
        "html"
    }

    fn description(&self) -> &str {
        "Minimal HTML5 document, one element per block"
    }

    fn file_extensions(&self) -> &[&str] {
        &["html", "htm"]
    }

    fn supports_parsing(&self) -> bool {
        true
    }

    fn supports_serialization(&self) -> bool {
        true
    }

    fn parse(&self, source: &str) -> Result<Document, FormatError> {
        Ok(parse_html(source))
    }

    fn serialize(&self, doc: &Document) -> Result<String, FormatError> {
        self.render(doc)
    }
}

impl HtmlFormat {
    /// Render `doc` as a complete HTML document
    pub fn render(&self, doc: &Document) -> Result<String, FormatError> {
        let dir = self.direction.as_str();

        let title = create_element("title", vec![]);
        append(&title, create_text(&self.title));

        let head = create_element("head", vec![]);
        append(&head, create_text("\n    "));
        append(&head, create_element("meta", vec![("charset", "UTF-8")]));
        append(&head, create_text("\n    "));
        append(&head, title);
        append(&head, create_text("\n"));

        let body = create_element("body", vec![]);
        append(&body, create_text("\n"));
        for block in doc.iter_non_blank() {
            append(&body, block_element(block, dir));
            append(&body, create_text("\n"));
        }

        let html = create_element("html", vec![("lang", self.lang.as_str()), ("dir", dir)]);
        append(&html, create_text("\n"));
        append(&html, head);
        append(&html, create_text("\n"));
        append(&html, body);
        append(&html, create_text("\n"));

        let mut out = serialize_node(&create_doctype())?;
        out.push('\n');
        out.push_str(&serialize_node(&html)?);
        out.push('\n');
        Ok(out)
    }
}

fn block_element(block: &Block, dir: &str) -> Handle {
    let tag = match block.level.heading_number() {
        Some(n) => format!("h{n}"),
        None => "p".to_string(),
    };
    let element = create_element(&tag, vec![("dir", dir)]);
    append(&element, create_text(block.text.trim()));
    element
}

fn append(parent: &Handle, child: Handle) {
    parent.children.borrow_mut().push(child);
}

fn create_element(tag: &str, attrs: Vec<(&str, &str)>) -> Handle {
    let qual_name = QualName::new(None, ns!(html), LocalName::from(tag));
    let attributes = attrs
        .into_iter()
        .map(|(name, value)| Attribute {
            name: QualName::new(None, ns!(), LocalName::from(name)),
            value: value.to_string().into(),
        })
        .collect();

    Rc::new(Node {
        parent: Cell::new(None),
        children: RefCell::new(Vec::new()),
        data: NodeData::Element {
            name: qual_name,
            attrs: RefCell::new(attributes),
            template_contents: Default::default(),
            mathml_annotation_xml_integration_point: false,
        },
    })
}

fn create_text(text: &str) -> Handle {
    Rc::new(Node {
        parent: Cell::new(None),
        children: RefCell::new(Vec::new()),
        data: NodeData::Text {
            contents: RefCell::new(text.to_string().into()),
        },
    })
}

fn create_doctype() -> Handle {
    Rc::new(Node {
        parent: Cell::new(None),
        children: RefCell::new(Vec::new()),
        data: NodeData::Doctype {
            name: "html".into(),
            public_id: "".into(),
            system_id: "".into(),
        },
    })
}

fn serialize_node(node: &Handle) -> Result<String, FormatError> {
    let mut output = Vec::new();
    let opts = SerializeOpts {
        traversal_scope: TraversalScope::IncludeNode,
        ..Default::default()
    };
    let serializable = SerializableHandle::from(node.clone());
    serialize(&mut output, &serializable, opts).map_err(|e| {
        FormatError::SerializationError(format!("HTML serialization failed: {}", e))
    })?;

    String::from_utf8(output)
        .map_err(|e| FormatError::SerializationError(format!("UTF-8 conversion failed: {}", e)))
}

fn parse_html(source: &str) -> Document {
    let dom = parse_document(RcDom::default(), ParseOpts::default()).one(source);
    let mut doc = Document::new();
    collect_blocks(&dom.document, &mut doc);
    doc
}

/// Walk the tree in document order, turning block elements into blocks
fn collect_blocks(node: &Handle, doc: &mut Document) {
    for child in node.children.borrow().iter() {
        let level = match &child.data {
            NodeData::Element { name, .. } => block_level(&name.local),
            _ => None,
        };
        match level {
            Some(level) => {
                let mut text = String::new();
                collect_text(child, &mut text);
                let text = text.trim();
                if !text.is_empty() {
                    doc.push(Block::new(text, level));
                }
            }
            None => collect_blocks(child, doc),
        }
    }
}

fn block_level(tag: &str) -> Option<Level> {
    match tag {
        "p" => Some(Level::Body),
        "h1" => Some(Level::Heading1),
        "h2" => Some(Level::Heading2),
        "h3" | "h4" | "h5" | "h6" => Some(Level::Heading3),
        _ => None,
    }
}

fn collect_text(node: &Handle, out: &mut String) {
    for child in node.children.borrow().iter() {
        match &child.data {
            NodeData::Text { contents } => out.push_str(&contents.borrow()),
            NodeData::Element { name, .. } if matches!(&*name.local, "script" | "style") => {}
            NodeData::Element { .. } => collect_text(child, out),
            _ => {}
        }
    }
}
