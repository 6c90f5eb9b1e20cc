//! Lookup table behind `--from`/`--to` and input extension sniffing
//!
//! The CLI asks the registry for a format by name, or by the extension of the article path when
//! no `--from` is given. Detection walks formats in name order, so `.md` always resolves to
//! `markdown` however the map is hashed.

use crate::ast::Document;
use crate::error::FormatError;
use crate::formats::format::Format;
use std::collections::HashMap;
use std::path::Path;

/// Article formats keyed by name
pub struct FormatRegistry {
    formats: HashMap<String, Box<dyn Format>>,
}

impl FormatRegistry {
    /// Registry with nothing in it; see [`FormatRegistry::with_defaults`]
    pub fn new() -> Self {
        FormatRegistry {
            formats: HashMap::new(),
        }
    }

    /// Add `format` under its own name, replacing an earlier entry with that name
    ///
    /// The CLI relies on this to swap in an `HtmlFormat` built from the `[export]` settings.
    pub fn register<F: Format + 'static>(&mut self, format: F) {
        self.formats
            .insert(format.name().to_string(), Box::new(format));
    }

    /// Look up a format, failing with [`FormatError::FormatNotFound`]
    pub fn get(&self, name: &str) -> Result<&dyn Format, FormatError> {
        self.formats
            .get(name)
            .map(|f| f.as_ref())
            .ok_or_else(|| FormatError::FormatNotFound(name.to_string()))
    }

    pub fn has(&self, name: &str) -> bool {
        self.formats.contains_key(name)
    }

    /// List all available format names (sorted)
    pub fn list_formats(&self) -> Vec<String> {
        let mut names: Vec<_> = self.formats.keys().cloned().collect();
        names.sort();
        names
    }

    /// Find the format claiming the extension of `path`
    pub fn detect_from_path(&self, path: impl AsRef<Path>) -> Result<&dyn Format, FormatError> {
        let path = path.as_ref();
        let ext = path
            .extension()
            .and_then(|e| e.to_str())
            .map(str::to_ascii_lowercase)
            .ok_or_else(|| {
                FormatError::FormatNotFound(format!("no extension on '{}'", path.display()))
            })?;

        // Sorted so that detection does not depend on hash order
        self.list_formats()
            .iter()
            .filter_map(|name| self.formats.get(name))
            .find(|f| f.file_extensions().contains(&ext.as_str()))
            .map(|f| f.as_ref())
            .ok_or(FormatError::FormatNotFound(ext))
    }

    /// Read an article with the named format, if it can read at all
    pub fn parse(&self, source: &str, format: &str) -> Result<Document, FormatError> {
        let fmt = self.get(format)?;
        if !fmt.supports_parsing() {
            return Err(FormatError::NotSupported(format!(
                "Format '{}' does not support parsing",
                format
            )));
        }
        fmt.parse(source)
    }

    /// Write the outlined document with the named format
    pub fn serialize(&self, doc: &Document, format: &str) -> Result<String, FormatError> {
        let fmt = self.get(format)?;
        if !fmt.supports_serialization() {
            return Err(FormatError::NotSupported(format!(
                "Format '{}' does not support serialization",
                format
            )));
        }
        fmt.serialize(doc)
    }

    /// The four built-in formats, with HTML using its right-to-left defaults
    pub fn with_defaults() -> Self {
        let mut registry = Self::new();

        registry.register(crate::formats::html::HtmlFormat::default());
        registry.register(crate::formats::markdown::MarkdownFormat);
        registry.register(crate::formats::text::TextFormat);
        registry.register(crate::formats::json::JsonFormat);

        registry
    }
}

impl Default for FormatRegistry {
    fn default() -> Self {
        Self::with_defaults()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::ast::Block;

    // Test format
    struct TestFormat;
    impl Format for TestFormat {
        fn name(&self) -> &str {
            "test"
        }
        fn description(&self) -> &str {
            "Test format"
        }
        fn file_extensions(&self) -> &[&str] {
            &["tst"]
        }
        fn supports_parsing(&self) -> bool {
            true
        }
        fn supports_serialization(&self) -> bool {
            true
        }
        fn parse(&self, _source: &str) -> Result<Document, FormatError> {
            Ok(Document::from_paragraphs(["test"]))
        }
        fn serialize(&self, _doc: &Document) -> Result<String, FormatError> {
            Ok("test output".to_string())
        }
    }

    // Format with neither capability
    struct InertFormat;
    impl Format for InertFormat {
        fn name(&self) -> &str {
            "inert"
        }
    }

    #[test]
    fn test_registry_creation() {
        let registry = FormatRegistry::new();
        assert_eq!(registry.formats.len(), 0);
    }

    #[test]
    fn test_registry_register() {
        let mut registry = FormatRegistry::new();
        registry.register(TestFormat);

        assert!(registry.has("test"));
        assert_eq!(registry.list_formats(), vec!["test"]);
    }

    #[test]
    fn test_registry_get_nonexistent() {
        let registry = FormatRegistry::new();
        match registry.get("docx") {
            Err(FormatError::FormatNotFound(name)) => assert_eq!(name, "docx"),
            _ => panic!("Expected FormatNotFound error"),
        }
    }

    #[test]
    fn test_registry_parse_and_serialize() {
        let mut registry = FormatRegistry::new();
        registry.register(TestFormat);

        let doc = registry.parse("input", "test").unwrap();
        assert_eq!(doc.blocks, vec![Block::body("test")]);
        assert_eq!(registry.serialize(&doc, "test").unwrap(), "test output");
    }

    #[test]
    fn test_registry_rejects_unsupported_operations() {
        let mut registry = FormatRegistry::new();
        registry.register(InertFormat);

        assert!(matches!(
            registry.parse("input", "inert"),
            Err(FormatError::NotSupported(_))
        ));
        assert!(matches!(
            registry.serialize(&Document::new(), "inert"),
            Err(FormatError::NotSupported(_))
        ));
    }

    #[test]
    fn test_detect_from_path() {
        let registry = FormatRegistry::with_defaults();
        assert_eq!(registry.detect_from_path("a/b.md").unwrap().name(), "markdown");
        assert_eq!(registry.detect_from_path("page.HTML").unwrap().name(), "html");
        assert_eq!(registry.detect_from_path("notes.txt").unwrap().name(), "text");
        assert_eq!(registry.detect_from_path("doc.json").unwrap().name(), "json");
        assert!(registry.detect_from_path("doc.docx").is_err());
        assert!(registry.detect_from_path("README").is_err());
    }

    #[test]
    fn test_registry_with_defaults() {
        let registry = FormatRegistry::default();
        assert_eq!(
            registry.list_formats(),
            vec!["html", "json", "markdown", "text"]
        );
    }

    #[test]
    fn test_registry_replace_format() {
        let mut registry = FormatRegistry::new();
        registry.register(TestFormat);
        registry.register(TestFormat);

        assert_eq!(registry.list_formats().len(), 1);
    }

    #[test]
    fn test_configured_html_replaces_default() {
        use crate::config::TextDirection;
        use crate::formats::html::HtmlFormat;

        let mut registry = FormatRegistry::with_defaults();
        registry.register(HtmlFormat {
            lang: "en".to_string(),
            direction: TextDirection::Ltr,
            title: "Guide".to_string(),
        });

        assert_eq!(registry.list_formats().len(), 4);
        let html = registry
            .serialize(&Document::from_paragraphs(["hi"]), "html")
            .unwrap();
        assert!(html.contains(r#"<html lang="en" dir="ltr">"#));
        assert!(html.contains("<title>Guide</title>"));
    }
}
