//! End-to-end optimization
//!
//! [`Optimizer`] ties the pieces together: heading allocation over the source document, then
//! the analytics enabled in the configuration, each over the full source text. The language
//! model is resolved once when the optimizer is built and shared by every run.

use crate::allocator::{self, Allocation};
use crate::analysis::{health, metadata, semantic};
use crate::annotation::{detect_language, load_model, Annotator};
use crate::ast::Document;
use crate::config::OptimizerConfig;
use crate::error::AnnotationError;
use crate::keywords::KeywordSet;
use crate::report::{Report, SemanticOutcome};
use std::sync::Arc;
use tracing::{debug, info, warn};

/// Restructured document plus everything learned about the source
#[derive(Debug, Clone, PartialEq)]
pub struct Optimization {
    pub document: Document,
    pub report: Report,
}

#[derive(Clone)]
pub struct Optimizer {
    config: OptimizerConfig,
    annotator: Result<Arc<dyn Annotator>, AnnotationError>,
}

impl Optimizer {
    /// Build an optimizer, resolving the language model named in `config`
    ///
    /// A model that can't be resolved is not an error here: runs report it in the semantic
    /// section and carry on with the other analytics.
    pub fn new(config: OptimizerConfig) -> Self {
        let annotator = load_model(&config.semantic.model, config.semantic_language())
            .map(Arc::<dyn Annotator>::from);
        if let Err(err) = &annotator {
            debug!(model = %config.semantic.model, error = %err, "language model not resolved");
        }
        Self { config, annotator }
    }

    /// Use `annotator` instead of the configured model
    pub fn with_annotator(mut self, annotator: Arc<dyn Annotator>) -> Self {
        self.annotator = Ok(annotator);
        self
    }

    pub fn config(&self) -> &OptimizerConfig {
        &self.config
    }

    pub fn run(&self, source: &Document, keywords: &KeywordSet) -> Optimization {
        let analysis = &self.config.analysis;
        info!(
            blocks = source.len(),
            primary = keywords.primary().len(),
            secondary = keywords.secondary().len(),
            depth = %analysis.depth,
            "optimizing document"
        );

        let Allocation { document, usage } = allocator::allocate(
            source,
            keywords.primary(),
            keywords.secondary(),
            self.config.quota_limits(),
        );
        debug!(headings = document.iter_headings().count(), "headings allocated");

        let full_text = source.full_text();
        let language = self
            .config
            .semantic_language()
            .map(str::to_string)
            .unwrap_or_else(|| detect_language(&full_text));

        let mut report = Report::new(language, analysis.depth, keywords, usage);

        if analysis.check_ux {
            report.content_health = Some(health::analyze(&full_text));
        }
        if analysis.check_semantic {
            report.semantic = Some(self.semantic(&full_text, keywords));
        }
        if analysis.generate_meta {
            report.metadata = Some(metadata::generate(
                &full_text,
                keywords.primary(),
                &self.config.title_template(),
            ));
        }

        Optimization { document, report }
    }

    fn semantic(&self, text: &str, keywords: &KeywordSet) -> SemanticOutcome {
        match &self.annotator {
            Ok(annotator) => {
                semantic::extract(text, &keywords.all(), annotator.as_ref()).into()
            }
            Err(err) => {
                warn!(error = %err, "skipping semantic analysis");
                SemanticOutcome::from(err)
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::annotation::UnicodeAnnotator;
    use crate::ast::{Block, Level};
    use crate::config::Loader;

    fn optimizer(overrides: &[(&str, &str)]) -> Optimizer {
        let mut loader = Loader::new();
        for (key, value) in overrides {
            loader = loader.set_override(key, *value).unwrap();
        }
        Optimizer::new(loader.build().unwrap())
    }

    #[test]
    fn test_run_allocates_and_reports() {
        let source = Document::from_paragraphs(["SEO basics matter. Search engines rank pages."]);
        let keywords = KeywordSet::new(["SEO"], Vec::<String>::new());
        let result = optimizer(&[]).run(&source, &keywords);

        assert_eq!(
            result.document.blocks,
            vec![
                Block::heading("SEO", Level::Heading1),
                Block::body("SEO basics matter. Search engines rank pages."),
            ]
        );
        let report = result.report;
        assert_eq!(report.heading_usage["SEO"].h1, 1);
        assert!(report.content_health.is_some());
        assert!(report.metadata.is_some());
        let relations = report.semantic.unwrap();
        assert!(relations.relations().unwrap().contains_key("SEO"));
    }

    #[test]
    fn test_flags_gate_analytics() {
        let optimizer = optimizer(&[
            ("analysis.check_ux", "false"),
            ("analysis.check_semantic", "false"),
            ("analysis.generate_meta", "false"),
        ]);
        let source = Document::from_paragraphs(["Text."]);
        let report = optimizer.run(&source, &KeywordSet::default()).report;
        assert!(report.content_health.is_none());
        assert!(report.semantic.is_none());
        assert!(report.metadata.is_none());
    }

    #[test]
    fn test_missing_model_is_reported_not_raised() {
        let optimizer = optimizer(&[("semantic.model", "none")]);
        let source = Document::from_paragraphs(["SEO tips."]);
        let report = optimizer
            .run(&source, &KeywordSet::new(["SEO"], Vec::<String>::new()))
            .report;
        let semantic = report.semantic.unwrap();
        assert!(semantic.error().unwrap().starts_with("no language model"));
        assert!(report.content_health.is_some());
        assert_eq!(report.metadata.unwrap().focus_keyword, "SEO");
    }

    #[test]
    fn test_injected_annotator_replaces_missing_model() {
        let optimizer = optimizer(&[("semantic.model", "none")])
            .with_annotator(Arc::new(UnicodeAnnotator::for_language("en")));
        let source = Document::from_paragraphs(["SEO helps sites grow."]);
        let report = optimizer
            .run(&source, &KeywordSet::new(["SEO"], Vec::<String>::new()))
            .report;
        assert!(report.semantic.unwrap().relations().is_some());
    }

    #[test]
    fn test_pinned_language_is_reported() {
        let optimizer = optimizer(&[("semantic.language", "ar")]);
        let report = optimizer
            .run(&Document::from_paragraphs(["Plain English text."]), &KeywordSet::default())
            .report;
        assert_eq!(report.language, "ar");
    }

    #[test]
    fn test_runs_do_not_share_quota() {
        let optimizer = optimizer(&[]);
        let source = Document::from_paragraphs(["SEO one"]);
        let keywords = KeywordSet::new(["SEO"], Vec::<String>::new());
        let first = optimizer.run(&source, &keywords);
        let second = optimizer.run(&source, &keywords);
        assert_eq!(first.document, second.document);
        assert_eq!(second.document.blocks[0].level, Level::Heading1);
    }
}
