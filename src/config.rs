//! Configuration loading
//!
//! `defaults/seo-outline.default.toml` is embedded into every binary so that docs and runtime
//! behavior stay in sync. Applications layer user files and CLI flags on top of those defaults
//! via [`Loader`] before deserializing into [`OptimizerConfig`], which is then validated.

use crate::allocator::QuotaLimits;
use crate::analysis::TitleTemplate;
use crate::error::ConfigError;
use config::builder::DefaultState;
use config::{Config, ConfigBuilder, File, FileFormat, ValueKind};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::path::Path;

const DEFAULT_TOML: &str = include_str!("../defaults/seo-outline.default.toml");

/// Top-level configuration for an optimization run
#[derive(Debug, Clone, Deserialize)]
pub struct OptimizerConfig {
    pub headings: HeadingsConfig,
    pub analysis: AnalysisConfig,
    pub semantic: SemanticConfig,
    pub metadata: MetadataConfig,
    pub export: ExportConfig,
}

/// Per-keyword heading quotas
#[derive(Debug, Clone, Deserialize)]
pub struct HeadingsConfig {
    pub h1_max: usize,
    pub h2_max: usize,
    pub h3_max: usize,
}

/// Which analytics run
#[derive(Debug, Clone, Deserialize)]
pub struct AnalysisConfig {
    pub depth: AnalysisDepth,
    pub check_ux: bool,
    pub check_semantic: bool,
    pub generate_meta: bool,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum AnalysisDepth {
    Fast,
    Medium,
    Detailed,
}

impl fmt::Display for AnalysisDepth {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            AnalysisDepth::Fast => write!(f, "fast"),
            AnalysisDepth::Medium => write!(f, "medium"),
            AnalysisDepth::Detailed => write!(f, "detailed"),
        }
    }
}

#[derive(Debug, Clone, Deserialize)]
pub struct SemanticConfig {
    pub model: String,
    pub language: String,
}

#[derive(Debug, Clone, Deserialize)]
pub struct MetadataConfig {
    pub title_suffix: String,
    pub fallback_title: String,
}

/// Markup export settings
#[derive(Debug, Clone, Deserialize)]
pub struct ExportConfig {
    pub lang: String,
    pub direction: TextDirection,
    pub title: String,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum TextDirection {
    Rtl,
    Ltr,
}

impl TextDirection {
    pub fn as_str(self) -> &'static str {
        match self {
            TextDirection::Rtl => "rtl",
            TextDirection::Ltr => "ltr",
        }
    }
}

impl OptimizerConfig {
    pub fn quota_limits(&self) -> QuotaLimits {
        QuotaLimits::new(
            self.headings.h1_max,
            self.headings.h2_max,
            self.headings.h3_max,
        )
    }

    pub fn title_template(&self) -> TitleTemplate {
        TitleTemplate {
            suffix: self.metadata.title_suffix.clone(),
            fallback: self.metadata.fallback_title.clone(),
        }
    }

    /// Pinned annotation language, `None` for per-document detection
    pub fn semantic_language(&self) -> Option<&str> {
        match self.semantic.language.trim() {
            "" | "auto" => None,
            code => Some(code),
        }
    }

    /// Check constraints that the type system can't express
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.headings.h1_max < 1 {
            return Err(ConfigError::Invalid(
                "headings.h1_max must be at least 1".to_string(),
            ));
        }
        Ok(())
    }
}

/// Builds an [`OptimizerConfig`] from `defaults/seo-outline.default.toml`, then any
/// `--config` file, then per-flag overrides such as `headings.h2_max`.
#[derive(Debug, Clone)]
pub struct Loader {
    builder: ConfigBuilder<DefaultState>,
}

impl Loader {
    /// Only the embedded defaults, which alone already pass validation.
    pub fn new() -> Self {
        let builder = Config::builder().add_source(File::from_str(DEFAULT_TOML, FileFormat::Toml));
        Self { builder }
    }

    /// Add a TOML file the user asked for; building fails if it cannot be read.
    pub fn with_file(mut self, path: impl AsRef<Path>) -> Self {
        let source = File::from(path.as_ref())
            .format(FileFormat::Toml)
            .required(true);
        self.builder = self.builder.add_source(source);
        self
    }

    /// Add a TOML file that may legitimately be absent.
    pub fn with_optional_file(mut self, path: impl AsRef<Path>) -> Self {
        let source = File::from(path.as_ref())
            .format(FileFormat::Toml)
            .required(false);
        self.builder = self.builder.add_source(source);
        self
    }

    /// Override one dotted key, e.g. `("semantic.model", "none")`.
    pub fn set_override<I>(mut self, key: &str, value: I) -> Result<Self, ConfigError>
    where
        I: Into<ValueKind>,
    {
        self.builder = self.builder.set_override(key, value)?;
        Ok(self)
    }

    /// Merge the layers and reject quotas that would leave no room for a main heading.
    pub fn build(self) -> Result<OptimizerConfig, ConfigError> {
        let config: OptimizerConfig = self.builder.build()?.try_deserialize()?;
        config.validate()?;
        Ok(config)
    }
}

impl Default for Loader {
    fn default() -> Self {
        Self::new()
    }
}

/// Stock quotas, analytics flags and export settings.
pub fn load_defaults() -> Result<OptimizerConfig, ConfigError> {
    Loader::new().build()
}
