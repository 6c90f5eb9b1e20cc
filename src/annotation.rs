//! Linguistic annotation
//!
//! The semantic extractor needs linguistically aware sentence boundaries and per-token
//! attributes. That capability is modelled as the [`Annotator`] trait so callers construct a
//! model once and inject it; nothing here is a process-wide singleton.
//!
//! Models
//!
//!     Models are resolved by name with [`load_model`]:
//!
//!     - `unicode`: [`UnicodeAnnotator`], UAX #29 sentence and word boundaries. Works for any
//!       script, including Arabic.
//!     - `none`: explicitly disabled; resolving it is a configuration error.
//!
//!     An unknown name is a configuration error as well. Callers surface these errors as a
//!     "no language model" condition instead of failing the whole run.

use crate::error::AnnotationError;
use serde::Serialize;
use tracing::debug;
use unicode_segmentation::UnicodeSegmentation;

/// One token with the attributes the extractor relies on
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Token {
    pub text: String,
    pub lower: String,
    pub is_alpha: bool,
}

impl Token {
    pub fn new(text: &str) -> Self {
        Self {
            text: text.to_string(),
            lower: text.to_lowercase(),
            is_alpha: !text.is_empty() && text.chars().all(char::is_alphabetic),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct AnnotatedSentence {
    pub text: String,
    pub tokens: Vec<Token>,
}

/// Annotated form of a whole text
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct AnnotatedText {
    /// ISO 639-1 code when known, otherwise the ISO 639-3 code or `und`
    pub language: String,
    pub sentences: Vec<AnnotatedSentence>,
}

/// A language model able to segment and annotate text
pub trait Annotator: Send + Sync {
    /// Model name, as accepted by [`load_model`]
    fn name(&self) -> &str;

    fn annotate(&self, text: &str) -> AnnotatedText;
}

/// Rule-based annotator built on Unicode text segmentation
///
/// UAX #29 word boundaries keep contractions such as `it's` or `don't` whole. Since `is_alpha`
/// needs every character to be alphabetic, those tokens never count as co-occurring words,
/// whereas a statistical tokenizer like spaCy's splits them into `it` and `'s`.
#[derive(Debug, Clone, Default)]
pub struct UnicodeAnnotator {
    language: Option<String>,
}

impl UnicodeAnnotator {
    /// Annotator that detects the language of each text
    pub fn new() -> Self {
        Self { language: None }
    }

    /// Annotator pinned to a language code
    pub fn for_language(code: impl Into<String>) -> Self {
        Self {
            language: Some(code.into()),
        }
    }

    fn annotate_sentence(sentence: &str) -> AnnotatedSentence {
        let tokens = sentence
            .split_word_bounds()
            .filter(|piece| !piece.trim().is_empty())
            .map(Token::new)
            .collect();
        AnnotatedSentence {
            text: sentence.trim().to_string(),
            tokens,
        }
    }
}

impl Annotator for UnicodeAnnotator {
    fn name(&self) -> &str {
        "unicode"
    }

    fn annotate(&self, text: &str) -> AnnotatedText {
        let language = self
            .language
            .clone()
            .unwrap_or_else(|| detect_language(text));
        let sentences = text
            .unicode_sentences()
            .filter(|s| !s.trim().is_empty())
            .map(Self::annotate_sentence)
            .collect::<Vec<_>>();
        debug!(language = %language, sentences = sentences.len(), "annotated text");
        AnnotatedText {
            language,
            sentences,
        }
    }
}

/// Resolve a language model by name
///
/// `language` pins the model to a language code; `None` or `"auto"` means detect per text.
pub fn load_model(
    name: &str,
    language: Option<&str>,
) -> Result<Box<dyn Annotator>, AnnotationError> {
    match name.trim() {
        "unicode" => {
            let annotator = match language.map(str::trim) {
                None | Some("") | Some("auto") => UnicodeAnnotator::new(),
                Some(code) => UnicodeAnnotator::for_language(code),
            };
            Ok(Box::new(annotator))
        }
        "none" | "" => Err(AnnotationError::ModelUnavailable(
            "language model disabled".to_string(),
        )),
        other => Err(AnnotationError::ModelUnavailable(format!(
            "unknown model '{other}'"
        ))),
    }
}

/// Detect the dominant language of `text`
///
/// Returns an ISO 639-1 code for common languages, the ISO 639-3 code for the rest and `und`
/// when detection fails.
pub fn detect_language(text: &str) -> String {
    match whatlang::detect_lang(text) {
        Some(lang) => lang_to_code(lang).to_string(),
        None => "und".to_string(),
    }
}

fn lang_to_code(lang: whatlang::Lang) -> &'static str {
    use whatlang::Lang;
    match lang {
        Lang::Ara => "ar",
        Lang::Eng => "en",
        Lang::Fra => "fr",
        Lang::Deu => "de",
        Lang::Spa => "es",
        Lang::Por => "pt",
        Lang::Ita => "it",
        Lang::Rus => "ru",
        Lang::Tur => "tr",
        Lang::Pes => "fa",
        Lang::Urd => "ur",
        Lang::Heb => "he",
        Lang::Cmn => "zh",
        Lang::Jpn => "ja",
        Lang::Kor => "ko",
        Lang::Hin => "hi",
        other => other.code(),
    }
}

/// Whether a language is written right to left
pub fn is_rtl(language: &str) -> bool {
    matches!(language, "ar" | "fa" | "he" | "ur" | "yi" | "ps" | "sd" | "ug")
}
