//! Core data models for translation

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

use crate::core::errors::{GlossError, TokenTranslationFailure};

/// Marker rendered in place of a token translation that failed
pub const TRANSLATION_ERROR_MARKER: &str = "[Translation error]";

/// Supported languages
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Language {
    /// Tamil (ta)
    #[serde(rename = "ta")]
    Tamil,
    /// Hindi (hi)
    #[serde(rename = "hi")]
    Hindi,
    /// English (en)
    #[serde(rename = "en")]
    English,
    /// Japanese (ja)
    #[serde(rename = "ja")]
    Japanese,
    /// Bengali (bn)
    #[serde(rename = "bn")]
    Bengali,
}

impl Language {
    /// Every supported language, in menu order
    pub const ALL: [Language; 5] = [
        Language::Tamil,
        Language::Hindi,
        Language::English,
        Language::Japanese,
        Language::Bengali,
    ];

    /// ISO-639-1 code understood by the translation and speech services
    pub fn code(self) -> &'static str {
        match self {
            Language::Tamil => "ta",
            Language::Hindi => "hi",
            Language::English => "en",
            Language::Japanese => "ja",
            Language::Bengali => "bn",
        }
    }

    /// Human-readable name shown in selectors and exports
    pub fn display_name(self) -> &'static str {
        match self {
            Language::Tamil => "Tamil",
            Language::Hindi => "Hindi",
            Language::English => "English",
            Language::Japanese => "Japanese",
            Language::Bengali => "Bengali",
        }
    }

    /// Resolve a display name such as `"Tamil"`
    pub fn from_display_name(name: &str) -> Result<Self, GlossError> {
        Language::ALL
            .into_iter()
            .find(|lang| lang.display_name().eq_ignore_ascii_case(name.trim()))
            .ok_or_else(|| GlossError::UnsupportedLanguageSelection {
                name: name.to_string(),
            })
    }
}

impl fmt::Display for Language {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.display_name())
    }
}

impl FromStr for Language {
    type Err = GlossError;

    /// Accepts either a display name or a code
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let trimmed = s.trim();
        Language::ALL
            .into_iter()
            .find(|lang| lang.code().eq_ignore_ascii_case(trimmed))
            .map(Ok)
            .unwrap_or_else(|| Language::from_display_name(trimmed))
    }
}

/// Source and target language of one operation
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct LanguagePair {
    /// Language of the input
    pub source: Language,
    /// Language to translate into
    pub target: Language,
}

impl LanguagePair {
    /// Pair `source` with `target`
    pub fn new(source: Language, target: Language) -> Self {
        Self { source, target }
    }

    /// Whether source and target are the same language
    pub fn is_identity(&self) -> bool {
        self.source == self.target
    }
}

impl fmt::Display for LanguagePair {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}->{}", self.source.code(), self.target.code())
    }
}

/// Translation request, for a whole sentence or a single token
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TranslationRequest {
    /// Text to translate
    pub text: String,
    /// Language of `text`
    pub source: Language,
    /// Requested output language
    pub target: Language,
}

impl TranslationRequest {
    /// Create a request for `text` under `pair`
    pub fn new(text: impl Into<String>, pair: LanguagePair) -> Self {
        Self {
            text: text.into(),
            source: pair.source,
            target: pair.target,
        }
    }

    /// Source and target as a pair
    pub fn pair(&self) -> LanguagePair {
        LanguagePair::new(self.source, self.target)
    }
}

/// One row of the word-by-word gloss
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GlossEntry {
    /// Word as it appears in the input
    pub token: String,
    /// Its translation, or why it has none
    pub translation: Result<String, TokenTranslationFailure>,
}

impl GlossEntry {
    /// Translated word, or the error marker
    pub fn translation_text(&self) -> &str {
        match &self.translation {
            Ok(word) => word,
            Err(_) => TRANSLATION_ERROR_MARKER,
        }
    }

    /// Whether this token failed to translate
    pub fn is_failure(&self) -> bool {
        self.translation.is_err()
    }
}

impl fmt::Display for GlossEntry {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} : {}", self.token, self.translation_text())
    }
}

impl Serialize for GlossEntry {
    fn serialize<S: serde::Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        use serde::ser::SerializeStruct;

        let mut state = serializer.serialize_struct("GlossEntry", 3)?;
        state.serialize_field("token", &self.token)?;
        state.serialize_field("translation", self.translation_text())?;
        state.serialize_field("failed", &self.is_failure())?;
        state.end()
    }
}

/// Ordered word-by-word gloss of a sentence
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
#[serde(transparent)]
pub struct Gloss {
    entries: Vec<GlossEntry>,
}

impl Gloss {
    /// Wrap entries already in token order
    pub fn new(entries: Vec<GlossEntry>) -> Self {
        Self { entries }
    }

    /// Entries in token order
    pub fn entries(&self) -> &[GlossEntry] {
        &self.entries
    }

    /// Number of glossed tokens
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Whether the input had no words
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Number of tokens rendered with the error marker
    pub fn failure_count(&self) -> usize {
        self.entries.iter().filter(|e| e.is_failure()).count()
    }

    /// `"<token> : <translation>"` lines joined by `\n`
    pub fn render(&self) -> String {
        self.entries
            .iter()
            .map(GlossEntry::to_string)
            .collect::<Vec<_>>()
            .join("\n")
    }
}

/// Outcome of the whole-sentence translation inside a report
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "status", rename_all = "lowercase")]
pub enum SentenceTranslation {
    /// The service translated the sentence
    Translated {
        /// Translated sentence
        text: String,
    },
    /// The sentence failed; only possible under `GlossPolicy::Independent`
    Unavailable {
        /// Service error message
        reason: String,
    },
}

impl SentenceTranslation {
    /// Translated text, or the error marker
    pub fn text(&self) -> &str {
        match self {
            SentenceTranslation::Translated { text } => text,
            SentenceTranslation::Unavailable { .. } => TRANSLATION_ERROR_MARKER,
        }
    }
}

/// Result of one translate-and-explain operation
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct TranslationReport {
    /// Trimmed input sentence
    pub original: String,
    /// Languages the report was produced for
    pub pair: LanguagePair,
    /// Whole-sentence translation
    pub translation: SentenceTranslation,
    /// Word-by-word gloss
    pub gloss: Gloss,
}
