//! Custom error types for translation, speech and export operations

use thiserror::Error;

/// Errors surfaced to the caller of a translate-and-explain, speech or export operation
#[derive(Error, Debug)]
pub enum GlossError {
    /// Translation requested with no text
    #[error("Please enter a sentence")]
    EmptyInput,

    /// Language selection outside the supported set
    #[error("Unsupported language selection: {name}")]
    UnsupportedLanguageSelection {
        /// The rejected display name or code
        name: String,
    },

    /// Whole-sentence translation failed
    #[error("Translation service failure: {message}")]
    TranslationServiceFailure {
        /// Description of the underlying failure
        message: String,
    },

    /// Speech synthesis or playback failed
    #[error("Speech service failure: {message}")]
    SpeechServiceFailure {
        /// Description of the underlying failure
        message: String,
    },

    /// Export destination could not be written
    #[error("Export failed: {path} - {message}")]
    ExportIoFailure {
        /// Destination path
        path: String,
        /// Description of the underlying failure
        message: String,
    },

    /// Export destination has neither a `.txt` nor a `.pdf` extension
    #[error("Unsupported export format: {path} (expected .txt or .pdf)")]
    UnsupportedExportFormat {
        /// Destination path
        path: String,
    },

    /// Configuration error
    #[error("Configuration error: {message}")]
    ConfigError {
        /// Description of the configuration problem
        message: String,
    },

    /// IO error
    #[error("IO error: {0}")]
    IoError(#[from] std::io::Error),

    /// Reqwest error
    #[error("HTTP client error: {0}")]
    HttpError(#[from] reqwest::Error),
}

impl From<config::ConfigError> for GlossError {
    fn from(err: config::ConfigError) -> Self {
        GlossError::ConfigError {
            message: err.to_string(),
        }
    }
}

impl GlossError {
    /// Wrap any displayable failure as a whole-sentence translation failure
    pub fn translation(message: impl Into<String>) -> Self {
        GlossError::TranslationServiceFailure {
            message: message.into(),
        }
    }

    /// Wrap any displayable failure as a speech failure
    pub fn speech(message: impl Into<String>) -> Self {
        GlossError::SpeechServiceFailure {
            message: message.into(),
        }
    }
}

/// A single token could not be translated; recovered inside the gloss
#[derive(Error, Debug, Clone, PartialEq, Eq)]
#[error("translation unavailable for '{token}': {reason}")]
pub struct TokenTranslationFailure {
    /// The token that failed
    pub token: String,
    /// Why the collaborator failed
    pub reason: String,
}

/// Result type for gloss operations
pub type Result<T> = std::result::Result<T, GlossError>;
