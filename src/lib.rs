//! glossa - sentence translation with a word-by-word gloss
//!
//! Translates a sentence between a small set of languages, glosses every word
//! on its own, and can speak the translation or export the whole report to
//! text or PDF.

#![forbid(unsafe_code)]
#![warn(missing_docs)]

pub mod cli;
pub mod core;
pub mod export;
pub mod gloss;
pub mod speech;

// Re-export key types for convenience
pub use crate::core::{
    client::GoogleTranslateClient,
    config::{AppConfig, GlossPolicy},
    errors::{GlossError, Result, TokenTranslationFailure},
    models::{
        Gloss, GlossEntry, Language, LanguagePair, SentenceTranslation, TranslationReport,
        TranslationRequest, TRANSLATION_ERROR_MARKER,
    },
    translator::Translator,
};

pub use export::{export_report, ExportFormat};
pub use gloss::{
    assembler::GlossAssembler,
    explain::Explainer,
    sentence::SentenceTranslator,
    tokenizer::{tokenize, Token, Tokenizer},
    word::WordTranslator,
};
pub use speech::synthesizer::{GoogleSpeechClient, SpeechSynthesizer};

/// Library version
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

/// Library name
pub const NAME: &str = env!("CARGO_PKG_NAME");
