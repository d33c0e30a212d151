//! Whole-sentence translation

use tracing::{debug, warn};

use crate::core::errors::{GlossError, Result};
use crate::core::models::{LanguagePair, TranslationRequest};
use crate::core::translator::Translator;

/// Translates the complete input in one collaborator call
pub struct SentenceTranslator<'t> {
    translator: &'t dyn Translator,
}

impl<'t> SentenceTranslator<'t> {
    /// Create a sentence translator over `translator`
    pub fn new(translator: &'t dyn Translator) -> Self {
        Self { translator }
    }

    /// Failures surface as [`GlossError::TranslationServiceFailure`]
    pub async fn translate(&self, text: &str, pair: LanguagePair) -> Result<String> {
        let request = TranslationRequest::new(text, pair);

        match self.translator.translate(&request).await {
            Ok(translation) => {
                debug!("Sentence translated ({}, {} chars)", pair, translation.chars().count());
                Ok(translation)
            }
            Err(e @ GlossError::TranslationServiceFailure { .. }) => {
                warn!("Sentence translation failed ({}): {}", pair, e);
                Err(e)
            }
            Err(e) => {
                warn!("Sentence translation failed ({}): {}", pair, e);
                Err(GlossError::translation(e.to_string()))
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::mock::{MockMode, MockTranslator};
    use crate::core::models::Language;

    #[tokio::test]
    async fn test_identity_sentence() {
        let mock = MockTranslator::new(MockMode::Identity);
        let pair = LanguagePair::new(Language::English, Language::English);
        let out = SentenceTranslator::new(&mock)
            .translate("Hello, world!", pair)
            .await
            .unwrap();

        assert_eq!(out, "Hello, world!");
        assert_eq!(mock.call_count(), 1);
    }

    #[tokio::test]
    async fn test_failure_propagates() {
        let mock = MockTranslator::new(MockMode::Error("503".to_string()));
        let pair = LanguagePair::new(Language::Tamil, Language::Japanese);
        let err = SentenceTranslator::new(&mock)
            .translate("வணக்கம்", pair)
            .await
            .unwrap_err();

        assert!(matches!(err, GlossError::TranslationServiceFailure { .. }));
    }
}
