//! Translate-and-explain: sentence translation followed by the word gloss

use tracing::{info, warn};

use crate::core::config::GlossPolicy;
use crate::core::errors::{GlossError, Result};
use crate::core::models::{Gloss, LanguagePair, SentenceTranslation, TranslationReport};
use crate::core::translator::Translator;
use crate::gloss::assembler::GlossAssembler;
use crate::gloss::sentence::SentenceTranslator;

/// Runs one translate-and-explain operation against a translation collaborator
pub struct Explainer<T> {
    translator: T,
    policy: GlossPolicy,
}

impl<T: Translator> Explainer<T> {
    /// Explainer with the default `Abort` policy
    pub fn new(translator: T) -> Self {
        Self {
            translator,
            policy: GlossPolicy::default(),
        }
    }

    /// Choose what happens to the gloss when the sentence fails
    pub fn with_policy(mut self, policy: GlossPolicy) -> Self {
        self.policy = policy;
        self
    }

    /// The underlying translation collaborator
    pub fn translator(&self) -> &T {
        &self.translator
    }

    /// Translate `text` as a whole, then gloss it word by word
    ///
    /// Empty input fails with [`GlossError::EmptyInput`] before any service call.
    /// A sentence failure aborts the operation under [`GlossPolicy::Abort`]; under
    /// [`GlossPolicy::Independent`] the gloss is still built.
    pub async fn translate_and_explain(
        &self,
        text: &str,
        pair: LanguagePair,
    ) -> Result<TranslationReport> {
        let text = text.trim();
        if text.is_empty() {
            return Err(GlossError::EmptyInput);
        }

        info!("Translating {} chars ({})", text.chars().count(), pair);

        let translation = match SentenceTranslator::new(&self.translator)
            .translate(text, pair)
            .await
        {
            Ok(translated) => SentenceTranslation::Translated { text: translated },
            Err(e) if self.policy == GlossPolicy::Independent => {
                warn!("Continuing with the gloss after sentence failure");
                SentenceTranslation::Unavailable {
                    reason: e.to_string(),
                }
            }
            Err(e) => return Err(e),
        };

        let gloss: Gloss = GlossAssembler::new(&self.translator)
            .assemble(text, pair)
            .await;

        if gloss.failure_count() > 0 {
            warn!(
                "{} of {} words could not be translated",
                gloss.failure_count(),
                gloss.len()
            );
        }

        Ok(TranslationReport {
            original: text.to_string(),
            pair,
            translation,
            gloss,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::mock::{MockMode, MockTranslator};
    use crate::core::models::Language;
    use std::sync::Arc;

    fn en_en() -> LanguagePair {
        LanguagePair::new(Language::English, Language::English)
    }

    #[tokio::test]
    async fn test_hello_world_identity() {
        let explainer = Explainer::new(MockTranslator::new(MockMode::Identity));
        let report = explainer
            .translate_and_explain("Hello, world!", en_en())
            .await
            .unwrap();

        assert_eq!(report.translation.text(), "Hello, world!");
        assert_eq!(report.gloss.render(), "Hello : Hello\nworld : world");
        // one sentence call plus one per token
        assert_eq!(explainer.translator().call_count(), 3);
    }

    #[tokio::test]
    async fn test_empty_input_makes_no_calls() {
        let explainer = Explainer::new(MockTranslator::new(MockMode::Identity));

        for text in ["", "   ", "\n\t"] {
            let err = explainer.translate_and_explain(text, en_en()).await.unwrap_err();
            assert!(matches!(err, GlossError::EmptyInput));
        }
        assert_eq!(explainer.translator().call_count(), 0);
    }

    #[tokio::test]
    async fn test_sentence_failure_aborts_gloss() {
        let explainer = Explainer::new(MockTranslator::new(MockMode::Error("down".to_string())));
        let err = explainer
            .translate_and_explain("Hello world", en_en())
            .await
            .unwrap_err();

        assert!(matches!(err, GlossError::TranslationServiceFailure { .. }));
        assert_eq!(explainer.translator().call_count(), 1);
    }

    #[tokio::test]
    async fn test_independent_policy_still_glosses() {
        let mock = MockTranslator::failing_on(["Hello world"]);
        let explainer = Explainer::new(mock).with_policy(GlossPolicy::Independent);
        let report = explainer
            .translate_and_explain("Hello world", en_en())
            .await
            .unwrap();

        assert!(matches!(report.translation, SentenceTranslation::Unavailable { .. }));
        assert_eq!(report.gloss.render(), "Hello : Hello_en\nworld : world_en");
    }

    #[tokio::test]
    async fn test_repeat_runs_are_identical() {
        let explainer = Explainer::new(Arc::new(MockTranslator::new(MockMode::Suffix)));
        let pair = LanguagePair::new(Language::Hindi, Language::Japanese);

        let first = explainer.translate_and_explain("एक दो तीन", pair).await.unwrap();
        let second = explainer.translate_and_explain("एक दो तीन", pair).await.unwrap();
        assert_eq!(first, second);
    }
}
