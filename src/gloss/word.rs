//! Single-token translation with failure isolation

use tracing::{debug, warn};

use crate::core::errors::TokenTranslationFailure;
use crate::core::models::{LanguagePair, TranslationRequest};
use crate::core::translator::Translator;
use crate::gloss::tokenizer::Token;

/// Translates one token at a time; a failure never escapes as an error
pub struct WordTranslator<'t> {
    translator: &'t dyn Translator,
}

impl<'t> WordTranslator<'t> {
    /// Borrow `translator` for per-token calls
    pub fn new(translator: &'t dyn Translator) -> Self {
        Self { translator }
    }

    /// Exactly one collaborator call per token
    pub async fn translate(
        &self,
        token: Token<'_>,
        pair: LanguagePair,
    ) -> Result<String, TokenTranslationFailure> {
        let request = TranslationRequest::new(token.as_str(), pair);

        match self.translator.translate(&request).await {
            Ok(word) => {
                debug!("{} -> {} ({})", token, word, pair);
                Ok(word)
            }
            Err(e) => {
                warn!("Word '{}' failed to translate ({}): {}", token, pair, e);
                Err(TokenTranslationFailure {
                    token: token.as_str().to_string(),
                    reason: e.to_string(),
                })
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::mock::{MockMode, MockTranslator};
    use crate::core::models::Language;

    fn pair() -> LanguagePair {
        LanguagePair::new(Language::English, Language::Tamil)
    }

    #[tokio::test]
    async fn test_successful_word() {
        let mock = MockTranslator::new(MockMode::Suffix);
        let words = WordTranslator::new(&mock);
        let token = Token::new("cat").unwrap();

        assert_eq!(words.translate(token, pair()).await.unwrap(), "cat_ta");
        assert_eq!(mock.call_count(), 1);
    }

    #[tokio::test]
    async fn test_failure_is_returned_not_raised() {
        let mock = MockTranslator::new(MockMode::Error("service down".to_string()));
        let words = WordTranslator::new(&mock);
        let token = Token::new("cat").unwrap();

        let failure = words.translate(token, pair()).await.unwrap_err();
        assert_eq!(failure.token, "cat");
        assert!(failure.reason.contains("service down"));
        assert_eq!(mock.call_count(), 1);
    }
}
