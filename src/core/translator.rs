//! Translation collaborator abstraction
//!
//! The gloss pipeline only ever talks to a [`Translator`], so it can run
//! against [`GoogleTranslateClient`](crate::core::client::GoogleTranslateClient)
//! in production and [`MockTranslator`](crate::core::mock::MockTranslator) in tests.

use async_trait::async_trait;
use std::sync::Arc;

use crate::core::errors::Result;
use crate::core::models::TranslationRequest;

/// A service able to translate text between two supported languages
#[async_trait]
pub trait Translator: Send + Sync {
    /// Translate `request.text` from `request.source` to `request.target`
    ///
    /// Failures are reported as [`GlossError::TranslationServiceFailure`](crate::core::errors::GlossError::TranslationServiceFailure).
    async fn translate(&self, request: &TranslationRequest) -> Result<String>;
}

#[async_trait]
impl<T: Translator + ?Sized> Translator for Arc<T> {
    async fn translate(&self, request: &TranslationRequest) -> Result<String> {
        (**self).translate(request).await
    }
}
