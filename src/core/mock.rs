//! Mock translator for testing
//!
//! A deterministic, network-free [`Translator`] that also records every
//! request it receives, so tests can assert on call counts and order.
//!
//! ```ignore
//! let mock = MockTranslator::new(MockMode::Suffix);
//! let out = mock.translate(&TranslationRequest::new("hello", pair)).await?;
//! assert_eq!(out, "hello_ja");
//! ```

use async_trait::async_trait;
use std::collections::{HashMap, HashSet};
use std::sync::Mutex;

use crate::core::errors::{GlossError, Result};
use crate::core::models::TranslationRequest;
use crate::core::translator::Translator;

/// Mock translation modes
#[derive(Debug, Clone)]
pub enum MockMode {
    /// Return the input unchanged
    Identity,
    /// Append the target code: "hello" → "hello_ja"
    Suffix,
    /// Look up (text, target code); falls back to [`MockMode::Suffix`]
    Mappings(HashMap<(String, String), String>),
    /// Fail for the listed texts, suffix everything else
    FailOn(HashSet<String>),
    /// Fail every request with the given message
    Error(String),
}

/// Mock translator that records the requests it serves
#[derive(Debug)]
pub struct MockTranslator {
    mode: MockMode,
    requests: Mutex<Vec<TranslationRequest>>,
}

impl MockTranslator {
    /// Create a mock answering in `mode`
    pub fn new(mode: MockMode) -> Self {
        Self {
            mode,
            requests: Mutex::new(Vec::new()),
        }
    }

    /// Fails only for the given texts
    pub fn failing_on<I, S>(texts: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self::new(MockMode::FailOn(texts.into_iter().map(Into::into).collect()))
    }

    /// Number of translate calls seen so far
    pub fn call_count(&self) -> usize {
        self.requests.lock().map(|r| r.len()).unwrap_or(0)
    }

    /// Texts of all requests, in call order
    pub fn requested_texts(&self) -> Vec<String> {
        self.requests
            .lock()
            .map(|r| r.iter().map(|req| req.text.clone()).collect())
            .unwrap_or_default()
    }

    fn apply_translation(&self, request: &TranslationRequest) -> Result<String> {
        let text = request.text.as_str();
        let target = request.target.code();

        match &self.mode {
            MockMode::Identity => Ok(text.to_string()),
            MockMode::Suffix => Ok(format!("{}_{}", text, target)),
            MockMode::Mappings(map) => Ok(map
                .get(&(text.to_string(), target.to_string()))
                .cloned()
                .unwrap_or_else(|| format!("{}_{}", text, target))),
            MockMode::FailOn(failing) if failing.contains(text) => Err(GlossError::translation(
                format!("mock failure for '{}'", text),
            )),
            MockMode::FailOn(_) => Ok(format!("{}_{}", text, target)),
            MockMode::Error(message) => Err(GlossError::translation(message.clone())),
        }
    }
}

#[async_trait]
impl Translator for MockTranslator {
    async fn translate(&self, request: &TranslationRequest) -> Result<String> {
        if let Ok(mut requests) = self.requests.lock() {
            requests.push(request.clone());
        }
        self.apply_translation(request)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::models::{Language, LanguagePair};

    fn pair() -> LanguagePair {
        LanguagePair::new(Language::English, Language::Japanese)
    }

    #[tokio::test]
    async fn test_suffix_mode() {
        let mock = MockTranslator::new(MockMode::Suffix);
        let out = mock
            .translate(&TranslationRequest::new("hello", pair()))
            .await
            .unwrap();
        assert_eq!(out, "hello_ja");
        assert_eq!(mock.call_count(), 1);
    }

    #[tokio::test]
    async fn test_mappings_mode() {
        let mut map = HashMap::new();
        map.insert(
            ("cat".to_string(), "ja".to_string()),
            "猫".to_string(),
        );
        let mock = MockTranslator::new(MockMode::Mappings(map));

        let cat = mock.translate(&TranslationRequest::new("cat", pair())).await.unwrap();
        let dog = mock.translate(&TranslationRequest::new("dog", pair())).await.unwrap();
        assert_eq!(cat, "猫");
        assert_eq!(dog, "dog_ja");
    }

    #[tokio::test]
    async fn test_fail_on_mode_records_every_call() {
        let mock = MockTranslator::failing_on(["bad"]);

        assert!(mock.translate(&TranslationRequest::new("bad", pair())).await.is_err());
        assert!(mock.translate(&TranslationRequest::new("good", pair())).await.is_ok());
        assert_eq!(mock.requested_texts(), vec!["bad", "good"]);
    }
}
