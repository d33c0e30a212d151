//! HTTP translation client with retry logic

use async_trait::async_trait;
use std::time::Duration;
use tokio::time::sleep;
use tracing::{debug, info, warn};

use crate::core::config::AppConfig;
use crate::core::errors::{GlossError, Result};
use crate::core::models::TranslationRequest;
use crate::core::translator::Translator;

const TRANSLATE_PATH: &str = "/translate_a/single";

/// Upper bound on a single backoff sleep
const MAX_BACKOFF_MS: u64 = 30_000;

/// One attempt's failure, classified for the retry loop
#[derive(Debug)]
enum AttemptError {
    /// Network error, rate limit or server error
    Transient(String),
    /// Anything retrying will not fix
    Fatal(String),
}

/// Client for the public Google Translate endpoint
#[derive(Debug, Clone)]
pub struct GoogleTranslateClient {
    client: reqwest::Client,
    endpoint: String,
    max_chars: usize,
    max_retries: u32,
    retry_delay_ms: u64,
}

impl GoogleTranslateClient {
    /// Create a new client
    pub fn new(config: &AppConfig) -> Result<Self> {
        config.validate()?;

        let client = reqwest::Client::builder()
            .timeout(Duration::from_millis(config.timeout_ms))
            .pool_idle_timeout(Some(Duration::from_secs(30)))
            .build()?;

        Ok(Self {
            client,
            endpoint: config.translate_endpoint.trim_end_matches('/').to_string(),
            max_chars: config.max_chars,
            max_retries: config.max_retries,
            retry_delay_ms: config.retry_delay_ms,
        })
    }

    /// Translate with retries and exponential backoff
    async fn translate_with_retry(&self, text: &str, request: &TranslationRequest) -> Result<String> {
        let mut last_error = String::new();

        for attempt in 0..=self.max_retries {
            if attempt > 0 {
                debug!("Retry attempt {} for {}", attempt, request.pair());
                sleep(backoff_delay(self.retry_delay_ms, attempt)).await;
            }

            match self.send_request(text, request).await {
                Ok(translation) => {
                    if attempt > 0 {
                        info!("Successfully translated after {} retries", attempt);
                    }
                    return Ok(translation);
                }
                Err(AttemptError::Fatal(message)) => return Err(GlossError::translation(message)),
                Err(AttemptError::Transient(message)) => {
                    warn!("Translation attempt {} failed: {}", attempt + 1, message);
                    last_error = message;
                }
            }
        }

        Err(GlossError::translation(last_error))
    }

    /// Send actual HTTP request
    async fn send_request(
        &self,
        text: &str,
        request: &TranslationRequest,
    ) -> std::result::Result<String, AttemptError> {
        let url = format!("{}{}", self.endpoint, TRANSLATE_PATH);

        let response = self
            .client
            .get(&url)
            .query(&[
                ("client", "gtx"),
                ("sl", request.source.code()),
                ("tl", request.target.code()),
                ("dt", "t"),
                ("q", text),
            ])
            .send()
            .await
            .map_err(|e| AttemptError::Transient(format!("Network error: {}", e)))?;

        let status = response.status();

        if !status.is_success() {
            let error_text = response.text().await.unwrap_or_default();
            let message = format!("API error: {} - {}", status.as_u16(), error_text);

            return Err(if status.as_u16() == 429 || status.is_server_error() {
                AttemptError::Transient(message)
            } else {
                AttemptError::Fatal(message)
            });
        }

        let json: serde_json::Value = response
            .json()
            .await
            .map_err(|e| AttemptError::Fatal(format!("Invalid response: {}", e)))?;

        parse_translation(&json).map_err(AttemptError::Fatal)
    }
}

/// Sleep before retry `attempt` (1-based): doubles each time, capped
fn backoff_delay(retry_delay_ms: u64, attempt: u32) -> Duration {
    let factor = 2_u64.saturating_pow(attempt.saturating_sub(1));
    Duration::from_millis(retry_delay_ms.saturating_mul(factor).min(MAX_BACKOFF_MS))
}

/// Concatenate the translated segments of `[[["seg", "src", ...], ...], ...]`
fn parse_translation(json: &serde_json::Value) -> std::result::Result<String, String> {
    let segments = json
        .get(0)
        .and_then(|s| s.as_array())
        .ok_or_else(|| "Invalid response: no translation segments".to_string())?;

    let translation: String = segments
        .iter()
        .filter_map(|segment| segment.get(0).and_then(|t| t.as_str()))
        .collect();

    if translation.is_empty() {
        return Err("Invalid response: empty translation".to_string());
    }

    Ok(translation)
}

#[async_trait]
impl Translator for GoogleTranslateClient {
    async fn translate(&self, request: &TranslationRequest) -> Result<String> {
        let text = request.text.trim();

        if text.chars().count() > self.max_chars {
            return Err(GlossError::translation(format!(
                "text is {} characters long; the limit is {}",
                text.chars().count(),
                self.max_chars
            )));
        }

        if text.is_empty() || request.pair().is_identity() {
            debug!("Skipping request for {}: nothing to translate", request.pair());
            return Ok(text.to_string());
        }

        self.translate_with_retry(text, request).await
    }
}
