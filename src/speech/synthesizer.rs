//! Text-to-speech via the Google translate TTS endpoint

use async_trait::async_trait;
use std::time::Duration;
use tracing::debug;

use crate::core::config::AppConfig;
use crate::core::errors::{GlossError, Result};
use crate::core::models::Language;

const TTS_PATH: &str = "/translate_tts";

/// Longest text the TTS endpoint accepts per request
pub const MAX_CHUNK_CHARS: usize = 100;

/// A service that turns text into playable audio bytes
#[async_trait]
pub trait SpeechSynthesizer: Send + Sync {
    /// Synthesize `text` spoken in `language`; returns MP3 data
    async fn synthesize(&self, text: &str, language: Language) -> Result<Vec<u8>>;
}

/// Client for the Google translate TTS endpoint
#[derive(Debug, Clone)]
pub struct GoogleSpeechClient {
    client: reqwest::Client,
    endpoint: String,
}

impl GoogleSpeechClient {
    /// Create a client for `config.speech_endpoint`
    pub fn new(config: &AppConfig) -> Result<Self> {
        config.validate()?;

        let client = reqwest::Client::builder()
            .timeout(Duration::from_millis(config.timeout_ms))
            .build()?;

        Ok(Self {
            client,
            endpoint: config.speech_endpoint.trim_end_matches('/').to_string(),
        })
    }

    async fn fetch_chunk(
        &self,
        chunk: &str,
        language: Language,
        idx: usize,
        total: usize,
    ) -> Result<Vec<u8>> {
        let url = format!("{}{}", self.endpoint, TTS_PATH);
        let total = total.to_string();
        let idx = idx.to_string();
        let textlen = chunk.chars().count().to_string();

        let response = self
            .client
            .get(&url)
            .query(&[
                ("ie", "UTF-8"),
                ("q", chunk),
                ("tl", language.code()),
                ("client", "tw-ob"),
                ("total", total.as_str()),
                ("idx", idx.as_str()),
                ("textlen", textlen.as_str()),
            ])
            .send()
            .await
            .map_err(|e| GlossError::speech(format!("Network error: {}", e)))?;

        let status = response.status();
        if !status.is_success() {
            let error_text = response.text().await.unwrap_or_default();
            return Err(GlossError::speech(format!(
                "API error: {} - {}",
                status.as_u16(),
                error_text
            )));
        }

        let bytes = response
            .bytes()
            .await
            .map_err(|e| GlossError::speech(format!("Invalid response: {}", e)))?;

        Ok(bytes.to_vec())
    }
}

#[async_trait]
impl SpeechSynthesizer for GoogleSpeechClient {
    async fn synthesize(&self, text: &str, language: Language) -> Result<Vec<u8>> {
        let chunks = split_for_speech(text, MAX_CHUNK_CHARS);
        if chunks.is_empty() {
            return Err(GlossError::speech("No text to speak"));
        }

        let mut audio = Vec::new();
        for (idx, chunk) in chunks.iter().enumerate() {
            debug!("Synthesizing chunk {}/{} ({})", idx + 1, chunks.len(), language.code());
            audio.extend(self.fetch_chunk(chunk, language, idx, chunks.len()).await?);
        }

        Ok(audio)
    }
}

/// Split text into chunks of at most `max_chars` characters, breaking on whitespace
///
/// Words longer than `max_chars` are cut on character boundaries.
pub fn split_for_speech(text: &str, max_chars: usize) -> Vec<String> {
    let max_chars = max_chars.max(1);
    let mut chunks = Vec::new();
    let mut current = String::new();
    let mut current_len = 0;

    for word in text.split_whitespace() {
        let word_len = word.chars().count();

        if word_len > max_chars {
            if !current.is_empty() {
                chunks.push(std::mem::take(&mut current));
                current_len = 0;
            }
            let chars: Vec<char> = word.chars().collect();
            for piece in chars.chunks(max_chars) {
                chunks.push(piece.iter().collect());
            }
            continue;
        }

        let needed = if current.is_empty() { word_len } else { word_len + 1 };
        if current_len + needed > max_chars {
            chunks.push(std::mem::take(&mut current));
            current_len = 0;
        }

        if !current.is_empty() {
            current.push(' ');
            current_len += 1;
        }
        current.push_str(word);
        current_len += word_len;
    }

    if !current.is_empty() {
        chunks.push(current);
    }

    chunks
}
