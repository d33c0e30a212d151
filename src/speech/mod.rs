//! Speech synthesis and playback of translated text

pub mod playback;
pub mod synthesizer;

use std::path::Path;
use tracing::info;

use crate::core::errors::{GlossError, Result};
use crate::core::models::Language;
use crate::export::write_atomic;
use synthesizer::SpeechSynthesizer;

/// Synthesize `text` and store the MP3 at `path` instead of playing it
pub async fn save_speech(
    synthesizer: &dyn SpeechSynthesizer,
    text: &str,
    language: Language,
    path: &Path,
) -> Result<()> {
    let text = text.trim();
    if text.is_empty() {
        return Err(GlossError::EmptyInput);
    }

    let audio = synthesizer.synthesize(text, language).await?;
    write_atomic(path, &audio)?;

    info!("Saved {} bytes of speech to {}", audio.len(), path.display());
    Ok(())
}
