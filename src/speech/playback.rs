//! Scoped audio playback
//!
//! Synthesized audio is written to a temporary file that lives exactly as long
//! as the playback call. The file is removed and the output device released on
//! every exit path, including synthesis or player failures.

use std::io::Write;
use std::path::Path;
use std::sync::Arc;
use tempfile::NamedTempFile;
use tracing::{debug, info};

use crate::core::errors::{GlossError, Result};
use crate::core::models::Language;
use crate::speech::synthesizer::SpeechSynthesizer;

/// Plays an audio file to completion, then releases the output device
pub trait AudioPlayer: Send + Sync {
    /// Block until `path` has finished playing
    fn play(&self, path: &Path) -> Result<()>;
}

/// Temporary MP3 file removed on drop
struct AudioClip {
    file: NamedTempFile,
}

impl AudioClip {
    fn write(audio: &[u8]) -> Result<Self> {
        let mut file = tempfile::Builder::new()
            .prefix("glossa-speech-")
            .suffix(".mp3")
            .tempfile()
            .map_err(|e| GlossError::speech(format!("Cannot create audio file: {}", e)))?;

        file.write_all(audio)
            .and_then(|_| file.flush())
            .map_err(|e| GlossError::speech(format!("Cannot write audio file: {}", e)))?;

        Ok(Self { file })
    }

    fn path(&self) -> &Path {
        self.file.path()
    }
}

/// Synthesize `text` and play it, blocking until playback finishes
pub async fn play_translation(
    synthesizer: &dyn SpeechSynthesizer,
    player: Arc<dyn AudioPlayer>,
    text: &str,
    language: Language,
) -> Result<()> {
    let text = text.trim();
    if text.is_empty() {
        return Err(GlossError::EmptyInput);
    }

    let audio = synthesizer
        .synthesize(text, language)
        .await
        .map_err(into_speech_failure)?;

    let clip = AudioClip::write(&audio)?;
    let path = clip.path().to_path_buf();
    debug!("Playing {} bytes from {}", audio.len(), path.display());

    let played = tokio::task::spawn_blocking(move || player.play(&path))
        .await
        .map_err(|e| GlossError::speech(format!("Playback task failed: {}", e)))?;

    drop(clip);
    played.map_err(into_speech_failure)?;

    info!("Finished playing translation ({})", language.code());
    Ok(())
}

fn into_speech_failure(err: GlossError) -> GlossError {
    match err {
        GlossError::SpeechServiceFailure { .. } => err,
        other => GlossError::speech(other.to_string()),
    }
}

/// Plays MP3 files on the default output device
#[cfg(feature = "audio")]
#[derive(Debug, Default, Clone, Copy)]
pub struct RodioPlayer;

#[cfg(feature = "audio")]
impl AudioPlayer for RodioPlayer {
    fn play(&self, path: &Path) -> Result<()> {
        let (_stream, handle) = rodio::OutputStream::try_default()
            .map_err(|e| GlossError::speech(format!("No audio output device: {}", e)))?;
        let sink = rodio::Sink::try_new(&handle)
            .map_err(|e| GlossError::speech(format!("Cannot open audio sink: {}", e)))?;

        let file = std::fs::File::open(path)
            .map_err(|e| GlossError::speech(format!("Cannot open {}: {}", path.display(), e)))?;
        let source = rodio::Decoder::new(std::io::BufReader::new(file))
            .map_err(|e| GlossError::speech(format!("Cannot decode audio: {}", e)))?;

        sink.append(source);
        sink.sleep_until_end();
        sink.stop();
        Ok(())
    }
}

/// The player for this build
pub fn system_player() -> Result<Arc<dyn AudioPlayer>> {
    #[cfg(feature = "audio")]
    {
        Ok(Arc::new(RodioPlayer))
    }

    #[cfg(not(feature = "audio"))]
    {
        Err(GlossError::speech(
            "audio playback is not available in this build (enable the `audio` feature or save the audio to a file)",
        ))
    }
}
