//! CLI command definitions and handlers

use clap::Subcommand;
use std::path::PathBuf;
use tokio::io::AsyncReadExt;
use tracing::info;

use crate::core::client::GoogleTranslateClient;
use crate::core::config::AppConfig;
use crate::core::models::{Language, LanguagePair, SentenceTranslation, TranslationReport};
use crate::export::export_report;
use crate::gloss::explain::Explainer;
use crate::speech::playback::{play_translation, system_player};
use crate::speech::save_speech;
use crate::speech::synthesizer::GoogleSpeechClient;

/// Commands for glossa
#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Translate a sentence and explain it word by word
    Explain {
        /// Sentence to translate (read from stdin if omitted)
        text: Option<String>,

        /// Source language, by name or code (default from config)
        #[arg(short, long, value_parser = parse_language)]
        from: Option<Language>,

        /// Target language, by name or code (default from config)
        #[arg(short, long, value_parser = parse_language)]
        to: Option<Language>,

        /// Save the report; the extension (.txt or .pdf) selects the format
        #[arg(short, long)]
        output: Option<PathBuf>,

        /// Speak the translated sentence
        #[arg(long)]
        speak: bool,

        /// Print the report as JSON
        #[arg(long)]
        json: bool,
    },

    /// Speak a text in the given language
    Speak {
        /// Text to speak (read from stdin if omitted)
        text: Option<String>,

        /// Language of the text, by name or code (default: config target)
        #[arg(short, long, value_parser = parse_language)]
        lang: Option<Language>,

        /// Write the MP3 to this file instead of playing it
        #[arg(long)]
        save: Option<PathBuf>,
    },

    /// List supported languages
    Languages,
}

/// Parse a language display name or code
pub fn parse_language(value: &str) -> Result<Language, String> {
    value.parse::<Language>().map_err(|_| {
        let names: Vec<&str> = Language::ALL.iter().map(|l| l.display_name()).collect();
        format!("unsupported language '{}' (choose from {})", value, names.join(", "))
    })
}

async fn read_input(text: Option<String>) -> anyhow::Result<String> {
    match text {
        Some(text) => Ok(text),
        None => {
            let mut buf = String::new();
            tokio::io::stdin().read_to_string(&mut buf).await?;
            Ok(buf)
        }
    }
}

/// Console rendering of a report
pub fn format_report(report: &TranslationReport) -> String {
    let mut out = format!(
        "🌍 Translated Sentence ({} → {}):\n{}\n",
        report.pair.source,
        report.pair.target,
        report.translation.text()
    );

    if let SentenceTranslation::Unavailable { reason } = &report.translation {
        out.push_str(&format!("   ({})\n", reason));
    }

    out.push_str("\n📖 Word-by-word Explanation:\n");
    out.push_str(&report.gloss.render());
    out
}

/// Handle explain command
pub async fn handle_explain(
    config: &AppConfig,
    text: Option<String>,
    from: Option<Language>,
    to: Option<Language>,
    output: Option<PathBuf>,
    speak: bool,
    json: bool,
) -> anyhow::Result<()> {
    let text = read_input(text).await?;
    let pair = LanguagePair::new(
        from.unwrap_or(config.source),
        to.unwrap_or(config.target),
    );

    info!("Explaining input ({}), policy {:?}", pair, config.gloss_policy);

    let translator = GoogleTranslateClient::new(config)?;
    let explainer = Explainer::new(translator).with_policy(config.gloss_policy);
    let report = explainer.translate_and_explain(&text, pair).await?;

    if json {
        println!("{}", serde_json::to_string_pretty(&report)?);
    } else {
        println!("{}", format_report(&report));
    }

    if let Some(path) = output {
        let format = export_report(&report, &path)?;
        println!("\n💾 Saved {} report to {}", format, path.display());
    }

    if speak {
        match &report.translation {
            SentenceTranslation::Translated { text } => {
                let synthesizer = GoogleSpeechClient::new(config)?;
                play_translation(&synthesizer, system_player()?, text, pair.target).await?;
            }
            SentenceTranslation::Unavailable { .. } => {
                anyhow::bail!("Nothing to speak: the sentence translation failed");
            }
        }
    }

    Ok(())
}

/// Handle speak command
pub async fn handle_speak(
    config: &AppConfig,
    text: Option<String>,
    lang: Option<Language>,
    save: Option<PathBuf>,
) -> anyhow::Result<()> {
    let text = read_input(text).await?;
    let language = lang.unwrap_or(config.target);
    let synthesizer = GoogleSpeechClient::new(config)?;

    match save {
        Some(path) => {
            save_speech(&synthesizer, &text, language, &path).await?;
            println!("🔊 Saved speech to {}", path.display());
        }
        None => {
            play_translation(&synthesizer, system_player()?, &text, language).await?;
        }
    }

    Ok(())
}

/// Handle languages command
pub fn handle_languages() {
    for language in Language::ALL {
        println!("{:<10} {}", language.display_name(), language.code());
    }
}
