//! Main entry point for the glossa CLI

#![forbid(unsafe_code)]

use clap::Parser;
use dotenvy::dotenv;
use std::path::PathBuf;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use glossa::cli::commands::{self, Commands};
use glossa::AppConfig;

/// glossa - translate a sentence and explain it word by word
#[derive(Parser, Debug)]
#[command(name = "glossa", version, about, long_about = None)]
struct Args {
    /// Configuration file (TOML, JSON or YAML); defaults to $GLOSSA_CONFIG
    #[arg(long)]
    config: Option<PathBuf>,

    /// Enable verbose logging
    #[arg(short, long)]
    verbose: bool,

    #[command(subcommand)]
    command: Option<Commands>,
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // Load environment variables
    dotenv().ok();

    let args = Args::parse();

    // Initialize logging
    let log_level = if args.verbose { "debug" } else { "warn" };
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| format!("{}={}", env!("CARGO_CRATE_NAME"), log_level).into()),
        )
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .init();

    let config = AppConfig::load(args.config.as_deref())?;

    match args.command {
        Some(Commands::Explain {
            text,
            from,
            to,
            output,
            speak,
            json,
        }) => {
            commands::handle_explain(&config, text, from, to, output, speak, json).await?;
        }
        Some(Commands::Speak { text, lang, save }) => {
            commands::handle_speak(&config, text, lang, save).await?;
        }
        Some(Commands::Languages) => commands::handle_languages(),
        None => {
            println!("Please specify a command. Use --help for more information.");
        }
    }

    Ok(())
}
