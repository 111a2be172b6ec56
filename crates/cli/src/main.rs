//! DocChat CLI — the main entry point.
//!
//! Commands:
//! - `chat`     — Ask questions about a document (single message or interactive)
//! - `extract`  — Print the text extracted from a document
//! - `onboard`  — Write a default config file
//! - `doctor`   — Check configuration

use std::path::PathBuf;

use clap::{Parser, Subcommand};

mod commands;

#[derive(Parser)]
#[command(
    name = "docchat",
    about = "DocChat — chat with your documents",
    version,
    author
)]
struct Cli {
    #[command(subcommand)]
    command: Commands,

    /// Enable verbose logging
    #[arg(short, long, global = true)]
    verbose: bool,
}

#[derive(Subcommand)]
enum Commands {
    /// Chat about a document
    Chat {
        /// PDF, .docx or .txt file to load as context
        #[arg(short, long)]
        document: Option<PathBuf>,

        /// Send a single message instead of entering interactive mode
        #[arg(short, long)]
        message: Option<String>,

        /// Override the configured model / deployment
        #[arg(long, env = "DOCCHAT_MODEL")]
        model: Option<String>,
    },

    /// Print the text extracted from a document
    Extract {
        /// The document to read
        file: PathBuf,
    },

    /// Initialize configuration
    Onboard,

    /// Diagnose configuration
    Doctor,
}

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    let cli = Cli::parse();

    // Initialize tracing
    let filter = if cli.verbose { "debug" } else { "info" };
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new(filter)),
        )
        .with_target(false)
        .with_writer(std::io::stderr)
        .init();

    match cli.command {
        Commands::Chat {
            document,
            message,
            model,
        } => commands::chat::run(document, message, model).await?,
        Commands::Extract { file } => commands::extract::run(&file)?,
        Commands::Onboard => commands::onboard::run()?,
        Commands::Doctor => commands::doctor::run()?,
    }

    Ok(())
}
