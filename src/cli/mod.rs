use crate::errors::AppResult;
use clap::{Parser, Subcommand};

pub mod commands;

/// QR Code Rebuilder
#[derive(Parser)]
#[command(name = "qr-rebuilder")]
#[command(about = "QR Code Rebuilder: extract a QR code from an image and generate a clean version")]
#[command(version)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,
}

/// Available CLI commands
#[derive(Subcommand)]
pub enum Commands {
    /// Extract a QR payload from a photo, report its content and save a clean QR image
    Rebuild(commands::rebuild::RebuildCommand),
    /// Classify a payload (given directly or read from an image) and print its report
    Analyse(commands::analyse::AnalyseCommand),
    /// Encode text directly into a clean QR image
    Generate(commands::generate::GenerateCommand),
}

pub fn run() -> AppResult<()> {
    // Initialise tracing subscriber to capture info!() macros
    // Uses RUST_LOG environment variable (defaults to "error" if not set)
    let _ = tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("error")),
        )
        .with_writer(std::io::stderr)
        .try_init();

    let cli = Cli::parse();

    match cli.command {
        Commands::Rebuild(command) => command.run(),
        Commands::Analyse(command) => command.run(),
        Commands::Generate(command) => command.run(),
    }
}
