use super::EncodingArgs;
use crate::classifier::classify;
use crate::codec::{extract_qr, save_qr};
use crate::config::AppConfig;
use crate::errors::AppResult;
use crate::report::render;
use clap::Args;
use std::path::PathBuf;
use tracing::info;

/// Extract, report and regenerate in one pass
#[derive(Args)]
pub struct RebuildCommand {
    /// Path to input image containing the QR code (overrides config.toml)
    #[arg(short = 'i', long)]
    pub input: Option<PathBuf>,

    /// Path to save the clean QR code (overrides config.toml)
    #[arg(short = 'o', long)]
    pub output: Option<PathBuf>,

    #[command(flatten)]
    pub encoding: EncodingArgs,

    /// Skip the structured content report
    #[arg(long)]
    pub no_report: bool,
}

impl RebuildCommand {
    pub fn run(&self) -> AppResult<()> {
        let app_config = AppConfig::load()?;
        let input = self.input.as_ref().unwrap_or(&app_config.paths.input);
        let output = self.output.as_ref().unwrap_or(&app_config.paths.output);
        let options = self.encoding.resolve(&app_config.encoding);

        info!("=== QR Rebuilder ===");
        let qr_data = extract_qr(input)?;
        println!("Extracted QR Data: {}", qr_data);

        if !self.no_report {
            println!();
            println!("{}", render(&classify(&qr_data)));
            println!();
        }

        // The raw payload is re-encoded, never the structured interpretation
        save_qr(&qr_data, &options, output)?;
        println!("Clean QR code saved to: {}", output.display());
        Ok(())
    }
}
