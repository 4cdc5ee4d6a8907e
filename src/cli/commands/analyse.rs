use super::write_output_to_file;
use crate::classifier::classify;
use crate::codec::extract_qr;
use crate::errors::AppResult;
use crate::report::{format_content, OutputFormat};
use clap::Args;
use std::path::PathBuf;
use tracing::debug;

/// Classify a payload and print its report
#[derive(Args)]
pub struct AnalyseCommand {
    /// Payload text to classify
    #[arg(required_unless_present = "image", conflicts_with = "image")]
    pub text: Option<String>,

    /// Read the payload from a QR code image instead
    #[arg(short = 'i', long)]
    pub image: Option<PathBuf>,

    /// Output format (console or json)
    #[arg(long, default_value = "console")]
    pub format: String,

    /// Write the report to a file instead of stdout
    #[arg(short = 'o', long)]
    pub output: Option<PathBuf>,
}

impl AnalyseCommand {
    pub fn run(&self) -> AppResult<()> {
        let payload = match (&self.text, &self.image) {
            (Some(text), _) => text.clone(),
            (None, Some(path)) => extract_qr(path)?,
            (None, None) => String::new(),
        };
        debug!("Analysing {} byte payload", payload.len());

        let content = classify(&payload);
        let formatted = format_content(&content, &OutputFormat::parse(&self.format))?;

        match &self.output {
            Some(path) => write_output_to_file(path, &formatted, "Content report")?,
            None => println!("{}", formatted),
        }
        Ok(())
    }
}
