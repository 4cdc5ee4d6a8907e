use super::EncodingArgs;
use crate::codec::save_qr;
use crate::config::AppConfig;
use crate::errors::AppResult;
use clap::Args;
use std::path::PathBuf;

/// Encode text into a clean QR image without reading a photo first
#[derive(Args)]
pub struct GenerateCommand {
    /// Text to encode
    pub text: String,

    /// Path to save the QR code
    #[arg(short = 'o', long)]
    pub output: PathBuf,

    #[command(flatten)]
    pub encoding: EncodingArgs,
}

impl GenerateCommand {
    pub fn run(&self) -> AppResult<()> {
        let options = self.encoding.resolve(&AppConfig::load()?.encoding);
        save_qr(&self.text, &options, &self.output)?;
        println!("QR code saved to: {}", self.output.display());
        Ok(())
    }
}
