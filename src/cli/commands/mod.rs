pub mod analyse;
pub mod generate;
pub mod rebuild;

use crate::codec::{EncodeOptions, ErrorCorrection};
use crate::config::EncodingConfig;
use crate::errors::AppResult;
use clap::Args;
use std::path::Path;

/// Encoding flags shared by `rebuild` and `generate`; unset flags fall back to config
#[derive(Args, Debug, Default)]
pub struct EncodingArgs {
    /// Size of each QR code module in pixels (overrides config.toml)
    #[arg(short = 'b', long, visible_alias = "box_size")]
    pub box_size: Option<u32>,

    /// Number of modules for the QR code border (overrides config.toml)
    #[arg(long)]
    pub border: Option<u32>,

    /// Error correction level (overrides config.toml)
    #[arg(
        short = 'e',
        long,
        visible_alias = "error_correction",
        value_enum,
        ignore_case = true
    )]
    pub error_correction: Option<ErrorCorrection>,
}

impl EncodingArgs {
    /// Merge CLI overrides over configured values
    pub fn resolve(&self, config: &EncodingConfig) -> EncodeOptions {
        let mut options = config.to_options();
        if let Some(box_size) = self.box_size {
            options.module_size = box_size;
        }
        if let Some(border) = self.border {
            options.border = border;
        }
        if let Some(level) = self.error_correction {
            options.error_correction = level;
        }
        options
    }
}

/// Write output to file with safe directory creation
pub(crate) fn write_output_to_file(path: &Path, content: &str, description: &str) -> AppResult<()> {
    if let Some(parent) = path.parent() {
        std::fs::create_dir_all(parent)?;
    }
    std::fs::write(path, content)?;
    println!("{} written to: {}", description, path.display());
    Ok(())
}
