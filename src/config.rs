use crate::codec::{EncodeOptions, ErrorCorrection};
use config::{Config, ConfigError, Environment, File};
use serde::{Deserialize, Serialize};
use std::path::PathBuf;

/// Environment variable prefix, e.g. `QR_REBUILDER_ENCODING__BORDER=2`
pub const ENV_PREFIX: &str = "QR_REBUILDER";

const DEFAULT_INPUT: &str = "qr_code_photo.jpg";
const DEFAULT_OUTPUT: &str = "clean_qr_output.png";

/// Application configuration loaded from config.toml or environment variables
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AppConfig {
    pub paths: PathsConfig,
    pub encoding: EncodingConfig,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PathsConfig {
    /// Photo of the QR code to rebuild
    pub input: PathBuf,
    /// Where the regenerated QR image is written
    pub output: PathBuf,
}

/// Regeneration defaults used when the CLI does not override them
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct EncodingConfig {
    pub module_size: u32,
    pub border: u32,
    pub error_correction: ErrorCorrection,
}

impl Default for AppConfig {
    fn default() -> Self {
        let encoding = EncodeOptions::default();
        Self {
            paths: PathsConfig {
                input: PathBuf::from(DEFAULT_INPUT),
                output: PathBuf::from(DEFAULT_OUTPUT),
            },
            encoding: EncodingConfig {
                module_size: encoding.module_size,
                border: encoding.border,
                error_correction: encoding.error_correction,
            },
        }
    }
}

impl EncodingConfig {
    pub fn to_options(&self) -> EncodeOptions {
        EncodeOptions {
            module_size: self.module_size,
            border: self.border,
            error_correction: self.error_correction,
        }
    }
}

impl AppConfig {
    /// Load configuration from config.toml file and environment variables
    /// Environment variables take precedence over file configuration
    pub fn load() -> Result<Self, ConfigError> {
        Self::load_from(File::with_name("config").required(false))
    }

    /// Load configuration layering the given file source over the built-in defaults
    pub fn load_from(
        file: File<config::FileSourceFile, config::FileFormat>,
    ) -> Result<Self, ConfigError> {
        let defaults = AppConfig::default();
        let config = Config::builder()
            // Start with default values
            .set_default("paths.input", DEFAULT_INPUT)?
            .set_default("paths.output", DEFAULT_OUTPUT)?
            .set_default("encoding.module_size", defaults.encoding.module_size as i64)?
            .set_default("encoding.border", defaults.encoding.border as i64)?
            .set_default("encoding.error_correction", "H")?
            // Load from config file if it exists
            .add_source(file)
            // QR_REBUILDER_* env variables override everything else
            .add_source(
                Environment::with_prefix(ENV_PREFIX)
                    .prefix_separator("_")
                    .separator("__"),
            )
            .build()?;

        config.try_deserialize()
    }
}
