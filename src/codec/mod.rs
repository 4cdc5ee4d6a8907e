//! Image codec adapter
//!
//! Thin wrapper over the off-the-shelf QR crates: `rqrr` locates and decodes a symbol
//! in a still image, `qrcode` computes the module matrix for regeneration and `image`
//! handles pixel buffers and file formats.

pub mod error;

pub use error::{CodecError, CodecResult};

use image::{DynamicImage, GrayImage, Luma};
use qrcode::{Color, EcLevel, QrCode};
use serde::{Deserialize, Serialize};
use std::path::Path;
use tracing::{debug, info, warn};

/// Recommended module (box) size range in pixels
pub const MODULE_SIZE_RANGE: (u32, u32) = (5, 30);
/// Recommended quiet-zone range in modules
pub const BORDER_RANGE: (u32, u32) = (1, 10);

const DARK: Luma<u8> = Luma([0]);
const LIGHT: Luma<u8> = Luma([255]);

/// QR error-correction level
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize, clap::ValueEnum)]
pub enum ErrorCorrection {
    /// ~7% recovery
    #[serde(alias = "l")]
    L,
    /// ~15% recovery
    #[serde(alias = "m")]
    M,
    /// ~25% recovery
    #[serde(alias = "q")]
    Q,
    /// ~30% recovery
    #[default]
    #[serde(alias = "h")]
    H,
}

impl From<ErrorCorrection> for EcLevel {
    fn from(level: ErrorCorrection) -> Self {
        match level {
            ErrorCorrection::L => EcLevel::L,
            ErrorCorrection::M => EcLevel::M,
            ErrorCorrection::Q => EcLevel::Q,
            ErrorCorrection::H => EcLevel::H,
        }
    }
}

/// Parameters for regenerating a clean QR image
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct EncodeOptions {
    /// Pixel edge length of one module
    pub module_size: u32,
    /// Quiet zone width in modules
    pub border: u32,
    pub error_correction: ErrorCorrection,
}

impl Default for EncodeOptions {
    fn default() -> Self {
        Self {
            module_size: 10,
            border: 4,
            error_correction: ErrorCorrection::H,
        }
    }
}

impl EncodeOptions {
    /// Reject unusable options; warn about values outside the recommended ranges
    pub fn validate(&self) -> CodecResult<()> {
        if self.module_size == 0 {
            return Err(CodecError::InvalidOptions(
                "module size must be at least 1 pixel".to_string(),
            ));
        }

        let (min_size, max_size) = MODULE_SIZE_RANGE;
        if !(min_size..=max_size).contains(&self.module_size) {
            warn!(
                "Module size {} is outside the recommended range {}-{}",
                self.module_size, min_size, max_size
            );
        }

        let (min_border, max_border) = BORDER_RANGE;
        if !(min_border..=max_border).contains(&self.border) {
            warn!(
                "Border {} is outside the recommended range {}-{}",
                self.border, min_border, max_border
            );
        }

        Ok(())
    }
}

/// Decode the first QR symbol in an image that yields a payload
///
/// Candidate grids that fail to decode are skipped; `Decode` is returned only when
/// every candidate fails.
pub fn decode_image(image: &DynamicImage) -> CodecResult<String> {
    let luma = image.to_luma8();
    let (width, height) = luma.dimensions();
    debug!("Scanning {}x{} image for QR symbols", width, height);

    let mut prepared =
        rqrr::PreparedImage::prepare_from_greyscale(width as usize, height as usize, |x, y| {
            luma.get_pixel(x as u32, y as u32).0[0]
        });

    let grids = prepared.detect_grids();
    debug!("Detected {} candidate grid(s)", grids.len());

    let mut last_error = None;
    for (index, grid) in grids.iter().enumerate() {
        match grid.decode() {
            Ok((_meta, content)) => {
                debug!("Decoded {} byte payload from grid {}", content.len(), index);
                return Ok(content);
            }
            Err(e) => {
                debug!("Grid {} failed to decode: {}", index, e);
                last_error = Some(e.to_string());
            }
        }
    }

    Err(match last_error {
        Some(message) => CodecError::Decode(message),
        None => CodecError::NoSymbolFound,
    })
}

/// Open an image file and decode its QR payload
pub fn extract_qr<P: AsRef<Path>>(path: P) -> CodecResult<String> {
    let path = path.as_ref();
    info!("Reading QR code from {}", path.display());
    let image = image::open(path)?;
    decode_image(&image)
}

/// Render text as a clean black-on-white QR image
pub fn generate_qr(text: &str, options: &EncodeOptions) -> CodecResult<GrayImage> {
    options.validate()?;

    let code = QrCode::with_error_correction_level(text.as_bytes(), options.error_correction.into())?;
    let modules = code.width();
    debug!(
        "Encoded {} bytes into a {}x{} module matrix at level {:?}",
        text.len(),
        modules,
        modules,
        options.error_correction
    );

    let scale = options.module_size as usize;
    let offset = options.border as usize * scale;
    let edge = (modules + 2 * options.border as usize)
        .checked_mul(scale)
        .and_then(|edge| u32::try_from(edge).ok())
        .ok_or_else(|| {
            CodecError::InvalidOptions(format!(
                "image of {} modules at {} px per module is too large",
                modules, scale
            ))
        })?;

    let mut image = GrayImage::from_pixel(edge, edge, LIGHT);

    for (y, row) in code.to_colors().chunks(modules).enumerate() {
        for (x, color) in row.iter().enumerate() {
            if *color != Color::Dark {
                continue;
            }
            let left = offset + x * scale;
            let top = offset + y * scale;
            for dy in 0..scale {
                for dx in 0..scale {
                    image.put_pixel((left + dx) as u32, (top + dy) as u32, DARK);
                }
            }
        }
    }

    Ok(image)
}

/// Generate a QR image and write it to disk, format chosen by extension
pub fn save_qr<P: AsRef<Path>>(text: &str, options: &EncodeOptions, path: P) -> CodecResult<()> {
    let path = path.as_ref();
    if let Some(parent) = path.parent() {
        if !parent.as_os_str().is_empty() {
            std::fs::create_dir_all(parent)?;
        }
    }

    let image = generate_qr(text, options)?;
    image.save(path)?;
    info!(
        "Saved {}x{} QR image to {}",
        image.width(),
        image.height(),
        path.display()
    );
    Ok(())
}
