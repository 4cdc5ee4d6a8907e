//! QR payload content classification
//!
//! A decoded payload is run through an ordered table of recognisers; the first one
//! that claims the payload decides its kind. Each recogniser is a predicate plus an
//! extractor:
//!
//! - `None`: not this format, try the next recogniser
//! - `Some(Ok(content))`: recognised and extracted
//! - `Some(Err(e))`: recognised but malformed, reported as [`ClassifiedContent::Error`]
//!
//! Classification is total. Unrecognised input always ends up as
//! [`ClassifiedContent::Text`], and nothing is ever signalled to the caller as a failure.

pub mod bitcoin;
pub mod email;
pub mod error;
pub mod geo;
pub mod json;
pub mod params;
pub mod phone;
pub mod text;
pub mod url;
pub mod vcard;
pub mod wifi;

pub use error::{RecognitionError, RecognitionResult};

use crate::types::{ClassifiedContent, TextSummary};
use tracing::debug;

/// Trait that each content recogniser implements
pub trait ContentRecognizer: Sync {
    /// Short identifier used in logs
    fn name(&self) -> &'static str;

    /// Attempt to claim and extract the payload
    fn recognize(&self, text: &str) -> Option<RecognitionResult<ClassifiedContent>>;
}

/// Recognisers in PRIORITY order (first match wins):
///
/// 1. Empty (whitespace only)
/// 2. URL (any scheme with a `//` network location, checked before every prefix
///    format so scheme-qualified strings are URL-shaped first)
/// 3. WiFi (`WIFI:`)
/// 4. vCard (`BEGIN:VCARD`)
/// 5. Bitcoin (`bitcoin:`)
/// 6. JSON (objects and arrays)
/// 7. Email (`mailto:` or bare address)
/// 8. Phone (digits, `+` and spaces)
/// 9. SMS (`smsto:`)
/// 10. Geo (`geo:`), deliberately late: a geo URI whose parameters contain an
///     address-like `@` is claimed by Email first
/// 11. Text (fallback, always matches)
pub static RECOGNIZERS: &[&dyn ContentRecognizer] = &[
    &text::EmptyRecognizer,
    &url::UrlRecognizer,
    &wifi::WifiRecognizer,
    &vcard::VCardRecognizer,
    &bitcoin::BitcoinRecognizer,
    &json::JsonRecognizer,
    &email::EmailRecognizer,
    &phone::PhoneRecognizer,
    &phone::SmsRecognizer,
    &geo::GeoRecognizer,
    &text::TextRecognizer,
];

/// Classify a decoded QR payload
pub fn classify(text: &str) -> ClassifiedContent {
    for recognizer in RECOGNIZERS {
        match recognizer.recognize(text) {
            None => continue,
            Some(Ok(content)) => {
                debug!(
                    "Payload classified as {} by '{}' recogniser",
                    content.display_name(),
                    recognizer.name()
                );
                return content;
            }
            Some(Err(e)) => {
                debug!(
                    "Recogniser '{}' matched but failed to parse payload: {}",
                    recognizer.name(),
                    e
                );
                return ClassifiedContent::error(e.to_string());
            }
        }
    }

    // Unreachable while TextRecognizer terminates the table
    ClassifiedContent::Text(TextSummary::from_text(text))
}
