//! QR Rebuilder - Type System
//!
//! - `content`: the closed [`ClassifiedContent`] union and its per-kind records
//! - `parameters`: ordered, case-normalised `key=value` maps used by URI payloads

pub mod content;
pub mod parameters;

pub use content::{
    BitcoinPayment, ClassifiedContent, EmailContent, GeoLocation, PostalAddress, SmsContent,
    StructuredName, TextSummary, TypedValue, UrlContent, VCard, WifiConfig,
};
pub use parameters::Parameters;
