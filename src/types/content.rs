//! Classified QR Payload Content
//!
//! A decoded QR payload is classified into exactly one [`ClassifiedContent`] kind.
//! Each kind carries only its own typed fields, so consumers match exhaustively
//! instead of probing for optional keys.

use super::parameters::Parameters;
use serde::Serialize;

/// Number of characters kept in a plain-text preview
pub const TEXT_PREVIEW_CHARS: usize = 100;

/// Marker appended to a truncated plain-text preview
pub const TRUNCATION_MARKER: &str = "...";

/// Result of classifying a QR payload
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(tag = "kind", content = "data")]
pub enum ClassifiedContent {
    /// Payload is empty or whitespace only
    Empty,
    /// Absolute URI with a network location
    Url(UrlContent),
    /// `WIFI:` network credentials
    WiFiConfig(WifiConfig),
    /// `BEGIN:VCARD` contact card
    VCard(VCard),
    /// `bitcoin:` payment URI
    BitcoinPayment(BitcoinPayment),
    /// Structured JSON document
    Json(serde_json::Value),
    /// `mailto:` link or bare address
    Email(EmailContent),
    /// Telephone number
    Phone { number: String },
    /// `smsto:` message
    Sms(SmsContent),
    /// `geo:` coordinates
    GeoLocation(GeoLocation),
    /// Unclassified text
    Text(TextSummary),
    /// Recognised format that failed to parse
    Error { message: String },
}

impl ClassifiedContent {
    /// Human-readable name of the active kind, used as the report header
    pub fn display_name(&self) -> &'static str {
        match self {
            ClassifiedContent::Empty => "Empty",
            ClassifiedContent::Url(_) => "URL",
            ClassifiedContent::WiFiConfig(_) => "WiFi Configuration",
            ClassifiedContent::VCard(_) => "vCard",
            ClassifiedContent::BitcoinPayment(_) => "Bitcoin Payment",
            ClassifiedContent::Json(_) => "JSON",
            ClassifiedContent::Email(_) => "Email",
            ClassifiedContent::Phone { .. } => "Phone",
            ClassifiedContent::Sms(_) => "SMS",
            ClassifiedContent::GeoLocation(_) => "Geographic Location",
            ClassifiedContent::Text(_) => "Text",
            ClassifiedContent::Error { .. } => "Error",
        }
    }

    pub fn error(message: impl Into<String>) -> Self {
        ClassifiedContent::Error {
            message: message.into(),
        }
    }

    pub fn is_error(&self) -> bool {
        matches!(self, ClassifiedContent::Error { .. })
    }
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct UrlContent {
    pub scheme: String,
    pub domain: String,
    /// `/` when the URI has no path
    pub path: String,
    pub query: String,
    pub fragment: String,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct WifiConfig {
    pub ssid: String,
    /// Only the presence of a password is kept, never the secret itself
    pub has_password: bool,
    pub encryption: String,
    pub hidden: bool,
}

/// vCard contact fields; absent properties stay `None`
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct VCard {
    pub version: Option<String>,
    pub full_name: Option<String>,
    pub structured_name: Option<StructuredName>,
    pub title: Option<String>,
    pub organization: Option<String>,
    pub url: Option<String>,
    pub note: Option<String>,
    pub phone: Option<TypedValue>,
    pub email: Option<TypedValue>,
    pub address: Option<PostalAddress>,
}

/// Positional `N:` components (last;first;middle;prefix;suffix)
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct StructuredName {
    pub last: String,
    pub first: String,
    pub middle: String,
    pub prefix: String,
    pub suffix: String,
}

impl StructuredName {
    /// Display order: prefix, first, middle, last, suffix; empty parts skipped
    pub fn display_parts(&self) -> Vec<&str> {
        [
            &self.prefix,
            &self.first,
            &self.middle,
            &self.last,
            &self.suffix,
        ]
        .into_iter()
        .map(String::as_str)
        .filter(|part| !part.is_empty())
        .collect()
    }
}

/// Property value with its `;`-delimited type tags (e.g. `TEL;WORK;VOICE:`)
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct TypedValue {
    pub value: String,
    pub types: Vec<String>,
}

impl TypedValue {
    pub fn type_label(&self) -> String {
        self.types.join(";")
    }
}

/// Positional `ADR:` components
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct PostalAddress {
    pub po_box: String,
    pub extended: String,
    pub street: String,
    pub city: String,
    pub region: String,
    pub postal: String,
    pub country: String,
    pub types: Vec<String>,
}

impl PostalAddress {
    pub fn type_label(&self) -> String {
        self.types.join(";")
    }

    /// Summary parts shown in reports; PO box and extended address are omitted
    pub fn display_parts(&self) -> Vec<&str> {
        [
            &self.street,
            &self.city,
            &self.region,
            &self.postal,
            &self.country,
        ]
        .into_iter()
        .map(String::as_str)
        .filter(|part| !part.is_empty())
        .collect()
    }
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct BitcoinPayment {
    pub address: String,
    /// amount, label, message, ...
    pub parameters: Parameters,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct EmailContent {
    pub address: String,
    /// subject, body, cc, bcc, ...
    pub parameters: Parameters,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct SmsContent {
    pub number: String,
    pub message: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct GeoLocation {
    pub latitude: f64,
    pub longitude: f64,
    pub altitude: Option<f64>,
    pub parameters: Parameters,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct TextSummary {
    /// Character count of the full payload
    pub length: usize,
    pub preview: String,
}

impl TextSummary {
    pub fn from_text(text: &str) -> Self {
        let length = text.chars().count();
        let mut preview: String = text.chars().take(TEXT_PREVIEW_CHARS).collect();
        if length > TEXT_PREVIEW_CHARS {
            preview.push_str(TRUNCATION_MARKER);
        }
        Self { length, preview }
    }
}
