//! Report formatting for classified QR content
//!
//! [`render`] turns a [`ClassifiedContent`] into a human-readable [`Report`]: a
//! `Type:` header line followed by the fields of the active kind. [`format_content`]
//! adds a JSON export alongside the console form.

pub mod sections;
pub mod utils;

use crate::errors::AppResult;
use crate::types::ClassifiedContent;
use std::fmt;

/// Output format options for content reports
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub enum OutputFormat {
    #[default]
    Console,
    Json,
}

impl OutputFormat {
    /// Parse output format string; anything unrecognised falls back to console
    pub fn parse(format_str: &str) -> Self {
        match format_str.to_lowercase().as_str() {
            "json" => OutputFormat::Json,
            _ => OutputFormat::Console,
        }
    }
}

/// Ordered display lines describing one payload
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Report {
    lines: Vec<String>,
}

impl Report {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn push(&mut self, line: impl Into<String>) {
        self.lines.push(line.into());
    }

    pub fn lines(&self) -> &[String] {
        &self.lines
    }
}

impl fmt::Display for Report {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.lines.join("\n"))
    }
}

/// Render classified content as a console report
pub fn render(content: &ClassifiedContent) -> Report {
    let mut report = Report::new();

    if let ClassifiedContent::Error { message } = content {
        report.push(format!("Error analyzing content: {}", message));
        return report;
    }

    report.push(format!("Type: {}", content.display_name()));

    match content {
        ClassifiedContent::Empty => report.push("No content detected"),
        ClassifiedContent::Url(url) => sections::url(&mut report, url),
        ClassifiedContent::WiFiConfig(wifi) => sections::wifi(&mut report, wifi),
        ClassifiedContent::VCard(card) => sections::vcard(&mut report, card),
        ClassifiedContent::BitcoinPayment(payment) => sections::bitcoin(&mut report, payment),
        ClassifiedContent::Json(value) => sections::json(&mut report, value),
        ClassifiedContent::Email(email) => sections::email(&mut report, email),
        ClassifiedContent::Phone { number } => report.push(format!("Number: {}", number)),
        ClassifiedContent::Sms(sms) => sections::sms(&mut report, sms),
        ClassifiedContent::GeoLocation(location) => sections::geo(&mut report, location),
        ClassifiedContent::Text(summary) => sections::text(&mut report, summary),
        ClassifiedContent::Error { .. } => {}
    }

    report
}

/// Format classified content in the requested output format
pub fn format_content(content: &ClassifiedContent, format: &OutputFormat) -> AppResult<String> {
    match format {
        OutputFormat::Console => Ok(render(content).to_string()),
        OutputFormat::Json => utils::export_json(content),
    }
}
