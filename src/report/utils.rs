//! Utility functions for report formatting
//!
//! Provides shared formatting helpers used across the content report formatters.

use crate::errors::AppResult;
#[cfg(test)]
use crate::errors::AppError;
use serde::Serialize;

/// Upper-case the first character and lower-case the rest
///
/// # Examples
///
/// ```
/// # use qr_rebuilder::report::utils::capitalize;
/// assert_eq!(capitalize("amount"), "Amount");
/// assert_eq!(capitalize("X-CUSTOM"), "X-custom");
/// assert_eq!(capitalize(""), "");
/// ```
pub fn capitalize(s: &str) -> String {
    let mut chars = s.chars();
    match chars.next() {
        Some(first) => first
            .to_uppercase()
            .chain(chars.flat_map(char::to_lowercase))
            .collect(),
        None => String::new(),
    }
}

/// Format a coordinate the way it reads in a report
///
/// Shortest round-trip representation, with `.0` kept on integral values so that
/// altitudes and whole-degree coordinates still read as decimals.
pub fn format_float(value: f64) -> String {
    if value.is_nan() {
        "nan".to_string()
    } else if value.is_finite() && value.fract() == 0.0 {
        format!("{:.1}", value)
    } else {
        format!("{}", value)
    }
}

/// Export data as JSON for programmatic use
pub fn export_json<T: Serialize>(data: &T) -> AppResult<String> {
    Ok(serde_json::to_string_pretty(data)?)
}
