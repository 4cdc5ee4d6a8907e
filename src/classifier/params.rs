//! Shared parsing helpers for prefix-based payload formats

use crate::types::Parameters;

/// Strip an ASCII prefix, comparing case-insensitively
pub fn strip_prefix_ignore_case<'a>(text: &'a str, prefix: &str) -> Option<&'a str> {
    let head = text.get(..prefix.len())?;
    if head.eq_ignore_ascii_case(prefix) {
        Some(&text[prefix.len()..])
    } else {
        None
    }
}

/// Parse `key=value` segments into an ordered parameter map
///
/// Segments without `=` are skipped; the value keeps any further `=` characters.
pub fn parse_parameters<'a>(segments: impl IntoIterator<Item = &'a str>) -> Parameters {
    segments
        .into_iter()
        .filter_map(|segment| segment.split_once('='))
        .collect()
}

/// Split a `;`-delimited value into `N` positional components, padding with empty strings
pub fn positional<const N: usize>(value: &str) -> [String; N] {
    let mut parts = value.split(';');
    std::array::from_fn(|_| parts.next().unwrap_or_default().to_string())
}
