//! Generic URI recogniser
//!
//! Splits a payload into scheme, network location, path, query and fragment using
//! the loose generic-URI grammar: a scheme is recognised only when it is followed by
//! `:`, and a network location only when the remainder begins with `//`. Anything
//! with both is reported as a URL, including `mailto://` or `tel://` forms that
//! later prefix recognisers would otherwise claim.

use super::error::{RecognitionError, RecognitionResult};
use super::ContentRecognizer;
use crate::types::{ClassifiedContent, UrlContent};
use lazy_static::lazy_static;
use regex::Regex;
use std::net::IpAddr;

lazy_static! {
    static ref SCHEME_RE: Regex = Regex::new(r"^([A-Za-z][A-Za-z0-9+.\-]*):").unwrap();
    static ref IPV_FUTURE_RE: Regex = Regex::new(r"^v[a-fA-F0-9]+\..+$").unwrap();
}

/// Schemes whose last path segment may carry `;params`
const PARAM_SCHEMES: &[&str] = &[
    "ftp", "hdl", "prospero", "http", "imap", "https", "shttp", "rtsp", "rtspu", "sip",
    "sips", "mms", "sftp", "tel",
];

const INVALID_IPV6: &str = "Invalid IPv6 URL";

/// Raw URI components; every component may be empty
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UriParts {
    pub scheme: String,
    pub netloc: String,
    pub path: String,
    /// `;params` cut from the last path segment of parameter-carrying schemes
    pub params: String,
    pub query: String,
    pub fragment: String,
}

/// Split a string into generic URI components
///
/// Leading control characters and spaces are ignored and embedded tab, CR and LF
/// characters are dropped. Fails only when the network location has a malformed
/// bracketed host.
pub fn split_uri(input: &str) -> RecognitionResult<UriParts> {
    let cleaned: String = input
        .trim_start_matches(|c: char| c <= ' ')
        .chars()
        .filter(|c| !matches!(c, '\t' | '\r' | '\n'))
        .collect();

    let (scheme, rest) = match SCHEME_RE.captures(&cleaned) {
        Some(caps) => (caps[1].to_lowercase(), &cleaned[caps[0].len()..]),
        None => (String::new(), cleaned.as_str()),
    };

    let (netloc, rest) = match rest.strip_prefix("//") {
        Some(after) => {
            let end = after
                .find(|c: char| matches!(c, '/' | '?' | '#'))
                .unwrap_or(after.len());
            (&after[..end], &after[end..])
        }
        None => ("", rest),
    };

    check_brackets(netloc)?;

    let (rest, fragment) = rest.split_once('#').unwrap_or((rest, ""));
    let (path, query) = rest.split_once('?').unwrap_or((rest, ""));
    let (path, params) = if PARAM_SCHEMES.contains(&scheme.as_str()) {
        split_params(path)
    } else {
        (path, "")
    };

    Ok(UriParts {
        scheme,
        netloc: netloc.to_string(),
        path: path.to_string(),
        params: params.to_string(),
        query: query.to_string(),
        fragment: fragment.to_string(),
    })
}

/// Cut `;params` from the last path segment (or from the first `;` when there is no `/`)
fn split_params(path: &str) -> (&str, &str) {
    let search_from = path.rfind('/').unwrap_or(0);
    match path[search_from..].find(';') {
        Some(i) => (&path[..search_from + i], &path[search_from + i + 1..]),
        None => (path, ""),
    }
}

/// Validate a network location's bracketed host, if any
///
/// Brackets must balance, open the host part (after any `user@`), close before an
/// optional `:port`, and enclose an IPv6 or `vX.` future-format address.
fn check_brackets(netloc: &str) -> RecognitionResult<()> {
    let invalid = |message: String| Err(RecognitionError::InvalidUrl(message));

    if netloc.contains('[') != netloc.contains(']') {
        return invalid(INVALID_IPV6.to_string());
    }

    let host_and_port = netloc.rsplit('@').next().unwrap_or(netloc);
    let Some((before, bracketed)) = host_and_port.split_once('[') else {
        return Ok(());
    };
    if !before.is_empty() {
        return invalid(INVALID_IPV6.to_string());
    }

    let (host, port) = bracketed.split_once(']').unwrap_or((bracketed, ""));
    if !port.is_empty() && !port.starts_with(':') {
        return invalid(INVALID_IPV6.to_string());
    }

    if host.starts_with('v') {
        if !IPV_FUTURE_RE.is_match(host) {
            return invalid("IPvFuture address is invalid".to_string());
        }
        return Ok(());
    }

    // Zone identifiers (`fe80::1%eth0`) are allowed after the address
    let address = host.split('%').next().unwrap_or(host);
    match address.parse::<IpAddr>() {
        Ok(IpAddr::V6(_)) => Ok(()),
        Ok(IpAddr::V4(_)) => invalid("An IPv4 address cannot be in brackets".to_string()),
        Err(_) => invalid(format!(
            "'{}' does not appear to be an IPv4 or IPv6 address",
            host
        )),
    }
}

/// Absolute URIs with a network location
pub struct UrlRecognizer;

impl ContentRecognizer for UrlRecognizer {
    fn name(&self) -> &'static str {
        "url"
    }

    fn recognize(&self, text: &str) -> Option<RecognitionResult<ClassifiedContent>> {
        let parts = match split_uri(text) {
            Ok(parts) => parts,
            Err(e) => return Some(Err(e)),
        };

        if parts.scheme.is_empty() || parts.netloc.is_empty() {
            return None;
        }

        let path = if parts.path.is_empty() {
            "/".to_string()
        } else {
            parts.path
        };

        Some(Ok(ClassifiedContent::Url(UrlContent {
            scheme: parts.scheme,
            domain: parts.netloc,
            path,
            query: parts.query,
            fragment: parts.fragment,
        })))
    }
}
