//! Common Test Utilities
//!
//! Shared helpers and sample payloads used by both the unit and integration suites.

#![allow(dead_code)]

use qr_rebuilder::ClassifiedContent;
use std::path::PathBuf;
use tempfile::TempDir;

/// Representative payloads paired with the display name they classify as
pub const SAMPLE_PAYLOADS: &[(&str, &str)] = &[
    ("", "Empty"),
    ("https://example.com/a?b=1#c", "URL"),
    ("WIFI:S:MyNet;T:WPA;P:secret;H:true;", "WiFi Configuration"),
    (
        "BEGIN:VCARD\nVERSION:3.0\nFN:Jane Doe\nTEL;WORK;VOICE:555-1234\nEND:VCARD",
        "vCard",
    ),
    ("bitcoin:1BoatSLRHtKNngkdXEeobR76b53LETtpyT?amount=0.01", "Bitcoin Payment"),
    (r#"{"name": "qr", "tags": [1, 2]}"#, "JSON"),
    ("mailto:someone@example.com?subject=Hi", "Email"),
    ("+1 202 555 0123", "Phone"),
    ("SMSTO:+15551234:Running late", "SMS"),
    ("geo:37.7749,-122.4194", "Geographic Location"),
    ("Just some words", "Text"),
    ("geo:north,east", "Error"),
];

/// Scratch directory that is removed when dropped
pub struct ScratchDir {
    dir: TempDir,
}

impl ScratchDir {
    pub fn new() -> Self {
        Self {
            dir: tempfile::tempdir().unwrap(),
        }
    }

    /// Path for a file inside the scratch directory
    pub fn path(&self, name: &str) -> PathBuf {
        self.dir.path().join(name)
    }
}

/// Assert that content classified as the expected kind, showing the value on failure
pub fn assert_kind(content: &ClassifiedContent, expected: &str) {
    assert_eq!(
        content.display_name(),
        expected,
        "unexpected classification: {:?}",
        content
    );
}
