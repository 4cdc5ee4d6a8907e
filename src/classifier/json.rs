use super::error::RecognitionResult;
use super::ContentRecognizer;
use crate::types::ClassifiedContent;
use serde_json::Value;

/// Structured JSON documents
///
/// Only objects and arrays are claimed. Bare numbers, strings and literals are
/// valid JSON too, but claiming them would hide phone numbers and short text.
pub struct JsonRecognizer;

impl ContentRecognizer for JsonRecognizer {
    fn name(&self) -> &'static str {
        "json"
    }

    fn recognize(&self, text: &str) -> Option<RecognitionResult<ClassifiedContent>> {
        let value: Value = serde_json::from_str(text).ok()?;
        if value.is_object() || value.is_array() {
            Some(Ok(ClassifiedContent::Json(value)))
        } else {
            None
        }
    }
}
