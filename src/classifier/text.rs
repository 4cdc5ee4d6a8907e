use super::error::RecognitionResult;
use super::ContentRecognizer;
use crate::types::{ClassifiedContent, TextSummary};

/// Empty or whitespace-only payloads
pub struct EmptyRecognizer;

impl ContentRecognizer for EmptyRecognizer {
    fn name(&self) -> &'static str {
        "empty"
    }

    fn recognize(&self, text: &str) -> Option<RecognitionResult<ClassifiedContent>> {
        text.trim().is_empty().then_some(Ok(ClassifiedContent::Empty))
    }
}

/// Fallback: always matches
pub struct TextRecognizer;

impl ContentRecognizer for TextRecognizer {
    fn name(&self) -> &'static str {
        "text"
    }

    fn recognize(&self, text: &str) -> Option<RecognitionResult<ClassifiedContent>> {
        Some(Ok(ClassifiedContent::Text(TextSummary::from_text(text))))
    }
}
