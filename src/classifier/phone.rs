use super::error::RecognitionResult;
use super::params::strip_prefix_ignore_case;
use super::ContentRecognizer;
use crate::types::{ClassifiedContent, SmsContent};

/// Minimum length (spaces excluded, exclusive) for a digit string to count as a phone number
const MIN_PHONE_LENGTH: usize = 6;

/// Digit strings that look like phone numbers
///
/// `+` and spaces are allowed anywhere. No format validation is attempted.
pub struct PhoneRecognizer;

impl ContentRecognizer for PhoneRecognizer {
    fn name(&self) -> &'static str {
        "phone"
    }

    fn recognize(&self, text: &str) -> Option<RecognitionResult<ClassifiedContent>> {
        let mut digits = text.chars().filter(|c| *c != '+' && *c != ' ').peekable();
        let all_digits = digits.peek().is_some() && digits.all(|c| c.is_ascii_digit());
        let length = text.chars().filter(|c| *c != ' ').count();

        if !all_digits || length <= MIN_PHONE_LENGTH {
            return None;
        }

        let number = text.strip_prefix("tel:").unwrap_or(text);
        Some(Ok(ClassifiedContent::Phone {
            number: number.to_string(),
        }))
    }
}

/// `smsto:<number>:<message>` payloads
pub struct SmsRecognizer;

impl ContentRecognizer for SmsRecognizer {
    fn name(&self) -> &'static str {
        "sms"
    }

    fn recognize(&self, text: &str) -> Option<RecognitionResult<ClassifiedContent>> {
        let body = strip_prefix_ignore_case(text, "smsto:")?;

        let mut segments = body.split(':');
        let number = segments.next().unwrap_or_default().to_string();
        let message = segments.next().map(str::to_string);

        Some(Ok(ClassifiedContent::Sms(SmsContent { number, message })))
    }
}
