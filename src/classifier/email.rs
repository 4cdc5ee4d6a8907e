use super::error::RecognitionResult;
use super::params::{parse_parameters, strip_prefix_ignore_case};
use super::ContentRecognizer;
use crate::types::{ClassifiedContent, EmailContent, Parameters};

/// `mailto:` links and bare addresses
///
/// Both forms need an `@` and a single line. A bare address is accepted on a loose
/// heuristic: no spaces, and a `.` somewhere after the last `@`.
pub struct EmailRecognizer;

impl ContentRecognizer for EmailRecognizer {
    fn name(&self) -> &'static str {
        "email"
    }

    fn recognize(&self, text: &str) -> Option<RecognitionResult<ClassifiedContent>> {
        if !text.contains('@') || text.contains('\n') {
            return None;
        }

        if let Some(rest) = strip_prefix_ignore_case(text, "mailto:") {
            let (address, parameters) = match rest.split_once('?') {
                Some((address, query)) => (address, parse_parameters(query.split('&'))),
                None => (rest, Parameters::new()),
            };
            return Some(Ok(ClassifiedContent::Email(EmailContent {
                address: address.to_string(),
                parameters,
            })));
        }

        let domain = text.rsplit('@').next().unwrap_or_default();
        if !text.contains(' ') && domain.contains('.') {
            return Some(Ok(ClassifiedContent::Email(EmailContent {
                address: text.to_string(),
                parameters: Parameters::new(),
            })));
        }

        None
    }
}
