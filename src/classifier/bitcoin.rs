use super::error::RecognitionResult;
use super::params::{parse_parameters, strip_prefix_ignore_case};
use super::ContentRecognizer;
use crate::types::{BitcoinPayment, ClassifiedContent};

/// BIP21-style `bitcoin:<address>?amount=..&label=..` payment URIs
///
/// The address is not validated; only the segment between the first and a
/// second `?` is read as parameters.
pub struct BitcoinRecognizer;

impl ContentRecognizer for BitcoinRecognizer {
    fn name(&self) -> &'static str {
        "bitcoin"
    }

    fn recognize(&self, text: &str) -> Option<RecognitionResult<ClassifiedContent>> {
        let body = strip_prefix_ignore_case(text, "bitcoin:")?;

        let mut segments = body.split('?');
        let address = segments.next().unwrap_or_default().to_string();
        let parameters = segments
            .next()
            .map(|query| parse_parameters(query.split('&')))
            .unwrap_or_default();

        Some(Ok(ClassifiedContent::BitcoinPayment(BitcoinPayment {
            address,
            parameters,
        })))
    }
}
