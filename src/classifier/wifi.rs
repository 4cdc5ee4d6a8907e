use super::error::RecognitionResult;
use super::ContentRecognizer;
use crate::types::{ClassifiedContent, WifiConfig};

const WIFI_PREFIX: &str = "WIFI:";

/// `WIFI:S:<ssid>;T:<auth>;P:<password>;H:<hidden>;;` network credentials
///
/// The password is reduced to a presence flag at extraction time.
pub struct WifiRecognizer;

impl ContentRecognizer for WifiRecognizer {
    fn name(&self) -> &'static str {
        "wifi"
    }

    fn recognize(&self, text: &str) -> Option<RecognitionResult<ClassifiedContent>> {
        let body = text.strip_prefix(WIFI_PREFIX)?;

        let mut ssid = None;
        let mut password = None;
        let mut encryption = None;
        let mut hidden = None;

        for segment in body.split(';') {
            let Some((key, value)) = segment.split_once(':') else {
                continue;
            };
            match key {
                "S" => ssid = Some(value),
                "P" => password = Some(value),
                "T" => encryption = Some(value),
                "H" => hidden = Some(value),
                _ => {}
            }
        }

        Some(Ok(ClassifiedContent::WiFiConfig(WifiConfig {
            ssid: ssid.unwrap_or_default().to_string(),
            has_password: password.is_some_and(|p| !p.is_empty()),
            encryption: encryption.unwrap_or("Unknown").to_string(),
            hidden: hidden == Some("true"),
        })))
    }
}
