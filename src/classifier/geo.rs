//! `geo:` URI recogniser
//!
//! Format: `geo:<lat>,<lng>[,<alt>][;key=value]*`. Once the prefix matches, a
//! missing or non-numeric coordinate is reported as an error instead of falling
//! through to plain text.

use super::error::{RecognitionError, RecognitionResult};
use super::params::{parse_parameters, strip_prefix_ignore_case};
use super::ContentRecognizer;
use crate::types::{ClassifiedContent, GeoLocation};

pub struct GeoRecognizer;

impl ContentRecognizer for GeoRecognizer {
    fn name(&self) -> &'static str {
        "geo"
    }

    fn recognize(&self, text: &str) -> Option<RecognitionResult<ClassifiedContent>> {
        let body = strip_prefix_ignore_case(text, "geo:")?;
        Some(parse_geo(body).map(ClassifiedContent::GeoLocation))
    }
}

fn parse_geo(body: &str) -> RecognitionResult<GeoLocation> {
    let mut segments = body.split(';');
    let coordinates: Vec<&str> = segments.next().unwrap_or_default().split(',').collect();

    let latitude = parse_coordinate(coordinates.first().copied(), "latitude")?;
    let longitude = parse_coordinate(coordinates.get(1).copied(), "longitude")?;
    let altitude = match coordinates.get(2).copied() {
        Some(raw) => Some(parse_coordinate(Some(raw), "altitude")?),
        None => None,
    };

    Ok(GeoLocation {
        latitude,
        longitude,
        altitude,
        parameters: parse_parameters(segments),
    })
}

fn parse_coordinate(raw: Option<&str>, name: &str) -> RecognitionResult<f64> {
    let raw = raw.ok_or_else(|| RecognitionError::InvalidGeo(format!("missing {}", name)))?;
    raw.trim().parse::<f64>().map_err(|_| {
        RecognitionError::InvalidGeo(format!("could not parse {} '{}'", name, raw))
    })
}
