//! vCard contact recogniser
//!
//! Lines are matched against a fixed set of property names. `TEL`, `EMAIL` and `ADR`
//! may carry `;`-delimited type parameters before the value (`TEL;WORK;VOICE:...`);
//! every other property must be followed directly by `:`. A repeated property
//! overwrites the earlier one.

use super::error::RecognitionResult;
use super::params::positional;
use super::ContentRecognizer;
use crate::types::{ClassifiedContent, PostalAddress, StructuredName, TypedValue, VCard};
use lazy_static::lazy_static;
use regex::Regex;

const VCARD_PREFIX: &str = "BEGIN:VCARD";

/// Type tag used when a typed property carries no parameters
const DEFAULT_TYPE: &str = "DEFAULT";

lazy_static! {
    static ref PROPERTY_RE: Regex =
        Regex::new(r"^(VERSION|N|FN|TITLE|TEL|EMAIL|ORG|ADR|URL|NOTE)([;:])").unwrap();
}

pub struct VCardRecognizer;

impl ContentRecognizer for VCardRecognizer {
    fn name(&self) -> &'static str {
        "vcard"
    }

    fn recognize(&self, text: &str) -> Option<RecognitionResult<ClassifiedContent>> {
        if !text.starts_with(VCARD_PREFIX) {
            return None;
        }

        let mut card = VCard::default();
        for line in text.lines() {
            apply_property(&mut card, line);
        }

        Some(Ok(ClassifiedContent::VCard(card)))
    }
}

fn apply_property(card: &mut VCard, line: &str) {
    let Some(caps) = PROPERTY_RE.captures(line) else {
        return;
    };
    let name = caps.get(1).map_or("", |m| m.as_str());
    let has_params = caps.get(2).is_some_and(|m| m.as_str() == ";");

    match name {
        "TEL" => {
            if let Some((types, value)) = split_typed(line) {
                card.phone = Some(TypedValue {
                    value: value.to_string(),
                    types,
                });
            }
        }
        "EMAIL" => {
            if let Some((types, value)) = split_typed(line) {
                card.email = Some(TypedValue {
                    value: value.to_string(),
                    types,
                });
            }
        }
        "ADR" => {
            if let Some((types, value)) = split_typed(line) {
                let [po_box, extended, street, city, region, postal, country] =
                    positional::<7>(value);
                card.address = Some(PostalAddress {
                    po_box,
                    extended,
                    street,
                    city,
                    region,
                    postal,
                    country,
                    types,
                });
            }
        }
        _ if has_params => {}
        _ => {
            let value = &line[name.len() + 1..];
            match name {
                "VERSION" => card.version = Some(value.to_string()),
                "FN" => card.full_name = Some(value.to_string()),
                "TITLE" => card.title = Some(value.to_string()),
                "ORG" => card.organization = Some(value.to_string()),
                "URL" => card.url = Some(value.to_string()),
                "NOTE" => card.note = Some(value.to_string()),
                "N" => {
                    let [last, first, middle, prefix, suffix] = positional::<5>(value);
                    card.structured_name = Some(StructuredName {
                        last,
                        first,
                        middle,
                        prefix,
                        suffix,
                    });
                }
                _ => {}
            }
        }
    }
}

/// Split `NAME;TYPE1;TYPE2:value` into its type tags and value
fn split_typed(line: &str) -> Option<(Vec<String>, &str)> {
    let (head, value) = line.split_once(':')?;
    let types = match head.split_once(';') {
        Some((_, params)) => params.split(';').map(str::to_string).collect(),
        None => vec![DEFAULT_TYPE.to_string()],
    };
    Some((types, value))
}
