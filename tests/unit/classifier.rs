//! Classifier behaviour through the public `classify` entry point

use qr_rebuilder::classify;
use qr_rebuilder::types::{ClassifiedContent, TypedValue, UrlContent, WifiConfig};

use crate::common::{assert_kind, SAMPLE_PAYLOADS};

#[test]
fn test_sample_payloads_classify_as_expected() {
    for (payload, expected) in SAMPLE_PAYLOADS {
        assert_kind(&classify(payload), expected);
    }
}

#[test]
fn test_url_fields() {
    assert_eq!(
        classify("https://example.com/a?b=1#c"),
        ClassifiedContent::Url(UrlContent {
            scheme: "https".to_string(),
            domain: "example.com".to_string(),
            path: "/a".to_string(),
            query: "b=1".to_string(),
            fragment: "c".to_string(),
        })
    );
}

#[test]
fn test_url_with_at_sign_is_still_url() {
    assert_kind(&classify("http://host/path@x.y"), "URL");
}

#[test]
fn test_wifi_fields() {
    assert_eq!(
        classify("WIFI:S:MyNet;T:WPA;P:secret;H:true;"),
        ClassifiedContent::WiFiConfig(WifiConfig {
            ssid: "MyNet".to_string(),
            has_password: true,
            encryption: "WPA".to_string(),
            hidden: true,
        })
    );
}

#[test]
fn test_vcard_fields() {
    let content =
        classify("BEGIN:VCARD\nVERSION:3.0\nFN:Jane Doe\nTEL;WORK;VOICE:555-1234\nEND:VCARD");
    match content {
        ClassifiedContent::VCard(card) => {
            assert_eq!(card.version.as_deref(), Some("3.0"));
            assert_eq!(card.full_name.as_deref(), Some("Jane Doe"));
            assert_eq!(
                card.phone,
                Some(TypedValue {
                    value: "555-1234".to_string(),
                    types: vec!["WORK".to_string(), "VOICE".to_string()],
                })
            );
            assert!(card.email.is_none());
        }
        other => panic!("expected vCard, got {:?}", other),
    }
}

#[test]
fn test_geo_fields_and_error() {
    match classify("geo:37.7749,-122.4194") {
        ClassifiedContent::GeoLocation(location) => {
            assert_eq!(location.latitude, 37.7749);
            assert_eq!(location.longitude, -122.4194);
            assert_eq!(location.altitude, None);
        }
        other => panic!("expected geo location, got {:?}", other),
    }
    assert!(classify("geo:notanumber,0").is_error());
}

#[test]
fn test_phone_threshold() {
    assert_kind(&classify("12025550123"), "Phone");
    assert_kind(&classify("1234567"), "Phone");
    assert_kind(&classify("123456"), "Text");
    assert_kind(&classify("12345"), "Text");
}

#[test]
fn test_json_scalars_are_not_json() {
    assert_kind(&classify("[1, 2, 3]"), "JSON");
    assert_kind(&classify("\"quoted\""), "Text");
    assert_kind(&classify("true"), "Text");
}

#[test]
fn test_bare_email_needs_dotted_domain() {
    assert_kind(&classify("user@example.com"), "Email");
    assert_kind(&classify("user@localhost"), "Text");
    assert_kind(&classify("two words@example.com"), "Text");
}

#[test]
fn test_classification_is_total_for_odd_input() {
    let inputs = [
        "\u{0}",
        "WIFI:",
        "BEGIN:VCARD",
        "bitcoin:",
        "mailto:",
        "smsto:",
        "geo:",
        "http://[::1",
        "ünïcödé ✓",
        "{not json",
    ];
    for input in inputs {
        // Must return without panicking
        let _ = classify(input);
    }
}
