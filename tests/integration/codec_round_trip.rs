//! Codec round trips: generate a clean symbol, read it back, compare payloads

use image::{imageops, DynamicImage, GrayImage, Luma};
use qr_rebuilder::codec::{
    decode_image, extract_qr, generate_qr, save_qr, CodecError, EncodeOptions, ErrorCorrection,
};
use qr_rebuilder::{classify, ClassifiedContent};

use crate::common::{ScratchDir, SAMPLE_PAYLOADS};

#[test]
fn test_sample_payloads_survive_round_trip() {
    let options = EncodeOptions::default();
    for (payload, _) in SAMPLE_PAYLOADS.iter().filter(|(p, _)| !p.is_empty()) {
        let image = generate_qr(payload, &options).unwrap();
        let decoded = decode_image(&DynamicImage::ImageLuma8(image)).unwrap();
        assert_eq!(decoded, *payload);
    }
}

#[test]
fn test_every_error_correction_level() {
    let payload = "https://example.com/some/longer/path?with=query";
    for level in [
        ErrorCorrection::L,
        ErrorCorrection::M,
        ErrorCorrection::Q,
        ErrorCorrection::H,
    ] {
        let options = EncodeOptions {
            module_size: 6,
            border: 4,
            error_correction: level,
        };
        let image = generate_qr(payload, &options).unwrap();
        assert_eq!(
            decode_image(&DynamicImage::ImageLuma8(image)).unwrap(),
            payload
        );
    }
}

#[test]
fn test_higher_correction_needs_larger_symbol() {
    let payload = "The quick brown fox jumps over the lazy dog";
    let small = |level| {
        let options = EncodeOptions {
            module_size: 1,
            border: 0,
            error_correction: level,
        };
        generate_qr(payload, &options).unwrap().width()
    };
    assert!(small(ErrorCorrection::H) > small(ErrorCorrection::L));
}

#[test]
fn test_save_and_extract_png() {
    let scratch = ScratchDir::new();
    let path = scratch.path("out/clean.png");
    let payload = "geo:37.7749,-122.4194";

    save_qr(payload, &EncodeOptions::default(), &path).unwrap();
    assert!(path.exists());

    let extracted = extract_qr(&path).unwrap();
    assert_eq!(extracted, payload);
    assert!(matches!(
        classify(&extracted),
        ClassifiedContent::GeoLocation(_)
    ));
}

#[test]
fn test_symbol_inside_larger_photo() {
    let payload = "WIFI:S:Lobby;T:WPA;P:pass1234;;";
    let symbol = generate_qr(payload, &EncodeOptions::default()).unwrap();

    let mut canvas = GrayImage::from_pixel(
        symbol.width() + 200,
        symbol.height() + 120,
        Luma([200]),
    );
    imageops::overlay(&mut canvas, &symbol, 130, 40);

    let decoded = decode_image(&DynamicImage::ImageLuma8(canvas)).unwrap();
    assert_eq!(decoded, payload);
}

#[test]
fn test_extract_missing_file() {
    let scratch = ScratchDir::new();
    assert!(matches!(
        extract_qr(scratch.path("missing.png")),
        Err(CodecError::Image(_))
    ));
}

#[test]
fn test_extract_image_without_symbol() {
    let scratch = ScratchDir::new();
    let path = scratch.path("blank.png");
    GrayImage::from_pixel(120, 120, Luma([255]))
        .save(&path)
        .unwrap();
    assert!(matches!(extract_qr(&path), Err(CodecError::NoSymbolFound)));
}

#[test]
fn test_oversized_payload_fails_to_encode() {
    let payload = "x".repeat(5000);
    assert!(matches!(
        generate_qr(&payload, &EncodeOptions::default()),
        Err(CodecError::Encode(_))
    ));
}
