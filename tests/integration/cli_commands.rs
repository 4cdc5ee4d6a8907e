//! CLI command pipelines run in-process against scratch files

use qr_rebuilder::cli::commands::analyse::AnalyseCommand;
use qr_rebuilder::cli::commands::generate::GenerateCommand;
use qr_rebuilder::cli::commands::rebuild::RebuildCommand;
use qr_rebuilder::cli::commands::EncodingArgs;
use qr_rebuilder::codec::{extract_qr, generate_qr, save_qr, EncodeOptions, ErrorCorrection};
use qr_rebuilder::errors::AppError;
use serial_test::serial;

use crate::common::ScratchDir;

#[test]
#[serial]
fn test_rebuild_regenerates_same_payload() {
    let scratch = ScratchDir::new();
    let photo = scratch.path("photo.png");
    let output = scratch.path("clean/rebuilt.png");
    let payload = "BEGIN:VCARD\nVERSION:3.0\nFN:Jane Doe\nEND:VCARD";

    // A "photo" with an oversized quiet zone and small modules
    let photo_options = EncodeOptions {
        module_size: 5,
        border: 10,
        error_correction: ErrorCorrection::M,
    };
    save_qr(payload, &photo_options, &photo).unwrap();

    let command = RebuildCommand {
        input: Some(photo),
        output: Some(output.clone()),
        encoding: EncodingArgs {
            box_size: Some(8),
            border: Some(2),
            error_correction: None,
        },
        no_report: false,
    };
    command.run().unwrap();

    assert_eq!(extract_qr(&output).unwrap(), payload);

    let expected = generate_qr(
        payload,
        &EncodeOptions {
            module_size: 8,
            border: 2,
            error_correction: ErrorCorrection::H,
        },
    )
    .unwrap();
    let rebuilt = image::open(&output).unwrap().to_luma8();
    assert_eq!(rebuilt.dimensions(), expected.dimensions());
}

#[test]
#[serial]
fn test_rebuild_missing_input_fails() {
    let scratch = ScratchDir::new();
    let command = RebuildCommand {
        input: Some(scratch.path("nope.jpg")),
        output: Some(scratch.path("out.png")),
        encoding: EncodingArgs::default(),
        no_report: true,
    };

    let result = command.run();
    assert!(matches!(result, Err(AppError::Codec(_))));
    assert!(!scratch.path("out.png").exists());
}

#[test]
#[serial]
fn test_generate_writes_decodable_image() {
    let scratch = ScratchDir::new();
    let output = scratch.path("generated.png");

    let command = GenerateCommand {
        text: "smsto:5551234:hello".to_string(),
        output: output.clone(),
        encoding: EncodingArgs::default(),
    };
    command.run().unwrap();

    assert_eq!(extract_qr(&output).unwrap(), "smsto:5551234:hello");
}

#[test]
#[serial]
fn test_generate_rejects_zero_box_size() {
    let scratch = ScratchDir::new();
    let command = GenerateCommand {
        text: "hello".to_string(),
        output: scratch.path("zero.png"),
        encoding: EncodingArgs {
            box_size: Some(0),
            ..EncodingArgs::default()
        },
    };
    assert!(matches!(command.run(), Err(AppError::Codec(_))));
}

#[test]
#[serial]
fn test_generate_reports_malformed_config() {
    let scratch = ScratchDir::new();
    let output = scratch.path("never.png");
    let command = GenerateCommand {
        text: "hello".to_string(),
        output: output.clone(),
        encoding: EncodingArgs::default(),
    };

    std::env::set_var("QR_REBUILDER_ENCODING__BORDER", "wide");
    let result = command.run();
    std::env::remove_var("QR_REBUILDER_ENCODING__BORDER");

    assert!(matches!(result, Err(AppError::Config(_))));
    assert!(!output.exists());
}

#[test]
#[serial]
fn test_analyse_writes_json_report() {
    let scratch = ScratchDir::new();
    let photo = scratch.path("photo.png");
    let report_path = scratch.path("reports/content.json");
    save_qr("https://example.com/a?b=1", &EncodeOptions::default(), &photo).unwrap();

    let command = AnalyseCommand {
        text: None,
        image: Some(photo),
        format: "json".to_string(),
        output: Some(report_path.clone()),
    };
    command.run().unwrap();

    let written = std::fs::read_to_string(&report_path).unwrap();
    let value: serde_json::Value = serde_json::from_str(&written).unwrap();
    assert_eq!(value["kind"], "Url");
    assert_eq!(value["data"]["domain"], "example.com");
    assert_eq!(value["data"]["query"], "b=1");
}

#[test]
#[serial]
fn test_analyse_console_report_to_file() {
    let scratch = ScratchDir::new();
    let report_path = scratch.path("report.txt");

    let command = AnalyseCommand {
        text: Some("12025550123".to_string()),
        image: None,
        format: "console".to_string(),
        output: Some(report_path.clone()),
    };
    command.run().unwrap();

    assert_eq!(
        std::fs::read_to_string(&report_path).unwrap(),
        "Type: Phone\nNumber: 12025550123"
    );
}
