// SPDX-License-Identifier: GPL-3.0-only

//! Integration tests for configuration module

use scan_overlay::{Config, Facing, Symbology};
use std::io::Write;

#[test]
fn test_config_default() {
    let config = Config::default();

    assert_eq!(
        config.facing,
        Facing::Back,
        "Rear camera should be the default"
    );
    assert!(!config.alert_on_scan, "Alerting should start disabled");
    assert!(!config.show_bounding_box);
    assert!(!config.show_payload_text);
}

#[test]
fn test_config_default_allowlist() {
    let config = Config::default();
    assert_eq!(config.symbologies, Symbology::ALL.to_vec());
}

#[test]
fn test_config_json_round_trip() {
    let config = Config {
        facing: Facing::Front,
        alert_on_scan: true,
        ..Config::default()
    };

    let json = serde_json::to_string(&config).expect("serialize");
    let back: Config = serde_json::from_str(&json).expect("deserialize");
    assert_eq!(back, config);
}

#[test]
fn test_config_missing_fields_fall_back() {
    let config: Config =
        serde_json::from_str(r#"{"symbologies":["qr"]}"#).expect("partial config");
    assert_eq!(config.symbologies, vec![Symbology::Qr]);
    assert_eq!(config.facing, Facing::Back);
}

#[test]
fn test_config_load_from_file() {
    let path = std::env::temp_dir().join("scan_overlay_config_test.json");
    let mut file = std::fs::File::create(&path).expect("create temp file");
    file.write_all(br#"{"facing":"front","show_bounding_box":true}"#)
        .expect("write temp file");

    let config = Config::load(&path).expect("load");
    assert_eq!(config.facing, Facing::Front);
    assert!(config.show_bounding_box);
}

#[test]
fn test_config_load_rejects_malformed_file() {
    let path = std::env::temp_dir().join("scan_overlay_config_bad.json");
    std::fs::write(&path, "not json").expect("write temp file");

    assert!(Config::load(&path).is_err());
}
