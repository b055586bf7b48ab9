use std::fs;

use resale_engine::config::{ConfigError, Settings};
use resale_engine::util::{load_settings, save_settings};

#[test]
fn settings_survive_a_save_and_load() {
    let dir = tempfile::tempdir().expect("temp dir");
    let path = dir.path().join("nested").join("settings.json");

    let mut settings = Settings::default();
    settings.fees.referral_fee_bp = 1200;
    settings.fees.inbound_shipping_cents = 45;
    settings.freshness.high_hours = 12;
    settings.logging.format = "json".to_string();

    save_settings(&path, &settings).expect("save settings");
    let loaded = load_settings(&path).expect("load settings");
    assert_eq!(loaded, settings);
}

#[test]
fn invalid_file_contents_are_rejected() {
    let dir = tempfile::tempdir().expect("temp dir");
    let path = dir.path().join("settings.json");

    fs::write(
        &path,
        r#"{
            "fees": {
                "referral_fee_bp": 20000,
                "fulfillment_fee_cents": 0,
                "inbound_shipping_cents": 0
            }
        }"#,
    )
    .expect("write settings");
    assert!(matches!(
        load_settings(&path),
        Err(ConfigError::InvalidValue { field: "referral_fee_bp", .. })
    ));

    fs::write(&path, "not json").expect("write settings");
    assert!(matches!(load_settings(&path), Err(ConfigError::Json(_))));
}

#[test]
fn missing_file_is_an_io_error() {
    let dir = tempfile::tempdir().expect("temp dir");
    assert!(matches!(
        load_settings(dir.path().join("absent.json")),
        Err(ConfigError::Io(_))
    ));
}

#[test]
fn empty_object_uses_defaults() {
    let dir = tempfile::tempdir().expect("temp dir");
    let path = dir.path().join("settings.json");
    fs::write(&path, "{}").expect("write settings");
    assert_eq!(load_settings(&path).expect("load settings"), Settings::default());
}
