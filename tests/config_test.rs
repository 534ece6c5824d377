//! Tests for loading and saving resolver defaults

use crabcapture::types::{FlashMode, Orientation, QualityPrioritization};
use crabcapture::{
    AeMode, CaptureError, DeviceCapabilities, RawCaptureIntent, ResolverConfig, StabilizationMode,
};
use tempfile::tempdir;

#[test]
fn test_config_save_and_load() {
    let dir = tempdir().unwrap();
    let path = dir.path().join("nested").join("capture-request.toml");

    let mut config = ResolverConfig::default();
    config.defaults.quality_prioritization = QualityPrioritization::Quality;
    config.defaults.flash = FlashMode::Auto;
    config.defaults.red_eye_reduction = true;
    config.defaults.orientation = Orientation::LandscapeRight;

    config.save_to_file(&path).unwrap();
    let loaded = ResolverConfig::load_from_file(&path).unwrap();
    assert_eq!(loaded, config);
}

#[test]
fn test_unparseable_config_is_error() {
    let dir = tempdir().unwrap();
    let path = dir.path().join("broken.toml");
    std::fs::write(&path, "[defaults]\nflash = \"strobe\"\n").unwrap();

    let err = ResolverConfig::load_from_file(&path).unwrap_err();
    assert!(matches!(err, CaptureError::ConfigFile(_)));
}

#[test]
fn test_raw_fields_override_defaults() {
    let mut config = ResolverConfig::default();
    config.defaults.flash = FlashMode::On;
    config.defaults.auto_stabilization = true;

    let raw = RawCaptureIntent {
        flash: Some("off".to_string()),
        ..Default::default()
    };
    let params = config
        .resolve_raw(&raw, &DeviceCapabilities::new(false, true))
        .unwrap();

    assert_eq!(params.ae_mode, AeMode::On);
    assert_eq!(params.stabilization, StabilizationMode::Optical);
    assert_eq!(params.jpeg_quality, 92);
}

#[test]
fn test_invalid_raw_field_with_config() {
    let config = ResolverConfig::default();
    let raw = RawCaptureIntent {
        quality_prioritization: Some("max".to_string()),
        ..Default::default()
    };
    assert!(config
        .resolve_raw(&raw, &DeviceCapabilities::none())
        .unwrap_err()
        .is_configuration());
}

#[test]
fn test_partial_config_fills_defaults() {
    let dir = tempdir().unwrap();
    let path = dir.path().join("partial.toml");
    std::fs::write(&path, "[defaults]\nauto_stabilization = true\n").unwrap();

    let config = ResolverConfig::load_from_file(&path).unwrap();
    assert!(config.defaults.auto_stabilization);
    assert_eq!(config.defaults.flash, FlashMode::Off);
    assert_eq!(config.defaults.quality_prioritization, QualityPrioritization::Balanced);
}
