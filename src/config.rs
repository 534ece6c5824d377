//! Configuration management for CrabCapture
//!
//! Holds the capture defaults applied to intent fields a caller leaves out,
//! loaded from and saved to TOML.

use crate::errors::CaptureError;
use crate::parameters::CaptureParameterSet;
use crate::resolver::resolve;
use crate::types::{
    CaptureIntent, DeviceCapabilities, FlashMode, Orientation, QualityPrioritization,
    RawCaptureIntent,
};
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};

/// Root configuration structure
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ResolverConfig {
    pub defaults: CaptureDefaults,
}

/// Intent values used when the caller does not specify them
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct CaptureDefaults {
    pub quality_prioritization: QualityPrioritization,
    pub flash: FlashMode,
    /// Only takes effect with `flash = "auto"`
    pub red_eye_reduction: bool,
    pub auto_stabilization: bool,
    pub orientation: Orientation,
}

impl Default for CaptureDefaults {
    fn default() -> Self {
        let intent = CaptureIntent::default();
        Self {
            quality_prioritization: intent.quality_prioritization,
            flash: intent.flash,
            red_eye_reduction: intent.red_eye_reduction,
            auto_stabilization: intent.auto_stabilization,
            orientation: intent.orientation,
        }
    }
}

impl ResolverConfig {
    /// Load configuration from TOML file
    pub fn load_from_file<P: AsRef<Path>>(path: P) -> Result<Self, CaptureError> {
        let path = path.as_ref();

        if !path.exists() {
            log::info!("Config file not found at {:?}, using defaults", path);
            return Ok(Self::default());
        }

        let contents = fs::read_to_string(path)
            .map_err(|e| CaptureError::ConfigFile(format!("Failed to read config file: {}", e)))?;

        let config: ResolverConfig = toml::from_str(&contents)
            .map_err(|e| CaptureError::ConfigFile(format!("Failed to parse config file: {}", e)))?;

        log::info!("Loaded configuration from {:?}", path);
        Ok(config)
    }

    /// Save configuration to TOML file
    pub fn save_to_file<P: AsRef<Path>>(&self, path: P) -> Result<(), CaptureError> {
        let path = path.as_ref();

        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent).map_err(|e| {
                CaptureError::ConfigFile(format!("Failed to create config directory: {}", e))
            })?;
        }

        let toml_string = toml::to_string_pretty(self)
            .map_err(|e| CaptureError::ConfigFile(format!("Failed to serialize config: {}", e)))?;

        fs::write(path, toml_string)
            .map_err(|e| CaptureError::ConfigFile(format!("Failed to write config file: {}", e)))?;

        log::info!("Saved configuration to {:?}", path);
        Ok(())
    }

    pub fn default_path() -> PathBuf {
        PathBuf::from("capture-request.toml")
    }

    /// Load from default location, falling back to defaults on any error
    pub fn load_or_default() -> Self {
        Self::load_from_file(Self::default_path()).unwrap_or_else(|e| {
            log::warn!("Failed to load config, using defaults: {}", e);
            Self::default()
        })
    }

    /// Validate configuration values
    pub fn validate(&self) -> Result<(), String> {
        if self.defaults.red_eye_reduction && self.defaults.flash != FlashMode::Auto {
            return Err("red_eye_reduction requires flash = \"auto\"".to_string());
        }
        Ok(())
    }

    pub fn default_intent(&self) -> CaptureIntent {
        let d = &self.defaults;
        CaptureIntent::new(d.quality_prioritization, d.flash, d.orientation)
            .with_red_eye_reduction(d.red_eye_reduction)
            .with_auto_stabilization(d.auto_stabilization)
    }

    /// Resolve raw input, filling missing fields from these defaults
    pub fn resolve_raw(
        &self,
        raw: &RawCaptureIntent,
        caps: &DeviceCapabilities,
    ) -> Result<CaptureParameterSet, CaptureError> {
        let intent = raw.parse_with_defaults(&self.default_intent())?;
        Ok(resolve(&intent, caps))
    }
}
