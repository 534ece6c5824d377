//! Intent-side types for still capture
//!
//! Everything a caller declares about a photo before the device is consulted,
//! plus the capability snapshot the device reports back.

use crate::errors::CaptureError;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Trade-off between capture latency and still-image fidelity
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum QualityPrioritization {
    /// Lowest latency, reuses the running preview pipeline
    Speed,
    Balanced,
    /// Full still pipeline, lossless-leaning JPEG
    Quality,
}

impl QualityPrioritization {
    pub const ALL: [QualityPrioritization; 3] = [
        QualityPrioritization::Speed,
        QualityPrioritization::Balanced,
        QualityPrioritization::Quality,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            QualityPrioritization::Speed => "speed",
            QualityPrioritization::Balanced => "balanced",
            QualityPrioritization::Quality => "quality",
        }
    }
}

impl FromStr for QualityPrioritization {
    type Err = CaptureError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "speed" => Ok(Self::Speed),
            "balanced" => Ok(Self::Balanced),
            "quality" => Ok(Self::Quality),
            other => Err(CaptureError::configuration("quality prioritization", other)),
        }
    }
}

/// Desired flash behavior for the capture
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum FlashMode {
    Off,
    On,
    /// Let the auto-exposure algorithm decide
    Auto,
}

impl FlashMode {
    pub const ALL: [FlashMode; 3] = [FlashMode::Off, FlashMode::On, FlashMode::Auto];

    pub fn as_str(&self) -> &'static str {
        match self {
            FlashMode::Off => "off",
            FlashMode::On => "on",
            FlashMode::Auto => "auto",
        }
    }
}

impl FromStr for FlashMode {
    type Err = CaptureError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "off" => Ok(Self::Off),
            "on" => Ok(Self::On),
            "auto" => Ok(Self::Auto),
            other => Err(CaptureError::configuration("flash mode", other)),
        }
    }
}

/// Logical output rotation of the captured image
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum Orientation {
    Portrait,
    LandscapeRight,
    PortraitUpsideDown,
    LandscapeLeft,
}

impl Orientation {
    pub const ALL: [Orientation; 4] = [
        Orientation::Portrait,
        Orientation::LandscapeRight,
        Orientation::PortraitUpsideDown,
        Orientation::LandscapeLeft,
    ];

    pub fn to_degrees(self) -> i32 {
        match self {
            Orientation::Portrait => 0,
            Orientation::LandscapeRight => 90,
            Orientation::PortraitUpsideDown => 180,
            Orientation::LandscapeLeft => 270,
        }
    }

    /// Snap an arbitrary rotation to the nearest quadrant.
    ///
    /// Negative and >= 360 values are normalized first; a value exactly
    /// halfway between two quadrants goes to the later one (45 -> 90).
    pub fn from_degrees(degrees: i32) -> Self {
        let normalized = degrees.rem_euclid(360);
        match ((normalized + 45) / 90) % 4 {
            0 => Orientation::Portrait,
            1 => Orientation::LandscapeRight,
            2 => Orientation::PortraitUpsideDown,
            _ => Orientation::LandscapeLeft,
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            Orientation::Portrait => "portrait",
            Orientation::LandscapeRight => "landscape-right",
            Orientation::PortraitUpsideDown => "portrait-upside-down",
            Orientation::LandscapeLeft => "landscape-left",
        }
    }
}

impl FromStr for Orientation {
    type Err = CaptureError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "portrait" => Ok(Self::Portrait),
            "landscape-right" => Ok(Self::LandscapeRight),
            "portrait-upside-down" => Ok(Self::PortraitUpsideDown),
            "landscape-left" => Ok(Self::LandscapeLeft),
            other => Err(CaptureError::configuration("orientation", other)),
        }
    }
}

impl fmt::Display for Orientation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} ({}°)", self.as_str(), self.to_degrees())
    }
}

/// What the caller wants from a single still capture
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct CaptureIntent {
    pub quality_prioritization: QualityPrioritization,
    pub flash: FlashMode,
    /// Only consulted when `flash` is `Auto`
    pub red_eye_reduction: bool,
    pub auto_stabilization: bool,
    pub orientation: Orientation,
}

impl CaptureIntent {
    pub fn new(
        quality_prioritization: QualityPrioritization,
        flash: FlashMode,
        orientation: Orientation,
    ) -> Self {
        Self {
            quality_prioritization,
            flash,
            red_eye_reduction: false,
            auto_stabilization: false,
            orientation,
        }
    }

    pub fn with_red_eye_reduction(mut self, enabled: bool) -> Self {
        self.red_eye_reduction = enabled;
        self
    }

    pub fn with_auto_stabilization(mut self, enabled: bool) -> Self {
        self.auto_stabilization = enabled;
        self
    }
}

impl Default for CaptureIntent {
    fn default() -> Self {
        Self::new(
            QualityPrioritization::Balanced,
            FlashMode::Off,
            Orientation::Portrait,
        )
    }
}

/// Intent as it arrives from an application boundary, before validation
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RawCaptureIntent {
    pub quality_prioritization: Option<String>,
    pub flash: Option<String>,
    pub enable_red_eye_reduction: Option<bool>,
    pub enable_auto_stabilization: Option<bool>,
    pub orientation: Option<String>,
}

impl RawCaptureIntent {
    /// Decode the JSON object an application sends over IPC
    pub fn from_json(json: &str) -> Result<Self, CaptureError> {
        serde_json::from_str(json).map_err(|e| CaptureError::configuration("intent", e.to_string()))
    }

    /// Parse every present field, taking the rest from `defaults`.
    ///
    /// Fails on the first field outside its closed set.
    pub fn parse_with_defaults(&self, defaults: &CaptureIntent) -> Result<CaptureIntent, CaptureError> {
        let quality_prioritization = match &self.quality_prioritization {
            Some(value) => value.parse()?,
            None => defaults.quality_prioritization,
        };
        let flash = match &self.flash {
            Some(value) => value.parse()?,
            None => defaults.flash,
        };
        let orientation = match &self.orientation {
            Some(value) => value.parse()?,
            None => defaults.orientation,
        };

        Ok(CaptureIntent {
            quality_prioritization,
            flash,
            red_eye_reduction: self
                .enable_red_eye_reduction
                .unwrap_or(defaults.red_eye_reduction),
            auto_stabilization: self
                .enable_auto_stabilization
                .unwrap_or(defaults.auto_stabilization),
            orientation,
        })
    }
}

impl TryFrom<&RawCaptureIntent> for CaptureIntent {
    type Error = CaptureError;

    fn try_from(raw: &RawCaptureIntent) -> Result<Self, Self::Error> {
        raw.parse_with_defaults(&CaptureIntent::default())
    }
}

/// Native value meaning "mode on" in the hardware's stabilization mode lists
pub const NATIVE_STABILIZATION_ON: i32 = 1;

/// Stabilization support reported for one lens
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct DeviceCapabilities {
    pub digital_stabilization: bool,
    pub optical_stabilization: bool,
}

impl DeviceCapabilities {
    pub fn new(digital_stabilization: bool, optical_stabilization: bool) -> Self {
        Self {
            digital_stabilization,
            optical_stabilization,
        }
    }

    pub fn none() -> Self {
        Self::default()
    }

    /// Build from the raw mode lists read out of hardware metadata.
    ///
    /// A missing list is the same as a list without the `ON` mode.
    pub fn from_available_modes(video: Option<&[i32]>, optical: Option<&[i32]>) -> Self {
        let supports = |modes: Option<&[i32]>| {
            modes.is_some_and(|m| m.contains(&NATIVE_STABILIZATION_ON))
        };
        Self {
            digital_stabilization: supports(video),
            optical_stabilization: supports(optical),
        }
    }

    pub fn has_any_stabilization(&self) -> bool {
        self.digital_stabilization || self.optical_stabilization
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_orientation_degrees() {
        let degrees: Vec<i32> = Orientation::ALL.iter().map(|o| o.to_degrees()).collect();
        assert_eq!(degrees, vec![0, 90, 180, 270]);
    }

    #[test]
    fn test_orientation_from_degrees_snaps() {
        assert_eq!(Orientation::from_degrees(44), Orientation::Portrait);
        assert_eq!(Orientation::from_degrees(45), Orientation::LandscapeRight);
        assert_eq!(Orientation::from_degrees(200), Orientation::PortraitUpsideDown);
        assert_eq!(Orientation::from_degrees(-90), Orientation::LandscapeLeft);
        assert_eq!(Orientation::from_degrees(350), Orientation::Portrait);
        assert_eq!(Orientation::from_degrees(450), Orientation::LandscapeRight);
    }

    #[test]
    fn test_parse_rejects_unknown() {
        let err = "turbo".parse::<QualityPrioritization>().unwrap_err();
        assert_eq!(err, CaptureError::configuration("quality prioritization", "turbo"));
        assert!("torch".parse::<FlashMode>().is_err());
        assert!("sideways".parse::<Orientation>().is_err());
    }

    #[test]
    fn test_capabilities_from_modes() {
        let caps = DeviceCapabilities::from_available_modes(Some(&[0, 1]), None);
        assert!(caps.digital_stabilization);
        assert!(!caps.optical_stabilization);

        let caps = DeviceCapabilities::from_available_modes(Some(&[0]), Some(&[]));
        assert_eq!(caps, DeviceCapabilities::none());
    }

    #[test]
    fn test_raw_intent_defaults() {
        let raw = RawCaptureIntent {
            flash: Some("auto".to_string()),
            ..Default::default()
        };
        let intent = CaptureIntent::try_from(&raw).unwrap();
        assert_eq!(intent.flash, FlashMode::Auto);
        assert_eq!(intent.quality_prioritization, QualityPrioritization::Balanced);
        assert!(!intent.auto_stabilization);
    }

    #[test]
    fn test_raw_intent_from_json() {
        let raw = RawCaptureIntent::from_json(
            r#"{"qualityPrioritization":"speed","enableAutoStabilization":true}"#,
        )
        .unwrap();
        assert_eq!(raw.quality_prioritization.as_deref(), Some("speed"));
        assert_eq!(raw.enable_auto_stabilization, Some(true));

        let err = RawCaptureIntent::from_json("{not json").unwrap_err();
        assert!(err.is_configuration());
    }
}
