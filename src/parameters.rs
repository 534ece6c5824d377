//! Resolved capture parameters and their native key/value view

use serde::{Deserialize, Serialize};
use std::fmt;

/// Hardware preset the request is created from
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum CaptureTemplate {
    /// Still taken while the preview/video pipeline keeps running
    SnapshotDuringVideo,
    StillCapture,
}

impl CaptureTemplate {
    pub fn native_value(self) -> i32 {
        match self {
            CaptureTemplate::StillCapture => 2,
            CaptureTemplate::SnapshotDuringVideo => 4,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum FlashTrigger {
    Off,
    /// Fire once per capture
    Single,
}

impl FlashTrigger {
    pub fn native_value(self) -> i32 {
        match self {
            FlashTrigger::Off => 0,
            FlashTrigger::Single => 1,
        }
    }
}

/// Auto-exposure algorithm mode; on this hardware it also owns the flash in auto mode
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum AeMode {
    On,
    OnAutoFlash,
    OnAlwaysFlash,
    OnAutoFlashRedEye,
}

impl AeMode {
    pub fn native_value(self) -> i32 {
        match self {
            AeMode::On => 1,
            AeMode::OnAutoFlash => 2,
            AeMode::OnAlwaysFlash => 3,
            AeMode::OnAutoFlashRedEye => 4,
        }
    }

    pub fn fires_flash(self) -> bool {
        !matches!(self, AeMode::On)
    }
}

/// Which stabilization path the request enables, if any
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum StabilizationMode {
    #[default]
    None,
    Digital,
    Optical,
}

/// Keys a capture-request builder understands
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum CaptureRequestKey {
    JpegQuality,
    JpegOrientation,
    FlashMode,
    ControlAeMode,
    ControlVideoStabilizationMode,
    LensOpticalStabilizationMode,
}

impl CaptureRequestKey {
    /// Name of the key in the hardware metadata namespace
    pub fn native_name(&self) -> &'static str {
        match self {
            CaptureRequestKey::JpegQuality => "android.jpeg.quality",
            CaptureRequestKey::JpegOrientation => "android.jpeg.orientation",
            CaptureRequestKey::FlashMode => "android.flash.mode",
            CaptureRequestKey::ControlAeMode => "android.control.aeMode",
            CaptureRequestKey::ControlVideoStabilizationMode => {
                "android.control.videoStabilizationMode"
            }
            CaptureRequestKey::LensOpticalStabilizationMode => {
                "android.lens.opticalStabilizationMode"
            }
        }
    }
}

impl fmt::Display for CaptureRequestKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.native_name())
    }
}

/// A value as written into the native request
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum ParameterValue {
    /// JPEG quality is a single byte on the wire
    Byte(u8),
    Int(i32),
}

impl ParameterValue {
    pub fn as_i32(&self) -> i32 {
        match *self {
            ParameterValue::Byte(b) => i32::from(b),
            ParameterValue::Int(i) => i,
        }
    }
}

const MODE_OFF: i32 = 0;
const MODE_ON: i32 = 1;

/// Fully resolved parameters for one still capture
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct CaptureParameterSet {
    pub template: CaptureTemplate,
    /// 0-100
    pub jpeg_quality: u8,
    pub jpeg_orientation: i32,
    /// Unset when the AE mode drives the flash
    pub flash_trigger: Option<FlashTrigger>,
    pub ae_mode: AeMode,
    pub stabilization: StabilizationMode,
}

impl CaptureParameterSet {
    /// The keys to write into a native request builder, in write order.
    ///
    /// Optical stabilization also writes video stabilization OFF so the two
    /// compensation loops never run together.
    pub fn entries(&self) -> Vec<(CaptureRequestKey, ParameterValue)> {
        let mut entries = vec![
            (
                CaptureRequestKey::JpegQuality,
                ParameterValue::Byte(self.jpeg_quality),
            ),
            (
                CaptureRequestKey::JpegOrientation,
                ParameterValue::Int(self.jpeg_orientation),
            ),
        ];

        if let Some(trigger) = self.flash_trigger {
            entries.push((
                CaptureRequestKey::FlashMode,
                ParameterValue::Int(trigger.native_value()),
            ));
        }
        entries.push((
            CaptureRequestKey::ControlAeMode,
            ParameterValue::Int(self.ae_mode.native_value()),
        ));

        match self.stabilization {
            StabilizationMode::None => {}
            StabilizationMode::Digital => entries.push((
                CaptureRequestKey::ControlVideoStabilizationMode,
                ParameterValue::Int(MODE_ON),
            )),
            StabilizationMode::Optical => {
                entries.push((
                    CaptureRequestKey::ControlVideoStabilizationMode,
                    ParameterValue::Int(MODE_OFF),
                ));
                entries.push((
                    CaptureRequestKey::LensOpticalStabilizationMode,
                    ParameterValue::Int(MODE_ON),
                ));
            }
        }

        entries
    }

    pub fn get(&self, key: CaptureRequestKey) -> Option<ParameterValue> {
        self.entries()
            .into_iter()
            .find(|(k, _)| *k == key)
            .map(|(_, v)| v)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn params(stabilization: StabilizationMode) -> CaptureParameterSet {
        CaptureParameterSet {
            template: CaptureTemplate::StillCapture,
            jpeg_quality: 92,
            jpeg_orientation: 180,
            flash_trigger: None,
            ae_mode: AeMode::OnAutoFlash,
            stabilization,
        }
    }

    #[test]
    fn test_entries_without_stabilization() {
        let keys: Vec<_> = params(StabilizationMode::None)
            .entries()
            .into_iter()
            .map(|(k, _)| k)
            .collect();
        assert_eq!(
            keys,
            vec![
                CaptureRequestKey::JpegQuality,
                CaptureRequestKey::JpegOrientation,
                CaptureRequestKey::ControlAeMode,
            ]
        );
    }

    #[test]
    fn test_optical_disables_video_stabilization() {
        let p = params(StabilizationMode::Optical);
        assert_eq!(
            p.get(CaptureRequestKey::ControlVideoStabilizationMode),
            Some(ParameterValue::Int(0))
        );
        assert_eq!(
            p.get(CaptureRequestKey::LensOpticalStabilizationMode),
            Some(ParameterValue::Int(1))
        );
    }

    #[test]
    fn test_digital_leaves_optical_unset() {
        let p = params(StabilizationMode::Digital);
        assert_eq!(
            p.get(CaptureRequestKey::ControlVideoStabilizationMode),
            Some(ParameterValue::Int(1))
        );
        assert_eq!(p.get(CaptureRequestKey::LensOpticalStabilizationMode), None);
    }

    #[test]
    fn test_native_values() {
        assert_eq!(CaptureTemplate::StillCapture.native_value(), 2);
        assert_eq!(CaptureTemplate::SnapshotDuringVideo.native_value(), 4);
        assert_eq!(AeMode::OnAutoFlashRedEye.native_value(), 4);
        assert_eq!(ParameterValue::Byte(100).as_i32(), 100);
    }
}
