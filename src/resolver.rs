//! Capture-request parameter resolution
//!
//! Turns a [`CaptureIntent`] and the device's [`DeviceCapabilities`] into a
//! complete [`CaptureParameterSet`]. Pure: no I/O, no shared state.

use crate::errors::CaptureError;
use crate::parameters::{AeMode, CaptureParameterSet, CaptureTemplate, FlashTrigger, StabilizationMode};
use crate::types::{CaptureIntent, DeviceCapabilities, FlashMode, QualityPrioritization, RawCaptureIntent};

/// Resolve an intent against device capabilities. Total over every input.
pub fn resolve(intent: &CaptureIntent, caps: &DeviceCapabilities) -> CaptureParameterSet {
    let (flash_trigger, ae_mode) = flash_and_ae_mode(intent.flash, intent.red_eye_reduction);

    let params = CaptureParameterSet {
        template: template_for(intent.quality_prioritization),
        jpeg_quality: jpeg_quality_for(intent.quality_prioritization),
        jpeg_orientation: intent.orientation.to_degrees(),
        flash_trigger,
        ae_mode,
        stabilization: stabilization_for(intent.auto_stabilization, caps),
    };

    crate::assert_invariant!(
        params.jpeg_quality <= 100,
        "JPEG quality within 0..=100",
        "resolver"
    );
    crate::assert_invariant!(
        params.flash_trigger.is_none() == (intent.flash == FlashMode::Auto),
        "Flash trigger unset only when AE mode drives the flash",
        "resolver"
    );

    log::debug!(
        "Resolved capture: template={:?} jpeg_quality={} orientation={} ae_mode={:?} stabilization={:?}",
        params.template,
        params.jpeg_quality,
        params.jpeg_orientation,
        params.ae_mode,
        params.stabilization
    );
    params
}

/// Resolve loosely typed input, failing before anything is produced.
pub fn resolve_raw(
    raw: &RawCaptureIntent,
    caps: &DeviceCapabilities,
) -> Result<CaptureParameterSet, CaptureError> {
    let intent = CaptureIntent::try_from(raw)?;
    Ok(resolve(&intent, caps))
}

pub fn template_for(quality: QualityPrioritization) -> CaptureTemplate {
    match quality {
        QualityPrioritization::Speed => CaptureTemplate::SnapshotDuringVideo,
        QualityPrioritization::Balanced | QualityPrioritization::Quality => {
            CaptureTemplate::StillCapture
        }
    }
}

// Closed table: a new prioritization level must be added here explicitly.
pub fn jpeg_quality_for(quality: QualityPrioritization) -> u8 {
    match quality {
        QualityPrioritization::Speed => 85,
        QualityPrioritization::Balanced => 92,
        QualityPrioritization::Quality => 100,
    }
}

/// Flash trigger and AE mode are always chosen together.
///
/// In auto mode the trigger stays unset so it cannot fight the AE
/// algorithm's own flash decisions.
pub fn flash_and_ae_mode(flash: FlashMode, red_eye_reduction: bool) -> (Option<FlashTrigger>, AeMode) {
    match flash {
        FlashMode::Off => (Some(FlashTrigger::Off), AeMode::On),
        FlashMode::On => (Some(FlashTrigger::Single), AeMode::OnAlwaysFlash),
        FlashMode::Auto if red_eye_reduction => (None, AeMode::OnAutoFlashRedEye),
        FlashMode::Auto => (None, AeMode::OnAutoFlash),
    }
}

/// Optical beats digital; no support at all is a silent no-op.
pub fn stabilization_for(requested: bool, caps: &DeviceCapabilities) -> StabilizationMode {
    if !requested {
        return StabilizationMode::None;
    }

    if caps.optical_stabilization {
        StabilizationMode::Optical
    } else if caps.digital_stabilization {
        StabilizationMode::Digital
    } else {
        log::debug!("Auto-stabilization requested but device supports none, skipping");
        StabilizationMode::None
    }
}
