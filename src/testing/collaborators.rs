//! Offline capture-session collaborators
//!
//! Device profiles mirror what real lenses report: budget sensors with no
//! stabilization metadata at all, phones with only video stabilization, and
//! flagship modules with optical stabilization.

use crate::errors::CaptureError;
use crate::parameters::{CaptureRequestKey, CaptureTemplate, ParameterValue};
use crate::session::{CapabilityProvider, CaptureRequestBuilder, CaptureRequestFactory};
use crate::types::DeviceCapabilities;
use std::cell::Cell;
use std::collections::HashMap;

/// Raw stabilization metadata for one lens
#[derive(Debug, Clone, Copy)]
pub struct DeviceProfile {
    pub device_id: &'static str,
    /// `None` when the lens omits the key entirely
    pub video_stabilization_modes: Option<&'static [i32]>,
    pub optical_stabilization_modes: Option<&'static [i32]>,
}

impl DeviceProfile {
    /// Older sensor: neither metadata key present
    pub const BUDGET: DeviceProfile = DeviceProfile {
        device_id: "budget-rear",
        video_stabilization_modes: None,
        optical_stabilization_modes: None,
    };

    pub const DIGITAL_ONLY: DeviceProfile = DeviceProfile {
        device_id: "front",
        video_stabilization_modes: Some(&[0, 1]),
        optical_stabilization_modes: Some(&[0]),
    };

    pub const FLAGSHIP: DeviceProfile = DeviceProfile {
        device_id: "flagship-rear",
        video_stabilization_modes: Some(&[0, 1]),
        optical_stabilization_modes: Some(&[0, 1]),
    };

    pub fn capabilities(&self) -> DeviceCapabilities {
        DeviceCapabilities::from_available_modes(
            self.video_stabilization_modes,
            self.optical_stabilization_modes,
        )
    }
}

/// Fixed capability table keyed by device id
#[derive(Debug, Clone, Default)]
pub struct StaticCapabilityProvider {
    devices: HashMap<String, DeviceCapabilities>,
}

impl StaticCapabilityProvider {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_device(mut self, device_id: impl Into<String>, caps: DeviceCapabilities) -> Self {
        self.devices.insert(device_id.into(), caps);
        self
    }

    pub fn with_profile(self, profile: DeviceProfile) -> Self {
        self.with_device(profile.device_id, profile.capabilities())
    }

    /// Provider knowing the budget, digital-only and flagship profiles
    pub fn with_known_profiles() -> Self {
        Self::new()
            .with_profile(DeviceProfile::BUDGET)
            .with_profile(DeviceProfile::DIGITAL_ONLY)
            .with_profile(DeviceProfile::FLAGSHIP)
    }
}

impl CapabilityProvider for StaticCapabilityProvider {
    fn capabilities(&self, device_id: &str) -> Result<DeviceCapabilities, CaptureError> {
        self.devices
            .get(device_id)
            .copied()
            .ok_or_else(|| CaptureError::CapabilityQuery(format!("unknown device: {}", device_id)))
    }
}

/// Finished request as seen by the capture session
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RecordedRequest {
    pub template: CaptureTemplate,
    /// Every `set` call, in order
    pub writes: Vec<(CaptureRequestKey, ParameterValue)>,
    pub target: String,
}

impl RecordedRequest {
    /// Last value written for `key`
    pub fn get(&self, key: CaptureRequestKey) -> Option<ParameterValue> {
        self.writes
            .iter()
            .rev()
            .find(|(k, _)| *k == key)
            .map(|(_, v)| *v)
    }

    pub fn has(&self, key: CaptureRequestKey) -> bool {
        self.get(key).is_some()
    }
}

/// Builder that records writes instead of encoding them
#[derive(Debug)]
pub struct RecordingRequestBuilder {
    template: CaptureTemplate,
    writes: Vec<(CaptureRequestKey, ParameterValue)>,
    targets: Vec<String>,
}

impl RecordingRequestBuilder {
    pub fn new(template: CaptureTemplate) -> Self {
        Self {
            template,
            writes: Vec::new(),
            targets: Vec::new(),
        }
    }
}

impl CaptureRequestBuilder for RecordingRequestBuilder {
    type Target = String;
    type Request = RecordedRequest;

    fn set(&mut self, key: CaptureRequestKey, value: ParameterValue) {
        self.writes.push((key, value));
    }

    fn add_target(&mut self, target: String) {
        self.targets.push(target);
    }

    fn build(mut self) -> Result<RecordedRequest, CaptureError> {
        if self.targets.len() != 1 {
            return Err(CaptureError::RequestBuild(format!(
                "expected exactly one target, got {}",
                self.targets.len()
            )));
        }
        Ok(RecordedRequest {
            template: self.template,
            writes: self.writes,
            target: self.targets.remove(0),
        })
    }
}

/// Factory that counts the builders it hands out
#[derive(Debug, Default)]
pub struct RecordingRequestFactory {
    created: Cell<usize>,
    fail: bool,
}

impl RecordingRequestFactory {
    pub fn new() -> Self {
        Self::default()
    }

    /// Factory whose every `create_request` fails, like a closed device
    pub fn failing() -> Self {
        Self {
            created: Cell::new(0),
            fail: true,
        }
    }

    pub fn created(&self) -> usize {
        self.created.get()
    }
}

impl CaptureRequestFactory for RecordingRequestFactory {
    type Builder = RecordingRequestBuilder;

    fn create_request(&self, template: CaptureTemplate) -> Result<RecordingRequestBuilder, CaptureError> {
        if self.fail {
            return Err(CaptureError::RequestBuild("camera device is closed".to_string()));
        }
        self.created.set(self.created.get() + 1);
        Ok(RecordingRequestBuilder::new(template))
    }
}
