//! Seams to the capture session
//!
//! The resolver never touches hardware. These traits describe the two
//! collaborators it sits between: something that reports what a lens can do,
//! and the native request builder the capture session hands out.

use crate::errors::CaptureError;
use crate::parameters::{CaptureParameterSet, CaptureRequestKey, CaptureTemplate, ParameterValue};
use crate::resolver::resolve;
use crate::types::{CaptureIntent, DeviceCapabilities};

/// Reports stabilization support for a device/lens.
///
/// Unsupported features come back as `false` flags, not errors.
pub trait CapabilityProvider {
    fn capabilities(&self, device_id: &str) -> Result<DeviceCapabilities, CaptureError>;
}

/// Mutable, key-addressed request builder owned by the capture session
pub trait CaptureRequestBuilder {
    type Target;
    type Request;

    fn set(&mut self, key: CaptureRequestKey, value: ParameterValue);
    fn add_target(&mut self, target: Self::Target);
    fn build(self) -> Result<Self::Request, CaptureError>;
}

/// Hands out a fresh builder for a capture template
pub trait CaptureRequestFactory {
    type Builder: CaptureRequestBuilder;

    fn create_request(&self, template: CaptureTemplate) -> Result<Self::Builder, CaptureError>;
}

/// Write a resolved parameter set into `builder`, bind the single target, build.
pub fn apply_parameters<B: CaptureRequestBuilder>(
    mut builder: B,
    params: &CaptureParameterSet,
    target: B::Target,
) -> Result<B::Request, CaptureError> {
    for (key, value) in params.entries() {
        builder.set(key, value);
    }
    builder.add_target(target);
    builder.build()
}

/// Build a complete still-capture request for `device_id`.
///
/// Capability lookup happens before any builder exists, so a failed lookup
/// leaves nothing partially applied.
pub fn create_photo_capture_request<F, P>(
    factory: &F,
    provider: &P,
    device_id: &str,
    target: <F::Builder as CaptureRequestBuilder>::Target,
    intent: &CaptureIntent,
) -> Result<<F::Builder as CaptureRequestBuilder>::Request, CaptureError>
where
    F: CaptureRequestFactory,
    P: CapabilityProvider + ?Sized,
{
    let caps = provider.capabilities(device_id).map_err(|e| {
        log::warn!("Capability query for device {} failed: {}", device_id, e);
        e
    })?;

    let params = resolve(intent, &caps);
    let builder = factory.create_request(params.template)?;
    let request = apply_parameters(builder, &params, target)?;

    log::info!(
        "Built {:?} request for device {} (jpeg_quality={}, stabilization={:?})",
        params.template,
        device_id,
        params.jpeg_quality,
        params.stabilization
    );
    Ok(request)
}
