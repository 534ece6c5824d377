//! Testing utilities for CrabCapture
//!
//! In-memory stand-ins for the capability provider and the native request
//! builder, so capture requests can be built and inspected without hardware.

pub mod collaborators;

pub use collaborators::{
    DeviceProfile, RecordedRequest, RecordingRequestBuilder, RecordingRequestFactory,
    StaticCapabilityProvider,
};
