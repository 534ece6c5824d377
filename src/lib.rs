//! CrabCapture: still-capture request resolution
//!
//! Turns what an application wants from a photo (speed or quality, flash,
//! stabilization, orientation) into the concrete parameters a camera capture
//! pipeline understands, gated by what the lens actually supports.
//!
//! # Features
//! - Capture template and JPEG quality selection per quality prioritization
//! - Flash / auto-exposure mode pairing, including red-eye reduction
//! - Optical-over-digital stabilization fallback
//! - Fail-fast parsing of loosely typed intent
//! - Collaborator traits for capability lookup and native request building
//!
//! # Usage
//! ```rust
//! use crabcapture::{resolve, CaptureIntent, DeviceCapabilities};
//! use crabcapture::types::{FlashMode, Orientation, QualityPrioritization};
//!
//! let intent = CaptureIntent::new(
//!     QualityPrioritization::Quality,
//!     FlashMode::On,
//!     Orientation::LandscapeRight,
//! )
//! .with_auto_stabilization(true);
//!
//! let params = resolve(&intent, &DeviceCapabilities::new(true, true));
//! assert_eq!(params.jpeg_quality, 100);
//! assert_eq!(params.jpeg_orientation, 90);
//! ```
pub mod config;
pub mod errors;
pub mod invariant_ppt;
pub mod parameters;
pub mod resolver;
pub mod session;
pub mod types;

// Testing utilities - in-memory collaborators for offline testing
pub mod testing;

// Re-exports for convenience
pub use config::ResolverConfig;
pub use errors::CaptureError;
pub use parameters::{
    AeMode, CaptureParameterSet, CaptureRequestKey, CaptureTemplate, FlashTrigger,
    ParameterValue, StabilizationMode,
};
pub use resolver::{resolve, resolve_raw};
pub use session::{
    apply_parameters, create_photo_capture_request, CapabilityProvider, CaptureRequestBuilder,
    CaptureRequestFactory,
};
pub use types::{CaptureIntent, DeviceCapabilities, RawCaptureIntent};

/// Initialize logging for the capture resolver
pub fn init_logging() {
    if std::env::var("RUST_LOG").is_err() {
        std::env::set_var("RUST_LOG", "crabcapture=info");
    }
    let _ = env_logger::try_init();
}

/// Version information
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
pub const NAME: &str = env!("CARGO_PKG_NAME");
pub const DESCRIPTION: &str = env!("CARGO_PKG_DESCRIPTION");

/// Get crate information
pub fn get_info() -> CrateInfo {
    CrateInfo {
        name: NAME.to_string(),
        version: VERSION.to_string(),
        description: DESCRIPTION.to_string(),
    }
}

/// Crate information structure
#[derive(Debug, Clone, serde::Serialize, serde::Deserialize)]
pub struct CrateInfo {
    pub name: String,
    pub version: String,
    pub description: String,
}

#[cfg(test)]
mod lib_tests {
    use super::*;

    #[test]
    fn test_crate_info() {
        let info = get_info();
        assert_eq!(info.name, "crabcapture");
        assert!(!info.version.is_empty());
        assert!(!info.description.is_empty());
    }

    #[test]
    fn test_init_logging_twice() {
        init_logging();
        init_logging();
    }
}
