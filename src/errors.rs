use thiserror::Error;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum CaptureError {
    /// A loosely typed intent field held a value outside its closed set.
    #[error("Configuration error: invalid {field} '{value}'")]
    Configuration { field: &'static str, value: String },
    #[error("Capability query error: {0}")]
    CapabilityQuery(String),
    #[error("Capture request build error: {0}")]
    RequestBuild(String),
    #[error("Config file error: {0}")]
    ConfigFile(String),
}

impl CaptureError {
    pub fn configuration(field: &'static str, value: impl Into<String>) -> Self {
        CaptureError::Configuration {
            field,
            value: value.into(),
        }
    }

    /// True for errors caused by the caller's input rather than a collaborator.
    pub fn is_configuration(&self) -> bool {
        matches!(self, CaptureError::Configuration { .. })
    }
}
