#[cfg(test)]
mod error_tests {
    use crabcapture::errors::CaptureError;
    use std::error::Error;

    #[test]
    fn test_configuration_error() {
        let error = CaptureError::configuration("flash mode", "torch");
        assert_eq!(error.to_string(), "Configuration error: invalid flash mode 'torch'");
        assert!(error.is_configuration());
    }

    #[test]
    fn test_capability_query_error() {
        let error = CaptureError::CapabilityQuery("lens metadata unavailable".to_string());
        assert!(error.to_string().contains("Capability query error"));
        assert!(error.to_string().contains("lens metadata unavailable"));
        assert!(!error.is_configuration());
    }

    #[test]
    fn test_request_build_error() {
        let error = CaptureError::RequestBuild("device closed".to_string());
        assert_eq!(error.to_string(), "Capture request build error: device closed");
    }

    #[test]
    fn test_config_file_error() {
        let error = CaptureError::ConfigFile("bad toml".to_string());
        assert!(error.to_string().starts_with("Config file error"));
    }

    #[test]
    fn test_error_debug_format() {
        let error = CaptureError::configuration("orientation", "sideways");
        let debug_str = format!("{:?}", error);
        assert!(debug_str.contains("Configuration"));
        assert!(debug_str.contains("sideways"));
    }

    #[test]
    fn test_implements_error_trait() {
        let error = CaptureError::CapabilityQuery("x".to_string());
        let _error_trait: &dyn Error = &error;
        assert!(error.source().is_none());
    }
}
