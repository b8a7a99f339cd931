#[cfg(test)]
mod tests {
    use crate::error::*;
    use crate::probe::ProbeError;
    use std::error::Error;
    use std::io;

    #[test]
    fn test_core_error_display() {
        let err = CoreError::ValidationError("test validation".to_string());
        assert_eq!(err.to_string(), "Validation error: test validation");

        let err = CoreError::BundleError("bundle missing".to_string());
        assert_eq!(err.to_string(), "Bundle error: bundle missing");

        let err = CoreError::Other("generic error".to_string());
        assert_eq!(err.to_string(), "Generic error: generic error");
    }

    #[test]
    fn test_core_error_from_std_error() {
        let io_err = io::Error::new(io::ErrorKind::NotFound, "file not found");
        let core_err: CoreError = io_err.into();

        assert!(matches!(core_err, CoreError::IoError(_)));
        assert_eq!(core_err.code(), "CORE005");
    }

    #[test]
    fn test_core_error_from_serde_error() {
        let serde_err = serde_json::from_str::<serde_json::Value>("invalid json").unwrap_err();
        let core_err: CoreError = serde_err.into();

        assert!(matches!(core_err, CoreError::SerializationError(_)));
    }

    #[test]
    fn test_probe_error_propagates_with_question_mark() {
        fn fails() -> std::result::Result<(), ProbeError> {
            Err(ProbeError::UnsupportedProtocol("tcp://x".to_string()))
        }

        fn wrapper() -> Result<()> {
            fails()?;
            Ok(())
        }

        match wrapper() {
            Err(CoreError::Probe(ProbeError::UnsupportedProtocol(url))) => assert_eq!(url, "tcp://x"),
            other => panic!("Expected CoreError::Probe, got {other:?}"),
        }
    }

    #[test]
    fn test_error_trait_implementation() {
        let err = CoreError::Probe(ProbeError::Connection("refused".to_string()));
        let as_dyn: &dyn Error = &err;
        assert_eq!(as_dyn.to_string(), "refused");
    }
}
