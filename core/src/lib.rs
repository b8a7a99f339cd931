//! Core functionality for lookout
//!
//! This crate contains the reachability probes, agent construction and
//! harness configuration shared by the CLI and by integration tests that
//! drive an agent framework.

pub mod agent;
pub mod config;
pub mod error;
pub mod probe;

#[cfg(test)]
mod error_tests;

pub use agent::{AgentConfig, AgentFactory, AgentFramework, BundleLoader};
pub use config::HarnessFile;
pub use error::{CoreError, Result};
pub use probe::{ProbeError, Reachable};

/// Core utilities and helper functions
pub mod utils {
    use tracing::info;

    /// Initialize tracing for the application
    ///
    /// `RUST_LOG` takes precedence over `level` when set.
    pub fn init_tracing(level: &str) -> crate::Result<()> {
        use tracing_subscriber::{fmt, EnvFilter};

        let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(level));

        fmt()
            .with_env_filter(filter)
            .with_writer(std::io::stderr)
            .try_init()
            .map_err(|e| crate::CoreError::InitializationError(e.to_string()))?;

        info!("Tracing initialized with level: {}", level);
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_init_tracing_only_once() {
        // The first call may race other tests for the global subscriber; the
        // second call in this test must always fail.
        let _ = utils::init_tracing("debug");
        let err = utils::init_tracing("debug").unwrap_err();
        assert_eq!(err.code(), "CORE003");
    }
}
