//! Agent construction for integration tests
//!
//! Agents come from a prebuilt framework bundle in one of two flavours: an
//! in-process agent, or an agent driven through a REST controller. This
//! module assembles the configuration map each flavour expects and hands it
//! to the framework, loading the bundle the first time it is needed.
//!
//! The framework itself is opaque here. Callers plug it in through
//! [`BundleLoader`] and [`AgentFramework`].

pub mod config;
pub mod factory;

pub use config::AgentConfig;
pub use factory::{AgentFactory, AgentFramework, AgentOf, BundleLoader};
