//! Schema definitions for lookout
//!
//! This crate contains the data structures shared by the probe library, the
//! CLI and the schema generator. All types here implement JSON Schema
//! generation for external consumption.

pub mod agent;
pub mod harness;
pub mod probe;


pub use agent::{
    AgentOptions, BundleVariant, LogLevel, RestAgentOptions, ReturnRoute, TransportKind,
    DEFAULT_AGENT_LABEL, DEFAULT_ASSETS_PATH,
};
pub use harness::{AgentSection, Endpoint, ProbeDefaults};
pub use probe::{ProbeKind, ProbeReport, ProbeRequest, DEFAULT_TIMEOUT_MESSAGE, DEFAULT_TIMEOUT_MS};
