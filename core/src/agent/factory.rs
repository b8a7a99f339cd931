//! Lazily loaded agent framework and agent construction

use async_trait::async_trait;
use schema::{AgentOptions, BundleVariant, RestAgentOptions};
use tokio::sync::OnceCell;
use tracing::{debug, info};

use super::AgentConfig;
use crate::Result;

/// A loaded agent framework: an opaque constructor for agents
pub trait AgentFramework: Send + Sync {
    /// Handle to a constructed agent
    type Agent;

    /// Construct an agent from a validated configuration
    fn construct(&self, config: &AgentConfig) -> Result<Self::Agent>;
}

/// Loads the prebuilt framework bundle for a variant
#[async_trait]
pub trait BundleLoader: Send + Sync {
    type Framework: AgentFramework;

    async fn load(&self, variant: BundleVariant) -> Result<Self::Framework>;
}

/// Agent handle produced by a loader's framework
pub type AgentOf<L> = <<L as BundleLoader>::Framework as AgentFramework>::Agent;

/// Builds agents, loading each framework bundle on first use
///
/// Each variant's bundle is loaded at most once; concurrent first callers
/// wait on the same load. A failed load is not remembered, so the next call
/// tries again.
pub struct AgentFactory<L: BundleLoader> {
    loader: L,
    web: OnceCell<L::Framework>,
    rest: OnceCell<L::Framework>,
}

impl<L: BundleLoader> AgentFactory<L> {
    pub fn new(loader: L) -> Self {
        Self {
            loader,
            web: OnceCell::new(),
            rest: OnceCell::new(),
        }
    }

    /// Whether the bundle for `variant` has been loaded
    pub fn is_loaded(&self, variant: BundleVariant) -> bool {
        self.cell(variant).initialized()
    }

    /// Construct an in-process agent with the given storage namespace, label and resolvers
    pub async fn new_agent(
        &self,
        db_namespace: &str,
        label: &str,
        http_resolver_urls: &[String],
    ) -> Result<AgentOf<L>> {
        self.new_agent_with(AgentOptions::new(db_namespace, label, http_resolver_urls.to_vec()))
            .await
    }

    /// Construct an in-process agent from fully specified options
    pub async fn new_agent_with(&self, options: AgentOptions) -> Result<AgentOf<L>> {
        self.construct(AgentConfig::InProcess(options)).await
    }

    /// Construct an agent driven by the REST controller at `controller_url`
    pub async fn new_rest_agent(&self, controller_url: &str) -> Result<AgentOf<L>> {
        self.construct(AgentConfig::Rest(RestAgentOptions::new(controller_url)))
            .await
    }

    /// Validate `config`, load its bundle if needed, and construct the agent
    pub async fn construct(&self, config: AgentConfig) -> Result<AgentOf<L>> {
        config.validate()?;
        let framework = self.framework(config.variant()).await?;
        debug!("constructing {:?} agent", config.variant());
        framework.construct(&config)
    }

    async fn framework(&self, variant: BundleVariant) -> Result<&L::Framework> {
        self.cell(variant)
            .get_or_try_init(|| async {
                info!("loading agent framework bundle {}", variant.bundle_path());
                self.loader.load(variant).await
            })
            .await
    }

    fn cell(&self, variant: BundleVariant) -> &OnceCell<L::Framework> {
        match variant {
            BundleVariant::Web => &self.web,
            BundleVariant::Rest => &self.rest,
        }
    }
}
