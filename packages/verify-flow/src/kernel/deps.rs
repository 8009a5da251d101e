//! Flow dependencies (using traits for testability)

use async_trait::async_trait;
use std::sync::Arc;
use subscribers_client::{Result, SubscribersClient};

use crate::config::Config;
use crate::kernel::BaseVerificationService;

// =============================================================================
// SubscribersClient Adapter (implements BaseVerificationService trait)
// =============================================================================

/// Wrapper around SubscribersClient that implements BaseVerificationService
pub struct SubscribersAdapter(pub Arc<SubscribersClient>);

impl SubscribersAdapter {
    pub fn new(client: Arc<SubscribersClient>) -> Self {
        Self(client)
    }

    pub fn from_config(config: &Config) -> Self {
        Self::new(Arc::new(SubscribersClient::new(config.base_url.clone())))
    }
}

#[async_trait]
impl BaseVerificationService for SubscribersAdapter {
    async fn send_challenge(&self, phone: &str) -> Result<()> {
        self.0.send_challenge(phone).await
    }

    async fn confirm_challenge(&self, phone: &str, code: &str) -> Result<()> {
        self.0.confirm_challenge(phone, code).await
    }
}

// =============================================================================
// FlowDeps
// =============================================================================

/// Dependencies handed to the verification flow
#[derive(Clone)]
pub struct FlowDeps {
    pub verification: Arc<dyn BaseVerificationService>,
}

impl FlowDeps {
    pub fn new(verification: Arc<dyn BaseVerificationService>) -> Self {
        Self { verification }
    }

    /// Production wiring: the HTTP client pointed at the configured backend
    pub fn from_config(config: &Config) -> Self {
        Self::new(Arc::new(SubscribersAdapter::from_config(config)))
    }
}
