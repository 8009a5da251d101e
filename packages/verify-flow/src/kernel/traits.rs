// Trait definitions for dependency injection
//
// Infrastructure only. The flow controller talks to the backend through
// these so tests can swap in a scripted service.
//
// Naming convention: Base* for trait names

use async_trait::async_trait;
use subscribers_client::Result;

// =============================================================================
// Verification Service Trait (Infrastructure - SMS challenge backend)
// =============================================================================

#[async_trait]
pub trait BaseVerificationService: Send + Sync {
    /// Ask the backend to text a one-time code to `phone`
    async fn send_challenge(&self, phone: &str) -> Result<()>;

    /// Submit the code the user received for `phone`
    async fn confirm_challenge(&self, phone: &str, code: &str) -> Result<()>;
}
