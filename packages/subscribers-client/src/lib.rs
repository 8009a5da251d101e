//! Subscribers verification API client.
//!
//! A thin client for the two-step phone ownership check of the outage-alert
//! backend: request a one-time code by SMS, then confirm it.
//!
//! # Example
//!
//! ```rust,ignore
//! use subscribers_client::SubscribersClient;
//!
//! let client = SubscribersClient::new("https://alerts.example.org");
//!
//! client.send_challenge("+491752350401").await?;
//! client.confirm_challenge("+491752350401", "123456").await?;
//! ```

pub mod error;
pub mod models;

pub use error::{Result, SubscribersError, TRANSPORT_FALLBACK};
pub use models::{ChallengeRequest, ConfirmRequest, ErrorBody};

use reqwest::{header, Client};
use serde::Serialize;
use tracing::{debug, warn};

const SUBSCRIBERS_PATH: &str = "/api/subscribers";
const VERIFY_PATH: &str = "/api/subscribers/verify";

/// The two backend operations, with their fallback failure labels.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ChallengeOp {
    Send,
    Confirm,
}

impl ChallengeOp {
    fn path(self) -> &'static str {
        match self {
            ChallengeOp::Send => SUBSCRIBERS_PATH,
            ChallengeOp::Confirm => VERIFY_PATH,
        }
    }

    /// Message used when a non-2xx response carries no usable `error`.
    pub fn fallback(self) -> &'static str {
        match self {
            ChallengeOp::Send => "Failed to send code",
            ChallengeOp::Confirm => "Invalid or expired code",
        }
    }
}

#[derive(Debug, Clone)]
pub struct SubscribersClient {
    client: Client,
    base_url: String,
}

impl SubscribersClient {
    pub fn new(base_url: impl Into<String>) -> Self {
        let base_url = base_url.into().trim_end_matches('/').to_string();
        Self {
            client: Client::new(),
            base_url,
        }
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    /// Ask the backend to create a challenge and text a code to `phone`.
    pub async fn send_challenge(&self, phone: &str) -> Result<()> {
        self.post(ChallengeOp::Send, &ChallengeRequest { phone_e164: phone })
            .await
    }

    /// Submit the code received by SMS for `phone`.
    pub async fn confirm_challenge(&self, phone: &str, code: &str) -> Result<()> {
        self.post(
            ChallengeOp::Confirm,
            &ConfirmRequest {
                phone_e164: phone,
                code,
            },
        )
        .await
    }

    async fn post<B: Serialize>(&self, op: ChallengeOp, body: &B) -> Result<()> {
        let url = format!("{}{}", self.base_url, op.path());
        debug!(%url, ?op, "Posting subscriber challenge request");

        let res = self
            .client
            .post(&url)
            .header(header::CONTENT_TYPE, "application/json")
            .json(body)
            .send()
            .await;

        let response = match res {
            Ok(response) => response,
            Err(e) => {
                warn!(%url, error = %e, "Request to subscribers API failed");
                return Err(SubscribersError::transport(e.to_string()));
            }
        };

        let status = response.status();
        if status.is_success() {
            debug!(%url, status = status.as_u16(), "Subscribers API accepted request");
            return Ok(());
        }

        // A body that fails to arrive is treated like an empty one.
        let text = response.text().await.unwrap_or_default();
        let detail = ErrorBody::parse_lenient(&text);
        let message = detail.message().unwrap_or(op.fallback()).to_string();
        warn!(%url, status = status.as_u16(), %message, "Subscribers API returned an error");
        Err(SubscribersError::Service {
            status: status.as_u16(),
            message,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_trailing_slash_is_trimmed() {
        let client = SubscribersClient::new("http://localhost:3000/");
        assert_eq!(client.base_url(), "http://localhost:3000");
    }

    #[test]
    fn test_fallbacks_differ_per_operation() {
        assert_eq!(ChallengeOp::Send.fallback(), "Failed to send code");
        assert_eq!(ChallengeOp::Confirm.fallback(), "Invalid or expired code");
        assert_eq!(ChallengeOp::Send.path(), "/api/subscribers");
        assert_eq!(ChallengeOp::Confirm.path(), "/api/subscribers/verify");
    }
}
