//! Error types for the subscribers client.

use thiserror::Error;

/// Result type for subscribers client operations.
pub type Result<T> = std::result::Result<T, SubscribersError>;

/// Used when a transport failure has no description of its own.
pub const TRANSPORT_FALLBACK: &str = "failed";

/// Subscribers client errors.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum SubscribersError {
    /// The backend answered with a non-2xx status.
    #[error("Service error ({status}): {message}")]
    Service { status: u16, message: String },

    /// The request never completed (connect refused, DNS, TLS, ...)
    #[error("Transport error: {0}")]
    Transport(String),
}

impl SubscribersError {
    pub(crate) fn transport(description: impl Into<String>) -> Self {
        let description = description.into();
        if description.trim().is_empty() {
            Self::Transport(TRANSPORT_FALLBACK.to_string())
        } else {
            Self::Transport(description)
        }
    }

    /// User-facing text, without the kind prefix.
    pub fn message(&self) -> &str {
        match self {
            Self::Service { message, .. } => message,
            Self::Transport(description) => description,
        }
    }

    pub fn is_transport(&self) -> bool {
        matches!(self, Self::Transport(_))
    }

    /// HTTP status for service errors.
    pub fn status(&self) -> Option<u16> {
        match self {
            Self::Service { status, .. } => Some(*status),
            Self::Transport(_) => None,
        }
    }
}
