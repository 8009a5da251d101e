//! Request code action

use tracing::{debug, info, warn};

use crate::domains::verification::errors::ValidationError;
use crate::domains::verification::flow::{InFlight, InFlightGuard, VerificationFlow};
use crate::domains::verification::models::{is_blank, looks_like_e164, VerificationStatus};

/// Ask the backend to text a one-time code to the flow's phone number.
///
/// The phone is forwarded exactly as typed; trimming only decides whether
/// anything was typed at all.
pub async fn request_code(
    flow: &VerificationFlow,
) -> Result<VerificationStatus, ValidationError> {
    let phone = flow.state().phone;
    if is_blank(&phone) {
        debug!("Send code requested without a phone number");
        return Err(ValidationError::MissingPhone);
    }

    if !looks_like_e164(&phone) {
        warn!(%phone, "Phone number does not look like E.164, sending anyway");
    }

    let guard = InFlightGuard::raise(flow.state_sender(), InFlight::Sending);
    let result = flow.deps().verification.send_challenge(&phone).await;

    let status = match result {
        Ok(()) => {
            info!(%phone, "Verification code sent");
            VerificationStatus::CodeSent
        }
        Err(e) => {
            warn!(%phone, error = %e, "Failed to send verification code");
            VerificationStatus::Failed(e.message().to_string())
        }
    };

    Ok(guard.settle(|s| s.status = status))
}
