//! Verify code action

use tracing::{debug, info, warn};

use crate::domains::verification::errors::ValidationError;
use crate::domains::verification::flow::{InFlight, InFlightGuard, VerificationFlow};
use crate::domains::verification::models::{is_blank, VerificationStatus};

/// Submit the flow's code for its phone number.
///
/// On success the consumed code is cleared so it cannot be resubmitted by
/// accident. On failure it is kept for the user to correct.
pub async fn verify_code(
    flow: &VerificationFlow,
) -> Result<VerificationStatus, ValidationError> {
    let snapshot = flow.state();
    let (phone, code) = (snapshot.phone, snapshot.code);
    if is_blank(&phone) || is_blank(&code) {
        debug!("Verify requested without phone number and code");
        return Err(ValidationError::MissingPhoneOrCode);
    }

    let guard = InFlightGuard::raise(flow.state_sender(), InFlight::Verifying);
    let result = flow
        .deps()
        .verification
        .confirm_challenge(&phone, &code)
        .await;

    let settled = match result {
        Ok(()) => {
            info!(%phone, "Phone number verified");
            guard.settle(|s| {
                s.status = VerificationStatus::Verified;
                // Leave a code typed in the meantime alone
                if s.code == code {
                    s.code.clear();
                }
            })
        }
        Err(e) => {
            warn!(%phone, error = %e, "Verification failed");
            let status = VerificationStatus::Failed(e.message().to_string());
            guard.settle(|s| s.status = status)
        }
    };

    Ok(settled)
}
