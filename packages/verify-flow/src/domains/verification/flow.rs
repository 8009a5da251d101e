//! Verification flow controller
//!
//! Owns the inputs, the status and the two in-flight flags. Observers get
//! snapshots through a `watch` channel and never write to it.

use tokio::sync::watch;

use super::actions;
use super::errors::ValidationError;
use super::models::VerificationStatus;
use crate::kernel::FlowDeps;

/// Status text when an operation is dropped before it settles.
pub const CANCELLED_MESSAGE: &str = "Request cancelled";

/// Snapshot of everything the presentation layer renders.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct FlowState {
    pub phone: String,
    pub code: String,
    pub status: VerificationStatus,
    /// A send-challenge call is outstanding
    pub sending: bool,
    /// A confirm-challenge call is outstanding
    pub verifying: bool,
    /// Outstanding send calls; `sending` is `pending_sends > 0`
    pub(crate) pending_sends: usize,
    /// Outstanding confirm calls; `verifying` is `pending_verifies > 0`
    pub(crate) pending_verifies: usize,
}

/// Which in-flight flag an operation holds.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub(crate) enum InFlight {
    Sending,
    Verifying,
}

impl InFlight {
    fn pending_status(self) -> VerificationStatus {
        match self {
            InFlight::Sending => VerificationStatus::SendingCode,
            InFlight::Verifying => VerificationStatus::VerifyingCode,
        }
    }
}

impl FlowState {
    /// Count one call in or out and recompute the flag. Returns the calls
    /// still outstanding for that operation.
    fn track(&mut self, which: InFlight, entering: bool) -> usize {
        let (pending, flag) = match which {
            InFlight::Sending => (&mut self.pending_sends, &mut self.sending),
            InFlight::Verifying => (&mut self.pending_verifies, &mut self.verifying),
        };
        *pending = if entering {
            *pending + 1
        } else {
            pending.saturating_sub(1)
        };
        *flag = *pending > 0;
        *pending
    }
}

/// Counts one call as in flight; releases it on drop.
///
/// The flag stays raised while any call of the same operation is
/// outstanding. Dropping without `settle` (panic in the backend, or the
/// future being cancelled) replaces the pending status with `Failed`, but
/// only once no other call of that operation is still suspended.
pub(crate) struct InFlightGuard<'a> {
    state: &'a watch::Sender<FlowState>,
    which: InFlight,
    settled: bool,
}

impl<'a> InFlightGuard<'a> {
    pub(crate) fn raise(state: &'a watch::Sender<FlowState>, which: InFlight) -> Self {
        state.send_modify(|s| {
            s.track(which, true);
            s.status = which.pending_status();
        });
        Self {
            state,
            which,
            settled: false,
        }
    }

    /// Publish the outcome and lower the flag in one update.
    pub(crate) fn settle(mut self, apply: impl FnOnce(&mut FlowState)) -> VerificationStatus {
        let which = self.which;
        self.settled = true;
        let mut settled = VerificationStatus::Idle;
        self.state.send_modify(|s| {
            apply(s);
            s.track(which, false);
            settled = s.status.clone();
        });
        settled
    }
}

impl Drop for InFlightGuard<'_> {
    fn drop(&mut self) {
        if self.settled {
            return;
        }
        let which = self.which;
        self.state.send_modify(|s| {
            let remaining = s.track(which, false);
            if remaining == 0 && s.status == which.pending_status() {
                s.status = VerificationStatus::Failed(CANCELLED_MESSAGE.to_string());
            }
        });
    }
}

/// Drives the request-code / verify-code protocol.
///
/// Every method takes `&self`, so the two operations may overlap. Nothing
/// here rejects a duplicate call to an operation that is already in flight.
pub struct VerificationFlow {
    state: watch::Sender<FlowState>,
    deps: FlowDeps,
}

impl VerificationFlow {
    pub fn new(deps: FlowDeps) -> Self {
        let (state, _) = watch::channel(FlowState::default());
        Self { state, deps }
    }

    pub(crate) fn deps(&self) -> &FlowDeps {
        &self.deps
    }

    pub(crate) fn state_sender(&self) -> &watch::Sender<FlowState> {
        &self.state
    }

    /// Current snapshot
    pub fn state(&self) -> FlowState {
        self.state.borrow().clone()
    }

    pub fn status(&self) -> VerificationStatus {
        self.state.borrow().status.clone()
    }

    /// Receiver that sees every published snapshot
    pub fn subscribe(&self) -> watch::Receiver<FlowState> {
        self.state.subscribe()
    }

    pub fn set_phone(&self, phone: impl Into<String>) {
        let phone = phone.into();
        self.state.send_modify(|s| s.phone = phone);
    }

    pub fn set_code(&self, code: impl Into<String>) {
        let code = code.into();
        self.state.send_modify(|s| s.code = code);
    }

    /// Ask the backend to text a code to the current phone number.
    ///
    /// Returns the settled status, or a `ValidationError` without touching
    /// the network when the phone is blank.
    pub async fn request_code(&self) -> Result<VerificationStatus, ValidationError> {
        actions::request_code(self).await
    }

    /// Submit the current code for the current phone number.
    pub async fn verify_code(&self) -> Result<VerificationStatus, ValidationError> {
        actions::verify_code(self).await
    }
}
