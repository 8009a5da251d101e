//! Terminal presentation layer for the verification flow
//!
//! Observes `FlowState` snapshots and turns menu picks into flow calls. It
//! never writes status itself.

mod interactive;
pub mod render;

pub use interactive::run_interactive;

use colored::Colorize;
use std::future::Future;
use std::process::ExitCode;
use tokio::runtime::Runtime;

use crate::domains::verification::{ValidationError, VerificationFlow, VerificationStatus};
use render::{status_line, validation_prompt};

/// Run one flow operation, echoing the pending status when it is published
pub fn drive<F>(
    rt: &Runtime,
    flow: &VerificationFlow,
    op: F,
) -> Result<VerificationStatus, ValidationError>
where
    F: Future<Output = Result<VerificationStatus, ValidationError>>,
{
    let mut updates = flow.subscribe();
    rt.block_on(async move {
        tokio::pin!(op);
        loop {
            tokio::select! {
                result = &mut op => return result,
                changed = updates.changed() => {
                    if changed.is_err() {
                        return (&mut op).await;
                    }
                    let status = updates.borrow_and_update().status.clone();
                    if status.is_pending() {
                        if let Some(line) = status_line(&status) {
                            println!("⏳ {}", line);
                        }
                    }
                }
            }
        }
    })
}

/// Print the outcome of an operation
pub fn report(outcome: Result<VerificationStatus, ValidationError>) {
    match outcome {
        Ok(status) => {
            if let Some(line) = status_line(&status) {
                println!("{}", line);
            }
        }
        Err(e) => println!("{}", validation_prompt(&e)),
    }
}

/// Exit status for one-shot commands: 0 on a non-failed status, 1 when the
/// backend call failed, 2 on missing input
pub fn exit_status(outcome: &Result<VerificationStatus, ValidationError>) -> u8 {
    match outcome {
        Ok(status) if !status.is_failed() => 0,
        Ok(_) => 1,
        Err(_) => 2,
    }
}

/// One-shot send: set the phone, request a code, print the result
pub fn run_send(rt: &Runtime, flow: &VerificationFlow, phone: String) -> ExitCode {
    flow.set_phone(phone);
    let outcome = drive(rt, flow, flow.request_code());
    let status = exit_status(&outcome);
    report(outcome);
    if status == 0 {
        println!("{}", "Run `wwwa verify` with the code from the SMS.".dimmed());
    }
    ExitCode::from(status)
}

/// One-shot verify: set phone and code, submit, print the result
pub fn run_verify(rt: &Runtime, flow: &VerificationFlow, phone: String, code: String) -> ExitCode {
    flow.set_phone(phone);
    flow.set_code(code);
    let outcome = drive(rt, flow, flow.verify_code());
    let status = exit_status(&outcome);
    report(outcome);
    ExitCode::from(status)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_exit_statuses() {
        assert_eq!(exit_status(&Ok(VerificationStatus::Verified)), 0);
        assert_eq!(exit_status(&Ok(VerificationStatus::CodeSent)), 0);
        assert_eq!(exit_status(&Ok(VerificationStatus::Failed("x".into()))), 1);
        assert_eq!(exit_status(&Err(ValidationError::MissingPhone)), 2);
    }
}
