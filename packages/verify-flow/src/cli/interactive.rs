//! Interactive verify-phone screen

use anyhow::Result;
use colored::Colorize;
use console::Term;
use dialoguer::{theme::ColorfulTheme, Input, Select};
use tokio::runtime::Runtime;

use super::drive;
use super::render::{banner, status_line, validation_prompt, MenuAction, TRIAL_TIP};
use crate::domains::verification::{
    FlowState, ValidationError, VerificationFlow, VerificationStatus, CODE_LENGTH_HINT,
    PHONE_EXAMPLE,
};

/// Run the menu loop until the user exits
///
/// Send and verify run in the foreground; the `⏳` line printed by `drive`
/// is the busy indicator, and the settled status shows at the top of the
/// next iteration.
pub fn run_interactive(rt: &Runtime, flow: &VerificationFlow) -> Result<()> {
    let term = Term::stdout();
    term.clear_screen()?;
    println!("{}", banner());
    println!();
    println!("Enter your phone number to subscribe to water outage alerts (E.164)");
    println!("{}", TRIAL_TIP.dimmed());

    loop {
        let state = flow.state();
        println!();
        if let Some(line) = status_line(&state.status) {
            println!("{}", line);
        }

        let items: Vec<String> = MenuAction::all()
            .iter()
            .map(|action| action.label(&state))
            .collect();

        let selection = Select::with_theme(&ColorfulTheme::default())
            .with_prompt("What would you like to do?")
            .items(&items)
            .default(suggested_index(&state))
            .interact_on(&term)?;

        let action = MenuAction::all()
            .get(selection)
            .copied()
            .unwrap_or(MenuAction::Exit);

        match action {
            MenuAction::EnterPhone => {
                let phone: String = Input::with_theme(&ColorfulTheme::default())
                    .with_prompt(format!("Phone number (e.g. {})", PHONE_EXAMPLE))
                    .with_initial_text(state.phone)
                    .allow_empty(true)
                    .interact_text_on(&term)?;
                flow.set_phone(phone);
            }
            MenuAction::SendCode => {
                let outcome = drive(rt, flow, flow.request_code());
                if let Some(prompt) = missing_input_prompt(&outcome) {
                    println!("{}", prompt);
                }
            }
            MenuAction::EnterCode => {
                let code: String = Input::with_theme(&ColorfulTheme::default())
                    .with_prompt(format!("Verification code ({} digits)", CODE_LENGTH_HINT))
                    .with_initial_text(state.code)
                    .allow_empty(true)
                    .interact_text_on(&term)?;
                flow.set_code(code);
            }
            MenuAction::Verify => {
                let outcome = drive(rt, flow, flow.verify_code());
                if let Some(prompt) = missing_input_prompt(&outcome) {
                    println!("{}", prompt);
                }
            }
            MenuAction::Exit => {
                println!("{}", "👋 Goodbye!".bright_blue());
                break;
            }
        }
    }

    Ok(())
}

/// Text to print right after an action. Settled statuses are left to the
/// status line at the top of the loop; only validation prompts, which never
/// reach the status, are returned.
fn missing_input_prompt(outcome: &Result<VerificationStatus, ValidationError>) -> Option<String> {
    outcome.as_ref().err().map(validation_prompt)
}

/// Menu position of the most likely next step
fn suggested_index(state: &FlowState) -> usize {
    let next = if state.phone.trim().is_empty() {
        MenuAction::EnterPhone
    } else {
        match state.status {
            VerificationStatus::CodeSent if state.code.trim().is_empty() => MenuAction::EnterCode,
            VerificationStatus::CodeSent => MenuAction::Verify,
            VerificationStatus::Failed(_) if !state.code.trim().is_empty() => MenuAction::Verify,
            VerificationStatus::Verified => MenuAction::Exit,
            _ => MenuAction::SendCode,
        }
    };

    MenuAction::all()
        .iter()
        .position(|action| *action == next)
        .unwrap_or(0)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn state(phone: &str, code: &str, status: VerificationStatus) -> FlowState {
        FlowState {
            phone: phone.to_string(),
            code: code.to_string(),
            status,
            ..FlowState::default()
        }
    }

    #[test]
    fn test_settled_status_not_echoed_after_action() {
        assert_eq!(missing_input_prompt(&Ok(VerificationStatus::CodeSent)), None);
        assert_eq!(
            missing_input_prompt(&Ok(VerificationStatus::Failed("Too many requests".into()))),
            None
        );
    }

    #[test]
    fn test_missing_input_prompt_printed_after_action() {
        colored::control::set_override(false);
        assert_eq!(
            missing_input_prompt(&Err(ValidationError::MissingPhone)).as_deref(),
            Some(
                "Enter your phone number to subscribe to water outage alerts\n\
                 Enter a phone number in E.164 format, e.g. +491752350401"
            )
        );
    }

    #[test]
    fn test_suggests_phone_first() {
        assert_eq!(suggested_index(&state("", "", VerificationStatus::Idle)), 0);
    }

    #[test]
    fn test_suggests_send_once_phone_is_set() {
        let s = state("+491752350401", "", VerificationStatus::Idle);
        assert_eq!(suggested_index(&s), 1);
    }

    #[test]
    fn test_suggests_code_after_sent() {
        let s = state("+491752350401", "", VerificationStatus::CodeSent);
        assert_eq!(suggested_index(&s), 2);
        let s = state("+491752350401", "123456", VerificationStatus::CodeSent);
        assert_eq!(suggested_index(&s), 3);
    }

    #[test]
    fn test_suggests_retry_verify_after_failure_with_code() {
        let s = state(
            "+491752350401",
            "12345",
            VerificationStatus::Failed("Invalid or expired code".into()),
        );
        assert_eq!(suggested_index(&s), 3);
    }
}
