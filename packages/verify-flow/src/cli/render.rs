//! Terminal rendering of flow snapshots and prompts

use colored::Colorize;

use crate::domains::verification::{FlowState, ValidationError, VerificationStatus};

pub const TRIAL_TIP: &str =
    "Tip: On a Twilio trial, you can only send SMS to verified numbers in your Twilio account.";

/// Menu actions, in display order
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum MenuAction {
    EnterPhone,
    SendCode,
    EnterCode,
    Verify,
    Exit,
}

impl MenuAction {
    pub fn all() -> &'static [MenuAction] {
        &[
            MenuAction::EnterPhone,
            MenuAction::SendCode,
            MenuAction::EnterCode,
            MenuAction::Verify,
            MenuAction::Exit,
        ]
    }

    pub fn label(&self, state: &FlowState) -> String {
        match self {
            MenuAction::EnterPhone => {
                format!("📱 Phone number: {}", display_or_placeholder(&state.phone))
            }
            MenuAction::SendCode => "📨 Send Code".to_string(),
            MenuAction::EnterCode => {
                format!("🔢 Verification code: {}", display_or_placeholder(&state.code))
            }
            MenuAction::Verify => "✅ Verify".to_string(),
            MenuAction::Exit => "🛑 Exit".to_string(),
        }
    }
}

fn display_or_placeholder(value: &str) -> String {
    if value.is_empty() {
        "(not set)".dimmed().to_string()
    } else {
        value.to_string()
    }
}

/// Colored status line; `None` while idle
pub fn status_line(status: &VerificationStatus) -> Option<String> {
    let text = status.label();
    let line = match status {
        VerificationStatus::Idle => return None,
        VerificationStatus::SendingCode | VerificationStatus::VerifyingCode => {
            text.bright_yellow().to_string()
        }
        VerificationStatus::CodeSent => text.bright_cyan().to_string(),
        VerificationStatus::Verified => text.bright_green().bold().to_string(),
        VerificationStatus::Failed(_) => text.bright_red().to_string(),
    };
    Some(line)
}

/// Title and body of a missing-input prompt
pub fn validation_prompt(err: &ValidationError) -> String {
    format!("{}\n{}", err.title().bold(), err.prompt())
}

pub fn banner() -> String {
    [
        "╔════════════════════════════════════════╗",
        "║        WWWA — Verify Phone             ║",
        "╚════════════════════════════════════════╝",
    ]
    .iter()
    .map(|line| line.bright_cyan().to_string())
    .collect::<Vec<_>>()
    .join("\n")
}
