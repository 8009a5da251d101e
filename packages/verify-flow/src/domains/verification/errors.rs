use thiserror::Error;

/// Missing input, caught before any network call.
///
/// These are shown as a prompt and never become a status.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum ValidationError {
    #[error("phone number is required")]
    MissingPhone,

    #[error("phone number and code are required")]
    MissingPhoneOrCode,
}

impl ValidationError {
    pub fn title(&self) -> &'static str {
        match self {
            ValidationError::MissingPhone => {
                "Enter your phone number to subscribe to water outage alerts"
            }
            ValidationError::MissingPhoneOrCode => "Missing info",
        }
    }

    pub fn prompt(&self) -> &'static str {
        match self {
            ValidationError::MissingPhone => {
                "Enter a phone number in E.164 format, e.g. +491752350401"
            }
            ValidationError::MissingPhoneOrCode => "Enter both phone and the 6-digit code.",
        }
    }
}
