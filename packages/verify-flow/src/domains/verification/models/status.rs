use std::fmt;

/// Where the verification flow currently is.
///
/// One value is live at a time and each transition overwrites it. `Verified`
/// and `Failed` are rest states, not terminal ones: either phase can be
/// re-entered from them.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub enum VerificationStatus {
    #[default]
    Idle,
    SendingCode,
    CodeSent,
    VerifyingCode,
    Verified,
    Failed(String),
}

impl VerificationStatus {
    /// A network call is outstanding.
    pub fn is_pending(&self) -> bool {
        matches!(self, Self::SendingCode | Self::VerifyingCode)
    }

    pub fn is_failed(&self) -> bool {
        matches!(self, Self::Failed(_))
    }

    /// Error text for `Failed`, nothing otherwise.
    pub fn failure(&self) -> Option<&str> {
        match self {
            Self::Failed(message) => Some(message),
            _ => None,
        }
    }

    /// Status line shown to the user. Empty while idle.
    pub fn label(&self) -> String {
        match self {
            Self::Idle => String::new(),
            Self::SendingCode => "Sending code\u{2026}".to_string(),
            Self::CodeSent => "Code sent! Check your SMS \u{1F4E9}".to_string(),
            Self::VerifyingCode => "Verifying\u{2026}".to_string(),
            Self::Verified => "Verified \u{1F389} You are subscribed.".to_string(),
            Self::Failed(message) => format!("Error: {}", message),
        }
    }
}

impl fmt::Display for VerificationStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.label())
    }
}
