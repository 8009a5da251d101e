/// Length hint for the SMS code input. Not enforced by the flow.
pub const CODE_LENGTH_HINT: usize = 6;

/// Placeholder shown in the phone prompt
pub const PHONE_EXAMPLE: &str = "+491752350401";

/// True for empty or whitespace-only input
pub fn is_blank(input: &str) -> bool {
    input.trim().is_empty()
}

/// Advisory E.164 shape check: `+`, a non-zero leading digit, at most 15 digits.
///
/// Never used to reject input; the backend is the authority.
pub fn looks_like_e164(phone: &str) -> bool {
    let Some(digits) = phone.trim().strip_prefix('+') else {
        return false;
    };

    (2..=15).contains(&digits.len())
        && digits.chars().all(|c| c.is_ascii_digit())
        && !digits.starts_with('0')
}
