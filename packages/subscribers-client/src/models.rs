use serde::{Deserialize, Serialize};

/// Body of `POST /api/subscribers`.
#[derive(Debug, Clone, Serialize)]
pub struct ChallengeRequest<'a> {
    #[serde(rename = "phoneE164")]
    pub phone_e164: &'a str,
}

/// Body of `POST /api/subscribers/verify`.
#[derive(Debug, Clone, Serialize)]
pub struct ConfirmRequest<'a> {
    #[serde(rename = "phoneE164")]
    pub phone_e164: &'a str,
    pub code: &'a str,
}

/// Error detail the backend may attach to a non-2xx response.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
pub struct ErrorBody {
    #[serde(default)]
    pub error: Option<String>,
}

impl ErrorBody {
    /// Parse a response body, degrading to an empty detail on anything that
    /// is not a JSON object with an optional string `error`.
    pub fn parse_lenient(body: &str) -> Self {
        serde_json::from_str(body).unwrap_or_default()
    }

    /// Server-supplied message, passed through untouched. Blank strings
    /// count as no message.
    pub fn message(&self) -> Option<&str> {
        self.error
            .as_deref()
            .filter(|message| !message.trim().is_empty())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_challenge_request_uses_wire_field_name() {
        let body = serde_json::to_value(ChallengeRequest {
            phone_e164: "+491752350401",
        })
        .unwrap();
        assert_eq!(body, serde_json::json!({ "phoneE164": "+491752350401" }));
    }

    #[test]
    fn test_confirm_request_shape() {
        let body = serde_json::to_value(ConfirmRequest {
            phone_e164: "+491752350401",
            code: "123456",
        })
        .unwrap();
        assert_eq!(
            body,
            serde_json::json!({ "phoneE164": "+491752350401", "code": "123456" })
        );
    }

    #[test]
    fn test_error_body_reads_message() {
        let body = ErrorBody::parse_lenient(r#"{"error":"rate limited"}"#);
        assert_eq!(body.message(), Some("rate limited"));
    }

    #[test]
    fn test_error_text_is_not_rewritten() {
        let body = ErrorBody::parse_lenient(r#"{"error":" Invalid code.\n"}"#);
        assert_eq!(body.message(), Some(" Invalid code.\n"));
    }

    #[test]
    fn test_error_body_degrades_on_garbage() {
        assert_eq!(ErrorBody::parse_lenient(""), ErrorBody::default());
        assert_eq!(ErrorBody::parse_lenient("<html>502</html>"), ErrorBody::default());
        assert_eq!(ErrorBody::parse_lenient("[1,2,3]"), ErrorBody::default());
        assert_eq!(ErrorBody::parse_lenient(r#"{"error":42}"#), ErrorBody::default());
    }

    #[test]
    fn test_blank_error_is_no_message() {
        assert_eq!(ErrorBody::parse_lenient(r#"{"error":""}"#).message(), None);
        assert_eq!(ErrorBody::parse_lenient(r#"{"error":"  "}"#).message(), None);
        assert_eq!(ErrorBody::parse_lenient(r#"{"error":null}"#).message(), None);
        assert_eq!(ErrorBody::parse_lenient(r#"{"other":"x"}"#).message(), None);
    }
}
