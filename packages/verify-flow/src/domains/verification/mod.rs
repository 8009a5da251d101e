//! Verification domain - proves ownership of a phone number by SMS code
//!
//! Flow:
//!   request_code → backend texts a code → verify_code → subscribed
//!
//! Responsibilities:
//! - Input validation before any network call
//! - The single status value the presentation layer renders
//! - Guaranteed release of the per-operation in-flight flags

pub mod actions;
pub mod errors;
pub mod flow;
pub mod models;

pub use errors::ValidationError;
pub use flow::{FlowState, VerificationFlow, CANCELLED_MESSAGE};
pub use models::{is_blank, looks_like_e164, VerificationStatus, CODE_LENGTH_HINT, PHONE_EXAMPLE};
