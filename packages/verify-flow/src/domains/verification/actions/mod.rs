//! Verification actions - the two protocol phases
//!
//! Called through `VerificationFlow`; each raises its own in-flight flag.

mod request_code;
mod verify_code;

pub use request_code::request_code;
pub use verify_code::verify_code;
