pub mod phone;
pub mod status;

pub use phone::{is_blank, looks_like_e164, CODE_LENGTH_HINT, PHONE_EXAMPLE};
pub use status::VerificationStatus;
