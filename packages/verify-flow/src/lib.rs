// WWWA - phone verification flow
//
// Drives the two-step SMS challenge that subscribes a phone number to
// water-outage alerts. The controller lives in domains/verification; the
// backend is reached through the traits in kernel/.

pub mod cli;
pub mod config;
pub mod domains;
pub mod kernel;

pub use config::*;
