//! Kernel module - backend wiring and dependencies.

pub mod deps;
pub mod test_dependencies;
pub mod traits;

pub use deps::{FlowDeps, SubscribersAdapter};
pub use test_dependencies::{ConfirmCallArgs, MockReply, MockVerificationService};
pub use traits::*;
