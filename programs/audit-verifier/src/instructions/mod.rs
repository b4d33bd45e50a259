//! Instruction handlers for the audit verifier

pub mod publish_audit;
pub mod revoke_audit;

pub use publish_audit::*;
pub use revoke_audit::*;
