//! Error definitions for the audit verifier

use anchor_lang::prelude::*;

#[error_code]
pub enum AuditVerifierError {
    #[msg("Only the original auditor can revoke this record")]
    Unauthorized,

    #[msg("Program name is too long (max 64 bytes)")]
    ProgramNameTooLong,

    #[msg("Invalid security score (must be 0-100)")]
    InvalidSecurityScore,

    #[msg("Audit record is already revoked")]
    AlreadyRevoked,
}
