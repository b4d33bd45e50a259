//! Account structures for the audit verifier

use anchor_lang::prelude::*;

/// Maximum length for program name, in bytes
pub const MAX_PROGRAM_NAME_LEN: usize = 64;

/// Highest valid security score
pub const MAX_SECURITY_SCORE: u8 = 100;

/// Published audit attestation
///
/// PDA seeds: [b"audit", auditor.key(), name_seed(program_name)]
#[account]
#[derive(InitSpace)]
pub struct AuditRecord {
    /// The wallet that performed the audit
    pub auditor: Pubkey,

    /// Unix timestamp of when the audit was published
    pub audited_at: i64,

    /// Name of the audited program
    #[max_len(MAX_PROGRAM_NAME_LEN)]
    pub program_name: String,

    /// SHA-256 hash of the full audit result JSON
    pub audit_hash: [u8; 32],

    /// Security score (0-100)
    pub security_score: u8,

    /// Total number of issues found
    pub total_issues: u16,

    /// Number of critical issues
    pub critical_count: u8,

    /// Number of high severity issues
    pub high_count: u8,

    /// Number of medium severity issues
    pub medium_count: u8,

    /// Whether the audit is currently verified (can be revoked)
    pub verified: bool,

    /// PDA bump seed
    pub bump: u8,
}

impl AuditRecord {
    pub const SEED: &'static [u8] = b"audit";

    /// Account size including the 8-byte discriminator
    pub fn space() -> usize {
        8 + Self::INIT_SPACE
    }
}
