//! Audit Verifier Program
//!
//! Publishes audit attestations for Solana programs as PDAs so anyone can
//! look up whether a program was audited, by whom, and with what result.
//!
//! Each record stores a SHA-256 fingerprint of the full audit result plus a
//! compact severity summary. Records are addressed by
//! `[b"audit", auditor, name_seed(program_name)]`.

use anchor_lang::prelude::*;

pub mod error;
pub mod events;
pub mod instructions;
pub mod seeds;
pub mod state;

use instructions::*;

declare_id!("AGrdVerify111111111111111111111111111111111");

#[program]
pub mod audit_verifier {
    use super::*;

    /// Publish an audit verification record on-chain
    pub fn publish_audit(
        ctx: Context<PublishAudit>,
        program_name: String,
        audit_hash: [u8; 32],
        security_score: u8,
        total_issues: u16,
        critical_count: u8,
        high_count: u8,
        medium_count: u8,
    ) -> Result<()> {
        instructions::publish_audit::handler(
            ctx,
            program_name,
            audit_hash,
            security_score,
            total_issues,
            critical_count,
            high_count,
            medium_count,
        )
    }

    /// Revoke an audit (only the original auditor can do this)
    pub fn revoke_audit(ctx: Context<RevokeAudit>) -> Result<()> {
        instructions::revoke_audit::handler(ctx)
    }
}
