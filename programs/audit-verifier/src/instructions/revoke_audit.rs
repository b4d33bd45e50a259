//! Revoke a published audit (clears the verified flag)

use anchor_lang::prelude::*;
use crate::error::AuditVerifierError;
use crate::events::AuditRevoked;
use crate::seeds::name_seed;
use crate::state::AuditRecord;

#[derive(Accounts)]
pub struct RevokeAudit<'info> {
    #[account(
        mut,
        seeds = [
            AuditRecord::SEED,
            audit_record.auditor.as_ref(),
            name_seed(&audit_record.program_name).as_ref()
        ],
        bump = audit_record.bump,
        has_one = auditor @ AuditVerifierError::Unauthorized
    )]
    pub audit_record: Account<'info, AuditRecord>,

    pub auditor: Signer<'info>,
}

pub fn handler(ctx: Context<RevokeAudit>) -> Result<()> {
    let record = &mut ctx.accounts.audit_record;

    require!(record.verified, AuditVerifierError::AlreadyRevoked);

    record.verified = false;

    let clock = Clock::get()?;

    emit!(AuditRevoked {
        auditor: record.auditor,
        program_name: record.program_name.clone(),
        timestamp: clock.unix_timestamp,
    });

    msg!("Audit revoked: {}", record.program_name);

    Ok(())
}
