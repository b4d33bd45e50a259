//! Publish an audit attestation for a program

use anchor_lang::prelude::*;
use crate::error::AuditVerifierError;
use crate::events::AuditPublished;
use crate::seeds::name_seed;
use crate::state::{AuditRecord, MAX_PROGRAM_NAME_LEN, MAX_SECURITY_SCORE};

#[derive(Accounts)]
#[instruction(program_name: String)]
pub struct PublishAudit<'info> {
    #[account(
        init,
        payer = auditor,
        space = AuditRecord::space(),
        seeds = [
            AuditRecord::SEED,
            auditor.key().as_ref(),
            name_seed(&program_name).as_ref()
        ],
        bump
    )]
    pub audit_record: Account<'info, AuditRecord>,

    #[account(mut)]
    pub auditor: Signer<'info>,

    pub system_program: Program<'info, System>,
}

pub fn handler(
    ctx: Context<PublishAudit>,
    program_name: String,
    audit_hash: [u8; 32],
    security_score: u8,
    total_issues: u16,
    critical_count: u8,
    high_count: u8,
    medium_count: u8,
) -> Result<()> {
    require!(
        program_name.len() <= MAX_PROGRAM_NAME_LEN,
        AuditVerifierError::ProgramNameTooLong
    );

    require!(
        security_score <= MAX_SECURITY_SCORE,
        AuditVerifierError::InvalidSecurityScore
    );

    let clock = Clock::get()?;
    let record = &mut ctx.accounts.audit_record;

    record.auditor = ctx.accounts.auditor.key();
    record.audited_at = clock.unix_timestamp;
    record.program_name = program_name;
    record.audit_hash = audit_hash;
    record.security_score = security_score;
    record.total_issues = total_issues;
    record.critical_count = critical_count;
    record.high_count = high_count;
    record.medium_count = medium_count;
    record.verified = true;
    record.bump = ctx.bumps.audit_record;

    emit!(AuditPublished {
        auditor: record.auditor,
        program_name: record.program_name.clone(),
        security_score,
        audit_hash,
        timestamp: record.audited_at,
    });

    msg!(
        "Audit published: {} (score: {}/100, issues: {})",
        record.program_name,
        security_score,
        total_issues
    );

    Ok(())
}
