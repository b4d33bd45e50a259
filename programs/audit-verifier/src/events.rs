use anchor_lang::prelude::*;

#[event]
pub struct AuditPublished {
    pub auditor: Pubkey,
    pub program_name: String,
    pub security_score: u8,
    pub audit_hash: [u8; 32],
    pub timestamp: i64,
}

#[event]
pub struct AuditRevoked {
    pub auditor: Pubkey,
    pub program_name: String,
    pub timestamp: i64,
}
