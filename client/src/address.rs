use anchor_lang::prelude::Pubkey;
use audit_verifier::seeds::name_seed;
use audit_verifier::state::AuditRecord;

use crate::error::{ClientError, Result};

/// Derive the audit record PDA for `owner` and `program_name`.
///
/// Seeds: `[b"audit", owner, name_seed(program_name)]`, matching the
/// program's `publish_audit` constraint.
pub fn derive_audit_address(
    program_id: &Pubkey,
    owner: &Pubkey,
    program_name: &str,
) -> Result<(Pubkey, u8)> {
    let name_hash = name_seed(program_name);
    Pubkey::try_find_program_address(
        &[AuditRecord::SEED, owner.as_ref(), name_hash.as_ref()],
        program_id,
    )
    .ok_or(ClientError::AddressDerivation)
}
