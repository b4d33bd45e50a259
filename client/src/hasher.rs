use sha2::{Digest, Sha256};

use crate::error::Result;
use crate::types::AuditResult;

/// SHA-256 over the compact JSON of `result`.
///
/// Keys follow struct declaration order and are not sorted, so the digest
/// identifies this exact serialization rather than a logical value.
pub fn hash_audit_result(result: &AuditResult) -> Result<[u8; 32]> {
    let json = serde_json::to_vec(result)?;
    Ok(Sha256::digest(&json).into())
}

/// Lowercase hex form of [`hash_audit_result`], as stored for display.
pub fn hash_audit_result_hex(result: &AuditResult) -> Result<String> {
    hash_audit_result(result).map(hex::encode)
}
