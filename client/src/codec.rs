//! Binary codec for `publish_audit` instruction data and `AuditRecord` accounts
//!
//! Account layout (little-endian):
//!
//! | offset        | size | field          |
//! |---------------|------|----------------|
//! | 0             | 8    | discriminator  |
//! | 8             | 32   | auditor        |
//! | 40            | 8    | audited_at i64 |
//! | 48            | 4    | name length    |
//! | 52            | n    | program name   |
//! | 52+n          | 32   | audit hash     |
//! | 84+n          | 1    | security score |
//! | 85+n          | 2    | total issues   |
//! | 87+n          | 3    | crit/high/med  |
//! | 90+n          | 1    | verified       |
//!
//! Instruction data is the same minus auditor, timestamp and verified, with
//! the `publish_audit` discriminator in front.

use anchor_lang::prelude::Pubkey;
use anchor_lang::Discriminator;
use audit_verifier::instruction::PublishAudit;
use audit_verifier::state::MAX_SECURITY_SCORE;
use chrono::{DateTime, Utc};

use crate::error::{ClientError, Result};
use crate::types::AuditSummary;

const DISCRIMINATOR_LEN: usize = 8;
const HASH_LEN: usize = 32;

/// Publishable counters, narrowed to their on-chain widths.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct OnChainSummary {
    pub security_score: u8,
    pub total_issues: u16,
    pub critical: u8,
    pub high: u8,
    pub medium: u8,
}

impl OnChainSummary {
    pub fn new(security_score: u8, total_issues: u16, critical: u8, high: u8, medium: u8) -> Result<Self> {
        if security_score > MAX_SECURITY_SCORE {
            return Err(ClientError::ScoreOutOfRange(security_score.into()));
        }
        Ok(Self {
            security_score,
            total_issues,
            critical,
            high,
            medium,
        })
    }
}

fn narrow<T: TryFrom<u32>>(field: &'static str, value: u32, max: u32) -> Result<T> {
    T::try_from(value).map_err(|_| ClientError::CountOutOfRange { field, value, max })
}

impl TryFrom<&AuditSummary> for OnChainSummary {
    type Error = ClientError;

    fn try_from(summary: &AuditSummary) -> Result<Self> {
        if summary.security_score > u32::from(MAX_SECURITY_SCORE) {
            return Err(ClientError::ScoreOutOfRange(summary.security_score));
        }
        Ok(Self {
            security_score: narrow("securityScore", summary.security_score, u8::MAX.into())?,
            total_issues: narrow("totalIssues", summary.total_issues, u16::MAX.into())?,
            critical: narrow("critical", summary.critical, u8::MAX.into())?,
            high: narrow("high", summary.high, u8::MAX.into())?,
            medium: narrow("medium", summary.medium, u8::MAX.into())?,
        })
    }
}

/// Build `publish_audit` instruction data.
///
/// Out-of-range input is rejected, never truncated: a wrong hash length or a
/// score above 100 fails before any bytes are produced.
pub fn encode_publish_audit(
    program_name: &str,
    audit_hash: &[u8],
    summary: &OnChainSummary,
) -> Result<Vec<u8>> {
    if audit_hash.len() != HASH_LEN {
        return Err(ClientError::InvalidHashLength(audit_hash.len()));
    }
    if summary.security_score > MAX_SECURITY_SCORE {
        return Err(ClientError::ScoreOutOfRange(summary.security_score.into()));
    }

    let name = program_name.as_bytes();
    let name_len =
        u32::try_from(name.len()).map_err(|_| ClientError::ProgramNameTooLong(name.len()))?;

    let mut data = Vec::with_capacity(DISCRIMINATOR_LEN + 4 + name.len() + HASH_LEN + 6);
    data.extend_from_slice(&PublishAudit::DISCRIMINATOR);
    data.extend_from_slice(&name_len.to_le_bytes());
    data.extend_from_slice(name);
    data.extend_from_slice(audit_hash);
    data.push(summary.security_score);
    data.extend_from_slice(&summary.total_issues.to_le_bytes());
    data.push(summary.critical);
    data.push(summary.high);
    data.push(summary.medium);

    Ok(data)
}

/// Decoded `AuditRecord` account.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct OnChainAuditRecord {
    pub auditor: Pubkey,
    pub audited_at: DateTime<Utc>,
    pub program_name: String,
    /// Lowercase hex of the 32-byte SHA-256 fingerprint
    pub audit_hash: String,
    pub security_score: u8,
    pub total_issues: u16,
    pub critical_count: u8,
    pub high_count: u8,
    pub medium_count: u8,
    pub verified: bool,
}

struct Reader<'a> {
    data: &'a [u8],
}

impl<'a> Reader<'a> {
    fn take(&mut self, n: usize) -> Option<&'a [u8]> {
        if n > self.data.len() {
            return None;
        }
        let (head, rest) = self.data.split_at(n);
        self.data = rest;
        Some(head)
    }

    fn array<const N: usize>(&mut self) -> Option<[u8; N]> {
        self.take(N)?.try_into().ok()
    }

    fn u8(&mut self) -> Option<u8> {
        self.array::<1>().map(|b| b[0])
    }

    fn u16(&mut self) -> Option<u16> {
        self.array().map(u16::from_le_bytes)
    }

    fn u32(&mut self) -> Option<u32> {
        self.array().map(u32::from_le_bytes)
    }

    fn i64(&mut self) -> Option<i64> {
        self.array().map(i64::from_le_bytes)
    }
}

/// Parse raw `AuditRecord` account data.
///
/// The leading discriminator is skipped unchecked. Returns `None` on any
/// structural problem: short buffer, name running past the end, or an
/// unrepresentable timestamp. Invalid UTF-8 in the name is replaced, and
/// only a verified byte of exactly 1 counts as verified. Bytes after the
/// verified flag (the bump) are ignored.
pub fn decode_audit_record(data: &[u8]) -> Option<OnChainAuditRecord> {
    let mut reader = Reader { data };
    reader.take(DISCRIMINATOR_LEN)?;

    let auditor = Pubkey::new_from_array(reader.array()?);
    let audited_at = DateTime::<Utc>::from_timestamp(reader.i64()?, 0)?;

    let name_len = usize::try_from(reader.u32()?).ok()?;
    let program_name = String::from_utf8_lossy(reader.take(name_len)?).into_owned();

    let audit_hash = hex::encode(reader.array::<HASH_LEN>()?);
    let security_score = reader.u8()?;
    let total_issues = reader.u16()?;
    let critical_count = reader.u8()?;
    let high_count = reader.u8()?;
    let medium_count = reader.u8()?;
    let verified = reader.u8()? == 1;

    Some(OnChainAuditRecord {
        auditor,
        audited_at,
        program_name,
        audit_hash,
        security_score,
        total_issues,
        critical_count,
        high_count,
        medium_count,
        verified,
    })
}
