//! Publish preparation and on-chain verification
//!
//! [`AuditVerifier`] owns no network client. Reading accounts goes through an
//! injected [`AccountSource`] so the transport, its timeouts and retries stay
//! with the caller; signing and sending the prepared instruction does too.

use std::collections::HashMap;

use anchor_lang::prelude::Pubkey;
use anchor_lang::solana_program::instruction::Instruction;
use anchor_lang::solana_program::system_program;
use anchor_lang::ToAccountMetas;
use tracing::{debug, info};

use crate::address::derive_audit_address;
use crate::codec::{decode_audit_record, encode_publish_audit, OnChainAuditRecord, OnChainSummary};
use crate::config::{ExplorerKind, VerifierConfig};
use crate::error::Result;
use crate::hasher::hash_audit_result;
use crate::types::AuditResult;

/// Ledger read access.
pub trait AccountSource {
    /// Raw account data at `address`, or `None` if no account exists.
    fn account_data(&self, address: &Pubkey) -> Result<Option<Vec<u8>>>;
}

/// Fixed set of accounts, for tests and offline verification.
#[derive(Debug, Clone, Default)]
pub struct InMemoryAccounts {
    accounts: HashMap<Pubkey, Vec<u8>>,
}

impl InMemoryAccounts {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn insert(&mut self, address: Pubkey, data: Vec<u8>) {
        self.accounts.insert(address, data);
    }
}

impl AccountSource for InMemoryAccounts {
    fn account_data(&self, address: &Pubkey) -> Result<Option<Vec<u8>>> {
        Ok(self.accounts.get(address).cloned())
    }
}

/// Everything needed to submit a `publish_audit` transaction.
#[derive(Debug, Clone)]
pub struct PublishPlan {
    pub audit_hash: [u8; 32],
    pub audit_address: Pubkey,
    pub bump: u8,
    pub instruction: Instruction,
}

impl PublishPlan {
    pub fn audit_hash_hex(&self) -> String {
        hex::encode(self.audit_hash)
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct VerificationStatus {
    pub is_verified: bool,
    pub record: Option<OnChainAuditRecord>,
    pub pda_address: Pubkey,
    pub explorer_url: String,
}

pub struct AuditVerifier<S> {
    config: VerifierConfig,
    source: S,
}

impl<S: AccountSource> AuditVerifier<S> {
    pub fn new(config: VerifierConfig, source: S) -> Self {
        Self { config, source }
    }

    pub fn config(&self) -> &VerifierConfig {
        &self.config
    }

    /// Record PDA for `owner` under the configured program.
    pub fn audit_address(&self, owner: &Pubkey, program_name: &str) -> Result<(Pubkey, u8)> {
        derive_audit_address(&self.config.program_id, owner, program_name)
    }

    /// Hash `result`, derive the record address and build the
    /// `publish_audit` instruction with `owner` as auditor and payer.
    pub fn prepare_publish(
        &self,
        owner: &Pubkey,
        program_name: &str,
        result: &AuditResult,
    ) -> Result<PublishPlan> {
        let audit_hash = hash_audit_result(result)?;
        let summary = OnChainSummary::try_from(&result.summary)?;
        let (audit_address, bump) = self.audit_address(owner, program_name)?;
        let data = encode_publish_audit(program_name, &audit_hash, &summary)?;

        let accounts = audit_verifier::accounts::PublishAudit {
            audit_record: audit_address,
            auditor: *owner,
            system_program: system_program::ID,
        };
        let instruction = Instruction::new_with_bytes(
            self.config.program_id,
            &data,
            accounts.to_account_metas(None),
        );

        info!(
            program_name,
            address = %audit_address,
            hash = %hex::encode(audit_hash),
            score = summary.security_score,
            "prepared audit publish"
        );

        Ok(PublishPlan {
            audit_hash,
            audit_address,
            bump,
            instruction,
        })
    }

    /// Look up the record for `(owner, program_name)`.
    ///
    /// A missing account and undecodable bytes both mean "not verified";
    /// only failures of the account source itself are errors.
    pub fn check_audit(&self, owner: &Pubkey, program_name: &str) -> Result<VerificationStatus> {
        let (pda_address, _) = self.audit_address(owner, program_name)?;
        let explorer_url = self
            .config
            .explorer_url(&pda_address.to_string(), ExplorerKind::Account);

        let record = match self.source.account_data(&pda_address)? {
            Some(data) => {
                let record = decode_audit_record(&data);
                if record.is_none() {
                    debug!(address = %pda_address, len = data.len(), "account data is not an audit record");
                }
                record
            }
            None => {
                debug!(address = %pda_address, "no audit record account");
                None
            }
        };

        let is_verified = record.as_ref().is_some_and(|r| r.verified);
        info!(program_name, address = %pda_address, is_verified, "checked audit record");

        Ok(VerificationStatus {
            is_verified,
            record,
            pda_address,
            explorer_url,
        })
    }

    /// Whether `result` is the exact audit fingerprinted in `record`.
    pub fn verify_content(&self, record: &OnChainAuditRecord, result: &AuditResult) -> Result<bool> {
        let digest = hash_audit_result(result)?;
        Ok(hex::encode(digest) == record.audit_hash)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::AuditSummary;

    fn result(score: u32) -> AuditResult {
        AuditResult {
            summary: AuditSummary {
                critical: 2,
                high: 1,
                medium: 1,
                total_issues: 4,
                security_score: score,
                ..Default::default()
            },
            ..Default::default()
        }
    }

    #[test]
    fn prepare_publish_targets_derived_address() {
        let verifier = AuditVerifier::new(VerifierConfig::default(), InMemoryAccounts::new());
        let owner = Pubkey::new_unique();

        let plan = verifier.prepare_publish(&owner, "vulnerable_vault", &result(25)).unwrap();
        let (address, bump) = verifier.audit_address(&owner, "vulnerable_vault").unwrap();

        assert_eq!(plan.audit_address, address);
        assert_eq!(plan.bump, bump);
        assert_eq!(plan.audit_hash, hash_audit_result(&result(25)).unwrap());
        assert_eq!(plan.instruction.program_id, audit_verifier::ID);
        assert_eq!(plan.instruction.data.len(), 8 + 4 + 16 + 32 + 1 + 2 + 1 + 1 + 1);

        let metas = &plan.instruction.accounts;
        assert_eq!(metas.len(), 3);
        assert_eq!(metas[0].pubkey, address);
        assert!(metas[0].is_writable && !metas[0].is_signer);
        assert_eq!(metas[1].pubkey, owner);
        assert!(metas[1].is_writable && metas[1].is_signer);
        assert_eq!(metas[2].pubkey, system_program::ID);
    }

    #[test]
    fn prepare_publish_rejects_out_of_range_summary() {
        let verifier = AuditVerifier::new(VerifierConfig::default(), InMemoryAccounts::new());
        assert!(verifier
            .prepare_publish(&Pubkey::new_unique(), "vault", &result(150))
            .is_err());
    }

    #[test]
    fn missing_account_is_unverified() {
        let verifier = AuditVerifier::new(VerifierConfig::default(), InMemoryAccounts::new());
        let status = verifier.check_audit(&Pubkey::new_unique(), "vault").unwrap();
        assert!(!status.is_verified);
        assert!(status.record.is_none());
        assert!(status
            .explorer_url
            .ends_with(&format!("/account/{}?cluster=devnet", status.pda_address)));
    }

    #[test]
    fn garbage_account_is_unverified() {
        let owner = Pubkey::new_unique();
        let config = VerifierConfig::default();
        let (address, _) = derive_audit_address(&config.program_id, &owner, "vault").unwrap();

        let mut accounts = InMemoryAccounts::new();
        accounts.insert(address, vec![0xFF; 20]);

        let verifier = AuditVerifier::new(config, accounts);
        let status = verifier.check_audit(&owner, "vault").unwrap();
        assert!(!status.is_verified);
        assert!(status.record.is_none());
        assert_eq!(status.pda_address, address);
    }

    struct FailingSource;

    impl AccountSource for FailingSource {
        fn account_data(&self, _address: &Pubkey) -> Result<Option<Vec<u8>>> {
            Err(crate::error::ClientError::AccountSource("connection refused".into()))
        }
    }

    #[test]
    fn source_errors_propagate() {
        let verifier = AuditVerifier::new(VerifierConfig::default(), FailingSource);
        let err = verifier.check_audit(&Pubkey::new_unique(), "vault").unwrap_err();
        assert!(err.to_string().contains("connection refused"));
    }
}
