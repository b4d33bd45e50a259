//! Off-chain client for the audit verifier program
//!
//! Turns an [`AuditResult`] into something publishable on Solana and reads it
//! back:
//!   - [`hasher`] fingerprints the full result with SHA-256
//!   - [`address`] derives the record PDA from owner + program name
//!   - [`codec`] encodes `publish_audit` instruction data and decodes
//!     `AuditRecord` account bytes
//!   - [`verify`] ties those together behind an injected ledger reader
//!
//! Everything except [`verify::AccountSource`] implementations is pure and
//! synchronous; fetching accounts and submitting transactions is left to the
//! caller.

pub mod address;
pub mod codec;
pub mod config;
pub mod error;
pub mod hasher;
pub mod types;
pub mod verify;

pub use address::derive_audit_address;
pub use audit_verifier::seeds::name_seed;
pub use codec::{decode_audit_record, encode_publish_audit, OnChainAuditRecord, OnChainSummary};
pub use config::{Cluster, ExplorerKind, VerifierConfig};
pub use error::{ClientError, Result};
pub use hasher::{hash_audit_result, hash_audit_result_hex};
pub use types::{AuditResult, AuditSummary, GasOptimization, Severity, Vulnerability};
pub use verify::{AccountSource, AuditVerifier, InMemoryAccounts, PublishPlan, VerificationStatus};
