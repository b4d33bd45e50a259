use std::fmt;
use std::str::FromStr;

use anchor_lang::prelude::Pubkey;

use crate::error::{ClientError, Result};

const EXPLORER_BASE: &str = "https://explorer.solana.com";

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Cluster {
    #[default]
    Devnet,
    Testnet,
    MainnetBeta,
    Localnet,
}

impl Cluster {
    pub fn as_str(&self) -> &'static str {
        match self {
            Cluster::Devnet => "devnet",
            Cluster::Testnet => "testnet",
            Cluster::MainnetBeta => "mainnet-beta",
            Cluster::Localnet => "localnet",
        }
    }

    /// Value of the explorer's `cluster` query parameter
    fn explorer_param(&self) -> &'static str {
        match self {
            Cluster::Localnet => "custom",
            other => other.as_str(),
        }
    }
}

impl fmt::Display for Cluster {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Cluster {
    type Err = ClientError;

    fn from_str(s: &str) -> Result<Self> {
        match s.trim().to_ascii_lowercase().as_str() {
            "devnet" => Ok(Cluster::Devnet),
            "testnet" => Ok(Cluster::Testnet),
            "mainnet" | "mainnet-beta" => Ok(Cluster::MainnetBeta),
            "localnet" | "localhost" => Ok(Cluster::Localnet),
            _ => Err(ClientError::InvalidCluster(s.to_string())),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ExplorerKind {
    Tx,
    Account,
}

impl ExplorerKind {
    fn path(&self) -> &'static str {
        match self {
            ExplorerKind::Tx => "tx",
            ExplorerKind::Account => "account",
        }
    }
}

/// Where audit records live
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct VerifierConfig {
    pub program_id: Pubkey,
    pub cluster: Cluster,
}

impl Default for VerifierConfig {
    fn default() -> Self {
        Self {
            program_id: audit_verifier::ID,
            cluster: Cluster::Devnet,
        }
    }
}

impl VerifierConfig {
    pub const PROGRAM_ID_ENV: &'static str = "AUDIT_VERIFIER_PROGRAM_ID";
    pub const CLUSTER_ENV: &'static str = "AUDIT_VERIFIER_CLUSTER";

    /// Defaults overridden by `AUDIT_VERIFIER_PROGRAM_ID` / `AUDIT_VERIFIER_CLUSTER`.
    pub fn from_env() -> Result<Self> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Result<Self> {
        let mut config = Self::default();
        if let Some(raw) = lookup(Self::PROGRAM_ID_ENV) {
            config.program_id = Pubkey::from_str(raw.trim())
                .map_err(|e| ClientError::InvalidPubkey(format!("{raw}: {e}")))?;
        }
        if let Some(raw) = lookup(Self::CLUSTER_ENV) {
            config.cluster = raw.parse()?;
        }
        Ok(config)
    }

    /// `https://explorer.solana.com/{tx|account}/{id}?cluster={cluster}`
    pub fn explorer_url(&self, id: &str, kind: ExplorerKind) -> String {
        format!(
            "{EXPLORER_BASE}/{}/{id}?cluster={}",
            kind.path(),
            self.cluster.explorer_param()
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    fn lookup(pairs: &[(&str, &str)]) -> impl Fn(&str) -> Option<String> {
        let map: HashMap<String, String> = pairs
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
        move |key: &str| map.get(key).cloned()
    }

    #[test]
    fn defaults_to_devnet_and_program_id() {
        let config = VerifierConfig::from_lookup(lookup(&[])).unwrap();
        assert_eq!(config, VerifierConfig::default());
        assert_eq!(config.program_id, audit_verifier::ID);
        assert_eq!(config.cluster, Cluster::Devnet);
    }

    #[test]
    fn env_overrides() {
        let program_id = Pubkey::new_unique();
        let config = VerifierConfig::from_lookup(lookup(&[
            (VerifierConfig::PROGRAM_ID_ENV, program_id.to_string().as_str()),
            (VerifierConfig::CLUSTER_ENV, "Mainnet-Beta"),
        ]))
        .unwrap();
        assert_eq!(config.program_id, program_id);
        assert_eq!(config.cluster, Cluster::MainnetBeta);
    }

    #[test]
    fn bad_env_values_are_errors() {
        let err = VerifierConfig::from_lookup(lookup(&[(VerifierConfig::PROGRAM_ID_ENV, "not-a-key")]))
            .unwrap_err();
        assert!(matches!(err, ClientError::InvalidPubkey(_)));

        let err = VerifierConfig::from_lookup(lookup(&[(VerifierConfig::CLUSTER_ENV, "moonnet")]))
            .unwrap_err();
        assert!(matches!(err, ClientError::InvalidCluster(_)));
    }

    #[test]
    fn explorer_urls() {
        let config = VerifierConfig::default();
        assert_eq!(
            config.explorer_url("5xSig", ExplorerKind::Tx),
            "https://explorer.solana.com/tx/5xSig?cluster=devnet"
        );

        let config = VerifierConfig {
            cluster: Cluster::Localnet,
            ..VerifierConfig::default()
        };
        assert_eq!(
            config.explorer_url("Addr1", ExplorerKind::Account),
            "https://explorer.solana.com/account/Addr1?cluster=custom"
        );
    }
}
