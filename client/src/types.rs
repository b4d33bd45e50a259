//! Audit result shapes as produced by the analysis service
//!
//! Field declaration order is the JSON key order, and therefore part of the
//! content hash. Do not reorder fields.

use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum Severity {
    Critical,
    High,
    Medium,
    Safe,
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct Vulnerability {
    pub id: String,
    pub severity: Severity,
    pub title: String,
    pub description: String,
    pub line: u32,
    pub category: String,
    pub original_code: String,
    pub fixed_code: String,
    pub explanation: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub compute_impact: Option<String>,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct AuditSummary {
    pub critical: u32,
    pub high: u32,
    pub medium: u32,
    pub safe: u32,
    pub total_issues: u32,
    pub security_score: u32,
    pub compute_optimizations: u32,
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct GasOptimization {
    pub id: String,
    pub title: String,
    pub description: String,
    pub estimated_saving: String,
    pub suggestion: String,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct AuditResult {
    pub vulnerabilities: Vec<Vulnerability>,
    pub summary: AuditSummary,
    pub gas_optimizations: Vec<GasOptimization>,
}
