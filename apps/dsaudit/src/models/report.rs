//! Serializable result shapes returned by the operations.

use super::{FileEntry, StructureReport};
use chrono::{DateTime, Utc};
use serde::Serialize;
use std::collections::BTreeMap;

#[derive(Debug, Serialize)]
pub struct ComponentList {
    pub components: Vec<String>,
    pub total: usize,
}

#[derive(Debug, Serialize)]
pub struct ComponentInfo {
    pub name: String,
    /// Component directory relative to the repository root.
    pub path: String,
    pub files: Vec<FileEntry>,
}

#[derive(Debug, Serialize)]
pub struct ComponentAnalysis {
    pub name: String,
    pub structure: StructureReport,
    pub missing: Vec<&'static str>,
}

#[derive(Debug, Serialize)]
/// Validation outcome for one block of styling text.
pub struct ComplianceResult {
    pub component: String,
    pub compliant: bool,
    pub issues: Vec<String>,
}

#[derive(Debug, Serialize)]
pub struct SyncSummary {
    pub total_components: usize,
    pub synced: usize,
    pub out_of_sync: usize,
    pub sync_percentage: f64,
}

#[derive(Debug, Serialize)]
pub struct SyncComponentEntry {
    pub name: String,
    pub is_synced: bool,
    pub differences_count: usize,
    /// First few differences only; see `differences_count`.
    pub differences: Vec<String>,
}

#[derive(Debug, Serialize)]
pub struct SyncAction {
    pub component: String,
    pub action: String,
    pub differences: Vec<String>,
}

#[derive(Debug, Serialize)]
pub struct SyncReport {
    pub summary: SyncSummary,
    pub components: Vec<SyncComponentEntry>,
    pub action_required: Vec<SyncAction>,
}

#[derive(Debug, Serialize)]
/// Sync result for a single component.
pub struct ComponentSync {
    pub component: String,
    pub is_synced: bool,
    pub needs_update: bool,
    pub last_external_update: Option<DateTime<Utc>>,
    pub last_local_update: Option<DateTime<Utc>>,
    pub differences: Vec<String>,
    pub recommendation: String,
}

#[derive(Debug, Serialize)]
pub struct DashboardSummary {
    pub total_components: usize,
    pub average_quality_score: f64,
    pub fully_compliant: usize,
    pub needs_attention: usize,
}

#[derive(Debug, Serialize)]
pub struct DashboardEntry {
    pub name: String,
    pub overall_score: f64,
    pub completeness: f64,
    pub design_compliance: bool,
    pub test_coverage: bool,
    pub documentation: bool,
}

#[derive(Debug, Serialize)]
pub struct Dashboard {
    pub summary: DashboardSummary,
    pub components: Vec<DashboardEntry>,
    pub recommendations: Vec<String>,
}

#[derive(Debug, Serialize)]
/// Approved palette and spacing scale as configured.
pub struct TokenCatalog {
    pub colors: BTreeMap<String, String>,
    pub spacing: BTreeMap<String, String>,
}
