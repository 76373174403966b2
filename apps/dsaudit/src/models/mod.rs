//! Shared data models for analysis, validation, sync, and quality outputs.

pub mod report;
pub mod token;

use chrono::{DateTime, Utc};
use serde::Serialize;

pub use token::{DesignToken, TokenCategory};

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
/// Presence of the four expected file kinds in a component directory.
pub struct StructureReport {
    pub has_styles: bool,
    pub has_tests: bool,
    pub has_stories: bool,
    pub has_index: bool,
}

impl StructureReport {
    pub fn flags(&self) -> [bool; 4] {
        [self.has_styles, self.has_tests, self.has_stories, self.has_index]
    }

    /// Labels for the kinds a component is expected to ship but lacks.
    /// `index.ts` is reported in the structure but not listed here.
    pub fn missing(&self) -> Vec<&'static str> {
        let mut out = Vec::new();
        if !self.has_styles {
            out.push("styles");
        }
        if !self.has_tests {
            out.push("tests");
        }
        if !self.has_stories {
            out.push("stories");
        }
        out
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
/// A single file found directly inside a component directory.
pub struct FileEntry {
    pub name: String,
    /// Suffix including the leading dot, or empty.
    pub extension: String,
    pub size: u64,
}

#[derive(Debug, Clone, Serialize)]
/// Comparison result between external tokens and a component stylesheet.
pub struct SyncStatus {
    pub component_name: String,
    pub is_synced: bool,
    pub last_external_update: Option<DateTime<Utc>>,
    pub last_local_update: Option<DateTime<Utc>>,
    pub differences: Vec<String>,
}

impl SyncStatus {
    pub fn needs_update(&self) -> bool {
        !self.is_synced && !self.differences.is_empty()
    }
}

#[derive(Debug, Clone, PartialEq, Serialize)]
/// Per-component quality signals feeding the dashboard.
pub struct ComponentQuality {
    pub name: String,
    /// Share of expected files present, 0..=100.
    pub completeness_score: f64,
    pub design_compliance: bool,
    pub test_coverage: bool,
    pub documentation: bool,
    pub accessibility_ready: bool,
}

impl ComponentQuality {
    /// Mean of the completeness score and the four flags mapped to 0/100.
    pub fn overall_score(&self) -> f64 {
        let pct = |b: bool| if b { 100.0 } else { 0.0 };
        let scores = [
            self.completeness_score.clamp(0.0, 100.0),
            pct(self.design_compliance),
            pct(self.test_coverage),
            pct(self.documentation),
            pct(self.accessibility_ready),
        ];
        scores.iter().sum::<f64>() / scores.len() as f64
    }
}

/// Round to two decimal places for report output. Exact ties go to the
/// even neighbour, so 3.125 reports as 3.12.
pub fn round2(v: f64) -> f64 {
    (v * 100.0).round_ties_even() / 100.0
}
