//! Sync checks between an external design token source and component styles.
//!
//! A `TokenSource` supplies the tokens a component is expected to use. The
//! checker looks for each color/spacing token value as a literal substring of
//! the stylesheet; tokens of other categories are not compared.

use crate::error::AuditError;
use crate::models::report::{SyncAction, SyncComponentEntry, SyncReport, SyncSummary};
use crate::models::{round2, DesignToken, SyncStatus, TokenCategory};
use chrono::{DateTime, Utc};
use serde::Deserialize;
use std::collections::HashMap;
use std::fs;
use std::path::Path;
use tracing::debug;

/// Differences listed per component in a sync report.
const REPORT_DIFF_LIMIT: usize = 3;

pub const UPDATE_ACTION: &str = "Update the component to match the latest external design";

/// External provider of per-component design tokens.
pub trait TokenSource {
    /// Tokens for `component`, in source order. Unknown components yield none.
    fn component_tokens(&self, component: &str) -> Vec<DesignToken>;

    fn last_modified(&self, component: &str) -> Option<DateTime<Utc>>;
}

#[derive(Debug, Clone, Default, Deserialize)]
/// Tokens and timestamp recorded for one component.
pub struct ComponentTokens {
    #[serde(default)]
    pub tokens: Vec<DesignToken>,
    #[serde(default)]
    pub last_modified: Option<DateTime<Utc>>,
}

/// Canned data for development without a design API.
pub struct MockTokenSource {
    data: HashMap<String, ComponentTokens>,
}

impl MockTokenSource {
    pub fn new() -> Self {
        let now = Utc::now();
        let mut data = HashMap::new();
        data.insert(
            "Button".to_string(),
            ComponentTokens {
                tokens: vec![
                    DesignToken::new("primary-color", "#0017C1", TokenCategory::Color),
                    DesignToken::new("padding", "8px", TokenCategory::Spacing),
                    DesignToken::new("border-radius", "4px", TokenCategory::Spacing),
                ],
                last_modified: Some(now),
            },
        );
        data.insert(
            "Checkbox".to_string(),
            ComponentTokens {
                tokens: vec![
                    DesignToken::new("check-color", "#0017C1", TokenCategory::Color),
                    DesignToken::new("size", "16px", TokenCategory::Spacing),
                ],
                last_modified: Some(now),
            },
        );
        MockTokenSource { data }
    }
}

impl Default for MockTokenSource {
    fn default() -> Self {
        Self::new()
    }
}

impl TokenSource for MockTokenSource {
    fn component_tokens(&self, component: &str) -> Vec<DesignToken> {
        self.data
            .get(component)
            .map(|c| c.tokens.clone())
            .unwrap_or_default()
    }

    fn last_modified(&self, component: &str) -> Option<DateTime<Utc>> {
        self.data.get(component).and_then(|c| c.last_modified)
    }
}

#[derive(Debug, Default, Deserialize)]
struct TokenFile {
    #[serde(default)]
    components: HashMap<String, ComponentTokens>,
}

/// Token source backed by an exported TOML, JSON, or YAML file.
///
/// ```toml
/// [components.Button]
/// last_modified = "2025-01-10T09:00:00Z"
/// tokens = [{ name = "primary-color", value = "#0017C1", category = "color" }]
/// ```
pub struct FileTokenSource {
    data: HashMap<String, ComponentTokens>,
}

impl FileTokenSource {
    pub fn load(path: &Path) -> Result<Self, AuditError> {
        let s = fs::read_to_string(path).map_err(|e| AuditError::io(path, e))?;
        let ext = path
            .extension()
            .map(|e| e.to_string_lossy().to_ascii_lowercase())
            .unwrap_or_default();
        let bad = |e: String| {
            AuditError::Config(format!("invalid token file {}: {}", path.display(), e))
        };
        let file: TokenFile = match ext.as_str() {
            "json" => serde_json::from_str(&s).map_err(|e| bad(e.to_string()))?,
            "yaml" | "yml" => serde_yaml::from_str(&s).map_err(|e| bad(e.to_string()))?,
            _ => toml::from_str(&s).map_err(|e| bad(e.to_string()))?,
        };
        debug!(
            path = %path.display(),
            components = file.components.len(),
            "loaded external tokens"
        );
        Ok(FileTokenSource {
            data: file.components,
        })
    }
}

impl TokenSource for FileTokenSource {
    fn component_tokens(&self, component: &str) -> Vec<DesignToken> {
        self.data
            .get(component)
            .map(|c| c.tokens.clone())
            .unwrap_or_default()
    }

    fn last_modified(&self, component: &str) -> Option<DateTime<Utc>> {
        self.data.get(component).and_then(|c| c.last_modified)
    }
}

/// Source chosen at startup: a configured token file or the built-in mock.
pub enum AnySource {
    Mock(MockTokenSource),
    File(FileTokenSource),
}

impl TokenSource for AnySource {
    fn component_tokens(&self, component: &str) -> Vec<DesignToken> {
        match self {
            AnySource::Mock(s) => s.component_tokens(component),
            AnySource::File(s) => s.component_tokens(component),
        }
    }

    fn last_modified(&self, component: &str) -> Option<DateTime<Utc>> {
        match self {
            AnySource::Mock(s) => s.last_modified(component),
            AnySource::File(s) => s.last_modified(component),
        }
    }
}

/// Compares external tokens with component stylesheets.
pub struct SyncChecker<S: TokenSource> {
    source: S,
}

impl<S: TokenSource> SyncChecker<S> {
    pub fn new(source: S) -> Self {
        SyncChecker { source }
    }

    /// Check one component. `style` is the stylesheet text; `component_dir`
    /// is only consulted for the local stylesheet's modification time.
    pub fn check_sync_status(&self, component: &str, style: &str, component_dir: &Path) -> SyncStatus {
        let tokens = self.source.component_tokens(component);
        let last_external_update = self.source.last_modified(component);
        let last_local_update = fs::metadata(component_dir.join(format!("{}.css", component)))
            .and_then(|m| m.modified())
            .ok()
            .map(DateTime::<Utc>::from);

        let differences = detect_differences(&tokens, style);
        debug!(
            component,
            tokens = tokens.len(),
            differences = differences.len(),
            "sync checked"
        );
        SyncStatus {
            component_name: component.to_string(),
            is_synced: differences.is_empty(),
            last_external_update,
            last_local_update,
            differences,
        }
    }

    pub fn generate_sync_report(&self, statuses: &[SyncStatus]) -> SyncReport {
        generate_sync_report(statuses)
    }
}

fn detect_differences(tokens: &[DesignToken], style: &str) -> Vec<String> {
    tokens
        .iter()
        .filter(|t| !style.contains(t.value.as_str()))
        // Typography and other categories are not compared yet.
        .filter(|t| matches!(t.category, TokenCategory::Color | TokenCategory::Spacing))
        .map(|t| {
            format!(
                "external {} '{}' ({}) not found in style",
                t.category.as_str(),
                t.name,
                t.value
            )
        })
        .collect()
}

/// Summarize a set of sync statuses. Per-component entries carry only the
/// first few differences; `action_required` carries every difference.
pub fn generate_sync_report(statuses: &[SyncStatus]) -> SyncReport {
    let total = statuses.len();
    let synced = statuses.iter().filter(|s| s.is_synced).count();
    let sync_percentage = if total > 0 {
        round2(synced as f64 / total as f64 * 100.0)
    } else {
        0.0
    };

    let components = statuses
        .iter()
        .map(|s| SyncComponentEntry {
            name: s.component_name.clone(),
            is_synced: s.is_synced,
            differences_count: s.differences.len(),
            differences: s.differences.iter().take(REPORT_DIFF_LIMIT).cloned().collect(),
        })
        .collect();

    let action_required = statuses
        .iter()
        .filter(|s| s.needs_update())
        .map(|s| SyncAction {
            component: s.component_name.clone(),
            action: UPDATE_ACTION.to_string(),
            differences: s.differences.clone(),
        })
        .collect();

    SyncReport {
        summary: SyncSummary {
            total_components: total,
            synced,
            out_of_sync: total - synced,
            sync_percentage,
        },
        components,
        action_required,
    }
}
