//! Configuration discovery and effective settings resolution.
//!
//! dsaudit reads `dsaudit.toml|yaml|yml` from the repository root (or closest
//! ancestor) and merges it with CLI flags to produce an `Effective` config.
//! Defaults:
//! - `components_dir`: `packages/components/src/components`
//! - `output`: `human`
//! - `tokens.colors` / `tokens.spacing`: the built-in palette and scale
//! - `external.tokens`: unset (the mock token source is used)
//!
//! Overrides precedence: CLI > config file > defaults.

use serde::Deserialize;
use std::collections::{BTreeMap, BTreeSet};
use std::fs;
use std::path::{Path, PathBuf};
use tracing::warn;

pub const DEFAULT_COMPONENTS_DIR: &str = "packages/components/src/components";

const CONFIG_FILES: [&str; 3] = ["dsaudit.toml", "dsaudit.yaml", "dsaudit.yml"];

const DEFAULT_COLORS: [(&str, &str); 10] = [
    ("primary", "#0017C1"),
    ("text.primary", "#1A1A1C"),
    ("text.secondary", "#595959"),
    ("text.disabled", "#B8B8B8"),
    ("background.primary", "#FFFFFF"),
    ("background.secondary", "#F5F5F5"),
    ("background.tertiary", "#EBEBEB"),
    ("border.default", "#D9D9D9"),
    ("border.focused", "#0017C1"),
    ("error", "#D32F2F"),
];

const DEFAULT_SPACING: [(&str, &str); 5] = [
    ("xs", "4px"),
    ("sm", "8px"),
    ("md", "16px"),
    ("lg", "24px"),
    ("xl", "32px"),
];

#[derive(Debug, Default, Deserialize, Clone)]
/// Approved token catalog under `[tokens]`.
pub struct TokensCfg {
    pub colors: Option<BTreeMap<String, String>>,
    pub spacing: Option<BTreeMap<String, String>>,
}

#[derive(Debug, Default, Deserialize, Clone)]
/// External design source under `[external]`.
pub struct ExternalCfg {
    /// Token export file, relative to the repository root.
    pub tokens: Option<String>,
}

#[derive(Debug, Default, Deserialize, Clone)]
/// Root configuration loaded from `dsaudit.toml|yaml`.
pub struct AuditConfig {
    pub components_dir: Option<String>,
    pub output: Option<String>,
    #[serde(default)]
    pub tokens: Option<TokensCfg>,
    #[serde(default)]
    pub external: Option<ExternalCfg>,
}

#[derive(Debug, Clone)]
/// Fully-resolved configuration used by commands after applying precedence.
pub struct Effective {
    pub repo_root: PathBuf,
    pub components_dir: PathBuf,
    pub output: String,
    pub colors: BTreeMap<String, String>,
    pub spacing: BTreeMap<String, String>,
    pub external_tokens: Option<PathBuf>,
    pub config_found: bool,
}

impl Effective {
    /// Approved color values, uppercased.
    pub fn approved_colors(&self) -> BTreeSet<String> {
        self.colors.values().map(|c| c.to_ascii_uppercase()).collect()
    }

    pub fn approved_spacing(&self) -> BTreeSet<String> {
        self.spacing.values().cloned().collect()
    }
}

fn default_map(pairs: &[(&str, &str)]) -> BTreeMap<String, String> {
    pairs
        .iter()
        .map(|(k, v)| (k.to_string(), v.to_string()))
        .collect()
}

/// Walk upward from `start` to detect the repository root.
///
/// Stops when a `dsaudit.toml|yaml|yml` or a `.git` directory is found.
pub fn detect_repo_root(start: &Path) -> PathBuf {
    let mut cur = start;
    loop {
        if CONFIG_FILES.iter().any(|f| cur.join(f).exists()) || cur.join(".git").exists() {
            return cur.to_path_buf();
        }
        match cur.parent() {
            Some(p) => cur = p,
            None => return start.to_path_buf(),
        }
    }
}

/// Load `AuditConfig` from `dsaudit.toml` or `dsaudit.yaml|yml` if present.
///
/// A file that cannot be read or parsed is reported and treated as absent.
pub fn load_config(root: &Path) -> Option<AuditConfig> {
    for name in CONFIG_FILES {
        let p = root.join(name);
        if !p.exists() {
            continue;
        }
        let s = match fs::read_to_string(&p) {
            Ok(s) => s,
            Err(e) => {
                warn!(path = %p.display(), error = %e, "cannot read config");
                return None;
            }
        };
        let parsed = if name.ends_with(".toml") {
            toml::from_str::<AuditConfig>(&s).map_err(|e| e.to_string())
        } else {
            serde_yaml::from_str::<AuditConfig>(&s).map_err(|e| e.to_string())
        };
        return match parsed {
            Ok(cfg) => Some(cfg),
            Err(e) => {
                warn!(path = %p.display(), error = %e, "invalid config; using defaults");
                None
            }
        };
    }
    None
}

/// Resolve `Effective` by merging CLI flags, discovered config, and defaults.
pub fn resolve_effective(
    cli_repo_root: Option<&str>,
    cli_components_dir: Option<&str>,
    cli_output: Option<&str>,
    cli_tokens: Option<&str>,
) -> Effective {
    let start = PathBuf::from(cli_repo_root.unwrap_or("."));
    let repo_root = detect_repo_root(&start);
    let loaded = load_config(&repo_root);
    let config_found = loaded.is_some();
    let cfg = loaded.unwrap_or_default();

    let components_dir = repo_root.join(
        cli_components_dir
            .map(|s| s.to_string())
            .or(cfg.components_dir)
            .unwrap_or_else(|| DEFAULT_COMPONENTS_DIR.to_string()),
    );

    let output = cli_output
        .map(|s| s.to_string())
        .or(cfg.output)
        .unwrap_or_else(|| "human".to_string());

    let colors = cfg
        .tokens
        .as_ref()
        .and_then(|t| t.colors.clone())
        .unwrap_or_else(|| default_map(&DEFAULT_COLORS));
    let spacing = cfg
        .tokens
        .as_ref()
        .and_then(|t| t.spacing.clone())
        .unwrap_or_else(|| default_map(&DEFAULT_SPACING));

    let external_tokens = cli_tokens
        .map(|s| s.to_string())
        .or_else(|| cfg.external.as_ref().and_then(|e| e.tokens.clone()))
        .map(|p| repo_root.join(p));

    Effective {
        repo_root,
        components_dir,
        output,
        colors,
        spacing,
        external_tokens,
        config_found,
    }
}
