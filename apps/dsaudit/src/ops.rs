//! Operations exposed to callers: list, info, analyze, validate, sync,
//! dashboard, and tokens.
//!
//! Each operation reads what it needs from the components directory and
//! returns a serializable value. Failures come back as `AuditError` values;
//! nothing here writes to disk.

use crate::analyze::{Analyzer, FileInspector, StructureAnalyzer};
use crate::config::Effective;
use crate::error::AuditError;
use crate::models::report::{
    ComplianceResult, ComponentAnalysis, ComponentInfo, ComponentList, ComponentSync, Dashboard,
    SyncReport, TokenCatalog,
};
use crate::quality::QualityAggregator;
use crate::sync::{AnySource, FileTokenSource, MockTokenSource, SyncChecker, TokenSource, UPDATE_ACTION};
use crate::validate::{DesignTokenValidator, Validator};
use glob::{glob, Pattern};
use std::collections::BTreeMap;
use std::fs;
use std::path::{Path, PathBuf};
use tracing::{debug, info, warn};

pub const IN_SYNC: &str = "In sync with the external design";

/// Wires the analyzers, validator, and sync checker over one components root.
pub struct Auditor<S: TokenSource> {
    repo_root: PathBuf,
    components_dir: PathBuf,
    colors: BTreeMap<String, String>,
    spacing: BTreeMap<String, String>,
    validator: DesignTokenValidator,
    sync: SyncChecker<S>,
    quality: QualityAggregator,
}

impl Auditor<AnySource> {
    /// Build from resolved config, loading the external token file if one is
    /// configured and falling back to the mock source otherwise.
    pub fn from_effective(eff: &Effective) -> Result<Self, AuditError> {
        let source = match eff.external_tokens.as_ref() {
            Some(path) => AnySource::File(FileTokenSource::load(path)?),
            None => {
                debug!("no external token file configured; using mock source");
                AnySource::Mock(MockTokenSource::new())
            }
        };
        Ok(Auditor::new(eff, source))
    }

    /// Build for commands that never consult the external source. The token
    /// file is not read, so a broken `[external].tokens` path does not fail them.
    pub fn offline(eff: &Effective) -> Self {
        Auditor::new(eff, AnySource::Mock(MockTokenSource::new()))
    }
}

impl<S: TokenSource> Auditor<S> {
    pub fn new(eff: &Effective, source: S) -> Self {
        Auditor {
            repo_root: eff.repo_root.clone(),
            components_dir: eff.components_dir.clone(),
            colors: eff.colors.clone(),
            spacing: eff.spacing.clone(),
            validator: DesignTokenValidator::new(eff.approved_colors(), eff.approved_spacing()),
            sync: SyncChecker::new(source),
            quality: QualityAggregator::new(),
        }
    }

    /// Non-hidden directories under the components root, sorted by name.
    pub fn list_components(&self) -> ComponentList {
        let mut components: Vec<String> = match fs::read_dir(&self.components_dir) {
            Ok(rd) => rd
                .flatten()
                .filter(|e| e.path().is_dir())
                .map(|e| e.file_name().to_string_lossy().to_string())
                .filter(|n| !n.starts_with('.'))
                .collect(),
            Err(_) => {
                debug!(dir = %self.components_dir.display(), "components directory not found");
                Vec::new()
            }
        };
        components.sort();
        let total = components.len();
        ComponentList { components, total }
    }

    /// Resolve a component name to its directory. Names that are not a
    /// single plain path segment are treated as unknown.
    fn component_dir(&self, name: &str) -> Result<PathBuf, AuditError> {
        let plain = !name.is_empty()
            && name != "."
            && name != ".."
            && !name.contains(['/', '\\', '\0']);
        if !plain {
            warn!(component = name, "rejected component name");
            return Err(AuditError::not_found(name));
        }
        let dir = self.components_dir.join(name);
        if !dir.is_dir() {
            return Err(AuditError::not_found(name));
        }
        Ok(dir)
    }

    pub fn component_info(&self, name: &str) -> Result<ComponentInfo, AuditError> {
        let dir = self.component_dir(name)?;
        let path = pathdiff::diff_paths(&dir, &self.repo_root).unwrap_or_else(|| dir.clone());
        Ok(ComponentInfo {
            name: name.to_string(),
            path: path.to_string_lossy().to_string(),
            files: FileInspector.analyze(&dir),
        })
    }

    pub fn analyze_component(&self, name: &str) -> Result<ComponentAnalysis, AuditError> {
        let dir = self.component_dir(name)?;
        let structure = StructureAnalyzer.analyze(&dir);
        Ok(ComponentAnalysis {
            name: name.to_string(),
            missing: structure.missing(),
            structure,
        })
    }

    /// Validate `css` when given; otherwise the component's own stylesheet.
    pub fn check_compliance(&self, name: &str, css: Option<&str>) -> Result<ComplianceResult, AuditError> {
        let issues = match css {
            Some(text) => self.validator.validate(text),
            None => {
                let dir = self.component_dir(name)?;
                self.validator.validate(&read_stylesheet(&dir, name))
            }
        };
        Ok(ComplianceResult {
            component: name.to_string(),
            compliant: issues.is_empty(),
            issues,
        })
    }

    /// Validate every `<Name>/<Name>.css` under the components root.
    pub fn check_all_compliance(&self) -> Vec<ComplianceResult> {
        let pattern = format!(
            "{}/*/*.css",
            Pattern::escape(&self.components_dir.to_string_lossy())
        );
        let entries = match glob(&pattern) {
            Ok(paths) => paths,
            Err(e) => {
                warn!(pattern = %pattern, error = %e, "invalid stylesheet pattern");
                return Vec::new();
            }
        };
        let mut sheets: Vec<(String, PathBuf)> = entries
            .flatten()
            .filter_map(|p| {
                let stem = p.file_stem()?.to_string_lossy().to_string();
                let parent = p.parent()?.file_name()?.to_string_lossy().to_string();
                (stem == parent && !parent.starts_with('.')).then_some((parent, p))
            })
            .collect();
        sheets.sort();
        sheets
            .into_iter()
            .map(|(name, path)| {
                let issues = match fs::read_to_string(&path) {
                    Ok(s) => self.validator.validate(&s),
                    Err(e) => {
                        warn!(path = %path.display(), error = %e, "cannot read stylesheet");
                        Vec::new()
                    }
                };
                ComplianceResult {
                    component: name,
                    compliant: issues.is_empty(),
                    issues,
                }
            })
            .collect()
    }

    pub fn check_sync(&self, name: &str) -> Result<ComponentSync, AuditError> {
        let dir = self.component_dir(name)?;
        let css = read_stylesheet(&dir, name);
        let st = self.sync.check_sync_status(name, &css, &dir);
        let recommendation = if st.is_synced { IN_SYNC } else { UPDATE_ACTION };
        Ok(ComponentSync {
            component: name.to_string(),
            is_synced: st.is_synced,
            needs_update: st.needs_update(),
            last_external_update: st.last_external_update,
            last_local_update: st.last_local_update,
            differences: st.differences,
            recommendation: recommendation.to_string(),
        })
    }

    pub fn check_all_sync(&self) -> SyncReport {
        let statuses: Vec<_> = self
            .list_components()
            .components
            .iter()
            .map(|name| {
                let dir = self.components_dir.join(name);
                let css = read_stylesheet(&dir, name);
                self.sync.check_sync_status(name, &css, &dir)
            })
            .collect();
        info!(components = statuses.len(), "sync report generated");
        self.sync.generate_sync_report(&statuses)
    }

    pub fn quality_dashboard(&self) -> Result<Dashboard, AuditError> {
        let qualities: Vec<_> = self
            .list_components()
            .components
            .iter()
            .map(|name| {
                let dir = self.components_dir.join(name);
                let structure = StructureAnalyzer.analyze(&dir);
                let has_design_issues = structure.has_styles
                    && !self.validator.validate(&read_stylesheet(&dir, name)).is_empty();
                self.quality
                    .aggregate_component_quality(name, &structure, has_design_issues)
            })
            .collect();
        info!(components = qualities.len(), "quality dashboard generated");
        self.quality.create_dashboard(&qualities)
    }

    pub fn token_catalog(&self) -> TokenCatalog {
        TokenCatalog {
            colors: self.colors.clone(),
            spacing: self.spacing.clone(),
        }
    }
}

/// Text of `<dir>/<name>.css`, or empty when the stylesheet is missing.
fn read_stylesheet(dir: &Path, name: &str) -> String {
    let path = dir.join(format!("{}.css", name));
    if !path.is_file() {
        return String::new();
    }
    fs::read_to_string(&path).unwrap_or_else(|e| {
        warn!(path = %path.display(), error = %e, "cannot read stylesheet");
        String::new()
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::resolve_effective;
    use tempfile::{tempdir, TempDir};

    /// Components root with Button (complete, compliant), Checkbox (stories
    /// only, off-palette css), and Divider (index only).
    fn fixture() -> (TempDir, Auditor<MockTokenSource>) {
        let tmp = tempdir().unwrap();
        let root = tmp.path();
        fs::create_dir_all(root.join(".git")).unwrap();
        let comps = root.join("packages/components/src/components");

        let button = comps.join("Button");
        fs::create_dir_all(&button).unwrap();
        fs::write(
            button.join("Button.css"),
            ".btn { color: #0017C1; padding: 8px; border-radius: 4px; margin: 0px; }",
        )
        .unwrap();
        fs::write(button.join("Button.test.tsx"), "test()").unwrap();
        fs::write(button.join("Button.stories.tsx"), "export default {}").unwrap();
        fs::write(button.join("index.ts"), "export * from './Button'").unwrap();

        let checkbox = comps.join("Checkbox");
        fs::create_dir_all(&checkbox).unwrap();
        fs::write(checkbox.join("Checkbox.css"), ".cb { color: #123456; width: 16px; }").unwrap();
        fs::write(checkbox.join("Checkbox.stories.tsx"), "").unwrap();

        let divider = comps.join("Divider");
        fs::create_dir_all(&divider).unwrap();
        fs::write(divider.join("index.ts"), "").unwrap();

        fs::create_dir_all(comps.join(".cache")).unwrap();
        fs::write(comps.join("README.md"), "docs").unwrap();

        let eff = resolve_effective(root.to_str(), None, None, None);
        let auditor = Auditor::new(&eff, MockTokenSource::new());
        (tmp, auditor)
    }

    #[test]
    fn test_list_components_skips_hidden_and_files() {
        let (_tmp, a) = fixture();
        let list = a.list_components();
        assert_eq!(list.components, vec!["Button", "Checkbox", "Divider"]);
        assert_eq!(list.total, 3);
    }

    #[test]
    fn test_list_components_missing_root_is_empty() {
        let tmp = tempdir().unwrap();
        fs::create_dir_all(tmp.path().join(".git")).unwrap();
        let eff = resolve_effective(tmp.path().to_str(), Some("nowhere"), None, None);
        let a = Auditor::new(&eff, MockTokenSource::new());
        assert_eq!(a.list_components().total, 0);
        assert!(matches!(a.quality_dashboard(), Err(AuditError::EmptyInput)));
    }

    #[test]
    fn test_info_and_analyze() {
        let (_tmp, a) = fixture();
        let info = a.component_info("Button").unwrap();
        assert_eq!(info.files.len(), 4);
        assert_eq!(info.path, "packages/components/src/components/Button");

        let an = a.analyze_component("Checkbox").unwrap();
        assert!(an.structure.has_styles);
        assert!(an.structure.has_stories);
        assert_eq!(an.missing, vec!["tests"]);
    }

    #[test]
    fn test_unknown_or_unsafe_names_are_not_found() {
        let (_tmp, a) = fixture();
        for name in ["Ghost", "../components", "Button/..", ""] {
            match a.analyze_component(name) {
                Err(AuditError::NotFound { component }) => assert_eq!(component, name),
                other => panic!("expected NotFound for {:?}, got {:?}", name, other),
            }
        }
        assert!(a.component_info("Ghost").is_err());
        assert!(a.check_sync("Ghost").is_err());
    }

    #[test]
    fn test_compliance_inline_and_from_stylesheet() {
        let (_tmp, a) = fixture();
        let inline = a
            .check_compliance("Anything", Some("color: #123456; padding: 7px;"))
            .unwrap();
        assert!(!inline.compliant);
        assert_eq!(inline.issues.len(), 2);

        let from_file = a.check_compliance("Button", None).unwrap();
        assert!(from_file.compliant);

        // No stylesheet on disk means nothing to flag.
        assert!(a.check_compliance("Divider", None).unwrap().compliant);
        assert!(a.check_compliance("Ghost", None).is_err());
    }

    #[test]
    fn test_check_all_compliance_uses_component_stylesheets() {
        let (_tmp, a) = fixture();
        let all = a.check_all_compliance();
        let names: Vec<_> = all.iter().map(|r| r.component.as_str()).collect();
        assert_eq!(names, vec!["Button", "Checkbox"]);
        assert!(all[0].compliant);
        assert_eq!(all[1].issues, vec!["unapproved color in use: #123456"]);
    }

    #[test]
    fn test_check_sync_single_component() {
        let (_tmp, a) = fixture();
        let ok = a.check_sync("Button").unwrap();
        assert!(ok.is_synced);
        assert_eq!(ok.recommendation, IN_SYNC);
        assert!(ok.last_local_update.is_some());

        let cb = a.check_sync("Checkbox").unwrap();
        assert!(!cb.is_synced);
        assert!(cb.needs_update);
        assert_eq!(
            cb.differences,
            vec!["external color 'check-color' (#0017C1) not found in style"]
        );
        assert_eq!(cb.recommendation, UPDATE_ACTION);
    }

    #[test]
    fn test_check_all_sync_report() {
        let (_tmp, a) = fixture();
        let rep = a.check_all_sync();
        assert_eq!(rep.summary.total_components, 3);
        // Divider has no external tokens, so it counts as synced.
        assert_eq!(rep.summary.synced, 2);
        assert_eq!(rep.summary.sync_percentage, 66.67);
        assert_eq!(rep.action_required.len(), 1);
        assert_eq!(rep.action_required[0].component, "Checkbox");
    }

    #[test]
    fn test_quality_dashboard_over_fixture() {
        let (_tmp, a) = fixture();
        let dash = a.quality_dashboard().unwrap();
        assert_eq!(dash.summary.total_components, 3);
        // Button 100; Checkbox (50, non-compliant, no tests, stories) 50;
        // Divider (25, compliant, no tests, no stories) 45.
        let scores: Vec<_> = dash.components.iter().map(|c| c.overall_score).collect();
        assert_eq!(scores, vec![100.0, 50.0, 45.0]);
        assert_eq!(dash.summary.fully_compliant, 1);
        assert_eq!(dash.summary.needs_attention, 2);
        assert_eq!(
            dash.recommendations,
            vec![
                "Add tests to: Checkbox, Divider",
                "Add Storybook stories to: Divider",
                "Prioritize improving: Checkbox, Divider",
            ]
        );
    }

    #[test]
    fn test_token_catalog_reflects_config() {
        let (_tmp, a) = fixture();
        let cat = a.token_catalog();
        assert_eq!(cat.colors.get("primary").map(String::as_str), Some("#0017C1"));
        assert_eq!(cat.spacing.len(), 5);
    }

    #[cfg(unix)]
    #[test]
    fn test_symlinked_component_is_listed() {
        let tmp = tempdir().unwrap();
        let root = tmp.path();
        fs::create_dir_all(root.join(".git")).unwrap();
        let shared = root.join("shared/Card");
        fs::create_dir_all(&shared).unwrap();
        fs::write(shared.join("index.ts"), "").unwrap();
        let comps = root.join("packages/components/src/components");
        fs::create_dir_all(&comps).unwrap();
        std::os::unix::fs::symlink(&shared, comps.join("Card")).unwrap();
        std::os::unix::fs::symlink(root.join("shared/missing"), comps.join("Dangling")).unwrap();

        let eff = resolve_effective(root.to_str(), None, None, None);
        let a = Auditor::new(&eff, MockTokenSource::new());
        assert!(a.analyze_component("Card").is_ok());
        assert_eq!(a.list_components().components, vec!["Card"]);
        assert_eq!(a.quality_dashboard().unwrap().summary.total_components, 1);
        assert_eq!(a.check_all_sync().summary.total_components, 1);
    }

    #[test]
    fn test_check_all_compliance_single_component() {
        let tmp = tempdir().unwrap();
        let root = tmp.path();
        fs::create_dir_all(root.join(".git")).unwrap();
        let dir = root.join("packages/components/src/components/Button");
        fs::create_dir_all(&dir).unwrap();
        fs::write(dir.join("Button.css"), ".btn { color: #123456; }").unwrap();

        let eff = resolve_effective(root.to_str(), None, None, None);
        let a = Auditor::new(&eff, MockTokenSource::new());
        let all = a.check_all_compliance();
        assert_eq!(all.len(), 1);
        let out = crate::output::compose_compliance_all_json(&all).unwrap();
        assert_eq!(out.as_array().map(Vec::len), Some(1));
        assert_eq!(out[0]["compliant"], false);
    }

    #[test]
    fn test_offline_ignores_broken_token_file() {
        let (tmp, _) = fixture();
        let eff = resolve_effective(tmp.path().to_str(), None, None, Some("absent.toml"));
        assert!(Auditor::from_effective(&eff).is_err());

        let a = Auditor::offline(&eff);
        assert_eq!(a.list_components().total, 3);
        assert!(a.quality_dashboard().is_ok());
        assert_eq!(a.check_all_compliance().len(), 2);
    }

    #[test]
    fn test_from_effective_with_token_file() {
        let tmp = tempdir().unwrap();
        let root = tmp.path();
        fs::create_dir_all(root.join(".git")).unwrap();
        let dir = root.join("packages/components/src/components/Tag");
        fs::create_dir_all(&dir).unwrap();
        fs::write(dir.join("Tag.css"), ".tag { gap: 4px; }").unwrap();
        fs::write(
            root.join("tokens.yaml"),
            "components:\n  Tag:\n    tokens:\n      - { name: gap, value: 8px, category: spacing }\n",
        )
        .unwrap();

        let eff = resolve_effective(root.to_str(), None, None, Some("tokens.yaml"));
        let a = Auditor::from_effective(&eff).unwrap();
        let st = a.check_sync("Tag").unwrap();
        assert_eq!(
            st.differences,
            vec!["external spacing 'gap' (8px) not found in style"]
        );

        let missing = resolve_effective(root.to_str(), None, None, Some("absent.toml"));
        assert!(matches!(
            Auditor::from_effective(&missing),
            Err(AuditError::Io { .. })
        ));
    }
}
