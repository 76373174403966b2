//! Read-only filesystem probes over a single component directory.

use crate::models::{FileEntry, StructureReport};
use std::fs;
use std::path::Path;

/// Inspects a component directory and produces a report.
pub trait Analyzer {
    type Report;

    fn analyze(&self, component_dir: &Path) -> Self::Report;
}

/// Checks for `<Name>.css`, `<Name>.test.tsx`, `<Name>.stories.tsx`, and
/// `index.ts`, where `<Name>` is the directory name.
pub struct StructureAnalyzer;

impl Analyzer for StructureAnalyzer {
    type Report = StructureReport;

    fn analyze(&self, component_dir: &Path) -> StructureReport {
        let name = component_dir
            .file_name()
            .map(|n| n.to_string_lossy().to_string())
            .unwrap_or_default();
        let has = |file: String| component_dir.join(file).exists();
        StructureReport {
            has_styles: has(format!("{}.css", name)),
            has_tests: has(format!("{}.test.tsx", name)),
            has_stories: has(format!("{}.stories.tsx", name)),
            has_index: has("index.ts".to_string()),
        }
    }
}

/// Lists regular files directly inside a component directory.
pub struct FileInspector;

impl Analyzer for FileInspector {
    type Report = Vec<FileEntry>;

    fn analyze(&self, component_dir: &Path) -> Vec<FileEntry> {
        let entries = match fs::read_dir(component_dir) {
            Ok(rd) => rd,
            Err(_) => return Vec::new(),
        };
        let mut files: Vec<FileEntry> = entries
            .flatten()
            .filter_map(|entry| {
                let meta = entry.metadata().ok()?;
                if !meta.is_file() {
                    return None;
                }
                let path = entry.path();
                let extension = path
                    .extension()
                    .map(|e| format!(".{}", e.to_string_lossy()))
                    .unwrap_or_default();
                Some(FileEntry {
                    name: entry.file_name().to_string_lossy().to_string(),
                    extension,
                    size: meta.len(),
                })
            })
            .collect();
        // read_dir order is platform dependent
        files.sort_by(|a, b| a.name.cmp(&b.name));
        files
    }
}
