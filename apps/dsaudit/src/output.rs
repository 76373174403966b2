//! Output rendering for every command.
//!
//! Supports `human` (default) and `json` outputs. JSON output serializes the
//! operation result as-is; errors become `{"error": "..."}`.

use crate::error::AuditError;
use crate::models::report::{
    ComplianceResult, ComponentAnalysis, ComponentInfo, ComponentList, ComponentSync, Dashboard,
    SyncReport, TokenCatalog,
};
use crate::prompt::{PromptMessage, Role};
use crate::utils::{mark, use_colors};
use owo_colors::OwoColorize;
use serde::Serialize;
use serde_json::Value as JsonVal;

/// Serialize any result to a JSON value (pure) for printing and tests.
pub fn compose_json<T: Serialize>(value: &T) -> Result<JsonVal, AuditError> {
    Ok(serde_json::to_value(value)?)
}

pub fn compose_error_json(err: &AuditError) -> JsonVal {
    serde_json::json!(err.to_report())
}

fn print_json<T: Serialize>(value: &T) -> Result<(), AuditError> {
    println!("{}", serde_json::to_string_pretty(value)?);
    Ok(())
}

fn heading(text: &str, color: bool) -> String {
    if color {
        text.bold().to_string()
    } else {
        text.to_string()
    }
}

/// Print an error as data: JSON on stdout, or a prefixed line on stderr.
pub fn print_error(err: &AuditError, output: &str) {
    if output == "json" {
        println!("{}", compose_error_json(err));
    } else {
        eprintln!("{} {}", crate::utils::error_prefix(), err);
    }
}

pub fn print_list(list: &ComponentList, output: &str) -> Result<(), AuditError> {
    if output == "json" {
        return print_json(list);
    }
    let color = use_colors(output);
    for name in &list.components {
        println!("{}", name);
    }
    println!("{}", heading(&format!("— {} components", list.total), color));
    Ok(())
}

pub fn print_info(info: &ComponentInfo, output: &str) -> Result<(), AuditError> {
    if output == "json" {
        return print_json(info);
    }
    let color = use_colors(output);
    println!("{} ({})", heading(&info.name, color), info.path);
    for f in &info.files {
        println!("  {:<32} {:<10} {:>8} B", f.name, f.extension, f.size);
    }
    Ok(())
}

/// Human rendering of a structure analysis.
pub fn render_analysis(an: &ComponentAnalysis, color: bool) -> String {
    let s = &an.structure;
    let mut out = format!("Analysis of component '{}':\n", an.name);
    out.push_str(&format!("- styles: {}\n", mark(s.has_styles, color)));
    out.push_str(&format!("- tests: {}\n", mark(s.has_tests, color)));
    out.push_str(&format!("- stories: {}\n", mark(s.has_stories, color)));
    out.push_str(&format!("- index.ts: {}\n", mark(s.has_index, color)));
    if !an.missing.is_empty() {
        out.push_str(&format!("\nMissing files: {}", an.missing.join(", ")));
    }
    out
}

pub fn print_analysis(an: &ComponentAnalysis, output: &str) -> Result<(), AuditError> {
    if output == "json" {
        return print_json(an);
    }
    println!("{}", render_analysis(an, use_colors(output)));
    Ok(())
}

/// JSON for `validate --all`: always an array, even with one stylesheet.
pub fn compose_compliance_all_json(results: &[ComplianceResult]) -> Result<JsonVal, AuditError> {
    compose_json(&results)
}

fn render_compliance(r: &ComplianceResult, color: bool) -> String {
    if r.compliant {
        return format!(
            "{} '{}' complies with the design tokens",
            mark(true, color),
            r.component
        );
    }
    let mut out = format!("{} design compliance of '{}':", mark(false, color), r.component);
    for issue in &r.issues {
        out.push_str(&format!("\n  - {}", issue));
    }
    out
}

pub fn print_compliance(result: &ComplianceResult, output: &str) -> Result<(), AuditError> {
    if output == "json" {
        return print_json(result);
    }
    println!("{}", render_compliance(result, use_colors(output)));
    Ok(())
}

pub fn print_compliance_all(results: &[ComplianceResult], output: &str) -> Result<(), AuditError> {
    if output == "json" {
        println!(
            "{}",
            serde_json::to_string_pretty(&compose_compliance_all_json(results)?)?
        );
        return Ok(());
    }
    let color = use_colors(output);
    for r in results {
        println!("{}", render_compliance(r, color));
    }
    Ok(())
}

pub fn print_sync(st: &ComponentSync, output: &str) -> Result<(), AuditError> {
    if output == "json" {
        return print_json(st);
    }
    let color = use_colors(output);
    println!(
        "{} {} — {}",
        mark(st.is_synced, color),
        heading(&st.component, color),
        st.recommendation
    );
    let fmt_ts = |t: Option<chrono::DateTime<chrono::Utc>>| {
        t.map(|t| t.to_rfc3339()).unwrap_or_else(|| "unknown".to_string())
    };
    println!("  external updated: {}", fmt_ts(st.last_external_update));
    println!("  local updated:    {}", fmt_ts(st.last_local_update));
    for d in &st.differences {
        println!("  - {}", d);
    }
    Ok(())
}

pub fn print_sync_report(rep: &SyncReport, output: &str) -> Result<(), AuditError> {
    if output == "json" {
        return print_json(rep);
    }
    let color = use_colors(output);
    for c in &rep.components {
        println!(
            "{} {} ({} differences)",
            mark(c.is_synced, color),
            c.name,
            c.differences_count
        );
        for d in &c.differences {
            println!("    - {}", d);
        }
        if c.differences_count > c.differences.len() {
            println!("    … {} more", c.differences_count - c.differences.len());
        }
    }
    let s = &rep.summary;
    let summary = format!(
        "— Summary — total={} synced={} out_of_sync={} sync={}%",
        s.total_components, s.synced, s.out_of_sync, s.sync_percentage
    );
    println!("{}", heading(&summary, color));
    for a in &rep.action_required {
        println!("{}: {}", a.component, a.action);
    }
    Ok(())
}

pub fn print_dashboard(dash: &Dashboard, output: &str) -> Result<(), AuditError> {
    if output == "json" {
        return print_json(dash);
    }
    let color = use_colors(output);
    for c in &dash.components {
        let score = format!("{:>6.2}", c.overall_score);
        let score = if !color {
            score
        } else if c.overall_score >= 100.0 {
            score.green().to_string()
        } else if c.overall_score < 60.0 {
            score.red().to_string()
        } else {
            score.yellow().to_string()
        };
        println!(
            "{} {:<24} completeness={:.2} compliance={} tests={} docs={}",
            score,
            c.name,
            c.completeness,
            mark(c.design_compliance, color),
            mark(c.test_coverage, color),
            mark(c.documentation, color)
        );
    }
    let s = &dash.summary;
    let summary = format!(
        "— Summary — components={} average={} fully_compliant={} needs_attention={}",
        s.total_components, s.average_quality_score, s.fully_compliant, s.needs_attention
    );
    println!("{}", heading(&summary, color));
    for r in &dash.recommendations {
        println!("• {}", r);
    }
    Ok(())
}

pub fn print_tokens(cat: &TokenCatalog, output: &str) -> Result<(), AuditError> {
    if output == "json" {
        return print_json(cat);
    }
    let color = use_colors(output);
    println!("{}", heading("colors", color));
    for (name, value) in &cat.colors {
        println!("  {:<24} {}", name, value);
    }
    println!("{}", heading("spacing", color));
    for (name, value) in &cat.spacing {
        println!("  {:<24} {}", name, value);
    }
    Ok(())
}

pub fn print_prompt(text: &str, output: &str) -> Result<(), AuditError> {
    if output == "json" {
        return print_json(&serde_json::json!({ "prompt": text }));
    }
    println!("{}", text);
    Ok(())
}

pub fn print_messages(msgs: &[PromptMessage], output: &str) -> Result<(), AuditError> {
    if output == "json" {
        return print_json(&msgs);
    }
    let color = use_colors(output);
    for m in msgs {
        let role = match m.role {
            Role::User => "user",
            Role::Assistant => "assistant",
        };
        println!("{}\n{}\n", heading(&format!("[{}]", role), color), m.content);
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::report::{SyncAction, SyncComponentEntry, SyncSummary};
    use crate::models::StructureReport;

    #[test]
    fn test_compose_sync_report_json_shape() {
        let rep = SyncReport {
            summary: SyncSummary {
                total_components: 2,
                synced: 1,
                out_of_sync: 1,
                sync_percentage: 50.0,
            },
            components: vec![SyncComponentEntry {
                name: "Button".into(),
                is_synced: false,
                differences_count: 4,
                differences: vec!["a".into(), "b".into(), "c".into()],
            }],
            action_required: vec![SyncAction {
                component: "Button".into(),
                action: "update".into(),
                differences: vec!["a".into(), "b".into(), "c".into(), "d".into()],
            }],
        };
        let out = compose_json(&rep).unwrap();
        assert_eq!(out["summary"]["sync_percentage"], 50.0);
        assert_eq!(out["components"][0]["differences_count"], 4);
        assert_eq!(out["components"][0]["differences"].as_array().unwrap().len(), 3);
        assert_eq!(out["action_required"][0]["differences"].as_array().unwrap().len(), 4);
        let keys: Vec<_> = out.as_object().unwrap().keys().cloned().collect();
        assert_eq!(keys, vec!["summary", "components", "action_required"]);
    }

    #[test]
    fn test_compliance_all_json_is_array_for_one_result() {
        let results = vec![ComplianceResult {
            component: "Button".into(),
            compliant: false,
            issues: vec!["unapproved color in use: #123456".into()],
        }];
        let out = compose_compliance_all_json(&results).unwrap();
        let arr = out.as_array().expect("array");
        assert_eq!(arr.len(), 1);
        assert_eq!(arr[0]["component"], "Button");
        assert!(compose_compliance_all_json(&[]).unwrap().as_array().unwrap().is_empty());
    }

    #[test]
    fn test_render_compliance_lists_issues() {
        let r = ComplianceResult {
            component: "Tag".into(),
            compliant: false,
            issues: vec!["a".into(), "b".into()],
        };
        assert_eq!(render_compliance(&r, false), "✗ design compliance of 'Tag':\n  - a\n  - b");
    }

    #[test]
    fn test_compose_error_json() {
        let out = compose_error_json(&AuditError::not_found("Ghost"));
        assert_eq!(out, serde_json::json!({"error": "Component 'Ghost' not found"}));
    }

    #[test]
    fn test_structure_serializes_with_fixed_keys() {
        let an = ComponentAnalysis {
            name: "Button".into(),
            structure: StructureReport {
                has_styles: true,
                has_tests: false,
                has_stories: true,
                has_index: true,
            },
            missing: vec!["tests"],
        };
        let out = compose_json(&an).unwrap();
        let keys: Vec<_> = out["structure"].as_object().unwrap().keys().cloned().collect();
        assert_eq!(keys, vec!["has_styles", "has_tests", "has_stories", "has_index"]);
    }

    #[test]
    fn test_render_analysis_marks_and_missing() {
        let an = ComponentAnalysis {
            name: "Divider".into(),
            structure: StructureReport {
                has_styles: false,
                has_tests: true,
                has_stories: false,
                has_index: true,
            },
            missing: vec!["styles", "stories"],
        };
        let text = render_analysis(&an, false);
        assert!(text.starts_with("Analysis of component 'Divider':"));
        assert!(text.contains("- styles: ✗"));
        assert!(text.contains("- tests: ✓"));
        assert!(text.ends_with("Missing files: styles, stories"));
    }
}
