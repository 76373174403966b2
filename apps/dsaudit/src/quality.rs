//! Quality scoring and dashboard aggregation.

use crate::error::AuditError;
use crate::models::report::{Dashboard, DashboardEntry, DashboardSummary};
use crate::models::{round2, ComponentQuality, StructureReport};

/// Overall score below which a component is flagged for attention.
const ATTENTION_THRESHOLD: f64 = 60.0;

/// Computes a 0..=100 metric from a component's structure.
pub trait MetricCalculator {
    fn calculate(&self, structure: &StructureReport) -> f64;
}

/// Percentage of the four expected file kinds that are present.
pub struct CompletenessCalculator;

impl MetricCalculator for CompletenessCalculator {
    fn calculate(&self, structure: &StructureReport) -> f64 {
        let flags = structure.flags();
        let present = flags.iter().filter(|b| **b).count();
        present as f64 / flags.len() as f64 * 100.0
    }
}

pub struct QualityAggregator<M: MetricCalculator = CompletenessCalculator> {
    completeness: M,
}

impl QualityAggregator {
    pub fn new() -> Self {
        QualityAggregator {
            completeness: CompletenessCalculator,
        }
    }
}

impl Default for QualityAggregator {
    fn default() -> Self {
        Self::new()
    }
}

impl<M: MetricCalculator> QualityAggregator<M> {
    pub fn aggregate_component_quality(
        &self,
        name: &str,
        structure: &StructureReport,
        has_design_issues: bool,
    ) -> ComponentQuality {
        ComponentQuality {
            name: name.to_string(),
            completeness_score: self.completeness.calculate(structure).clamp(0.0, 100.0),
            design_compliance: !has_design_issues,
            test_coverage: structure.has_tests,
            documentation: structure.has_stories,
            // Placeholder until an accessibility audit exists.
            accessibility_ready: true,
        }
    }

    /// Build the dashboard; an empty component list is `EmptyInput`.
    pub fn create_dashboard(&self, components: &[ComponentQuality]) -> Result<Dashboard, AuditError> {
        create_dashboard(components)
    }
}

pub fn create_dashboard(components: &[ComponentQuality]) -> Result<Dashboard, AuditError> {
    if components.is_empty() {
        return Err(AuditError::EmptyInput);
    }
    let total = components.len();
    let scores: Vec<f64> = components.iter().map(|c| c.overall_score()).collect();
    let average = scores.iter().sum::<f64>() / total as f64;

    let entries = components
        .iter()
        .zip(&scores)
        .map(|(c, score)| DashboardEntry {
            name: c.name.clone(),
            overall_score: round2(*score),
            completeness: round2(c.completeness_score),
            design_compliance: c.design_compliance,
            test_coverage: c.test_coverage,
            documentation: c.documentation,
        })
        .collect();

    Ok(Dashboard {
        summary: DashboardSummary {
            total_components: total,
            average_quality_score: round2(average),
            fully_compliant: scores.iter().filter(|s| **s == 100.0).count(),
            needs_attention: scores.iter().filter(|s| **s < ATTENTION_THRESHOLD).count(),
        },
        components: entries,
        recommendations: recommendations(components),
    })
}

fn recommendations(components: &[ComponentQuality]) -> Vec<String> {
    let groups = [
        ("Add tests to", names_where(components, |c| !c.test_coverage)),
        ("Add Storybook stories to", names_where(components, |c| !c.documentation)),
        (
            "Prioritize improving",
            names_where(components, |c| c.overall_score() < ATTENTION_THRESHOLD),
        ),
    ];
    groups
        .into_iter()
        .filter(|(_, group)| !group.is_empty())
        .map(|(label, group)| format!("{}: {}", label, group.join(", ")))
        .collect()
}

fn names_where(
    components: &[ComponentQuality],
    pred: impl Fn(&ComponentQuality) -> bool,
) -> Vec<&str> {
    components
        .iter()
        .filter(|c| pred(c))
        .map(|c| c.name.as_str())
        .collect()
}
