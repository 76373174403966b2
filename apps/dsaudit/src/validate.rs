//! Design token compliance checks for raw styling text.
//!
//! The scan is textual: colors and spacing inside comments or strings are
//! flagged the same as real declarations. Every occurrence yields its own
//! issue; repeated values are not collapsed.

use regex::Regex;
use std::collections::HashSet;

/// Inspects a block of text and returns human-readable issues.
pub trait Validator {
    fn validate(&self, content: &str) -> Vec<String>;
}

/// Flags colors and pixel spacings that are not part of the approved sets.
pub struct DesignTokenValidator {
    colors: HashSet<String>,
    spacing: HashSet<String>,
    color_re: Regex,
    spacing_re: Regex,
}

impl DesignTokenValidator {
    pub fn new<C, S>(colors: C, spacing: S) -> Self
    where
        C: IntoIterator,
        C::Item: AsRef<str>,
        S: IntoIterator,
        S::Item: AsRef<str>,
    {
        DesignTokenValidator {
            colors: colors
                .into_iter()
                .map(|c| c.as_ref().to_ascii_uppercase())
                .collect(),
            spacing: spacing.into_iter().map(|s| s.as_ref().to_string()).collect(),
            color_re: Regex::new(r"#[0-9A-F]{6}").expect("bad color pattern"),
            spacing_re: Regex::new(r"\b\d+px\b").expect("bad spacing pattern"),
        }
    }

    fn color_issues(&self, content: &str) -> Vec<String> {
        let upper = content.to_ascii_uppercase();
        self.color_re
            .find_iter(&upper)
            .map(|m| m.as_str())
            .filter(|c| !self.colors.contains(*c))
            .map(|c| format!("unapproved color in use: {}", c))
            .collect()
    }

    fn spacing_issues(&self, content: &str) -> Vec<String> {
        self.spacing_re
            .find_iter(content)
            .map(|m| m.as_str())
            .filter(|s| *s != "0px" && !self.spacing.contains(*s))
            .map(|s| format!("non-standard spacing in use: {}", s))
            .collect()
    }
}

impl Validator for DesignTokenValidator {
    fn validate(&self, content: &str) -> Vec<String> {
        let mut issues = self.color_issues(content);
        issues.extend(self.spacing_issues(content));
        issues
    }
}
