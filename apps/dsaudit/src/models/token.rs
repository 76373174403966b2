//! Design token schema shared by token sources and the sync checker.

use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
/// Token category. Unrecognized categories load as `Other`.
pub enum TokenCategory {
    Color,
    Spacing,
    Typography,
    #[serde(other)]
    Other,
}

impl TokenCategory {
    pub fn as_str(&self) -> &'static str {
        match self {
            TokenCategory::Color => "color",
            TokenCategory::Spacing => "spacing",
            TokenCategory::Typography => "typography",
            TokenCategory::Other => "other",
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
/// A named, categorized visual constant from an external design source.
pub struct DesignToken {
    pub name: String,
    pub value: String,
    pub category: TokenCategory,
}

impl DesignToken {
    pub fn new(name: &str, value: &str, category: TokenCategory) -> Self {
        DesignToken {
            name: name.to_string(),
            value: value.to_string(),
            category,
        }
    }
}
