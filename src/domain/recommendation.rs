//! Response schema of the recommendation service.
//!
//! These types are consumed read-only. Optional parts of the payload
//! (`deployment_strategy`, `top_pick`, `key_benefits`, extra technology
//! metadata) default when absent; `results` is required.

use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

fn default_project_name() -> String {
    "My Project".to_string()
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RecommendationResponse {
    #[serde(default = "default_project_name")]
    pub project_name: String,

    pub results: Vec<CategoryResult>,

    #[serde(default)]
    pub deployment_strategy: Option<DeploymentStrategy>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DeploymentStrategy {
    pub title: String,
    pub description: String,
    #[serde(default)]
    pub recommended_platforms: Vec<String>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CategoryResult {
    pub category: String,
    #[serde(default)]
    pub top_pick: Option<ScoredTechnology>,
    #[serde(default)]
    pub alternatives: Vec<ScoredTechnology>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ScoredTechnology {
    pub technology: Technology,
    #[serde(default)]
    pub score: f64,
    #[serde(default)]
    pub reason: Vec<String>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Technology {
    pub id: String,
    pub name: String,
    #[serde(default)]
    pub description: String,
    #[serde(default)]
    pub key_benefits: Vec<String>,

    // Service-side scoring metadata; carried but not rendered.
    #[serde(default)]
    pub category: Option<String>,
    #[serde(default)]
    pub tags: Vec<String>,
    #[serde(default)]
    pub min_scale: Option<String>,
    #[serde(default)]
    pub cost_tier: Option<String>,
    #[serde(default)]
    pub attributes: BTreeMap<String, bool>,
}

/// A key benefit split at its first colon.
///
/// `"Ecosystem: huge plugin library"` becomes label `"Ecosystem:"` with detail
/// `" huge plugin library"`. Only the first colon splits; later colons stay in
/// the detail.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Benefit {
    pub label: String,
    pub detail: Option<String>,
}

impl Benefit {
    pub fn parse(text: &str) -> Self {
        match text.split_once(':') {
            Some((label, detail)) => Self {
                label: format!("{}:", label),
                detail: Some(detail.to_string()),
            },
            None => Self {
                label: text.to_string(),
                detail: None,
            },
        }
    }
}

/// Largest magnitude below which every integral `f64` fits an `i64` exactly.
const EXACT_INTEGER_LIMIT: f64 = 9_007_199_254_740_992.0;

/// Formats a score the way the service's web client printed numbers.
pub fn format_score(score: f64) -> String {
    if score.fract() == 0.0 && score.abs() < EXACT_INTEGER_LIMIT {
        format!("{}", score as i64)
    } else {
        format!("{}", score)
    }
}
