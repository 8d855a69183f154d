//! Shapes exchanged with the enrichment and cost lookup services.
//!
//! Failures from those services are turned into the fallback shapes here, so
//! the resolver never needs to know a call failed.

use crate::config::MANUAL_ENTRY_PROMPT;
use crate::model::{Tool, OTHER_CATEGORY};
use serde::{Deserialize, Serialize};
use std::fmt::Display;
use tracing::warn;

/// Metadata returned by the AI enrichment service for a tool name
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct EnrichmentResult {
    pub category: String,

    #[serde(default)]
    pub description: String,

    #[serde(default)]
    pub logo_url: String,

    #[serde(default)]
    pub confidence: Option<f64>,
}

impl EnrichmentResult {
    /// Substitute used when the enrichment call fails
    pub fn fallback() -> Self {
        Self {
            category: OTHER_CATEGORY.to_string(),
            description: MANUAL_ENTRY_PROMPT.to_string(),
            logo_url: String::new(),
            confidence: Some(0.0),
        }
    }
}

/// Merge an enrichment outcome into a tool.
///
/// An error is replaced by [`EnrichmentResult::fallback`]. A confirmed category
/// is never touched.
pub fn apply_enrichment<E: Display>(
    mut tool: Tool,
    outcome: Result<EnrichmentResult, E>,
) -> Tool {
    let enrichment = match outcome {
        Ok(result) => result,
        Err(e) => {
            warn!("Enrichment failed for {}: {}, using fallback", tool.name, e);
            EnrichmentResult::fallback()
        }
    };

    tool.category = enrichment.category;
    tool.confidence = enrichment.confidence;
    if !enrichment.description.is_empty() {
        tool.description = Some(enrichment.description);
    }
    tool
}

/// Monthly cost lookup keyed by (name, category)
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct CostEstimate {
    pub cost_mo: Option<f64>,
    pub cost_basis: Option<String>,
    pub source: Option<String>,
}

impl CostEstimate {
    /// All-null shape reported when the lookup fails
    pub fn unresolved() -> Self {
        Self::default()
    }
}
