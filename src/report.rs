//! One-call advisory over an inventory snapshot: resolved tools, overlaps and suggestions.

use crate::model::{OverlapGroup, Suggestion, Tool};
use crate::resolver::{needs_review, resolve_category};
use crate::subdomain::{compute_overlap, derive_subdomain};
use crate::suggestions::SuggestionEngine;
use serde::Serialize;

/// Per-tool view after resolution
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ResolvedTool {
    pub id: String,
    pub name: String,
    pub category: String,
    pub subdomain: String,
    pub needs_review: bool,
}

impl ResolvedTool {
    pub fn from_tool(tool: &Tool) -> Self {
        Self {
            id: tool.id.clone(),
            name: tool.name.clone(),
            category: resolve_category(tool),
            subdomain: derive_subdomain(tool),
            needs_review: needs_review(tool),
        }
    }
}

/// Everything the advisor derives from one inventory snapshot
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct AdvisoryReport {
    pub tools: Vec<ResolvedTool>,
    pub overlaps: Vec<OverlapGroup>,
    pub suggestions: Vec<Suggestion>,
}

impl AdvisoryReport {
    pub fn build(tools: &[Tool], engine: &SuggestionEngine) -> Self {
        Self {
            tools: tools.iter().map(ResolvedTool::from_tool).collect(),
            overlaps: compute_overlap(tools),
            suggestions: engine.suggest(tools),
        }
    }

    pub fn review_count(&self) -> usize {
        self.tools.iter().filter(|t| t.needs_review).count()
    }
}
