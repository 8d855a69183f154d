//! Effective category of a tool given uncertain AI metadata.

use crate::config::CONFIDENCE_TRUST_THRESHOLD;
use crate::model::{Tool, OTHER_CATEGORY};

/// Resolve the category a tool should be shown under.
///
/// A confirmed category always wins. Otherwise the assigned category is kept
/// only when its confidence reaches the trust threshold (inclusive); low or
/// missing confidence lands in `"Other"`. Out-of-range confidence is not validated.
pub fn resolve_category(tool: &Tool) -> String {
    if let Some(confirmed) = tool.confirmed() {
        return confirmed.to_string();
    }

    match tool.confidence {
        Some(confidence) if confidence >= CONFIDENCE_TRUST_THRESHOLD => tool.category.clone(),
        _ => OTHER_CATEGORY.to_string(),
    }
}

/// Whether the tool should be flagged for manual review.
///
/// Recomputed on every call; a later override can clear it.
pub fn needs_review(tool: &Tool) -> bool {
    tool.confidence.is_none() || resolve_category(tool) == OTHER_CATEGORY
}

/// Lane used by suggestion triggers: confirmed category, else the assigned one
pub fn effective_lane(tool: &Tool) -> &str {
    tool.confirmed().unwrap_or(&tool.category)
}
