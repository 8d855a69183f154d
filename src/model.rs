//! Inventory records and the values derived from them.
//!
//! Derived types (`OverlapGroup`, `Suggestion`) only exist as return values of
//! a computation over a caller-supplied slice of tools.

use serde::{Deserialize, Serialize};

/// Sentinel lane for tools whose category cannot be trusted yet
pub const OTHER_CATEGORY: &str = "Other";

// ============================================================================
// Tool
// ============================================================================

/// One inventoried tool, as supplied by the inventory store
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Tool {
    /// Opaque identifier, unique within an inventory
    pub id: String,

    /// Display name, also the main matching input
    pub name: String,

    /// Last assigned category (human or AI enrichment)
    #[serde(default)]
    pub category: String,

    /// Human override; authoritative when non-empty
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub confirmed_category: Option<String>,

    /// Free text used as an extra matching signal
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,

    /// Trust in `category` (0-100). `None` means legacy/unscored, not zero.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub confidence: Option<f64>,
}

impl Tool {
    pub fn new(id: impl Into<String>, name: impl Into<String>, category: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            name: name.into(),
            category: category.into(),
            confirmed_category: None,
            description: None,
            confidence: None,
        }
    }

    pub fn with_confirmed_category(mut self, category: impl Into<String>) -> Self {
        self.confirmed_category = Some(category.into());
        self
    }

    pub fn with_description(mut self, description: impl Into<String>) -> Self {
        self.description = Some(description.into());
        self
    }

    pub fn with_confidence(mut self, confidence: f64) -> Self {
        self.confidence = Some(confidence);
        self
    }

    /// The confirmed category, treating an empty string as unset
    pub fn confirmed(&self) -> Option<&str> {
        self.confirmed_category
            .as_deref()
            .filter(|category| !category.is_empty())
    }
}

/// Inventory document accepted on stdin: a bare array or `{ "tools": [...] }`
#[derive(Debug, Deserialize)]
#[serde(untagged)]
pub enum InventoryInput {
    List(Vec<Tool>),
    Wrapped { tools: Vec<Tool> },
}

impl InventoryInput {
    pub fn into_tools(self) -> Vec<Tool> {
        match self {
            InventoryInput::List(tools) | InventoryInput::Wrapped { tools } => tools,
        }
    }
}

// ============================================================================
// Derived values
// ============================================================================

/// Two or more tools sharing a subdomain
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct OverlapGroup {
    /// Canonical subdomain label, never empty
    pub subdomain: String,

    /// Tools in input order
    pub tools: Vec<Tool>,
}

impl OverlapGroup {
    pub fn len(&self) -> usize {
        self.tools.len()
    }

    pub fn is_empty(&self) -> bool {
        self.tools.is_empty()
    }
}

/// A rule-triggered recommendation
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Suggestion {
    /// Name of the rule that produced it
    pub id: String,

    /// Question shown to the user
    pub prompt: String,

    /// Non-empty list of "add this tool to this lane" offers
    pub actions: Vec<SuggestionAction>,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct SuggestionAction {
    pub label: String,
    pub name: String,
    pub category: String,
}

impl SuggestionAction {
    pub fn add(name: impl Into<String>, category: impl Into<String>) -> Self {
        let name = name.into();
        Self {
            label: format!("Add {}", name),
            name,
            category: category.into(),
        }
    }

    /// Tool a consumer appends when the offer is accepted.
    /// The lane was picked by a person, so it is recorded as confirmed.
    pub fn to_tool(&self, id: impl Into<String>) -> Tool {
        Tool::new(id, self.name.clone(), self.category.clone())
            .with_confirmed_category(self.category.clone())
    }
}
