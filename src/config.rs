//! Thresholds and the product catalog that feeds the suggestion rules.

use crate::error::{AdvisorError, Result};
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};

// ============================================================================
// Constants
// ============================================================================

/// Confidence at or above this trusts an AI-assigned category
pub const CONFIDENCE_TRUST_THRESHOLD: f64 = 80.0;

/// Smallest bucket reported as an overlap
pub const MIN_OVERLAP_GROUP_SIZE: usize = 2;

/// Maximum number of suggestions returned
pub const SUGGESTION_CAP: usize = 3;

/// Description substituted when enrichment fails
pub const MANUAL_ENTRY_PROMPT: &str =
    "Could not look this tool up automatically. Please add a description and pick a category.";

/// Config directory name under the platform config dir
const CONFIG_DIR: &str = "stack-advisor";

/// Default catalog file name
const CATALOG_FILE: &str = "catalog.json";

// ============================================================================
// Product catalog
// ============================================================================

/// Product lists used by suggestion triggers and offered as actions.
///
/// Missing keys in a catalog file fall back to the built-in lists.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ProductCatalog {
    /// Offered when no ERP lane exists
    pub erp: Vec<String>,

    /// Presence of any of these enables the CDP rule
    pub marketing_automation: Vec<String>,

    /// Customer data platforms; first entries are offered
    pub cdp: Vec<String>,

    pub cloud_providers: Vec<String>,

    pub monitoring: Vec<String>,

    pub helpdesk: Vec<String>,
}

fn owned(items: &[&str]) -> Vec<String> {
    items.iter().map(|s| s.to_string()).collect()
}

impl Default for ProductCatalog {
    fn default() -> Self {
        Self {
            erp: owned(&["NetSuite", "Odoo", "SAP Business One"]),
            marketing_automation: owned(&[
                "HubSpot",
                "Marketo",
                "Pardot",
                "Mailchimp",
                "Klaviyo",
                "ActiveCampaign",
            ]),
            cdp: owned(&["Segment", "RudderStack", "mParticle"]),
            cloud_providers: owned(&["AWS", "Amazon Web Services", "Azure", "Google Cloud", "GCP"]),
            monitoring: owned(&["Datadog", "New Relic", "Sentry", "Grafana", "PagerDuty"]),
            helpdesk: owned(&["Zendesk", "Freshdesk", "Help Scout"]),
        }
    }
}

impl ProductCatalog {
    /// Default catalog location: `<config_dir>/stack-advisor/catalog.json`
    pub fn default_path() -> Result<PathBuf> {
        let base = dirs::config_dir().ok_or(AdvisorError::NoConfigDir)?;
        Ok(base.join(CONFIG_DIR).join(CATALOG_FILE))
    }

    /// Load a catalog file. Empty product names are rejected, since an empty
    /// substring matches every tool name.
    pub fn load_from(path: &Path) -> Result<Self> {
        if !path.exists() {
            return Err(AdvisorError::CatalogNotFound(path.to_path_buf()));
        }

        let content = fs::read_to_string(path).map_err(|e| AdvisorError::CatalogRead {
            path: path.to_path_buf(),
            source: e,
        })?;

        let catalog: ProductCatalog =
            serde_json::from_str(&content).map_err(|e| AdvisorError::CatalogParse(e.to_string()))?;
        catalog.validate()?;
        Ok(catalog)
    }

    fn lists(&self) -> [(&'static str, &[String]); 6] {
        [
            ("erp", self.erp.as_slice()),
            ("marketing_automation", self.marketing_automation.as_slice()),
            ("cdp", self.cdp.as_slice()),
            ("cloud_providers", self.cloud_providers.as_slice()),
            ("monitoring", self.monitoring.as_slice()),
            ("helpdesk", self.helpdesk.as_slice()),
        ]
    }

    /// Every product name must contain a non-whitespace character
    pub fn validate(&self) -> Result<()> {
        for (key, products) in self.lists() {
            if products.iter().any(|p| p.trim().is_empty()) {
                return Err(AdvisorError::CatalogParse(format!(
                    "empty product name in \"{}\"",
                    key
                )));
            }
        }
        Ok(())
    }
}
