//! Prioritized suggestion rules.
//!
//! Rules are `(trigger, suggestion)` pairs evaluated once in declared order.
//! Every triggered rule contributes its suggestion and the list is cut at the
//! cap; declaration order is the priority.

use crate::config::{ProductCatalog, SUGGESTION_CAP};
use crate::model::{Suggestion, SuggestionAction, Tool};
use crate::resolver::effective_lane;
use std::fmt;
use tracing::{debug, warn};

/// Lane names the default rules test and target
pub const ERP_LANE: &str = "ERP";
pub const DATA_LANE: &str = "Data";
pub const DEV_IT_LANE: &str = "Dev/IT";
pub const COMMS_LANE: &str = "Comms";
pub const SERVICE_LANE: &str = "Service";

// ============================================================================
// Trigger primitives
// ============================================================================

/// Any tool name contains any candidate (case-insensitive)
pub fn has_name<S: AsRef<str>>(tools: &[Tool], candidates: &[S]) -> bool {
    let needles: Vec<String> = candidates
        .iter()
        .map(|c| c.as_ref().to_lowercase())
        .collect();

    tools.iter().any(|tool| {
        let name = tool.name.to_lowercase();
        needles.iter().any(|needle| name.contains(needle.as_str()))
    })
}

/// Any tool's effective lane equals `lane` exactly
pub fn has_lane(tools: &[Tool], lane: &str) -> bool {
    tools.iter().any(|tool| effective_lane(tool) == lane)
}

// ============================================================================
// Rules
// ============================================================================

pub type Trigger = Box<dyn Fn(&[Tool]) -> bool + Send + Sync>;

pub struct SuggestionRule {
    pub trigger: Trigger,
    pub suggestion: Suggestion,
}

impl SuggestionRule {
    pub fn new<F>(trigger: F, suggestion: Suggestion) -> Self
    where
        F: Fn(&[Tool]) -> bool + Send + Sync + 'static,
    {
        Self {
            trigger: Box::new(trigger),
            suggestion,
        }
    }

    pub fn id(&self) -> &str {
        &self.suggestion.id
    }

    pub fn fires(&self, tools: &[Tool]) -> bool {
        (self.trigger)(tools)
    }
}

impl fmt::Debug for SuggestionRule {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("SuggestionRule")
            .field("suggestion", &self.suggestion)
            .finish_non_exhaustive()
    }
}

fn suggestion(id: &str, prompt: &str, products: &[String], lane: &str) -> Suggestion {
    Suggestion {
        id: id.to_string(),
        prompt: prompt.to_string(),
        actions: products
            .iter()
            .map(|product| SuggestionAction::add(product.as_str(), lane))
            .collect(),
    }
}

/// Built-in rules, highest priority first
fn default_rules(catalog: &ProductCatalog) -> Vec<SuggestionRule> {
    let marketing = catalog.marketing_automation.clone();
    let cdp = catalog.cdp.clone();
    let cloud = catalog.cloud_providers.clone();
    let monitoring = catalog.monitoring.clone();

    vec![
        SuggestionRule::new(
            |tools| !has_lane(tools, ERP_LANE),
            suggestion(
                "missing-erp",
                "No ERP system in your stack. Want to add one?",
                &catalog.erp,
                ERP_LANE,
            ),
        ),
        SuggestionRule::new(
            move |tools| has_name(tools, &marketing[..]) && !has_name(tools, &cdp[..]),
            suggestion(
                "missing-cdp",
                "You run marketing automation without a customer data platform. Unify your customer data?",
                &catalog.cdp,
                DATA_LANE,
            ),
        ),
        SuggestionRule::new(
            move |tools| has_name(tools, &cloud[..]) && !has_name(tools, &monitoring[..]),
            suggestion(
                "missing-monitoring",
                "Cloud infrastructure detected but no monitoring. Add observability?",
                &catalog.monitoring,
                DEV_IT_LANE,
            ),
        ),
        SuggestionRule::new(
            |tools| has_lane(tools, COMMS_LANE) && !has_lane(tools, SERVICE_LANE),
            suggestion(
                "missing-helpdesk",
                "You have communication tools but no helpdesk. Add customer service tooling?",
                &catalog.helpdesk,
                SERVICE_LANE,
            ),
        ),
    ]
}

// ============================================================================
// Engine
// ============================================================================

/// Ordered rule table plus the output cap
#[derive(Debug)]
pub struct SuggestionEngine {
    rules: Vec<SuggestionRule>,
    max_suggestions: usize,
}

impl Default for SuggestionEngine {
    fn default() -> Self {
        Self::new(&ProductCatalog::default())
    }
}

impl SuggestionEngine {
    /// Engine with the built-in rules over the given catalog.
    /// Rules whose catalog list is empty are skipped.
    pub fn new(catalog: &ProductCatalog) -> Self {
        let rules = default_rules(catalog)
            .into_iter()
            .filter(|rule| !rule.suggestion.actions.is_empty())
            .collect();
        Self {
            rules,
            max_suggestions: SUGGESTION_CAP,
        }
    }

    /// Engine with no rules
    pub fn empty() -> Self {
        Self {
            rules: Vec::new(),
            max_suggestions: SUGGESTION_CAP,
        }
    }

    /// Append a rule with the lowest priority so far.
    /// A rule with no actions is dropped, as in [`SuggestionEngine::new`].
    pub fn with_rule(mut self, rule: SuggestionRule) -> Self {
        if rule.suggestion.actions.is_empty() {
            warn!("Dropping rule {} with no actions", rule.id());
            return self;
        }
        self.rules.push(rule);
        self
    }

    pub fn with_max_suggestions(mut self, max: usize) -> Self {
        self.max_suggestions = max;
        self
    }

    pub fn rules(&self) -> &[SuggestionRule] {
        &self.rules
    }

    pub fn max_suggestions(&self) -> usize {
        self.max_suggestions
    }

    /// Suggestions of every triggered rule, in declared order, capped
    pub fn suggest(&self, tools: &[Tool]) -> Vec<Suggestion> {
        let triggered: Vec<Suggestion> = self
            .rules
            .iter()
            .filter(|rule| rule.fires(tools))
            .take(self.max_suggestions)
            .map(|rule| rule.suggestion.clone())
            .collect();

        debug!(
            "{} of {} rules kept for {} tools",
            triggered.len(),
            self.rules.len(),
            tools.len()
        );

        triggered
    }
}

/// Suggestions from the built-in rules and catalog
pub fn get_suggestions(tools: &[Tool]) -> Vec<Suggestion> {
    SuggestionEngine::default().suggest(tools)
}
