//! Subdomain classification and overlap detection.
//!
//! Each tool gets one functional subdomain from an ordered rule table; tools
//! sharing a subdomain are reported as overlap groups.
//!
//! # Rule order
//! The first matching rule wins, so a tool whose text mentions both email
//! marketing and CRM vocabulary lands in whichever is declared first.

use crate::config::MIN_OVERLAP_GROUP_SIZE;
use crate::model::{OverlapGroup, Tool, OTHER_CATEGORY};
use lazy_static::lazy_static;
use regex::Regex;
use std::collections::BTreeMap;
use tracing::debug;

// ============================================================================
// Rule table
// ============================================================================

/// One (pattern, label) entry of the subdomain table
#[derive(Debug)]
pub struct SubdomainRule {
    pub label: &'static str,
    pub pattern: Regex,
}

impl SubdomainRule {
    fn new(label: &'static str, pattern: &str) -> Self {
        Self {
            label,
            pattern: Regex::new(pattern).unwrap(),
        }
    }

    pub fn matches(&self, text: &str) -> bool {
        self.pattern.is_match(text)
    }
}

lazy_static! {
    /// Declared order is the tie-break order. Entries are plain substrings,
    /// except the bare `ads` token which needs word boundaries ("leads", "uploads").
    pub static ref SUBDOMAIN_RULES: Vec<SubdomainRule> = vec![
        SubdomainRule::new(
            "Email Marketing",
            r"(?i)(mailchimp|hubspot|klaviyo|sendgrid|brevo|sendinblue|constant contact|campaign monitor|email marketing|email campaign|newsletter)",
        ),
        SubdomainRule::new(
            "CRM",
            r"(?i)(crm|salesforce|pipedrive|zoho|dynamics 365|freshsales|copper)",
        ),
        SubdomainRule::new(
            "Marketing Automation",
            r"(?i)(marketing automation|marketo|pardot|activecampaign|eloqua|drip)",
        ),
        SubdomainRule::new(
            "Customer Support",
            r"(?i)(zendesk|freshdesk|intercom|help ?desk|help scout|gorgias|customer support|ticketing)",
        ),
        SubdomainRule::new(
            "Analytics",
            r"(?i)(analytics|mixpanel|amplitude|heap|hotjar|tableau|looker|power bi)",
        ),
        SubdomainRule::new(
            "Chat/Messaging",
            r"(?i)(slack|microsoft teams|teams|discord|chat|messaging|whatsapp)",
        ),
        SubdomainRule::new(
            "CMS",
            r"(?i)(wordpress|contentful|webflow|drupal|sanity|strapi|cms|content management)",
        ),
        SubdomainRule::new(
            "Advertising",
            r"(?i)(google ads|facebook ads|meta ads|linkedin ads|adwords|advertis|ad manager|\bads\b)",
        ),
    ];
}

/// Subdomain labels in evaluation order
pub fn subdomain_labels() -> Vec<&'static str> {
    SUBDOMAIN_RULES.iter().map(|rule| rule.label).collect()
}

// ============================================================================
// Classification
// ============================================================================

/// Lower-cased text the rules are matched against
fn search_text(tool: &Tool) -> String {
    let mut text = format!("{} {}", tool.name, tool.category);
    if let Some(description) = &tool.description {
        text.push(' ');
        text.push_str(description);
    }
    text.to_lowercase()
}

/// Derive the canonical subdomain of a tool.
///
/// Falls back to the tool's own category, or `"Other"` when that is empty.
pub fn derive_subdomain(tool: &Tool) -> String {
    let text = search_text(tool);

    if let Some(rule) = SUBDOMAIN_RULES.iter().find(|rule| rule.matches(&text)) {
        return rule.label.to_string();
    }

    if tool.category.is_empty() {
        OTHER_CATEGORY.to_string()
    } else {
        tool.category.clone()
    }
}

// ============================================================================
// Overlap detection
// ============================================================================

/// Group tools by subdomain and keep groups large enough to signal overlap.
///
/// Groups are ordered by size (descending), then label (ascending). Tools
/// inside a group keep their input order.
pub fn compute_overlap(tools: &[Tool]) -> Vec<OverlapGroup> {
    let mut buckets: BTreeMap<String, Vec<Tool>> = BTreeMap::new();
    for tool in tools {
        buckets
            .entry(derive_subdomain(tool))
            .or_default()
            .push(tool.clone());
    }

    let mut groups: Vec<OverlapGroup> = buckets
        .into_iter()
        .filter(|(_, members)| members.len() >= MIN_OVERLAP_GROUP_SIZE)
        .map(|(subdomain, tools)| OverlapGroup { subdomain, tools })
        .collect();

    groups.sort_by(|a, b| {
        b.len()
            .cmp(&a.len())
            .then_with(|| a.subdomain.cmp(&b.subdomain))
    });

    debug!(
        "{} overlap groups from {} tools",
        groups.len(),
        tools.len()
    );

    groups
}

#[cfg(test)]
mod tests {
    use super::*;

    fn tool(name: &str, category: &str) -> Tool {
        Tool::new(name.to_lowercase(), name, category)
    }

    #[test]
    fn test_rule_order() {
        assert_eq!(
            subdomain_labels(),
            vec![
                "Email Marketing",
                "CRM",
                "Marketing Automation",
                "Customer Support",
                "Analytics",
                "Chat/Messaging",
                "CMS",
                "Advertising",
            ]
        );
    }

    #[test]
    fn test_earlier_rule_wins() {
        let hubspot = tool("HubSpot CRM Email Campaigns", "Marketing");
        let crm = SUBDOMAIN_RULES.iter().find(|r| r.label == "CRM").unwrap();
        let text = search_text(&hubspot);
        assert!(crm.matches(&text));
        assert_eq!(derive_subdomain(&hubspot), "Email Marketing");
    }

    #[test]
    fn test_derive_subdomain_matches() {
        assert_eq!(derive_subdomain(&tool("Salesforce", "Sales")), "CRM");
        assert_eq!(derive_subdomain(&tool("Zendesk", "Service")), "Customer Support");
        assert_eq!(derive_subdomain(&tool("Mixpanel", "Data")), "Analytics");
        assert_eq!(derive_subdomain(&tool("Slack", "Comms")), "Chat/Messaging");
        assert_eq!(derive_subdomain(&tool("Webflow", "Web")), "CMS");
        assert_eq!(derive_subdomain(&tool("Google Ads", "Marketing")), "Advertising");
        assert_eq!(derive_subdomain(&tool("Marketo", "Marketing")), "Marketing Automation");
    }

    #[test]
    fn test_compound_names_match_substrings() {
        for name in ["SugarCRM", "SuiteCRM", "EspoCRM"] {
            assert_eq!(derive_subdomain(&tool(name, "Sales")), "CRM");
        }
        assert_eq!(derive_subdomain(&tool("HeapIO", "Data")), "Analytics");
        assert_eq!(derive_subdomain(&tool("Headless CMS", "")), "CMS");
    }

    #[test]
    fn test_compound_crm_overlaps_with_salesforce() {
        let tools = vec![tool("Salesforce", "Sales"), tool("SugarCRM", "Sales")];
        let groups = compute_overlap(&tools);
        assert_eq!(groups.len(), 1);
        assert_eq!(groups[0].subdomain, "CRM");
        assert_eq!(groups[0].len(), 2);
    }

    #[test]
    fn test_ads_token_needs_word_boundary() {
        assert_eq!(derive_subdomain(&tool("Leads Inbox", "Sales")), "Sales");
        assert_eq!(derive_subdomain(&tool("Reddit Ads", "Marketing")), "Advertising");
    }

    #[test]
    fn test_case_insensitive() {
        assert_eq!(derive_subdomain(&tool("MAILCHIMP", "")), "Email Marketing");
    }

    #[test]
    fn test_description_is_matched() {
        let acme = tool("Acme", "Sales").with_description("Lightweight CRM for agencies");
        assert_eq!(derive_subdomain(&acme), "CRM");
    }

    #[test]
    fn test_fallback_to_category() {
        assert_eq!(derive_subdomain(&tool("Figma", "Design")), "Design");
        assert_eq!(derive_subdomain(&tool("Figma", "")), OTHER_CATEGORY);
    }

    #[test]
    fn test_overlap_empty_and_singletons() {
        assert!(compute_overlap(&[]).is_empty());
        assert!(compute_overlap(&[tool("Slack", "Comms")]).is_empty());
        let distinct = vec![
            tool("Slack", "Comms"),
            tool("Salesforce", "Sales"),
            tool("Figma", "Design"),
        ];
        assert!(compute_overlap(&distinct).is_empty());
    }

    #[test]
    fn test_overlap_ordering() {
        let tools = vec![
            tool("x1", "B"),
            tool("x2", "A"),
            tool("x3", "C"),
            tool("x4", "B"),
            tool("x5", "A"),
            tool("x6", "C"),
            tool("x7", "B"),
            tool("x8", "A"),
        ];
        let groups = compute_overlap(&tools);
        let summary: Vec<(&str, usize)> = groups
            .iter()
            .map(|g| (g.subdomain.as_str(), g.len()))
            .collect();
        assert_eq!(summary, vec![("A", 3), ("B", 3), ("C", 2)]);
    }

    #[test]
    fn test_overlap_preserves_input_order() {
        let tools = vec![
            tool("Slack", "Comms"),
            tool("Figma", "Design"),
            tool("Discord", "Comms"),
            tool("Microsoft Teams", "Comms"),
        ];
        let groups = compute_overlap(&tools);
        assert_eq!(groups.len(), 1);
        let names: Vec<&str> = groups[0].tools.iter().map(|t| t.name.as_str()).collect();
        assert_eq!(names, vec!["Slack", "Discord", "Microsoft Teams"]);
    }

    #[test]
    fn test_overlap_idempotent() {
        let tools = vec![tool("Mailchimp", "Marketing"), tool("HubSpot", "Marketing")];
        assert_eq!(compute_overlap(&tools), compute_overlap(&tools));
    }
}
