//! Stack Advisor - tool inventory classification and consolidation advice
//!
//! Three pure components over one inventory snapshot:
//! - Category resolution: confirmed override, else confidence-gated AI category, else "Other"
//! - Subdomain classification: ordered rule table, grouped into overlap groups
//! - Suggestion rules: ordered (trigger, suggestion) table, capped output
//!
//! Nothing here performs I/O except catalog loading in [`config`].

pub mod collaborators;
pub mod config;
pub mod error;
pub mod model;
pub mod report;
pub mod resolver;
pub mod subdomain;
pub mod suggestions;

pub use config::{
    ProductCatalog, CONFIDENCE_TRUST_THRESHOLD, MIN_OVERLAP_GROUP_SIZE, SUGGESTION_CAP,
};
pub use error::{AdvisorError, Result};
pub use model::{OverlapGroup, Suggestion, SuggestionAction, Tool, OTHER_CATEGORY};
pub use report::{AdvisoryReport, ResolvedTool};
pub use resolver::{effective_lane, needs_review, resolve_category};
pub use subdomain::{compute_overlap, derive_subdomain, subdomain_labels};
pub use suggestions::{get_suggestions, has_lane, has_name, SuggestionEngine, SuggestionRule};
