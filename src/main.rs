//! Stack Advisor CLI
//!
//! # Input (via stdin)
//! JSON inventory: an array of tools, or `{ "tools": [...] }`
//!
//! # Output (via stdout)
//! JSON for the selected command. Logs go to stderr (`RUST_LOG=info`).

use chrono::Utc;
use clap::{Parser, Subcommand};
use colored::Colorize;
use serde::Serialize;
use stack_advisor::model::InventoryInput;
use stack_advisor::{
    compute_overlap, subdomain_labels, AdvisorError, AdvisoryReport, OverlapGroup,
    ProductCatalog, ResolvedTool, Result, Suggestion, SuggestionEngine, Tool,
};
use std::io::{self, Read};
use std::path::PathBuf;
use tracing::{debug, error, info, warn};

#[derive(Parser, Debug)]
#[command(name = "stack-advisor", version, about = "Classify a tool inventory and suggest what to add")]
struct Cli {
    /// Product catalog JSON (defaults to <config dir>/stack-advisor/catalog.json)
    #[arg(long, global = true)]
    catalog: Option<PathBuf>,

    /// Pretty-print JSON output
    #[arg(long, global = true)]
    pretty: bool,

    #[command(subcommand)]
    command: Option<Command>,
}

#[derive(Subcommand, Debug, Clone, Copy)]
enum Command {
    /// Full report: resolved tools, overlaps and suggestions
    Advise,
    /// Resolved category and review flag per tool
    Resolve,
    /// Overlap groups only
    Overlap,
    /// Capped suggestions only
    Suggest,
    /// Subdomain labels in matching order
    Subdomains,
}

/// Report envelope with generation time
#[derive(Debug, Serialize)]
struct ReportOutput {
    generated: String,
    #[serde(flatten)]
    report: AdvisoryReport,
}

fn main() {
    tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
        .with_writer(std::io::stderr)
        .init();

    let cli = Cli::parse();

    if let Err(e) = run(&cli) {
        error!("Error: {}", e);
        eprintln!("{} {}", "error:".red().bold(), e);
        std::process::exit(e.exit_code());
    }
}

fn run(cli: &Cli) -> Result<()> {
    match cli.command.unwrap_or(Command::Advise) {
        Command::Subdomains => emit(&subdomain_labels(), cli.pretty),
        Command::Resolve => {
            let tools = read_inventory()?;
            let resolved: Vec<ResolvedTool> = tools.iter().map(ResolvedTool::from_tool).collect();
            log_review(&resolved);
            emit(&resolved, cli.pretty)
        }
        Command::Overlap => {
            let tools = read_inventory()?;
            let overlaps = compute_overlap(&tools);
            log_overlaps(&overlaps);
            emit(&overlaps, cli.pretty)
        }
        Command::Suggest => {
            let engine = SuggestionEngine::new(&load_catalog(cli.catalog.as_ref())?);
            let tools = read_inventory()?;
            let suggestions = engine.suggest(&tools);
            log_suggestions(&suggestions);
            emit(&suggestions, cli.pretty)
        }
        Command::Advise => {
            let engine = SuggestionEngine::new(&load_catalog(cli.catalog.as_ref())?);
            let tools = read_inventory()?;
            let report = AdvisoryReport::build(&tools, &engine);
            log_review(&report.tools);
            log_overlaps(&report.overlaps);
            log_suggestions(&report.suggestions);
            info!(
                "{} tools, {} need review",
                report.tools.len(),
                report.review_count()
            );
            emit(
                &ReportOutput {
                    generated: Utc::now().to_rfc3339(),
                    report,
                },
                cli.pretty,
            )
        }
    }
}

fn read_inventory() -> Result<Vec<Tool>> {
    let mut input_json = String::new();
    io::stdin().read_to_string(&mut input_json)?;
    debug!("Received {} bytes of input", input_json.len());

    let input: InventoryInput = serde_json::from_str(&input_json)?;
    let tools = input.into_tools();
    info!("Loaded {} tools from stdin", tools.len());
    Ok(tools)
}

/// Explicit catalog paths must exist; a missing default catalog falls back to built-ins
fn load_catalog(path: Option<&PathBuf>) -> Result<ProductCatalog> {
    if let Some(path) = path {
        debug!("Loading catalog from: {:?}", path);
        return ProductCatalog::load_from(path);
    }

    let default_path = match ProductCatalog::default_path() {
        Ok(p) => p,
        Err(AdvisorError::NoConfigDir) => {
            warn!("No config directory, using built-in catalog");
            return Ok(ProductCatalog::default());
        }
        Err(e) => return Err(e),
    };

    match ProductCatalog::load_from(&default_path) {
        Ok(catalog) => {
            info!("Loaded catalog from {:?}", default_path);
            Ok(catalog)
        }
        Err(AdvisorError::CatalogNotFound(path)) => {
            debug!("No catalog at {:?}, using built-in catalog", path);
            Ok(ProductCatalog::default())
        }
        Err(e) => Err(e),
    }
}

fn emit<T: Serialize + ?Sized>(value: &T, pretty: bool) -> Result<()> {
    let json = if pretty {
        serde_json::to_string_pretty(value)
    } else {
        serde_json::to_string(value)
    }
    .map_err(AdvisorError::Output)?;
    println!("{}", json);
    Ok(())
}

fn log_review(tools: &[ResolvedTool]) {
    for tool in tools {
        let flag = if tool.needs_review {
            "REVIEW".red()
        } else {
            "OK".green()
        };
        info!("{} {} -> {} ({})", flag, tool.name.bold(), tool.category, tool.subdomain);
    }
}

fn log_overlaps(overlaps: &[OverlapGroup]) {
    for group in overlaps {
        let names: Vec<&str> = group.tools.iter().map(|t| t.name.as_str()).collect();
        info!(
            "{} [{}] {}",
            group.subdomain.bold(),
            group.len().to_string().yellow(),
            names.join(", ")
        );
    }
}

fn log_suggestions(suggestions: &[Suggestion]) {
    for suggestion in suggestions {
        let products: Vec<&str> = suggestion.actions.iter().map(|a| a.name.as_str()).collect();
        info!(
            "{} {} ({})",
            suggestion.id.yellow(),
            suggestion.prompt,
            products.join(", ")
        );
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_command_is_advise() {
        let cli = Cli::try_parse_from(["stack-advisor"]).unwrap();
        assert!(cli.command.is_none());
        assert!(!cli.pretty);
    }

    #[test]
    fn test_global_flags_after_subcommand() {
        let cli =
            Cli::try_parse_from(["stack-advisor", "suggest", "--catalog", "cat.json", "--pretty"])
                .unwrap();
        assert!(matches!(cli.command, Some(Command::Suggest)));
        assert_eq!(cli.catalog, Some(PathBuf::from("cat.json")));
        assert!(cli.pretty);
    }

    #[test]
    fn test_explicit_missing_catalog_is_error() {
        let path = std::env::temp_dir().join("stack-advisor-cli-missing.json");
        assert!(matches!(
            load_catalog(Some(&path)),
            Err(AdvisorError::CatalogNotFound(_))
        ));
    }

    #[test]
    fn test_emit_reports_output_error() {
        let mut unserializable = std::collections::BTreeMap::new();
        unserializable.insert(vec![1u8], 1u8);
        match emit(&unserializable, false) {
            Err(e @ AdvisorError::Output(_)) => assert_eq!(e.exit_code(), 1),
            other => panic!("expected Output error, got {:?}", other),
        }
    }

    #[test]
    fn test_report_output_flattens() {
        let report = AdvisoryReport::build(&[], &SuggestionEngine::default());
        let output = ReportOutput {
            generated: "2026-01-01T00:00:00+00:00".to_string(),
            report,
        };
        let value = serde_json::to_value(&output).unwrap();
        assert!(value.get("generated").is_some());
        assert!(value.get("suggestions").is_some());
        assert!(value.get("report").is_none());
    }
}
