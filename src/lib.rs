// src/lib.rs

pub mod cli;
pub mod config;
pub mod dag;
pub mod errors;
pub mod logging;
pub mod plan;
pub mod types;

use anyhow::{Context, Result};
use serde_json::Value;
use tracing::debug;

use crate::cli::CliArgs;
use crate::config::{PlanOptions, load_document};
use crate::types::OutputFormat;

pub use crate::errors::PlanError;
pub use crate::plan::{Plan, PlanStep, order_tasks};

/// Build the plan for an in-memory document.
pub fn build_plan(document: &Value, options: &PlanOptions) -> errors::Result<Plan> {
    Plan::build(document, options)
}

/// High-level entry point used by `main.rs`.
///
/// This wires together:
/// - document loading
/// - extraction / linking / scheduling
/// - printing the plan to stdout
pub fn run(args: CliArgs) -> Result<()> {
    let document = load_document(&args.config, args.format)
        .with_context(|| format!("failed to load '{}'", args.config.display()))?;

    let options = PlanOptions::default()
        .with_traversal(args.traversal)
        .with_require_tasks(!args.allow_empty);
    debug!(?options, "planning");

    let plan = build_plan(&document, &options)?;

    match args.output {
        OutputFormat::Text => print!("{}", plan.render_text()),
        OutputFormat::Json => {
            let payloads = plan.into_payloads();
            println!("{}", serde_json::to_string_pretty(&payloads)?);
        }
    }

    Ok(())
}
