// src/cli.rs

//! CLI argument parsing using `clap`.

use std::path::PathBuf;

use clap::{Parser, ValueEnum};

use crate::config::default_document_path;
use crate::types::{InputFormat, OutputFormat, TraversalOrder};

/// Command-line arguments for `taskplan`.
#[derive(Debug, Clone, Parser)]
#[command(
    name = "taskplan",
    version,
    about = "Find tasks in a config document and print them in execution order.",
    long_about = None
)]
pub struct CliArgs {
    /// Path to the document (TOML or JSON).
    ///
    /// Default: `Tasks.toml` in the current working directory.
    #[arg(long, value_name = "PATH", default_value_os_t = default_document_path())]
    pub config: PathBuf,

    /// Input format. Inferred from the file extension when omitted.
    #[arg(long, value_enum, value_name = "FORMAT")]
    pub format: Option<InputFormat>,

    /// Order in which the document is searched for tasks.
    #[arg(long, value_enum, value_name = "ORDER", default_value_t = TraversalOrder::DepthFirst)]
    pub traversal: TraversalOrder,

    /// How to print the plan.
    #[arg(long, value_enum, value_name = "FORMAT", default_value_t = OutputFormat::Text)]
    pub output: OutputFormat,

    /// Print an empty plan instead of failing when no task is found.
    #[arg(long)]
    pub allow_empty: bool,

    /// Logging level (error, warn, info, debug, trace).
    ///
    /// If omitted, `TASKPLAN_LOG` or a default level will be used.
    #[arg(long, value_enum, value_name = "LEVEL")]
    pub log_level: Option<LogLevel>,
}

/// Log level as exposed on the CLI.
#[derive(Debug, Copy, Clone, ValueEnum)]
pub enum LogLevel {
    Error,
    Warn,
    Info,
    Debug,
    Trace,
}

/// Convenience wrapper around `CliArgs::parse()`.
pub fn parse() -> CliArgs {
    CliArgs::parse()
}
