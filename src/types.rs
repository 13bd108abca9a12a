use std::path::Path;
use std::str::FromStr;

use clap::ValueEnum;
use serde::Deserialize;

/// Order in which the extractor walks the document.
///
/// - `DepthFirst`: pre-order, each container is fully explored before its
///   next sibling (default behaviour).
/// - `BreadthFirst`: every node of one depth is visited before any node of
///   the next depth.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Deserialize, ValueEnum)]
#[serde(rename_all = "kebab-case")]
pub enum TraversalOrder {
    #[default]
    DepthFirst,
    BreadthFirst,
}

impl FromStr for TraversalOrder {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "depth-first" | "dfs" => Ok(TraversalOrder::DepthFirst),
            "breadth-first" | "bfs" => Ok(TraversalOrder::BreadthFirst),
            other => Err(format!(
                "invalid traversal order: {other} (expected \"depth-first\" or \"breadth-first\")"
            )),
        }
    }
}

/// Serialized representation of an input document.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize, ValueEnum)]
#[serde(rename_all = "lowercase")]
pub enum InputFormat {
    Toml,
    Json,
}

impl InputFormat {
    /// Guess the format from a file extension (`.toml` / `.json`).
    pub fn from_path(path: &Path) -> Option<Self> {
        path.extension()
            .and_then(|ext| ext.to_str())
            .and_then(|ext| ext.parse().ok())
    }
}

impl FromStr for InputFormat {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "toml" => Ok(InputFormat::Toml),
            "json" => Ok(InputFormat::Json),
            other => Err(format!(
                "invalid input format: {other} (expected \"toml\" or \"json\")"
            )),
        }
    }
}

/// How the CLI prints the resulting plan.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, ValueEnum)]
pub enum OutputFormat {
    /// One line per task with priority and dependencies.
    #[default]
    Text,
    /// The ordered payloads as a JSON array.
    Json,
}
