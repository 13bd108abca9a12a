// src/errors.rs

//! Crate-wide error type and result alias.

use thiserror::Error;

#[derive(Error, Debug)]
pub enum PlanError {
    /// A task names a dependency id that no extracted task carries.
    #[error("task '{task}' has unknown dependency '{dependency}'")]
    UnresolvedDependency { task: String, dependency: String },

    /// Eligibility propagation stopped before every task was placed.
    ///
    /// `cycle` holds the tasks that sit on an actual cycle, `unplaced` every
    /// task that could never become eligible (cycle members and everything
    /// downstream of them), both in extraction order.
    #[error(
        "cycle detected in task graph involving {}; {} task(s) could not be scheduled",
        .cycle.join(", "),
        .unplaced.len()
    )]
    CyclicDependency {
        cycle: Vec<String>,
        unplaced: Vec<String>,
    },

    #[error("document does not contain any task")]
    EmptyGraph,

    #[error("Unsupported input format: {0}")]
    UnsupportedFormat(String),

    #[error("IO error: {0}")]
    IoError(#[from] std::io::Error),

    #[error("TOML parsing error: {0}")]
    TomlError(#[from] toml::de::Error),

    #[error("JSON parsing error: {0}")]
    JsonError(#[from] serde_json::Error),
}

pub type Result<T> = std::result::Result<T, PlanError>;
