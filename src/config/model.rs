// src/config/model.rs

use serde::Deserialize;

use crate::types::TraversalOrder;

/// Options controlling how a document is turned into a plan.
///
/// Deserializable so that embedding applications can keep it in their own
/// settings file:
///
/// ```toml
/// traversal = "breadth-first"
/// require_tasks = true
/// ```
///
/// All fields are optional and default to the behaviour described below.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct PlanOptions {
    /// How the document is walked; also fixes extraction order.
    ///
    /// Default: depth-first.
    #[serde(default)]
    pub traversal: TraversalOrder,

    /// Fail with `EmptyGraph` when the document holds no task at all.
    ///
    /// Default: `false` (an empty document yields an empty plan).
    #[serde(default)]
    pub require_tasks: bool,
}

impl PlanOptions {
    pub fn with_traversal(mut self, traversal: TraversalOrder) -> Self {
        self.traversal = traversal;
        self
    }

    pub fn with_require_tasks(mut self, require_tasks: bool) -> Self {
        self.require_tasks = require_tasks;
        self
    }
}
