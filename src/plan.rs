// src/plan.rs

//! Ordered execution plan handed back to callers.

use std::fmt::Write as _;

use serde::Serialize;
use serde_json::Value;
use tracing::info;

use crate::config::PlanOptions;
use crate::dag::{TaskGraph, TaskIndex, extract_tasks, schedule};
use crate::errors::{PlanError, Result};

/// One task in its final position.
#[derive(Debug, Clone, Serialize)]
pub struct PlanStep {
    /// 0-based position in the plan.
    pub position: usize,
    pub id: String,
    pub command: String,
    pub priority: i64,
    pub dependencies: Vec<String>,
    /// The record exactly as it appeared in the document.
    pub payload: Value,
}

/// Tasks of one document in execution order.
#[derive(Debug, Clone, Default, Serialize)]
pub struct Plan {
    pub steps: Vec<PlanStep>,
}

impl Plan {
    /// Extract, link and schedule the tasks of `document`.
    pub fn build(document: &Value, options: &PlanOptions) -> Result<Self> {
        let (graph, order) = ordered_graph(document, options)?;

        let steps = order
            .iter()
            .enumerate()
            .map(|(position, idx)| {
                let task = graph.task(*idx);
                PlanStep {
                    position,
                    id: task.id.clone(),
                    command: task.command.clone(),
                    priority: task.base_priority,
                    dependencies: task.dependency_ids.clone(),
                    payload: task.payload.clone(),
                }
            })
            .collect::<Vec<_>>();

        info!(steps = steps.len(), "built plan");
        Ok(Self { steps })
    }

    pub fn len(&self) -> usize {
        self.steps.len()
    }

    pub fn is_empty(&self) -> bool {
        self.steps.is_empty()
    }

    /// Task ids in plan order.
    pub fn ids(&self) -> Vec<&str> {
        self.steps.iter().map(|s| s.id.as_str()).collect()
    }

    pub fn payloads(&self) -> Vec<&Value> {
        self.steps.iter().map(|s| &s.payload).collect()
    }

    pub fn into_payloads(self) -> Vec<Value> {
        self.steps.into_iter().map(|s| s.payload).collect()
    }

    /// Human-readable listing, one line per step.
    pub fn render_text(&self) -> String {
        let mut out = String::new();
        let _ = writeln!(out, "plan ({} tasks):", self.steps.len());
        for step in &self.steps {
            let _ = writeln!(
                out,
                "  {:>3}. {} [priority {}]",
                step.position + 1,
                step.id,
                step.priority
            );
            let _ = writeln!(out, "       command: {}", step.command);
            if !step.dependencies.is_empty() {
                let _ = writeln!(out, "       after: {:?}", step.dependencies);
            }
        }
        out
    }
}

/// Order the tasks of `document` and return their payloads.
///
/// Uses default [`PlanOptions`].
pub fn order_tasks(document: &Value) -> Result<Vec<Value>> {
    let (graph, order) = ordered_graph(document, &PlanOptions::default())?;
    Ok(graph.into_payloads(&order))
}

/// Extract, link and schedule; shared by every public entry point.
fn ordered_graph(document: &Value, options: &PlanOptions) -> Result<(TaskGraph, Vec<TaskIndex>)> {
    let extracted = extract_tasks(document, options.traversal);
    if extracted.is_empty() && options.require_tasks {
        return Err(PlanError::EmptyGraph);
    }

    let graph = TaskGraph::build(extracted)?;
    let order = schedule(&graph)?;
    Ok((graph, order))
}
