// src/dag/extract.rs

//! Walks an arbitrary document and collects every task record in it.

use std::collections::VecDeque;

use serde_json::Value;
use tracing::debug;

use crate::dag::task::{Candidate, Task};
use crate::types::TraversalOrder;

/// Collect every task-shaped map in `document`, in discovery order.
///
/// Task records are not searched for nested tasks. Maps and sequences that
/// are not tasks (including near-misses) are searched; scalars are skipped.
/// Each returned task carries its position in the result as
/// `extraction_order`. Duplicate ids are all returned; resolving them is
/// left to the graph builder.
pub fn extract_tasks(document: &Value, traversal: TraversalOrder) -> Vec<Task> {
    let mut tasks = Vec::new();
    let mut pending: VecDeque<&Value> = VecDeque::from([document]);

    while let Some(value) = pending.pop_front() {
        match Candidate::inspect(value) {
            Candidate::Task(fields) => {
                let order = tasks.len();
                debug!(id = %fields.id, priority = fields.priority, order, "extracted task");
                tasks.push(Task::new(fields, order, value.clone()));
                continue;
            }
            Candidate::Malformed(reason) => {
                debug!(%reason, "skipping task-like map; searching its contents");
            }
            Candidate::NotACandidate => {}
        }

        let children: Vec<&Value> = match value {
            Value::Object(map) => map.values().collect(),
            Value::Array(items) => items.iter().collect(),
            _ => continue,
        };

        match traversal {
            // Pre-order: this node's children go before its pending siblings.
            TraversalOrder::DepthFirst => {
                for child in children.into_iter().rev() {
                    pending.push_front(child);
                }
            }
            TraversalOrder::BreadthFirst => pending.extend(children),
        }
    }

    tasks
}
