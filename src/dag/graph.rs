// src/dag/graph.rs

use std::collections::HashMap;

use serde_json::Value;
use tracing::{debug, warn};

use crate::dag::task::{Task, TaskIndex};
use crate::errors::{PlanError, Result};

/// Dependency graph over the extracted tasks.
///
/// Tasks live in an arena addressed by [`TaskIndex`]; edges are stored as
/// index lists on each task (`dependencies` forward, `children` reverse).
/// Live tasks are indexed `0..len()` in extraction order.
#[derive(Debug, Clone)]
pub struct TaskGraph {
    tasks: Vec<Task>,
    by_id: HashMap<String, TaskIndex>,
    roots: Vec<TaskIndex>,
    /// Records replaced by a later record with the same id.
    shadowed: Vec<Task>,
}

impl TaskGraph {
    /// Link extracted tasks into a graph.
    ///
    /// When two records share an id, the later one wins and the earlier one
    /// is dropped from the graph (see [`TaskGraph::shadowed`]). Fails with
    /// [`PlanError::UnresolvedDependency`] on the first dependency id that
    /// names no task; no partial graph is returned.
    pub fn build(extracted: Vec<Task>) -> Result<Self> {
        // Last write wins.
        let mut winner: HashMap<&str, usize> = HashMap::new();
        for (pos, task) in extracted.iter().enumerate() {
            winner.insert(task.id.as_str(), pos);
        }
        let keep: Vec<bool> = extracted
            .iter()
            .enumerate()
            .map(|(pos, task)| winner.get(task.id.as_str()) == Some(&pos))
            .collect();

        let mut tasks = Vec::with_capacity(winner.len());
        let mut shadowed = Vec::new();
        for (task, keep) in extracted.into_iter().zip(keep) {
            if keep {
                tasks.push(task);
            } else {
                warn!(
                    id = %task.id,
                    order = task.extraction_order,
                    "duplicate task id; later record replaces this one"
                );
                shadowed.push(task);
            }
        }

        let by_id: HashMap<String, TaskIndex> = tasks
            .iter()
            .enumerate()
            .map(|(i, t)| (t.id.clone(), TaskIndex(i)))
            .collect();

        let mut roots = Vec::new();
        for i in 0..tasks.len() {
            let idx = TaskIndex(i);
            if tasks[i].is_root() {
                roots.push(idx);
            }

            let mut deps = Vec::with_capacity(tasks[i].dependency_ids.len());
            for dep_id in &tasks[i].dependency_ids {
                let dep = by_id.get(dep_id).copied().ok_or_else(|| {
                    PlanError::UnresolvedDependency {
                        task: tasks[i].id.clone(),
                        dependency: dep_id.clone(),
                    }
                })?;
                deps.push(dep);
            }

            for &dep in &deps {
                tasks[dep.0].children.push(idx);
            }
            tasks[i].dependencies = deps;
        }

        debug!(
            tasks = tasks.len(),
            roots = roots.len(),
            shadowed = shadowed.len(),
            "linked task graph"
        );

        Ok(Self {
            tasks,
            by_id,
            roots,
            shadowed,
        })
    }

    pub fn len(&self) -> usize {
        self.tasks.len()
    }

    pub fn is_empty(&self) -> bool {
        self.tasks.is_empty()
    }

    /// All live tasks, in extraction order.
    pub fn tasks(&self) -> &[Task] {
        &self.tasks
    }

    pub fn task(&self, idx: TaskIndex) -> &Task {
        &self.tasks[idx.0]
    }

    /// Tasks without dependencies, in extraction order.
    pub fn roots(&self) -> &[TaskIndex] {
        &self.roots
    }

    pub fn index_of(&self, id: &str) -> Option<TaskIndex> {
        self.by_id.get(id).copied()
    }

    pub fn shadowed(&self) -> &[Task] {
        &self.shadowed
    }

    /// Consume the graph and return the payloads of `order`.
    ///
    /// `order` must name each live task at most once, as [`schedule`]
    /// produces it. Out-of-range or repeated indices are skipped; debug
    /// builds assert that none were.
    ///
    /// [`schedule`]: crate::dag::schedule
    pub fn into_payloads(self, order: &[TaskIndex]) -> Vec<Value> {
        let mut slots: Vec<Option<Value>> =
            self.tasks.into_iter().map(|t| Some(t.payload)).collect();
        let payloads: Vec<Value> = order
            .iter()
            .filter_map(|idx| slots.get_mut(idx.0).and_then(Option::take))
            .collect();
        debug_assert_eq!(
            payloads.len(),
            order.len(),
            "order holds repeated or out-of-range task indices"
        );
        payloads
    }
}
