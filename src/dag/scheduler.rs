// src/dag/scheduler.rs

use tracing::{debug, info};

use crate::dag::cycle::cyclic_dependency_error;
use crate::dag::graph::TaskGraph;
use crate::dag::ready::ReadyBuckets;
use crate::dag::task::{Task, TaskIndex};
use crate::errors::Result;

/// Produce the execution order of every task in `graph`.
///
/// Convenience wrapper around [`Scheduler::run`].
pub fn schedule(graph: &TaskGraph) -> Result<Vec<TaskIndex>> {
    Scheduler::new(graph).run()
}

/// Single-pass, priority-aware topological ordering.
///
/// Tasks become eligible once all their dependencies are placed, and wait
/// in [`ReadyBuckets`]. The scheduler repeatedly takes the front task of the
/// highest bucket and splices it into the output, scanning back from the
/// tail past tasks it may overtake:
///
/// - never past one of its direct dependencies,
/// - never past a task of strictly higher priority,
/// - never past a task declared earlier in the document.
///
/// A scheduler is consumed by [`Scheduler::run`]; nothing is reused between
/// documents.
#[derive(Debug)]
pub struct Scheduler<'g> {
    graph: &'g TaskGraph,
    /// Dependencies not yet placed, per task.
    remaining: Vec<usize>,
    ready: ReadyBuckets,
    order: Vec<TaskIndex>,
}

impl<'g> Scheduler<'g> {
    pub fn new(graph: &'g TaskGraph) -> Self {
        let remaining = graph
            .tasks()
            .iter()
            .map(|t| t.dependency_ids.len())
            .collect();

        Self {
            graph,
            remaining,
            ready: ReadyBuckets::new(),
            order: Vec::with_capacity(graph.len()),
        }
    }

    /// Run to completion.
    ///
    /// Fails with [`PlanError::CyclicDependency`](crate::errors::PlanError)
    /// if some tasks never become eligible.
    pub fn run(mut self) -> Result<Vec<TaskIndex>> {
        let mut newly_eligible: Vec<TaskIndex> = self.graph.roots().to_vec();

        loop {
            for idx in newly_eligible.drain(..) {
                let priority = self.task(idx).computed_priority();
                self.ready.push(priority, idx);
            }

            let Some(current) = self.ready.pop_highest() else {
                break;
            };

            let at = self.insertion_point(current);
            debug!(
                task = %self.task(current).id,
                position = at,
                tail = self.order.len(),
                "placing task"
            );
            self.order.insert(at, current);

            newly_eligible = self.release_children(current);
        }

        if self.order.len() < self.graph.len() {
            let mut placed = vec![false; self.graph.len()];
            for idx in &self.order {
                placed[idx.0] = true;
            }
            let unplaced: Vec<TaskIndex> = (0..self.graph.len())
                .filter(|&i| !placed[i])
                .map(TaskIndex)
                .collect();
            return Err(cyclic_dependency_error(self.graph, &unplaced));
        }

        info!(tasks = self.order.len(), "scheduled all tasks");
        Ok(self.order)
    }

    /// Scan back from the tail while `current` may move ahead of the task
    /// just before the candidate slot.
    fn insertion_point(&self, current: TaskIndex) -> usize {
        let task = self.task(current);
        let mut at = self.order.len();

        while at > 0 {
            let before = self.task(self.order[at - 1]);
            let may_overtake = !before.children().contains(&current)
                && task.computed_priority() >= before.computed_priority()
                && task.extraction_order < before.extraction_order;
            if !may_overtake {
                break;
            }
            at -= 1;
        }

        at
    }

    /// Mark `placed` as done for its children; return those now eligible.
    fn release_children(&mut self, placed: TaskIndex) -> Vec<TaskIndex> {
        let mut eligible = Vec::new();
        for &child in self.graph.task(placed).children() {
            let left = &mut self.remaining[child.0];
            *left -= 1;
            if *left == 0 {
                eligible.push(child);
            }
        }
        eligible
    }

    fn task(&self, idx: TaskIndex) -> &'g Task {
        self.graph.task(idx)
    }
}
