// src/dag/cycle.rs

//! Diagnostics for tasks the scheduler could not place.

use petgraph::algo::tarjan_scc;
use petgraph::graphmap::DiGraphMap;

use crate::dag::graph::TaskGraph;
use crate::dag::task::TaskIndex;
use crate::errors::PlanError;

/// Build the error for a run that stopped with `unplaced` tasks left over.
///
/// Only the unplaced tasks are considered. Edge direction is
/// dependency -> dependent, as in the graph itself.
pub fn cyclic_dependency_error(graph: &TaskGraph, unplaced: &[TaskIndex]) -> PlanError {
    let mut sub: DiGraphMap<usize, ()> = DiGraphMap::new();
    for idx in unplaced {
        sub.add_node(idx.0);
    }
    for idx in unplaced {
        for dep in graph.task(*idx).dependencies() {
            if sub.contains_node(dep.0) {
                sub.add_edge(dep.0, idx.0, ());
            }
        }
    }

    let mut on_cycle: Vec<usize> = tarjan_scc(&sub)
        .into_iter()
        .filter(|scc| scc.len() > 1 || sub.contains_edge(scc[0], scc[0]))
        .flatten()
        .collect();
    on_cycle.sort_unstable();

    let mut unplaced_sorted: Vec<usize> = unplaced.iter().map(|idx| idx.0).collect();
    unplaced_sorted.sort_unstable();

    let ids = |indices: Vec<usize>| -> Vec<String> {
        indices
            .into_iter()
            .map(|i| graph.task(TaskIndex(i)).id.clone())
            .collect()
    };

    PlanError::CyclicDependency {
        cycle: ids(on_cycle),
        unplaced: ids(unplaced_sorted),
    }
}
