#![allow(dead_code)]

use serde_json::Value;
use taskplan::dag::{TaskGraph, TaskIndex, extract_tasks, schedule};
use taskplan::types::TraversalOrder;

pub use taskplan_test_utils::{ids, init_tracing, position};

/// Extract and link `doc` depth-first.
pub fn graph_of(doc: &Value) -> TaskGraph {
    TaskGraph::build(extract_tasks(doc, TraversalOrder::DepthFirst)).expect("graph should link")
}

/// Ids of `order` as resolved against `graph`.
pub fn order_ids(graph: &TaskGraph, order: &[TaskIndex]) -> Vec<String> {
    order.iter().map(|idx| graph.task(*idx).id.clone()).collect()
}

/// Full pipeline on `doc`, returning ids in plan order.
pub fn plan_ids(doc: &Value) -> Vec<String> {
    let graph = graph_of(doc);
    let order = schedule(&graph).expect("schedule should succeed");
    order_ids(&graph, &order)
}
