// src/dag/mod.rs

//! Task extraction, dependency graph and ordering.
//!
//! - [`task`] defines task records and the predicate that recognises them.
//! - [`extract`] walks a document and collects task records.
//! - [`graph`] links tasks into a dependency graph.
//! - [`ready`] holds eligible tasks bucketed by priority.
//! - [`scheduler`] produces the final execution order.
//! - [`cycle`] explains why a run could not place every task.

pub mod cycle;
pub mod extract;
pub mod graph;
pub mod ready;
pub mod scheduler;
pub mod task;

pub use extract::extract_tasks;
pub use graph::TaskGraph;
pub use ready::ReadyBuckets;
pub use scheduler::{Scheduler, schedule};
pub use task::{Candidate, MalformedTask, Task, TaskFields, TaskIndex};
