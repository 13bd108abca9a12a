// src/dag/task.rs

//! Task records and the "is a task" predicate.

use std::fmt;

use serde_json::{Map, Value};
use thiserror::Error;

/// Stable index of a task inside a [`TaskGraph`](crate::dag::TaskGraph) arena.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct TaskIndex(pub usize);

impl fmt::Display for TaskIndex {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "#{}", self.0)
    }
}

/// Names of the four members every task record carries.
pub const ID: &str = "id";
pub const COMMAND: &str = "command";
pub const PRIORITY: &str = "priority";
pub const DEPENDENCIES: &str = "dependencies";

const MEMBERS: [&str; 4] = [ID, COMMAND, PRIORITY, DEPENDENCIES];

/// Why a map that looks like a task was not accepted as one.
///
/// Never fatal: the extractor logs it and searches the map's contents.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum MalformedTask {
    #[error("missing member `{0}`")]
    MissingMember(&'static str),

    #[error("member `{member}` must be {expected}")]
    WrongShape {
        member: &'static str,
        expected: &'static str,
    },
}

/// Outcome of inspecting one node of the document.
#[derive(Debug)]
pub enum Candidate {
    /// The node satisfies the task predicate.
    Task(TaskFields),
    /// A map carrying some task members but failing the predicate.
    Malformed(MalformedTask),
    /// Anything else: scalars, sequences, unrelated maps.
    NotACandidate,
}

/// Members of a node that passed the predicate.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TaskFields {
    pub id: String,
    pub command: String,
    pub priority: i64,
    pub dependency_ids: Vec<String>,
}

impl Candidate {
    /// Apply the task predicate to `value`.
    pub fn inspect(value: &Value) -> Self {
        let Value::Object(map) = value else {
            return Candidate::NotACandidate;
        };

        if !MEMBERS.iter().any(|m| present(map, m).is_some()) {
            return Candidate::NotACandidate;
        }

        match TaskFields::from_map(map) {
            Ok(fields) => Candidate::Task(fields),
            Err(reason) => Candidate::Malformed(reason),
        }
    }
}

impl TaskFields {
    fn from_map(map: &Map<String, Value>) -> Result<Self, MalformedTask> {
        let id = non_empty_string(map, ID)?;
        let command = non_empty_string(map, COMMAND)?;

        let priority = member(map, PRIORITY)?
            .as_i64()
            .ok_or(MalformedTask::WrongShape {
                member: PRIORITY,
                expected: "an integer",
            })?;

        let wrong_deps = MalformedTask::WrongShape {
            member: DEPENDENCIES,
            expected: "a sequence of non-empty strings",
        };
        let dependency_ids = member(map, DEPENDENCIES)?
            .as_array()
            .ok_or_else(|| wrong_deps.clone())?
            .iter()
            .map(|dep| match dep.as_str() {
                Some(s) if !s.is_empty() => Ok(s.to_string()),
                _ => Err(wrong_deps.clone()),
            })
            .collect::<Result<Vec<_>, _>>()?;

        Ok(Self {
            id: id.to_string(),
            command: command.to_string(),
            priority,
            dependency_ids,
        })
    }
}

/// `null` members count as absent.
fn present<'a>(map: &'a Map<String, Value>, name: &str) -> Option<&'a Value> {
    map.get(name).filter(|v| !v.is_null())
}

fn member<'a>(map: &'a Map<String, Value>, name: &'static str) -> Result<&'a Value, MalformedTask> {
    present(map, name).ok_or(MalformedTask::MissingMember(name))
}

fn non_empty_string<'a>(
    map: &'a Map<String, Value>,
    name: &'static str,
) -> Result<&'a str, MalformedTask> {
    match member(map, name)?.as_str() {
        Some(s) if !s.is_empty() => Ok(s),
        _ => Err(MalformedTask::WrongShape {
            member: name,
            expected: "a non-empty string",
        }),
    }
}

/// One unit of work found in the document.
#[derive(Debug, Clone)]
pub struct Task {
    pub id: String,
    /// Opaque; never interpreted by the scheduler.
    pub command: String,
    pub base_priority: i64,
    pub dependency_ids: Vec<String>,
    /// 0-based discovery index, used only as a stability tie-break.
    pub extraction_order: usize,
    /// The original map this task was extracted from.
    pub payload: Value,

    /// Resolved `dependency_ids`, one entry per declared id.
    pub(crate) dependencies: Vec<TaskIndex>,
    /// Tasks that declared this one as a dependency, in linking order.
    pub(crate) children: Vec<TaskIndex>,
}

impl Task {
    pub fn new(fields: TaskFields, extraction_order: usize, payload: Value) -> Self {
        Self {
            id: fields.id,
            command: fields.command,
            base_priority: fields.priority,
            dependency_ids: fields.dependency_ids,
            extraction_order,
            payload,
            dependencies: Vec::new(),
            children: Vec::new(),
        }
    }

    /// Priority used for every scheduling decision.
    ///
    /// This is the base priority. Raising a task to the maximum computed
    /// priority of its children is a known variant that is deliberately not
    /// applied here.
    pub fn computed_priority(&self) -> i64 {
        self.base_priority
    }

    pub fn dependencies(&self) -> &[TaskIndex] {
        &self.dependencies
    }

    pub fn children(&self) -> &[TaskIndex] {
        &self.children
    }

    pub fn is_root(&self) -> bool {
        self.dependency_ids.is_empty()
    }
}
