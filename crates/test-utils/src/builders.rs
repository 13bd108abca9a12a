#![allow(dead_code)]

use serde_json::{Map, Value, json};
use taskplan::dag::task::{COMMAND, DEPENDENCIES, ID, PRIORITY};

/// Builder for a task record as it would appear in a document.
pub struct TaskValueBuilder {
    fields: Map<String, Value>,
}

impl TaskValueBuilder {
    /// A valid task with priority 0, no dependencies and command `run <id>`.
    pub fn new(id: &str) -> Self {
        let mut fields = Map::new();
        fields.insert(ID.into(), json!(id));
        fields.insert(COMMAND.into(), json!(format!("run {id}")));
        fields.insert(PRIORITY.into(), json!(0));
        fields.insert(DEPENDENCIES.into(), json!([]));
        Self { fields }
    }

    pub fn command(self, cmd: &str) -> Self {
        self.set(COMMAND, json!(cmd))
    }

    pub fn priority(self, priority: i64) -> Self {
        self.set(PRIORITY, json!(priority))
    }

    pub fn after(mut self, dep: &str) -> Self {
        if let Some(Value::Array(deps)) = self.fields.get_mut(DEPENDENCIES) {
            deps.push(json!(dep));
        }
        self
    }

    /// Set any member, including replacing one of the four with a wrong shape.
    pub fn set(mut self, key: &str, value: Value) -> Self {
        self.fields.insert(key.to_string(), value);
        self
    }

    /// Drop a member, turning the record into a near-miss.
    pub fn without(mut self, key: &str) -> Self {
        self.fields.shift_remove(key);
        self
    }

    pub fn build(self) -> Value {
        Value::Object(self.fields)
    }
}

/// Builder for a nested document; entries keep insertion order.
#[derive(Default)]
pub struct DocumentBuilder {
    entries: Map<String, Value>,
}

impl DocumentBuilder {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with(mut self, key: &str, value: Value) -> Self {
        self.entries.insert(key.to_string(), value);
        self
    }

    pub fn with_task(self, key: &str, task: TaskValueBuilder) -> Self {
        self.with(key, task.build())
    }

    pub fn build(self) -> Value {
        Value::Object(self.entries)
    }
}

/// A flat document `{ "tasks": [..] }` in the given order.
pub fn task_list(tasks: Vec<TaskValueBuilder>) -> Value {
    json!({ "tasks": tasks.into_iter().map(TaskValueBuilder::build).collect::<Vec<_>>() })
}
