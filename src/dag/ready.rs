// src/dag/ready.rs

use std::collections::{BTreeMap, VecDeque};

use crate::dag::task::TaskIndex;

/// Eligible tasks grouped by computed priority.
///
/// Each bucket is FIFO in the order tasks became eligible; buckets are
/// consulted highest priority first.
#[derive(Debug, Default)]
pub struct ReadyBuckets {
    buckets: BTreeMap<i64, VecDeque<TaskIndex>>,
    len: usize,
}

impl ReadyBuckets {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn push(&mut self, priority: i64, task: TaskIndex) {
        self.buckets.entry(priority).or_default().push_back(task);
        self.len += 1;
    }

    /// Dequeue the front task of the highest non-empty bucket.
    pub fn pop_highest(&mut self) -> Option<TaskIndex> {
        let mut entry = self.buckets.last_entry()?;
        let task = entry.get_mut().pop_front();
        if entry.get().is_empty() {
            entry.remove();
        }
        if task.is_some() {
            self.len -= 1;
        }
        task
    }

    pub fn is_empty(&self) -> bool {
        self.len == 0
    }

    pub fn len(&self) -> usize {
        self.len
    }
}
