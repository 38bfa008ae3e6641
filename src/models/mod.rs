//! Data models for project records.
//!
//! A `Project` owns its tasks outright: tasks have no lifecycle of their
//! own and are only ever appended or status-updated through the owning
//! project.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

fn default_status() -> String {
    "planning".to_string()
}

/// A tracked project with its ordered task list.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Project {
    /// Unique name, also the storage key and directory name
    pub name: String,

    /// Free-form description
    #[serde(default)]
    pub description: String,

    /// Free-form status (defaults to "planning")
    #[serde(default = "default_status")]
    pub status: String,

    /// Tasks in insertion order
    #[serde(default)]
    pub tasks: Vec<Task>,
}

/// A work item owned by a project.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Task {
    /// Positive id, unique within the owning project, assigned from the
    /// task count at append time and never reused
    pub id: u32,

    /// Task description
    pub description: String,

    /// Free-form status; any caller-supplied value is accepted
    pub status: String,

    /// Creation date (YYYY-MM-DD), immutable after creation
    pub created: NaiveDate,
}

impl Project {
    /// Create a default record for a project that has never been saved.
    pub fn new(name: &str) -> Self {
        Self {
            name: name.to_string(),
            description: String::new(),
            status: default_status(),
            tasks: Vec::new(),
        }
    }

    /// Append a new task with the next id and status "TODO".
    ///
    /// Ids are `tasks.len() + 1`; since tasks are never removed they are
    /// strictly increasing with no reuse.
    pub fn add_task(&mut self, description: &str, created: NaiveDate) -> &Task {
        let task = Task {
            id: self.tasks.len() as u32 + 1,
            description: description.to_string(),
            status: "TODO".to_string(),
            created,
        };
        self.tasks.push(task);
        self.tasks.last().expect("task was just pushed")
    }

    /// Set the status of the first task matching `id`.
    ///
    /// Returns false if no task has that id; nothing is modified in that
    /// case.
    pub fn update_task(&mut self, id: u32, status: &str) -> bool {
        for task in &mut self.tasks {
            if task.id == id {
                task.status = status.to_string();
                return true;
            }
        }
        false
    }
}
