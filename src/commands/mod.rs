//! Command implementations for the projectos CLI.
//!
//! Each command is a pure load -> mutate -> (save | report) sequence
//! against the store; no state is shared across commands. Commands return
//! small result types that render their confirmation line via `Display`,
//! so the binary stays a thin dispatcher.

use crate::models::Task;
use crate::storage::ProjectStore;
use crate::{Error, Result};
use std::fmt;
use std::path::{Path, PathBuf};

/// Result of `add-project`.
pub struct ProjectSaved {
    pub name: String,
}

impl fmt::Display for ProjectSaved {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Project '{}' added/updated.", self.name)
    }
}

/// Result of `add-task`.
pub struct TaskAdded {
    pub project: String,
    pub task: Task,
}

impl fmt::Display for TaskAdded {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "Task added to '{}': [{}] {} - {} (created {})",
            self.project, self.task.id, self.task.status, self.task.description, self.task.created
        )
    }
}

/// Result of `update-task`.
pub struct TaskUpdated {
    pub id: u32,
    pub status: String,
}

impl fmt::Display for TaskUpdated {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Task {} updated to {}", self.id, self.status)
    }
}

/// Result of `list-tasks`: one line per task in stored order.
pub struct TaskList {
    pub tasks: Vec<Task>,
}

impl fmt::Display for TaskList {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for task in &self.tasks {
            writeln!(f, "[{}] {} - {}", task.id, task.status, task.description)?;
        }
        Ok(())
    }
}

/// Result of `add-context`.
pub struct ContextAttached {
    pub dest: PathBuf,
}

impl fmt::Display for ContextAttached {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Context file copied to {}", self.dest.display())
    }
}

/// Create or update a project.
///
/// Loads the record (defaulted for a new name), overwrites the
/// description only when one was supplied, and saves. Always succeeds on
/// a healthy filesystem.
pub fn project_add(
    store: &ProjectStore,
    name: &str,
    description: Option<String>,
) -> Result<ProjectSaved> {
    let mut project = store.load(name)?;
    if let Some(description) = description.filter(|d| !d.is_empty()) {
        project.description = description;
    }
    store.save(name, &project)?;
    Ok(ProjectSaved {
        name: name.to_string(),
    })
}

/// Append a task with the next id, status "TODO", and today's date.
pub fn task_add(store: &ProjectStore, name: &str, description: &str) -> Result<TaskAdded> {
    let mut project = store.load(name)?;
    let task = project
        .add_task(description, chrono::Local::now().date_naive())
        .clone();
    store.save(name, &project)?;
    Ok(TaskAdded {
        project: name.to_string(),
        task,
    })
}

/// Set the status of the task with the given id.
///
/// When no task matches, returns `Error::TaskNotFound` without saving, so
/// the on-disk record is left untouched.
pub fn task_update(store: &ProjectStore, name: &str, id: u32, status: &str) -> Result<TaskUpdated> {
    let mut project = store.load(name)?;
    if !project.update_task(id, status) {
        return Err(Error::TaskNotFound(id));
    }
    store.save(name, &project)?;
    Ok(TaskUpdated {
        id,
        status: status.to_string(),
    })
}

/// List a project's tasks in stored order. Read-only, never writes.
pub fn task_list(store: &ProjectStore, name: &str) -> Result<TaskList> {
    let project = store.load(name)?;
    Ok(TaskList {
        tasks: project.tasks,
    })
}

/// Copy a file into the project's context directory.
pub fn context_add(store: &ProjectStore, name: &str, file: &Path) -> Result<ContextAttached> {
    let dest = store.attach_context(name, file)?;
    Ok(ContextAttached { dest })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_utils::TestEnv;
    use std::fs;

    #[test]
    fn test_project_add_keeps_description_when_omitted() {
        let env = TestEnv::new();
        let store = env.store();

        project_add(&store, "demo", Some("Demo project".to_string())).unwrap();
        project_add(&store, "demo", None).unwrap();

        let project = store.load("demo").unwrap();
        assert_eq!(project.description, "Demo project");
    }

    #[test]
    fn test_project_add_ignores_empty_description() {
        let env = TestEnv::new();
        let store = env.store();

        project_add(&store, "demo", Some("Demo project".to_string())).unwrap();
        project_add(&store, "demo", Some(String::new())).unwrap();

        let project = store.load("demo").unwrap();
        assert_eq!(project.description, "Demo project");
    }

    #[test]
    fn test_task_add_persists_sequential_ids() {
        let env = TestEnv::new();
        let store = env.store();

        let first = task_add(&store, "demo", "write spec").unwrap();
        let second = task_add(&store, "demo", "review spec").unwrap();
        assert_eq!(first.task.id, 1);
        assert_eq!(second.task.id, 2);

        let project = store.load("demo").unwrap();
        assert_eq!(project.tasks.len(), 2);
        assert_eq!(project.tasks[1].description, "review spec");
    }

    #[test]
    fn test_task_update_missing_id_leaves_record_untouched() {
        let env = TestEnv::new();
        let store = env.store();

        task_add(&store, "demo", "write spec").unwrap();
        let before = fs::read(store.record_path("demo")).unwrap();

        match task_update(&store, "demo", 99, "DONE") {
            Err(Error::TaskNotFound(99)) => {}
            other => panic!("expected TaskNotFound, got {:?}", other.map(|r| r.id)),
        }

        let after = fs::read(store.record_path("demo")).unwrap();
        assert_eq!(before, after);
    }

    #[test]
    fn test_task_list_renders_stored_order() {
        let env = TestEnv::new();
        let store = env.store();

        task_add(&store, "demo", "write spec").unwrap();
        task_add(&store, "demo", "review spec").unwrap();
        task_update(&store, "demo", 1, "DONE").unwrap();

        let list = task_list(&store, "demo").unwrap();
        assert_eq!(
            list.to_string(),
            "[1] DONE - write spec\n[2] TODO - review spec\n"
        );
    }

    #[test]
    fn test_task_list_empty_renders_nothing() {
        let env = TestEnv::new();
        let store = env.store();

        let list = task_list(&store, "empty").unwrap();
        assert_eq!(list.to_string(), "");
    }
}
