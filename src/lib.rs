//! Projectos - a local project and task tracking library.
//!
//! This library provides the core functionality for the `po` CLI tool:
//! the project/task data model, the per-project record store, and the
//! command implementations.

pub mod cli;
pub mod commands;
pub mod models;
pub mod storage;


/// Library-level error type for projectos operations.
#[derive(Debug, thiserror::Error)]
pub enum Error {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("Malformed project record at {path}: {source}")]
    Malformed {
        path: std::path::PathBuf,
        source: serde_json::Error,
    },

    #[error("Task not found: {0}")]
    TaskNotFound(u32),

    #[error("Context file not found: {0}")]
    SourceNotFound(std::path::PathBuf),

    #[error("Invalid input: {0}")]
    InvalidInput(String),

    #[error("{0}")]
    Other(String),
}

/// Result type alias for projectos operations.
pub type Result<T> = std::result::Result<T, Error>;
