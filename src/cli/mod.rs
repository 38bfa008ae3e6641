//! CLI argument definitions for projectos.

use clap::{Parser, Subcommand};
use std::path::PathBuf;

/// Projectos - track projects, tasks, and context files from the command line.
#[derive(Parser, Debug)]
#[command(name = "po")]
#[command(author, version, about = "A CLI tool for tracking projects, tasks, and context files", long_about = None)]
pub struct Cli {
    /// Store projects under <path> instead of the default data directory.
    /// Can also be set via the PO_DATA_DIR environment variable.
    #[arg(short = 'C', long = "data-dir", global = true, env = "PO_DATA_DIR")]
    pub data_dir: Option<PathBuf>,

    #[command(subcommand)]
    pub command: Option<Commands>,
}

/// Top-level commands
#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Create or update a project
    AddProject {
        /// Project name
        name: String,

        /// Project description (overwrites the current one when given)
        description: Option<String>,
    },

    /// Add a task to a project
    AddTask {
        /// Project name
        project: String,

        /// Task description
        description: String,
    },

    /// Update task status
    UpdateTask {
        /// Project name
        project: String,

        /// Task id
        id: u32,

        /// New status (free-form, e.g. DONE)
        status: String,
    },

    /// List tasks in a project
    ListTasks {
        /// Project name
        project: String,
    },

    /// Add a context file to a project
    AddContext {
        /// Project name
        project: String,

        /// File to copy into the project's context directory
        file: PathBuf,
    },
}
