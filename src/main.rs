//! Projectos CLI - track projects, tasks, and context files.

use clap::{CommandFactory, Parser};
use projectos::cli::{Cli, Commands};
use projectos::commands;
use projectos::storage::{ProjectStore, resolve_data_dir};
use std::process;

fn main() {
    let cli = Cli::parse();

    // No subcommand: show usage and exit cleanly
    let Some(command) = cli.command else {
        let _ = Cli::command().print_help();
        return;
    };

    // Store root: --data-dir flag > PO_DATA_DIR env > platform data dir
    let store = match resolve_data_dir(cli.data_dir) {
        Ok(root) => ProjectStore::new(root),
        Err(e) => {
            eprintln!("Error: {}", e);
            process::exit(1);
        }
    };

    if let Err(e) = run_command(command, &store) {
        match e {
            // Logical failure: the record was left untouched, report and
            // exit 0 like the listing commands do
            projectos::Error::TaskNotFound(_) => println!("Task not found"),
            e => {
                eprintln!("Error: {}", e);
                process::exit(1);
            }
        }
    }
}

fn run_command(command: Commands, store: &ProjectStore) -> Result<(), projectos::Error> {
    match command {
        Commands::AddProject { name, description } => {
            let result = commands::project_add(store, &name, description)?;
            println!("{}", result);
        }

        Commands::AddTask {
            project,
            description,
        } => {
            let result = commands::task_add(store, &project, &description)?;
            println!("{}", result);
        }

        Commands::UpdateTask {
            project,
            id,
            status,
        } => {
            let result = commands::task_update(store, &project, id, &status)?;
            println!("{}", result);
        }

        Commands::ListTasks { project } => {
            // One line per task; an empty project prints nothing
            let result = commands::task_list(store, &project)?;
            print!("{}", result);
        }

        Commands::AddContext { project, file } => {
            let result = commands::context_add(store, &project, &file)?;
            println!("{}", result);
        }
    }
    Ok(())
}
