//! TaskStore CLI
//!
//! Command-line interface for a task store file.

use std::path::PathBuf;
use std::process::ExitCode;

use clap::{Parser, Subcommand};
use taskstore::{Config, Task, TaskStore};
use tracing_subscriber::{fmt, EnvFilter};

/// TaskStore CLI
#[derive(Parser, Debug)]
#[command(name = "taskstore-cli")]
#[command(about = "Manage tasks in a crash-safe JSON store")]
#[command(version)]
struct Args {
    /// Store file (overrides DB_PATH)
    #[arg(short, long)]
    db_path: Option<PathBuf>,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand, Debug)]
enum Commands {
    /// Add a task
    Add {
        /// The task title (words are joined with spaces)
        #[arg(required = true)]
        title: Vec<String>,
    },

    /// Delete a task by ID
    Delete {
        /// The task ID
        id: i64,
    },

    /// List tasks, newest first
    List,
}

fn main() -> ExitCode {
    let args = Args::parse();

    let mut config = Config::from_env();
    if let Some(path) = args.db_path {
        config.db_path = path;
    }

    // Logs go to stderr so stdout stays clean for command output
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(format!("warn,taskstore={}", config.log_level)));

    fmt()
        .with_env_filter(filter)
        .with_target(true)
        .with_writer(std::io::stderr)
        .init();

    tracing::debug!("TaskStore CLI v{}", taskstore::VERSION);

    let store = match TaskStore::open_with_config(config) {
        Ok(s) => s,
        Err(e) => {
            tracing::error!("Failed to open store: {}", e);
            eprintln!("error: could not open task store");
            return ExitCode::FAILURE;
        }
    };

    let code = run(&store, args.command);

    if let Err(e) = store.close() {
        tracing::error!("Failed to close store: {}", e);
        eprintln!("error: could not save task store");
        return ExitCode::FAILURE;
    }

    code
}

fn run(store: &TaskStore, command: Commands) -> ExitCode {
    match command {
        Commands::Add { title } => match store.create(&title.join(" ")) {
            Ok(task) => {
                println!("{}", format_task(&task));
                ExitCode::SUCCESS
            }
            Err(e) if e.is_validation() => {
                eprintln!("error: {}", e);
                ExitCode::FAILURE
            }
            Err(e) => {
                tracing::error!("create failed: {}", e);
                eprintln!("error: failed to create task");
                ExitCode::FAILURE
            }
        },
        Commands::Delete { id } => match store.delete(id) {
            Ok(true) => {
                println!("deleted {}", id);
                ExitCode::SUCCESS
            }
            Ok(false) => {
                eprintln!("error: task not found");
                ExitCode::FAILURE
            }
            Err(e) => {
                tracing::error!("delete failed: {}", e);
                eprintln!("error: failed to delete task");
                ExitCode::FAILURE
            }
        },
        Commands::List => match store.list() {
            Ok(tasks) => {
                for task in &tasks {
                    println!("{}", format_task(task));
                }
                ExitCode::SUCCESS
            }
            Err(e) => {
                tracing::error!("list failed: {}", e);
                eprintln!("error: failed to load tasks");
                ExitCode::FAILURE
            }
        },
    }
}

fn format_task(task: &Task) -> String {
    format!(
        "{:>4}  {}  {}",
        task.id,
        task.created_at.format("%Y-%m-%d %H:%M:%S"),
        task.title
    )
}
