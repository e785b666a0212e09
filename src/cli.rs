use clap::{Parser, Subcommand};
use std::path::PathBuf;

#[derive(Parser)]
#[command(name = "todolist")]
#[command(about = "Inspect and update JSON todo lists")]
#[command(version = "0.1.0")]
pub struct Cli {
    /// chrono pattern for due date annotations, e.g. " (Due: %A %B %-d)"
    #[arg(
        long,
        global = true,
        env = "TODOLIST_DUE_FORMAT",
        allow_hyphen_values = true
    )]
    pub due_format: Option<String>,

    /// Title for lists whose document has none
    #[arg(long, global = true, env = "TODOLIST_DEFAULT_TITLE")]
    pub default_title: Option<String>,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Print the list
    Show {
        /// Path to the JSON list
        file: PathBuf,
        /// Only todos that are done
        #[arg(long, conflicts_with = "pending")]
        done: bool,
        /// Only todos that are not done
        #[arg(long)]
        pending: bool,
    },

    /// Print how many todos are done
    Status {
        /// Path to the JSON list
        file: PathBuf,
    },

    /// Find a todo by its exact title
    Find {
        /// Path to the JSON list
        file: PathBuf,
        /// Title to look for
        title: String,
    },

    /// Print the todo at a zero-based position
    Item {
        /// Path to the JSON list
        file: PathBuf,
        /// Position in the list
        position: usize,
    },

    /// Apply changes and print the resulting JSON
    Export {
        /// Path to the JSON list
        file: PathBuf,
        /// Mark the first todo with this title done
        #[arg(long)]
        mark_done: Vec<String>,
        /// Mark every todo done
        #[arg(long, conflicts_with = "mark_all_undone")]
        mark_all_done: bool,
        /// Mark every todo not done
        #[arg(long)]
        mark_all_undone: bool,
        /// Remove the todo at this position
        #[arg(long)]
        remove_at: Option<usize>,
    },
}
