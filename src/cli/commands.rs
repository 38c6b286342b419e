use std::path::PathBuf;

use clap::{Parser, Subcommand};

use crate::config::{DEFAULT_DB_FILE, DEFAULT_PORT, DEFAULT_SERVER_URL};

const VERSION: &str = env!("TASKBOARD_VERSION");

#[derive(Parser)]
#[command(
    name = "taskboard",
    version = VERSION,
    about = "Personal task board: SQLite-backed task API and its client",
    after_help = "\
NOTE:
  `serve` runs the task store over HTTP. Every other command except `init`
  talks to a running store at --server (default http://localhost:5001).

EXIT CODES:
  0  Success
  1  Error (validation, store, transport)

BEHAVIOR NOTES:
  `add` and `edit` need a non-blank name, description and due date; a blank
  field is rejected before anything is sent.
  `delete` asks for confirmation unless --yes is given.
  Due dates count down to midnight UTC of that day."
)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,

    /// Output as JSON
    #[arg(long, global = true)]
    pub json: bool,

    /// Base URL of the task store
    #[arg(long, global = true, default_value = DEFAULT_SERVER_URL)]
    pub server: String,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Run the task store HTTP server
    Serve {
        #[arg(long, default_value_t = DEFAULT_PORT)]
        port: u16,
        /// SQLite database file
        #[arg(long, default_value = DEFAULT_DB_FILE)]
        db: PathBuf,
    },

    /// Create the database and task table if missing
    Init {
        #[arg(long, default_value = DEFAULT_DB_FILE)]
        db: PathBuf,
    },

    /// List tasks, filtered and sorted by due date
    List {
        /// all | in-progress | completed
        #[arg(long, default_value = "all")]
        filter: String,
        /// Case-insensitive substring of name or description
        #[arg(long, default_value = "")]
        search: String,
        /// asc | desc
        #[arg(long, default_value = "asc")]
        sort: String,
    },

    /// Add a task
    Add {
        name: String,
        #[arg(long, default_value = "")]
        desc: String,
        /// Due date (YYYY-MM-DD)
        #[arg(long)]
        due: Option<String>,
        /// Work | Personal | Urgent
        #[arg(long, default_value = "Work")]
        category: String,
        /// High | Medium | Low
        #[arg(long, default_value = "Medium")]
        priority: String,
    },

    /// Edit a task; unspecified fields keep their current value
    Edit {
        id: i64,
        #[arg(long)]
        name: Option<String>,
        #[arg(long)]
        desc: Option<String>,
        #[arg(long)]
        due: Option<String>,
        #[arg(long)]
        category: Option<String>,
        #[arg(long)]
        priority: Option<String>,
        /// in-progress | completed
        #[arg(long)]
        status: Option<String>,
    },

    /// Delete a task
    Delete {
        id: i64,
        /// Skip the confirmation prompt
        #[arg(long, short)]
        yes: bool,
    },

    /// Flip a task between in-progress and completed
    Toggle { id: i64 },

    /// Show time left until a task is due
    Countdown {
        id: i64,
        /// Keep printing once per second until Ctrl-C
        #[arg(long)]
        watch: bool,
    },
}
