use clap::{Parser, Subcommand};

/// Returns the version string, including git hash and commit date for non-release builds.
/// Format: "0.3.2" for releases, "0.3.2@abc1234 2024-01-15 14:30" for dev builds
fn get_version() -> &'static str {
    const VERSION: &str = env!("CARGO_PKG_VERSION");
    const GIT_HASH: &str = env!("GIT_HASH");
    const GIT_COMMIT_DATE: &str = env!("GIT_COMMIT_DATE");
    const IS_RELEASE: &str = env!("IS_RELEASE");

    use std::sync::OnceLock;
    static VERSION_STRING: OnceLock<String> = OnceLock::new();

    VERSION_STRING.get_or_init(|| {
        if IS_RELEASE == "true" || GIT_HASH.is_empty() {
            VERSION.to_string()
        } else {
            format!("{}@{} {}", VERSION, GIT_HASH, GIT_COMMIT_DATE)
        }
    })
}

#[derive(Parser, Debug)]
#[command(name = "todo", bin_name = "todo", version = get_version())]
#[command(about = "A small to-do list for the terminal", long_about = None)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Option<Commands>,

    /// Keep changes in memory only for this run
    #[arg(long, global = true)]
    pub no_persist: bool,

    /// Verbose output (debug logging on stderr)
    #[arg(short, long, global = true)]
    pub verbose: bool,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Add a todo
    #[command(visible_aliases = ["a", "n"])]
    Add {
        /// What needs doing (words are joined with spaces)
        #[arg(required = true, num_args = 1..)]
        content: Vec<String>,
    },

    /// List todos, newest first
    #[command(alias = "ls")]
    List {
        /// Only show todos containing this text
        #[arg(short, long)]
        search: Option<String>,
    },

    /// Show one or more todos
    #[command(alias = "v")]
    View {
        /// Ids of the todos (e.g. 3 #4)
        #[arg(required = true, num_args = 1..)]
        ids: Vec<String>,
    },

    /// Replace the text of a todo
    #[command(alias = "e")]
    Edit {
        /// Id of the todo
        id: String,

        /// New text (words are joined with spaces)
        #[arg(required = true, num_args = 1..)]
        content: Vec<String>,
    },

    /// Delete one or more todos
    #[command(alias = "rm")]
    Delete {
        /// Ids of the todos (e.g. 1 3 5)
        #[arg(required = true, num_args = 1..)]
        ids: Vec<String>,

        /// Skip the confirmation prompt
        #[arg(short, long)]
        yes: bool,
    },

    /// Get or set configuration
    Config {
        /// Configuration key (persist, date-format)
        key: Option<String>,

        /// Value to set (if omitted, prints current value)
        value: Option<String>,
    },

    /// Print the data directory
    Path,
}
