use clap::{Parser, Subcommand};

/// Returns the version string, including git hash and commit date for
/// non-release builds.
/// Format: "0.3.2" for releases, "0.3.2@abc1234 2024-01-15 14:30" for dev builds
pub fn get_version() -> &'static str {
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
#[command(name = "todoz", bin_name = "todoz", version = get_version())]
#[command(about = "Project-aware command-line todo list manager", long_about = None)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Option<Commands>,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Add a new todo item
    #[command(alias = "a")]
    Add {
        /// Text of the todo (multiple arguments are joined with spaces)
        #[arg(required = true, num_args = 1..)]
        text: Vec<String>,
    },

    /// List all todo items
    #[command(alias = "ls")]
    List,

    /// Edit a todo item
    #[command(alias = "e")]
    Edit {
        /// 1-based position in the list
        index: usize,

        /// Replacement text (multiple arguments are joined with spaces)
        #[arg(required = true, num_args = 1..)]
        text: Vec<String>,
    },

    /// Toggle a todo item as done/undone
    #[command(alias = "t")]
    Toggle {
        /// 1-based position in the list
        index: usize,
    },

    /// Delete a todo item
    #[command(alias = "rm")]
    Delete {
        /// 1-based position in the list
        index: usize,
    },

    /// Restore the most recently deleted todo
    Undo,

    /// Initialize a local todo store in the current directory
    Init,

    /// Show which todo store is currently being used
    Status,

    /// Show version information
    Version,
}
