use clap::{Parser, Subcommand};
use std::path::PathBuf;

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
#[command(name = "userdir", bin_name = "userdir", version = get_version())]
#[command(about = "Search and page through a user directory", long_about = None)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Option<Commands>,

    /// Verbose output (debug logging on stderr)
    #[arg(short, long, global = true)]
    pub verbose: bool,

    /// Fetch users from this endpoint root instead of the configured one
    #[arg(long, global = true, value_name = "URL", conflicts_with = "from_file")]
    pub base_url: Option<String>,

    /// Read users from a JSON file instead of the network
    #[arg(long, global = true, value_name = "PATH")]
    pub from_file: Option<PathBuf>,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// List users, one page at a time
    #[command(alias = "ls", display_order = 1)]
    List {
        /// Only show users whose name or email contains this text (case-insensitive)
        #[arg(short, long)]
        search: Option<String>,

        /// Page to show (out-of-range values are clamped)
        #[arg(short, long, allow_negative_numbers = true)]
        page: Option<i64>,
    },

    /// Show everything about one user
    #[command(alias = "v", display_order = 2)]
    View {
        /// User id
        id: u64,
    },

    /// Browse interactively: search and page from a prompt
    #[command(alias = "b", display_order = 3)]
    Browse {
        /// Initial search text
        #[arg(short, long)]
        search: Option<String>,
    },

    /// Show directory totals
    #[command(display_order = 4)]
    Stats,

    /// Get or set configuration
    #[command(display_order = 5)]
    Config {
        /// Configuration key (base-url, page-size, timeout-secs)
        key: Option<String>,

        /// Value to set (if omitted, prints current value)
        value: Option<String>,
    },
}
