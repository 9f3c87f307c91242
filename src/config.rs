use std::path::PathBuf;
use std::time::Duration;

use clap::Parser;

use crate::api::DEFAULT_BASE_URL;

#[derive(Parser, Debug, Clone)]
#[command(name = "jobfeed", about = "Terminal client for browsing public job listings")]
pub struct Config {
    /// Base URL of the listing API
    #[arg(long, env = "JOBFEED_API_BASE", default_value = DEFAULT_BASE_URL)]
    pub api_base: String,

    /// Path of the persisted session file
    #[arg(long, env = "JOBFEED_SESSION", default_value = ".jobfeed/session.json")]
    pub session_file: PathBuf,

    /// Request timeout in seconds; 0 leaves requests unbounded
    #[arg(long, env = "JOBFEED_TIMEOUT_SECS", default_value = "30")]
    pub timeout_secs: u64,

    #[command(subcommand)]
    pub command: Option<Command>,
}

#[derive(clap::Subcommand, Debug, Clone)]
pub enum Command {
    /// Sign the session in
    Login,
    /// Sign the session out
    Logout,
    /// Show whether the session is signed in
    Status,
    /// Browse the listing feed (default when no subcommand given)
    Jobs {
        /// Jobs per fetched page
        #[arg(long, env = "JOBFEED_PAGE_SIZE", default_value = "20")]
        page_size: u32,

        /// How many pages to fetch before stopping
        #[arg(long, default_value = "1", conflicts_with = "all")]
        pages: u32,

        /// Keep paging until the feed reports its end
        #[arg(long)]
        all: bool,
    },
    /// Show one posting by its work-assignment id
    Show { id: String },
}

impl Config {
    /// Resolve the command, defaulting to a single-page listing if none
    /// specified.
    pub fn resolved_command(&self) -> Command {
        self.command.clone().unwrap_or(Command::Jobs {
            page_size: std::env::var("JOBFEED_PAGE_SIZE")
                .ok()
                .and_then(|raw| raw.parse().ok())
                .unwrap_or(20),
            pages: 1,
            all: false,
        })
    }

    /// Timeout for outbound requests; `None` means unbounded, matching the
    /// upstream app's behavior.
    pub fn request_timeout(&self) -> Option<Duration> {
        (self.timeout_secs > 0).then(|| Duration::from_secs(self.timeout_secs))
    }
}
