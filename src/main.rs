use clap::Parser;
use tracing_subscriber::EnvFilter;

use jobfeed::commands;
use jobfeed::config::{Command, Config};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("jobfeed=info")),
        )
        .init();

    let config = Config::parse();

    match config.resolved_command() {
        Command::Login => commands::login(&config)?,
        Command::Logout => commands::logout(&config)?,
        Command::Status => commands::status(&config)?,
        Command::Jobs {
            page_size,
            pages,
            all,
        } => commands::jobs(&config, page_size, pages, all).await?,
        Command::Show { id } => commands::show(&config, &id).await?,
    }

    Ok(())
}
