use std::sync::Arc;

use crate::api::{CoopleClient, JobSource};
use crate::config::Config;
use crate::list::{JobList, ListPhase, LoadOutcome};
use crate::render;
use crate::session::Session;

pub fn login(config: &Config) -> anyhow::Result<()> {
    let mut session = Session::load(&config.session_file)?;
    if session.authenticated {
        println!("Already signed in.");
        return Ok(());
    }
    session.sign_in();
    session.save(&config.session_file)?;
    tracing::info!("session signed in, stored at {}", config.session_file.display());
    println!("Signed in.");
    Ok(())
}

pub fn logout(config: &Config) -> anyhow::Result<()> {
    let mut session = Session::load(&config.session_file)?;
    session.sign_out();
    session.save(&config.session_file)?;
    println!("Signed out.");
    Ok(())
}

pub fn status(config: &Config) -> anyhow::Result<()> {
    let session = Session::load(&config.session_file)?;
    match (session.authenticated, session.signed_in_at) {
        (true, Some(at)) => println!("Signed in since {}.", at.format("%Y-%m-%d %H:%M UTC")),
        (true, None) => println!("Signed in."),
        _ => println!("Signed out."),
    }
    Ok(())
}

/// Browse the feed: first load, then keep appending pages through the list
/// controller until the page budget is spent or the feed ends.
pub async fn jobs(config: &Config, page_size: u32, pages: u32, all: bool) -> anyhow::Result<()> {
    Session::load(&config.session_file)?.require_authenticated()?;

    let client = CoopleClient::new(&config.api_base, config.request_timeout())?;
    let list = JobList::new(Arc::new(client), page_size);

    let budget = if all { u32::MAX } else { pages.max(1) };
    let mut outcome = list.first_load().await;
    let mut fetched = 1u32;
    while outcome == LoadOutcome::Completed && fetched < budget && list.view().can_load_more {
        outcome = list.load_more().await;
        if outcome == LoadOutcome::Completed {
            fetched += 1;
        }
    }

    let view = list.view();
    for job in &view.jobs {
        println!("{}", render::job_line(job));
    }
    if view.phase == ListPhase::Errored {
        let message = view
            .last_error
            .unwrap_or_else(|| "listing fetch failed".to_string());
        anyhow::bail!(message);
    }
    println!("Showing {} of {} jobs.", view.jobs.len(), view.total);
    Ok(())
}

pub async fn show(config: &Config, id: &str) -> anyhow::Result<()> {
    Session::load(&config.session_file)?.require_authenticated()?;

    let client = CoopleClient::new(&config.api_base, config.request_timeout())?;
    let details = client.fetch_details(id).await?;
    print!("{}", render::job_details(&details));
    Ok(())
}
