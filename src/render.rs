//! Plain-text rendering of job records. Kept outside the fetch/pagination
//! core: nothing here touches the network or the list state.

use std::fmt::Write as _;

use crate::models::job::{JobLocation, JobSummary, Wage};
use crate::models::job_details::JobDetails;

const DATE_FORMAT: &str = "%Y-%m-%d";

/// Currency identifier 1 is the primary currency of the feed; everything
/// else falls back to the secondary symbol.
pub fn currency_symbol(currency_id: u32) -> &'static str {
    if currency_id == 1 { "CHF" } else { "$" }
}

pub fn format_wage(wage: &Wage) -> String {
    format!("{} {:.2}", currency_symbol(wage.currency_id), wage.amount)
}

pub fn format_location(location: &JobLocation) -> String {
    let mut parts = Vec::new();
    if !location.address_street.is_empty() {
        parts.push(location.address_street.clone());
    }
    if !location.extra_address.is_empty() {
        parts.push(location.extra_address.clone());
    }
    let zip_city = format!("{} {}", location.zip, location.city)
        .trim()
        .to_string();
    if !zip_city.is_empty() {
        parts.push(zip_city);
    }
    if !location.state.is_empty() {
        parts.push(location.state.clone());
    }
    parts.join(", ")
}

/// One listing per line: id first so it can be fed straight back into
/// `jobfeed show`.
pub fn job_line(job: &JobSummary) -> String {
    format!(
        "{}  {:<40}  {:>10}/h  {} {}  published {}",
        job.work_assignment_id,
        truncate(&job.work_assignment_name, 40),
        format_wage(&job.hourly_wage),
        job.job_location.zip,
        job.job_location.city,
        job.date_published.format(DATE_FORMAT),
    )
}

pub fn job_details(details: &JobDetails) -> String {
    let mut out = String::new();
    let _ = writeln!(
        out,
        "{} [{}]",
        details.work_assignment_name, details.wa_readable_id
    );
    let _ = writeln!(out, "  id:           {}", details.work_assignment_id);
    let _ = writeln!(
        out,
        "  hourly wage:  {}",
        format_wage(&details.hourly_wage)
    );
    let _ = writeln!(out, "  salary:       {}", format_wage(&details.salary));
    let _ = writeln!(
        out,
        "  location:     {}",
        format_location(&details.job_location)
    );
    let _ = writeln!(
        out,
        "  period:       {} to {}",
        details.period_from.format(DATE_FORMAT),
        details.period_to.format(DATE_FORMAT)
    );
    let _ = writeln!(
        out,
        "  shifts:       {} ({} h scheduled)",
        details.shifts_count,
        details.work_duration / 60
    );
    let _ = writeln!(
        out,
        "  published:    {}",
        details.date_published.format(DATE_FORMAT)
    );
    if !details.requirements.is_empty() {
        let _ = writeln!(out, "  requirements: {}", details.requirements);
    }
    if !details.clothing_requirements.is_empty() {
        let _ = writeln!(out, "  clothing:     {}", details.clothing_requirements);
    }
    if let Some(link) = &details.branch_link {
        let _ = writeln!(out, "  link:         {link}");
    }
    out
}

fn truncate(text: &str, max_chars: usize) -> String {
    if text.chars().count() <= max_chars {
        return text.to_string();
    }
    let mut out: String = text.chars().take(max_chars.saturating_sub(1)).collect();
    out.push('…');
    out
}
