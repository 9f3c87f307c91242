// Remote-source module. Defines the trait the list controller fetches
// through and the reqwest client for the public listing API.

pub mod coople;
pub mod envelope;

pub use coople::{CoopleClient, DEFAULT_BASE_URL};
pub use envelope::Envelope;

use async_trait::async_trait;

use crate::error::AppError;
use crate::models::job::JobPage;
use crate::models::job_details::JobDetails;

/// Remote source of job listings. Implementations perform one best-effort
/// call per invocation: no retry, no caching.
#[async_trait]
pub trait JobSource: Send + Sync {
    /// Fetch one zero-based page of the public feed. `total` on the result
    /// counts the whole collection, not the page.
    async fn fetch_page(&self, page_num: u32, page_size: u32) -> Result<JobPage, AppError>;

    /// Fetch the full record for a single posting.
    async fn fetch_details(&self, id: &str) -> Result<JobDetails, AppError>;
}
