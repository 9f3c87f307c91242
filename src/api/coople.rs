use std::time::Duration;

use async_trait::async_trait;
use reqwest::header::CONTENT_TYPE;
use serde::de::DeserializeOwned;

use crate::api::envelope::Envelope;
use crate::api::JobSource;
use crate::error::AppError;
use crate::models::job::JobPage;
use crate::models::job_details::JobDetails;

/// Production endpoint for the public work-assignment feed.
pub const DEFAULT_BASE_URL: &str =
    "https://www.coople.com/ch/resources/api/work-assignments/public-jobs";

/// Thin client for the listing API: one GET per call, envelope unwrapped,
/// errors classified. Retries and caching are the caller's business.
pub struct CoopleClient {
    http: reqwest::Client,
    base_url: String,
}

impl CoopleClient {
    /// Build a client against `base_url`. With `timeout: None` a request
    /// stays in flight until the transport itself gives up.
    pub fn new(base_url: impl Into<String>, timeout: Option<Duration>) -> Result<Self, AppError> {
        let mut builder = reqwest::Client::builder();
        if let Some(timeout) = timeout {
            builder = builder.timeout(timeout);
        }
        let http = builder.build()?;
        Ok(Self {
            http,
            base_url: base_url.into().trim_end_matches('/').to_string(),
        })
    }

    async fn get_json<T: DeserializeOwned>(&self, url: &str) -> Result<T, AppError> {
        let response = self
            .http
            .get(url)
            .header(CONTENT_TYPE, "application/json")
            .send()
            .await?;

        let status = response.status();
        if !status.is_success() {
            // Body-read failures on an error response are ignored, the
            // status alone is enough to classify.
            let body = response.text().await.unwrap_or_default();
            return Err(AppError::HttpStatus {
                status: status.as_u16(),
                body,
            });
        }

        let body = response.text().await?;
        let envelope: Envelope<T> = serde_json::from_str(&body)?;
        envelope.into_data()
    }
}

#[async_trait]
impl JobSource for CoopleClient {
    async fn fetch_page(&self, page_num: u32, page_size: u32) -> Result<JobPage, AppError> {
        let url = format!(
            "{}/list?pageNum={page_num}&pageSize={page_size}",
            self.base_url
        );
        let page: JobPage = self.get_json(&url).await?;
        tracing::debug!(
            "page {page_num}: {} items, server total {}",
            page.items.len(),
            page.total
        );
        Ok(page)
    }

    async fn fetch_details(&self, id: &str) -> Result<JobDetails, AppError> {
        let url = format!("{}/{id}", self.base_url);
        tracing::debug!("fetching details for {id}");
        self.get_json(&url).await
    }
}
