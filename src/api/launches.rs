//! Launch Queries
//!
//! Paginated, mission-name-filtered listing of launches.

use percent_encoding::{utf8_percent_encode, NON_ALPHANUMERIC};

use super::FetchError;
use crate::config::FeedConfig;
use crate::models::LaunchRecord;

#[derive(Clone, Debug)]
pub struct LaunchClient {
    http: reqwest::Client,
    api_base: String,
    page_size: u32,
}

impl LaunchClient {
    pub fn new(config: &FeedConfig) -> Self {
        Self {
            http: reqwest::Client::new(),
            api_base: config.api_base.trim_end_matches('/').to_string(),
            page_size: config.page_size,
        }
    }

    pub fn page_size(&self) -> u32 {
        self.page_size
    }

    /// URL for a 1-based page; the search term is sent even when empty
    pub fn page_url(&self, page: u32, search: &str) -> String {
        let offset = page.saturating_sub(1) * self.page_size;
        format!(
            "{}/launches?limit={}&offset={}&mission_name={}",
            self.api_base,
            self.page_size,
            offset,
            utf8_percent_encode(search, NON_ALPHANUMERIC),
        )
    }

    /// Fetch one page. An empty vector means there is nothing past this page.
    pub async fn fetch_page(&self, page: u32, search: &str) -> Result<Vec<LaunchRecord>, FetchError> {
        let response = self.http.get(self.page_url(page, search)).send().await?;

        let status = response.status();
        if !status.is_success() {
            return Err(FetchError::Status(status.as_u16()));
        }

        let body = response.text().await?;
        parse_page(&body)
    }
}

/// Decode a response body (a JSON array of launches)
pub fn parse_page(body: &str) -> Result<Vec<LaunchRecord>, FetchError> {
    Ok(serde_json::from_str(body)?)
}
