//! Launches API Client
//!
//! HTTP bindings to the public launches endpoint, organized by resource.

mod launches;

use thiserror::Error;

pub use launches::*;

/// Anything that prevents a page of launches from arriving
#[derive(Debug, Error)]
pub enum FetchError {
    #[error("request failed: {0}")]
    Request(#[from] reqwest::Error),

    #[error("server responded with HTTP {0}")]
    Status(u16),

    #[error("invalid response body: {0}")]
    Decode(#[from] serde_json::Error),
}
