//! Feed Configuration
//!
//! Compile-time settings for the launches API and the search box.

use std::time::Duration;

/// Public launches API (no authentication)
pub const DEFAULT_API_BASE: &str = "https://api.spacexdata.com/v3";

/// Records requested per page
pub const DEFAULT_PAGE_SIZE: u32 = 10;

/// Quiet period before a search term is committed
pub const DEFAULT_SEARCH_DEBOUNCE_MS: u64 = 500;

#[derive(Debug, Clone, PartialEq)]
pub struct FeedConfig {
    pub api_base: String,
    pub page_size: u32,
    pub search_debounce: Duration,
}

impl Default for FeedConfig {
    fn default() -> Self {
        Self {
            api_base: DEFAULT_API_BASE.to_string(),
            page_size: DEFAULT_PAGE_SIZE,
            search_debounce: Duration::from_millis(DEFAULT_SEARCH_DEBOUNCE_MS),
        }
    }
}

impl FeedConfig {
    /// Defaults, with `LAUNCH_FEED_API_BASE` applied if it was set at build time
    pub fn from_build_env() -> Self {
        Self::default().with_api_base(option_env!("LAUNCH_FEED_API_BASE"))
    }

    fn with_api_base(mut self, base: Option<&str>) -> Self {
        if let Some(base) = base.map(str::trim).filter(|b| !b.is_empty()) {
            self.api_base = base.trim_end_matches('/').to_string();
        }
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let config = FeedConfig::default();
        assert_eq!(config.api_base, "https://api.spacexdata.com/v3");
        assert_eq!(config.page_size, 10);
        assert_eq!(config.search_debounce, Duration::from_millis(500));
    }

    #[test]
    fn test_api_base_override() {
        let config = FeedConfig::default().with_api_base(Some("http://localhost:8080/v3/"));
        assert_eq!(config.api_base, "http://localhost:8080/v3");

        let config = FeedConfig::default().with_api_base(Some("  "));
        assert_eq!(config.api_base, DEFAULT_API_BASE);
    }
}
