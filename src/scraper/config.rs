use serde::{Deserialize, Serialize};
use std::time::Duration;

use crate::scraper::ExtractionSchema;

/// Configuration for the browser-driven search sessions.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct ScraperConfig {
    /// Whether to run the browser in headless mode (default: true)
    pub headless: bool,

    /// Browser window width in pixels (default: 1280)
    pub window_width: u32,

    /// Browser window height in pixels (default: 800)
    pub window_height: u32,

    /// Page load timeout in seconds (default: 20)
    pub page_timeout_secs: u64,

    /// Wait time after the initial page load for dynamic content in
    /// milliseconds (default: 1000)
    pub wait_after_load_ms: u64,

    /// Wait time after a next-page click before re-extracting, in
    /// milliseconds (default: 3000)
    pub wait_after_click_ms: u64,

    /// Search endpoint the target is appended to as a `q` parameter
    pub search_url: String,

    /// Substring whose presence in the page markup signals more results
    pub next_page_marker: String,

    /// Visible text of the next-page control, used to locate it for clicks
    pub next_page_label: String,

    /// What to extract from each results page
    pub schema: ExtractionSchema,

    /// User agent string to use
    pub user_agent: Option<String>,
}

impl Default for ScraperConfig {
    fn default() -> Self {
        Self {
            headless: true,
            window_width: 1280,
            window_height: 800,
            page_timeout_secs: 20,
            wait_after_load_ms: 1000,
            wait_after_click_ms: 3000,
            search_url: "https://playtomic.com/search".to_string(),
            next_page_marker: "Next page</button>".to_string(),
            next_page_label: "Next page".to_string(),
            schema: ExtractionSchema::club_cards(),
            user_agent: Some(
                "Mozilla/5.0 (Macintosh; Intel Mac OS X 10_15_7) AppleWebKit/537.36 \
                 (KHTML, like Gecko) Chrome/120.0.0.0 Safari/537.36"
                    .to_string(),
            ),
        }
    }
}

impl ScraperConfig {
    /// Get the page load timeout as a Duration
    pub fn page_timeout(&self) -> Duration {
        Duration::from_secs(self.page_timeout_secs)
    }

    /// Get the wait time after the initial load as a Duration
    pub fn wait_after_load(&self) -> Duration {
        Duration::from_millis(self.wait_after_load_ms)
    }

    /// Get the wait time after a next-page click as a Duration
    pub fn wait_after_click(&self) -> Duration {
        Duration::from_millis(self.wait_after_click_ms)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config_values() {
        let config = ScraperConfig::default();
        assert!(config.headless);
        assert_eq!(config.window_width, 1280);
        assert_eq!(config.window_height, 800);
        assert_eq!(config.page_timeout_secs, 20);
        assert_eq!(config.wait_after_load_ms, 1000);
        assert_eq!(config.wait_after_click_ms, 3000);
        assert_eq!(config.next_page_marker, "Next page</button>");
        assert_eq!(config.next_page_label, "Next page");
        assert!(!config.schema.fields.is_empty());
    }

    #[test]
    fn test_timeout_durations() {
        let config = ScraperConfig::default();
        assert_eq!(config.page_timeout(), Duration::from_secs(20));
        assert_eq!(config.wait_after_load(), Duration::from_millis(1000));
        assert_eq!(config.wait_after_click(), Duration::from_millis(3000));
    }
}
