//! Configuration management.
//!
//! Configuration is read from `~/.config/courtscout/config.toml` at startup.
//! If the file doesn't exist, a default configuration with comments is
//! created. Defaults reproduce the constants the crawl was tuned with, so a
//! missing or partial file still yields a working run.

use serde::{Deserialize, Serialize};
use std::fs;
use std::io::Write;
use std::path::{Path, PathBuf};
use std::time::Duration;

use crate::crawler::DEFAULT_PAGE_LIMIT;
use crate::scraper::ScraperConfig;

/// Main configuration struct.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    pub crawler: CrawlerConfig,
    pub scraper: ScraperConfig,
}

/// Knobs for the pagination loop and the city driver.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct CrawlerConfig {
    /// Most pages visited per city (default: 5)
    pub page_limit: usize,

    /// Pause between cities in seconds (default: 3)
    pub city_pause_secs: u64,
}

impl Default for CrawlerConfig {
    fn default() -> Self {
        Self {
            page_limit: DEFAULT_PAGE_LIMIT,
            city_pause_secs: 3,
        }
    }
}

impl CrawlerConfig {
    /// Get the pause between cities as a Duration
    pub fn city_pause(&self) -> Duration {
        Duration::from_secs(self.city_pause_secs)
    }
}

impl Config {
    /// Load configuration from the default path.
    ///
    /// If the config file doesn't exist, creates a default one with
    /// comments. Missing fields in the config file use default values.
    pub fn load() -> Result<Self, ConfigError> {
        let config_path = Self::default_config_path()?;

        if !config_path.exists() {
            Self::create_default_config(&config_path)?;
            return Ok(Self::default());
        }

        Self::load_from(&config_path)
    }

    /// Load configuration from an explicit path.
    pub fn load_from(path: &Path) -> Result<Self, ConfigError> {
        let content = fs::read_to_string(path).map_err(|e| ConfigError::Io {
            path: path.to_path_buf(),
            source: e,
        })?;

        let config: Config = toml::from_str(&content).map_err(|e| ConfigError::Parse {
            path: path.to_path_buf(),
            source: e,
        })?;

        Ok(config)
    }

    /// Get the default config file path: `~/.config/courtscout/config.toml`
    pub fn default_config_path() -> Result<PathBuf, ConfigError> {
        let config_dir = dirs::config_dir().ok_or(ConfigError::NoConfigDir)?;
        Ok(config_dir.join("courtscout").join("config.toml"))
    }

    /// Create a default config file with comments.
    fn create_default_config(path: &PathBuf) -> Result<(), ConfigError> {
        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent).map_err(|e| ConfigError::Io {
                path: parent.to_path_buf(),
                source: e,
            })?;
        }

        let default_config = Self::default_config_content();

        let mut file = fs::File::create(path).map_err(|e| ConfigError::Io {
            path: path.clone(),
            source: e,
        })?;

        file.write_all(default_config.as_bytes())
            .map_err(|e| ConfigError::Io {
                path: path.clone(),
                source: e,
            })?;

        Ok(())
    }

    /// Generate the default config file content with comments.
    fn default_config_content() -> String {
        r##"# Courtscout Configuration

[crawler]
# Most pages visited per city
page_limit = 5

# Pause between cities (seconds)
city_pause_secs = 3

[scraper]
# Run browser in headless mode (no visible window)
headless = true

# Browser window size
window_width = 1280
window_height = 800

# Page load timeout (seconds)
page_timeout_secs = 20

# Wait after the initial page load for dynamic content (milliseconds)
wait_after_load_ms = 1000

# Wait after clicking the next-page control before re-extracting (milliseconds)
wait_after_click_ms = 3000

# Search endpoint; the city is appended as a `q` parameter
search_url = "https://playtomic.com/search"

# Substring whose presence in the page markup signals more results
next_page_marker = "Next page</button>"

# Visible text of the next-page control
next_page_label = "Next page"

[scraper.schema]
# Selector matching one club card per record
base_selector = "section.flex.w-full.flex-col.gap-4.rounded-2xl"

[[scraper.schema.fields]]
name = "club_name"
selector = "h3.text-base.font-bold"

[[scraper.schema.fields]]
name = "club_link"
selector = "a"
attribute = "href"
"##
        .to_string()
    }
}

/// Configuration errors.
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("Could not determine config directory")]
    NoConfigDir,

    #[error("Failed to read/write config file at {path}: {source}")]
    Io {
        path: PathBuf,
        source: std::io::Error,
    },

    #[error("Failed to parse config file at {path}: {source}")]
    Parse {
        path: PathBuf,
        source: toml::de::Error,
    },
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config_deserializes() {
        let content = Config::default_config_content();
        let config: Config = toml::from_str(&content).expect("Default config should be valid TOML");

        assert_eq!(config.crawler.page_limit, 5);
        assert_eq!(config.scraper.next_page_label, "Next page");
        assert_eq!(config.scraper.schema.fields.len(), 2);
        assert_eq!(
            config.scraper.schema.fields[1].attribute.as_deref(),
            Some("href")
        );
    }

    #[test]
    fn test_partial_config() {
        let content = r##"
[crawler]
page_limit = 2
"##;
        let config: Config = toml::from_str(content).expect("Partial config should work");

        // Custom value
        assert_eq!(config.crawler.page_limit, 2);
        // Default values
        assert_eq!(config.crawler.city_pause_secs, 3);
        assert!(config.scraper.headless);
    }

    #[test]
    fn test_empty_config() {
        let config: Config = toml::from_str("").expect("Empty config should work");

        assert_eq!(config.crawler.page_limit, 5);
        assert_eq!(config.crawler.city_pause(), Duration::from_secs(3));
        assert_eq!(config.scraper.page_timeout_secs, 20);
    }

    #[test]
    fn test_load_from_path() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("config.toml");
        fs::write(&path, "[crawler]\npage_limit = 1\n").unwrap();

        let config = Config::load_from(&path).unwrap();
        assert_eq!(config.crawler.page_limit, 1);
    }

    #[test]
    fn test_load_from_missing_path() {
        let result = Config::load_from(Path::new("/nonexistent/config.toml"));
        assert!(matches!(result, Err(ConfigError::Io { .. })));
    }
}
