use std::sync::Arc;

use async_trait::async_trait;
use chromiumoxide::browser::{Browser, BrowserConfig};
use chromiumoxide::Page;
use futures::StreamExt;
use serde::Deserialize;
use url::Url;

use crate::app::{Result, ScoutError};
use crate::domain::Club;
use crate::scraper::{ExtractionSchema, PageSnapshot, ScraperConfig, SearchSession};

/// Shared headless browser, launched once per run.
///
/// Each crawl target gets its own [`ChromeSession`] (one browser tab),
/// opened at the target's search URL.
pub struct ChromeCrawler {
    browser: Arc<Browser>,
    config: ScraperConfig,
}

/// What the extraction script returns from the browser context.
#[derive(Debug, Deserialize)]
struct ExtractedPage {
    records: Vec<Club>,
    html: String,
}

impl ChromeCrawler {
    /// Launch the browser with the given configuration.
    pub async fn new(config: ScraperConfig) -> Result<Self> {
        let mut builder = BrowserConfig::builder()
            .arg("--no-sandbox")
            .arg("--disable-gpu")
            .arg("--disable-dev-shm-usage")
            .arg("--disable-software-rasterizer")
            .window_size(config.window_width, config.window_height)
            .request_timeout(config.page_timeout());

        if !config.headless {
            builder = builder.with_head();
        }

        let browser_config = builder
            .build()
            .map_err(|e| ScoutError::Browser(format!("Failed to build browser config: {}", e)))?;

        let (browser, mut handler) = Browser::launch(browser_config).await.map_err(|e| {
            ScoutError::Browser(format!(
                "Failed to launch browser: {}. Is Chrome or Chromium installed and in PATH?",
                e
            ))
        })?;

        // Drive browser events for the lifetime of the run
        tokio::spawn(async move {
            while let Some(_event) = handler.next().await {}
        });

        Ok(Self {
            browser: Arc::new(browser),
            config,
        })
    }

    /// Build the search URL for a target.
    pub fn search_url(&self, city: &str) -> Result<Url> {
        Ok(Url::parse_with_params(
            &self.config.search_url,
            &[("q", city)],
        )?)
    }

    /// Open a search session for one target: a fresh tab navigated to the
    /// target's search URL, settled past the initial load.
    pub async fn search(&self, city: &str) -> Result<ChromeSession> {
        let url = self.search_url(city)?;

        let page = self
            .browser
            .new_page(url.as_str())
            .await
            .map_err(|e| ScoutError::Browser(format!("Failed to open page: {}", e)))?;

        if let Some(ref ua) = self.config.user_agent {
            page.set_user_agent(ua)
                .await
                .map_err(|e| ScoutError::Browser(format!("Failed to set user agent: {}", e)))?;
        }

        page.wait_for_navigation()
            .await
            .map_err(|e| ScoutError::Browser(format!("Navigation failed: {}", e)))?;

        tokio::time::sleep(self.config.wait_after_load()).await;

        Ok(ChromeSession {
            page: Some(page),
            config: self.config.clone(),
        })
    }
}

/// One browser tab holding a paginated search for a single target.
pub struct ChromeSession {
    page: Option<Page>,
    config: ScraperConfig,
}

impl ChromeSession {
    fn page(&self) -> Result<&Page> {
        self.page
            .as_ref()
            .ok_or_else(|| ScoutError::Browser("Session already closed".to_string()))
    }

    async fn extract(&self) -> Result<PageSnapshot> {
        let page = self.page()?;
        let script = self.config.schema.extraction_script();

        let value: serde_json::Value = page
            .evaluate(script)
            .await
            .map_err(|e| ScoutError::Extraction(format!("Script execution failed: {}", e)))?
            .into_value()
            .map_err(|e| ScoutError::Extraction(format!("Failed to parse result: {:?}", e)))?;

        let extracted: ExtractedPage = serde_json::from_value(value)
            .map_err(|e| ScoutError::Extraction(format!("Malformed extraction result: {}", e)))?;

        let has_more = extracted.html.contains(&self.config.next_page_marker);

        Ok(PageSnapshot {
            records: extracted.records,
            has_more,
        })
    }
}

#[async_trait]
impl SearchSession for ChromeSession {
    async fn snapshot(&mut self) -> Result<PageSnapshot> {
        self.extract().await
    }

    async fn advance(&mut self) -> Result<PageSnapshot> {
        {
            let page = self.page()?;
            let script = ExtractionSchema::next_page_script(&self.config.next_page_label);

            let clicked: bool = page
                .evaluate(script)
                .await
                .map_err(|e| ScoutError::Browser(format!("Click script failed: {}", e)))?
                .into_value()
                .unwrap_or(false);

            if !clicked {
                tracing::debug!("next-page control not found when clicking");
            }
        }

        // Let the page swap in the new results before reading the DOM
        tokio::time::sleep(self.config.wait_after_click()).await;

        self.extract().await
    }

    async fn close(&mut self) -> Result<()> {
        if let Some(page) = self.page.take() {
            page.close()
                .await
                .map_err(|e| ScoutError::Browser(format!("Failed to close page: {}", e)))?;
        }
        Ok(())
    }
}
