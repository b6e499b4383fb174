//! Browser-driven search sessions.
//!
//! The crawl loop never touches the browser directly: it talks to a
//! [`SearchSession`], which hands back one [`PageSnapshot`] per results page
//! and knows how to advance to the next one.
//!
//! ```text
//! city → search URL → session → snapshot / advance / advance … → close
//! ```
//!
//! The production implementation is [`ChromeSession`], a headless-Chrome
//! page driven via chromiumoxide. Tests substitute scripted sessions.

mod chrome;
mod config;
mod schema;

pub use chrome::{ChromeCrawler, ChromeSession};
pub use config::ScraperConfig;
pub use schema::{ExtractionSchema, FieldSpec};

use async_trait::async_trait;

use crate::app::Result;
use crate::domain::Club;

/// One extracted results page.
#[derive(Debug, Clone, Default)]
pub struct PageSnapshot {
    /// Clubs captured from the page, in document order.
    pub records: Vec<Club>,
    /// Whether the page advertises further results. The session derives
    /// this from the page markup so callers only ever see a boolean.
    pub has_more: bool,
}

/// A paginated search session for a single target.
#[async_trait]
pub trait SearchSession: Send {
    /// Extract the records currently visible, plus the next-page signal.
    async fn snapshot(&mut self) -> Result<PageSnapshot>;

    /// Trigger the next-page control, wait for content to settle, and
    /// extract the resulting page. Always reads the live DOM.
    async fn advance(&mut self) -> Result<PageSnapshot>;

    /// Release the session's browser resources. Idempotent.
    async fn close(&mut self) -> Result<()>;
}
