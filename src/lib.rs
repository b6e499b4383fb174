//! # Courtscout
//!
//! A headless-browser crawler for the Playtomic club directory.
//!
//! ## Architecture
//!
//! Courtscout walks a fixed list of cities, one at a time:
//!
//! ```text
//! city → search session (headless Chrome) → paginate → dedup → JSON file
//! ```
//!
//! - [`scraper`]: browser-driven search sessions with schema-based extraction
//! - [`crawler`]: the pagination/deduplication loop with per-city isolation
//! - [`output`]: the aggregate JSON file and end-of-run statistics
//!
//! ## Quick Start
//!
//! ```bash
//! # Crawl every built-in city and write club_links.json
//! courtscout crawl
//!
//! # Crawl one city to a custom file
//! courtscout crawl --city london --output london.json
//!
//! # Show the built-in city list
//! courtscout cities
//! ```

/// Application context and error handling.
///
/// The [`AppContext`](app::AppContext) struct carries the loaded
/// configuration; [`ScoutError`](app::ScoutError) is the crate-wide error
/// type.
pub mod app;

/// Command-line interface using clap.
///
/// Defines the CLI structure and subcommands:
/// - `crawl [--output <file>] [--city <name>...]` - Run a crawl
/// - `cities` - List the built-in targets
pub mod cli;

/// Configuration management.
///
/// Loads from `~/.config/courtscout/config.toml`, covering browser options,
/// extraction selectors, pagination knobs, and pauses.
pub mod config;

/// The pagination/deduplication loop.
///
/// [`crawl_city`](crawler::crawl_city) turns one search session into an
/// ordered list of unique clubs; [`crawl_target`](crawler::crawl_target)
/// contains any failure to that one target.
pub mod crawler;

/// Core domain models.
///
/// - [`Club`](domain::Club): a discovered club with its dedup identity
/// - [`TOP_CITIES`](domain::TOP_CITIES): the fixed crawl targets
/// - [`ResultsMapping`](domain::ResultsMapping): city → clubs
pub mod domain;

/// Result serialization.
///
/// One pretty-printed JSON file mapping each city to its clubs, plus the
/// [`RunSummary`](output::RunSummary) printed at the end of a run.
pub mod output;

/// Browser-driven search sessions.
///
/// Uses headless Chrome via chromiumoxide to load a search page, extract
/// club cards with a selector schema, and click through pagination.
///
/// - [`ChromeCrawler`](scraper::ChromeCrawler): shared browser, one per run
/// - [`ChromeSession`](scraper::ChromeSession): one tab per city
/// - [`SearchSession`](scraper::SearchSession): async trait the crawl loop
///   depends on
pub mod scraper;
