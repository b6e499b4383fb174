use std::path::Path;

use url::Url;

use crate::app::{AppContext, Result};
use crate::crawler;
use crate::domain::{ResultsMapping, TOP_CITIES};
use crate::output::{self, RunSummary};
use crate::scraper::ChromeCrawler;

/// Drive the full run: one browser, one session per city in sequence, one
/// file write at the end. A city that fails is recorded as empty and the
/// run moves on.
pub async fn crawl(ctx: &AppContext, output_path: &Path, cities: &[String]) -> Result<()> {
    let targets: Vec<&str> = if cities.is_empty() {
        TOP_CITIES.to_vec()
    } else {
        cities.iter().map(String::as_str).collect()
    };

    let origin = Url::parse(&ctx.config.scraper.search_url)?
        .origin()
        .ascii_serialization();

    println!("Crawling {} cities...", targets.len());

    let chrome = ChromeCrawler::new(ctx.config.scraper.clone()).await?;
    let page_limit = ctx.config.crawler.page_limit;

    let mut results = ResultsMapping::new();
    for (i, city) in targets.iter().enumerate() {
        println!("\nSearching clubs in {}...", city);

        let clubs = crawler::crawl_target(chrome.search(city), city, page_limit).await;

        if clubs.is_empty() {
            println!("No clubs found in {}", city);
        } else {
            println!("Found {} unique clubs in {}:", clubs.len(), city);
            for club in &clubs {
                println!("- {}: {}{}", club.display_name(), origin, club.link);
            }
        }
        results.insert((*city).to_string(), clubs);

        if i + 1 < targets.len() {
            tokio::time::sleep(ctx.config.crawler.city_pause()).await;
        }
    }

    output::write_results(output_path, &results)?;
    println!("\nAll results saved to {}", output_path.display());

    println!("\n{}", RunSummary::from_results(&results));

    Ok(())
}

pub fn list_cities() {
    for city in TOP_CITIES {
        println!("{}", city);
    }
}
