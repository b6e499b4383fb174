//! The pagination/deduplication loop.
//!
//! One [`SearchSession`] per target; the loop pulls snapshots out of it,
//! merges records by club identity, and stops on whichever comes first:
//! a page with zero new clubs, no next-page signal, or the page limit.
//! Failures are contained per target, never aborting the run.

use std::collections::HashSet;
use std::future::Future;

use tracing::{debug, info, warn};

use crate::app::Result;
use crate::domain::Club;
use crate::scraper::{PageSnapshot, SearchSession};

/// Most pages visited for a single target.
pub const DEFAULT_PAGE_LIMIT: usize = 5;

/// Crawl one target through an open session, returning its unique clubs in
/// first-seen order. The session is closed on every exit path.
pub async fn crawl_city<S: SearchSession>(
    mut session: S,
    city: &str,
    page_limit: usize,
) -> Result<Vec<Club>> {
    let outcome = paginate(&mut session, city, page_limit).await;
    if let Err(e) = session.close().await {
        warn!("Failed to close session for {}: {}", city, e);
    }
    outcome
}

async fn paginate<S: SearchSession>(
    session: &mut S,
    city: &str,
    page_limit: usize,
) -> Result<Vec<Club>> {
    let mut clubs = Vec::new();
    let mut seen = HashSet::new();
    let mut page_num = 1usize;

    let first = session.snapshot().await?;
    if first.records.is_empty() {
        info!("No clubs found for {}", city);
        return Ok(clubs);
    }

    let added = merge(&first, &mut clubs, &mut seen);
    debug!(
        "{}: page {} held {} clubs, {} unique",
        city,
        page_num,
        first.records.len(),
        added
    );

    let mut has_more = first.has_more;
    while has_more && page_num < page_limit {
        page_num += 1;

        let snapshot = session.advance().await?;
        let added = merge(&snapshot, &mut clubs, &mut seen);
        debug!(
            "{}: page {} held {} clubs, {} new (total {})",
            city,
            page_num,
            snapshot.records.len(),
            added,
            clubs.len()
        );

        // Stop-condition order is fixed: exhausted, then affordance, then
        // the page limit in the loop condition.
        if added == 0 {
            debug!("{}: page {} brought nothing new, stopping", city, page_num);
            break;
        }
        has_more = snapshot.has_more;
    }

    info!(
        "{}: {} unique clubs across {} pages",
        city,
        clubs.len(),
        page_num
    );
    Ok(clubs)
}

/// Merge a page's records into the accumulated set, keyed by club identity.
/// Records without an identity are discarded. Returns how many were new.
fn merge(snapshot: &PageSnapshot, clubs: &mut Vec<Club>, seen: &mut HashSet<String>) -> usize {
    let mut added = 0;
    for club in &snapshot.records {
        let Some(id) = club.identity() else {
            continue;
        };
        if seen.insert(id.to_string()) {
            clubs.push(club.clone());
            added += 1;
        }
    }
    added
}

/// Run one target end to end: await the session being opened, crawl it, and
/// convert any failure into an empty result with a warning. One broken city
/// never stops the cities after it.
pub async fn crawl_target<S, Fut>(open: Fut, city: &str, page_limit: usize) -> Vec<Club>
where
    S: SearchSession,
    Fut: Future<Output = Result<S>>,
{
    let session = match open.await {
        Ok(session) => session,
        Err(e) => {
            warn!("Could not open search session for {}: {}", city, e);
            return Vec::new();
        }
    };

    match crawl_city(session, city, page_limit).await {
        Ok(clubs) => clubs,
        Err(e) => {
            warn!("Error while crawling {}: {}", city, e);
            Vec::new()
        }
    }
}
