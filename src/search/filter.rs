//! Result filtering and deduplication
//!
//! This module turns the extractor's raw cards into the final result list:
//! hrefs are resolved against the aggregator's base URL, links that are not
//! genuine provider shares are rejected, exact duplicates are dropped, and
//! the list is capped.

use crate::search::extractor::RawCard;
use crate::url::{classify_link, extract_host};
use std::collections::HashSet;
use url::Url;

/// Maximum number of results returned for one search
pub const MAX_RESULTS: usize = 20;

/// One final search result with a resolved absolute URL
///
/// Equality is structural over all three fields and doubles as the
/// deduplication key.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct SearchResult {
    /// Provider name, e.g. "百度网盘"
    pub provider: String,

    /// Resource title
    pub title: String,

    /// Absolute share URL
    pub url: String,
}

/// Filters raw cards down to the final, ordered result list
///
/// Per card, in input order:
/// 1. Skip if title or href is empty (the extractor already guarantees
///    non-empty fields; the check is re-applied here)
/// 2. Resolve the href against the base URL
/// 3. Keep only links classified as provider shares
/// 4. Drop exact (provider, title, url) duplicates, first occurrence wins
/// 5. Stop once the cap is reached
///
/// An empty output is a valid, non-error outcome.
///
/// # Arguments
///
/// * `cards` - Raw cards in document order
/// * `base_url` - The fetch target, used for relative resolution and as the
///   aggregator's own host
/// * `markers` - Provider allow-list markers
///
/// # Returns
///
/// At most [`MAX_RESULTS`] results, first-seen order preserved
pub fn filter_cards(cards: Vec<RawCard>, base_url: &Url, markers: &[String]) -> Vec<SearchResult> {
    let own_host = extract_host(base_url).unwrap_or_default();

    let mut seen: HashSet<SearchResult> = HashSet::new();
    let mut results = Vec::new();

    for card in cards {
        if results.len() == MAX_RESULTS {
            break;
        }

        if card.title.is_empty() || card.href.is_empty() {
            continue;
        }

        let resolved = match base_url.join(&card.href) {
            Ok(url) => url,
            Err(e) => {
                tracing::debug!("Failed to resolve href '{}': {}", card.href, e);
                continue;
            }
        };

        let classification = classify_link(&resolved, &own_host, markers);
        if !classification.is_result() {
            tracing::debug!("Rejected link {} ({:?})", resolved, classification);
            continue;
        }

        let result = SearchResult {
            provider: card.provider,
            title: card.title,
            url: resolved.to_string(),
        };

        if seen.insert(result.clone()) {
            results.push(result);
        }
    }

    results
}
