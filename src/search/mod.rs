//! Search module for pansearch
//!
//! This module contains the whole search pipeline:
//! - HTTP exchange with the aggregator
//! - Streaming extraction of result cards from the returned HTML
//! - Link filtering, deduplication, and capping
//! - Rendering of the user-facing result text

mod extractor;
mod fetcher;
mod filter;
mod format;

pub use extractor::{extract_cards, CardExtractor, RawCard};
pub use fetcher::{build_http_client, fetch_results};
pub use filter::{filter_cards, SearchResult, MAX_RESULTS};
pub use format::{render_results, MSG_EMPTY_KEYWORD};

use crate::config::Config;
use reqwest::Client;
use url::Url;

/// Runs one complete search and returns the user-facing result text
///
/// The returned string is always presentable: fetch failures map to their
/// fixed messages, and extraction problems simply shrink the result list.
/// All state is scoped to this call; independent searches may run
/// concurrently on the same client.
///
/// # Arguments
///
/// * `client` - The HTTP client, built via [`build_http_client`]
/// * `config` - The search configuration
/// * `query` - The raw keyword as entered by the user
///
/// # Returns
///
/// The formatted result text
pub async fn search(client: &Client, config: &Config, query: &str) -> String {
    let keyword = query.trim();
    if keyword.is_empty() {
        return MSG_EMPTY_KEYWORD.to_string();
    }

    let body = match fetch_results(client, &config.search, keyword).await {
        Ok(body) => body,
        Err(e) => {
            tracing::error!("Search fetch failed for '{}': {}", keyword, e);
            return e.user_message().to_string();
        }
    };

    // Validated at load time; a failure here still must not panic
    let base_url = match Url::parse(&config.search.endpoint_url) {
        Ok(url) => url,
        Err(e) => {
            tracing::error!(
                "Endpoint URL '{}' is not parseable: {}",
                config.search.endpoint_url,
                e
            );
            return crate::SearchError::Unexpected {
                message: e.to_string(),
            }
            .user_message()
            .to_string();
        }
    };

    let cards = extract_cards(&body);
    tracing::debug!("Extracted {} raw cards for '{}'", cards.len(), keyword);

    let results = filter_cards(cards, &base_url, &config.provider_markers());
    tracing::debug!("{} results after filtering", results.len());

    render_results(keyword, &results)
}
