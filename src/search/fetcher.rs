//! HTTP fetcher implementation
//!
//! This module handles the single HTTP exchange behind a search:
//! - Building an HTTP client with the configured user agent and timeout
//! - POSTing the keyword to the aggregator as a browser-shaped form request
//! - Classifying failures into the search error taxonomy

use crate::config::SearchConfig;
use crate::SearchError;
use reqwest::Client;
use std::time::Duration;
use url::Url;

/// Accept header sent with every search request
const ACCEPT_HEADER: &str = "text/html,application/xhtml+xml,application/xml;q=0.9,*/*;q=0.8";

/// Builds an HTTP client with proper configuration
///
/// The timeout covers the whole request and is the only cancellation point
/// of a search; once the body has arrived, parsing and filtering run to
/// completion.
///
/// # Arguments
///
/// * `config` - The search request configuration
///
/// # Returns
///
/// * `Ok(Client)` - Successfully built HTTP client
/// * `Err(reqwest::Error)` - Failed to build client
///
/// # Example
///
/// ```no_run
/// use pansearch::config::SearchConfig;
/// use pansearch::search::build_http_client;
///
/// let config = SearchConfig::default();
/// let client = build_http_client(&config).unwrap();
/// ```
pub fn build_http_client(config: &SearchConfig) -> Result<Client, reqwest::Error> {
    Client::builder()
        .user_agent(config.user_agent.clone())
        .timeout(Duration::from_secs(config.timeout_seconds))
        .connect_timeout(Duration::from_secs(10))
        .gzip(true)
        .brotli(true)
        .build()
}

/// POSTs a search to the aggregator and returns the response body
///
/// The request mirrors the aggregator's own search form: a form-encoded
/// payload with an empty `pan_type` plus the keyword, and Origin/Referer
/// headers derived from the endpoint. No retries are performed.
///
/// # Arguments
///
/// * `client` - The HTTP client to use
/// * `config` - The search request configuration
/// * `keyword` - The non-empty, trimmed search keyword
///
/// # Returns
///
/// * `Ok(String)` - The response body on a 2xx status
/// * `Err(SearchError)` - Upstream status, transport, or unexpected failure
pub async fn fetch_results(
    client: &Client,
    config: &SearchConfig,
    keyword: &str,
) -> Result<String, SearchError> {
    let payload = [("pan_type", ""), ("query", keyword)];

    let mut request = client
        .post(&config.endpoint_url)
        .form(&payload)
        .header("Accept", ACCEPT_HEADER);

    if let Some(origin) = endpoint_origin(&config.endpoint_url) {
        request = request
            .header("Origin", origin.clone())
            .header("Referer", format!("{}/", origin));
    }

    let response = request.send().await.map_err(classify_send_error)?;

    let status = response.status();
    if !status.is_success() {
        return Err(SearchError::UpstreamStatus {
            status: status.as_u16(),
        });
    }

    response.text().await.map_err(|e| SearchError::Unexpected {
        message: format!("failed to read response body: {}", e),
    })
}

/// Derives the Origin header value from the endpoint URL
fn endpoint_origin(endpoint: &str) -> Option<String> {
    let url = Url::parse(endpoint).ok()?;
    url.host_str()?;
    Some(url.origin().ascii_serialization())
}

/// Maps a request-send failure onto the search error taxonomy
///
/// Anything that failed on the wire is a transport error; only failures in
/// assembling the request itself count as unexpected.
fn classify_send_error(error: reqwest::Error) -> SearchError {
    if error.is_builder() {
        SearchError::Unexpected {
            message: error.to_string(),
        }
    } else {
        SearchError::Transport { source: error }
    }
}
