//! URL handling module for pansearch
//!
//! This module provides host extraction, provider marker matching, and
//! result-link classification functionality.

mod domain;
mod matcher;

// Re-export main functions
pub use domain::extract_host;
pub use matcher::host_contains_marker;

use url::Url;

/// Link classification types
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum LinkClassification {
    /// Link points at a known storage provider - keep as a result
    Provider,
    /// Link points back at the aggregator itself (navigation, share buttons)
    OwnHost,
    /// Link uses a scheme other than http/https
    UnsupportedScheme,
    /// Host matches no provider marker
    Unrecognized,
}

impl LinkClassification {
    /// Returns true if the link should appear in search results
    pub fn is_result(&self) -> bool {
        matches!(self, Self::Provider)
    }
}

/// Classifies a resolved link against the aggregator host and the allow-list
///
/// The checks run in priority order:
/// 1. Scheme must be http or https
/// 2. The aggregator's own host is never a result
/// 3. The host must contain at least one provider marker
///
/// # Arguments
///
/// * `url` - The resolved absolute URL to classify
/// * `own_host` - The aggregator's host (lowercase), from the base URL
/// * `markers` - Provider allow-list markers
///
/// # Returns
///
/// The classification of the link
///
/// # Examples
///
/// ```
/// use url::Url;
/// use pansearch::url::{classify_link, LinkClassification};
///
/// let markers = vec!["baidu".to_string()];
/// let url = Url::parse("https://pan.baidu.com/s/abc").unwrap();
/// assert_eq!(
///     classify_link(&url, "so.slowread.net", &markers),
///     LinkClassification::Provider
/// );
/// ```
pub fn classify_link(url: &Url, own_host: &str, markers: &[String]) -> LinkClassification {
    if url.scheme() != "http" && url.scheme() != "https" {
        return LinkClassification::UnsupportedScheme;
    }

    let host = match extract_host(url) {
        Some(host) => host,
        None => return LinkClassification::Unrecognized,
    };

    if host == own_host {
        return LinkClassification::OwnHost;
    }

    for marker in markers {
        if host_contains_marker(marker, &host) {
            return LinkClassification::Provider;
        }
    }

    LinkClassification::Unrecognized
}
