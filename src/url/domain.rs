use url::Url;

/// Extracts the host from a URL
///
/// This function retrieves the host portion of a URL and converts it to
/// lowercase. If the URL has no host (which shouldn't happen for valid
/// HTTP(S) URLs), it returns None.
///
/// # Arguments
///
/// * `url` - The URL to extract the host from
///
/// # Returns
///
/// * `Some(String)` - The lowercase host
/// * `None` - If the URL has no host
///
/// # Examples
///
/// ```
/// use url::Url;
/// use pansearch::url::extract_host;
///
/// let url = Url::parse("https://pan.baidu.com/s/abc").unwrap();
/// assert_eq!(extract_host(&url), Some("pan.baidu.com".to_string()));
///
/// let url = Url::parse("https://PAN.BAIDU.COM/s/abc").unwrap();
/// assert_eq!(extract_host(&url), Some("pan.baidu.com".to_string()));
/// ```
pub fn extract_host(url: &Url) -> Option<String> {
    url.host_str().map(|h| h.to_lowercase())
}
