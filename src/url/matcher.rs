/// Checks if a host contains a provider marker
///
/// Matching is a case-insensitive substring test, not an exact domain match,
/// so a marker tolerates subdomains and regional variants:
/// "baidu" matches "pan.baidu.com", "yun.baidu.com", "baidu.com".
///
/// # Arguments
///
/// * `marker` - The provider marker from the allow-list
/// * `host` - The host to check
///
/// # Returns
///
/// * `true` - If the host contains the marker
/// * `false` - Otherwise
///
/// # Examples
///
/// ```
/// use pansearch::url::host_contains_marker;
///
/// assert!(host_contains_marker("baidu", "pan.baidu.com"));
/// assert!(host_contains_marker("189.cn", "cloud.189.cn"));
/// assert!(host_contains_marker("BAIDU", "pan.baidu.com"));
/// assert!(!host_contains_marker("quark", "pan.baidu.com"));
/// ```
pub fn host_contains_marker(marker: &str, host: &str) -> bool {
    host.to_lowercase().contains(&marker.to_lowercase())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_marker_in_subdomain() {
        assert!(host_contains_marker("baidu", "pan.baidu.com"));
        assert!(host_contains_marker("quark", "pan.quark.cn"));
        assert!(host_contains_marker("aliyun", "www.aliyundrive.com"));
    }

    #[test]
    fn test_marker_with_dot() {
        assert!(host_contains_marker("189.cn", "cloud.189.cn"));
        assert!(host_contains_marker("drive.google", "drive.google.com"));
    }

    #[test]
    fn test_marker_no_match() {
        assert!(!host_contains_marker("quark", "pan.baidu.com"));
        assert!(!host_contains_marker("xunlei", "example.com"));
    }

    #[test]
    fn test_case_insensitive_match() {
        assert!(host_contains_marker("BAIDU", "pan.baidu.com"));
        assert!(host_contains_marker("baidu", "PAN.BAIDU.COM"));
        assert!(host_contains_marker("Terabox", "www.TeraBox.com"));
    }

    #[test]
    fn test_generic_pan_marker() {
        // "pan" is deliberately generic and matches many drive hosts
        assert!(host_contains_marker("pan", "pan.baidu.com"));
        assert!(host_contains_marker("pan", "123pan.com"));
        assert!(host_contains_marker("pan", "www.alipan.com"));
    }

    #[test]
    fn test_empty_host() {
        assert!(!host_contains_marker("baidu", ""));
    }

    #[test]
    fn test_empty_marker_matches_everything() {
        // Validation rejects empty markers before they reach matching
        assert!(host_contains_marker("", "example.com"));
    }
}
