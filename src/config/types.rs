use serde::Deserialize;

/// Main configuration structure for pansearch
#[derive(Debug, Clone, Deserialize)]
pub struct Config {
    #[serde(default)]
    pub search: SearchConfig,

    /// Allow-list of host markers identifying genuine storage providers
    #[serde(default = "default_providers", rename = "provider")]
    pub providers: Vec<ProviderEntry>,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            search: SearchConfig::default(),
            providers: default_providers(),
        }
    }
}

/// Search request configuration
#[derive(Debug, Clone, Deserialize)]
pub struct SearchConfig {
    /// POST endpoint of the aggregator's search page
    #[serde(rename = "endpoint-url", default = "default_endpoint_url")]
    pub endpoint_url: String,

    /// Per-request HTTP timeout in seconds
    #[serde(rename = "timeout-seconds", default = "default_timeout_seconds")]
    pub timeout_seconds: u64,

    /// Browser User-Agent sent with every request
    #[serde(rename = "user-agent", default = "default_user_agent")]
    pub user_agent: String,
}

impl Default for SearchConfig {
    fn default() -> Self {
        Self {
            endpoint_url: default_endpoint_url(),
            timeout_seconds: default_timeout_seconds(),
            user_agent: default_user_agent(),
        }
    }
}

/// One allow-list entry: a substring that identifies a provider host
#[derive(Debug, Clone, Deserialize)]
pub struct ProviderEntry {
    /// Host marker (e.g., "baidu" or "189.cn"), matched case-insensitively
    pub marker: String,
}

fn default_endpoint_url() -> String {
    "https://so.slowread.net/search".to_string()
}

fn default_timeout_seconds() -> u64 {
    20
}

fn default_user_agent() -> String {
    "Mozilla/5.0 (Windows NT 10.0; Win64; x64) AppleWebKit/537.36 \
     (KHTML, like Gecko) Chrome/145.0.0.0 Safari/537.36"
        .to_string()
}

/// Built-in provider markers, used when the config file defines none
fn default_providers() -> Vec<ProviderEntry> {
    [
        "quark",
        "aliyun",
        "alipan",
        "baidu",
        "pan",
        "xunlei",
        "189.cn",
        "tianyi",
        "115",
        "123pan",
        "pikpak",
        "terabox",
        "lanzou",
        "onedrive",
        "sharepoint",
        "drive.google",
        "google",
        "uc",
    ]
    .iter()
    .map(|m| ProviderEntry {
        marker: (*m).to_string(),
    })
    .collect()
}

impl Config {
    /// Returns the allow-list markers as plain strings
    pub fn provider_markers(&self) -> Vec<String> {
        self.providers.iter().map(|p| p.marker.clone()).collect()
    }
}
