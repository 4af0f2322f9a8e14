//! Pansearch: a cloud-drive resource search tool
//!
//! This crate queries a third-party cloud-drive aggregator with a keyword,
//! extracts result cards from the returned HTML in a single streaming pass,
//! and filters the extracted links down to genuine file-storage providers.

pub mod config;
pub mod search;
pub mod url;

use thiserror::Error;

/// Main error type for search operations
///
/// Every variant carries a fixed user-facing message (see
/// [`SearchError::user_message`]); the variant detail is diagnostic only and
/// never shown to the end user.
#[derive(Debug, Error)]
pub enum SearchError {
    #[error("Upstream returned status {status}")]
    UpstreamStatus { status: u16 },

    #[error("Transport failure: {source}")]
    Transport { source: reqwest::Error },

    #[error("Unexpected failure: {message}")]
    Unexpected { message: String },
}

impl SearchError {
    /// Returns the fixed user-facing message for this error
    ///
    /// These strings are part of the output contract and must not change.
    pub fn user_message(&self) -> &'static str {
        match self {
            Self::UpstreamStatus { .. } => "搜索服务返回异常，请稍后重试。",
            Self::Transport { .. } => "无法连接到搜索服务，请稍后重试。",
            Self::Unexpected { .. } => "搜索过程发生未知错误，请稍后重试。",
        }
    }
}

/// Configuration-specific errors
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("Failed to read config file: {0}")]
    Io(#[from] std::io::Error),

    #[error("Failed to parse TOML: {0}")]
    Parse(#[from] toml::de::Error),

    #[error("Validation error: {0}")]
    Validation(String),

    #[error("Invalid URL in config: {0}")]
    InvalidUrl(String),
}

/// Result type alias for search operations
pub type Result<T> = std::result::Result<T, SearchError>;

/// Result type alias for configuration operations
pub type ConfigResult<T> = std::result::Result<T, ConfigError>;

// Re-export commonly used types
pub use crate::config::Config;
pub use crate::search::{search, SearchResult};
pub use crate::url::{classify_link, extract_host, LinkClassification};
