//! Configuration module for pansearch
//!
//! This module handles loading, parsing, and validating TOML configuration
//! files. Every field has a built-in default matching the public aggregator,
//! so running without a config file is supported.
//!
//! # Example
//!
//! ```no_run
//! use pansearch::config::load_config;
//! use std::path::Path;
//!
//! let config = load_config(Path::new("config.toml")).unwrap();
//! println!("Request timeout: {}s", config.search.timeout_seconds);
//! ```

mod parser;
mod types;
mod validation;

// Re-export types
pub use types::{Config, ProviderEntry, SearchConfig};

// Re-export parser functions
pub use parser::{compute_config_hash, load_config, load_config_with_hash};
