//! Core utilities for the NHL FPoints CLI
//!
//! This module consolidates common utilities that are used across
//! the application:
//! - `cache`: In-memory LRU cache with expiry
//! - `config`: Client configuration from the environment
//! - `http`: Request headers and URL building

pub mod cache;
pub mod config;
pub mod http;

// Re-export commonly used items for convenience
pub use cache::{CacheStatus, TtlCache};
pub use config::ClientConfig;
pub use http::{default_header_map, score_url};
