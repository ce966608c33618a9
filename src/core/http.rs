//! HTTP utilities for NHL API communication

use crate::Result;
use reqwest::header::{HeaderMap, HeaderValue, ACCEPT, USER_AGENT};

/// Headers sent with every NHL API request.
pub fn default_header_map() -> Result<HeaderMap> {
    let mut h = HeaderMap::new();
    h.insert(ACCEPT, HeaderValue::from_static("application/json"));
    let agent = format!("{}/{}", env!("CARGO_PKG_NAME"), env!("CARGO_PKG_VERSION"));
    h.insert(USER_AGENT, HeaderValue::from_str(&agent)?);
    Ok(h)
}

/// `{base}/v1/score/{YYYY-MM-DD}`
pub fn score_url(base_url: &str, date: &str) -> String {
    format!("{}/v1/score/{}", base_url.trim_end_matches('/'), date)
}
