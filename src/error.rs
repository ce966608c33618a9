//! Error types for the NHL FPoints CLI

use thiserror::Error;


pub type Result<T> = std::result::Result<T, FpointsError>;

#[derive(Error, Debug)]
pub enum FpointsError {
    #[error("HTTP request failed: {0}")]
    Http(#[from] reqwest::Error),

    #[error("JSON parsing failed: {0}")]
    Json(#[from] serde_json::Error),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Invalid header value: {0}")]
    InvalidHeader(#[from] reqwest::header::InvalidHeaderValue),

    #[error("NHL API responded with status: {status}")]
    ApiStatus { status: u16 },

    #[error("Invalid date format: {date}. Use YYYY-MM-DD")]
    InvalidDate { date: String },

    #[error("Invalid value for {field}: {value}")]
    InvalidStat { field: &'static str, value: f64 },
}
