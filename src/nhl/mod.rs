//! NHL web API data source
//!
//! - `types`: the subset of `/v1/score/{date}` we read
//! - `client`: async fetching with an hourly in-memory cache
//! - `game_stats`: box scores turned into FPoints inputs
//! - `time`: game time and date formatting

pub mod client;
pub mod game_stats;
pub mod time;
pub mod types;

pub use client::NhlClient;
pub use game_stats::{game_fpoints, summarize_games, GameFPoints, PlayerLine, Side};
pub use types::{Game, GameState, ScoreResponse, Team};
