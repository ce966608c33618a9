//! NHL Fantasy Points Library
//!
//! Fantasy-points ("FPoints") scoring for NHL player and team cards, plus a
//! small client for the public NHL web API that supplies the box scores.
//!
//! ## Features
//!
//! - **Scoring Engine**: Totals, per-category breakdowns, and lineup sums
//! - **Projections**: The same formulas applied to per-game averages
//! - **Display Formatting**: Signed one-decimal and whole-point strings
//! - **Schedules**: Games for any date, cached in memory for an hour
//! - **Box Scores**: Team cards and skater lines derived from the score feed
//!
//! ## Quick Start
//!
//! ```rust
//! use nhl_fpoints::fpoints::{calculate_player_fpoints, format_fpoints, PlayerStats};
//!
//! let stats = PlayerStats {
//!     goals: 1.0,
//!     assists: 1.0,
//!     hits: 1.0,
//!     blocked_shots: 1.0,
//! };
//!
//! let points = calculate_player_fpoints(&stats);
//! assert_eq!(points, 13.0);
//! assert_eq!(format_fpoints(points), "+13.0");
//! ```
//!
//! ## Environment Configuration
//!
//! Point the client at a different API host (e.g. a local mirror):
//! ```bash
//! export NHL_API_BASE_URL=http://localhost:8080
//! ```

pub mod cli;
pub mod commands;
pub mod core;
pub mod error;
pub mod fpoints;
pub mod nhl;

// Re-export commonly used types
pub use cli::types::GameDate;
pub use error::{FpointsError, Result};
pub use fpoints::{PlayerStats, TeamStats};

pub const NHL_API_BASE_ENV_VAR: &str = "NHL_API_BASE_URL";
