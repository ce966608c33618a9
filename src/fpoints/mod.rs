//! FPoints scoring engine
//!
//! Pure functions mapping box-score statistics to fantasy points:
//! - `types`: stat inputs, breakdowns, and the fixed scoring tables
//! - `compute`: totals, breakdowns, lineups, and projections
//! - `format`: display strings for point values
//!
//! Player cards score Goal (+7), Assist (+4), Hit (+1), Blocked Shot (+1).
//! Team cards score Win (+3), PPG (+1), SHG (+1), GA (-3), Shutout (+5), Save (+1).

pub mod compute;
pub mod format;
pub mod types;

pub use compute::{
    calculate_lineup_fpoints, calculate_player_fpoints, calculate_player_fpoints_with_breakdown,
    calculate_team_fpoints, calculate_team_fpoints_with_breakdown, estimate_player_fpoints,
    estimate_team_fpoints,
};
pub use format::{format_fpoints, format_fpoints_int, round_fpoints};
pub use types::{
    Lineup, PlayerAverages, PlayerFPointsBreakdown, PlayerScoring, PlayerStats, TeamAverages,
    TeamFPointsBreakdown, TeamScoring, TeamStats, PLAYER_SCORING, TEAM_SCORING,
};
