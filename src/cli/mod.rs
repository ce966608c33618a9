//! CLI argument definitions and parsing.

pub mod types;

use clap::{Args, Parser, Subcommand};
use std::path::PathBuf;
use types::GameDate;

use crate::fpoints::{PlayerAverages, PlayerStats, TeamAverages, TeamStats};

/// Options shared by the schedule commands
#[derive(Debug, Args)]
pub struct ScheduleArgs {
    /// Schedule date as YYYY-MM-DD (defaults to today).
    #[clap(long, short)]
    pub date: Option<GameDate>,

    /// Ignore the cached schedule and fetch again.
    #[clap(long)]
    pub refresh: bool,

    /// Output results as JSON instead of text lines.
    #[clap(long)]
    pub json: bool,
}

/// One player's box-score line.
#[derive(Debug, Args)]
pub struct PlayerStatArgs {
    #[clap(long, short = 'g', default_value_t = 0.0)]
    pub goals: f64,

    #[clap(long, short = 'a', default_value_t = 0.0)]
    pub assists: f64,

    #[clap(long, default_value_t = 0.0)]
    pub hits: f64,

    #[clap(long, default_value_t = 0.0)]
    pub blocked_shots: f64,
}

impl From<PlayerStatArgs> for PlayerStats {
    fn from(a: PlayerStatArgs) -> Self {
        Self {
            goals: a.goals,
            assists: a.assists,
            hits: a.hits,
            blocked_shots: a.blocked_shots,
        }
    }
}

/// One team card.
#[derive(Debug, Args)]
pub struct TeamStatArgs {
    /// 1 for a win, 0 otherwise.
    #[clap(long, default_value_t = 0.0)]
    pub wins: f64,

    #[clap(long, default_value_t = 0.0)]
    pub powerplay_goals: f64,

    #[clap(long, default_value_t = 0.0)]
    pub shorthanded_goals: f64,

    #[clap(long, default_value_t = 0.0)]
    pub goals_against: f64,

    /// 1 for a shutout, 0 otherwise.
    #[clap(long, default_value_t = 0.0)]
    pub shutouts: f64,

    #[clap(long, default_value_t = 0.0)]
    pub saves: f64,
}

impl From<TeamStatArgs> for TeamStats {
    fn from(a: TeamStatArgs) -> Self {
        Self {
            wins: a.wins,
            powerplay_goals: a.powerplay_goals,
            shorthanded_goals: a.shorthanded_goals,
            goals_against: a.goals_against,
            shutouts: a.shutouts,
            saves: a.saves,
        }
    }
}

/// Per-game player rates.
#[derive(Debug, Args)]
pub struct PlayerAverageArgs {
    #[clap(long, default_value_t = 0.0, allow_negative_numbers = true)]
    pub goals_per_game: f64,

    #[clap(long, default_value_t = 0.0, allow_negative_numbers = true)]
    pub assists_per_game: f64,

    #[clap(long, default_value_t = 0.0, allow_negative_numbers = true)]
    pub hits_per_game: f64,

    #[clap(long, default_value_t = 0.0, allow_negative_numbers = true)]
    pub blocked_shots_per_game: f64,
}

impl From<PlayerAverageArgs> for PlayerAverages {
    fn from(a: PlayerAverageArgs) -> Self {
        Self {
            goals_per_game: a.goals_per_game,
            assists_per_game: a.assists_per_game,
            hits_per_game: a.hits_per_game,
            blocked_shots_per_game: a.blocked_shots_per_game,
        }
    }
}

/// Per-game team rates and probabilities.
#[derive(Debug, Args)]
pub struct TeamAverageArgs {
    /// Chance of winning, 0.0 to 1.0.
    #[clap(long, default_value_t = 0.0, allow_negative_numbers = true)]
    pub win_probability: f64,

    #[clap(long, default_value_t = 0.0, allow_negative_numbers = true)]
    pub powerplay_goals_per_game: f64,

    #[clap(long, default_value_t = 0.0, allow_negative_numbers = true)]
    pub shorthanded_goals_per_game: f64,

    #[clap(long, default_value_t = 0.0, allow_negative_numbers = true)]
    pub goals_against_per_game: f64,

    /// Chance of a shutout, 0.0 to 1.0.
    #[clap(long, default_value_t = 0.0, allow_negative_numbers = true)]
    pub shutout_probability: f64,

    #[clap(long, default_value_t = 0.0, allow_negative_numbers = true)]
    pub saves_per_game: f64,
}

impl From<TeamAverageArgs> for TeamAverages {
    fn from(a: TeamAverageArgs) -> Self {
        Self {
            win_probability: a.win_probability,
            powerplay_goals_per_game: a.powerplay_goals_per_game,
            shorthanded_goals_per_game: a.shorthanded_goals_per_game,
            goals_against_per_game: a.goals_against_per_game,
            shutout_probability: a.shutout_probability,
            saves_per_game: a.saves_per_game,
        }
    }
}

#[derive(Debug, Subcommand)]
pub enum GetCmd {
    /// Show the games scheduled for a date.
    ///
    /// Queries `/v1/score/{date}`; responses are cached in memory for an hour.
    Schedule {
        #[clap(flatten)]
        args: ScheduleArgs,

        /// Add team FPoints for games that have scores.
        #[clap(long)]
        fpoints: bool,
    },

    /// Team cards and skater lines for every game with scores on a date.
    GameFpoints {
        #[clap(flatten)]
        args: ScheduleArgs,
    },
}

#[derive(Debug, Subcommand)]
pub enum CalcCmd {
    /// FPoints for one player's box-score line.
    Player {
        #[clap(flatten)]
        stats: PlayerStatArgs,

        /// Show the per-category contributions.
        #[clap(long)]
        breakdown: bool,

        /// Output results as JSON instead of text lines.
        #[clap(long)]
        json: bool,
    },

    /// FPoints for one team card.
    Team {
        #[clap(flatten)]
        stats: TeamStatArgs,

        /// Show the per-category contributions.
        #[clap(long)]
        breakdown: bool,

        /// Output results as JSON instead of text lines.
        #[clap(long)]
        json: bool,
    },

    /// Total FPoints for a lineup file: `{"players": [...], "team": {...}}`.
    Lineup {
        /// Path to the lineup JSON file.
        #[clap(long, short)]
        file: PathBuf,

        /// Output results as JSON instead of text lines.
        #[clap(long)]
        json: bool,
    },

    /// Projected player FPoints from per-game averages.
    EstimatePlayer {
        #[clap(flatten)]
        averages: PlayerAverageArgs,

        /// Output results as JSON instead of text lines.
        #[clap(long)]
        json: bool,
    },

    /// Projected team FPoints from per-game averages and probabilities.
    EstimateTeam {
        #[clap(flatten)]
        averages: TeamAverageArgs,

        /// Output results as JSON instead of text lines.
        #[clap(long)]
        json: bool,
    },
}

#[derive(Debug, Parser)]
#[clap(name = "nhl-fpoints", about = "NHL schedules and fantasy points")]
pub struct NhlFpoints {
    #[clap(subcommand)]
    pub command: Commands,
}

#[derive(Debug, Subcommand)]
pub enum Commands {
    /// Get data from the NHL web API
    Get {
        #[clap(subcommand)]
        cmd: GetCmd,
    },

    /// Calculate FPoints from stats you provide
    Calc {
        #[clap(subcommand)]
        cmd: CalcCmd,
    },
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_calc_player() {
        let app = NhlFpoints::try_parse_from([
            "nhl-fpoints", "calc", "player", "--goals", "1", "--assists", "2", "--hits", "3",
            "--breakdown",
        ])
        .unwrap();

        match app.command {
            Commands::Calc {
                cmd:
                    CalcCmd::Player {
                        stats,
                        breakdown,
                        json,
                    },
            } => {
                let stats = PlayerStats::from(stats);
                assert_eq!(stats.goals, 1.0);
                assert_eq!(stats.assists, 2.0);
                assert_eq!(stats.hits, 3.0);
                assert_eq!(stats.blocked_shots, 0.0);
                assert!(breakdown);
                assert!(!json);
            }
            other => panic!("Unexpected command: {:?}", other),
        }
    }

    #[test]
    fn test_parse_calc_team_long_flags() {
        let app = NhlFpoints::try_parse_from([
            "nhl-fpoints",
            "calc",
            "team",
            "--wins",
            "1",
            "--powerplay-goals",
            "1",
            "--goals-against",
            "2",
            "--saves",
            "20",
        ])
        .unwrap();

        match app.command {
            Commands::Calc {
                cmd: CalcCmd::Team { stats, .. },
            } => {
                let stats = TeamStats::from(stats);
                assert_eq!(stats.wins, 1.0);
                assert_eq!(stats.powerplay_goals, 1.0);
                assert_eq!(stats.goals_against, 2.0);
                assert_eq!(stats.saves, 20.0);
                assert_eq!(stats.shutouts, 0.0);
            }
            other => panic!("Unexpected command: {:?}", other),
        }
    }

    #[test]
    fn test_parse_estimate_team_accepts_fractions() {
        let app = NhlFpoints::try_parse_from([
            "nhl-fpoints",
            "calc",
            "estimate-team",
            "--win-probability",
            "0.55",
            "--shutout-probability",
            "0.05",
            "--json",
        ])
        .unwrap();

        match app.command {
            Commands::Calc {
                cmd: CalcCmd::EstimateTeam { averages, json },
            } => {
                let averages = TeamAverages::from(averages);
                assert_eq!(averages.win_probability, 0.55);
                assert_eq!(averages.shutout_probability, 0.05);
                assert!(json);
            }
            other => panic!("Unexpected command: {:?}", other),
        }
    }

    #[test]
    fn test_parse_schedule_with_date() {
        let app = NhlFpoints::try_parse_from([
            "nhl-fpoints",
            "get",
            "schedule",
            "--date",
            "2025-01-06",
            "--fpoints",
        ])
        .unwrap();

        match app.command {
            Commands::Get {
                cmd: GetCmd::Schedule { args, fpoints },
            } => {
                assert_eq!(args.date.unwrap().to_string(), "2025-01-06");
                assert!(!args.refresh);
                assert!(fpoints);
            }
            other => panic!("Unexpected command: {:?}", other),
        }
    }

    #[test]
    fn test_parse_schedule_rejects_bad_date() {
        let result =
            NhlFpoints::try_parse_from(["nhl-fpoints", "get", "schedule", "--date", "01/06/2025"]);
        assert!(result.is_err());
    }

    #[test]
    fn test_parse_lineup_requires_file() {
        assert!(NhlFpoints::try_parse_from(["nhl-fpoints", "calc", "lineup"]).is_err());

        let app =
            NhlFpoints::try_parse_from(["nhl-fpoints", "calc", "lineup", "-f", "lineup.json"])
                .unwrap();
        match app.command {
            Commands::Calc {
                cmd: CalcCmd::Lineup { file, json },
            } => {
                assert_eq!(file, PathBuf::from("lineup.json"));
                assert!(!json);
            }
            other => panic!("Unexpected command: {:?}", other),
        }
    }

    #[test]
    fn test_cli_definition_is_consistent() {
        use clap::CommandFactory;
        NhlFpoints::command().debug_assert();
    }
}
