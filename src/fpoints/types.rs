use serde::{Deserialize, Serialize};

use crate::error::{FpointsError, Result};


/// Per-unit weights for player cards.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PlayerScoring {
    pub goal: f64,
    pub assist: f64,
    pub hit: f64,
    pub blocked_shot: f64,
}

/// Per-unit weights for team cards.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct TeamScoring {
    pub win: f64,
    pub powerplay_goal: f64,
    pub shorthanded_goal: f64,
    pub goal_against: f64,
    pub shutout: f64,
    pub save: f64,
}

/// Goal (+7), Assist (+4), Hit (+1), Blocked Shot (+1)
pub const PLAYER_SCORING: PlayerScoring = PlayerScoring {
    goal: 7.0,
    assist: 4.0,
    hit: 1.0,
    blocked_shot: 1.0,
};

/// Win (+3), PPG (+1), SHG (+1), GA (-3), Shutout (+5), Save (+1)
pub const TEAM_SCORING: TeamScoring = TeamScoring {
    win: 3.0,
    powerplay_goal: 1.0,
    shorthanded_goal: 1.0,
    goal_against: -3.0,
    shutout: 5.0,
    save: 1.0,
};

/// One player's box-score line for a game or aggregation window.
///
/// Fields are `f64` so averaged or projected lines go through the same formula.
#[derive(Debug, Clone, Copy, Default, PartialEq, Deserialize, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct PlayerStats {
    #[serde(default)]
    pub goals: f64,
    #[serde(default)]
    pub assists: f64,
    #[serde(default)]
    pub hits: f64,
    #[serde(default)]
    pub blocked_shots: f64,
}

impl PlayerStats {
    /// Reject negative or non-finite counts.
    pub fn validate(&self) -> Result<()> {
        check_count("goals", self.goals)?;
        check_count("assists", self.assists)?;
        check_count("hits", self.hits)?;
        check_count("blockedShots", self.blocked_shots)
    }
}

/// Team card stats for a game.
///
/// `wins` and `shutouts` are 0 or 1 for a played game, but a probability in
/// `[0, 1]` is accepted as well so projections share the game formula.
#[derive(Debug, Clone, Copy, Default, PartialEq, Deserialize, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct TeamStats {
    #[serde(default)]
    pub wins: f64,
    #[serde(default)]
    pub powerplay_goals: f64,
    #[serde(default)]
    pub shorthanded_goals: f64,
    #[serde(default)]
    pub goals_against: f64,
    #[serde(default)]
    pub shutouts: f64,
    #[serde(default)]
    pub saves: f64,
}

impl TeamStats {
    /// Reject negative or non-finite counts, and wins or shutouts outside `[0, 1]`.
    pub fn validate(&self) -> Result<()> {
        check_probability("wins", self.wins)?;
        check_count("powerplayGoals", self.powerplay_goals)?;
        check_count("shorthandedGoals", self.shorthanded_goals)?;
        check_count("goalsAgainst", self.goals_against)?;
        check_probability("shutouts", self.shutouts)?;
        check_count("saves", self.saves)
    }
}

/// Per-game player rates used for projections.
#[derive(Debug, Clone, Copy, Default, PartialEq, Deserialize, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct PlayerAverages {
    #[serde(default)]
    pub goals_per_game: f64,
    #[serde(default)]
    pub assists_per_game: f64,
    #[serde(default)]
    pub hits_per_game: f64,
    #[serde(default)]
    pub blocked_shots_per_game: f64,
}

impl PlayerAverages {
    /// Rates may be any real number, but must be finite.
    pub fn validate(&self) -> Result<()> {
        check_finite("goalsPerGame", self.goals_per_game)?;
        check_finite("assistsPerGame", self.assists_per_game)?;
        check_finite("hitsPerGame", self.hits_per_game)?;
        check_finite("blockedShotsPerGame", self.blocked_shots_per_game)
    }
}

impl From<PlayerAverages> for PlayerStats {
    fn from(avg: PlayerAverages) -> Self {
        Self {
            goals: avg.goals_per_game,
            assists: avg.assists_per_game,
            hits: avg.hits_per_game,
            blocked_shots: avg.blocked_shots_per_game,
        }
    }
}

/// Per-game team rates and probabilities used for projections.
#[derive(Debug, Clone, Copy, Default, PartialEq, Deserialize, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct TeamAverages {
    #[serde(default)]
    pub win_probability: f64,
    #[serde(default)]
    pub powerplay_goals_per_game: f64,
    #[serde(default)]
    pub shorthanded_goals_per_game: f64,
    #[serde(default)]
    pub goals_against_per_game: f64,
    #[serde(default)]
    pub shutout_probability: f64,
    #[serde(default)]
    pub saves_per_game: f64,
}

impl TeamAverages {
    /// Rates must be finite; the two probabilities must lie in `[0, 1]`.
    pub fn validate(&self) -> Result<()> {
        check_probability("winProbability", self.win_probability)?;
        check_finite("powerplayGoalsPerGame", self.powerplay_goals_per_game)?;
        check_finite("shorthandedGoalsPerGame", self.shorthanded_goals_per_game)?;
        check_finite("goalsAgainstPerGame", self.goals_against_per_game)?;
        check_probability("shutoutProbability", self.shutout_probability)?;
        check_finite("savesPerGame", self.saves_per_game)
    }
}

impl From<TeamAverages> for TeamStats {
    fn from(avg: TeamAverages) -> Self {
        Self {
            wins: avg.win_probability,
            powerplay_goals: avg.powerplay_goals_per_game,
            shorthanded_goals: avg.shorthanded_goals_per_game,
            goals_against: avg.goals_against_per_game,
            shutouts: avg.shutout_probability,
            saves: avg.saves_per_game,
        }
    }
}

/// Signed contribution of each player category, plus their sum.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct PlayerFPointsBreakdown {
    pub goals: f64,
    pub assists: f64,
    pub hits: f64,
    pub blocked_shots: f64,
    pub total: f64,
}

/// Signed contribution of each team category, plus their sum.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct TeamFPointsBreakdown {
    pub wins: f64,
    pub powerplay_goals: f64,
    pub shorthanded_goals: f64,
    pub goals_against: f64,
    pub shutouts: f64,
    pub saves: f64,
    pub total: f64,
}

/// A lineup as read from a JSON file: any number of players plus one team card.
#[derive(Debug, Clone, Default, PartialEq, Deserialize, Serialize)]
pub struct Lineup {
    #[serde(default)]
    pub players: Vec<PlayerStats>,
    pub team: TeamStats,
}

impl Lineup {
    pub fn validate(&self) -> Result<()> {
        for player in &self.players {
            player.validate()?;
        }
        self.team.validate()
    }
}

fn check_finite(field: &'static str, value: f64) -> Result<()> {
    if value.is_finite() {
        Ok(())
    } else {
        Err(FpointsError::InvalidStat { field, value })
    }
}

fn check_count(field: &'static str, value: f64) -> Result<()> {
    check_finite(field, value)?;
    if value < 0.0 {
        return Err(FpointsError::InvalidStat { field, value });
    }
    Ok(())
}

fn check_probability(field: &'static str, value: f64) -> Result<()> {
    check_finite(field, value)?;
    if !(0.0..=1.0).contains(&value) {
        return Err(FpointsError::InvalidStat { field, value });
    }
    Ok(())
}
