use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::fmt;


/// Localized text as the NHL API sends it: `{"default": "..."}`
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize, Serialize)]
pub struct LocalizedName {
    #[serde(default)]
    pub default: String,
}

impl fmt::Display for LocalizedName {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.default)
    }
}

/// Game lifecycle as reported by `gameState`.
///
/// Unrecognized states are preserved verbatim.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize, Serialize)]
#[serde(from = "String", into = "String")]
pub enum GameState {
    Future,
    Pregame,
    Live,
    Critical,
    Final,
    Official,
    Other(String),
}

impl From<String> for GameState {
    fn from(s: String) -> Self {
        match s.as_str() {
            "FUT" => GameState::Future,
            "PRE" => GameState::Pregame,
            "LIVE" => GameState::Live,
            "CRIT" => GameState::Critical,
            "FINAL" => GameState::Final,
            "OFF" => GameState::Official,
            _ => GameState::Other(s),
        }
    }
}

impl From<GameState> for String {
    fn from(state: GameState) -> Self {
        state.code().to_string()
    }
}

impl GameState {
    /// The raw `gameState` code.
    pub fn code(&self) -> &str {
        match self {
            GameState::Future => "FUT",
            GameState::Pregame => "PRE",
            GameState::Live => "LIVE",
            GameState::Critical => "CRIT",
            GameState::Final => "FINAL",
            GameState::Official => "OFF",
            GameState::Other(s) => s,
        }
    }

    /// Human-readable status. Only `LIVE` reads as "Live"; `CRIT` and `PRE`
    /// fall through to their raw codes.
    pub fn label(&self) -> &str {
        match self {
            GameState::Live => "Live",
            GameState::Final | GameState::Official => "Final",
            GameState::Future => "Scheduled",
            other => other.code(),
        }
    }

    pub fn is_final(&self) -> bool {
        matches!(self, GameState::Final | GameState::Official)
    }
}

impl fmt::Display for GameState {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// One side of a matchup
#[derive(Debug, Clone, PartialEq, Deserialize, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Team {
    #[serde(default)]
    pub id: u32,
    pub abbrev: String,
    #[serde(default)]
    pub name: LocalizedName,
    /// Absent until the game starts
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub score: Option<u32>,
    /// Shots on goal
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub sog: Option<u32>,
    #[serde(default)]
    pub logo: String,
}

/// How a period (or a finished game) was played out
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Deserialize, Serialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum PeriodType {
    #[default]
    Reg,
    Ot,
    So,
    #[serde(other)]
    Unknown,
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Deserialize, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct PeriodDescriptor {
    #[serde(default)]
    pub number: u8,
    #[serde(default)]
    pub period_type: PeriodType,
}

/// Present once a game is over
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Deserialize, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct GameOutcome {
    #[serde(default)]
    pub last_period_type: PeriodType,
}

/// Skater situation when a goal was scored
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Deserialize, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum GoalStrength {
    #[default]
    Ev,
    Pp,
    Sh,
    #[serde(other)]
    Unknown,
}

#[derive(Debug, Clone, PartialEq, Eq, Deserialize, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Assist {
    pub player_id: u64,
    #[serde(default)]
    pub name: LocalizedName,
}

#[derive(Debug, Clone, PartialEq, Eq, Deserialize, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Goal {
    pub team_abbrev: String,
    pub player_id: u64,
    #[serde(default)]
    pub name: LocalizedName,
    #[serde(default)]
    pub strength: GoalStrength,
    #[serde(default)]
    pub assists: Vec<Assist>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub period_descriptor: Option<PeriodDescriptor>,
}

impl Goal {
    /// Shootout attempts are listed with the goals but are not real goals.
    pub fn is_shootout(&self) -> bool {
        self.period_descriptor
            .is_some_and(|p| p.period_type == PeriodType::So)
    }
}

#[derive(Debug, Clone, PartialEq, Deserialize, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Game {
    pub id: u64,
    #[serde(default)]
    pub season: u32,
    #[serde(default)]
    pub game_type: u8,
    #[serde(default)]
    pub game_date: String,
    #[serde(default)]
    pub venue: LocalizedName,
    #[serde(rename = "startTimeUTC")]
    pub start_time_utc: DateTime<Utc>,
    #[serde(rename = "easternUTCOffset", default)]
    pub eastern_utc_offset: String,
    #[serde(rename = "venueUTCOffset", default)]
    pub venue_utc_offset: String,
    pub game_state: GameState,
    #[serde(default)]
    pub game_schedule_state: String,
    pub away_team: Team,
    pub home_team: Team,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub game_outcome: Option<GameOutcome>,
    #[serde(default)]
    pub goals: Vec<Goal>,
}

impl Game {
    /// "AWY @ HOM"
    pub fn matchup(&self) -> String {
        format!("{} @ {}", self.away_team.abbrev, self.home_team.abbrev)
    }

    /// Both scores are present once the game has started.
    pub fn has_scores(&self) -> bool {
        self.away_team.score.is_some() && self.home_team.score.is_some()
    }

    /// A final score settled in a shootout counts the deciding goal for the winner.
    pub fn decided_by_shootout(&self) -> bool {
        self.game_state.is_final()
            && self
                .game_outcome
                .is_some_and(|o| o.last_period_type == PeriodType::So)
    }
}

/// Payload of `/v1/score/{date}`
#[derive(Debug, Clone, Default, PartialEq, Deserialize, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ScoreResponse {
    #[serde(default)]
    pub current_date: Option<String>,
    #[serde(default)]
    pub games: Vec<Game>,
}
