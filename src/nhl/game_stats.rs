//! Turn a game's score feed into FPoints inputs.
//!
//! The score endpoint carries final scores, shots on goal, and every goal with
//! its strength and assists. That is enough for full team cards and for the
//! goal/assist part of player cards; hits and blocked shots are not in the
//! feed and stay at zero.

use rayon::prelude::*;
use serde::Serialize;
use std::collections::BTreeMap;

use crate::fpoints::{
    calculate_player_fpoints, calculate_team_fpoints_with_breakdown, PlayerStats,
    TeamFPointsBreakdown, TeamStats,
};
use crate::nhl::types::{Game, GoalStrength};


#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Side {
    Away,
    Home,
}

/// Team card for one side of a game
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct TeamGameFPoints {
    pub abbrev: String,
    pub stats: TeamStats,
    pub breakdown: TeamFPointsBreakdown,
}

/// A skater's scoring-sheet line
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct PlayerLine {
    pub player_id: u64,
    pub name: String,
    pub team_abbrev: String,
    pub stats: PlayerStats,
    pub fpoints: f64,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct GameFPoints {
    pub game_id: u64,
    pub matchup: String,
    pub state: String,
    pub away: TeamGameFPoints,
    pub home: TeamGameFPoints,
    pub players: Vec<PlayerLine>,
}

/// Team card stats for `side`, or `None` before the game has scores.
///
/// Wins and shutouts are only credited once the game is final. Saves are the
/// opponent's shots on goal minus goals against, floored at zero.
///
/// The final score of a shootout includes one extra goal for the winner that
/// is not a shot on goal, so it is taken back out of goals against. A shootout
/// loss is never a shutout.
pub fn team_stats_for(game: &Game, side: Side) -> Option<TeamStats> {
    let (own, opp) = match side {
        Side::Away => (&game.away_team, &game.home_team),
        Side::Home => (&game.home_team, &game.away_team),
    };
    let own_score = own.score?;
    let opp_score = opp.score?;
    let is_final = game.game_state.is_final();
    let shootout = game.decided_by_shootout();
    let won = own_score > opp_score;

    let opp_goals = if shootout && !won {
        opp_score.saturating_sub(1)
    } else {
        opp_score
    };

    let count_goals = |strength: GoalStrength| {
        game.goals
            .iter()
            .filter(|g| !g.is_shootout())
            .filter(|g| g.team_abbrev == own.abbrev && g.strength == strength)
            .count() as f64
    };

    let saves = opp.sog.unwrap_or(0).saturating_sub(opp_goals);

    Some(TeamStats {
        wins: flag(is_final && won),
        powerplay_goals: count_goals(GoalStrength::Pp),
        shorthanded_goals: count_goals(GoalStrength::Sh),
        goals_against: f64::from(opp_goals),
        shutouts: flag(is_final && opp_goals == 0 && (won || !shootout)),
        saves: f64::from(saves),
    })
}

/// Goals and assists per skater, best line first (ties by player id).
///
/// Shootout attempts are skipped.
pub fn player_lines(game: &Game) -> Vec<PlayerLine> {
    let mut lines: BTreeMap<u64, PlayerLine> = BTreeMap::new();

    for goal in game.goals.iter().filter(|g| !g.is_shootout()) {
        entry(&mut lines, goal.player_id, &goal.name.default, &goal.team_abbrev)
            .stats
            .goals += 1.0;
        for assist in &goal.assists {
            entry(&mut lines, assist.player_id, &assist.name.default, &goal.team_abbrev)
                .stats
                .assists += 1.0;
        }
    }

    let mut lines: Vec<PlayerLine> = lines
        .into_values()
        .map(|mut line| {
            line.fpoints = calculate_player_fpoints(&line.stats);
            line
        })
        .collect();

    lines.sort_by(|a, b| {
        b.fpoints
            .total_cmp(&a.fpoints)
            .then(a.player_id.cmp(&b.player_id))
    });
    lines
}

/// Both team cards and the player lines, or `None` before the game has scores.
pub fn game_fpoints(game: &Game) -> Option<GameFPoints> {
    if !game.has_scores() {
        return None;
    }
    let away = team_stats_for(game, Side::Away)?;
    let home = team_stats_for(game, Side::Home)?;

    Some(GameFPoints {
        game_id: game.id,
        matchup: game.matchup(),
        state: game.game_state.label().to_string(),
        away: team_card(&game.away_team.abbrev, away),
        home: team_card(&game.home_team.abbrev, home),
        players: player_lines(game),
    })
}

/// [`game_fpoints`] over a slate, in game order. Games without scores are skipped.
pub fn summarize_games(games: &[Game]) -> Vec<GameFPoints> {
    games.par_iter().filter_map(game_fpoints).collect()
}

fn team_card(abbrev: &str, stats: TeamStats) -> TeamGameFPoints {
    TeamGameFPoints {
        abbrev: abbrev.to_string(),
        stats,
        breakdown: calculate_team_fpoints_with_breakdown(&stats),
    }
}

fn entry<'a>(
    lines: &'a mut BTreeMap<u64, PlayerLine>,
    player_id: u64,
    name: &str,
    team_abbrev: &str,
) -> &'a mut PlayerLine {
    lines.entry(player_id).or_insert_with(|| PlayerLine {
        player_id,
        name: name.to_string(),
        team_abbrev: team_abbrev.to_string(),
        stats: PlayerStats::default(),
        fpoints: 0.0,
    })
}

fn flag(b: bool) -> f64 {
    if b {
        1.0
    } else {
        0.0
    }
}
