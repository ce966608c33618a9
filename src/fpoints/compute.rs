use crate::fpoints::types::{
    PlayerAverages, PlayerFPointsBreakdown, PlayerStats, TeamAverages, TeamFPointsBreakdown,
    TeamStats, PLAYER_SCORING, TEAM_SCORING,
};


/// Weight each player category and sum the contributions.
///
/// This is the only place player weights are applied; the totals-only
/// functions reduce over it.
pub fn calculate_player_fpoints_with_breakdown(stats: &PlayerStats) -> PlayerFPointsBreakdown {
    let goals = stats.goals * PLAYER_SCORING.goal;
    let assists = stats.assists * PLAYER_SCORING.assist;
    let hits = stats.hits * PLAYER_SCORING.hit;
    let blocked_shots = stats.blocked_shots * PLAYER_SCORING.blocked_shot;

    PlayerFPointsBreakdown {
        goals,
        assists,
        hits,
        blocked_shots,
        total: goals + assists + hits + blocked_shots,
    }
}

/// Fantasy points for one player line.
pub fn calculate_player_fpoints(stats: &PlayerStats) -> f64 {
    calculate_player_fpoints_with_breakdown(stats).total
}

/// Weight each team category and sum the contributions. Goals against count negatively.
pub fn calculate_team_fpoints_with_breakdown(stats: &TeamStats) -> TeamFPointsBreakdown {
    let wins = stats.wins * TEAM_SCORING.win;
    let powerplay_goals = stats.powerplay_goals * TEAM_SCORING.powerplay_goal;
    let shorthanded_goals = stats.shorthanded_goals * TEAM_SCORING.shorthanded_goal;
    let goals_against = stats.goals_against * TEAM_SCORING.goal_against;
    let shutouts = stats.shutouts * TEAM_SCORING.shutout;
    let saves = stats.saves * TEAM_SCORING.save;

    TeamFPointsBreakdown {
        wins,
        powerplay_goals,
        shorthanded_goals,
        goals_against,
        shutouts,
        saves,
        total: wins + powerplay_goals + shorthanded_goals + goals_against + shutouts + saves,
    }
}

/// Fantasy points for one team card.
pub fn calculate_team_fpoints(stats: &TeamStats) -> f64 {
    calculate_team_fpoints_with_breakdown(stats).total
}

/// Every player's points plus the team card. An empty lineup scores the team alone.
pub fn calculate_lineup_fpoints(player_stats: &[PlayerStats], team_stats: &TeamStats) -> f64 {
    let player_total: f64 = player_stats.iter().map(calculate_player_fpoints).sum();
    player_total + calculate_team_fpoints(team_stats)
}

/// Project a player's points from per-game rates.
pub fn estimate_player_fpoints(averages: &PlayerAverages) -> f64 {
    calculate_player_fpoints(&PlayerStats::from(*averages))
}

/// Project a team's points from per-game rates and win/shutout probabilities.
pub fn estimate_team_fpoints(averages: &TeamAverages) -> f64 {
    calculate_team_fpoints(&TeamStats::from(*averages))
}
