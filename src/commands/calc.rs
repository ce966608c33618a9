//! Offline FPoints calculations from user-supplied stats.
//!
//! Every handler validates its input first, then prints either text lines
//! (using the engine's `format_fpoints`) or pretty JSON.

use serde::Serialize;
use std::path::Path;

use crate::{
    fpoints::{
        calculate_lineup_fpoints, calculate_player_fpoints, calculate_player_fpoints_with_breakdown,
        calculate_team_fpoints, calculate_team_fpoints_with_breakdown, estimate_player_fpoints,
        estimate_team_fpoints, format_fpoints, Lineup, PlayerAverages, PlayerFPointsBreakdown,
        PlayerStats, TeamAverages, TeamFPointsBreakdown, TeamStats,
    },
    Result,
};

/// Scalar result for JSON output
#[derive(Debug, Serialize)]
pub struct FPointsTotal {
    pub total: f64,
}

/// Lineup result for JSON output
#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct LineupFPoints {
    pub players: Vec<f64>,
    pub team: f64,
    pub total: f64,
}

pub fn handle_player_fpoints(stats: PlayerStats, breakdown: bool, as_json: bool) -> Result<()> {
    stats.validate()?;

    if breakdown {
        let b = calculate_player_fpoints_with_breakdown(&stats);
        if as_json {
            println!("{}", serde_json::to_string_pretty(&b)?);
        } else {
            println!("{}", render_player_breakdown(&b));
        }
    } else {
        print_total(calculate_player_fpoints(&stats), as_json)?;
    }

    Ok(())
}

pub fn handle_team_fpoints(stats: TeamStats, breakdown: bool, as_json: bool) -> Result<()> {
    stats.validate()?;

    if breakdown {
        let b = calculate_team_fpoints_with_breakdown(&stats);
        if as_json {
            println!("{}", serde_json::to_string_pretty(&b)?);
        } else {
            println!("{}", render_team_breakdown(&b));
        }
    } else {
        print_total(calculate_team_fpoints(&stats), as_json)?;
    }

    Ok(())
}

/// Read and validate a lineup JSON file.
pub fn load_lineup(path: &Path) -> Result<Lineup> {
    let contents = std::fs::read_to_string(path)?;
    let lineup: Lineup = serde_json::from_str(&contents)?;
    lineup.validate()?;
    tracing::debug!(path = %path.display(), players = lineup.players.len(), "lineup loaded");
    Ok(lineup)
}

pub fn lineup_fpoints(lineup: &Lineup) -> LineupFPoints {
    LineupFPoints {
        players: lineup.players.iter().map(calculate_player_fpoints).collect(),
        team: calculate_team_fpoints(&lineup.team),
        total: calculate_lineup_fpoints(&lineup.players, &lineup.team),
    }
}

pub fn handle_lineup_fpoints(path: &Path, as_json: bool) -> Result<()> {
    let lineup = load_lineup(path)?;
    let result = lineup_fpoints(&lineup);

    if as_json {
        println!("{}", serde_json::to_string_pretty(&result)?);
    } else {
        println!("{}", render_lineup(&result));
    }

    Ok(())
}

pub fn handle_estimate_player(averages: PlayerAverages, as_json: bool) -> Result<()> {
    averages.validate()?;
    print_total(estimate_player_fpoints(&averages), as_json)
}

pub fn handle_estimate_team(averages: TeamAverages, as_json: bool) -> Result<()> {
    averages.validate()?;
    print_total(estimate_team_fpoints(&averages), as_json)
}

fn print_total(total: f64, as_json: bool) -> Result<()> {
    if as_json {
        println!("{}", serde_json::to_string_pretty(&FPointsTotal { total })?);
    } else {
        println!("{}", format_fpoints(total));
    }
    Ok(())
}

pub fn render_player_breakdown(b: &PlayerFPointsBreakdown) -> String {
    [
        ("Goals", b.goals),
        ("Assists", b.assists),
        ("Hits", b.hits),
        ("Blocked shots", b.blocked_shots),
        ("Total", b.total),
    ]
    .iter()
    .map(|(label, points)| format!("{:<18}{:>8}", label, format_fpoints(*points)))
    .collect::<Vec<_>>()
    .join("\n")
}

pub fn render_team_breakdown(b: &TeamFPointsBreakdown) -> String {
    [
        ("Wins", b.wins),
        ("Powerplay goals", b.powerplay_goals),
        ("Shorthanded goals", b.shorthanded_goals),
        ("Goals against", b.goals_against),
        ("Shutouts", b.shutouts),
        ("Saves", b.saves),
        ("Total", b.total),
    ]
    .iter()
    .map(|(label, points)| format!("{:<18}{:>8}", label, format_fpoints(*points)))
    .collect::<Vec<_>>()
    .join("\n")
}

pub fn render_lineup(result: &LineupFPoints) -> String {
    let mut lines: Vec<String> = result
        .players
        .iter()
        .enumerate()
        .map(|(i, points)| {
            let label = format!("Player {}", i + 1);
            format!("{:<18}{:>8}", label, format_fpoints(*points))
        })
        .collect();
    lines.push(format!("{:<18}{:>8}", "Team", format_fpoints(result.team)));
    lines.push(format!("{:<18}{:>8}", "Total", format_fpoints(result.total)));
    lines.join("\n")
}
