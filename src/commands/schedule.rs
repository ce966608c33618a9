//! Schedule and per-game FPoints commands.
//!
//! Fetches the slate for a date from the NHL score endpoint and prints one
//! line per game: matchup, score, status label, venue and start time in the
//! local time zone with a relative countdown.

use chrono::{DateTime, Local, NaiveDate, TimeZone, Utc};
use serde::Serialize;
use std::fmt::Display;

use crate::{
    cli::types::GameDate,
    core::CacheStatus,
    fpoints::{format_fpoints_int, round_fpoints},
    nhl::{
        game_stats::{game_fpoints, summarize_games, GameFPoints, TeamGameFPoints},
        time::{
            format_display_date, format_game_time_with_relative, has_game_started, is_game_soon,
            local_time_zone, SOON_THRESHOLD_MINUTES,
        },
        types::Game,
        NhlClient,
    },
    Result,
};

use super::resolve_date;

/// Options for [`handle_schedule`] and [`handle_game_fpoints`].
#[derive(Debug, Clone, Default)]
pub struct ScheduleParams {
    pub date: Option<GameDate>,
    pub refresh: bool,
    pub as_json: bool,
    pub fpoints: bool,
}

/// Team FPoints for a game with scores
#[derive(Debug, Serialize)]
pub struct MatchupFPoints {
    pub away: f64,
    pub home: f64,
}

/// One game, flattened for JSON output
#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct GameSummary {
    pub id: u64,
    pub matchup: String,
    pub status: String,
    pub venue: String,
    #[serde(rename = "startTimeUTC")]
    pub start_time_utc: DateTime<Utc>,
    pub time: String,
    pub relative: String,
    pub away_score: Option<u32>,
    pub home_score: Option<u32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub fpoints: Option<MatchupFPoints>,
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ScheduleOutput {
    pub date: String,
    pub display_date: String,
    pub games: Vec<GameSummary>,
}

/// Print the games scheduled on a date.
pub async fn handle_schedule(client: &NhlClient, params: ScheduleParams) -> Result<()> {
    let date = resolve_date(params.date);
    let games = fetch_games(client, date, params.refresh).await?;
    let now = Utc::now();

    match local_time_zone() {
        Some(tz) => print_schedule(date.as_naive(), &games, &now, &tz, &params),
        None => print_schedule(date.as_naive(), &games, &now, &Local, &params),
    }
}

fn print_schedule<Tz>(
    date: NaiveDate,
    games: &[Game],
    now: &DateTime<Utc>,
    tz: &Tz,
    params: &ScheduleParams,
) -> Result<()>
where
    Tz: TimeZone,
    Tz::Offset: Display,
{
    if params.as_json {
        let output = schedule_output(date, games, now, tz, params.fpoints);
        println!("{}", serde_json::to_string_pretty(&output)?);
    } else {
        println!("{}", render_schedule(date, games, now, tz, params.fpoints));
    }

    Ok(())
}

/// Print team cards and skater lines for every game with scores on a date.
pub async fn handle_game_fpoints(client: &NhlClient, params: ScheduleParams) -> Result<()> {
    let date = resolve_date(params.date);
    let games = fetch_games(client, date, params.refresh).await?;
    let summaries = summarize_games(&games);

    if params.as_json {
        println!("{}", serde_json::to_string_pretty(&summaries)?);
    } else if summaries.is_empty() {
        println!("No games with scores for {}", date);
    } else {
        let blocks: Vec<String> = summaries.iter().map(render_game_fpoints).collect();
        println!("{}", blocks.join("\n\n"));
    }

    Ok(())
}

async fn fetch_games(client: &NhlClient, date: GameDate, refresh: bool) -> Result<Vec<Game>> {
    let (response, cache_status) = client.fetch_schedule(date.as_naive(), refresh).await?;
    match cache_status {
        CacheStatus::Hit => tracing::info!(%date, "schedule loaded (from cache)"),
        CacheStatus::Miss => tracing::info!(%date, "schedule fetched (cache miss)"),
        CacheStatus::Refreshed => tracing::info!(%date, "schedule fetched (refreshed)"),
    }
    Ok(response.games)
}

pub fn schedule_output<Tz>(
    date: NaiveDate,
    games: &[Game],
    now: &DateTime<Utc>,
    tz: &Tz,
    with_fpoints: bool,
) -> ScheduleOutput
where
    Tz: TimeZone,
    Tz::Offset: Display,
{
    let games = games
        .iter()
        .map(|game| {
            let time = format_game_time_with_relative(&game.start_time_utc, now, tz);
            GameSummary {
                id: game.id,
                matchup: game.matchup(),
                status: game.game_state.label().to_string(),
                venue: game.venue.default.clone(),
                start_time_utc: game.start_time_utc,
                time: time.absolute,
                relative: time.relative,
                away_score: game.away_team.score,
                home_score: game.home_team.score,
                fpoints: if with_fpoints {
                    game_fpoints(game).map(|g| MatchupFPoints {
                        away: g.away.breakdown.total,
                        home: g.home.breakdown.total,
                    })
                } else {
                    None
                },
            }
        })
        .collect();

    ScheduleOutput {
        date: date.format("%Y-%m-%d").to_string(),
        display_date: format_display_date(&date),
        games,
    }
}

/// Header plus one line per game, or a notice for an empty slate.
pub fn render_schedule<Tz>(
    date: NaiveDate,
    games: &[Game],
    now: &DateTime<Utc>,
    tz: &Tz,
    with_fpoints: bool,
) -> String
where
    Tz: TimeZone,
    Tz::Offset: Display,
{
    let mut out = vec![
        format!("Games for {}", format_display_date(&date)),
        date.format("%Y-%m-%d").to_string(),
        String::new(),
    ];

    if games.is_empty() {
        out.push("No games scheduled for this date".to_string());
        return out.join("\n");
    }

    for game in games {
        out.push(render_game(game, now, tz));
        if with_fpoints {
            if let Some(summary) = game_fpoints(game) {
                out.push(format!(
                    "    FPoints: {} {}, {} {}",
                    summary.away.abbrev,
                    int_points(summary.away.breakdown.total),
                    summary.home.abbrev,
                    int_points(summary.home.breakdown.total),
                ));
            }
        }
    }

    out.join("\n")
}

/// `EDM @ CGY   4-2   [Final]  Scotiabank Saddledome  9:00 PM UTC (3h ago)`
pub fn render_game<Tz>(game: &Game, now: &DateTime<Utc>, tz: &Tz) -> String
where
    Tz: TimeZone,
    Tz::Offset: Display,
{
    let score = match (game.away_team.score, game.home_team.score) {
        (Some(away), Some(home)) => format!("{}-{}", away, home),
        _ => "-".to_string(),
    };
    let time = format_game_time_with_relative(&game.start_time_utc, now, tz);

    let mut line = format!(
        "{:<11} {:<5} [{}]  {}  {} ({})",
        game.matchup(),
        score,
        game.game_state.label(),
        game.venue,
        time.absolute,
        time.relative,
    );
    if !has_game_started(&game.start_time_utc, now)
        && is_game_soon(&game.start_time_utc, now, SOON_THRESHOLD_MINUTES)
    {
        line.push_str(" *");
    }
    line
}

pub fn render_game_fpoints(summary: &GameFPoints) -> String {
    let mut out = vec![
        format!("{} [{}]", summary.matchup, summary.state),
        render_team_card(&summary.away),
        render_team_card(&summary.home),
    ];

    if !summary.players.is_empty() {
        out.push("  Skaters:".to_string());
        for line in &summary.players {
            out.push(format!(
                "    {:<22} {:<4} {}G {}A  {}",
                line.name,
                line.team_abbrev,
                line.stats.goals,
                line.stats.assists,
                int_points(line.fpoints),
            ));
        }
    }

    out.join("\n")
}

fn render_team_card(card: &TeamGameFPoints) -> String {
    let b = &card.breakdown;
    format!(
        "  {:<4} {:>5}  (W {}, PPG {}, SHG {}, GA {}, SO {}, SV {})",
        card.abbrev,
        int_points(b.total),
        int_points(b.wins),
        int_points(b.powerplay_goals),
        int_points(b.shorthanded_goals),
        int_points(b.goals_against),
        int_points(b.shutouts),
        int_points(b.saves),
    )
}

fn int_points(points: f64) -> String {
    format_fpoints_int(round_fpoints(points))
}
