//! Integration tests for schedule parsing and box-score FPoints

use nhl_fpoints::{
    fpoints::{calculate_team_fpoints, format_fpoints_int, round_fpoints},
    nhl::{
        game_stats::{team_stats_for, Side},
        summarize_games, GameState, ScoreResponse,
    },
};

fn sample() -> ScoreResponse {
    let raw = std::fs::read_to_string(concat!(
        env!("CARGO_MANIFEST_DIR"),
        "/tests/fixtures/score_2025-01-06.json"
    ))
    .unwrap();
    serde_json::from_str(&raw).unwrap()
}

#[cfg(test)]
mod schedule_tests {
    use super::*;

    #[test]
    fn test_slate_states_and_labels() {
        let response = sample();
        let labels: Vec<&str> = response
            .games
            .iter()
            .map(|g| g.game_state.label())
            .collect();

        assert_eq!(labels, vec!["Final", "Live", "Scheduled"]);
        assert_eq!(response.games[0].game_state, GameState::Official);
    }

    #[test]
    fn test_team_cards_match_engine() {
        let response = sample();
        let game = &response.games[0];

        let away = team_stats_for(game, Side::Away).unwrap();
        let home = team_stats_for(game, Side::Home).unwrap();

        assert_eq!(format_fpoints_int(round_fpoints(calculate_team_fpoints(&away))), "+25");
        assert_eq!(format_fpoints_int(round_fpoints(calculate_team_fpoints(&home))), "+15");
    }

    #[test]
    fn test_summaries_cover_started_games() {
        let summaries = summarize_games(&sample().games);

        assert_eq!(summaries.len(), 2);
        assert_eq!(summaries[0].matchup, "EDM @ CGY");
        assert_eq!(summaries[1].matchup, "TOR @ MTL");
        assert_eq!(summaries[1].state, "Live");

        // Every skater line's points come from goals and assists only
        for summary in &summaries {
            for line in &summary.players {
                assert_eq!(line.stats.hits, 0.0);
                assert_eq!(line.stats.blocked_shots, 0.0);
                assert_eq!(line.fpoints, line.stats.goals * 7.0 + line.stats.assists * 4.0);
            }
        }
    }

    #[test]
    fn test_goal_totals_match_scores() {
        let response = sample();
        for summary in summarize_games(&response.games) {
            let game = response
                .games
                .iter()
                .find(|g| g.id == summary.game_id)
                .unwrap();

            let away_goals: f64 = summary
                .players
                .iter()
                .filter(|l| l.team_abbrev == game.away_team.abbrev)
                .map(|l| l.stats.goals)
                .sum();
            assert_eq!(away_goals, f64::from(game.away_team.score.unwrap()));
            assert_eq!(summary.home.stats.goals_against, away_goals);
        }
    }
}
