//! Entry point: parse CLI and dispatch to command handlers.

use clap::Parser;
use nhl_fpoints::{
    cli::{CalcCmd, Commands, GetCmd, NhlFpoints},
    commands::{
        calc::{
            handle_estimate_player, handle_estimate_team, handle_lineup_fpoints,
            handle_player_fpoints, handle_team_fpoints,
        },
        schedule::{handle_game_fpoints, handle_schedule, ScheduleParams},
    },
    nhl::NhlClient,
    Result,
};
use tracing_subscriber::EnvFilter;

/// Run the CLI.
#[tokio::main]
async fn main() -> Result<()> {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn"));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();

    let app = NhlFpoints::parse();

    match app.command {
        Commands::Get { cmd } => {
            let client = NhlClient::from_env()?;
            match cmd {
                GetCmd::Schedule { args, fpoints } => {
                    handle_schedule(
                        &client,
                        ScheduleParams {
                            date: args.date,
                            refresh: args.refresh,
                            as_json: args.json,
                            fpoints,
                        },
                    )
                    .await?
                }

                GetCmd::GameFpoints { args } => {
                    handle_game_fpoints(
                        &client,
                        ScheduleParams {
                            date: args.date,
                            refresh: args.refresh,
                            as_json: args.json,
                            fpoints: true,
                        },
                    )
                    .await?
                }
            }
        }

        Commands::Calc { cmd } => match cmd {
            CalcCmd::Player {
                stats,
                breakdown,
                json,
            } => handle_player_fpoints(stats.into(), breakdown, json)?,

            CalcCmd::Team {
                stats,
                breakdown,
                json,
            } => handle_team_fpoints(stats.into(), breakdown, json)?,

            CalcCmd::Lineup { file, json } => handle_lineup_fpoints(&file, json)?,

            CalcCmd::EstimatePlayer { averages, json } => {
                handle_estimate_player(averages.into(), json)?
            }

            CalcCmd::EstimateTeam { averages, json } => {
                handle_estimate_team(averages.into(), json)?
            }
        },
    }

    Ok(())
}
