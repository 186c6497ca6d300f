use clap::{Parser, Subcommand};
use tracing::info;
use volunteer_desk::config::AppConfig;
use volunteer_desk::error::AppError;
use volunteer_desk::telemetry;
use volunteer_desk::workflows::registration::{ResolveError, VolunteerId};

use crate::infra::{build_desk, AdminDesk, RefreshFlag};
use crate::render;

#[derive(Parser, Debug)]
#[command(
    name = "Volunteer Registration Desk",
    about = "Review volunteer applications and advance them through the registration pipeline",
    version
)]
struct Cli {
    #[command(subcommand)]
    command: Option<Command>,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Show the three pipeline collections (default command)
    Board,
    /// Resolve a single record and show its details and available action
    Show { id: u64 },
    /// Verify a new application, moving it to the waiting list
    Verify { id: u64 },
    /// Approve a waiting-list entry, moving it to the mailing collection
    Approve { id: u64 },
    /// Complete the whole mailing collection, ending registration
    CompleteAll,
    /// Print the waiting-list interview schedule
    Schedule,
}

pub(crate) async fn run() -> Result<(), AppError> {
    let cli = Cli::parse();
    let config = AppConfig::load()?;
    telemetry::init(&config.telemetry)?;

    let (refresh, desk) = build_desk(&config)?;
    info!(?config.environment, base_url = %config.api.base_url, "registration desk ready");

    let command = cli.command.unwrap_or(Command::Board);

    match command {
        Command::Board => {
            let board = desk.board().await?;
            render::print_board(&board);
            Ok(())
        }
        Command::Show { id } => show(&desk, VolunteerId(id)).await,
        Command::Verify { id } => {
            let outcome = desk.verify(VolunteerId(id)).await?;
            println!(
                "record {} moved {} -> {}",
                outcome.id, outcome.from, outcome.to
            );
            reload_if_requested(&desk, refresh.as_ref()).await
        }
        Command::Approve { id } => {
            let outcome = desk.approve(VolunteerId(id)).await?;
            println!(
                "record {} moved {} -> {}",
                outcome.id, outcome.from, outcome.to
            );
            reload_if_requested(&desk, refresh.as_ref()).await
        }
        Command::CompleteAll => {
            let report = desk.complete_all().await?;
            render::print_report(&report);
            reload_if_requested(&desk, refresh.as_ref()).await
        }
        Command::Schedule => {
            let rows = desk.schedule().await?;
            render::print_schedule(&rows);
            Ok(())
        }
    }
}

async fn show(desk: &AdminDesk, id: VolunteerId) -> Result<(), AppError> {
    match desk.resolve(id).await {
        Ok(resolved) => {
            render::print_detail(&resolved);
            Ok(())
        }
        // Definitive absence is an answer for the operator, not a failure.
        Err(ResolveError::NotFound) => {
            println!("record {id} not found in any collection");
            Ok(())
        }
        Err(err) => Err(err.into()),
    }
}

async fn reload_if_requested(desk: &AdminDesk, refresh: &RefreshFlag) -> Result<(), AppError> {
    if refresh.take() {
        let board = desk.board().await?;
        render::print_board(&board);
    }
    Ok(())
}
