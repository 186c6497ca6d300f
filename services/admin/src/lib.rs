mod cli;
mod infra;
mod render;

use volunteer_desk::error::AppError;

pub async fn run() -> Result<(), AppError> {
    cli::run().await
}
