mod cli;
mod demo;
mod infra;

use care_match::error::AppError;

pub fn run() -> Result<(), AppError> {
    cli::run()
}
