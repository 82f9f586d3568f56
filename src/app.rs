use crate::cli::Cli;
use crate::commands;
use crate::context::AppContext;
use crate::error::AppResult;

pub async fn run(cli: Cli) -> AppResult<()> {
    let Cli {
        profile,
        json,
        verbose,
        identifier,
    } = cli;

    let ctx = AppContext::bootstrap(profile, json, verbose)?;

    commands::info::run(&ctx, identifier).await
}
