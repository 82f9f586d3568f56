use colored::Colorize;
use tokio::io::{AsyncBufReadExt, BufReader};
use tokio::signal;

use crate::context::AppContext;
use crate::error::{AppError, AppResult};
use crate::extract;
use crate::output::{OutputMode, text};

pub async fn run(ctx: &AppContext, identifier: Option<String>) -> AppResult<()> {
    let input = match identifier {
        Some(value) => value,
        None => prompt_identifier().await?,
    };

    let candidate = extract::extract_identifier(&input).ok_or_else(|| {
        AppError::InvalidInput("expected a numeric id, screen name, or profile url".to_string())
    })?;
    ctx.output
        .debug(&format!("extracted identifier: {candidate}"));

    let user_id = if extract::is_numeric(&candidate) {
        candidate
    } else {
        let resolved = ctx.client.resolve_screen_name(&candidate).await?;
        ctx.output
            .debug(&format!("resolved `{candidate}` to id {resolved}"));
        resolved.to_string()
    };

    let record = ctx.client.get_user(&user_id).await?;

    if ctx.output.mode() == OutputMode::Text {
        return text::print_profile(&record, &ctx.client.profile_link(record.id));
    }

    let summary = format!("{} (id {})", record.display_name(), record.id);
    ctx.output.emit(&summary, &record)
}

async fn prompt_identifier() -> AppResult<String> {
    println!("{}", "OpenVK profile lookup".cyan());
    println!("Enter a profile url, screen name, or numeric id:");

    let mut line = String::new();
    let mut reader = BufReader::new(tokio::io::stdin());

    tokio::select! {
        _ = signal::ctrl_c() => {
            println!();
            println!("interrupted, exiting");
            std::process::exit(0);
        }
        read = reader.read_line(&mut line) => {
            if read? == 0 {
                return Err(AppError::InvalidInput("no input provided".to_string()));
            }
        }
    }

    Ok(line.trim().to_string())
}
