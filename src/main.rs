use clap::Parser;
use colored::Colorize;

#[tokio::main]
async fn main() {
    let cli = ovkinfo::cli::Cli::parse();

    if let Err(err) = ovkinfo::run(cli).await {
        eprintln!("{}", format!("error: {err}").red());
        std::process::exit(1);
    }
}
