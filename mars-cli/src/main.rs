//! Mars CLI - print the atmosphere composition and InSight weather from a terminal.

use clap::Parser;

#[derive(Parser)]
#[command(
    name = "mars-cli",
    version,
    about = "Martian atmosphere and weather dashboards, in the terminal"
)]
struct Cli {
    #[command(subcommand)]
    command: mars_cmd::Command,
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    env_logger::init();
    let cli = Cli::parse();
    log::debug!("Starting mars-cli");
    mars_cmd::run(cli.command).await
}
