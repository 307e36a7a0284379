//! Stock CLI - render stock price charts and inspect filtered data.

use clap::Parser;

#[derive(Parser)]
#[command(
    name = "stock-cli",
    version,
    about = "Daily stock price chart toolkit"
)]
struct Cli {
    #[command(subcommand)]
    command: stock_cli::Command,
}

fn main() -> anyhow::Result<()> {
    env_logger::init();
    let cli = Cli::parse();
    stock_cli::run(cli.command)
}
