//! Data-driven UI test harness CLI
//!
//! Inspection and dry-run front end for the harness: resolve datasets,
//! show effective configuration, and replay a mapped test case against
//! the recording driver.

use clap::Parser;
use uitest::commands::Commands;
use uitest::{cli, common};

#[derive(Parser)]
#[command(name = "uitest", about = "Data-driven UI test harness")]
#[command(version, long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[tokio::main]
async fn main() {
    common::logging::init();

    let cli = Cli::parse();

    if let Err(e) = cli::dispatch(cli.command).await {
        eprintln!("Error: {e}");
        std::process::exit(1);
    }
}
