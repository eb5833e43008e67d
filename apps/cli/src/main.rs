//! Camp Info CLI: camp schedule, menu, map, and contacts in the terminal.
//!
//! Schedule and contacts are refreshed from the published camp sheets;
//! everything else comes from the built-in data.

mod commands;
mod render;

use clap::Parser;
use color_eyre::eyre::Result;

use commands::Cli;

#[tokio::main]
async fn main() -> Result<()> {
    color_eyre::install()?;
    let cli = Cli::parse();
    commands::init_tracing(&cli);
    commands::run(cli).await
}
