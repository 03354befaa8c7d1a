//! VPP - Entry Point

// Force-link vpp-providers to ensure linkme registrations are included
extern crate vpp_providers;

use clap::Parser;
use vpp::cli::{Cli, load_config, run};
use vpp_infrastructure::logging::init_logging;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();
    let config = load_config(cli.config.as_deref())?;
    init_logging(&config.logging)?;

    let mut stdout = std::io::stdout().lock();
    run(cli.command, &config, &mut stdout).await
}
