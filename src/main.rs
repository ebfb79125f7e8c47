//! embedtor - Tor embedded as a library
//!
//! Launches a statically linked Tor on a background thread of this process
//! and waits for it to exit.
//!
//! # Usage
//!
//! ```bash
//! # Show the command line Tor would receive
//! embedtor args --config ./config.toml
//!
//! # Run Tor, with extra arguments after `--`
//! embedtor run --config ./config.toml -- --ClientOnly 1
//! ```

#![allow(clippy::uninlined_format_args)]

use anyhow::Result;
use embedtor::cli::{self, Commands};
use embedtor::logging;
use tracing::{info, Level};

#[tokio::main]
async fn main() -> Result<()> {
    let cli = cli::parse();

    // Initialize logging
    if cli.verbose {
        logging::init_with_level(Level::DEBUG);
    } else {
        logging::init();
    }

    match &cli.command {
        Commands::Run(args) => {
            info!("embedtor v{} starting", embedtor::VERSION);
            cli::run_tor(args).await?;
        },
        Commands::Args(args) => {
            cli::run_args(args)?;
        },
    }

    Ok(())
}
