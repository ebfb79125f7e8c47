//! Command-line interface for embedtor
//!
//! Provides main commands:
//! - `run` - Start the embedded Tor and wait for it to exit
//! - `args` - Print the command line `run` would hand to Tor

mod args;
mod run;

pub use args::run_args;
pub use run::{run_tor, run_until_exit};

use clap::{Parser, Subcommand};
use std::path::PathBuf;

/// embedtor - Tor daemon embedded as a library
#[derive(Parser, Debug)]
#[command(name = "embedtor")]
#[command(author, version, about, long_about = None)]
#[command(propagate_version = true)]
pub struct Cli {
    /// Verbose output
    #[arg(short, long, default_value_t = false)]
    pub verbose: bool,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Run the embedded Tor until it exits or is interrupted
    Run(LaunchArgs),

    /// Print the Tor command line, one argument per line
    Args(LaunchArgs),
}

/// Arguments shared by run and args
#[derive(Parser, Debug)]
pub struct LaunchArgs {
    /// Path to config file (defaults to /etc/embedtor/config.toml, then ./config.toml)
    #[arg(long)]
    pub config: Option<PathBuf>,

    /// Extra arguments appended to Tor's command line
    #[arg(last = true)]
    pub extra: Vec<String>,
}

impl LaunchArgs {
    /// Tor command line (without the program name) from config plus extras
    pub fn tor_args(&self) -> anyhow::Result<Vec<String>> {
        let config = crate::config::load_config(self.config.as_deref())?;
        let mut args = config.tor.to_args();
        args.extend(self.extra.iter().cloned());
        Ok(args)
    }
}

/// Parse command line arguments
pub fn parse() -> Cli {
    Cli::parse()
}
