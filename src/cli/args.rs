//! Args command - print the Tor command line

use super::LaunchArgs;
use crate::tor::api::PROGRAM_NAME;
use anyhow::Result;

/// Run the args command
pub fn run_args(args: &LaunchArgs) -> Result<()> {
    println!("{}", PROGRAM_NAME.to_string_lossy());
    for arg in args.tor_args()? {
        println!("{}", arg);
    }
    Ok(())
}
