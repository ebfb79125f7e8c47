//! Run command - start the embedded Tor and wait on it

use super::LaunchArgs;
use crate::process::{Creator, ProcessError};
use crate::util::time::format_duration;
use anyhow::{Context, Result};
use std::time::Instant;
use tokio_util::sync::CancellationToken;
use tracing::{debug, info};

/// Run the run command
pub async fn run_tor(args: &LaunchArgs) -> Result<()> {
    let tor_args = args.tor_args()?;
    launch(tor_args).await
}

#[cfg(feature = "linked-tor")]
async fn launch(tor_args: Vec<String>) -> Result<()> {
    let creator = crate::process::EmbeddedCreator::linked();
    run_until_exit(&creator, tor_args).await
}

#[cfg(not(feature = "linked-tor"))]
async fn launch(_tor_args: Vec<String>) -> Result<()> {
    anyhow::bail!("embedtor was built without a linked Tor (enable the `linked-tor` feature)")
}

/// Start a process and wait for it, abandoning the wait on Ctrl-C
///
/// Interrupting only stops the wait; the caller is expected to exit the
/// host process, which takes the embedded Tor down with it.
pub async fn run_until_exit(creator: &dyn Creator, tor_args: Vec<String>) -> Result<()> {
    let cancel = CancellationToken::new();
    let mut process = creator.create(cancel.clone(), tor_args)?;

    process.start().context("Failed to start embedded Tor")?;
    let started = Instant::now();

    let interrupt = cancel.clone();
    let watcher = tokio::spawn(async move {
        if tokio::signal::ctrl_c().await.is_ok() {
            info!("Interrupt received");
            interrupt.cancel();
        }
    });

    let result = process.wait().await;
    watcher.abort();

    let elapsed = format_duration(started.elapsed().as_secs());
    match result {
        Ok(()) => {
            info!("Tor exited after {}", elapsed);
            Ok(())
        },
        Err(ProcessError::Cancelled) => {
            debug!("Abandoned embedded Tor after {}", elapsed);
            Ok(())
        },
        Err(e) => Err(e).with_context(|| format!("Embedded Tor failed after {}", elapsed)),
    }
}
