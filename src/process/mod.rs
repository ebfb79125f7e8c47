//! Tor process lifecycle
//!
//! A uniform create / start / wait interface over however Tor is actually
//! launched. Control clients depend on [`Creator`] and [`Process`] only.

mod embedded;
mod error;

pub use embedded::{EmbeddedCreator, EmbeddedProcess};
pub use error::{ProcessError, Result};

use async_trait::async_trait;
use tokio::io::{AsyncRead, AsyncWrite};
use tokio_util::sync::CancellationToken;

/// Byte stream speaking the Tor control protocol
pub trait ControlStream: AsyncRead + AsyncWrite + Send + Unpin {}

impl<T: AsyncRead + AsyncWrite + Send + Unpin> ControlStream for T {}

/// Control connection handed out by a process that owns one
pub type ControlConn = Box<dyn ControlStream>;

/// A single Tor run
#[async_trait]
pub trait Process: Send {
    /// Launch Tor. Fails with [`ProcessError::AlreadyStarted`] on a second call.
    fn start(&mut self) -> Result<()>;

    /// Wait for Tor to exit or for the process's cancellation token to fire,
    /// whichever happens first.
    ///
    /// Cancellation abandons the wait only; Tor keeps running.
    async fn wait(&mut self) -> Result<()>;

    /// Control connection owned by the process itself, if the launcher can
    /// provide one
    fn embedded_control_conn(&mut self) -> Result<ControlConn> {
        Err(ProcessError::ControlConnUnsupported)
    }
}

/// Factory for [`Process`] values
pub trait Creator: Send + Sync {
    /// Create an un-started process. `args` excludes the program name.
    fn create(&self, cancel: CancellationToken, args: Vec<String>) -> Result<Box<dyn Process>>;
}
