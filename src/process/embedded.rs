//! Tor embedded in the current process
//!
//! `tor_run_main` blocks for the whole life of the daemon, so it runs on a
//! dedicated OS thread and reports its exit code over a oneshot channel.
//! There is no way to stop the native call from outside; cancelling only
//! stops waiting for it.

use super::{Creator, Process, ProcessError, Result};
use crate::tor::{ArgVector, TorApi};
use async_trait::async_trait;
use std::sync::Arc;
use std::thread;
use tokio::sync::oneshot;
use tokio_util::sync::CancellationToken;
use tracing::{debug, info, warn};

/// Name of the thread running the native entry point
const THREAD_NAME: &str = "tor-main";

/// Launches the closure that runs the native entry point
type Spawner = fn(Box<dyn FnOnce() + Send>) -> std::io::Result<()>;

fn spawn_tor_thread(run: Box<dyn FnOnce() + Send>) -> std::io::Result<()> {
    thread::Builder::new()
        .name(THREAD_NAME.to_string())
        .spawn(run)
        .map(drop)
}

/// Creates processes that run Tor through a [`TorApi`]
///
/// Tor keeps global state, so only one embedded instance should run per
/// host process at a time.
pub struct EmbeddedCreator<A: TorApi> {
    api: Arc<A>,
}

impl<A: TorApi> EmbeddedCreator<A> {
    pub fn new(api: A) -> Self {
        Self { api: Arc::new(api) }
    }

    /// Create a process without boxing it
    pub fn process(&self, cancel: CancellationToken, args: Vec<String>) -> EmbeddedProcess<A> {
        EmbeddedProcess::new(Arc::clone(&self.api), cancel, args)
    }
}

#[cfg(feature = "linked-tor")]
impl EmbeddedCreator<crate::tor::LinkedTor> {
    /// Creator backed by the Tor linked into this binary
    pub fn linked() -> Self {
        Self::new(crate::tor::LinkedTor)
    }
}

impl<A: TorApi> Creator for EmbeddedCreator<A> {
    fn create(&self, cancel: CancellationToken, args: Vec<String>) -> Result<Box<dyn Process>> {
        Ok(Box::new(self.process(cancel, args)))
    }
}

#[derive(Debug)]
enum State {
    Created,
    /// The sender lives on the Tor thread and fires at most once
    Running(oneshot::Receiver<i32>),
    /// `None` when the thread died without sending
    Exited(Option<i32>),
}

/// One embedded Tor run
pub struct EmbeddedProcess<A: TorApi> {
    api: Arc<A>,
    cancel: CancellationToken,
    args: Vec<String>,
    state: State,
    spawner: Spawner,
}

impl<A: TorApi> EmbeddedProcess<A> {
    pub fn new(api: Arc<A>, cancel: CancellationToken, args: Vec<String>) -> Self {
        Self {
            api,
            cancel,
            args,
            state: State::Created,
            spawner: spawn_tor_thread,
        }
    }

    /// Arguments passed after the program name
    pub fn args(&self) -> &[String] {
        &self.args
    }

    pub fn is_started(&self) -> bool {
        !matches!(self.state, State::Created)
    }

    fn exit_result(code: Option<i32>) -> Result<()> {
        match code {
            Some(0) => Ok(()),
            Some(code) => Err(ProcessError::Exit { code }),
            None => Err(ProcessError::Abandoned),
        }
    }
}

#[async_trait]
impl<A: TorApi> Process for EmbeddedProcess<A> {
    fn start(&mut self) -> Result<()> {
        if self.is_started() {
            return Err(ProcessError::AlreadyStarted);
        }

        let argv = ArgVector::new(&self.args)
            .map_err(|(index, source)| ProcessError::InvalidArgument { index, source })?;
        debug!(argv = ?argv.to_strings(), "Configuring embedded Tor");

        // On failure the api has already released everything it allocated
        let config = self
            .api
            .configure(argv)
            .map_err(|code| ProcessError::Configure { code })?;

        let (tx, rx) = oneshot::channel();
        let api = Arc::clone(&self.api);

        // If the spawn fails the closure is dropped, and the config with it
        (self.spawner)(Box::new(move || {
            let code = api.run_main(&config);
            drop(config);
            let _ = tx.send(code);
        }))
        .map_err(ProcessError::Spawn)?;

        info!("Embedded Tor started with {} args", self.args.len());
        self.state = State::Running(rx);
        Ok(())
    }

    async fn wait(&mut self) -> Result<()> {
        let rx = match &mut self.state {
            State::Created => return Err(ProcessError::NotStarted),
            State::Exited(code) => return Self::exit_result(*code),
            State::Running(rx) => rx,
        };

        // Completion wins when both are ready
        let received = tokio::select! {
            biased;
            received = rx => received,
            () = self.cancel.cancelled() => {
                warn!("Wait for embedded Tor cancelled; Tor keeps running");
                return Err(ProcessError::Cancelled);
            },
        };

        let code = received.ok();
        match code {
            Some(0) => info!("Embedded Tor exited cleanly"),
            Some(code) => warn!("Embedded Tor exited with code {}", code),
            None => warn!("Embedded Tor thread ended without an exit code"),
        }

        self.state = State::Exited(code);
        Self::exit_result(code)
    }
}
