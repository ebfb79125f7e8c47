//! Process lifecycle errors

use std::ffi::NulError;
use thiserror::Error;

/// Shared `Result` alias for process operations.
pub type Result<T> = std::result::Result<T, ProcessError>;

#[derive(Debug, Error)]
pub enum ProcessError {
    #[error("already started")]
    AlreadyStarted,

    #[error("not started")]
    NotStarted,

    #[error("argument {index} contains a NUL byte")]
    InvalidArgument {
        index: usize,
        #[source]
        source: NulError,
    },

    #[error("failed to set command line args, code: {code}")]
    Configure { code: i32 },

    #[error("failed to spawn Tor thread: {0}")]
    Spawn(#[source] std::io::Error),

    #[error("command completed with error exit code: {code}")]
    Exit { code: i32 },

    #[error("Tor thread ended without reporting an exit code")]
    Abandoned,

    #[error("wait cancelled")]
    Cancelled,

    #[error("embedded control connection not supported")]
    ControlConnUnsupported,
}

impl ProcessError {
    /// Native exit or configuration code, when the error carries one
    pub fn code(&self) -> Option<i32> {
        match self {
            Self::Configure { code } | Self::Exit { code } => Some(*code),
            _ => None,
        }
    }
}
