//! embedtor library crate
//!
//! Runs Tor as a statically linked, in-process library behind the same
//! process lifecycle interface a spawned Tor would have.
//!
//! # Modules
//!
//! - [`process`] - `Process` / `Creator` lifecycle and the embedded launcher
//! - [`tor`] - Native embedding API (linked with the `linked-tor` feature)
//! - [`config`] - Configuration loading and validation
//! - [`cli`] - Command-line interface (run, args)
//! - [`logging`] - tracing subscriber setup
//! - [`util`] - Helpers

#![allow(clippy::doc_markdown)] // Doc formatting is secondary
#![allow(clippy::uninlined_format_args)] // Format string style preference
#![allow(clippy::cast_possible_truncation)] // argc fits in c_int
#![allow(clippy::module_name_repetitions)] // ProcessError in process is fine

pub mod cli;
pub mod config;
pub mod logging;
pub mod process;
pub mod tor;
pub mod util;

pub use process::{Creator, EmbeddedCreator, EmbeddedProcess, Process, ProcessError};
pub use tor::{ArgVector, TorApi};

/// Crate version
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
