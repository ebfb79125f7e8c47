//! Linked Tor library
//!
//! Tor is treated as a black box reached through its embedding API.

pub mod api;
#[cfg(feature = "linked-tor")]
pub mod linked;
#[cfg(feature = "linked-tor")]
mod sys;

pub use api::{ArgVector, TorApi};
#[cfg(feature = "linked-tor")]
pub use linked::LinkedTor;
