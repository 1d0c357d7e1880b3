#![deny(clippy::wildcard_imports)]
#![cfg_attr(test, allow(clippy::wildcard_imports))]

//! Command-line scorekeeper for a Cantonese mahjong table.
//!
//! Each invocation loads the session from a JSON state file, applies one
//! command and writes the session back when it changed.

pub mod cli;
pub mod commands;
pub mod config;
pub mod error;
pub mod render;
pub mod store;
pub mod telemetry;

pub use commands::{run, Outcome};
pub use config::Config;
pub use error::AppError;
pub use store::SessionStore;
