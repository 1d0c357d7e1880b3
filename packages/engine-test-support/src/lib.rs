//! Engine test support utilities
//!
//! Shared by the engine's integration tests and the CLI's tests: unified
//! logging initialization, unique names and ready-made sessions.

pub mod fixtures;
pub mod logging;
pub mod unique_helpers;
