#![deny(clippy::wildcard_imports)]
#![cfg_attr(test, allow(clippy::wildcard_imports))]

//! Hong Kong (Cantonese) mahjong scorekeeping engine.
//!
//! Pure and synchronous: no I/O, no clocks beyond round timestamps. Callers
//! own persistence and presentation.

pub mod config;
pub mod domain;
pub mod errors;


pub use config::{
    ConfigError, GameSettings, InputMode, PaymentMode, RuleVariant, ScoringConfig,
    SettingsOverrides,
};
pub use domain::{
    calculate_score, resolve_fan_selection, validate_fan_combination, FanClaim, GameState,
    PersistedSession, Player, PlayerId, PreviewRequest, Round, RoundOutcome, ScoreResult, Session,
    SnapshotError, WinType,
};
pub use errors::DomainError;

// Auto-initialize logging for unit tests
#[cfg(test)]
#[ctor::ctor]
fn init_test_logging() {
    test_bootstrap::logging::init();
}
