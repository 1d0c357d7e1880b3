//! Caller-supplied configuration: scoring parameters and session settings.

pub mod scoring;
pub mod settings;

pub use scoring::{max_base_score, ConfigError, PaymentMode, RuleVariant, ScoringConfig};
pub use settings::{GameSettings, InputMode, SettingsOverrides};
