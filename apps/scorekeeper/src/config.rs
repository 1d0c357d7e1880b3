//! Process configuration from the environment.
//!
//! - `MAHJONG_STATE_FILE`: session file path (default `./mahjong-session.json`)
//! - `MAHJONG_LOG_JSON`: `true`/`false`/`1`/`0`; JSON log lines on stderr

use std::env;
use std::path::PathBuf;

use thiserror::Error;

pub const STATE_FILE_VAR: &str = "MAHJONG_STATE_FILE";
pub const LOG_JSON_VAR: &str = "MAHJONG_LOG_JSON";
pub const DEFAULT_STATE_FILE: &str = "./mahjong-session.json";

#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum ConfigError {
    #[error("{name} must be a boolean (true/false/1/0), got '{value}'")]
    InvalidBool { name: &'static str, value: String },
    #[error("{name} must not be empty")]
    Empty { name: &'static str },
    #[error("expected 4 non-empty player names, got {count}")]
    InvalidNames { count: usize },
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Config {
    pub state_file: PathBuf,
    pub log_json: bool,
}

impl Config {
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|key| env::var(key).ok())
    }

    /// Build from any key lookup; unset keys fall back to defaults.
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Result<Self, ConfigError> {
        let state_file = match lookup(STATE_FILE_VAR) {
            Some(raw) if raw.trim().is_empty() => {
                return Err(ConfigError::Empty {
                    name: STATE_FILE_VAR,
                })
            }
            Some(raw) => PathBuf::from(raw.trim()),
            None => PathBuf::from(DEFAULT_STATE_FILE),
        };

        let log_json = match lookup(LOG_JSON_VAR) {
            Some(raw) => parse_bool(LOG_JSON_VAR, &raw)?,
            None => false,
        };

        Ok(Self {
            state_file,
            log_json,
        })
    }

    /// A `--state-file` flag wins over the environment.
    pub fn with_state_file(mut self, path: Option<PathBuf>) -> Self {
        if let Some(path) = path {
            self.state_file = path;
        }
        self
    }
}

fn parse_bool(name: &'static str, raw: &str) -> Result<bool, ConfigError> {
    match raw.trim().to_ascii_lowercase().as_str() {
        "1" | "true" | "yes" | "on" => Ok(true),
        "0" | "false" | "no" | "off" | "" => Ok(false),
        _ => Err(ConfigError::InvalidBool {
            name,
            value: raw.to_string(),
        }),
    }
}
