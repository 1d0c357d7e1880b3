use std::path::PathBuf;

use scoring_engine::domain::ScoreError;
use scoring_engine::{DomainError, SnapshotError};
use thiserror::Error;

use crate::config::ConfigError;

#[derive(Error, Debug)]
pub enum AppError {
    #[error("Configuration error: {0}")]
    Config(#[from] ConfigError),
    #[error("Invalid scoring settings: {0}")]
    Scoring(#[from] scoring_engine::ConfigError),
    #[error("{0}")]
    Domain(#[from] DomainError),
    #[error("Cannot read session file {path}: {source}")]
    Snapshot {
        path: PathBuf,
        #[source]
        source: SnapshotError,
    },
    #[error("I/O error on {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
    #[error("Encoding error: {0}")]
    Encode(#[from] serde_json::Error),
    #[error("No game in progress; run `scorekeeper start` first")]
    NoGame,
    #[error("Unknown player '{0}' (use a seat 0-3, a player id or a name)")]
    UnknownPlayer(String),
    #[error("Winner and discarder must be different players")]
    SelfDiscard,
    #[error("Win not recorded: {0}")]
    Rejected(ScoreError),
}

impl AppError {
    /// Process exit code for this error.
    pub fn exit_code(&self) -> u8 {
        match self {
            AppError::Config(_) | AppError::Scoring(_) => 78,
            AppError::Snapshot { .. } | AppError::Io { .. } | AppError::Encode(_) => 74,
            AppError::NoGame
            | AppError::UnknownPlayer(_)
            | AppError::SelfDiscard
            | AppError::Rejected(_)
            | AppError::Domain(_) => 2,
        }
    }
}
