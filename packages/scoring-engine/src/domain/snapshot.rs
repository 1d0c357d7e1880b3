//! Durable session snapshot.
//!
//! Settings, the game in progress and the preferred input mode are the whole
//! persisted contract; everything else is recomputed.

use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::config::{GameSettings, InputMode};
use crate::domain::session::Session;
use crate::domain::state::GameState;

pub const SNAPSHOT_VERSION: u32 = 1;

#[derive(Debug, Error)]
pub enum SnapshotError {
    #[error("snapshot is not valid JSON: {0}")]
    Json(#[from] serde_json::Error),
    #[error("unsupported snapshot version {found} (expected {SNAPSHOT_VERSION})")]
    UnsupportedVersion { found: u32 },
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PersistedSession {
    pub version: u32,
    pub settings: GameSettings,
    pub game: Option<GameState>,
    #[serde(default)]
    pub preferred_input_mode: InputMode,
}

impl From<&Session> for PersistedSession {
    fn from(session: &Session) -> Self {
        Self {
            version: SNAPSHOT_VERSION,
            settings: session.settings.clone(),
            game: session.game.clone(),
            preferred_input_mode: session.preferred_input_mode,
        }
    }
}

impl TryFrom<PersistedSession> for Session {
    type Error = SnapshotError;

    fn try_from(p: PersistedSession) -> Result<Self, Self::Error> {
        if p.version != SNAPSHOT_VERSION {
            return Err(SnapshotError::UnsupportedVersion { found: p.version });
        }
        Ok(Session {
            settings: p.settings,
            game: p.game,
            preferred_input_mode: p.preferred_input_mode,
        })
    }
}

pub fn to_json(session: &Session) -> Result<String, SnapshotError> {
    Ok(serde_json::to_string_pretty(&PersistedSession::from(session))?)
}

pub fn from_json(json: &str) -> Result<Session, SnapshotError> {
    let persisted: PersistedSession = serde_json::from_str(json)?;
    Session::try_from(persisted)
}
