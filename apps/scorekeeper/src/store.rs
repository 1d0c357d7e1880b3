//! JSON session file.

use std::fs;
use std::io::ErrorKind;
use std::path::{Path, PathBuf};

use scoring_engine::domain::{from_json, to_json};
use scoring_engine::Session;
use tracing::debug;

use crate::error::AppError;

#[derive(Debug, Clone)]
pub struct SessionStore {
    path: PathBuf,
}

impl SessionStore {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Load the saved session; a missing file is a fresh session.
    pub fn load(&self) -> Result<Session, AppError> {
        let raw = match fs::read_to_string(&self.path) {
            Ok(raw) => raw,
            Err(e) if e.kind() == ErrorKind::NotFound => {
                debug!(path = %self.path.display(), "no session file, starting fresh");
                return Ok(Session::default());
            }
            Err(source) => {
                return Err(AppError::Io {
                    path: self.path.clone(),
                    source,
                })
            }
        };
        from_json(&raw).map_err(|source| AppError::Snapshot {
            path: self.path.clone(),
            source,
        })
    }

    /// Written to a sibling temp file, then renamed over the target.
    pub fn save(&self, session: &Session) -> Result<(), AppError> {
        let json = to_json(session).map_err(|source| AppError::Snapshot {
            path: self.path.clone(),
            source,
        })?;

        let io_err = |source| AppError::Io {
            path: self.path.clone(),
            source,
        };
        if let Some(dir) = self.path.parent().filter(|d| !d.as_os_str().is_empty()) {
            fs::create_dir_all(dir).map_err(io_err)?;
        }
        let tmp = self.path.with_extension("json.tmp");
        fs::write(&tmp, json).map_err(io_err)?;
        fs::rename(&tmp, &self.path).map_err(io_err)?;

        debug!(path = %self.path.display(), "session saved");
        Ok(())
    }
}
