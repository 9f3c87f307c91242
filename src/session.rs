use std::fs;
use std::path::Path;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::error::AppError;

/// Persisted sign-in state. Loaded and saved explicitly by the command
/// layer and handed to whatever needs it; there is no implicit storage
/// middleware behind it.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Session {
    pub authenticated: bool,
    pub token: Option<String>,
    pub signed_in_at: Option<DateTime<Utc>>,
}

impl Session {
    /// Read the session file; a missing file is the signed-out default.
    pub fn load(path: &Path) -> Result<Session, AppError> {
        let raw = match fs::read_to_string(path) {
            Ok(raw) => raw,
            Err(err) if err.kind() == std::io::ErrorKind::NotFound => {
                return Ok(Session::default());
            }
            Err(err) => return Err(err.into()),
        };
        Ok(serde_json::from_str(&raw)?)
    }

    /// Write the session file, creating parent directories as needed.
    pub fn save(&self, path: &Path) -> Result<(), AppError> {
        if let Some(parent) = path.parent()
            && !parent.as_os_str().is_empty()
        {
            fs::create_dir_all(parent)?;
        }
        let raw = serde_json::to_string_pretty(self)?;
        fs::write(path, raw)?;
        Ok(())
    }

    /// Mark the session signed in under a fresh random token.
    pub fn sign_in(&mut self) {
        self.authenticated = true;
        self.token = Some(generate_token());
        self.signed_in_at = Some(Utc::now());
    }

    /// Drop back to the signed-out default.
    pub fn sign_out(&mut self) {
        *self = Session::default();
    }

    pub fn require_authenticated(&self) -> Result<(), AppError> {
        if self.authenticated {
            Ok(())
        } else {
            Err(AppError::Unauthorized)
        }
    }
}

/// Generate a new random session token.
fn generate_token() -> String {
    use rand::Rng;
    let bytes: [u8; 32] = rand::rng().random();
    hex::encode(bytes)
}
