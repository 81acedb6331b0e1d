//! On-disk persistence of the session's refresh token between runs.

use serde::{Deserialize, Serialize};
use std::{fs, path::PathBuf};

/// Keeps the refresh token under the CLI's storage directory, standing in
/// for the browser storage the hosted platform normally uses.
#[derive(Debug)]
pub struct SessionFile {
    path: PathBuf,
}

#[derive(Debug, Serialize, Deserialize)]
struct StoredSession {
    refresh_token: String,
}

impl SessionFile {
    pub fn new(dir: impl Into<PathBuf>) -> anyhow::Result<Self> {
        let dir = dir.into();
        fs::create_dir_all(&dir)?;
        Ok(Self {
            path: dir.join("session.json"),
        })
    }

    pub fn refresh_token(&self) -> anyhow::Result<Option<String>> {
        if !self.path.exists() {
            return Ok(None);
        }
        let data = fs::read_to_string(&self.path)?;
        let stored: StoredSession = serde_json::from_str(&data)?;
        Ok(Some(stored.refresh_token))
    }

    pub fn save(&self, refresh_token: &str) -> anyhow::Result<()> {
        let stored = StoredSession {
            refresh_token: refresh_token.to_string(),
        };
        fs::write(&self.path, serde_json::to_string_pretty(&stored)?)?;
        Ok(())
    }

    pub fn clear(&self) -> anyhow::Result<()> {
        if self.path.exists() {
            fs::remove_file(&self.path)?;
        }
        Ok(())
    }
}
