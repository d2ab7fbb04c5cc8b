//! Check history persisted between runs
//!
//! A YAML map from package name to the result of its previous check.
//! The file feeds the check interval: packages checked recently enough
//! are skipped on the next run. History is advisory, so a missing or
//! unreadable file never stops a run.

use std::collections::BTreeMap;
use std::io::ErrorKind;
use std::path::{Path, PathBuf};

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use thiserror::Error;
use tracing::warn;

#[derive(Debug, Error)]
pub enum HistoryError {
    #[error("Failed to write history file: {0}")]
    Io(#[from] std::io::Error),

    #[error("Failed to serialize history: {0}")]
    Serialize(#[from] serde_yaml::Error),
}

/// Recorded result of the previous check for one package.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CheckState {
    pub last_checked: DateTime<Utc>,
    pub declared_version: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub latest_version: Option<String>,
}

/// On-disk check history, keyed by package name.
#[derive(Debug)]
pub struct History {
    entries: BTreeMap<String, CheckState>,
    path: PathBuf,
}

impl History {
    /// Loads history from `path`.
    ///
    /// A missing file starts an empty history. A file that cannot be
    /// read or parsed is logged and ignored, which resets the check
    /// interval for every package.
    pub fn load(path: &Path) -> Self {
        let entries = match std::fs::read_to_string(path) {
            Ok(raw) if raw.trim().is_empty() => BTreeMap::new(),
            Ok(raw) => match serde_yaml::from_str(&raw) {
                Ok(entries) => entries,
                Err(err) => {
                    warn!("Ignoring malformed history file {}: {}", path.display(), err);
                    BTreeMap::new()
                }
            },
            Err(err) if err.kind() == ErrorKind::NotFound => BTreeMap::new(),
            Err(err) => {
                warn!("Ignoring unreadable history file {}: {}", path.display(), err);
                BTreeMap::new()
            }
        };
        Self {
            entries,
            path: path.to_path_buf(),
        }
    }

    pub fn save(&self) -> Result<(), HistoryError> {
        if let Some(parent) = self.path.parent()
            && !parent.as_os_str().is_empty()
        {
            std::fs::create_dir_all(parent)?;
        }
        let raw = serde_yaml::to_string(&self.entries)?;
        std::fs::write(&self.path, raw)?;
        Ok(())
    }

    pub fn get(&self, name: &str) -> Option<&CheckState> {
        self.entries.get(name)
    }

    /// Records that `name` was checked at `now`.
    ///
    /// The declared version always reflects the current APKBUILD. The
    /// known latest version is only replaced when this check produced
    /// one, so an upstream miss does not erase an earlier answer.
    pub fn record_check(
        &mut self,
        name: &str,
        declared_version: &str,
        latest_version: Option<&str>,
        now: DateTime<Utc>,
    ) {
        let previous_latest = self
            .entries
            .get(name)
            .and_then(|state| state.latest_version.clone());
        self.entries.insert(
            name.to_string(),
            CheckState {
                last_checked: now,
                declared_version: declared_version.to_string(),
                latest_version: latest_version.map(str::to_string).or(previous_latest),
            },
        );
    }
}
