//! Draft snapshot persistence

use std::fs;
use std::io::ErrorKind;
use std::path::PathBuf;

use anyhow::{Context, Result};
use tracing::debug;

use crate::state::CampaignDraft;

/// Storage key for the in-progress campaign draft
pub const SNAPSHOT_KEY: &str = "campaignFormData";

/// Key-value snapshot storage.
///
/// Kept behind a trait so tests can substitute a double and the backend
/// can change without touching the controller.
#[cfg_attr(test, mockall::automock)]
pub trait SnapshotStore: Send + Sync {
    /// Read the raw value stored under `key`, `None` when absent
    fn get(&self, key: &str) -> Result<Option<String>>;

    /// Write `value` under `key`, creating the storage location if needed
    fn set(&self, key: &str, value: &str) -> Result<()>;
}

/// Stores each key as a JSON file in a single directory
#[derive(Debug, Clone)]
pub struct FileStore {
    dir: PathBuf,
}

impl FileStore {
    pub fn new(dir: PathBuf) -> Self {
        Self { dir }
    }

    fn path_for(&self, key: &str) -> PathBuf {
        self.dir.join(format!("{key}.json"))
    }
}

impl SnapshotStore for FileStore {
    fn get(&self, key: &str) -> Result<Option<String>> {
        match fs::read_to_string(self.path_for(key)) {
            Ok(contents) => Ok(Some(contents)),
            Err(err) if err.kind() == ErrorKind::NotFound => Ok(None),
            Err(err) => {
                Err(err).with_context(|| format!("failed to read snapshot key {key}"))
            }
        }
    }

    fn set(&self, key: &str, value: &str) -> Result<()> {
        fs::create_dir_all(&self.dir)
            .with_context(|| format!("failed to create {}", self.dir.display()))?;
        fs::write(self.path_for(key), value)
            .with_context(|| format!("failed to write snapshot key {key}"))
    }
}

/// Persist the full draft under `SNAPSHOT_KEY`
pub fn save_draft(store: &dyn SnapshotStore, draft: &CampaignDraft) -> Result<()> {
    let json = serde_json::to_string_pretty(draft).context("failed to serialize draft")?;
    store.set(SNAPSHOT_KEY, &json)
}

/// One-shot restore of the persisted draft.
///
/// Absent, unreadable, and malformed snapshots all come back as `None` so
/// the caller starts from defaults. A malformed snapshot may simply predate
/// a schema change, so it is logged at debug rather than surfaced.
pub fn load_draft(store: &dyn SnapshotStore) -> Option<CampaignDraft> {
    let raw = match store.get(SNAPSHOT_KEY) {
        Ok(Some(raw)) => raw,
        Ok(None) => return None,
        Err(err) => {
            debug!("snapshot read failed, using defaults: {err:#}");
            return None;
        }
    };

    match serde_json::from_str(&raw) {
        Ok(draft) => Some(draft),
        Err(err) => {
            debug!("snapshot malformed, using defaults: {err}");
            None
        }
    }
}
