//! File-based preference store
//!
//! Persists preferences as a flat JSON object of string values in the
//! application data directory, standing in for browser local storage.

use std::collections::BTreeMap;
use std::path::{Path, PathBuf};

use async_trait::async_trait;
use rsvp_core::ports::{PreferenceStoreError, PreferenceStorePort};
use tokio::fs;
use tokio::io::AsyncWriteExt;
use tracing::warn;

pub const DEFAULT_PREFERENCES_FILE: &str = "preferences.json";

type Preferences = BTreeMap<String, String>;

pub struct FilePreferenceStore {
    path: PathBuf,
}

impl FilePreferenceStore {
    /// Create store with custom file path
    pub fn new(path: PathBuf) -> Self {
        Self { path }
    }

    /// Create store with defaults
    pub fn with_defaults(base_dir: PathBuf) -> Self {
        Self {
            path: base_dir.join(DEFAULT_PREFERENCES_FILE),
        }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    async fn load(&self) -> Result<Preferences, PreferenceStoreError> {
        if !self.path.exists() {
            return Ok(Preferences::new());
        }

        let content = fs::read_to_string(&self.path)
            .await
            .map_err(|e| PreferenceStoreError::Unavailable(e.to_string()))?;

        if content.trim().is_empty() {
            return Ok(Preferences::new());
        }

        serde_json::from_str(&content)
            .map_err(|e| PreferenceStoreError::Corrupted(format!("Failed to parse preferences: {e}")))
    }

    async fn write(&self, preferences: &Preferences) -> anyhow::Result<()> {
        if let Some(parent) = self.path.parent() {
            fs::create_dir_all(parent).await?;
        }

        let json = serde_json::to_string_pretty(preferences)?;
        let mut file = fs::File::create(&self.path).await?;
        file.write_all(json.as_bytes()).await?;
        file.sync_all().await?;
        Ok(())
    }
}

#[async_trait]
impl PreferenceStorePort for FilePreferenceStore {
    async fn get(&self, key: &str) -> Result<Option<String>, PreferenceStoreError> {
        Ok(self.load().await?.remove(key))
    }

    async fn set(&self, key: &str, value: &str) -> Result<(), PreferenceStoreError> {
        let mut preferences = match self.load().await {
            Ok(preferences) => preferences,
            Err(PreferenceStoreError::Corrupted(reason)) => {
                warn!(path = %self.path.display(), %reason, "discarding corrupted preferences");
                Preferences::new()
            }
            Err(err) => return Err(err),
        };
        preferences.insert(key.to_string(), value.to_string());

        self.write(&preferences)
            .await
            .map_err(|e| PreferenceStoreError::Unavailable(format!("Failed to write preferences: {e}")))
    }
}
