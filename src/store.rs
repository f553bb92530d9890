use anyhow::{Context, Result};
use log::{debug, warn};
use serde::{Deserialize, Serialize};
use std::collections::HashMap;
use std::fs;
use std::path::{Path, PathBuf};

use crate::common::types::UtmParameterSet;

pub const KEY_ONBOARDING_SEEN: &str = "onboarding_seen";
pub const KEY_CUSTOM_OPTIONS: &str = "utm_custom_options";
pub const KEY_HISTORY: &str = "utm_history";

/// Local history keeps only the most recent entries.
pub const LOCAL_HISTORY_LIMIT: usize = 100;

/// Process-local persisted state: a flat string-to-string map. Best-effort
/// semantics, each write overwrites the stored value for its key.
pub trait KeyValueStore {
    fn get(&self, key: &str) -> Option<String>;
    fn set(&mut self, key: &str, value: &str) -> Result<()>;
    fn remove(&mut self, key: &str) -> Result<()>;
}

/// In-memory store, used in tests and as a fallback when no state file can
/// be opened.
#[derive(Debug, Default)]
pub struct MemoryStore {
    values: HashMap<String, String>,
}

impl KeyValueStore for MemoryStore {
    fn get(&self, key: &str) -> Option<String> {
        self.values.get(key).cloned()
    }

    fn set(&mut self, key: &str, value: &str) -> Result<()> {
        self.values.insert(key.to_string(), value.to_string());
        Ok(())
    }

    fn remove(&mut self, key: &str) -> Result<()> {
        self.values.remove(key);
        Ok(())
    }
}

/// JSON-file-backed store. The whole map is rewritten on every set, which is
/// fine at the sizes involved (a flag, option lists, a bounded history).
#[derive(Debug)]
pub struct FileStore {
    path: PathBuf,
    values: HashMap<String, String>,
}

impl FileStore {
    pub fn open(path: impl Into<PathBuf>) -> Result<Self> {
        let path = path.into();
        let values = if path.exists() {
            let contents = fs::read_to_string(&path)
                .with_context(|| format!("Failed to read state file: {}", path.display()))?;
            serde_json::from_str(&contents)
                .with_context(|| format!("Failed to parse state file: {}", path.display()))?
        } else {
            HashMap::new()
        };

        debug!("Opened state file {} ({} keys)", path.display(), values.len());
        Ok(FileStore { path, values })
    }

    /// State file under the user config directory, created on first write.
    pub fn open_default() -> Result<Self> {
        let config_dir = dirs::config_dir()
            .context("Could not determine a config directory for local state")?;
        Self::open(config_dir.join("utm-builder").join("state.json"))
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    fn persist(&self) -> Result<()> {
        if let Some(parent) = self.path.parent() {
            fs::create_dir_all(parent)
                .with_context(|| format!("Failed to create {}", parent.display()))?;
        }
        let contents = serde_json::to_string_pretty(&self.values)?;
        fs::write(&self.path, contents)
            .with_context(|| format!("Failed to write state file: {}", self.path.display()))
    }
}

impl KeyValueStore for FileStore {
    fn get(&self, key: &str) -> Option<String> {
        self.values.get(key).cloned()
    }

    fn set(&mut self, key: &str, value: &str) -> Result<()> {
        self.values.insert(key.to_string(), value.to_string());
        self.persist()
    }

    fn remove(&mut self, key: &str) -> Result<()> {
        self.values.remove(key);
        self.persist()
    }
}

/// A user-defined catalog entry, stored alongside the built-in catalogs.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq, Eq)]
pub struct CustomOption {
    pub value: String,
    pub label: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
}

/// User-defined extensions to the channel/source/medium catalogs.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq, Eq)]
pub struct CustomOptions {
    #[serde(default)]
    pub channels: Vec<CustomOption>,
    #[serde(default)]
    pub sources: Vec<CustomOption>,
    #[serde(default)]
    pub mediums: Vec<CustomOption>,
}

pub fn onboarding_seen(store: &dyn KeyValueStore) -> bool {
    store.get(KEY_ONBOARDING_SEEN).as_deref() == Some("true")
}

pub fn mark_onboarding_seen(store: &mut dyn KeyValueStore) -> Result<()> {
    store.set(KEY_ONBOARDING_SEEN, "true")
}

/// Stored custom options; a corrupt entry is discarded rather than failing
/// the whole tool.
pub fn load_custom_options(store: &dyn KeyValueStore) -> CustomOptions {
    match store.get(KEY_CUSTOM_OPTIONS) {
        Some(raw) => serde_json::from_str(&raw).unwrap_or_else(|e| {
            warn!("Discarding unreadable custom options: {}", e);
            CustomOptions::default()
        }),
        None => CustomOptions::default(),
    }
}

pub fn save_custom_options(store: &mut dyn KeyValueStore, options: &CustomOptions) -> Result<()> {
    store.set(KEY_CUSTOM_OPTIONS, &serde_json::to_string(options)?)
}

/// Locally cached history, newest first.
pub fn local_history(store: &dyn KeyValueStore) -> Vec<UtmParameterSet> {
    match store.get(KEY_HISTORY) {
        Some(raw) => serde_json::from_str(&raw).unwrap_or_else(|e| {
            warn!("Discarding unreadable local history: {}", e);
            Vec::new()
        }),
        None => Vec::new(),
    }
}

/// Prepend a set to the local history, trimming to the history limit.
pub fn push_local_history(store: &mut dyn KeyValueStore, set: &UtmParameterSet) -> Result<()> {
    let mut history = local_history(store);
    history.insert(0, set.clone());
    history.truncate(LOCAL_HISTORY_LIMIT);
    store.set(KEY_HISTORY, &serde_json::to_string(&history)?)
}

pub fn clear_local_history(store: &mut dyn KeyValueStore) -> Result<()> {
    store.remove(KEY_HISTORY)
}
