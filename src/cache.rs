// src/cache.rs
//! Persistent URL-keyed response cache: one JSON file, loaded at startup,
//! written back after every insert. Repeated runs against the same training
//! set stay off the network.

use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};
use std::collections::HashMap;
use std::path::{Path, PathBuf};
use tracing::warn;

/// A completed HTTP exchange: final status plus body text.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct CachedResponse {
    pub status: u16,
    pub body: String,
    pub fetched_at: u64,
}

#[derive(Debug)]
pub struct UrlCache {
    path: PathBuf,
    entries: HashMap<String, CachedResponse>,
}

impl UrlCache {
    /// Open the cache at `path`, starting empty when the file is missing.
    /// A corrupt file is discarded with a warning — the cache is an
    /// optimization, not a source of truth.
    pub fn open(path: &Path) -> Self {
        let entries = match std::fs::read_to_string(path) {
            Ok(content) => match serde_json::from_str(&content) {
                Ok(map) => map,
                Err(e) => {
                    warn!(error = %e, path = %path.display(), "discarding corrupt response cache");
                    HashMap::new()
                }
            },
            Err(_) => HashMap::new(),
        };

        Self {
            path: path.to_path_buf(),
            entries,
        }
    }

    pub fn get(&self, url: &str) -> Option<&CachedResponse> {
        self.entries.get(url)
    }

    /// Insert and persist. A failed write is logged and otherwise ignored;
    /// the run continues uncached.
    pub fn insert(&mut self, url: &str, response: CachedResponse) {
        self.entries.insert(url.to_string(), response);
        if let Err(e) = self.save() {
            warn!(error = ?e, "response cache not saved");
        }
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    fn save(&self) -> Result<()> {
        let json = serde_json::to_string(&self.entries).context("serializing response cache")?;
        std::fs::write(&self.path, json)
            .with_context(|| format!("writing response cache to {}", self.path.display()))?;
        Ok(())
    }
}
