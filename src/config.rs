// src/config.rs
//! Pipeline configuration: optional TOML file, env overrides, compiled
//! defaults. Selector lists and the normalization sequence are fixed
//! constants in `extract`, not configuration.

use anyhow::{Context, Result};
use serde::Deserialize;
use std::path::{Path, PathBuf};

pub const DEFAULT_CONFIG_PATH: &str = "config/trainset.toml";
pub const DEFAULT_CACHE_PATH: &str = "trainingset-urls-cache.json";
pub const DEFAULT_TIMEOUT_SECS: u64 = 3;
pub const DEFAULT_USER_AGENT: &str = concat!("trainset-builder/", env!("CARGO_PKG_VERSION"));

pub const ENV_CONFIG_PATH: &str = "TRAINSET_CONFIG_PATH";
pub const ENV_CACHE_PATH: &str = "TRAINSET_CACHE_PATH";
pub const ENV_TIMEOUT_SECS: &str = "TRAINSET_TIMEOUT_SECS";

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PipelineConfig {
    /// Per-request timeout. There is no retry; a timeout drops the record.
    pub timeout_secs: u64,
    pub cache_path: PathBuf,
    pub user_agent: String,
}

impl Default for PipelineConfig {
    fn default() -> Self {
        Self {
            timeout_secs: DEFAULT_TIMEOUT_SECS,
            cache_path: PathBuf::from(DEFAULT_CACHE_PATH),
            user_agent: DEFAULT_USER_AGENT.to_string(),
        }
    }
}

/// On-disk shape; every key optional.
#[derive(Debug, Default, Deserialize)]
struct FileConfig {
    timeout_secs: Option<u64>,
    cache_path: Option<PathBuf>,
    user_agent: Option<String>,
}

impl PipelineConfig {
    /// Load order:
    /// 1) $TRAINSET_CONFIG_PATH (must exist when set)
    /// 2) config/trainset.toml, if present
    /// 3) compiled defaults
    /// then $TRAINSET_CACHE_PATH / $TRAINSET_TIMEOUT_SECS override the result.
    pub fn load() -> Result<Self> {
        let file = match std::env::var(ENV_CONFIG_PATH) {
            Ok(p) => {
                let pb = PathBuf::from(p);
                if !pb.exists() {
                    anyhow::bail!("{ENV_CONFIG_PATH} points to non-existent path");
                }
                read_file(&pb)?
            }
            Err(_) => {
                let default = PathBuf::from(DEFAULT_CONFIG_PATH);
                if default.exists() {
                    read_file(&default)?
                } else {
                    FileConfig::default()
                }
            }
        };

        let mut cfg = PipelineConfig::default();
        if let Some(t) = file.timeout_secs.filter(|t| *t > 0) {
            cfg.timeout_secs = t;
        }
        if let Some(p) = file.cache_path {
            cfg.cache_path = p;
        }
        if let Some(ua) = file.user_agent {
            cfg.user_agent = ua;
        }

        if let Ok(p) = std::env::var(ENV_CACHE_PATH) {
            cfg.cache_path = PathBuf::from(p);
        }
        if let Some(t) = parse_secs_env(std::env::var(ENV_TIMEOUT_SECS).ok()) {
            cfg.timeout_secs = t;
        }

        Ok(cfg)
    }
}

fn read_file(path: &Path) -> Result<FileConfig> {
    let content = std::fs::read_to_string(path)
        .with_context(|| format!("reading config from {}", path.display()))?;
    toml::from_str(&content).with_context(|| format!("parsing config from {}", path.display()))
}

// parse optional secs env; zero and garbage are ignored
fn parse_secs_env(raw: Option<String>) -> Option<u64> {
    raw.and_then(|s| s.trim().parse::<u64>().ok()).filter(|v| *v > 0)
}
