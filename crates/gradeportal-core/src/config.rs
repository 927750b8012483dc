//! Application configuration management.
//!
//! This module handles loading the application configuration,
//! which includes the header title, the support contact shown under the
//! login form and an optional storage directory override.
//!
//! Configuration is stored at `~/.config/gradeportal/config.json`.

use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};

/// Application name used for config/data directory paths
const APP_NAME: &str = "gradeportal";

/// Config file name
const CONFIG_FILE: &str = "config.json";

/// Environment variable that overrides the storage directory
pub const STORAGE_DIR_ENV: &str = "GRADEPORTAL_STORAGE_DIR";

pub const DEFAULT_PORTAL_TITLE: &str = "Bennett University";
pub const DEFAULT_SUPPORT_CONTACT: &str = "support@bennett.edu.in";

#[derive(Debug, Clone, Serialize, Deserialize, Default, PartialEq, Eq)]
pub struct Config {
    pub portal_title: Option<String>,
    pub support_contact: Option<String>,
    pub storage_dir: Option<PathBuf>,
}

impl Config {
    pub fn load() -> Result<Self> {
        Self::load_from(&Self::config_path()?)
    }

    pub fn load_from(path: &Path) -> Result<Self> {
        if path.exists() {
            let contents = std::fs::read_to_string(path)
                .with_context(|| format!("Failed to read config file {}", path.display()))?;
            serde_json::from_str(&contents)
                .with_context(|| format!("Failed to parse config file {}", path.display()))
        } else {
            Ok(Self::default())
        }
    }

    fn config_path() -> Result<PathBuf> {
        let config_dir = dirs::config_dir()
            .ok_or_else(|| anyhow::anyhow!("Could not find config directory"))?;
        Ok(config_dir.join(APP_NAME).join(CONFIG_FILE))
    }

    pub fn portal_title(&self) -> &str {
        self.portal_title.as_deref().unwrap_or(DEFAULT_PORTAL_TITLE)
    }

    pub fn support_contact(&self) -> &str {
        self.support_contact.as_deref().unwrap_or(DEFAULT_SUPPORT_CONTACT)
    }

    /// Directory holding the session storage file and logs.
    ///
    /// Precedence: `GRADEPORTAL_STORAGE_DIR`, then the config file, then the
    /// platform data directory.
    pub fn storage_dir(&self) -> Result<PathBuf> {
        self.resolve_storage_dir(std::env::var_os(STORAGE_DIR_ENV).map(PathBuf::from))
    }

    fn resolve_storage_dir(&self, env_override: Option<PathBuf>) -> Result<PathBuf> {
        if let Some(dir) = env_override.filter(|d| !d.as_os_str().is_empty()) {
            return Ok(dir);
        }
        if let Some(ref dir) = self.storage_dir {
            return Ok(dir.clone());
        }
        let data_dir = dirs::data_dir()
            .ok_or_else(|| anyhow::anyhow!("Could not find data directory"))?;
        Ok(data_dir.join(APP_NAME))
    }
}
