use crate::dispatch::DEFAULT_MULTI_ENGINE_DELAY;
use crate::engines::PRIMARY_ENGINE_ID;
use crate::file_types::ALL_FILES_ID;
use crate::options::{DateFilter, ListingPlatform, SearchMode};
use crate::query::QueryLimits;
use anyhow::{Context, Result};
use log::debug;
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};
use std::time::Duration;

#[derive(Debug, Default, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    pub search: SearchConfig,
    pub limits: QueryLimits,
    pub dispatch: DispatchConfig,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct SearchConfig {
    pub default_engine: String,
    pub default_file_type: String,
    pub mode: SearchMode,
    pub date_filter: DateFilter,
    /// Engines used when multi-engine dispatch is requested without a list.
    pub engines: Vec<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub platform: Option<ListingPlatform>,
}

impl Default for SearchConfig {
    fn default() -> Self {
        Self {
            default_engine: PRIMARY_ENGINE_ID.to_string(),
            default_file_type: ALL_FILES_ID.to_string(),
            mode: SearchMode::default(),
            date_filter: DateFilter::default(),
            engines: Vec::new(),
            platform: None,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct DispatchConfig {
    pub multi_engine_delay_ms: u64,
    pub copy_url: bool,
}

impl Default for DispatchConfig {
    fn default() -> Self {
        Self {
            multi_engine_delay_ms: DEFAULT_MULTI_ENGINE_DELAY.as_millis() as u64,
            copy_url: false,
        }
    }
}

impl DispatchConfig {
    pub fn multi_engine_delay(&self) -> Duration {
        Duration::from_millis(self.multi_engine_delay_ms)
    }
}

impl Config {
    /// Load from the first config file found, or the defaults if none exists.
    pub fn load() -> Result<Self> {
        match Self::find_config_path() {
            Some(path) => Self::load_from(&path),
            None => Ok(Self::default()),
        }
    }

    pub fn load_from(path: &Path) -> Result<Self> {
        let content = fs::read_to_string(path)
            .with_context(|| format!("Failed to read config file: {}", path.display()))?;
        debug!("Loaded config from {}", path.display());
        Self::parse(&content)
            .with_context(|| format!("Failed to parse config file: {}", path.display()))
    }

    pub fn parse(content: &str) -> Result<Self> {
        toml::from_str(content).context("Invalid TOML")
    }

    fn find_config_path() -> Option<PathBuf> {
        if let Some(xdg_path) = Self::default_path() {
            if xdg_path.exists() {
                return Some(xdg_path);
            }
        }

        if let Some(home) = dirs::home_dir() {
            let home_path = home.join(".opendork.toml");
            if home_path.exists() {
                return Some(home_path);
            }
        }

        let current_path = Path::new(".opendork.toml");
        if current_path.exists() {
            return Some(current_path.to_path_buf());
        }

        None
    }

    /// `$XDG_CONFIG_HOME/opendork/config.toml` or the platform equivalent.
    pub fn default_path() -> Option<PathBuf> {
        dirs::config_dir().map(|dir| dir.join("opendork/config.toml"))
    }

    pub fn to_toml(&self) -> Result<String> {
        toml::to_string_pretty(self).context("Failed to serialize config")
    }

    pub fn save(&self, path: &Path) -> Result<()> {
        let content = self.to_toml()?;

        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent).with_context(|| {
                format!("Failed to create config directory: {}", parent.display())
            })?;
        }

        fs::write(path, content)
            .with_context(|| format!("Failed to write config file: {}", path.display()))?;

        Ok(())
    }
}
