use crate::error::{DirectoryError, Result};
use crate::source::http::DEFAULT_BASE_URL;
use crate::viewmodel::PageSize;
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::Path;
use std::time::Duration;

const CONFIG_FILENAME: &str = "config.json";
const DEFAULT_PAGE_SIZE: usize = 5;
const DEFAULT_TIMEOUT_SECS: u64 = 10;
/// Longest accepted request timeout: one day.
pub const MAX_TIMEOUT_SECS: u64 = 24 * 60 * 60;

/// Keys accepted by [`DirectoryConfig::get`] and [`DirectoryConfig::set`], in display order.
pub const CONFIG_KEYS: &[&str] = &["base-url", "page-size", "timeout-secs"];

/// Configuration for userdir, stored as config.json in the config directory
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "kebab-case")]
pub struct DirectoryConfig {
    /// Root of the REST endpoint; users live under `{base_url}/users`
    #[serde(default = "default_base_url")]
    pub base_url: String,

    /// Rows per page in the list view
    #[serde(default = "default_page_size")]
    pub page_size: usize,

    /// Request timeout for HTTP fetches
    #[serde(default = "default_timeout_secs")]
    pub timeout_secs: u64,
}

fn default_base_url() -> String {
    DEFAULT_BASE_URL.to_string()
}

fn default_page_size() -> usize {
    DEFAULT_PAGE_SIZE
}

fn default_timeout_secs() -> u64 {
    DEFAULT_TIMEOUT_SECS
}

impl Default for DirectoryConfig {
    fn default() -> Self {
        Self {
            base_url: default_base_url(),
            page_size: DEFAULT_PAGE_SIZE,
            timeout_secs: DEFAULT_TIMEOUT_SECS,
        }
    }
}

impl DirectoryConfig {
    /// Load config from the given directory, or return defaults if not found
    pub fn load<P: AsRef<Path>>(config_dir: P) -> Result<Self> {
        let config_path = config_dir.as_ref().join(CONFIG_FILENAME);

        if !config_path.exists() {
            return Ok(Self::default());
        }

        let content = fs::read_to_string(&config_path)?;
        let config: DirectoryConfig = serde_json::from_str(&content)?;
        config.validate()?;
        Ok(config)
    }

    /// Save config to the given directory
    pub fn save<P: AsRef<Path>>(&self, config_dir: P) -> Result<()> {
        let config_dir = config_dir.as_ref();

        if !config_dir.exists() {
            fs::create_dir_all(config_dir)?;
        }

        let config_path = config_dir.join(CONFIG_FILENAME);
        let content = serde_json::to_string_pretty(self)?;
        fs::write(config_path, content)?;
        Ok(())
    }

    pub fn page_size(&self) -> PageSize {
        PageSize::new(self.page_size).unwrap_or_default()
    }

    pub fn timeout(&self) -> Duration {
        Duration::from_secs(self.timeout_secs)
    }

    pub fn get(&self, key: &str) -> Option<String> {
        match key {
            "base-url" => Some(self.base_url.clone()),
            "page-size" => Some(self.page_size.to_string()),
            "timeout-secs" => Some(self.timeout_secs.to_string()),
            _ => None,
        }
    }

    pub fn set(&mut self, key: &str, value: &str) -> Result<()> {
        match key {
            "base-url" => {
                let trimmed = value.trim().trim_end_matches('/');
                if !(trimmed.starts_with("http://") || trimmed.starts_with("https://")) {
                    return Err(DirectoryError::Config(format!(
                        "base-url must start with http:// or https://, got '{}'",
                        value
                    )));
                }
                self.base_url = trimmed.to_string();
            }
            "page-size" => self.page_size = parse_positive(key, value)? as usize,
            "timeout-secs" => {
                let secs = parse_positive(key, value)?;
                check_timeout(secs)?;
                self.timeout_secs = secs;
            }
            _ => {
                return Err(DirectoryError::Config(format!(
                    "Unknown config key: {}",
                    key
                )))
            }
        }
        Ok(())
    }

    /// All keys with their current values, in display order.
    pub fn list_all(&self) -> Vec<(&'static str, String)> {
        CONFIG_KEYS
            .iter()
            .filter_map(|key| self.get(key).map(|value| (*key, value)))
            .collect()
    }

    fn validate(&self) -> Result<()> {
        if self.page_size == 0 {
            return Err(DirectoryError::Config("page-size must be at least 1".into()));
        }
        if self.timeout_secs == 0 {
            return Err(DirectoryError::Config(
                "timeout-secs must be at least 1".into(),
            ));
        }
        check_timeout(self.timeout_secs)
    }
}

fn check_timeout(secs: u64) -> Result<()> {
    if secs > MAX_TIMEOUT_SECS {
        return Err(DirectoryError::Config(format!(
            "timeout-secs must be at most {}, got {}",
            MAX_TIMEOUT_SECS, secs
        )));
    }
    Ok(())
}

fn parse_positive(key: &str, value: &str) -> Result<u64> {
    match value.trim().parse::<u64>() {
        Ok(n) if n > 0 => Ok(n),
        _ => Err(DirectoryError::Config(format!(
            "{} must be a positive integer, got '{}'",
            key, value
        ))),
    }
}
