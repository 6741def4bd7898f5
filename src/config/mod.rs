//! Configuration file for mm-inactive
//!
//! An optional YAML file supplying connection defaults, so the token does
//! not have to appear on the command line or in the environment.

use std::path::{Path, PathBuf};

use serde::Deserialize;

use crate::client::pagination::{DEFAULT_PAGE_SIZE, MAX_PAGE_SIZE};
use crate::error::{ConfigError, Result};

/// Application configuration
#[derive(Debug, Clone, Default, Deserialize)]
pub struct Config {
    /// Mattermost host name (without scheme)
    #[serde(default)]
    pub url: Option<String>,

    /// TCP port; quoted or bare numbers are both accepted
    #[serde(default, deserialize_with = "port_from_yaml")]
    pub port: Option<String>,

    /// `http` or `https`
    #[serde(default)]
    pub scheme: Option<String>,

    /// Access token
    #[serde(default)]
    pub token: Option<String>,

    /// User preferences
    #[serde(default)]
    pub preferences: Preferences,
}

/// User preferences
#[derive(Debug, Clone, Deserialize)]
pub struct Preferences {
    /// Users requested per page
    #[serde(default = "default_page_size")]
    pub page_size: usize,
}

fn default_page_size() -> usize {
    DEFAULT_PAGE_SIZE
}

impl Default for Preferences {
    fn default() -> Self {
        Self {
            page_size: default_page_size(),
        }
    }
}

fn port_from_yaml<'de, D>(deserializer: D) -> std::result::Result<Option<String>, D::Error>
where
    D: serde::Deserializer<'de>,
{
    #[derive(Deserialize)]
    #[serde(untagged)]
    enum Port {
        Number(u64),
        Text(String),
    }

    Ok(Option::<Port>::deserialize(deserializer)?.map(|p| match p {
        Port::Number(n) => n.to_string(),
        Port::Text(s) => s,
    }))
}

impl Config {
    /// Get the default config file path
    pub fn default_path() -> Result<PathBuf> {
        let home = dirs::home_dir().ok_or(ConfigError::Invalid(
            "Could not determine home directory".to_string(),
        ))?;

        Ok(home.join(".mm-inactive").join("config.yaml"))
    }

    /// Load configuration from an explicit path, or the default location.
    ///
    /// An explicit path must exist. A missing default file yields an empty
    /// configuration.
    pub fn load_at(path: Option<&str>) -> Result<Self> {
        match path {
            Some(p) => Self::load_from(Path::new(p)),
            None => {
                let default = Self::default_path()?;
                if default.exists() {
                    Self::load_from(&default)
                } else {
                    Ok(Self::default())
                }
            }
        }
    }

    /// Load configuration from a specific path
    pub fn load_from(path: &Path) -> Result<Self> {
        if !path.exists() {
            return Err(ConfigError::NotFound(path.to_path_buf()).into());
        }

        let contents = std::fs::read_to_string(path)?;
        // An empty file is a valid, empty configuration
        if contents.trim().is_empty() {
            return Ok(Self::default());
        }

        let config: Config = serde_yaml::from_str(&contents).map_err(ConfigError::from)?;
        config.validate()?;

        Ok(config)
    }

    /// Check values that can be validated without the command line.
    pub fn validate(&self) -> Result<()> {
        let size = self.preferences.page_size;
        if size == 0 || size > MAX_PAGE_SIZE {
            return Err(ConfigError::Invalid(format!(
                "preferences.page_size must be between 1 and {}, got {}",
                MAX_PAGE_SIZE, size
            ))
            .into());
        }
        Ok(())
    }
}
