//! Configuration management for Cinescope

use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

use crate::error::{ConfigError, Result};
use crate::types::{BackdropSize, PosterSize};

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Config {
    #[serde(default)]
    pub catalog: CatalogConfig,
    #[serde(default)]
    pub booking: BookingConfig,
}

/// Connection settings for the remote catalog API
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CatalogConfig {
    #[serde(default = "default_base_url")]
    pub base_url: String,
    #[serde(default)]
    pub api_key: String,
    #[serde(default = "default_image_base_url")]
    pub image_base_url: String,
    #[serde(default = "default_language")]
    pub language: String,
    #[serde(default = "default_region")]
    pub region: String,
}

/// Pricing for the mocked booking flow
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct BookingConfig {
    #[serde(default = "default_regular_price")]
    pub regular_price: u32,
    #[serde(default = "default_vip_price")]
    pub vip_price: u32,
    /// Zero-based row index from which seats are VIP
    #[serde(default = "default_vip_row_start")]
    pub vip_row_start: usize,
    #[serde(default = "default_currency")]
    pub currency: String,
}

fn default_base_url() -> String {
    "https://api.themoviedb.org/3".to_string()
}

fn default_image_base_url() -> String {
    "https://image.tmdb.org/t/p".to_string()
}

fn default_language() -> String {
    "en-US".to_string()
}

fn default_region() -> String {
    "US".to_string()
}

fn default_regular_price() -> u32 {
    50
}

fn default_vip_price() -> u32 {
    150
}

fn default_vip_row_start() -> usize {
    8
}

fn default_currency() -> String {
    "USD".to_string()
}

impl Default for CatalogConfig {
    fn default() -> Self {
        Self {
            base_url: default_base_url(),
            api_key: String::new(),
            image_base_url: default_image_base_url(),
            language: default_language(),
            region: default_region(),
        }
    }
}

impl Default for BookingConfig {
    fn default() -> Self {
        Self {
            regular_price: default_regular_price(),
            vip_price: default_vip_price(),
            vip_row_start: default_vip_row_start(),
            currency: default_currency(),
        }
    }
}

impl Default for Config {
    fn default() -> Self {
        Self {
            catalog: CatalogConfig::default(),
            booking: BookingConfig::default(),
        }
    }
}

impl CatalogConfig {
    /// Build a poster image URL from a path returned by the catalog.
    ///
    /// An empty or missing path yields `None` (the catalog nulls out image
    /// paths for some titles).
    pub fn poster_url(&self, path: Option<&str>, size: PosterSize) -> Option<String> {
        self.image_url(path, size.as_str())
    }

    /// Build a backdrop image URL from a path returned by the catalog
    pub fn backdrop_url(&self, path: Option<&str>, size: BackdropSize) -> Option<String> {
        self.image_url(path, size.as_str())
    }

    fn image_url(&self, path: Option<&str>, size: &str) -> Option<String> {
        match path {
            Some(p) if !p.is_empty() => Some(format!("{}/{}{}", self.image_base_url, size, p)),
            _ => None,
        }
    }
}

impl Config {
    /// Load configuration from the default location.
    ///
    /// Missing file is not an error: the defaults are complete apart from
    /// the API key, which can come from `CINESCOPE_API_KEY`.
    pub fn load() -> Result<Self> {
        let config_path = resolve_config_path()?;
        if config_path.exists() {
            Self::load_from_path(&config_path)
        } else {
            Ok(Self::default().with_env_overrides())
        }
    }

    /// Load configuration from a specific path
    pub fn load_from_path(path: &Path) -> Result<Self> {
        let content = std::fs::read_to_string(path).map_err(ConfigError::ReadError)?;
        let config: Config = toml::from_str(&content).map_err(ConfigError::ParseError)?;
        Ok(config.with_env_overrides())
    }

    /// Apply environment overrides (currently only the API key)
    fn with_env_overrides(mut self) -> Self {
        if let Ok(key) = std::env::var("CINESCOPE_API_KEY") {
            if !key.is_empty() {
                self.catalog.api_key = key;
            }
        }
        self
    }

    /// Fail unless an API key has been provided via file or environment
    pub fn require_api_key(&self) -> Result<()> {
        if self.catalog.api_key.is_empty() {
            return Err(ConfigError::MissingField("catalog.api_key".to_string()).into());
        }
        Ok(())
    }
}

/// Resolve the configuration file path following XDG Base Directory spec
pub fn resolve_config_path() -> Result<PathBuf> {
    if let Ok(path) = std::env::var("CINESCOPE_CONFIG") {
        return Ok(PathBuf::from(shellexpand::tilde(&path).to_string()));
    }

    let config_dir = dirs::config_dir()
        .ok_or_else(|| ConfigError::MissingField("config directory".to_string()))?;

    Ok(config_dir.join("cinescope").join("config.toml"))
}
