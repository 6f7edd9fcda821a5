//! Configuration loading for Genenet.
//! Reads genenet.toml from the current directory or the path in GENENET_CONFIG.
//!
//! Every field carries a default, so an empty file (or no file at all)
//! yields a working configuration.

use serde::{Deserialize, Serialize};
use std::path::Path;
use thiserror::Error;
use tracing::info;

pub const CONFIG_ENV_VAR: &str = "GENENET_CONFIG";
pub const DEFAULT_CONFIG_PATH: &str = "genenet.toml";

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("Config file not found: {0}")]
    NotFound(String),

    #[error("IO error reading config: {0}")]
    Io(#[from] std::io::Error),

    #[error("Invalid config: {0}")]
    Parse(#[from] toml::de::Error),

    #[error("Invalid value for {field}: {reason}")]
    Invalid { field: &'static str, reason: String },
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Config {
    #[serde(default)]
    pub server: ServerConfig,
    #[serde(default)]
    pub string_db: StringDbConfig,
    #[serde(default)]
    pub layout: LayoutConfig,
    #[serde(default)]
    pub dashboard: DashboardConfig,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ServerConfig {
    #[serde(default = "default_host")]
    pub host: String,
    #[serde(default = "default_port")]
    pub port: u16,
}

fn default_host() -> String { "127.0.0.1".to_string() }
fn default_port() -> u16    { 3001 }

impl Default for ServerConfig {
    fn default() -> Self {
        Self { host: default_host(), port: default_port() }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct StringDbConfig {
    /// Base URL of the STRING API; `/api/json/network` is appended.
    #[serde(default = "default_string_base_url")]
    pub base_url: String,
    /// NCBI taxon id sent as `species`.
    #[serde(default = "default_species")]
    pub species: u32,
    #[serde(default = "default_timeout_secs")]
    pub timeout_secs: u64,
    /// Number of distinct gene lists whose edges are kept in memory.
    #[serde(default = "default_cache_capacity")]
    pub cache_capacity: usize,
}

fn default_string_base_url() -> String { "https://string-db.org".to_string() }
fn default_species()         -> u32    { 9606 }
fn default_timeout_secs()    -> u64    { 30 }
fn default_cache_capacity()  -> usize  { 64 }

impl Default for StringDbConfig {
    fn default() -> Self {
        Self {
            base_url: default_string_base_url(),
            species: default_species(),
            timeout_secs: default_timeout_secs(),
            cache_capacity: default_cache_capacity(),
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LayoutConfig {
    #[serde(default = "default_seed")]
    pub seed: u64,
    #[serde(default = "default_iterations")]
    pub iterations: usize,
}

fn default_seed()       -> u64   { 42 }
fn default_iterations() -> usize { 50 }

impl Default for LayoutConfig {
    fn default() -> Self {
        Self { seed: default_seed(), iterations: default_iterations() }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DashboardConfig {
    #[serde(default = "default_genes")]
    pub default_genes: String,
    /// Rows shown in the edge preview table.
    #[serde(default = "default_preview_rows")]
    pub preview_rows: usize,
}

fn default_genes()        -> String { "FSHR, LHCGR, CYP19A1, ESR1, INHBA, GNRHR".to_string() }
fn default_preview_rows() -> usize  { 10 }

impl Default for DashboardConfig {
    fn default() -> Self {
        Self { default_genes: default_genes(), preview_rows: default_preview_rows() }
    }
}

#[cfg(test)]
mod tests;

impl Config {
    /// Load configuration.
    /// Checks GENENET_CONFIG first (the file must exist), then ./genenet.toml
    /// (falls back to defaults when absent).
    pub fn load() -> Result<Self, ConfigError> {
        match std::env::var(CONFIG_ENV_VAR) {
            Ok(path) => Self::load_from(&path),
            Err(_) if Path::new(DEFAULT_CONFIG_PATH).exists() => {
                Self::load_from(DEFAULT_CONFIG_PATH)
            }
            Err(_) => {
                info!("No {} found, using built-in defaults", DEFAULT_CONFIG_PATH);
                Ok(Self::default())
            }
        }
    }

    pub fn load_from(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        let path = path.as_ref();
        if !path.exists() {
            return Err(ConfigError::NotFound(path.display().to_string()));
        }
        let content = std::fs::read_to_string(path)?;
        let config = Self::from_toml_str(&content)?;
        info!(path = %path.display(), "Loaded configuration");
        Ok(config)
    }

    pub fn from_toml_str(content: &str) -> Result<Self, ConfigError> {
        let config: Config = toml::from_str(content)?;
        config.validate()?;
        Ok(config)
    }

    fn validate(&self) -> Result<(), ConfigError> {
        if self.string_db.cache_capacity == 0 {
            return Err(ConfigError::Invalid {
                field: "string_db.cache_capacity",
                reason: "must be at least 1".to_string(),
            });
        }
        if self.string_db.timeout_secs == 0 {
            return Err(ConfigError::Invalid {
                field: "string_db.timeout_secs",
                reason: "must be at least 1".to_string(),
            });
        }
        if self.layout.iterations == 0 {
            return Err(ConfigError::Invalid {
                field: "layout.iterations",
                reason: "must be at least 1".to_string(),
            });
        }
        Ok(())
    }

    /// `host:port` for the web server to bind.
    pub fn bind_addr(&self) -> String {
        format!("{}:{}", self.server.host, self.server.port)
    }
}
