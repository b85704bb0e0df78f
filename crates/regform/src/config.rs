// File: src/config.rs
// Purpose: Configuration parsing from regform.toml

use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::Path;

use crate::persistence::DEFAULT_STORAGE_KEY;

/// Application configuration
#[derive(Debug, Clone, Serialize, Deserialize, Default)]
pub struct Config {
    #[serde(default)]
    pub form: FormConfig,

    #[serde(default)]
    pub server: ServerConfig,
}

/// Form behavior, shared with the browser through data attributes
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FormConfig {
    /// `localStorage` key holding the in-progress record (default: "formData")
    #[serde(default = "default_storage_key")]
    pub storage_key: String,

    /// Hide a field's error until it has been touched (default: true)
    #[serde(default = "default_true")]
    pub gate_errors_on_touch: bool,
}

/// Development server configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ServerConfig {
    #[serde(default = "default_host")]
    pub host: String,

    #[serde(default = "default_port")]
    pub port: u16,

    /// Directory holding the wasm-pack output, served under /pkg
    #[serde(default = "default_pkg_dir")]
    pub pkg_dir: String,
}

// Default values
fn default_storage_key() -> String {
    DEFAULT_STORAGE_KEY.to_string()
}

fn default_host() -> String {
    "127.0.0.1".to_string()
}

fn default_port() -> u16 {
    3000
}

fn default_pkg_dir() -> String {
    "pkg".to_string()
}

fn default_true() -> bool {
    true
}

impl Default for FormConfig {
    fn default() -> Self {
        Self {
            storage_key: default_storage_key(),
            gate_errors_on_touch: true,
        }
    }
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            host: default_host(),
            port: default_port(),
            pkg_dir: default_pkg_dir(),
        }
    }
}

impl Config {
    /// Load configuration from a TOML file
    pub fn load(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();

        // If file doesn't exist, return default config
        if !path.exists() {
            return Ok(Self::default());
        }

        let content = fs::read_to_string(path)
            .with_context(|| format!("Failed to read config file: {:?}", path))?;

        if content.trim().is_empty() {
            return Ok(Self::default());
        }

        let config: Config = toml::from_str(&content)
            .with_context(|| format!("Failed to parse config file: {:?}", path))?;

        Ok(config)
    }

    /// Load configuration from default path (./regform.toml)
    pub fn load_default() -> Result<Self> {
        Self::load("regform.toml")
    }

    /// Address the development server binds to
    pub fn bind_addr(&self) -> String {
        format!("{}:{}", self.server.host, self.server.port)
    }
}
