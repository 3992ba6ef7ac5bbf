use std::path::Path;
use std::time::Duration;

use serde::{Deserialize, Serialize};

use crate::consts::{
    BASE_URL_ENV, DEFAULT_BASE_URL, DEFAULT_CONNECT_TIMEOUT_SECS, DEFAULT_EXPORT_FILE_NAME,
    DEFAULT_REQUEST_TIMEOUT_SECS,
};
use crate::error::{Result, SymscanError};

#[derive(Clone, Debug, Default, Serialize, Deserialize, PartialEq)]
pub struct AppConfig {
    #[serde(default)]
    pub service: ServiceConfig,
    #[serde(default)]
    pub export: ExportConfig,
}

/// Where the detection backend lives and how long to wait for it.
#[derive(Clone, Debug, Serialize, Deserialize, PartialEq)]
pub struct ServiceConfig {
    #[serde(default = "default_base_url")]
    pub base_url: String,
    #[serde(default = "default_request_timeout")]
    pub request_timeout_secs: u64,
    #[serde(default = "default_connect_timeout")]
    pub connect_timeout_secs: u64,
}

#[derive(Clone, Debug, Serialize, Deserialize, PartialEq)]
pub struct ExportConfig {
    #[serde(default = "default_export_file_name")]
    pub file_name: String,
}

fn default_base_url() -> String {
    DEFAULT_BASE_URL.to_string()
}

fn default_request_timeout() -> u64 {
    DEFAULT_REQUEST_TIMEOUT_SECS
}

fn default_connect_timeout() -> u64 {
    DEFAULT_CONNECT_TIMEOUT_SECS
}

fn default_export_file_name() -> String {
    DEFAULT_EXPORT_FILE_NAME.to_string()
}

impl Default for ServiceConfig {
    fn default() -> Self {
        Self {
            base_url: default_base_url(),
            request_timeout_secs: default_request_timeout(),
            connect_timeout_secs: default_connect_timeout(),
        }
    }
}

impl Default for ExportConfig {
    fn default() -> Self {
        Self {
            file_name: default_export_file_name(),
        }
    }
}

impl ServiceConfig {
    pub fn request_timeout(&self) -> Duration {
        Duration::from_secs(self.request_timeout_secs)
    }

    pub fn connect_timeout(&self) -> Duration {
        Duration::from_secs(self.connect_timeout_secs)
    }
}

impl AppConfig {
    /// Parse a TOML document. Missing sections fall back to defaults.
    pub fn from_toml_str(contents: &str) -> Result<Self> {
        toml::from_str(contents).map_err(|e| SymscanError::Config(e.to_string()))
    }

    pub fn from_file(path: &Path) -> Result<Self> {
        let contents = std::fs::read_to_string(path)?;
        Self::from_toml_str(&contents)
    }

    pub fn to_toml_string(&self) -> Result<String> {
        toml::to_string_pretty(self).map_err(|e| SymscanError::Config(e.to_string()))
    }

    /// Load from an optional file, then apply the base URL environment override.
    pub fn load(path: Option<&Path>) -> Result<Self> {
        let mut config = match path {
            Some(p) => Self::from_file(p)?,
            None => Self::default(),
        };
        if let Ok(url) = std::env::var(BASE_URL_ENV) {
            config.apply_base_url_override(&url);
        }
        Ok(config)
    }

    /// Blank overrides are ignored.
    pub fn apply_base_url_override(&mut self, url: &str) {
        let url = url.trim();
        if !url.is_empty() {
            self.service.base_url = url.to_string();
        }
    }
}
