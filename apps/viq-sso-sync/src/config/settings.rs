//! Tool settings loaded from config.json and the environment

use std::path::PathBuf;

use serde::{Deserialize, Serialize};

use super::{ConfigPaths, DEFAULT_API_URL, DEFAULT_SHEET_FILE};
use crate::error::{CliError, CliResult};

/// Runtime settings for the sync tool
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    /// Base URL of the platform API
    pub api_url: String,
    /// HTTP request timeout in seconds
    pub timeout_secs: u64,
    /// Sheet file holding exported user accounts
    pub sheet_file: PathBuf,
    /// Rows requested per page
    pub page_size: u32,
    /// Upper bound on pages fetched from one endpoint
    pub max_pages: u32,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            api_url: DEFAULT_API_URL.to_string(),
            timeout_secs: 30,
            sheet_file: PathBuf::from(DEFAULT_SHEET_FILE),
            page_size: 100,
            max_pages: 10_000,
        }
    }
}

impl Config {
    /// Load settings from `config.json` (if present), then apply
    /// environment overrides.
    pub fn load(paths: &ConfigPaths) -> CliResult<Self> {
        let mut config = if paths.config_file.exists() {
            let content = std::fs::read_to_string(&paths.config_file)?;
            serde_json::from_str::<Config>(&content).map_err(|e| {
                CliError::Config(format!(
                    "Invalid config file {}: {e}",
                    paths.config_file.display()
                ))
            })?
        } else {
            Config::default()
        };

        config.apply_env();
        config.validate()?;
        Ok(config)
    }

    fn apply_env(&mut self) {
        if let Ok(url) = std::env::var("VIQ_SYNC_API_URL") {
            if !url.trim().is_empty() {
                self.api_url = url;
            }
        }
        if let Ok(file) = std::env::var("VIQ_SYNC_SHEET_FILE") {
            if !file.trim().is_empty() {
                self.sheet_file = PathBuf::from(file);
            }
        }
    }

    /// Reject settings that would make every request fail
    pub fn validate(&self) -> CliResult<()> {
        if self.page_size == 0 {
            return Err(CliError::Config("page_size must be at least 1".to_string()));
        }
        if self.max_pages == 0 {
            return Err(CliError::Config("max_pages must be at least 1".to_string()));
        }
        if !self.api_url.starts_with("http://") && !self.api_url.starts_with("https://") {
            return Err(CliError::Config(format!(
                "api_url must be an http(s) URL, got '{}'",
                self.api_url
            )));
        }
        Ok(())
    }

    /// Join an endpoint path onto the API base URL
    pub fn endpoint(&self, path: &str) -> String {
        format!("{}{}", self.api_url.trim_end_matches('/'), path)
    }
}
