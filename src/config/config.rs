use std::env;
use std::fs;
use std::path::{Path, PathBuf};
use serde::{Deserialize, Serialize};

use crate::constants::{CONFIG_FILE, DEFAULT_BIND, DEFAULT_TIMEOUT_MS, GITHUB_API_URL, TOKEN_ENV_VAR};
use crate::error::{GridError, GridResult};

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Config {
    pub github_token: Option<String>,
    #[serde(default = "default_bind")]
    pub bind: String,
    #[serde(default = "default_api_url")]
    pub api_url: String,
    #[serde(default = "default_timeout_ms")]
    pub request_timeout_ms: u64,
}

fn default_bind() -> String {
    DEFAULT_BIND.to_string()
}

fn default_api_url() -> String {
    GITHUB_API_URL.to_string()
}

fn default_timeout_ms() -> u64 {
    DEFAULT_TIMEOUT_MS
}

impl Default for Config {
    fn default() -> Self {
        Config {
            github_token: None,
            bind: default_bind(),
            api_url: default_api_url(),
            request_timeout_ms: default_timeout_ms(),
        }
    }
}

pub fn config_path() -> Option<PathBuf> {
    dirs::home_dir().map(|home| home.join(CONFIG_FILE))
}

pub fn load_config() -> Config {
    match config_path() {
        Some(path) => load_config_from(&path),
        None => Config::default(),
    }
}

/// Read a config file, falling back to defaults when it is missing or unreadable.
pub fn load_config_from(path: &Path) -> Config {
    if !path.exists() {
        return Config::default();
    }

    fs::read_to_string(path)
        .ok()
        .and_then(|config_str| serde_json::from_str(&config_str).ok())
        .unwrap_or_default()
}

pub fn save_config(config: &Config) -> GridResult<()> {
    let path = config_path()
        .ok_or_else(|| GridError::ConfigError("Could not find home directory".to_string()))?;
    save_config_to(config, &path)
}

pub fn save_config_to(config: &Config, path: &Path) -> GridResult<()> {
    let config_str = serde_json::to_string_pretty(config)?;
    fs::write(path, config_str)?;
    Ok(())
}

pub fn get_github_token() -> GridResult<String> {
    // First check environment variable
    if let Ok(token) = env::var(TOKEN_ENV_VAR) {
        if !token.trim().is_empty() {
            return Ok(token);
        }
    }

    // Then check config file
    load_config()
        .github_token
        .filter(|token| !token.trim().is_empty())
        .ok_or(GridError::TokenNotFound)
}
