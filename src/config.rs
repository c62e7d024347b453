use std::path::{Path, PathBuf};

use serde::Deserialize;

use crate::error::AppError;

/// Top-level config. Every field has a default and unknown keys are ignored.
#[derive(Debug, Clone, Deserialize, Default, PartialEq)]
#[serde(default)]
pub struct Config {
    pub http: HttpConfig,
    pub ui: UiConfig,
    pub log: LogConfig,
}

#[derive(Debug, Clone, Deserialize, PartialEq)]
#[serde(default)]
pub struct HttpConfig {
    /// Timeout in seconds. 0 = no timeout.
    pub timeout_secs: u64,
    pub user_agent: String,
    pub follow_redirects: bool,
}

#[derive(Debug, Clone, Deserialize, PartialEq)]
#[serde(default)]
pub struct UiConfig {
    /// Share of the free height given to the request editor.
    pub editor_height_percent: u16,
}

#[derive(Debug, Clone, Deserialize, PartialEq)]
#[serde(default)]
pub struct LogConfig {
    /// `env_logger` filter, overridden by `COURIER_LOG`.
    pub level: String,
    pub file: Option<PathBuf>,
}

impl Default for HttpConfig {
    fn default() -> Self {
        Self {
            timeout_secs: 30,
            user_agent: format!("courier/{}", env!("CARGO_PKG_VERSION")),
            follow_redirects: true,
        }
    }
}

impl Default for UiConfig {
    fn default() -> Self {
        Self { editor_height_percent: 35 }
    }
}

impl Default for LogConfig {
    fn default() -> Self {
        Self { level: "info".to_string(), file: None }
    }
}

/// `<config_dir>/courier/config.toml`
pub fn default_path() -> Option<PathBuf> {
    dirs::config_dir().map(|d| d.join("courier").join("config.toml"))
}

impl Config {
    /// Load from the default location; defaults when there is no config dir
    /// or no file.
    pub fn load() -> Result<Self, AppError> {
        match default_path() {
            Some(path) => Self::load_from(&path),
            None => Ok(Self::default()),
        }
    }

    pub fn load_from(path: &Path) -> Result<Self, AppError> {
        if !path.exists() {
            return Ok(Self::default());
        }
        let content = std::fs::read_to_string(path)?;
        let mut config: Config = toml::from_str(&content)?;
        config.ui.editor_height_percent = config.ui.editor_height_percent.clamp(10, 90);
        Ok(config)
    }

    pub fn log_file(&self) -> PathBuf {
        self.log.file.clone().unwrap_or_else(|| {
            dirs::data_dir()
                .unwrap_or_else(|| PathBuf::from("."))
                .join("courier")
                .join("courier.log")
        })
    }
}
