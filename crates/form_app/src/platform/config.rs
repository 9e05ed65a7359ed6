use std::fs;
use std::path::{Path, PathBuf};
use std::time::Duration;

use form_core::DEFAULT_TITLE;
use form_engine::PostSettings;
use form_logging::LogDestination;
use log::LevelFilter;
use serde::{Deserialize, Serialize};

pub(crate) const DEFAULT_CONFIG_FILE: &str = "form.ron";

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub(crate) enum LogLevel {
    Off,
    Error,
    Warn,
    #[default]
    Info,
    Debug,
    Trace,
}

impl From<LogLevel> for LevelFilter {
    fn from(level: LogLevel) -> Self {
        match level {
            LogLevel::Off => LevelFilter::Off,
            LogLevel::Error => LevelFilter::Error,
            LogLevel::Warn => LevelFilter::Warn,
            LogLevel::Info => LevelFilter::Info,
            LogLevel::Debug => LevelFilter::Debug,
            LogLevel::Trace => LevelFilter::Trace,
        }
    }
}

/// Runtime settings. The endpoint is not among them; it is fixed at build time.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub(crate) struct AppConfig {
    pub default_title: String,
    pub log_destination: LogDestination,
    pub log_level: LogLevel,
    pub connect_timeout_secs: u64,
    pub request_timeout_secs: Option<u64>,
    pub max_response_bytes: u64,
}

impl Default for AppConfig {
    fn default() -> Self {
        let post = PostSettings::default();
        Self {
            default_title: DEFAULT_TITLE.to_string(),
            log_destination: LogDestination::File,
            log_level: LogLevel::Info,
            connect_timeout_secs: post.connect_timeout.as_secs(),
            request_timeout_secs: post.request_timeout.map(|timeout| timeout.as_secs()),
            max_response_bytes: post.max_bytes,
        }
    }
}

impl AppConfig {
    pub(crate) fn post_settings(&self) -> PostSettings {
        PostSettings {
            connect_timeout: Duration::from_secs(self.connect_timeout_secs),
            request_timeout: self.request_timeout_secs.map(Duration::from_secs),
            max_bytes: self.max_response_bytes,
            ..PostSettings::default()
        }
    }
}

#[derive(Debug, thiserror::Error)]
pub(crate) enum ConfigError {
    #[error("failed to read config {path:?}: {source}")]
    Read {
        path: PathBuf,
        source: std::io::Error,
    },
    #[error("failed to parse config {path:?}: {source}")]
    Parse {
        path: PathBuf,
        source: ron::error::SpannedError,
    },
}

/// Load the config at `path`. A missing file yields the defaults.
pub(crate) fn load(path: &Path) -> Result<AppConfig, ConfigError> {
    let content = match fs::read_to_string(path) {
        Ok(text) => text,
        Err(err) if err.kind() == std::io::ErrorKind::NotFound => {
            return Ok(AppConfig::default());
        }
        Err(source) => {
            return Err(ConfigError::Read {
                path: path.to_path_buf(),
                source,
            })
        }
    };

    ron::from_str(&content).map_err(|source| ConfigError::Parse {
        path: path.to_path_buf(),
        source,
    })
}
