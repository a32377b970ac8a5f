use std::fs;
use std::io;
use std::path::{Path, PathBuf};
use std::time::Duration;

use dashboard_core::Location;
use dashboard_engine::PollSettings;
use dashboard_logging::dash_warn;
use serde::{Deserialize, Serialize};
use thiserror::Error;

use super::logging::LogDestination;

pub const DEFAULT_CONFIG_PATH: &str = "dashboard.ron";

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("failed to read config {path:?}: {source}")]
    Read {
        path: PathBuf,
        #[source]
        source: io::Error,
    },
    #[error("failed to parse config {path:?}: {source}")]
    Parse {
        path: PathBuf,
        #[source]
        source: ron::error::SpannedError,
    },
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct DashboardConfig {
    pub api_base_url: String,
    /// Empty disables polling; statuses can then be fed with `status <VALUE>`.
    pub model_uuid: String,
    pub poll_interval_ms: u64,
    pub connect_timeout_ms: u64,
    pub request_timeout_ms: u64,
    pub max_payload_bytes: u64,
    pub initial_location: Option<String>,
    pub log_destination: LogDestination,
    pub state_dir: PathBuf,
}

impl Default for DashboardConfig {
    fn default() -> Self {
        Self {
            api_base_url: "http://localhost:9000".to_string(),
            model_uuid: String::new(),
            poll_interval_ms: 3_000,
            connect_timeout_ms: 5_000,
            request_timeout_ms: 10_000,
            max_payload_bytes: 8 * 1024 * 1024,
            initial_location: None,
            log_destination: LogDestination::File,
            state_dir: PathBuf::from("."),
        }
    }
}

impl DashboardConfig {
    /// Reads `path`. A missing file is not an error: defaults are used.
    pub fn load(path: &Path) -> Result<Self, ConfigError> {
        let content = match fs::read_to_string(path) {
            Ok(text) => text,
            Err(err) if err.kind() == io::ErrorKind::NotFound => {
                dash_warn!("config {:?} not found, using defaults", path);
                return Ok(Self::default());
            }
            Err(source) => {
                return Err(ConfigError::Read {
                    path: path.to_path_buf(),
                    source,
                })
            }
        };
        Self::parse(path, &content)
    }

    fn parse(path: &Path, content: &str) -> Result<Self, ConfigError> {
        ron::from_str(content).map_err(|source| ConfigError::Parse {
            path: path.to_path_buf(),
            source,
        })
    }

    pub fn poll_settings(&self) -> Option<PollSettings> {
        let model_uuid = self.model_uuid.trim();
        if model_uuid.is_empty() {
            return None;
        }
        Some(PollSettings {
            interval: Duration::from_millis(self.poll_interval_ms),
            connect_timeout: Duration::from_millis(self.connect_timeout_ms),
            request_timeout: Duration::from_millis(self.request_timeout_ms),
            max_bytes: self.max_payload_bytes,
            ..PollSettings::for_model(&self.api_base_url, model_uuid)
        })
    }

    /// Address to open when nothing was persisted from a previous run.
    pub fn initial_location(&self) -> Location {
        match &self.initial_location {
            Some(href) => Location::parse(href),
            None => Location::parse(&format!("/models/{}/reference", self.model_uuid.trim())),
        }
    }
}
