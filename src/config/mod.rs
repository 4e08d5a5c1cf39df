use crate::errors::{AppError, AppResult};
use crate::models::DayId;
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};
use tracing::{debug, info};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum WeekStart {
    #[default]
    Sunday,
    Monday,
}

impl WeekStart {
    pub fn day_id(self) -> DayId {
        match self {
            WeekStart::Sunday => DayId::SUNDAY,
            WeekStart::Monday => DayId::MONDAY,
        }
    }
}

/// Text shown for each presentation state.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Labels {
    pub closed: String,
    pub closed_today: String,
    pub open_all_day: String,
    pub open_now: String,
    pub closed_now: String,
}

impl Default for Labels {
    fn default() -> Self {
        Self {
            closed: "Closed".to_string(),
            closed_today: "Closed today".to_string(),
            open_all_day: "Open 24 hours".to_string(),
            open_now: "Open now".to_string(),
            closed_now: "Closed now".to_string(),
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Config {
    #[serde(default)]
    pub week_starts_on: WeekStart,
    #[serde(default)]
    pub labels: Labels,
    #[serde(default = "default_color")]
    pub color: bool,
}

fn default_color() -> bool {
    true
}

impl Default for Config {
    fn default() -> Self {
        Self {
            week_starts_on: WeekStart::default(),
            labels: Labels::default(),
            color: default_color(),
        }
    }
}

impl Config {
    /// Return the standard configuration directory depending on the platform
    pub fn config_dir() -> PathBuf {
        dirs::config_dir()
            .unwrap_or_else(|| PathBuf::from("."))
            .join("openhours")
    }

    /// Return the full path of the config file
    pub fn config_file() -> PathBuf {
        Self::config_dir().join("openhours.conf")
    }

    /// Load configuration from `path` (or the default location), falling
    /// back to defaults when the file does not exist.
    pub fn load(path: Option<&Path>) -> AppResult<Self> {
        let path = path
            .map(Path::to_path_buf)
            .unwrap_or_else(Self::config_file);

        if !path.exists() {
            debug!(path = %path.display(), "no configuration file, using defaults");
            return Ok(Config::default());
        }

        let content = fs::read_to_string(&path)
            .map_err(|e| AppError::Config(format!("cannot read {}: {e}", path.display())))?;
        let cfg = serde_yaml::from_str(&content)
            .map_err(|e| AppError::Config(format!("cannot parse {}: {e}", path.display())))?;

        debug!(path = %path.display(), "configuration loaded");
        Ok(cfg)
    }

    /// Write the default configuration to `path` (or the default location).
    pub fn init(path: Option<&Path>) -> AppResult<PathBuf> {
        let path = path
            .map(Path::to_path_buf)
            .unwrap_or_else(Self::config_file);

        if let Some(dir) = path.parent().filter(|d| !d.as_os_str().is_empty()) {
            fs::create_dir_all(dir)?;
        }

        let yaml = serde_yaml::to_string(&Config::default())?;
        fs::write(&path, yaml)?;

        info!(path = %path.display(), "configuration written");
        Ok(path)
    }

    pub fn to_yaml(&self) -> AppResult<String> {
        Ok(serde_yaml::to_string(self)?)
    }
}
