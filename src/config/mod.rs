use crate::errors::{AppError, AppResult};
use crate::export::ExportFormat;
use crate::models::MealType;
use serde::{Deserialize, Serialize};
use std::env;
use std::fs;
use std::path::{Path, PathBuf};

/// Environment variable carrying the default endpoint URL.
pub const ENDPOINT_ENV: &str = "RTIFFIN_API_URL";

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Config {
    /// Endpoint proposed at login when `--url` is omitted
    #[serde(default)]
    pub default_endpoint: String,
    #[serde(default)]
    pub default_meal_type: MealType,
    #[serde(default)]
    pub export_format: ExportFormat,
    #[serde(default = "default_export_dir")]
    pub export_dir: String,
    /// None = wait for the endpoint as long as it takes
    #[serde(default)]
    pub request_timeout_secs: Option<u64>,
}

fn default_export_dir() -> String {
    ".".to_string()
}

impl Default for Config {
    fn default() -> Self {
        Self {
            default_endpoint: String::new(),
            default_meal_type: MealType::Lunch,
            export_format: ExportFormat::Xlsx,
            export_dir: default_export_dir(),
            request_timeout_secs: None,
        }
    }
}

impl Config {
    /// Return the standard configuration directory depending on the platform
    pub fn config_dir() -> PathBuf {
        if cfg!(target_os = "windows") {
            let appdata = env::var("APPDATA").unwrap_or_else(|_| ".".to_string());
            PathBuf::from(appdata).join("rtiffin")
        } else {
            let home = env::var("HOME").unwrap_or_else(|_| ".".to_string());
            PathBuf::from(home).join(".rtiffin")
        }
    }

    /// Return the full path of the config file
    pub fn config_file() -> PathBuf {
        Self::config_dir().join("rtiffin.conf")
    }

    /// Return the full path of the stored login (endpoint + token)
    pub fn session_file() -> PathBuf {
        Self::config_dir().join("session.yml")
    }

    /// Load configuration from `path`, or return defaults if not found
    pub fn load_from(path: &Path) -> AppResult<Self> {
        if !path.exists() {
            return Ok(Self::default());
        }

        let content = fs::read_to_string(path).map_err(|_| AppError::ConfigLoad)?;
        serde_yaml::from_str(&content)
            .map_err(|e| AppError::Config(format!("{}: {}", path.display(), e)))
    }

    pub fn save_to(&self, path: &Path) -> AppResult<()> {
        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent)?;
        }
        let yaml = serde_yaml::to_string(self).map_err(|_| AppError::ConfigSave)?;
        fs::write(path, yaml).map_err(|_| AppError::ConfigSave)
    }

    /// Write a default configuration file at `path` unless one already exists.
    /// Returns true when a new file was created.
    pub fn init_at(path: &Path) -> AppResult<bool> {
        if path.exists() {
            return Ok(false);
        }
        Self::default().save_to(path)?;
        Ok(true)
    }

    /// Endpoint to use before the operator types one: the environment
    /// wins over the config file. Empty values count as unset.
    pub fn default_endpoint(&self) -> Option<String> {
        Self::endpoint_from(env::var(ENDPOINT_ENV).ok(), &self.default_endpoint)
    }

    fn endpoint_from(env_value: Option<String>, configured: &str) -> Option<String> {
        env_value
            .map(|v| v.trim().to_string())
            .filter(|v| !v.is_empty())
            .or_else(|| Some(configured.trim().to_string()).filter(|v| !v.is_empty()))
    }

    /// Export directory with `~/` expanded
    pub fn export_path(&self) -> PathBuf {
        crate::utils::path::expand_tilde(&self.export_dir)
    }
}
