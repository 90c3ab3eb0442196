use crate::error::{Result, TodoError};
use crate::model::{is_valid_date_format, DEFAULT_DATE_FORMAT};
use log::warn;
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::Path;

const CONFIG_FILENAME: &str = "config.json";

/// Configuration for todolist, stored in `<data dir>/config.json`
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct TodoConfig {
    /// Write the list back to disk after every change
    #[serde(default = "default_persist")]
    pub persist: bool,

    /// chrono format used to stamp new todos
    #[serde(default = "default_date_format")]
    pub date_format: String,
}

fn default_persist() -> bool {
    true
}

fn default_date_format() -> String {
    DEFAULT_DATE_FORMAT.to_string()
}

impl Default for TodoConfig {
    fn default() -> Self {
        Self {
            persist: default_persist(),
            date_format: default_date_format(),
        }
    }
}

impl TodoConfig {
    pub const KEYS: [&'static str; 2] = ["persist", "date-format"];

    /// Load config from the given directory, or return defaults if not found
    pub fn load<P: AsRef<Path>>(config_dir: P) -> Result<Self> {
        let config_path = config_dir.as_ref().join(CONFIG_FILENAME);

        if !config_path.exists() {
            return Ok(Self::default());
        }

        let content = fs::read_to_string(&config_path).map_err(TodoError::Io)?;
        let config: TodoConfig =
            serde_json::from_str(&content).map_err(TodoError::Serialization)?;
        Ok(config)
    }

    /// Like [`load`](Self::load), but a missing or unreadable file yields defaults.
    pub fn load_or_default<P: AsRef<Path>>(config_dir: P) -> Self {
        Self::load(config_dir).unwrap_or_else(|e| {
            warn!("Ignoring {} ({}); using default config", CONFIG_FILENAME, e);
            Self::default()
        })
    }

    /// Save config to the given directory
    pub fn save<P: AsRef<Path>>(&self, config_dir: P) -> Result<()> {
        let config_dir = config_dir.as_ref();

        if !config_dir.exists() {
            fs::create_dir_all(config_dir).map_err(TodoError::Io)?;
        }

        let config_path = config_dir.join(CONFIG_FILENAME);
        let content = serde_json::to_string_pretty(self).map_err(TodoError::Serialization)?;
        fs::write(config_path, content).map_err(TodoError::Io)?;
        Ok(())
    }

    pub fn get(&self, key: &str) -> Option<String> {
        match key {
            "persist" => Some(self.persist.to_string()),
            "date-format" => Some(self.date_format.clone()),
            _ => None,
        }
    }

    pub fn set(&mut self, key: &str, value: &str) -> std::result::Result<(), String> {
        match key {
            "persist" => {
                self.persist = match value.trim().to_ascii_lowercase().as_str() {
                    "true" | "yes" | "on" | "1" => true,
                    "false" | "no" | "off" | "0" => false,
                    other => return Err(format!("Invalid value for persist: {}", other)),
                };
                Ok(())
            }
            "date-format" => {
                let value = value.trim();
                if value.is_empty() {
                    return Err("date-format cannot be empty".to_string());
                }
                if !is_valid_date_format(value) {
                    return Err(format!("Invalid date-format: {}", value));
                }
                self.date_format = value.to_string();
                Ok(())
            }
            other => Err(format!("Unknown config key: {}", other)),
        }
    }
}
