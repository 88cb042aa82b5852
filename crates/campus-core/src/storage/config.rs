//! TOML-based application configuration.
//!
//! Stores:
//! - Optional replacement files for the academic calendar and chat topics
//! - Typing-delay simulation for interactive chat
//! - Display preferences (theme, colored output)
//!
//! Configuration is stored at `~/.config/campus-assistant/config.toml`.

use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};
use tracing::{debug, warn};

use super::data_dir;
use crate::calendar::EventTable;
use crate::chat::{TopicTable, TypingDelay, DEFAULT_MAX_MS, DEFAULT_MIN_MS};
use crate::error::{ConfigError, CoreError, Result};

/// Calendar data configuration.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct CalendarConfig {
    /// TOML file replacing the embedded academic calendar.
    #[serde(default)]
    pub events_file: Option<String>,
}

/// Chat configuration.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ChatConfig {
    /// TOML file replacing the embedded topic table.
    #[serde(default)]
    pub topics_file: Option<String>,
    #[serde(default = "default_true")]
    pub simulate_typing: bool,
    #[serde(default = "default_typing_delay_min_ms")]
    pub typing_delay_min_ms: u64,
    #[serde(default = "default_typing_delay_max_ms")]
    pub typing_delay_max_ms: u64,
}

/// UI configuration.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct UiConfig {
    #[serde(default)]
    pub dark_mode: bool,
    /// ANSI styling of rendered grids when stdout is a terminal.
    #[serde(default = "default_true")]
    pub color: bool,
}

/// Application configuration.
///
/// Serialized to/from TOML at `~/.config/campus-assistant/config.toml`.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Config {
    #[serde(default)]
    pub calendar: CalendarConfig,
    #[serde(default)]
    pub chat: ChatConfig,
    #[serde(default)]
    pub ui: UiConfig,
}

fn default_true() -> bool {
    true
}
fn default_typing_delay_min_ms() -> u64 {
    DEFAULT_MIN_MS
}
fn default_typing_delay_max_ms() -> u64 {
    DEFAULT_MAX_MS
}

impl Default for ChatConfig {
    fn default() -> Self {
        Self {
            topics_file: None,
            simulate_typing: true,
            typing_delay_min_ms: default_typing_delay_min_ms(),
            typing_delay_max_ms: default_typing_delay_max_ms(),
        }
    }
}

impl Default for UiConfig {
    fn default() -> Self {
        Self {
            dark_mode: false,
            color: true,
        }
    }
}

impl ChatConfig {
    /// The configured delay, or `None` when simulation is off.
    pub fn typing_delay(&self) -> Result<Option<TypingDelay>> {
        if !self.simulate_typing {
            return Ok(None);
        }
        Ok(Some(TypingDelay::new(
            self.typing_delay_min_ms,
            self.typing_delay_max_ms,
        )?))
    }
}

impl Config {
    fn get_json_value_by_path<'a>(
        root: &'a serde_json::Value,
        key: &str,
    ) -> Option<&'a serde_json::Value> {
        if key.is_empty() {
            return None;
        }

        let mut current = root;
        for part in key.split('.') {
            current = current.get(part)?;
        }
        Some(current)
    }

    fn set_json_value_by_path(root: &mut serde_json::Value, key: &str, value: &str) -> Result<()> {
        let unknown = || CoreError::from(ConfigError::UnknownKey(key.to_string()));
        let invalid = |message: String| {
            CoreError::from(ConfigError::InvalidValue {
                key: key.to_string(),
                message,
            })
        };

        let mut parts = key.split('.').peekable();
        if key.is_empty() {
            return Err(unknown());
        }

        let mut current = root;
        while let Some(part) = parts.next() {
            let is_leaf = parts.peek().is_none();
            if is_leaf {
                let obj = current.as_object_mut().ok_or_else(unknown)?;
                let existing = obj.get(part).ok_or_else(unknown)?;

                let new_value = match existing {
                    serde_json::Value::Bool(_) => serde_json::Value::Bool(
                        value
                            .parse::<bool>()
                            .map_err(|e| invalid(format!("cannot parse '{value}' as bool: {e}")))?,
                    ),
                    serde_json::Value::Number(_) => serde_json::Value::Number(
                        value
                            .parse::<u64>()
                            .map_err(|e| invalid(format!("cannot parse '{value}' as number: {e}")))?
                            .into(),
                    ),
                    serde_json::Value::Object(_) | serde_json::Value::Array(_) => {
                        return Err(invalid("only leaf values can be set".into()));
                    }
                    // Optional paths: an empty value clears them.
                    serde_json::Value::Null | serde_json::Value::String(_) if value.is_empty() => {
                        serde_json::Value::Null
                    }
                    _ => serde_json::Value::String(value.into()),
                };

                obj.insert(part.to_string(), new_value);
                return Ok(());
            }

            current = current.get_mut(part).ok_or_else(unknown)?;
        }

        Err(unknown())
    }

    pub fn path() -> Result<PathBuf> {
        Ok(data_dir()?.join("config.toml"))
    }

    /// Load from disk or create and save the default.
    ///
    /// # Errors
    ///
    /// Returns an error if the config file exists but cannot be parsed,
    /// or if the default config cannot be written to disk.
    pub fn load() -> Result<Self> {
        Self::load_from(&Self::path()?)
    }

    pub fn load_from(path: &Path) -> Result<Self> {
        match std::fs::read_to_string(path) {
            Ok(content) => {
                let cfg: Config = toml::from_str(&content).map_err(|e| ConfigError::LoadFailed {
                    path: path.to_path_buf(),
                    message: e.to_string(),
                })?;
                debug!(path = %path.display(), "loaded configuration");
                Ok(cfg)
            }
            Err(err) if err.kind() == std::io::ErrorKind::NotFound => {
                let cfg = Self::default();
                cfg.save_to(path)?;
                Ok(cfg)
            }
            Err(err) => Err(ConfigError::LoadFailed {
                path: path.to_path_buf(),
                message: err.to_string(),
            }
            .into()),
        }
    }

    /// Persist to disk.
    ///
    /// # Errors
    ///
    /// Returns an error if the config cannot be serialized or written to disk.
    pub fn save(&self) -> Result<()> {
        self.save_to(&Self::path()?)
    }

    pub fn save_to(&self, path: &Path) -> Result<()> {
        let save_failed = |message: String| ConfigError::SaveFailed {
            path: path.to_path_buf(),
            message,
        };
        let content = toml::to_string_pretty(self).map_err(|e| save_failed(e.to_string()))?;
        std::fs::write(path, content).map_err(|e| save_failed(e.to_string()))?;
        debug!(path = %path.display(), "saved configuration");
        Ok(())
    }

    /// Get a config value as string by dot-separated key. Unset optional
    /// values read as an empty string.
    pub fn get(&self, key: &str) -> Option<String> {
        let json = serde_json::to_value(self).ok()?;
        let val = Self::get_json_value_by_path(&json, key)?;
        match val {
            serde_json::Value::String(s) => Some(s.clone()),
            serde_json::Value::Null => Some(String::new()),
            serde_json::Value::Object(_) => None,
            other => Some(other.to_string()),
        }
    }

    /// Set a config value by key without saving. Returns error if the key is
    /// unknown or the value does not fit the field's type.
    pub fn set(&mut self, key: &str, value: &str) -> Result<()> {
        let mut json = serde_json::to_value(&*self)?;
        Self::set_json_value_by_path(&mut json, key, value)?;
        let updated: Config = serde_json::from_value(json)?;
        updated.chat.typing_delay()?;
        *self = updated;
        Ok(())
    }

    /// Event table from `calendar.events_file`, or the embedded default.
    pub fn event_table(&self) -> Result<EventTable> {
        match non_empty(&self.calendar.events_file) {
            Some(path) => EventTable::load(path),
            None => Ok(EventTable::default_academic()),
        }
    }

    /// Topic table from `chat.topics_file`, or the embedded default.
    pub fn topic_table(&self) -> Result<TopicTable> {
        match non_empty(&self.chat.topics_file) {
            Some(path) => TopicTable::load(path),
            None => Ok(TopicTable::default_campus()),
        }
    }

    /// Load from disk, returning default on error.
    /// This is a convenience method that never fails.
    pub fn load_or_default() -> Self {
        Self::load().unwrap_or_else(|err| {
            warn!(error = %err, "falling back to default configuration");
            Self::default()
        })
    }
}

fn non_empty(path: &Option<String>) -> Option<&str> {
    path.as_deref().filter(|p| !p.trim().is_empty())
}
