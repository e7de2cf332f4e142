//! TOML-based application configuration.
//!
//! Stores user preferences for message selection:
//! - Date format used to seed the daily progress message
//! - Optional fixed seed for celebration messages
//!
//! Configuration is stored at `~/.config/habitcheer/config.toml`.

use std::path::{Path, PathBuf};

use chrono::NaiveDate;
use rand::SeedableRng;
use rand_pcg::Pcg64;
use serde::{Deserialize, Serialize};

use super::data_dir;
use crate::clock::Clock;
use crate::error::{ConfigError, CoreError, Result};
use crate::messages::progress::{render_date, DEFAULT_DATE_FORMAT};
use crate::messages::MessageSelector;

/// Message selection configuration.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MessagesConfig {
    /// strftime pattern rendered to build the daily seed.
    #[serde(default = "default_date_format")]
    pub date_format: String,
    /// Fixed seed for celebration picks. Unset means a fresh random pick each time.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub celebration_seed: Option<u64>,
}

/// Application configuration.
///
/// Serialized to/from TOML at `~/.config/habitcheer/config.toml`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Default)]
pub struct Config {
    #[serde(default)]
    pub messages: MessagesConfig,
}

/// TOML integers are signed 64-bit.
const MAX_TOML_INTEGER: u64 = i64::MAX as u64;

fn default_date_format() -> String {
    DEFAULT_DATE_FORMAT.to_string()
}

impl Default for MessagesConfig {
    fn default() -> Self {
        Self {
            date_format: default_date_format(),
            celebration_seed: None,
        }
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

    /// Known leaf keys, including unset optional ones.
    fn is_known_key(key: &str) -> bool {
        matches!(key, "messages.date_format" | "messages.celebration_seed")
    }

    fn set_json_value_by_path(
        root: &mut serde_json::Value,
        key: &str,
        value: &str,
    ) -> Result<(), ConfigError> {
        if !Self::is_known_key(key) {
            return Err(ConfigError::UnknownKey(key.to_string()));
        }

        let invalid = |message: String| ConfigError::InvalidValue {
            key: key.to_string(),
            message,
        };

        let mut parts = key.split('.').peekable();
        let mut current = root;
        while let Some(part) = parts.next() {
            let is_leaf = parts.peek().is_none();
            if is_leaf {
                let obj = current
                    .as_object_mut()
                    .ok_or_else(|| ConfigError::UnknownKey(key.to_string()))?;
                let new_value = match obj.get(part) {
                    Some(serde_json::Value::Bool(_)) => serde_json::Value::Bool(
                        value.parse::<bool>().map_err(|e| invalid(e.to_string()))?,
                    ),
                    Some(serde_json::Value::Number(_)) | Some(serde_json::Value::Null) | None => {
                        if value.is_empty() || value.eq_ignore_ascii_case("none") {
                            serde_json::Value::Null
                        } else {
                            let n = value
                                .parse::<u64>()
                                .map_err(|_| invalid(format!("cannot parse '{value}' as number")))?;
                            if n > MAX_TOML_INTEGER {
                                return Err(invalid(format!(
                                    "{n} exceeds the TOML integer limit of {MAX_TOML_INTEGER}"
                                )));
                            }
                            serde_json::Value::Number(n.into())
                        }
                    }
                    _ => serde_json::Value::String(value.into()),
                };

                obj.insert(part.to_string(), new_value);
                return Ok(());
            }

            current = current
                .get_mut(part)
                .ok_or_else(|| ConfigError::UnknownKey(key.to_string()))?;
        }

        Err(ConfigError::UnknownKey(key.to_string()))
    }

    fn path() -> Result<PathBuf> {
        Ok(data_dir()?.join("config.toml"))
    }

    /// Load from the data directory, writing defaults if no file exists yet.
    ///
    /// # Errors
    ///
    /// Returns an error if the config file exists but cannot be parsed,
    /// or if the default config cannot be written to disk.
    pub fn load() -> Result<Self> {
        Self::load_from(&Self::path()?)
    }

    /// Load from an explicit path, writing defaults if it does not exist.
    pub fn load_from(path: &Path) -> Result<Self> {
        match std::fs::read_to_string(path) {
            Ok(content) => {
                let cfg: Config = toml::from_str(&content).map_err(|e| ConfigError::LoadFailed {
                    path: path.to_path_buf(),
                    message: e.to_string(),
                })?;
                cfg.validate()?;
                Ok(cfg)
            }
            Err(err) if err.kind() == std::io::ErrorKind::NotFound => {
                tracing::info!(path = %path.display(), "no config found, writing defaults");
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

    /// Persist to the data directory.
    ///
    /// # Errors
    ///
    /// Returns an error if the config cannot be serialized or written to disk.
    pub fn save(&self) -> Result<()> {
        self.save_to(&Self::path()?)
    }

    pub fn save_to(&self, path: &Path) -> Result<()> {
        let content = toml::to_string_pretty(self)?;
        std::fs::write(path, content).map_err(|e| ConfigError::SaveFailed {
            path: path.to_path_buf(),
            message: e.to_string(),
        })?;
        tracing::debug!(path = %path.display(), "config saved");
        Ok(())
    }

    /// Load from disk, returning default on error.
    /// This is a convenience method that never fails.
    pub fn load_or_default() -> Self {
        Self::load().unwrap_or_else(|err| {
            tracing::warn!(error = %err, "using default config");
            Self::default()
        })
    }

    /// Check values that deserialize fine but cannot be used or saved.
    pub fn validate(&self) -> Result<(), ConfigError> {
        // Rendering failures depend on the pattern only, not on the date.
        render_date(NaiveDate::default(), &self.messages.date_format).map_err(|e| {
            ConfigError::InvalidValue {
                key: "messages.date_format".to_string(),
                message: e.to_string(),
            }
        })?;

        if let Some(seed) = self.messages.celebration_seed {
            if seed > MAX_TOML_INTEGER {
                return Err(ConfigError::InvalidValue {
                    key: "messages.celebration_seed".to_string(),
                    message: format!("{seed} exceeds the TOML integer limit of {MAX_TOML_INTEGER}"),
                });
            }
        }
        Ok(())
    }

    /// Get a config value as string by dot-separated key.
    pub fn get(&self, key: &str) -> Option<String> {
        let json = serde_json::to_value(self).ok()?;
        match Self::get_json_value_by_path(&json, key) {
            Some(serde_json::Value::String(s)) => Some(s.clone()),
            Some(other) => Some(other.to_string()),
            None if Self::is_known_key(key) => Some("none".to_string()),
            None => None,
        }
    }

    /// Update a value in memory without saving.
    pub fn apply(&mut self, key: &str, value: &str) -> Result<()> {
        let mut json = serde_json::to_value(&*self)?;
        Self::set_json_value_by_path(&mut json, key, value)?;
        let updated: Config = serde_json::from_value(json).map_err(|e| {
            CoreError::Config(ConfigError::InvalidValue {
                key: key.to_string(),
                message: e.to_string(),
            })
        })?;
        updated.validate()?;
        *self = updated;
        Ok(())
    }

    /// Set a config value by key and save. Returns error if key is unknown.
    ///
    /// # Errors
    ///
    /// Returns an error if the key is unknown, the value cannot be parsed,
    /// or the config cannot be saved.
    pub fn set(&mut self, key: &str, value: &str) -> Result<()> {
        self.set_at(&Self::path()?, key, value)
    }

    /// [`Self::set`] against an explicit path. `self` is unchanged on error.
    pub fn set_at(&mut self, path: &Path, key: &str, value: &str) -> Result<()> {
        let mut updated = self.clone();
        updated.apply(key, value)?;
        updated.save_to(path)?;
        *self = updated;
        tracing::info!(key, value, "config updated");
        Ok(())
    }

    /// Selector using this config's date format.
    pub fn selector<C: Clock>(&self, clock: C) -> Result<MessageSelector<C>> {
        MessageSelector::with_clock(clock)
            .with_date_format(self.messages.date_format.clone())
            .map_err(CoreError::from)
    }

    /// Seeded generator for celebration picks, if a seed is configured.
    pub fn celebration_rng(&self) -> Option<Pcg64> {
        self.messages.celebration_seed.map(Pcg64::seed_from_u64)
    }
}
