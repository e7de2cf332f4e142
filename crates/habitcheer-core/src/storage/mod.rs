mod config;

pub use config::{Config, MessagesConfig};

use std::path::PathBuf;

use crate::error::ConfigError;

/// Returns the data directory, creating it if needed.
///
/// `HABITCHEER_HOME` wins when set. Otherwise `~/.config/habitcheer[-dev]/`
/// based on `HABITCHEER_ENV` (set it to `dev` for the development directory).
///
/// # Errors
/// Returns an error if no directory can be determined or created.
pub fn data_dir() -> Result<PathBuf, ConfigError> {
    let dir = match std::env::var_os("HABITCHEER_HOME") {
        Some(home) if !home.is_empty() => PathBuf::from(home),
        _ => {
            let base_dir = dirs::home_dir()
                .ok_or(ConfigError::NoDataDir)?
                .join(".config");

            let env = std::env::var("HABITCHEER_ENV").unwrap_or_else(|_| "production".to_string());
            if env == "dev" {
                base_dir.join("habitcheer-dev")
            } else {
                base_dir.join("habitcheer")
            }
        }
    };

    std::fs::create_dir_all(&dir).map_err(|e| ConfigError::SaveFailed {
        path: dir.clone(),
        message: e.to_string(),
    })?;
    Ok(dir)
}
