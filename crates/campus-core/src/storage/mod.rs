mod config;

pub use config::{CalendarConfig, ChatConfig, Config, UiConfig};

use std::path::PathBuf;

use crate::error::Result;

/// Overrides the data directory outright when set.
pub const HOME_ENV: &str = "CAMPUS_ASSISTANT_HOME";
/// `dev` selects the development data directory.
pub const PROFILE_ENV: &str = "CAMPUS_ASSISTANT_ENV";

/// Returns `~/.config/campus-assistant[-dev]/` based on CAMPUS_ASSISTANT_ENV,
/// or CAMPUS_ASSISTANT_HOME when set.
///
/// # Errors
/// Returns an error if creating the directory fails.
pub fn data_dir() -> Result<PathBuf> {
    let dir = match std::env::var_os(HOME_ENV) {
        Some(home) if !home.is_empty() => PathBuf::from(home),
        _ => {
            let base_dir = dirs::home_dir()
                .unwrap_or_else(|| PathBuf::from("."))
                .join(".config");
            let env = std::env::var(PROFILE_ENV).unwrap_or_else(|_| "production".to_string());
            if env == "dev" {
                base_dir.join("campus-assistant-dev")
            } else {
                base_dir.join("campus-assistant")
            }
        }
    };

    std::fs::create_dir_all(&dir)?;
    Ok(dir)
}
