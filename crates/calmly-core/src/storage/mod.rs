mod config;
mod session;

pub use config::{ApiConfig, Config, DisplayConfig, FanOutMode, SyncConfig};
pub use session::SessionStore;

use std::path::PathBuf;

use crate::error::ConfigError;

/// Returns the Calmly data directory, creating it if needed.
///
/// `CALMLY_HOME` overrides the location outright. Otherwise it is
/// `~/.config/calmly[-dev]/`, with `CALMLY_ENV=dev` selecting the
/// development directory.
///
/// # Errors
/// Returns an error if creating the directory fails.
pub fn data_dir() -> Result<PathBuf, ConfigError> {
    let dir = match std::env::var_os("CALMLY_HOME") {
        Some(home) if !home.is_empty() => PathBuf::from(home),
        _ => {
            let base_dir = dirs::home_dir()
                .unwrap_or_else(|| PathBuf::from("."))
                .join(".config");

            let env = std::env::var("CALMLY_ENV").unwrap_or_else(|_| "production".to_string());
            if env == "dev" {
                base_dir.join("calmly-dev")
            } else {
                base_dir.join("calmly")
            }
        }
    };

    std::fs::create_dir_all(&dir).map_err(|e| ConfigError::DataDir(format!("{}: {e}", dir.display())))?;
    Ok(dir)
}
