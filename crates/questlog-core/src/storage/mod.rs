mod config;

pub use config::Config;

use std::path::PathBuf;

use crate::error::Result;

/// Returns `~/.config/questlog[-dev]/` based on QUESTLOG_ENV.
///
/// Set QUESTLOG_ENV=dev to use the development data directory.
/// QUESTLOG_DATA_DIR overrides the location entirely (used by tests and
/// scripting).
///
/// # Errors
/// Returns an error if creating the directory fails.
pub fn data_dir() -> Result<PathBuf> {
    if let Ok(dir) = std::env::var("QUESTLOG_DATA_DIR") {
        let dir = PathBuf::from(dir);
        std::fs::create_dir_all(&dir)?;
        return Ok(dir);
    }

    let base_dir = dirs::home_dir()
        .unwrap_or_else(|| PathBuf::from("."))
        .join(".config");

    let env = std::env::var("QUESTLOG_ENV").unwrap_or_else(|_| "production".to_string());

    let dir = if env == "dev" {
        base_dir.join("questlog-dev")
    } else {
        base_dir.join("questlog")
    };

    std::fs::create_dir_all(&dir)?;
    Ok(dir)
}
