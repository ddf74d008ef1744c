//! Shared helpers for CLI commands.

use std::error::Error;
use std::path::PathBuf;

use questlog_core::{Config, GoalStore};

/// A loaded session: configuration plus the store read from the data
/// file (or a fresh store when no data exists yet).
pub struct Session {
    pub config: Config,
    pub store: GoalStore,
}

/// Load the configuration and the goal store for one command.
pub fn open() -> Result<Session, Box<dyn Error>> {
    let config = Config::load_or_default();
    let mut store = GoalStore::new();
    store.load(&config.data_path()?)?;
    Ok(Session { config, store })
}

impl Session {
    pub fn data_path(&self) -> Result<PathBuf, Box<dyn Error>> {
        Ok(self.config.data_path()?)
    }

    /// Persist the store if auto-save is enabled.
    pub fn persist(&self) -> Result<(), Box<dyn Error>> {
        if self.config.auto_save {
            self.store.save(&self.config.data_path()?)?;
        }
        Ok(())
    }
}
