//! Configuration management commands for CLI.

use clap::Subcommand;
use questlog_core::Config;

#[derive(Subcommand)]
pub enum ConfigAction {
    /// Show the current configuration
    Show,
    /// Set the goal data file (relative names resolve to the data directory)
    SetDataFile {
        /// File name or absolute path
        name: String,
    },
    /// Enable or disable saving after each mutating command
    SetAutoSave {
        /// true or false
        enabled: bool,
    },
}

pub fn run(action: ConfigAction) -> Result<(), Box<dyn std::error::Error>> {
    match action {
        ConfigAction::Show => {
            let config = Config::load_or_default();
            println!("data_file = {}", config.data_file);
            println!("auto_save = {}", config.auto_save);
            println!("resolved data path: {}", config.data_path()?.display());
        }
        ConfigAction::SetDataFile { name } => {
            let mut config = Config::load_or_default();
            config.data_file = name;
            config.save()?;
            println!("data_file set to {}", config.data_file);
        }
        ConfigAction::SetAutoSave { enabled } => {
            let mut config = Config::load_or_default();
            config.auto_save = enabled;
            config.save()?;
            println!("auto_save set to {enabled}");
        }
    }
    Ok(())
}
