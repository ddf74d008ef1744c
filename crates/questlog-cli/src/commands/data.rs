//! Data file management commands for CLI.

use clap::Subcommand;
use questlog_core::LoadOutcome;

use crate::common;

#[derive(Subcommand)]
pub enum DataAction {
    /// Print the resolved data file path
    Path,
    /// Report what the data file currently loads as
    Load,
    /// Rewrite the data file in canonical form
    Save,
}

pub fn run(action: DataAction) -> Result<(), Box<dyn std::error::Error>> {
    let session = common::open()?;

    match action {
        DataAction::Path => {
            println!("{}", session.data_path()?.display());
        }
        DataAction::Load => {
            // The session already loaded the file; re-run for the outcome.
            let mut store = questlog_core::GoalStore::new();
            match store.load(&session.data_path()?)? {
                LoadOutcome::NoData => println!("No saved data found. Starting fresh!"),
                LoadOutcome::Loaded { goals, skipped } => {
                    if skipped > 0 {
                        println!("Loaded {goals} goals ({skipped} malformed records dropped)");
                    } else {
                        println!("Loaded {goals} goals");
                    }
                }
            }
        }
        DataAction::Save => {
            let path = session.data_path()?;
            session.store.save(&path)?;
            println!("Saved {} goals to {}", session.store.len(), path.display());
        }
    }

    Ok(())
}
