//! Goal management commands for CLI.

use clap::Subcommand;
use questlog_core::Goal;

use crate::common;

#[derive(Subcommand)]
pub enum GoalAction {
    /// Create a new goal
    Add {
        #[command(subcommand)]
        kind: GoalKindArg,
    },
    /// List goals with their progress
    List {
        /// Output as JSON
        #[arg(long)]
        json: bool,
    },
}

#[derive(Subcommand)]
pub enum GoalKindArg {
    /// One-time goal; completes on the first recorded event
    Simple {
        /// Goal name
        name: String,
        /// Goal description
        #[arg(long, default_value = "")]
        description: String,
        /// Points for completion
        #[arg(long)]
        points: i64,
    },
    /// Repeating goal; pays its points on every event, never completes
    Eternal {
        /// Goal name
        name: String,
        /// Goal description
        #[arg(long, default_value = "")]
        description: String,
        /// Points per completion
        #[arg(long)]
        points: i64,
    },
    /// Goal completed after a target number of events, with a bonus
    Checklist {
        /// Goal name
        name: String,
        /// Goal description
        #[arg(long, default_value = "")]
        description: String,
        /// Points per completion
        #[arg(long)]
        points: i64,
        /// Target number of times
        #[arg(long)]
        target: i64,
        /// Bonus points paid on completion
        #[arg(long, default_value_t = 0)]
        bonus: i64,
    },
    /// Bad habit; every recorded event deducts points
    Negative {
        /// Goal name
        name: String,
        /// Goal description
        #[arg(long, default_value = "")]
        description: String,
        /// Points to deduct per event
        #[arg(long)]
        points: i64,
    },
    /// Accumulating goal; pays per unit of recorded progress
    Progressive {
        /// Goal name
        name: String,
        /// Goal description
        #[arg(long, default_value = "")]
        description: String,
        /// Points per unit of progress
        #[arg(long)]
        points_per_unit: i64,
        /// Target progress amount
        #[arg(long)]
        target: i64,
    },
}

pub fn run(action: GoalAction) -> Result<(), Box<dyn std::error::Error>> {
    let mut session = common::open()?;

    match action {
        GoalAction::Add { kind } => {
            let goal = match kind {
                GoalKindArg::Simple {
                    name,
                    description,
                    points,
                } => Goal::simple(name, description, points),
                GoalKindArg::Eternal {
                    name,
                    description,
                    points,
                } => Goal::eternal(name, description, points),
                GoalKindArg::Checklist {
                    name,
                    description,
                    points,
                    target,
                    bonus,
                } => Goal::checklist(name, description, points, target, bonus),
                GoalKindArg::Negative {
                    name,
                    description,
                    points,
                } => Goal::negative(name, description, points),
                GoalKindArg::Progressive {
                    name,
                    description,
                    points_per_unit,
                    target,
                } => Goal::progressive(name, description, points_per_unit, target),
            };
            println!("Goal '{}' created", goal.name());
            session.store.add_goal(goal);
            session.persist()?;
        }
        GoalAction::List { json } => {
            if json {
                println!("{}", serde_json::to_string_pretty(session.store.goals())?);
            } else if session.store.is_empty() {
                println!("No goals yet. Create some goals to get started!");
            } else {
                for (i, line) in session.store.list_goals().iter().enumerate() {
                    println!("{}. {}", i + 1, line);
                }
            }
        }
    }

    Ok(())
}
