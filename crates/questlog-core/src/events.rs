use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Every scoring state change produces an Event.
/// The CLI renders them; `--json` output serializes them.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(tag = "type")]
pub enum Event {
    /// A goal's completion flag flipped to true on this event.
    GoalCompleted {
        name: String,
        at: DateTime<Utc>,
    },
    /// The user's level strictly increased.
    LevelUp {
        level: u32,
        title: String,
        at: DateTime<Utc>,
    },
    /// An achievement predicate fired for the first time.
    AchievementUnlocked {
        id: String,
        at: DateTime<Utc>,
    },
}
