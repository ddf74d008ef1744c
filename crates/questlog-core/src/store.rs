//! Ordered goal collection with text-file persistence.
//!
//! The store owns the goals and the user. A goal's identity is its
//! position in the sequence; save writes one line per goal in store
//! order (user line first) so the order survives a round trip.
//!
//! Persistence is scoped: the file is open only for the duration of a
//! single save or load call. A save serializes the whole store into one
//! buffer and writes it with a single `std::fs::write`; a load replaces
//! goals and user wholesale, dropping malformed records and skipping
//! unknown tags so a partially damaged file still yields every record
//! it can.

use std::path::Path;

use chrono::Utc;
use tracing::{debug, warn};

use crate::codec::{self, Record};
use crate::error::{Result, ValidationError};
use crate::events::Event;
use crate::goal::{Goal, GoalKind};
use crate::progression::User;

/// Result of recording an event against a goal.
#[derive(Debug, Clone)]
pub struct RecordOutcome {
    /// Point delta the event yielded (may be negative or zero).
    pub points: i64,
    /// Whether this event flipped the goal's completion flag.
    pub goal_completed: bool,
    /// Completion, level-up and achievement events, in order.
    pub events: Vec<Event>,
}

/// Result of loading the persisted file.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum LoadOutcome {
    /// The file does not exist. Not an error: in-memory state is left
    /// untouched and the caller starts fresh.
    NoData,
    /// The store was replaced from the file.
    Loaded {
        /// Goals loaded.
        goals: usize,
        /// Malformed records dropped.
        skipped: usize,
    },
}

/// Ordered collection of goals plus the user's progression state.
#[derive(Debug, Clone, Default)]
pub struct GoalStore {
    goals: Vec<Goal>,
    user: User,
}

impl GoalStore {
    /// Empty store with a fresh user.
    pub fn new() -> Self {
        Self {
            goals: Vec::new(),
            user: User::new(),
        }
    }

    // ── Queries ──────────────────────────────────────────────────────

    pub fn goals(&self) -> &[Goal] {
        &self.goals
    }

    pub fn user(&self) -> &User {
        &self.user
    }

    pub fn is_empty(&self) -> bool {
        self.goals.is_empty()
    }

    pub fn len(&self) -> usize {
        self.goals.len()
    }

    /// Progress strings, one per goal, in store order.
    pub fn list_goals(&self) -> Vec<String> {
        self.goals.iter().map(Goal::progress_text).collect()
    }

    /// Number of goals whose completion flag is set.
    pub fn completed_goals(&self) -> usize {
        self.goals.iter().filter(|g| g.is_complete()).count()
    }

    // ── Commands ─────────────────────────────────────────────────────

    /// Append a goal to the end of the sequence.
    pub fn add_goal(&mut self, goal: Goal) {
        self.goals.push(goal);
    }

    /// Record an event on the goal at `index` (1-based, as listed).
    ///
    /// Validates the index and, for an incomplete Progressive goal, the
    /// progress amount; a rejected call mutates nothing. On success the
    /// point delta is fed to the progression engine along with the
    /// post-event completed-goal count, and every event the change
    /// produced is returned in order.
    pub fn record_event_on(&mut self, index: usize, progress: Option<i64>) -> Result<RecordOutcome> {
        if index == 0 || index > self.goals.len() {
            return Err(ValidationError::OutOfBounds {
                collection: "goals",
                index,
                len: self.goals.len(),
            }
            .into());
        }
        let goal = &mut self.goals[index - 1];

        if matches!(goal.kind(), GoalKind::Progressive { .. }) && !goal.is_complete() {
            match progress {
                Some(amount) if amount > 0 => {}
                _ => {
                    return Err(ValidationError::InvalidValue {
                        field: "progress",
                        message: "a positive progress amount is required".to_string(),
                    }
                    .into())
                }
            }
        }

        let was_complete = goal.is_complete();
        let points = goal.record_event(progress);
        let goal_completed = !was_complete && goal.is_complete();

        let mut events = Vec::new();
        if goal_completed {
            events.push(Event::GoalCompleted {
                name: goal.name().to_string(),
                at: Utc::now(),
            });
        }

        let completed = self.completed_goals();
        events.extend(self.user.add_points(points, completed));

        Ok(RecordOutcome {
            points,
            goal_completed,
            events,
        })
    }

    /// Serialize the whole store to `path`: user line first, then one
    /// line per goal in store order.
    pub fn save(&self, path: &Path) -> Result<()> {
        let mut out = String::new();
        out.push_str(&codec::encode_user(&self.user));
        out.push('\n');
        for goal in &self.goals {
            out.push_str(&codec::encode_goal(goal));
            out.push('\n');
        }
        std::fs::write(path, out)?;
        debug!("saved {} goals to {}", self.goals.len(), path.display());
        Ok(())
    }

    /// Replace the store wholesale from `path`.
    ///
    /// A missing file is reported as [`LoadOutcome::NoData`] and leaves
    /// the in-memory state unchanged. Malformed records are dropped and
    /// counted; unknown tags are skipped; neither aborts the load.
    pub fn load(&mut self, path: &Path) -> Result<LoadOutcome> {
        let content = match std::fs::read_to_string(path) {
            Ok(content) => content,
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => {
                debug!("no saved data at {}", path.display());
                return Ok(LoadOutcome::NoData);
            }
            Err(e) => return Err(e.into()),
        };

        let mut goals = Vec::new();
        let mut user = User::new();
        let mut skipped = 0usize;

        for (line_no, line) in content.lines().enumerate() {
            match codec::decode_line(line) {
                Ok(Some(Record::Goal(goal))) => goals.push(goal),
                Ok(Some(Record::User(loaded))) => user = loaded,
                Ok(None) => {
                    if !line.trim().is_empty() {
                        debug!("line {}: skipping unrecognized record", line_no + 1);
                    }
                }
                Err(e) => {
                    warn!("line {}: dropping malformed record: {}", line_no + 1, e);
                    skipped += 1;
                }
            }
        }

        let count = goals.len();
        self.goals = goals;
        self.user = user;
        debug!(
            "loaded {} goals from {} ({} dropped)",
            count,
            path.display(),
            skipped
        );
        Ok(LoadOutcome::Loaded {
            goals: count,
            skipped,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::CoreError;

    fn sample_store() -> GoalStore {
        let mut store = GoalStore::new();
        store.add_goal(Goal::simple("Marathon", "Finish 42km", 100));
        store.add_goal(Goal::eternal("Read", "Daily reading", 50));
        store.add_goal(Goal::checklist("Gym", "Go to the gym", 10, 3, 5));
        store
    }

    #[test]
    fn record_event_validates_index_range() {
        let mut store = sample_store();

        for index in [0, 4, 99] {
            let err = store.record_event_on(index, None).unwrap_err();
            assert!(matches!(
                err,
                CoreError::Validation(ValidationError::OutOfBounds { .. })
            ));
        }
        // Nothing was mutated by the rejected calls.
        assert_eq!(store.user().score(), 0);
        assert_eq!(store.completed_goals(), 0);
    }

    #[test]
    fn record_event_feeds_points_to_the_user() {
        let mut store = sample_store();

        let outcome = store.record_event_on(1, None).unwrap();
        assert_eq!(outcome.points, 100);
        assert!(outcome.goal_completed);
        assert_eq!(store.user().score(), 100);
        assert_eq!(store.completed_goals(), 1);
    }

    #[test]
    fn completing_a_goal_emits_the_completion_event() {
        let mut store = sample_store();

        let outcome = store.record_event_on(1, None).unwrap();
        assert!(matches!(
            outcome.events.first(),
            Some(Event::GoalCompleted { name, .. }) if name == "Marathon"
        ));

        // Recording on an already complete goal yields zero and no events.
        let outcome = store.record_event_on(1, None).unwrap();
        assert_eq!(outcome.points, 0);
        assert!(!outcome.goal_completed);
        assert!(outcome.events.is_empty());
    }

    #[test]
    fn progressive_goal_requires_a_positive_amount() {
        let mut store = GoalStore::new();
        store.add_goal(Goal::progressive("Novel", "Pages", 2, 10));

        for progress in [None, Some(0), Some(-4)] {
            let err = store.record_event_on(1, progress).unwrap_err();
            assert!(matches!(
                err,
                CoreError::Validation(ValidationError::InvalidValue { field: "progress", .. })
            ));
        }
        assert_eq!(store.user().score(), 0);

        let outcome = store.record_event_on(1, Some(4)).unwrap();
        assert_eq!(outcome.points, 8);
    }

    #[test]
    fn level_up_events_surface_through_the_outcome() {
        let mut store = GoalStore::new();
        store.add_goal(Goal::eternal("Grind", "Big points", 1000));

        let outcome = store.record_event_on(1, None).unwrap();
        assert!(outcome
            .events
            .iter()
            .any(|e| matches!(e, Event::LevelUp { level: 2, .. })));
    }

    #[test]
    fn completed_count_reaches_the_goal_getter_predicate() {
        let mut store = GoalStore::new();
        for i in 0..10 {
            store.add_goal(Goal::simple(format!("Goal {i}"), "", 1));
        }

        let mut unlocked = false;
        for index in 1..=10 {
            let outcome = store.record_event_on(index, None).unwrap();
            unlocked = unlocked
                || outcome.events.iter().any(|e| {
                    matches!(e, Event::AchievementUnlocked { id, .. }
                        if id == "Goal Getter: Complete 10 goals")
                });
        }
        assert!(unlocked);
        assert_eq!(store.completed_goals(), 10);
    }

    #[test]
    fn list_goals_preserves_store_order() {
        let store = sample_store();
        let listing = store.list_goals();
        assert_eq!(listing.len(), 3);
        assert!(listing[0].contains("Marathon"));
        assert!(listing[1].contains("Read"));
        assert!(listing[2].contains("Gym"));
    }
}
