//! Goal variants and their event semantics.
//!
//! A goal is a trackable objective with a point value and a
//! variant-specific completion rule. Recording an event is the single
//! mutating action on a goal and yields a point delta for the
//! progression engine.
//!
//! ## Variants
//!
//! | Variant | Completion rule |
//! |---------|-----------------|
//! | Simple | completes on the first event |
//! | Eternal | never completes, pays every time |
//! | Checklist | completes when the repeat target is met, with a bonus |
//! | Negative | never completes, every event deducts |
//! | Progressive | completes when accumulated progress meets the target |
//!
//! The completion flag is monotonic: once a Simple, Checklist or
//! Progressive goal completes it stays complete. Eternal and Negative
//! goals never set it.

use serde::{Deserialize, Serialize};

/// Bonus multiplier paid when a progressive goal reaches its target.
const PROGRESSIVE_BONUS_MULTIPLIER: i64 = 5;

/// Variant-specific state of a [`Goal`].
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case", tag = "variant")]
pub enum GoalKind {
    /// One-time goal.
    Simple,
    /// Repeating goal; pays its points on every event.
    Eternal { times_completed: i64 },
    /// Repeat-target goal with a one-time completion bonus.
    Checklist {
        times_completed: i64,
        target_count: i64,
        bonus_points: i64,
    },
    /// Bad habit; every event is a deduction.
    Negative,
    /// Accumulating goal. The goal's point value is the payout per unit
    /// of recorded progress.
    Progressive {
        current_progress: i64,
        target_progress: i64,
    },
}

/// A trackable objective with a completion rule and a point value.
///
/// Goals have no persistent key; their identity is their position in
/// the [`crate::GoalStore`]'s ordered sequence.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Goal {
    name: String,
    description: String,
    /// Base point value. For Progressive goals this is the payout per
    /// unit of progress; for Negative goals the deduction per event.
    points: i64,
    complete: bool,
    kind: GoalKind,
}

impl Goal {
    /// Create a goal from a fully-specified state.
    ///
    /// Fresh callers pass zero counters and `complete: false`
    /// explicitly; the codec passes whatever the persisted record
    /// carried.
    pub fn new(
        name: impl Into<String>,
        description: impl Into<String>,
        points: i64,
        complete: bool,
        kind: GoalKind,
    ) -> Self {
        Self {
            name: name.into(),
            description: description.into(),
            points,
            complete,
            kind,
        }
    }

    /// Fresh one-time goal.
    pub fn simple(name: impl Into<String>, description: impl Into<String>, points: i64) -> Self {
        Self::new(name, description, points, false, GoalKind::Simple)
    }

    /// Fresh repeating goal.
    pub fn eternal(name: impl Into<String>, description: impl Into<String>, points: i64) -> Self {
        Self::new(
            name,
            description,
            points,
            false,
            GoalKind::Eternal { times_completed: 0 },
        )
    }

    /// Fresh repeat-target goal.
    pub fn checklist(
        name: impl Into<String>,
        description: impl Into<String>,
        points: i64,
        target_count: i64,
        bonus_points: i64,
    ) -> Self {
        Self::new(
            name,
            description,
            points,
            false,
            GoalKind::Checklist {
                times_completed: 0,
                target_count,
                bonus_points,
            },
        )
    }

    /// Fresh bad-habit goal. `points` is the deduction per event.
    pub fn negative(name: impl Into<String>, description: impl Into<String>, points: i64) -> Self {
        Self::new(name, description, points, false, GoalKind::Negative)
    }

    /// Fresh accumulating goal. `points_per_unit` is paid per unit of
    /// recorded progress.
    pub fn progressive(
        name: impl Into<String>,
        description: impl Into<String>,
        points_per_unit: i64,
        target_progress: i64,
    ) -> Self {
        Self::new(
            name,
            description,
            points_per_unit,
            false,
            GoalKind::Progressive {
                current_progress: 0,
                target_progress,
            },
        )
    }

    // ── Queries ──────────────────────────────────────────────────────

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn description(&self) -> &str {
        &self.description
    }

    pub fn points(&self) -> i64 {
        self.points
    }

    pub fn is_complete(&self) -> bool {
        self.complete
    }

    pub fn kind(&self) -> &GoalKind {
        &self.kind
    }

    fn status_marker(&self) -> &'static str {
        if self.complete {
            "[X]"
        } else {
            "[ ]"
        }
    }

    // ── Commands ─────────────────────────────────────────────────────

    /// Record an event against this goal and return the point delta.
    ///
    /// `progress` is consumed only by Progressive goals, which require a
    /// positive amount; every other variant ignores it. A call that the
    /// variant's rule rejects (already complete, missing or non-positive
    /// progress) returns 0 and mutates nothing.
    pub fn record_event(&mut self, progress: Option<i64>) -> i64 {
        match &mut self.kind {
            GoalKind::Simple => {
                if self.complete {
                    return 0;
                }
                self.complete = true;
                self.points
            }
            GoalKind::Eternal { times_completed } => {
                *times_completed += 1;
                self.points
            }
            GoalKind::Checklist {
                times_completed,
                target_count,
                bonus_points,
            } => {
                if self.complete {
                    return 0;
                }
                *times_completed += 1;
                if *times_completed >= *target_count {
                    self.complete = true;
                    self.points + *bonus_points
                } else {
                    self.points
                }
            }
            // The completion flag is cosmetic for this variant and never
            // advanced here.
            GoalKind::Negative => -self.points,
            GoalKind::Progressive {
                current_progress,
                target_progress,
            } => {
                if self.complete {
                    return 0;
                }
                let Some(amount) = progress.filter(|a| *a > 0) else {
                    return 0;
                };
                *current_progress += amount;
                let mut earned = amount * self.points;
                if *current_progress >= *target_progress {
                    self.complete = true;
                    earned += self.points * PROGRESSIVE_BONUS_MULTIPLIER;
                }
                earned
            }
        }
    }

    /// One-line progress rendering: status marker, name, description and
    /// variant-specific detail.
    pub fn progress_text(&self) -> String {
        match &self.kind {
            GoalKind::Simple => {
                format!("{} {} - {}", self.status_marker(), self.name, self.description)
            }
            GoalKind::Eternal { times_completed } => format!(
                "{} {} - {} (Completed {} times)",
                self.status_marker(),
                self.name,
                self.description,
                times_completed
            ),
            GoalKind::Checklist {
                times_completed,
                target_count,
                ..
            } => format!(
                "{} {} - {} (Completed {}/{} times)",
                self.status_marker(),
                self.name,
                self.description,
                times_completed,
                target_count
            ),
            GoalKind::Negative => format!(
                "[!] {} - {} (Avoid this: -{} points)",
                self.name, self.description, self.points
            ),
            GoalKind::Progressive {
                current_progress,
                target_progress,
            } => {
                let percentage = if *target_progress > 0 {
                    (*current_progress as f64 / *target_progress as f64) * 100.0
                } else {
                    0.0
                };
                format!(
                    "{} {} - {} (Progress: {}/{} - {:.1}%)",
                    self.status_marker(),
                    self.name,
                    self.description,
                    current_progress,
                    target_progress,
                    percentage
                )
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn simple_goal_completes_on_first_event() {
        let mut goal = Goal::simple("Run a marathon", "Finish 42km", 100);
        assert!(!goal.is_complete());

        assert_eq!(goal.record_event(None), 100);
        assert!(goal.is_complete());

        // Idempotent no-op after completion.
        assert_eq!(goal.record_event(None), 0);
        assert_eq!(goal.record_event(None), 0);
        assert!(goal.is_complete());
    }

    #[test]
    fn eternal_goal_pays_every_time_and_never_completes() {
        let mut goal = Goal::eternal("Read scriptures", "Daily reading", 50);
        for _ in 0..10 {
            assert_eq!(goal.record_event(None), 50);
        }
        assert!(!goal.is_complete());
        assert_eq!(
            goal.kind(),
            &GoalKind::Eternal {
                times_completed: 10
            }
        );
    }

    #[test]
    fn checklist_goal_pays_bonus_exactly_once() {
        let mut goal = Goal::checklist("Gym", "Go to the gym", 10, 3, 5);

        assert_eq!(goal.record_event(None), 10);
        assert_eq!(goal.record_event(None), 10);
        // Triggering event pays base + bonus.
        assert_eq!(goal.record_event(None), 15);
        assert!(goal.is_complete());
        // Complete checklist goals stop paying.
        assert_eq!(goal.record_event(None), 0);
    }

    #[test]
    fn negative_goal_always_deducts() {
        let mut goal = Goal::negative("Junk food", "Skip the snacks", 7);
        for _ in 0..5 {
            assert_eq!(goal.record_event(None), -7);
        }
        assert!(!goal.is_complete());
    }

    #[test]
    fn progressive_goal_accumulates_and_pays_completion_bonus() {
        let mut goal = Goal::progressive("Write novel", "Pages written", 2, 10);

        assert_eq!(goal.record_event(Some(4)), 8);
        assert!(!goal.is_complete());

        // 6 * 2 per-unit + 2 * 5 one-time bonus.
        assert_eq!(goal.record_event(Some(6)), 12 + 10);
        assert!(goal.is_complete());

        // No state change after completion.
        let snapshot = goal.clone();
        assert_eq!(goal.record_event(Some(1)), 0);
        assert_eq!(goal, snapshot);
    }

    #[test]
    fn progressive_goal_rejects_non_positive_progress() {
        let mut goal = Goal::progressive("Savings", "Dollars saved", 1, 100);
        let snapshot = goal.clone();

        assert_eq!(goal.record_event(None), 0);
        assert_eq!(goal.record_event(Some(0)), 0);
        assert_eq!(goal.record_event(Some(-3)), 0);
        assert_eq!(goal, snapshot);
    }

    #[test]
    fn progressive_bonus_only_on_the_call_that_reaches_target() {
        let mut goal = Goal::progressive("Pushups", "Total pushups", 3, 5);
        // Overshooting in one call still pays the bonus exactly once.
        assert_eq!(goal.record_event(Some(7)), 7 * 3 + 3 * 5);
        assert!(goal.is_complete());
    }

    #[test]
    fn progress_text_renders_variant_detail() {
        let simple = Goal::simple("A", "a", 1);
        assert_eq!(simple.progress_text(), "[ ] A - a");

        let mut eternal = Goal::eternal("B", "b", 1);
        eternal.record_event(None);
        assert_eq!(eternal.progress_text(), "[ ] B - b (Completed 1 times)");

        let checklist = Goal::checklist("C", "c", 1, 4, 2);
        assert_eq!(checklist.progress_text(), "[ ] C - c (Completed 0/4 times)");

        let negative = Goal::negative("D", "d", 9);
        assert_eq!(negative.progress_text(), "[!] D - d (Avoid this: -9 points)");

        let mut progressive = Goal::progressive("E", "e", 1, 8);
        progressive.record_event(Some(2));
        assert_eq!(
            progressive.progress_text(),
            "[ ] E - e (Progress: 2/8 - 25.0%)"
        );
    }

    #[test]
    fn completed_goals_render_the_done_marker() {
        let mut goal = Goal::simple("A", "a", 1);
        goal.record_event(None);
        assert!(goal.progress_text().starts_with("[X]"));
    }
}
