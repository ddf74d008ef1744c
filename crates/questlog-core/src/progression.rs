//! User progression: score, level, title and achievement unlocks.
//!
//! The user's score is the single source of truth. Level is derived from
//! it (never persisted), the title is derived from the level, and
//! achievement predicates are re-evaluated after every score change.
//! Achievements are idempotent: once unlocked, an id is never duplicated
//! and the unlock order is preserved for display.

use chrono::Utc;
use serde::{Deserialize, Serialize};
use tracing::{debug, info};

use crate::events::Event;

/// Points per level.
pub const LEVEL_STEP: i64 = 1000;

/// Titles by level, clamped to the last entry for any higher level.
const TITLES: [&str; 10] = [
    "Beginner",
    "Apprentice",
    "Journeyman",
    "Adept",
    "Expert",
    "Master",
    "Grandmaster",
    "Legend",
    "Eternal Champion",
    "Celestial Being",
];

/// Title for a level (levels start at 1).
pub fn title_for_level(level: u32) -> &'static str {
    let index = (level.saturating_sub(1) as usize).min(TITLES.len() - 1);
    TITLES[index]
}

/// Level for a score. Scores below zero clamp to level 1.
fn level_for_score(score: i64) -> u32 {
    if score < 0 {
        1
    } else {
        (score / LEVEL_STEP) as u32 + 1
    }
}

/// The metric an achievement predicate evaluates.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Metric {
    Level,
    Score,
    CompletedGoals,
}

/// A declarative achievement-unlock predicate.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Achievement {
    /// Identifier, also the display name. Persisted comma-joined, so ids
    /// must not contain commas.
    pub id: &'static str,
    pub metric: Metric,
    pub threshold: i64,
}

/// All defined achievements, in evaluation priority order.
pub const ACHIEVEMENTS: [Achievement; 5] = [
    Achievement {
        id: "First Steps: Reach Level 2",
        metric: Metric::Level,
        threshold: 2,
    },
    Achievement {
        id: "Dedicated: Reach Level 5",
        metric: Metric::Level,
        threshold: 5,
    },
    Achievement {
        id: "Master: Reach Level 10",
        metric: Metric::Level,
        threshold: 10,
    },
    Achievement {
        id: "Goal Getter: Complete 10 goals",
        metric: Metric::CompletedGoals,
        threshold: 10,
    },
    Achievement {
        id: "Eternal Quest: Score 5000 points",
        metric: Metric::Score,
        threshold: 5000,
    },
];

/// The user's progression state.
///
/// Constructed fresh at score 0, or rebuilt wholesale by the codec from
/// a persisted record. Level is always recomputed from the score.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct User {
    score: i64,
    level: u32,
    achievements: Vec<String>,
}

impl User {
    /// Fresh user: score 0, empty achievement set.
    pub fn new() -> Self {
        Self::from_parts(0, Vec::new())
    }

    /// Rebuild a user from persisted state. The level is recomputed from
    /// the score, never trusted from the file.
    pub fn from_parts(score: i64, achievements: Vec<String>) -> Self {
        Self {
            score,
            level: level_for_score(score),
            achievements,
        }
    }

    // ── Queries ──────────────────────────────────────────────────────

    pub fn score(&self) -> i64 {
        self.score
    }

    pub fn level(&self) -> u32 {
        self.level
    }

    pub fn title(&self) -> &'static str {
        title_for_level(self.level)
    }

    /// Achievement ids in unlock order.
    pub fn achievements(&self) -> &[String] {
        &self.achievements
    }

    pub fn has_achievement(&self, id: &str) -> bool {
        self.achievements.iter().any(|a| a == id)
    }

    /// Points still needed to reach the next level.
    pub fn points_to_next_level(&self) -> i64 {
        self.level as i64 * LEVEL_STEP - self.score
    }

    // ── Commands ─────────────────────────────────────────────────────

    /// Apply a point delta and return the events it produced.
    ///
    /// The score may go negative through deductions; the level is
    /// recomputed either way and a strictly greater level emits
    /// [`Event::LevelUp`]. Achievement predicates are evaluated after
    /// every score change against the current level, score and the
    /// caller-supplied completed-goal count.
    pub fn add_points(&mut self, delta: i64, completed_goals: usize) -> Vec<Event> {
        self.score += delta;
        let new_level = level_for_score(self.score);

        let mut events = Vec::new();
        if new_level > self.level {
            self.level = new_level;
            info!("level up: reached level {} ({})", new_level, self.title());
            events.push(Event::LevelUp {
                level: new_level,
                title: self.title().to_string(),
                at: Utc::now(),
            });
        } else {
            self.level = new_level;
        }

        self.check_achievements(completed_goals, &mut events);
        events
    }

    fn check_achievements(&mut self, completed_goals: usize, events: &mut Vec<Event>) {
        for achievement in ACHIEVEMENTS {
            if self.has_achievement(achievement.id) {
                continue;
            }
            let unlocked = match achievement.metric {
                Metric::Level => i64::from(self.level) >= achievement.threshold,
                Metric::Score => self.score >= achievement.threshold,
                Metric::CompletedGoals => completed_goals as i64 >= achievement.threshold,
            };
            if unlocked {
                debug!("achievement unlocked: {}", achievement.id);
                self.achievements.push(achievement.id.to_string());
                events.push(Event::AchievementUnlocked {
                    id: achievement.id.to_string(),
                    at: Utc::now(),
                });
            }
        }
    }
}

impl Default for User {
    fn default() -> Self {
        Self::new()
    }
}
