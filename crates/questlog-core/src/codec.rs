//! Line codec for the persisted goal file.
//!
//! One record per line, `|`-delimited fields, UTF-8. Field values are
//! written raw -- there is no escaping, so a name or description
//! containing `|` corrupts its record on read. This is a known
//! limitation of the format, kept for compatibility with files written
//! by earlier versions.
//!
//! Decoding dispatches on the leading tag and is strict about field
//! count: a record with an unexpected number of fields for its tag is
//! rejected whole, never partially parsed. Unknown tags are skipped so
//! newer files stay loadable; round-trip fidelity is only guaranteed
//! for tags this codec recognizes.

use crate::error::ParseError;
use crate::goal::{Goal, GoalKind};
use crate::progression::User;

const SIMPLE_TAG: &str = "SimpleGoal";
const ETERNAL_TAG: &str = "EternalGoal";
const CHECKLIST_TAG: &str = "ChecklistGoal";
const NEGATIVE_TAG: &str = "NegativeGoal";
const PROGRESSIVE_TAG: &str = "ProgressiveGoal";
const USER_TAG: &str = "User";

/// A decoded line of the persisted file.
#[derive(Debug, Clone, PartialEq)]
pub enum Record {
    Goal(Goal),
    User(User),
}

/// Encode a goal as one line, in its tag's fixed field order.
pub fn encode_goal(goal: &Goal) -> String {
    match goal.kind() {
        GoalKind::Simple => format!(
            "{}|{}|{}|{}|{}",
            SIMPLE_TAG,
            goal.name(),
            goal.description(),
            goal.points(),
            goal.is_complete()
        ),
        GoalKind::Eternal { times_completed } => format!(
            "{}|{}|{}|{}|{}",
            ETERNAL_TAG,
            goal.name(),
            goal.description(),
            goal.points(),
            times_completed
        ),
        GoalKind::Checklist {
            times_completed,
            target_count,
            bonus_points,
        } => format!(
            "{}|{}|{}|{}|{}|{}|{}",
            CHECKLIST_TAG,
            goal.name(),
            goal.description(),
            goal.points(),
            target_count,
            bonus_points,
            times_completed
        ),
        GoalKind::Negative => format!(
            "{}|{}|{}|{}|{}",
            NEGATIVE_TAG,
            goal.name(),
            goal.description(),
            goal.points(),
            goal.is_complete()
        ),
        GoalKind::Progressive {
            current_progress,
            target_progress,
        } => format!(
            "{}|{}|{}|{}|{}|{}",
            PROGRESSIVE_TAG,
            goal.name(),
            goal.description(),
            goal.points(),
            target_progress,
            current_progress
        ),
    }
}

/// Encode the user as one line: `User|<score>|<comma-joined ids>`.
pub fn encode_user(user: &User) -> String {
    format!(
        "{}|{}|{}",
        USER_TAG,
        user.score(),
        user.achievements().join(",")
    )
}

/// Decode one line of the persisted file.
///
/// Returns `Ok(None)` for blank lines and unknown tags (skipped, not
/// fatal). Returns an error only for a recognized tag whose fields are
/// malformed; the caller drops the record and continues.
pub fn decode_line(line: &str) -> Result<Option<Record>, ParseError> {
    let line = line.trim_end_matches(['\r', '\n']);
    if line.trim().is_empty() {
        return Ok(None);
    }
    let parts: Vec<&str> = line.split('|').collect();
    match parts[0] {
        USER_TAG => decode_user(&parts).map(|u| Some(Record::User(u))),
        SIMPLE_TAG => decode_simple(&parts).map(|g| Some(Record::Goal(g))),
        ETERNAL_TAG => decode_eternal(&parts).map(|g| Some(Record::Goal(g))),
        CHECKLIST_TAG => decode_checklist(&parts).map(|g| Some(Record::Goal(g))),
        NEGATIVE_TAG => decode_negative(&parts).map(|g| Some(Record::Goal(g))),
        PROGRESSIVE_TAG => decode_progressive(&parts).map(|g| Some(Record::Goal(g))),
        _ => Ok(None),
    }
}

fn expect_fields(parts: &[&str], expected: usize) -> Result<(), ParseError> {
    if parts.len() != expected {
        return Err(ParseError::FieldCount {
            tag: parts[0].to_string(),
            expected,
            found: parts.len(),
        });
    }
    Ok(())
}

fn parse_int(field: &'static str, value: &str) -> Result<i64, ParseError> {
    value.trim().parse().map_err(|_| ParseError::InvalidInt {
        field,
        value: value.to_string(),
    })
}

/// Booleans parse case-insensitively: the legacy implementation wrote
/// `True`/`False`.
fn parse_bool(field: &'static str, value: &str) -> Result<bool, ParseError> {
    let trimmed = value.trim();
    if trimmed.eq_ignore_ascii_case("true") {
        Ok(true)
    } else if trimmed.eq_ignore_ascii_case("false") {
        Ok(false)
    } else {
        Err(ParseError::InvalidBool {
            field,
            value: value.to_string(),
        })
    }
}

fn decode_simple(parts: &[&str]) -> Result<Goal, ParseError> {
    expect_fields(parts, 5)?;
    Ok(Goal::new(
        parts[1],
        parts[2],
        parse_int("points", parts[3])?,
        parse_bool("is_complete", parts[4])?,
        GoalKind::Simple,
    ))
}

fn decode_eternal(parts: &[&str]) -> Result<Goal, ParseError> {
    expect_fields(parts, 5)?;
    Ok(Goal::new(
        parts[1],
        parts[2],
        parse_int("points", parts[3])?,
        false,
        GoalKind::Eternal {
            times_completed: parse_int("times_completed", parts[4])?,
        },
    ))
}

fn decode_checklist(parts: &[&str]) -> Result<Goal, ParseError> {
    expect_fields(parts, 7)?;
    let points = parse_int("points", parts[3])?;
    let target_count = parse_int("target_count", parts[4])?;
    let bonus_points = parse_int("bonus_points", parts[5])?;
    let times_completed = parse_int("times_completed", parts[6])?;
    // Completion is recomputed from the counters rather than trusted
    // verbatim, so hand-edited files stay consistent.
    Ok(Goal::new(
        parts[1],
        parts[2],
        points,
        times_completed >= target_count,
        GoalKind::Checklist {
            times_completed,
            target_count,
            bonus_points,
        },
    ))
}

fn decode_negative(parts: &[&str]) -> Result<Goal, ParseError> {
    expect_fields(parts, 5)?;
    Ok(Goal::new(
        parts[1],
        parts[2],
        parse_int("points", parts[3])?,
        parse_bool("is_complete", parts[4])?,
        GoalKind::Negative,
    ))
}

fn decode_progressive(parts: &[&str]) -> Result<Goal, ParseError> {
    expect_fields(parts, 6)?;
    let points_per_unit = parse_int("points_per_unit", parts[3])?;
    let target_progress = parse_int("target_progress", parts[4])?;
    let current_progress = parse_int("current_progress", parts[5])?;
    Ok(Goal::new(
        parts[1],
        parts[2],
        points_per_unit,
        current_progress >= target_progress,
        GoalKind::Progressive {
            current_progress,
            target_progress,
        },
    ))
}

/// `User|<score>|<ids>`. An empty id segment parses to an empty set; a
/// two-field record (no id segment at all) is tolerated the same way.
fn decode_user(parts: &[&str]) -> Result<User, ParseError> {
    if parts.len() != 2 && parts.len() != 3 {
        return Err(ParseError::FieldCount {
            tag: parts[0].to_string(),
            expected: 3,
            found: parts.len(),
        });
    }
    let score = parse_int("score", parts[1])?;
    let achievements = match parts.get(2) {
        Some(ids) if !ids.is_empty() => ids.split(',').map(str::to_string).collect(),
        _ => Vec::new(),
    };
    Ok(User::from_parts(score, achievements))
}
