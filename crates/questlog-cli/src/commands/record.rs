//! Record an event against a goal.

use questlog_core::Event;

use crate::common;

pub fn run(index: usize, amount: Option<i64>) -> Result<(), Box<dyn std::error::Error>> {
    let mut session = common::open()?;

    let outcome = session.store.record_event_on(index, amount)?;
    let total = session.store.user().score();
    if outcome.points >= 0 {
        println!("+{} points! Total: {}", outcome.points, total);
    } else {
        println!("{} points deducted. Total: {}", outcome.points, total);
    }

    for event in &outcome.events {
        match event {
            Event::GoalCompleted { name, .. } => println!("Goal complete: {name}"),
            Event::LevelUp { level, title, .. } => {
                println!("LEVEL UP! You reached level {level} - {title}")
            }
            Event::AchievementUnlocked { id, .. } => println!("ACHIEVEMENT UNLOCKED: {id}"),
        }
    }

    session.persist()?;
    Ok(())
}
