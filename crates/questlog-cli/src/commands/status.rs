//! User status display.

use crate::common;

pub fn run(json: bool) -> Result<(), Box<dyn std::error::Error>> {
    let session = common::open()?;
    let user = session.store.user();

    if json {
        println!("{}", serde_json::to_string_pretty(user)?);
        return Ok(());
    }

    println!("Level: {} - {}", user.level(), user.title());
    println!("Total Score: {} points", user.score());
    println!("Points to next level: {}", user.points_to_next_level());
    println!(
        "Goals completed: {}/{}",
        session.store.completed_goals(),
        session.store.len()
    );

    if !user.achievements().is_empty() {
        println!("\nAchievements ({}):", user.achievements().len());
        for achievement in user.achievements() {
            println!("  * {achievement}");
        }
    }

    Ok(())
}
