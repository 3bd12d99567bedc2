//! The merged day view: blocks and free slots grouped by prayer period.

use waqt_core::{day_entries, CountdownSnapshot, DayEntry, DayPlanner, PlannerDb};

use super::common;

pub fn run(json: bool) -> Result<(), Box<dyn std::error::Error>> {
    let db = PlannerDb::open()?;
    let timetable = common::load_timetable(&db)?;
    let planner = DayPlanner::from_blocks(db.load_blocks()?);
    let entries = day_entries(planner.blocks(), &timetable);

    if json {
        println!("{}", serde_json::to_string_pretty(&entries)?);
        return Ok(());
    }

    let now = common::now_minute();
    let current_period = timetable.classify(now);
    let next = CountdownSnapshot::at(&timetable, now);
    println!(
        "{now}  {current_period} time; {} at {} (in {}h {:02}m)",
        next.prayer, next.time, next.hours, next.minutes
    );

    for boundary in timetable.boundaries() {
        let marker = if boundary.name == current_period { "*" } else { " " };
        println!("\n{marker} {} {}", boundary.time, boundary.name);
        for entry in entries.iter().filter(|e| e.period() == boundary.name) {
            let here = if entry.is_current(now) { "  <- now" } else { "" };
            match entry {
                DayEntry::Block(block) => {
                    let check = if block.done { "x" } else { " " };
                    let split = if block.split { " (split)" } else { "" };
                    println!("    [{check}] {} {}{split}{here}", block.range, block.title);
                }
                DayEntry::Free(slot) => {
                    println!(
                        "    [ ] {} free ({} min){here}",
                        slot.range, slot.duration_min
                    );
                }
            }
        }
    }
    Ok(())
}
