//! Countdown to the next prayer boundary.

use waqt_core::{CountdownSnapshot, PlannerDb, Timetable};

use super::common;

pub fn run(watch: bool) -> Result<(), Box<dyn std::error::Error>> {
    let db = PlannerDb::open()?;
    let timetable = common::load_timetable(&db)?;

    if watch {
        // Ticks once per second until interrupted.
        loop {
            print_countdown(&timetable);
            std::thread::sleep(std::time::Duration::from_secs(1));
        }
    }

    print_countdown(&timetable);
    Ok(())
}

fn print_countdown(timetable: &Timetable) {
    let next = CountdownSnapshot::at(timetable, common::now_minute());
    println!(
        "{} at {} - in {}h {:02}m",
        next.prayer, next.time, next.hours, next.minutes
    );
}
