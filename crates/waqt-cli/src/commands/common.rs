//! Helpers shared by the CLI commands.

use chrono::{Local, Timelike};
use waqt_core::{PlannerDb, Timetable, WallClock};

/// Today's date key, as used for the timetable cache.
pub fn today_key() -> String {
    Local::now().format("%Y-%m-%d").to_string()
}

/// The current wall-clock minute.
pub fn now_minute() -> WallClock {
    let now = Local::now();
    WallClock::from_minutes_wrapped(i64::from(now.hour() * 60 + now.minute()))
}

/// Today's cached timetable.
///
/// # Errors
/// Fails when nothing is cached for today; the message points at
/// `times fetch`.
pub fn load_timetable(db: &PlannerDb) -> Result<Timetable, Box<dyn std::error::Error>> {
    let timetable = db
        .cached_timetable(&today_key())?
        .ok_or("no prayer timetable cached for today; run 'waqt-cli times fetch' first")?;
    Ok(timetable)
}
