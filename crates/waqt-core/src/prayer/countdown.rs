//! Countdown to the next prayer boundary.
//!
//! This is the one computation that crosses midnight: after Isha the next
//! boundary is tomorrow's Fajr, and the wait is reduced modulo 24 hours.
//! Classification stays strictly within the day and lives in
//! [`Timetable::classify`](super::Timetable::classify) instead.

use serde::{Deserialize, Serialize};

use crate::clock::WallClock;
use crate::prayer::{PrayerName, Timetable};

/// The first boundary after a given instant.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct NextPrayer {
    pub name: PrayerName,
    pub time: WallClock,
    /// Whole minutes to wait, wrapping past midnight when needed.
    pub minutes_until: u16,
}

/// A display-ready countdown: the wait split into hours and minutes.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct CountdownSnapshot {
    pub prayer: PrayerName,
    pub time: WallClock,
    pub hours: u16,
    pub minutes: u16,
}

impl CountdownSnapshot {
    /// Snapshot of the countdown as seen from `now`.
    pub fn at(timetable: &Timetable, now: WallClock) -> Self {
        let next = timetable.next_prayer(now);
        Self {
            prayer: next.name,
            time: next.time,
            hours: next.minutes_until / 60,
            minutes: next.minutes_until % 60,
        }
    }
}

impl Timetable {
    /// The next boundary strictly after `now`, wrapping to tomorrow's
    /// first boundary once the day's last one has passed.
    pub fn next_prayer(&self, now: WallClock) -> NextPrayer {
        let next = self
            .boundaries()
            .iter()
            .find(|b| b.time > now)
            .copied()
            .unwrap_or(self.boundaries()[0]);
        NextPrayer {
            name: next.name,
            time: next.time,
            minutes_until: now.minutes_until(next.time),
        }
    }
}
