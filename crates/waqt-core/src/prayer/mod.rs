//! Prayer timetable and period classification.
//!
//! This module provides:
//! - The six daily prayer boundaries as a validated, sorted timetable
//! - Classification of any clock time into its prayer period
//! - The next-prayer countdown, the one place the day wraps around

mod countdown;
mod times;

pub use countdown::{CountdownSnapshot, NextPrayer};
pub use times::{PrayerBoundary, PrayerName, Timetable};
