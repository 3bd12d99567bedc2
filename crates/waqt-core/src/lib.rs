//! # Waqt Core Library
//!
//! This library provides the core business logic for Waqt, a personal day
//! planner organized around the daily prayer times. The day is partitioned
//! into six periods (Fajr through Isha) by that day's prayer timetable, and
//! activities are scheduled as conflict-checked time blocks inside those
//! periods. All operations are available through a standalone CLI binary
//! built on this crate.
//!
//! ## Architecture
//!
//! - **Clock / Interval**: minute-of-day arithmetic and the half-open
//!   interval algebra everything else builds on
//! - **Prayer**: the day's validated boundary timetable, period
//!   classification, and the next-prayer countdown
//! - **Schedule**: splitting activities at prayer boundaries and the
//!   conflict-checked block registry
//! - **Timeline**: derived free slots and the merged day view
//! - **Storage**: SQLite block persistence and TOML-based configuration
//! - **Integrations**: prayer-times and reverse-geocoding HTTP clients
//!
//! ## Key Components
//!
//! - [`Timetable`]: the day's six prayer boundaries, sorted and validated
//! - [`DayPlanner`]: the in-memory block registry
//! - [`PlannerDb`]: durable block and timetable storage
//! - [`Config`]: application configuration management

pub mod clock;
pub mod interval;
pub mod prayer;
pub mod schedule;
pub mod timeline;
pub mod storage;
pub mod integrations;
pub mod error;

pub use clock::{WallClock, MINUTES_PER_DAY};
pub use interval::TimeRange;
pub use prayer::{CountdownSnapshot, NextPrayer, PrayerBoundary, PrayerName, Timetable};
pub use schedule::{split_activity, ActivityKind, DayPlanner, TimeBlock};
pub use timeline::{day_entries, free_slots, DayEntry, FreeSlot};
pub use storage::{Config, PlannerDb};
pub use integrations::{method_for_country, AladhanClient, GeocodeClient, Place};
pub use error::{
    ConfigError, CoreError, DatabaseError, PrayerTimesError, ScheduleError, TimeError,
};
