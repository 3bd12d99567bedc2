//! Activity blocks and the day's schedule.
//!
//! This module provides:
//! - Time blocks: titled activities occupying one interval of the day
//! - Splitting a requested activity at prayer boundaries
//! - The conflict-checked block registry

mod planner;
mod split;

pub use planner::DayPlanner;
pub use split::split_activity;

use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::interval::TimeRange;
use crate::prayer::PrayerName;

/// Category tag for an activity.
///
/// The set is open ended on input: tags other than `work` and `rest`
/// parse as [`ActivityKind::Other`] rather than failing.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ActivityKind {
    Work,
    Rest,
    #[default]
    Other,
}

impl ActivityKind {
    pub fn as_str(&self) -> &'static str {
        match self {
            ActivityKind::Work => "work",
            ActivityKind::Rest => "rest",
            ActivityKind::Other => "other",
        }
    }

    /// Parses a tag, mapping anything unrecognized to `Other`.
    pub fn parse(tag: &str) -> ActivityKind {
        match tag.to_ascii_lowercase().as_str() {
            "work" => ActivityKind::Work,
            "rest" => ActivityKind::Rest,
            _ => ActivityKind::Other,
        }
    }
}

/// A scheduled activity occupying one contiguous interval of the day.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TimeBlock {
    pub id: String,
    pub title: String,
    pub kind: ActivityKind,
    pub range: TimeRange,
    /// The period containing the block's start minute.
    pub period: PrayerName,
    /// True when the block is one fragment of an activity that was cut at
    /// prayer boundaries.
    #[serde(default)]
    pub split: bool,
    #[serde(default)]
    pub done: bool,
}

impl TimeBlock {
    /// Creates an unsplit, not-done block with a fresh id.
    pub fn new(title: &str, kind: ActivityKind, range: TimeRange, period: PrayerName) -> Self {
        Self {
            id: Uuid::new_v4().to_string(),
            title: title.to_string(),
            kind,
            range,
            period,
            split: false,
            done: false,
        }
    }

    pub fn duration_min(&self) -> u16 {
        self.range.duration_min()
    }
}
