//! Free time between scheduled blocks.

use serde::{Deserialize, Serialize};

use crate::interval::TimeRange;
use crate::prayer::{PrayerName, Timetable};
use crate::schedule::TimeBlock;

/// An unoccupied stretch between two consecutive blocks.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct FreeSlot {
    pub range: TimeRange,
    pub duration_min: u16,
    /// The period containing the slot's start minute.
    pub period: PrayerName,
}

/// Finds the gaps strictly between consecutive blocks, in start order.
///
/// Only the space between two blocks counts: the stretch before the first
/// block and after the last one is never reported. The asymmetry is
/// deliberate; unbounded day edges make poor suggestions for "fit
/// something in here".
pub fn free_slots(blocks: &[TimeBlock], timetable: &Timetable) -> Vec<FreeSlot> {
    let mut sorted: Vec<&TimeBlock> = blocks.iter().collect();
    sorted.sort_by_key(|b| b.range.start());

    let mut slots = Vec::new();
    for pair in sorted.windows(2) {
        let (current, next) = (pair[0], pair[1]);
        if next.range.start() > current.range.end() {
            let gap = TimeRange::between(current.range.end(), next.range.start());
            slots.push(FreeSlot {
                range: gap,
                duration_min: gap.duration_min(),
                period: timetable.classify(gap.start()),
            });
        }
    }
    slots
}
