//! The merged day view: blocks and free slots in one ordered sequence.

use serde::{Deserialize, Serialize};

use crate::clock::WallClock;
use crate::interval::TimeRange;
use crate::prayer::{PrayerName, Timetable};
use crate::schedule::TimeBlock;
use crate::timeline::{free_slots, FreeSlot};

/// One row of the rendered day: either a scheduled block or a free slot.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "lowercase")]
pub enum DayEntry {
    Block(TimeBlock),
    Free(FreeSlot),
}

impl DayEntry {
    pub fn range(&self) -> TimeRange {
        match self {
            DayEntry::Block(block) => block.range,
            DayEntry::Free(slot) => slot.range,
        }
    }

    pub fn period(&self) -> PrayerName {
        match self {
            DayEntry::Block(block) => block.period,
            DayEntry::Free(slot) => slot.period,
        }
    }

    /// True when `now` falls inside this entry; the end minute already
    /// belongs to the next one.
    pub fn is_current(&self, now: WallClock) -> bool {
        self.range().contains(now)
    }
}

/// The blocks plus their derived free slots, sorted by start time.
pub fn day_entries(blocks: &[TimeBlock], timetable: &Timetable) -> Vec<DayEntry> {
    let mut entries: Vec<DayEntry> = blocks.iter().cloned().map(DayEntry::Block).collect();
    entries.extend(free_slots(blocks, timetable).into_iter().map(DayEntry::Free));
    entries.sort_by_key(|e| e.range().start());
    entries
}
