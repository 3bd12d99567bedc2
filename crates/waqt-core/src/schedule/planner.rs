//! The day's block registry: conflict-checked insertion, edits, removal.

use serde::{Deserialize, Serialize};

use crate::error::ScheduleError;
use crate::interval::TimeRange;
use crate::prayer::Timetable;
use crate::schedule::{split_activity, ActivityKind, TimeBlock};

/// In-memory registry of the day's scheduled blocks.
///
/// A plain session value with no I/O of its own: load it from storage,
/// mutate it through the methods here, persist the result. Mutations
/// either apply completely or leave the registry untouched.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct DayPlanner {
    blocks: Vec<TimeBlock>,
}

impl DayPlanner {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn from_blocks(blocks: Vec<TimeBlock>) -> Self {
        Self { blocks }
    }

    /// The stored blocks in insertion order.
    pub fn blocks(&self) -> &[TimeBlock] {
        &self.blocks
    }

    /// The stored blocks sorted by start time, for display.
    pub fn sorted_blocks(&self) -> Vec<TimeBlock> {
        let mut sorted = self.blocks.clone();
        sorted.sort_by_key(|b| b.range.start());
        sorted
    }

    pub fn get(&self, id: &str) -> Option<&TimeBlock> {
        self.blocks.iter().find(|b| b.id == id)
    }

    /// The first stored block overlapping `range`, skipping the block
    /// named by `exclude` so a block can be edited over its own slot.
    pub fn find_conflict(&self, range: TimeRange, exclude: Option<&str>) -> Option<&TimeBlock> {
        self.blocks
            .iter()
            .find(|b| exclude != Some(b.id.as_str()) && b.range.overlaps(&range))
    }

    /// Splits the activity at prayer boundaries and inserts every fragment,
    /// or nothing at all.
    ///
    /// Each fragment is checked against the stored blocks before any is
    /// added; the first overlap aborts the whole submission. On success the
    /// created blocks are returned in time order.
    pub fn submit_activity(
        &mut self,
        title: &str,
        kind: ActivityKind,
        range: TimeRange,
        timetable: &Timetable,
    ) -> Result<Vec<TimeBlock>, ScheduleError> {
        let fragments = split_activity(title, kind, range, timetable);
        for fragment in &fragments {
            if let Some(hit) = self.find_conflict(fragment.range, None) {
                return Err(ScheduleError::Conflict {
                    block_id: hit.id.clone(),
                    occupied: hit.range,
                });
            }
        }
        self.blocks.extend(fragments.iter().cloned());
        Ok(fragments)
    }

    /// Replaces a block's title, kind and range in place.
    ///
    /// An edited block always stays a single interval, even when its new
    /// range spans prayer boundaries; only submission splits. The period
    /// is reclassified from the new start, the split mark is cleared and
    /// the done mark survives.
    pub fn edit_activity(
        &mut self,
        id: &str,
        title: &str,
        kind: ActivityKind,
        range: TimeRange,
        timetable: &Timetable,
    ) -> Result<TimeBlock, ScheduleError> {
        let index = self
            .blocks
            .iter()
            .position(|b| b.id == id)
            .ok_or_else(|| ScheduleError::UnknownBlock { id: id.to_string() })?;
        if let Some(hit) = self.find_conflict(range, Some(id)) {
            return Err(ScheduleError::Conflict {
                block_id: hit.id.clone(),
                occupied: hit.range,
            });
        }
        let block = &mut self.blocks[index];
        block.title = title.to_string();
        block.kind = kind;
        block.range = range;
        block.period = timetable.classify(range.start());
        block.split = false;
        Ok(block.clone())
    }

    /// Removes a block by id; unknown ids are ignored.
    pub fn remove_block(&mut self, id: &str) {
        self.blocks.retain(|b| b.id != id);
    }

    /// Sets a block's done mark; unknown ids are ignored.
    pub fn set_done(&mut self, id: &str, done: bool) {
        if let Some(block) = self.blocks.iter_mut().find(|b| b.id == id) {
            block.done = done;
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::clock::WallClock;
    use crate::prayer::{PrayerBoundary, PrayerName};

    fn wc(text: &str) -> WallClock {
        WallClock::parse(text).unwrap()
    }

    fn range(start: &str, end: &str) -> TimeRange {
        TimeRange::new(wc(start), wc(end)).unwrap()
    }

    fn timetable() -> Timetable {
        let times = [
            (PrayerName::Fajr, "05:00"),
            (PrayerName::Sunrise, "06:30"),
            (PrayerName::Dhuhr, "12:00"),
            (PrayerName::Asr, "15:30"),
            (PrayerName::Maghrib, "18:00"),
            (PrayerName::Isha, "19:30"),
        ];
        Timetable::from_entries(
            times
                .into_iter()
                .map(|(name, time)| PrayerBoundary {
                    name,
                    time: wc(time),
                })
                .collect(),
        )
        .unwrap()
    }

    fn planner_with(ranges: &[(&str, &str)]) -> DayPlanner {
        let t = timetable();
        let mut planner = DayPlanner::new();
        for (start, end) in ranges {
            planner
                .submit_activity("seed", ActivityKind::Work, range(start, end), &t)
                .unwrap();
        }
        planner
    }

    #[test]
    fn overlapping_submission_is_rejected() {
        let t = timetable();
        let mut planner = planner_with(&[("09:30", "10:30")]);
        let existing = planner.blocks()[0].clone();

        let err = planner
            .submit_activity("clash", ActivityKind::Work, range("09:00", "10:00"), &t)
            .unwrap_err();
        assert_eq!(
            err,
            ScheduleError::Conflict {
                block_id: existing.id,
                occupied: existing.range,
            }
        );
        assert_eq!(planner.blocks().len(), 1);
    }

    #[test]
    fn touching_and_disjoint_submissions_are_accepted() {
        let t = timetable();
        let mut planner = planner_with(&[("09:00", "10:30")]);
        planner
            .submit_activity("after", ActivityKind::Work, range("10:30", "11:30"), &t)
            .unwrap();
        planner
            .submit_activity("before", ActivityKind::Rest, range("08:00", "09:00"), &t)
            .unwrap();
        assert_eq!(planner.blocks().len(), 3);
    }

    #[test]
    fn identical_and_containing_ranges_conflict() {
        let t = timetable();
        let mut planner = planner_with(&[("09:00", "10:30")]);
        assert!(planner
            .submit_activity("same", ActivityKind::Work, range("09:00", "10:30"), &t)
            .is_err());
        assert!(planner
            .submit_activity("around", ActivityKind::Work, range("08:00", "12:00"), &t)
            .is_err());
        assert_eq!(planner.blocks().len(), 1);
    }

    #[test]
    fn a_conflicting_fragment_aborts_the_whole_submission() {
        let t = timetable();
        let mut planner = planner_with(&[("12:30", "13:00")]);
        let before = planner.clone();

        // 11:00-16:00 splits at 12:00 and 15:30; only the middle fragment
        // overlaps the stored block.
        let err = planner
            .submit_activity("long haul", ActivityKind::Work, range("11:00", "16:00"), &t)
            .unwrap_err();
        assert!(matches!(err, ScheduleError::Conflict { .. }));
        assert_eq!(planner, before);
    }

    #[test]
    fn submission_returns_the_created_fragments() {
        let t = timetable();
        let mut planner = DayPlanner::new();
        let created = planner
            .submit_activity("deep work", ActivityKind::Work, range("11:00", "16:00"), &t)
            .unwrap();
        assert_eq!(created.len(), 3);
        assert_eq!(planner.blocks().len(), 3);
        for block in &created {
            assert_eq!(planner.get(&block.id), Some(block));
        }
    }

    #[test]
    fn edits_never_resplit() {
        let t = timetable();
        let mut planner = planner_with(&[("09:00", "10:00")]);
        let id = planner.blocks()[0].id.clone();

        let updated = planner
            .edit_activity(&id, "stretched", ActivityKind::Work, range("11:00", "16:00"), &t)
            .unwrap();
        assert_eq!(planner.blocks().len(), 1);
        assert_eq!(updated.range, range("11:00", "16:00"));
        assert_eq!(updated.period, PrayerName::Sunrise);
        assert!(!updated.split);
    }

    #[test]
    fn editing_over_the_blocks_own_slot_is_allowed() {
        let t = timetable();
        let mut planner = planner_with(&[("09:00", "10:00")]);
        let id = planner.blocks()[0].id.clone();
        planner
            .edit_activity(&id, "shifted", ActivityKind::Work, range("09:30", "10:30"), &t)
            .unwrap();
        assert_eq!(planner.blocks()[0].range, range("09:30", "10:30"));
    }

    #[test]
    fn editing_into_another_block_is_rejected() {
        let t = timetable();
        let mut planner = planner_with(&[("09:00", "10:00"), ("10:00", "11:00")]);
        let first = planner.blocks()[0].id.clone();
        let second = planner.blocks()[1].clone();

        let err = planner
            .edit_activity(&first, "shifted", ActivityKind::Work, range("09:30", "10:30"), &t)
            .unwrap_err();
        assert_eq!(
            err,
            ScheduleError::Conflict {
                block_id: second.id,
                occupied: second.range,
            }
        );
        assert_eq!(planner.blocks()[0].range, range("09:00", "10:00"));
    }

    #[test]
    fn editing_an_unknown_id_fails() {
        let t = timetable();
        let mut planner = planner_with(&[("09:00", "10:00")]);
        let err = planner
            .edit_activity("missing", "x", ActivityKind::Work, range("11:00", "12:00"), &t)
            .unwrap_err();
        assert_eq!(err, ScheduleError::UnknownBlock { id: "missing".to_string() });
    }

    #[test]
    fn edit_preserves_the_done_mark() {
        let t = timetable();
        let mut planner = planner_with(&[("09:00", "10:00")]);
        let id = planner.blocks()[0].id.clone();
        planner.set_done(&id, true);
        planner
            .edit_activity(&id, "renamed", ActivityKind::Rest, range("09:00", "10:00"), &t)
            .unwrap();
        assert!(planner.blocks()[0].done);
    }

    #[test]
    fn remove_and_set_done_ignore_unknown_ids() {
        let mut planner = planner_with(&[("09:00", "10:00")]);
        let before = planner.clone();
        planner.remove_block("missing");
        planner.set_done("missing", true);
        assert_eq!(planner, before);
    }

    #[test]
    fn remove_deletes_only_the_named_block() {
        let mut planner = planner_with(&[("09:00", "10:00"), ("10:00", "11:00")]);
        let id = planner.blocks()[0].id.clone();
        planner.remove_block(&id);
        assert_eq!(planner.blocks().len(), 1);
        assert_eq!(planner.blocks()[0].range, range("10:00", "11:00"));
    }

    #[test]
    fn set_done_toggles_one_block() {
        let mut planner = planner_with(&[("09:00", "10:00")]);
        let id = planner.blocks()[0].id.clone();
        planner.set_done(&id, true);
        assert!(planner.blocks()[0].done);
        planner.set_done(&id, false);
        assert!(!planner.blocks()[0].done);
    }

    #[test]
    fn sorted_blocks_orders_by_start() {
        let planner = planner_with(&[("14:00", "15:00"), ("08:00", "09:00"), ("10:00", "11:00")]);
        let starts: Vec<String> = planner
            .sorted_blocks()
            .iter()
            .map(|b| b.range.start().to_string())
            .collect();
        assert_eq!(starts, vec!["08:00", "10:00", "14:00"]);
    }
}
