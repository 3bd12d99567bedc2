//! Integration tests for the planning engine.
//!
//! Exercises the full workflow from a raw timetable to a rendered day:
//! submitting activities across prayer boundaries, conflict handling,
//! free-slot derivation and the countdown.

use waqt_core::{
    day_entries, free_slots, ActivityKind, CountdownSnapshot, DayEntry, DayPlanner,
    PrayerBoundary, PrayerName, ScheduleError, TimeRange, Timetable, WallClock,
};

fn wc(text: &str) -> WallClock {
    WallClock::parse(text).unwrap()
}

fn range(start: &str, end: &str) -> TimeRange {
    TimeRange::new(wc(start), wc(end)).unwrap()
}

fn timetable() -> Timetable {
    // Deliberately out of order; construction must sort.
    let times = [
        (PrayerName::Isha, "19:30"),
        (PrayerName::Fajr, "05:00"),
        (PrayerName::Maghrib, "18:00"),
        (PrayerName::Sunrise, "06:30"),
        (PrayerName::Asr, "15:30"),
        (PrayerName::Dhuhr, "12:00"),
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

#[test]
fn a_full_day_of_planning() {
    let t = timetable();
    let mut planner = DayPlanner::new();

    // Morning reading fits inside one period.
    let created = planner
        .submit_activity("reading", ActivityKind::Rest, range("09:00", "10:30"), &t)
        .unwrap();
    assert_eq!(created.len(), 1);
    assert_eq!(created[0].period, PrayerName::Sunrise);
    assert!(!created[0].split);

    // Deep work crosses Dhuhr and Asr and is cut twice.
    let created = planner
        .submit_activity("deep work", ActivityKind::Work, range("11:00", "16:00"), &t)
        .unwrap();
    let pieces: Vec<(String, PrayerName)> = created
        .iter()
        .map(|b| (b.range.to_string(), b.period))
        .collect();
    assert_eq!(
        pieces,
        vec![
            ("11:00-12:00".to_string(), PrayerName::Sunrise),
            ("12:00-15:30".to_string(), PrayerName::Dhuhr),
            ("15:30-16:00".to_string(), PrayerName::Asr),
        ]
    );
    assert!(created.iter().all(|b| b.split && !b.done));

    // Evening walk after Maghrib.
    planner
        .submit_activity("walk", ActivityKind::Rest, range("18:15", "19:00"), &t)
        .unwrap();

    assert_eq!(planner.blocks().len(), 5);

    // The only free slots are between consecutive blocks; day edges are
    // not reported.
    let slots = free_slots(planner.blocks(), &t);
    let slot_ranges: Vec<String> = slots.iter().map(|s| s.range.to_string()).collect();
    assert_eq!(
        slot_ranges,
        vec!["10:30-11:00".to_string(), "16:00-18:15".to_string()]
    );
    assert_eq!(slots[0].duration_min, 30);
    assert_eq!(slots[0].period, PrayerName::Sunrise);

    // The merged view interleaves blocks and slots in start order.
    let entries = day_entries(planner.blocks(), &t);
    assert_eq!(entries.len(), 7);
    assert!(entries.windows(2).all(|pair| {
        pair[0].range().start() <= pair[1].range().start()
    }));
    assert!(matches!(entries[1], DayEntry::Free(_)));

    // 11:30 falls inside the first deep work fragment.
    let current: Vec<&DayEntry> = entries.iter().filter(|e| e.is_current(wc("11:30"))).collect();
    assert_eq!(current.len(), 1);
    assert_eq!(current[0].range().to_string(), "11:00-12:00");
}

#[test]
fn conflicting_submission_leaves_no_trace() {
    let t = timetable();
    let mut planner = DayPlanner::new();
    planner
        .submit_activity("meeting", ActivityKind::Work, range("12:30", "13:00"), &t)
        .unwrap();
    let before = planner.clone();

    let err = planner
        .submit_activity("overlap", ActivityKind::Work, range("11:00", "16:00"), &t)
        .unwrap_err();
    let ScheduleError::Conflict { block_id, occupied } = err else {
        panic!("expected a conflict");
    };
    assert_eq!(block_id, before.blocks()[0].id);
    assert_eq!(occupied, range("12:30", "13:00"));
    assert_eq!(planner, before);
}

#[test]
fn editing_across_boundaries_keeps_one_block() {
    let t = timetable();
    let mut planner = DayPlanner::new();
    planner
        .submit_activity("errand", ActivityKind::Other, range("09:00", "09:45"), &t)
        .unwrap();
    let id = planner.blocks()[0].id.clone();
    planner.set_done(&id, true);

    let updated = planner
        .edit_activity(&id, "errand", ActivityKind::Other, range("14:00", "18:30"), &t)
        .unwrap();
    assert_eq!(planner.blocks().len(), 1);
    assert_eq!(updated.range, range("14:00", "18:30"));
    assert_eq!(updated.period, PrayerName::Dhuhr);
    assert!(!updated.split);
    assert!(updated.done);
}

#[test]
fn removing_one_fragment_leaves_the_rest() {
    let t = timetable();
    let mut planner = DayPlanner::new();
    let created = planner
        .submit_activity("project", ActivityKind::Work, range("11:00", "16:00"), &t)
        .unwrap();
    assert_eq!(created.len(), 3);

    planner.remove_block(&created[1].id);
    assert_eq!(planner.blocks().len(), 2);

    // The freed middle now shows up as a slot between the survivors.
    let slots = free_slots(planner.blocks(), &t);
    assert_eq!(slots.len(), 1);
    assert_eq!(slots[0].range.to_string(), "12:00-15:30");
    assert_eq!(slots[0].period, PrayerName::Dhuhr);
}

#[test]
fn countdown_tracks_the_day_around() {
    let t = timetable();

    let midday = CountdownSnapshot::at(&t, wc("13:00"));
    assert_eq!(midday.prayer, PrayerName::Asr);
    assert_eq!((midday.hours, midday.minutes), (2, 30));

    let night = CountdownSnapshot::at(&t, wc("22:45"));
    assert_eq!(night.prayer, PrayerName::Fajr);
    assert_eq!((night.hours, night.minutes), (6, 15));

    let dawn = CountdownSnapshot::at(&t, wc("05:00"));
    assert_eq!(dawn.prayer, PrayerName::Sunrise);
    assert_eq!((dawn.hours, dawn.minutes), (1, 30));
}

#[test]
fn classification_and_splitting_agree() {
    let t = timetable();
    let mut planner = DayPlanner::new();
    let created = planner
        .submit_activity("span", ActivityKind::Work, range("05:30", "20:00"), &t)
        .unwrap();

    // One fragment per period touched, each classified by its own start.
    assert_eq!(created.len(), 6);
    for block in &created {
        assert_eq!(block.period, t.classify(block.range.start()));
    }
    let periods: Vec<PrayerName> = created.iter().map(|b| b.period).collect();
    assert_eq!(periods, PrayerName::ALL.to_vec());
}
