//! Splitting a requested activity at prayer boundaries.

use crate::interval::TimeRange;
use crate::prayer::Timetable;
use crate::schedule::{ActivityKind, TimeBlock};

/// Cuts an activity at every prayer boundary strictly inside its range and
/// returns one block per resulting piece.
///
/// The pieces partition the request exactly: the first starts at the
/// request's start, the last ends at its end, and consecutive pieces meet
/// with no gap. A boundary at the request's start or end is not a cut.
/// When at least one cut happened, every piece is marked `split`; a
/// request contained in a single period comes back as one unmarked block.
pub fn split_activity(
    title: &str,
    kind: ActivityKind,
    range: TimeRange,
    timetable: &Timetable,
) -> Vec<TimeBlock> {
    let mut edges = vec![range.start()];
    for boundary in timetable.boundaries() {
        if range.start() < boundary.time && boundary.time < range.end() {
            edges.push(boundary.time);
        }
    }
    edges.push(range.end());
    // Boundaries arrive sorted, so the edges are already in order; dedup
    // guards against degenerate timetables with coinciding boundaries.
    edges.dedup();

    let mut blocks: Vec<TimeBlock> = edges
        .windows(2)
        .map(|pair| {
            let piece = TimeRange::between(pair[0], pair[1]);
            TimeBlock::new(title, kind, piece, timetable.classify(pair[0]))
        })
        .collect();

    if blocks.len() > 1 {
        for block in &mut blocks {
            block.split = true;
        }
    }
    blocks
}
