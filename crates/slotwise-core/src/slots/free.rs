//! Busy-set construction and free-interval computation.
//!
//! The busy set is whatever the caller supplies (duplicates and overlaps are
//! legal input), optionally joined by a fixed lunch block and padded with a
//! transition buffer. Free intervals are the complement of the padded busy
//! set within the work window.

use serde::{Deserialize, Serialize};

use super::interval::{Interval, WorkWindow};

/// The fixed 12:00-13:00 lunch block.
pub const LUNCH_BREAK: Interval = Interval {
    start: 12 * 60,
    end: 13 * 60,
};

/// Assemble the busy set from raw meeting intervals.
///
/// Appends [`LUNCH_BREAK`] when `avoid_lunch` is set. No deduplication:
/// overlapping or duplicate meetings stay in the set and are absorbed later
/// by the sweep.
pub fn build_busy_set(meetings: &[Interval], avoid_lunch: bool) -> Vec<Interval> {
    let mut busy = meetings.to_vec();
    if avoid_lunch {
        busy.push(LUNCH_BREAK);
    }
    busy
}

/// Pad every busy interval by `buffer_minutes` on both ends.
///
/// Each interval is expanded independently and the set is returned unsorted.
/// Padding is not clamped to the work window: the free-interval sweep starts
/// at the window start and ends at the window end, which truncates the
/// excess naturally.
pub fn apply_buffer(busy: &[Interval], buffer_minutes: i32) -> Vec<Interval> {
    busy.iter().map(|iv| iv.padded(buffer_minutes)).collect()
}

/// Compute the free intervals inside `window` not covered by the padded
/// busy set.
///
/// Single left-to-right sweep over the set sorted by start: the cursor only
/// moves forward (`max`), so overlapping or contained busy intervals are
/// absorbed, and every emission is guarded by a strict `<` so degenerate
/// intervals are never produced. The result is disjoint and sorted by
/// construction.
pub fn free_intervals(busy: &[Interval], window: WorkWindow) -> Vec<Interval> {
    let mut sorted = busy.to_vec();
    sorted.sort_by_key(|iv| iv.start);

    let mut free = Vec::new();
    let mut cursor = window.start;

    for iv in &sorted {
        if cursor < iv.start {
            free.push(Interval::new(cursor, iv.start));
        }
        cursor = cursor.max(iv.end);
    }

    if cursor < window.end {
        free.push(Interval::new(cursor, window.end));
    }

    free
}

/// Minute totals for one scheduling pass.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct DayTotals {
    pub total_minutes: i32,
    pub busy_minutes: i32,
    pub free_minutes: i32,
}

/// Compute total/busy/free minutes for the window and padded busy set.
///
/// Busy time sums `max(0, end - start)` per interval, so reversed intervals
/// never report negative time. Overlapping padded intervals are each counted
/// in full; free time here can therefore fall below the summed lengths of
/// [`free_intervals`]' output.
pub fn day_totals(window: WorkWindow, busy: &[Interval]) -> DayTotals {
    let total_minutes = window.total_minutes();
    let busy_minutes: i32 = busy.iter().map(|iv| iv.duration_minutes().max(0)).sum();

    DayTotals {
        total_minutes,
        busy_minutes,
        free_minutes: total_minutes - busy_minutes,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn window() -> WorkWindow {
        WorkWindow::new(9 * 60, 17 * 60)
    }

    #[test]
    fn busy_set_appends_lunch() {
        let meetings = vec![Interval::new(540, 600)];
        let busy = build_busy_set(&meetings, true);
        assert_eq!(busy.len(), 2);
        assert_eq!(busy[1], LUNCH_BREAK);

        let busy = build_busy_set(&meetings, false);
        assert_eq!(busy.len(), 1);
    }

    #[test]
    fn busy_set_keeps_duplicates() {
        let meetings = vec![Interval::new(540, 600), Interval::new(540, 600)];
        assert_eq!(build_busy_set(&meetings, false).len(), 2);
    }

    #[test]
    fn free_set_for_empty_day() {
        let free = free_intervals(&[], window());
        assert_eq!(free, vec![Interval::new(540, 1020)]);
    }

    #[test]
    fn free_set_basic_day() {
        // Work 09:00-17:00, meetings 09:00-10:00 and 13:00-14:00, lunch on,
        // no buffer.
        let meetings = vec![Interval::new(540, 600), Interval::new(780, 840)];
        let busy = build_busy_set(&meetings, true);
        let free = free_intervals(&busy, window());
        assert_eq!(
            free,
            vec![Interval::new(600, 720), Interval::new(840, 1020)]
        );
    }

    #[test]
    fn free_set_with_buffer() {
        // Same day with a 10 minute buffer: lunch is padded too.
        let meetings = vec![Interval::new(540, 600), Interval::new(780, 840)];
        let busy = apply_buffer(&build_busy_set(&meetings, true), 10);
        let free = free_intervals(&busy, window());
        assert_eq!(
            free,
            vec![Interval::new(610, 710), Interval::new(850, 1020)]
        );
    }

    #[test]
    fn free_set_absorbs_contained_intervals() {
        // One long meeting containing two short ones.
        let busy = vec![
            Interval::new(540, 720),
            Interval::new(560, 580),
            Interval::new(600, 620),
        ];
        let free = free_intervals(&busy, window());
        assert_eq!(free, vec![Interval::new(720, 1020)]);
    }

    #[test]
    fn free_set_never_emits_degenerate_intervals() {
        // Meeting flush against both window edges.
        let busy = vec![Interval::new(540, 1020)];
        assert!(free_intervals(&busy, window()).is_empty());
    }

    #[test]
    fn free_set_tolerates_reversed_intervals() {
        // Reversed input (end before start) passes parsing; the emission
        // guard still keeps every emitted interval well-formed.
        let reversed = vec![Interval::new(625, 585), Interval::new(700, 760)];
        let free = free_intervals(&reversed, window());
        for iv in &free {
            assert!(iv.start < iv.end);
        }
        // The well-formed meeting still carves its hole.
        assert!(free.contains(&Interval::new(760, 1020)));
    }

    #[test]
    fn free_set_clips_padding_at_window_edges() {
        // Padding past the window start is truncated because the sweep
        // begins at the window start.
        let busy = apply_buffer(&[Interval::new(545, 600)], 30);
        let free = free_intervals(&busy, window());
        assert_eq!(free, vec![Interval::new(630, 1020)]);
    }

    #[test]
    fn totals_basic_day() {
        let meetings = vec![Interval::new(540, 600), Interval::new(780, 840)];
        let busy = build_busy_set(&meetings, true);
        let totals = day_totals(window(), &busy);
        assert_eq!(totals.total_minutes, 480);
        assert_eq!(totals.busy_minutes, 180);
        assert_eq!(totals.free_minutes, 300);
    }

    #[test]
    fn totals_clamp_inverted_intervals_to_zero() {
        let busy = vec![Interval::new(625, 585)];
        let totals = day_totals(window(), &busy);
        assert_eq!(totals.busy_minutes, 0);
        assert_eq!(totals.free_minutes, 480);
    }

    #[test]
    fn totals_double_count_overlap() {
        // Two fully overlapping hours both count; inherited behavior.
        let busy = vec![Interval::new(540, 600), Interval::new(540, 600)];
        let totals = day_totals(window(), &busy);
        assert_eq!(totals.busy_minutes, 120);
    }
}
