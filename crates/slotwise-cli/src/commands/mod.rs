pub mod config;
pub mod export;
pub mod meeting;
pub mod plan;
pub mod task;

use slotwise_core::{Interval, ScheduleDb};

/// Load the meeting snapshot from the store, skipping rows whose stored
/// times no longer parse. Each skipped row gets its own warning so one bad
/// entry never hides the rest.
pub fn load_meeting_snapshot(db: &ScheduleDb) -> Result<Vec<Interval>, Box<dyn std::error::Error>> {
    let mut snapshot = Vec::new();
    for meeting in db.list_meetings()? {
        match meeting.interval() {
            Ok(iv) => snapshot.push(iv),
            Err(e) => eprintln!("warning: skipping meeting '{}': {e}", meeting.title),
        }
    }
    Ok(snapshot)
}

/// Parse comma-separated `HH:MM-HH:MM` entries, skipping malformed ones
/// with a warning per entry.
pub fn parse_busy_list(text: &str) -> Vec<Interval> {
    let mut intervals = Vec::new();
    for piece in text.split(',') {
        let piece = piece.trim();
        if piece.is_empty() {
            continue;
        }
        match Interval::parse(piece) {
            Ok(iv) => intervals.push(iv),
            Err(e) => eprintln!("warning: skipping '{piece}': {e}"),
        }
    }
    intervals
}
