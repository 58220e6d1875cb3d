//! Interval arithmetic for a single working day.
//!
//! This module provides:
//! - Minute-of-day intervals and `HH:MM` parsing/formatting
//! - Busy-set construction with buffer padding and an optional lunch block
//! - Free-interval computation inside a work window
//! - Slot scoring and overlap detection

mod conflict;
mod free;
mod interval;
mod score;

pub use conflict::has_overlap;
pub use free::{apply_buffer, build_busy_set, day_totals, free_intervals, DayTotals, LUNCH_BREAK};
pub use interval::{format_time, parse_time, Interval, WorkWindow};
pub use score::{rank_slots, score_slot, ScoredSlot};
