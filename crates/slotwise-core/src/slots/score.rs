//! Free-slot scoring and ranking.
//!
//! A free interval qualifies as a suggestion when it can hold the requested
//! duration. Qualifying slots get a small desirability score: mornings are
//! preferred, late afternoons are penalized.

use serde::{Deserialize, Serialize};

use super::interval::Interval;

/// Slots starting before noon get a morning bonus.
const NOON: i32 = 12 * 60;

/// Slots running past 16:00 get a lateness penalty.
const LATE_AFTERNOON: i32 = 16 * 60;

/// A free interval annotated with a desirability score.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct ScoredSlot {
    pub interval: Interval,
    pub score: i32,
}

/// Score a free interval against the requested duration.
///
/// Returns `None` when the slot is too short to qualify. Otherwise the score
/// starts at 0, gains 2 when the slot begins before noon, and loses 1 when
/// it ends after 16:00.
pub fn score_slot(interval: Interval, min_duration: i32) -> Option<ScoredSlot> {
    if interval.duration_minutes() < min_duration {
        return None;
    }

    let mut score = 0;
    if interval.start < NOON {
        score += 2;
    }
    if interval.end > LATE_AFTERNOON {
        score -= 1;
    }

    Some(ScoredSlot { interval, score })
}

/// Order scored slots best-first.
///
/// Sorts ascending on `(score, start, end)` and reverses, so the primary key
/// is score descending and, among equal scores, the later slot comes first.
pub fn rank_slots(mut slots: Vec<ScoredSlot>) -> Vec<ScoredSlot> {
    slots.sort_by_key(|s| (s.score, s.interval.start, s.interval.end));
    slots.reverse();
    slots
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn too_short_slot_is_dropped() {
        assert!(score_slot(Interval::new(600, 720), 180).is_none());
    }

    #[test]
    fn exact_fit_qualifies() {
        // 14:00-17:00 is exactly 180 minutes.
        let slot = score_slot(Interval::new(840, 1020), 180).unwrap();
        assert_eq!(slot.score, -1); // afternoon start, runs past 16:00
    }

    #[test]
    fn morning_slot_gets_bonus() {
        let slot = score_slot(Interval::new(600, 720), 30).unwrap();
        assert_eq!(slot.score, 2);
    }

    #[test]
    fn late_slot_gets_penalty() {
        let slot = score_slot(Interval::new(900, 1020), 30).unwrap();
        assert_eq!(slot.score, -1);
    }

    #[test]
    fn morning_slot_running_late_nets_one() {
        // Starts before noon and ends after 16:00: +2 - 1.
        let slot = score_slot(Interval::new(600, 1020), 30).unwrap();
        assert_eq!(slot.score, 1);
    }

    #[test]
    fn ranking_is_score_descending() {
        let slots = vec![
            score_slot(Interval::new(900, 1020), 30).unwrap(), // -1
            score_slot(Interval::new(600, 720), 30).unwrap(),  // 2
            score_slot(Interval::new(780, 900), 30).unwrap(),  // 0
        ];
        let ranked = rank_slots(slots);
        assert_eq!(
            ranked.iter().map(|s| s.score).collect::<Vec<_>>(),
            vec![2, 0, -1]
        );
    }

    #[test]
    fn ranking_tie_break_prefers_later_start() {
        // Two morning slots with the same score: the reverse-sort puts the
        // later one first.
        let slots = vec![
            score_slot(Interval::new(540, 600), 30).unwrap(),
            score_slot(Interval::new(630, 700), 30).unwrap(),
        ];
        let ranked = rank_slots(slots);
        assert_eq!(ranked[0].interval.start, 630);
        assert_eq!(ranked[1].interval.start, 540);
    }
}
