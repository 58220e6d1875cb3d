//! Overlap detection across the padded busy set.

use super::interval::Interval;

/// Report whether any two sort-adjacent busy intervals overlap.
///
/// The set is sorted by start and only adjacent pairs are compared: a pair
/// conflicts when the earlier interval ends after the later one starts.
/// Pairs further apart are never compared directly.
pub fn has_overlap(busy: &[Interval]) -> bool {
    let mut sorted = busy.to_vec();
    sorted.sort_by_key(|iv| iv.start);
    sorted.windows(2).any(|pair| pair[0].end > pair[1].start)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn disjoint_set_has_no_overlap() {
        let busy = vec![Interval::new(540, 600), Interval::new(660, 720)];
        assert!(!has_overlap(&busy));
    }

    #[test]
    fn touching_intervals_do_not_overlap() {
        let busy = vec![Interval::new(540, 600), Interval::new(600, 660)];
        assert!(!has_overlap(&busy));
    }

    #[test]
    fn overlapping_pair_is_detected() {
        // 09:00-10:30 vs 10:00-11:00.
        let busy = vec![Interval::new(540, 630), Interval::new(600, 660)];
        assert!(has_overlap(&busy));
    }

    #[test]
    fn detection_is_order_insensitive() {
        let busy = vec![Interval::new(600, 660), Interval::new(540, 630)];
        assert!(has_overlap(&busy));
    }

    #[test]
    fn empty_and_single_sets_are_clean() {
        assert!(!has_overlap(&[]));
        assert!(!has_overlap(&[Interval::new(540, 600)]));
    }

    #[test]
    fn containment_is_caught_at_the_first_pair() {
        // A spans both B and C; the A-B pair already trips the rule even
        // though B and C are disjoint.
        let busy = vec![
            Interval::new(540, 720),
            Interval::new(550, 560),
            Interval::new(600, 620),
        ];
        assert!(has_overlap(&busy));
    }
}
