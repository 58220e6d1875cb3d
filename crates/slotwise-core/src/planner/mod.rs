//! Day planning pass.
//!
//! This module composes the interval primitives into one scheduling pass:
//! - Builds the busy set from a meeting snapshot (plus optional lunch)
//! - Pads it with the transition buffer
//! - Computes free intervals, minute totals, and ranked slot suggestions
//! - Flags overlapping meetings
//!
//! The planner holds no state between passes; every call recomputes from the
//! snapshot it is given.

use serde::{Deserialize, Serialize};

use crate::slots::{
    apply_buffer, build_busy_set, day_totals, free_intervals, has_overlap, rank_slots, score_slot,
    DayTotals, Interval, ScoredSlot, WorkWindow,
};

/// Planner configuration.
#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
pub struct PlannerConfig {
    /// Desired meeting duration (minutes)
    pub duration_minutes: i32,
    /// Transition buffer around every busy interval (minutes)
    pub buffer_minutes: i32,
    /// Block out 12:00-13:00
    pub avoid_lunch: bool,
}

impl Default for PlannerConfig {
    fn default() -> Self {
        Self {
            duration_minutes: 30,
            buffer_minutes: 10,
            avoid_lunch: true,
        }
    }
}

/// Result of one scheduling pass.
///
/// `busy` is the unbuffered busy set (meetings plus the lunch block when
/// enabled) for rendering and export; `free`, `totals`, `suggestions`, and
/// `has_overlap` are computed from the buffered set.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DayPlan {
    pub window: WorkWindow,
    pub busy: Vec<Interval>,
    pub totals: DayTotals,
    pub free: Vec<Interval>,
    pub suggestions: Vec<ScoredSlot>,
    pub has_overlap: bool,
}

/// Stateless planner for a single working day.
pub struct DayPlanner {
    config: PlannerConfig,
}

impl DayPlanner {
    /// Create a new planner with default config.
    pub fn new() -> Self {
        Self {
            config: PlannerConfig::default(),
        }
    }

    /// Create with custom config.
    pub fn with_config(config: PlannerConfig) -> Self {
        Self { config }
    }

    /// Run one scheduling pass over a snapshot of meetings.
    ///
    /// Pure function of `(window, meetings, config)`: identical inputs give
    /// identical plans.
    pub fn plan(&self, window: WorkWindow, meetings: &[Interval]) -> DayPlan {
        let busy = build_busy_set(meetings, self.config.avoid_lunch);
        let buffered = apply_buffer(&busy, self.config.buffer_minutes);

        let totals = day_totals(window, &buffered);
        let free = free_intervals(&buffered, window);
        let has_overlap = has_overlap(&buffered);

        let suggestions = rank_slots(
            free.iter()
                .filter_map(|iv| score_slot(*iv, self.config.duration_minutes))
                .collect(),
        );

        tracing::debug!(
            meetings = meetings.len(),
            free = free.len(),
            suggestions = suggestions.len(),
            has_overlap,
            "planned day {window}"
        );

        DayPlan {
            window,
            busy,
            totals,
            free,
            suggestions,
            has_overlap,
        }
    }
}

impl Default for DayPlanner {
    fn default() -> Self {
        Self::new()
    }
}
