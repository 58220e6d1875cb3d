//! # Slotwise Core Library
//!
//! This library provides the core logic for the Slotwise day-planning
//! assistant. It implements a CLI-first philosophy where all operations are
//! available via a standalone CLI binary; any GUI would be a thin layer over
//! the same core library.
//!
//! ## Architecture
//!
//! - **Slots**: minute-of-day interval arithmetic -- parsing, buffering,
//!   free-interval computation, slot scoring, and overlap detection
//! - **Planner**: a stateless pass that turns a work window plus a meeting
//!   snapshot into a full day plan
//! - **Storage**: SQLite-based meeting/task storage and TOML-based
//!   configuration
//! - **Export**: CSV formatting for schedules and free slots
//!
//! ## Key Components
//!
//! - [`DayPlanner`]: computes a [`DayPlan`] from a snapshot of meetings
//! - [`ScheduleDb`]: meeting and task persistence
//! - [`Config`]: application configuration management

pub mod error;
pub mod export;
pub mod planner;
pub mod slots;
pub mod storage;

pub use error::{ConfigError, CoreError, DatabaseError, ParseError};
pub use planner::{DayPlan, DayPlanner, PlannerConfig};
pub use slots::{DayTotals, Interval, ScoredSlot, WorkWindow};
pub use storage::{Config, Meeting, ScheduleDb, TaskPriority, TaskRecord};
