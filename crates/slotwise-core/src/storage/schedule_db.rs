//! SQLite-based storage for meetings and tasks.
//!
//! The store is a plain row store: the planner never reads it directly, the
//! CLI loads a snapshot of rows and hands plain intervals to the planner.

use std::path::Path;

use rusqlite::{params, Connection};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use super::data_dir;
use crate::error::{DatabaseError, ParseError};
use crate::slots::Interval;

/// A stored meeting. Times are kept as `HH:MM` text, exactly as entered.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Meeting {
    pub id: String,
    pub title: String,
    pub start: String,
    pub end: String,
}

impl Meeting {
    /// Parse the stored times into an engine interval.
    ///
    /// # Errors
    /// Returns [`ParseError`] when the stored text is malformed; the caller
    /// decides whether to skip the row or surface the failure.
    pub fn interval(&self) -> Result<Interval, ParseError> {
        Ok(Interval::new(
            crate::slots::parse_time(&self.start)?,
            crate::slots::parse_time(&self.end)?,
        ))
    }
}

/// Task priority buckets.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum TaskPriority {
    High,
    Medium,
    Low,
}

/// Parse task priority from a database string.
fn parse_task_priority(priority_str: &str) -> TaskPriority {
    match priority_str {
        "High" => TaskPriority::High,
        "Low" => TaskPriority::Low,
        _ => TaskPriority::Medium,
    }
}

/// Format task priority for database storage.
fn format_task_priority(priority: TaskPriority) -> &'static str {
    match priority {
        TaskPriority::High => "High",
        TaskPriority::Medium => "Medium",
        TaskPriority::Low => "Low",
    }
}

/// Sort rank for listing, High first.
fn priority_rank(priority: TaskPriority) -> i32 {
    match priority {
        TaskPriority::High => 0,
        TaskPriority::Medium => 1,
        TaskPriority::Low => 2,
    }
}

/// A stored task.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TaskRecord {
    pub id: String,
    pub name: String,
    pub priority: TaskPriority,
}

/// SQLite database for meeting and task storage.
pub struct ScheduleDb {
    conn: Connection,
}

impl ScheduleDb {
    /// Open the database at `~/.config/slotwise/slotwise.db`.
    ///
    /// Creates tables if they don't exist.
    ///
    /// # Errors
    /// Returns an error if the database cannot be opened or migrated.
    pub fn open() -> Result<Self, Box<dyn std::error::Error>> {
        let path = data_dir()?.join("slotwise.db");
        let db = Self::open_at(&path)
            .map_err(|source| DatabaseError::OpenFailed { path, source })?;
        Ok(db)
    }

    /// Open the database at an explicit path.
    ///
    /// # Errors
    /// Returns an error if the database cannot be opened or migrated.
    pub fn open_at(path: &Path) -> Result<Self, rusqlite::Error> {
        let conn = Connection::open(path)?;
        let db = Self { conn };
        db.migrate()?;
        Ok(db)
    }

    /// Open an in-memory database (for tests).
    #[cfg(test)]
    pub fn open_memory() -> Result<Self, rusqlite::Error> {
        let conn = Connection::open_in_memory()?;
        let db = Self { conn };
        db.migrate()?;
        Ok(db)
    }

    fn migrate(&self) -> Result<(), rusqlite::Error> {
        self.conn.execute_batch(
            "CREATE TABLE IF NOT EXISTS meetings (
                id         TEXT PRIMARY KEY,
                title      TEXT NOT NULL,
                start_time TEXT NOT NULL,
                end_time   TEXT NOT NULL
            );

            CREATE TABLE IF NOT EXISTS tasks (
                id       TEXT PRIMARY KEY,
                name     TEXT NOT NULL,
                priority TEXT NOT NULL DEFAULT 'Medium'
            );",
        )?;
        Ok(())
    }

    // === Meeting CRUD ===

    /// Insert a meeting and return the stored record.
    pub fn insert_meeting(
        &self,
        title: &str,
        start: &str,
        end: &str,
    ) -> Result<Meeting, rusqlite::Error> {
        let meeting = Meeting {
            id: Uuid::new_v4().to_string(),
            title: title.to_string(),
            start: start.to_string(),
            end: end.to_string(),
        };

        self.conn.execute(
            "INSERT INTO meetings (id, title, start_time, end_time) VALUES (?1, ?2, ?3, ?4)",
            params![meeting.id, meeting.title, meeting.start, meeting.end],
        )?;
        Ok(meeting)
    }

    /// List all meetings ordered by start time text.
    pub fn list_meetings(&self) -> Result<Vec<Meeting>, rusqlite::Error> {
        let mut stmt = self
            .conn
            .prepare("SELECT id, title, start_time, end_time FROM meetings ORDER BY start_time ASC")?;

        let meetings = stmt.query_map([], |row| {
            Ok(Meeting {
                id: row.get(0)?,
                title: row.get(1)?,
                start: row.get(2)?,
                end: row.get(3)?,
            })
        })?;

        meetings.collect()
    }

    /// Delete a meeting. Returns false when no row matched.
    pub fn delete_meeting(&self, id: &str) -> Result<bool, rusqlite::Error> {
        let affected = self
            .conn
            .execute("DELETE FROM meetings WHERE id = ?1", params![id])?;
        Ok(affected > 0)
    }

    // === Task CRUD ===

    /// Insert a task and return the stored record.
    pub fn insert_task(
        &self,
        name: &str,
        priority: TaskPriority,
    ) -> Result<TaskRecord, rusqlite::Error> {
        let task = TaskRecord {
            id: Uuid::new_v4().to_string(),
            name: name.to_string(),
            priority,
        };

        self.conn.execute(
            "INSERT INTO tasks (id, name, priority) VALUES (?1, ?2, ?3)",
            params![task.id, task.name, format_task_priority(task.priority)],
        )?;
        Ok(task)
    }

    /// List all tasks, High priority first.
    pub fn list_tasks(&self) -> Result<Vec<TaskRecord>, rusqlite::Error> {
        let mut stmt = self.conn.prepare("SELECT id, name, priority FROM tasks")?;

        let tasks = stmt.query_map([], |row| {
            let priority_str: String = row.get(2)?;
            Ok(TaskRecord {
                id: row.get(0)?,
                name: row.get(1)?,
                priority: parse_task_priority(&priority_str),
            })
        })?;

        let mut tasks = tasks.collect::<Result<Vec<TaskRecord>, _>>()?;
        tasks.sort_by_key(|t| priority_rank(t.priority));
        Ok(tasks)
    }

    /// Delete a task. Returns false when no row matched.
    pub fn delete_task(&self, id: &str) -> Result<bool, rusqlite::Error> {
        let affected = self
            .conn
            .execute("DELETE FROM tasks WHERE id = ?1", params![id])?;
        Ok(affected > 0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn insert_and_list_meetings() {
        let db = ScheduleDb::open_memory().unwrap();
        db.insert_meeting("Standup", "09:00", "09:30").unwrap();
        db.insert_meeting("Review", "14:00", "15:00").unwrap();

        let meetings = db.list_meetings().unwrap();
        assert_eq!(meetings.len(), 2);
        assert_eq!(meetings[0].title, "Standup");
        assert_eq!(meetings[1].start, "14:00");
    }

    #[test]
    fn meetings_are_listed_by_start() {
        let db = ScheduleDb::open_memory().unwrap();
        db.insert_meeting("Late", "15:00", "16:00").unwrap();
        db.insert_meeting("Early", "09:00", "10:00").unwrap();

        let meetings = db.list_meetings().unwrap();
        assert_eq!(meetings[0].title, "Early");
    }

    #[test]
    fn delete_meeting_reports_missing_rows() {
        let db = ScheduleDb::open_memory().unwrap();
        let meeting = db.insert_meeting("Standup", "09:00", "09:30").unwrap();

        assert!(db.delete_meeting(&meeting.id).unwrap());
        assert!(!db.delete_meeting(&meeting.id).unwrap());
        assert!(db.list_meetings().unwrap().is_empty());
    }

    #[test]
    fn meeting_interval_parses_stored_text() {
        let db = ScheduleDb::open_memory().unwrap();
        let meeting = db.insert_meeting("Standup", "09:00", "09:30").unwrap();
        assert_eq!(meeting.interval().unwrap(), Interval::new(540, 570));
    }

    #[test]
    fn meeting_interval_surfaces_bad_rows() {
        let meeting = Meeting {
            id: "x".to_string(),
            title: "Broken".to_string(),
            start: "nine".to_string(),
            end: "10:00".to_string(),
        };
        assert!(meeting.interval().is_err());
    }

    #[test]
    fn tasks_round_trip_with_priority() {
        let db = ScheduleDb::open_memory().unwrap();
        db.insert_task("Write report", TaskPriority::Low).unwrap();
        db.insert_task("Fix build", TaskPriority::High).unwrap();
        db.insert_task("Email team", TaskPriority::Medium).unwrap();

        let tasks = db.list_tasks().unwrap();
        assert_eq!(tasks.len(), 3);
        // High first.
        assert_eq!(tasks[0].name, "Fix build");
        assert_eq!(tasks[0].priority, TaskPriority::High);
        assert_eq!(tasks[2].priority, TaskPriority::Low);
    }

    #[test]
    fn unknown_priority_text_falls_back_to_medium() {
        assert_eq!(parse_task_priority("Urgent"), TaskPriority::Medium);
    }

    #[test]
    fn delete_task_reports_missing_rows() {
        let db = ScheduleDb::open_memory().unwrap();
        let task = db.insert_task("Write report", TaskPriority::High).unwrap();
        assert!(db.delete_task(&task.id).unwrap());
        assert!(!db.delete_task(&task.id).unwrap());
    }
}
