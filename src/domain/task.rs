use chrono::{NaiveDateTime, Timelike};
use std::fmt;
use uuid::Uuid;

/// Identifier for a task. Time-ordered, so ids created later compare greater.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct TaskId(Uuid);

impl TaskId {
    pub fn new() -> Self {
        Self(Uuid::now_v7())
    }
}

impl Default for TaskId {
    fn default() -> Self {
        Self::new()
    }
}

impl fmt::Display for TaskId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        self.0.fmt(f)
    }
}

/// A todo item with an optional alarm
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Task {
    /// Unique ID, assigned at creation
    pub id: TaskId,
    /// Display text (never blank)
    pub text: String,
    /// Alarm moment in the configured zone, minute precision
    pub time: Option<NaiveDateTime>,
    /// Whether the task has been completed
    pub done: bool,
    /// Whether the alarm has already fired
    pub notified: bool,
}

impl Task {
    pub fn new(text: String, time: Option<NaiveDateTime>) -> Self {
        Self {
            id: TaskId::new(),
            text,
            time: time.map(truncate_to_minute),
            done: false,
            notified: false,
        }
    }

    /// Alarm time with seconds dropped
    pub fn alarm_minute(&self) -> Option<NaiveDateTime> {
        self.time.map(truncate_to_minute)
    }

    /// Whether the alarm should fire at `minute` (already truncated)
    pub fn is_due_at(&self, minute: NaiveDateTime) -> bool {
        !self.notified && self.alarm_minute() == Some(minute)
    }
}

/// Drop seconds and sub-second precision
pub fn truncate_to_minute(time: NaiveDateTime) -> NaiveDateTime {
    time.with_second(0)
        .and_then(|t| t.with_nanosecond(0))
        .unwrap_or(time)
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::NaiveDate;

    fn at(h: u32, m: u32, s: u32) -> NaiveDateTime {
        NaiveDate::from_ymd_opt(2024, 1, 2)
            .unwrap()
            .and_hms_opt(h, m, s)
            .unwrap()
    }

    #[test]
    fn test_task_new_defaults() {
        let task = Task::new("Buy milk".to_string(), Some(at(9, 0, 0)));
        assert_eq!(task.text, "Buy milk");
        assert_eq!(task.time, Some(at(9, 0, 0)));
        assert!(!task.done);
        assert!(!task.notified);
    }

    #[test]
    fn test_task_new_truncates_seconds() {
        let task = Task::new("Call".to_string(), Some(at(9, 0, 42)));
        assert_eq!(task.time, Some(at(9, 0, 0)));
    }

    #[test]
    fn test_ids_are_unique_and_ordered() {
        let first = TaskId::new();
        let second = TaskId::new();
        assert_ne!(first, second);
        assert!(first < second);
    }

    #[test]
    fn test_is_due_at() {
        let mut task = Task::new("A".to_string(), Some(at(9, 0, 0)));
        assert!(task.is_due_at(at(9, 0, 0)));
        assert!(!task.is_due_at(at(9, 1, 0)));

        task.notified = true;
        assert!(!task.is_due_at(at(9, 0, 0)));
    }

    #[test]
    fn test_task_without_alarm_is_never_due() {
        let task = Task::new("No alarm".to_string(), None);
        assert!(!task.is_due_at(at(9, 0, 0)));
    }

    #[test]
    fn test_truncate_to_minute() {
        assert_eq!(truncate_to_minute(at(23, 59, 59)), at(23, 59, 0));
        assert_eq!(truncate_to_minute(at(8, 15, 0)), at(8, 15, 0));
    }
}
