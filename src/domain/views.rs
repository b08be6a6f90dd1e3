use super::task::Task;
use chrono::{Days, NaiveDate, NaiveDateTime};

/// Pending tasks whose alarm falls on the day after `today`
pub fn tomorrow_tasks(tasks: &[Task], today: NaiveDate) -> Vec<&Task> {
    let Some(tomorrow) = today.checked_add_days(Days::new(1)) else {
        return Vec::new();
    };
    tasks
        .iter()
        .filter(|t| !t.done && alarm_date(t) == Some(tomorrow))
        .collect()
}

/// Completed tasks whose alarm fell on the day before `today`
pub fn yesterday_tasks(tasks: &[Task], today: NaiveDate) -> Vec<&Task> {
    let Some(yesterday) = today.checked_sub_days(Days::new(1)) else {
        return Vec::new();
    };
    tasks
        .iter()
        .filter(|t| t.done && alarm_date(t) == Some(yesterday))
        .collect()
}

fn alarm_date(task: &Task) -> Option<NaiveDate> {
    task.time.map(|t| t.date())
}

/// Alarm label for the main list, e.g. "02 Jan 09:00 AM"
pub fn alarm_label(time: NaiveDateTime) -> String {
    time.format("%d %b %I:%M %p").to_string()
}

/// Time-of-day label for the tomorrow pane, e.g. "09:00 AM"
pub fn alarm_clock_label(time: NaiveDateTime) -> String {
    time.format("%I:%M %p").to_string()
}

/// Checkbox glyph for a task
pub fn done_marker(task: &Task) -> &'static str {
    if task.done {
        "[x]"
    } else {
        "[ ]"
    }
}
