pub mod enums;
pub mod store;
pub mod task;
pub mod views;

pub use enums::{FormField, Theme, UiMode};
pub use store::{Snapshot, TaskStore};
pub use task::{truncate_to_minute, Task, TaskId};
pub use views::{alarm_clock_label, alarm_label, done_marker, tomorrow_tasks, yesterday_tasks};
