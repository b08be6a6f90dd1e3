use super::task::{Task, TaskId};
use chrono::NaiveDateTime;
use std::sync::Arc;
use tracing::debug;

/// Immutable view of the task collection at one point in time
pub type Snapshot = Arc<[Task]>;

/// In-memory, insertion-ordered task collection.
///
/// Every mutation that changes something installs a new snapshot. Mutations that
/// change nothing leave the current snapshot in place, so `Arc::ptr_eq` on two
/// snapshots tells whether the collection changed in between.
#[derive(Debug, Clone)]
pub struct TaskStore {
    snapshot: Snapshot,
}

impl Default for TaskStore {
    fn default() -> Self {
        Self::new()
    }
}

impl TaskStore {
    pub fn new() -> Self {
        Self {
            snapshot: Arc::from(Vec::new()),
        }
    }

    /// Current snapshot (cheap clone of the handle)
    pub fn snapshot(&self) -> Snapshot {
        Arc::clone(&self.snapshot)
    }

    pub fn tasks(&self) -> &[Task] {
        &self.snapshot
    }

    pub fn len(&self) -> usize {
        self.snapshot.len()
    }

    pub fn is_empty(&self) -> bool {
        self.snapshot.is_empty()
    }

    pub fn get(&self, id: TaskId) -> Option<&Task> {
        self.snapshot.iter().find(|t| t.id == id)
    }

    /// Append a new task. Blank text is ignored and yields `None`.
    pub fn add(&mut self, text: &str, time: Option<NaiveDateTime>) -> Option<TaskId> {
        if text.trim().is_empty() {
            return None;
        }

        let task = Task::new(text.to_string(), time);
        let id = task.id;
        debug!(%id, has_alarm = time.is_some(), "task added");

        let mut tasks = self.snapshot.to_vec();
        tasks.push(task);
        self.snapshot = Arc::from(tasks);
        Some(id)
    }

    /// Flip `done` for the task with `id`
    pub fn toggle_complete(&mut self, id: TaskId) -> bool {
        self.update(id, |task| {
            task.done = !task.done;
            true
        })
    }

    /// Remove the task with `id`
    pub fn delete(&mut self, id: TaskId) -> bool {
        if self.get(id).is_none() {
            return false;
        }
        let tasks: Vec<Task> = self.snapshot.iter().filter(|t| t.id != id).cloned().collect();
        self.snapshot = Arc::from(tasks);
        debug!(%id, "task deleted");
        true
    }

    /// Record that the alarm for `id` has fired. Idempotent.
    pub fn mark_notified(&mut self, id: TaskId) -> bool {
        self.update(id, |task| {
            if task.notified {
                return false;
            }
            task.notified = true;
            true
        })
    }

    /// Apply `f` to a copy of the matching task and install a new snapshot if it
    /// reports a change
    fn update<F>(&mut self, id: TaskId, f: F) -> bool
    where
        F: FnOnce(&mut Task) -> bool,
    {
        let Some(index) = self.snapshot.iter().position(|t| t.id == id) else {
            return false;
        };

        let mut task = self.snapshot[index].clone();
        if !f(&mut task) {
            return false;
        }

        let mut tasks = self.snapshot.to_vec();
        tasks[index] = task;
        self.snapshot = Arc::from(tasks);
        true
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::NaiveDate;
    use pretty_assertions::assert_eq;

    fn alarm() -> NaiveDateTime {
        NaiveDate::from_ymd_opt(2024, 1, 2)
            .unwrap()
            .and_hms_opt(9, 0, 0)
            .unwrap()
    }

    #[test]
    fn test_add_blank_text_is_ignored() {
        let mut store = TaskStore::new();
        let before = store.snapshot();

        assert_eq!(store.add("", None), None);
        assert_eq!(store.add("   \t ", Some(alarm())), None);

        assert!(store.is_empty());
        assert!(Arc::ptr_eq(&before, &store.snapshot()));
    }

    #[test]
    fn test_add_appends_fresh_task() {
        let mut store = TaskStore::new();
        store.add("First", None);

        let id = store.add("Buy milk", Some(alarm())).unwrap();

        assert_eq!(store.len(), 2);
        let task = store.get(id).unwrap();
        assert_eq!(task.text, "Buy milk");
        assert_eq!(task.time, Some(alarm()));
        assert!(!task.done);
        assert!(!task.notified);
        assert_eq!(store.tasks()[1].id, id);
    }

    #[test]
    fn test_add_keeps_text_as_typed() {
        let mut store = TaskStore::new();
        let id = store.add("  padded ", None).unwrap();
        assert_eq!(store.get(id).unwrap().text, "  padded ");
    }

    #[test]
    fn test_toggle_complete_twice_restores() {
        let mut store = TaskStore::new();
        let id = store.add("Task", None).unwrap();

        assert!(store.toggle_complete(id));
        assert!(store.get(id).unwrap().done);

        assert!(store.toggle_complete(id));
        assert!(!store.get(id).unwrap().done);
    }

    #[test]
    fn test_mutation_replaces_snapshot() {
        let mut store = TaskStore::new();
        let id = store.add("Task", None).unwrap();
        let before = store.snapshot();

        store.toggle_complete(id);

        assert!(!Arc::ptr_eq(&before, &store.snapshot()));
        // The old snapshot is untouched
        assert!(!before[0].done);
        assert!(store.tasks()[0].done);
    }

    #[test]
    fn test_unknown_id_is_noop() {
        let mut store = TaskStore::new();
        store.add("Keep me", None);
        let before = store.snapshot();
        let stranger = TaskId::new();

        assert!(!store.delete(stranger));
        assert!(!store.toggle_complete(stranger));
        assert!(!store.mark_notified(stranger));

        assert_eq!(store.tasks(), &before[..]);
        assert!(Arc::ptr_eq(&before, &store.snapshot()));
    }

    #[test]
    fn test_delete_preserves_order() {
        let mut store = TaskStore::new();
        let a = store.add("A", None).unwrap();
        let b = store.add("B", None).unwrap();
        let c = store.add("C", None).unwrap();

        assert!(store.delete(b));

        let ids: Vec<TaskId> = store.tasks().iter().map(|t| t.id).collect();
        assert_eq!(ids, vec![a, c]);
    }

    #[test]
    fn test_mark_notified_is_idempotent() {
        let mut store = TaskStore::new();
        let id = store.add("Alarm", Some(alarm())).unwrap();

        assert!(store.mark_notified(id));
        assert!(store.get(id).unwrap().notified);
        let after_first = store.snapshot();

        assert!(!store.mark_notified(id));
        assert!(store.get(id).unwrap().notified);
        assert!(Arc::ptr_eq(&after_first, &store.snapshot()));
    }
}
