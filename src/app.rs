use crate::alarm::AlarmPoller;
use crate::clock::Clock;
use crate::config::Settings;
use crate::domain::{tomorrow_tasks, yesterday_tasks, FormField, Task, TaskId, TaskStore, Theme, UiMode};
use crate::input::parse_alarm;
use crate::notifications::Notifier;
use chrono::NaiveDateTime;
use std::collections::VecDeque;
use std::time::Instant;
use tracing::{debug, info};

/// Input form state for adding tasks
#[derive(Debug, Clone)]
pub struct InputFormState {
    pub text: String,
    pub alarm: String, // Raw alarm text, parsed on submit
    pub editing_field: FormField,
    pub error: Option<String>,
}

impl InputFormState {
    fn new() -> Self {
        Self {
            text: String::new(),
            alarm: String::new(),
            editing_field: FormField::Text,
            error: None,
        }
    }

    fn current_field_mut(&mut self) -> &mut String {
        match self.editing_field {
            FormField::Text => &mut self.text,
            FormField::Alarm => &mut self.alarm,
        }
    }
}

/// Main application state
pub struct AppState {
    store: TaskStore,
    poller: AlarmPoller,
    pub clock: Box<dyn Clock>,
    notifier: Box<dyn Notifier>,
    pub selected_index: usize,
    pub ui_mode: UiMode,
    pub input_form: Option<InputFormState>,
    pub alerts: VecDeque<String>, // Reminders waiting to be dismissed, oldest first
    pub dark_mode: bool,
}

impl AppState {
    pub fn new(settings: &Settings, clock: Box<dyn Clock>, notifier: Box<dyn Notifier>) -> Self {
        Self {
            store: TaskStore::new(),
            poller: AlarmPoller::new(settings.poll_interval),
            clock,
            notifier,
            selected_index: 0,
            ui_mode: UiMode::Normal,
            input_form: None,
            alerts: VecDeque::new(),
            dark_mode: settings.dark_mode,
        }
    }

    /// Start the alarm poller. Called once when the UI comes up.
    pub fn activate(&mut self, at: Instant) {
        self.poller.start(self.store.snapshot(), at);
    }

    /// Stop the alarm poller. Called when the UI is torn down.
    pub fn shutdown(&mut self) {
        self.poller.stop();
    }

    /// Read-only view of the store; mutations go through `AppState` so the poller follows them
    pub fn store(&self) -> &TaskStore {
        &self.store
    }

    pub fn alarms_armed(&self) -> bool {
        self.poller.is_armed()
    }

    pub fn tasks(&self) -> &[Task] {
        self.store.tasks()
    }

    /// Pending tasks scheduled for tomorrow
    pub fn tomorrow_tasks(&self) -> Vec<&Task> {
        tomorrow_tasks(self.store.tasks(), self.clock.today())
    }

    /// Tasks completed that were scheduled for yesterday
    pub fn yesterday_tasks(&self) -> Vec<&Task> {
        yesterday_tasks(self.store.tasks(), self.clock.today())
    }

    pub fn theme(&self) -> Theme {
        Theme::from_dark_mode(self.dark_mode)
    }

    pub fn toggle_dark_mode(&mut self) {
        self.dark_mode = !self.dark_mode;
        debug!(dark_mode = self.dark_mode, "theme toggled");
    }

    /// Add a task. Blank text is ignored.
    pub fn add_task(&mut self, text: &str, time: Option<NaiveDateTime>) -> Option<TaskId> {
        let id = self.store.add(text, time)?;
        self.sync_poller(Instant::now());
        Some(id)
    }

    pub fn toggle_complete(&mut self, id: TaskId) {
        if self.store.toggle_complete(id) {
            debug!(%id, "task toggled");
            self.sync_poller(Instant::now());
        }
    }

    pub fn delete_task(&mut self, id: TaskId) {
        if self.store.delete(id) {
            self.clamp_selection();
            self.sync_poller(Instant::now());
        }
    }

    /// Point the poller at the current snapshot after a mutation
    fn sync_poller(&mut self, at: Instant) {
        self.poller.rearm(self.store.snapshot(), at);
    }

    /// Run the alarm poller and deliver any reminders that came due
    pub fn check_alarms(&mut self, at: Instant) {
        let alarms = self.poller.poll(at, self.clock.now());
        if alarms.is_empty() {
            return;
        }

        for alarm in alarms {
            info!(task = %alarm.id, "alarm fired");
            self.notifier.notify(&alarm.text);
            self.alerts.push_back(format!("⏰ Reminder: {}", alarm.text));
            self.store.mark_notified(alarm.id);
        }

        self.sync_poller(at);
        self.ui_mode = UiMode::Alert;
    }

    /// Dismiss the oldest reminder; leave alert mode once none remain
    pub fn dismiss_alert(&mut self) {
        self.alerts.pop_front();
        if self.alerts.is_empty() {
            self.ui_mode = if self.input_form.is_some() {
                UiMode::AddingTask
            } else {
                UiMode::Normal
            };
        }
    }

    /// Get the ID of the currently selected task
    pub fn selected_task_id(&self) -> Option<TaskId> {
        self.store.tasks().get(self.selected_index).map(|t| t.id)
    }

    /// Move selection up
    pub fn move_selection_up(&mut self) {
        if self.selected_index > 0 {
            self.selected_index -= 1;
        }
    }

    /// Move selection down
    pub fn move_selection_down(&mut self) {
        if self.selected_index + 1 < self.store.len() {
            self.selected_index += 1;
        }
    }

    fn clamp_selection(&mut self) {
        self.selected_index = self.selected_index.min(self.store.len().saturating_sub(1));
    }

    /// Toggle done for the selected task
    pub fn toggle_selected(&mut self) {
        if let Some(id) = self.selected_task_id() {
            self.toggle_complete(id);
        }
    }

    /// Delete the selected task
    pub fn delete_selected(&mut self) {
        if let Some(id) = self.selected_task_id() {
            self.delete_task(id);
        }
    }

    /// Open the add-task form
    pub fn start_add_task(&mut self) {
        if self.input_form.is_none() {
            self.input_form = Some(InputFormState::new());
        }
        self.ui_mode = UiMode::AddingTask;
    }

    /// Switch between the text and alarm fields
    pub fn input_form_toggle_field(&mut self) {
        if let Some(form) = &mut self.input_form {
            form.editing_field = form.editing_field.next();
        }
    }

    /// Add character to the current field
    pub fn input_form_add_char(&mut self, c: char) {
        if let Some(form) = &mut self.input_form {
            form.current_field_mut().push(c);
        }
    }

    /// Backspace in the current field
    pub fn input_form_backspace(&mut self) {
        if let Some(form) = &mut self.input_form {
            form.current_field_mut().pop();
        }
    }

    /// Submit the form. On success the form is cleared and closed; blank text
    /// leaves it untouched, and an unreadable alarm keeps it open with an error.
    pub fn submit_input_form(&mut self) {
        let Some(form) = &self.input_form else {
            return;
        };

        if form.text.trim().is_empty() {
            return;
        }

        let time = match parse_alarm(&form.alarm, self.clock.today()) {
            Ok(time) => time,
            Err(e) => {
                if let Some(form) = &mut self.input_form {
                    form.error = Some(e.to_string());
                    form.editing_field = FormField::Alarm;
                }
                return;
            }
        };

        let text = form.text.clone();
        if self.add_task(&text, time).is_some() {
            self.input_form = None;
            self.ui_mode = UiMode::Normal;
        }
    }

    /// Cancel input form
    pub fn cancel_input_form(&mut self) {
        self.input_form = None;
        self.ui_mode = UiMode::Normal;
    }
}
