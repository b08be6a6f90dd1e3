use crate::app::AppState;
use crate::domain::UiMode;
use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};

/// Handle keyboard input events. Returns true when the app should quit.
pub fn handle_key(app: &mut AppState, key: KeyEvent) -> bool {
    if key.code == KeyCode::Char('c') && key.modifiers.contains(KeyModifiers::CONTROL) {
        return true;
    }

    match app.ui_mode {
        UiMode::Normal => handle_normal_mode(app, key),
        UiMode::AddingTask => handle_input_form_mode(app, key),
        UiMode::Alert => handle_alert_mode(app, key),
    }
}

/// Handle keys in normal mode
fn handle_normal_mode(app: &mut AppState, key: KeyEvent) -> bool {
    match key.code {
        // Navigation
        KeyCode::Up | KeyCode::Char('k') => app.move_selection_up(),
        KeyCode::Down | KeyCode::Char('j') => app.move_selection_down(),

        // Toggle done
        KeyCode::Enter | KeyCode::Char(' ') => app.toggle_selected(),

        // Delete task
        KeyCode::Char('x') | KeyCode::Char('X') | KeyCode::Delete => app.delete_selected(),

        // Add task
        KeyCode::Char('a') | KeyCode::Char('A') => app.start_add_task(),

        // Theme
        KeyCode::Char('t') | KeyCode::Char('T') => app.toggle_dark_mode(),

        // Quit
        KeyCode::Char('q') | KeyCode::Char('Q') => return true,

        _ => {}
    }
    false
}

/// Handle keys while the add-task form is open
fn handle_input_form_mode(app: &mut AppState, key: KeyEvent) -> bool {
    match key.code {
        KeyCode::Tab | KeyCode::BackTab => app.input_form_toggle_field(),
        KeyCode::Enter => app.submit_input_form(),
        KeyCode::Esc => app.cancel_input_form(),
        KeyCode::Backspace => app.input_form_backspace(),
        KeyCode::Char(c) => app.input_form_add_char(c),
        _ => {}
    }
    false
}

/// Any of these keys dismisses the front reminder
fn handle_alert_mode(app: &mut AppState, key: KeyEvent) -> bool {
    if matches!(key.code, KeyCode::Enter | KeyCode::Esc | KeyCode::Char(' ')) {
        app.dismiss_alert();
    }
    false
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::clock::{FixedClock, Zone};
    use crate::config::Settings;
    use crate::notifications::RecordingNotifier;
    use chrono::NaiveDate;
    use std::time::Duration;

    fn create_test_app() -> AppState {
        let now = NaiveDate::from_ymd_opt(2024, 1, 2)
            .unwrap()
            .and_hms_opt(8, 0, 0)
            .unwrap();
        let settings = Settings {
            zone: Zone::Local,
            poll_interval: Duration::from_secs(30),
            dark_mode: false,
            bell: false,
            desktop_notifications: false,
        };
        AppState::new(
            &settings,
            Box::new(FixedClock::new(now)),
            Box::new(RecordingNotifier::default()),
        )
    }

    fn press(app: &mut AppState, code: KeyCode) -> bool {
        handle_key(app, KeyEvent::new(code, KeyModifiers::NONE))
    }

    #[test]
    fn test_quit_keys() {
        let mut app = create_test_app();
        assert!(press(&mut app, KeyCode::Char('q')));
        assert!(handle_key(
            &mut app,
            KeyEvent::new(KeyCode::Char('c'), KeyModifiers::CONTROL)
        ));
    }

    #[test]
    fn test_add_task_through_keys() {
        let mut app = create_test_app();
        press(&mut app, KeyCode::Char('a'));
        assert_eq!(app.ui_mode, UiMode::AddingTask);

        // 'q' is text while the form is open
        for c in "quiz".chars() {
            assert!(!press(&mut app, KeyCode::Char(c)));
        }
        press(&mut app, KeyCode::Tab);
        for c in "09:30".chars() {
            press(&mut app, KeyCode::Char(c));
        }
        press(&mut app, KeyCode::Enter);

        assert_eq!(app.ui_mode, UiMode::Normal);
        assert_eq!(app.tasks().len(), 1);
        assert_eq!(app.tasks()[0].text, "quiz");
    }

    #[test]
    fn test_toggle_and_delete_keys() {
        let mut app = create_test_app();
        app.add_task("One", None);

        press(&mut app, KeyCode::Enter);
        assert!(app.tasks()[0].done);

        press(&mut app, KeyCode::Char(' '));
        assert!(!app.tasks()[0].done);

        press(&mut app, KeyCode::Char('x'));
        assert!(app.tasks().is_empty());
    }

    #[test]
    fn test_theme_key() {
        let mut app = create_test_app();
        press(&mut app, KeyCode::Char('t'));
        assert!(app.dark_mode);
    }

    #[test]
    fn test_alert_swallows_other_keys() {
        let mut app = create_test_app();
        app.add_task("One", None);
        app.alerts.push_back("⏰ Reminder: One".to_string());
        app.ui_mode = UiMode::Alert;

        assert!(!press(&mut app, KeyCode::Char('q')));
        press(&mut app, KeyCode::Char('x'));
        assert_eq!(app.tasks().len(), 1);

        press(&mut app, KeyCode::Esc);
        assert_eq!(app.ui_mode, UiMode::Normal);
        assert!(app.alerts.is_empty());
    }
}
