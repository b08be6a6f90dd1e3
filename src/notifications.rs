//! Alarm notification side channel.
//! Desktop notifications are implemented for macOS and Linux.

use std::io::Write;
use std::process::Command;
use tracing::warn;

/// Receives the text of every task whose alarm fires. Must return promptly.
pub trait Notifier {
    fn notify(&mut self, text: &str);
}

/// Rings the terminal bell and optionally raises a desktop notification
#[derive(Debug, Clone)]
pub struct TerminalNotifier {
    pub bell: bool,
    pub desktop: bool,
}

impl TerminalNotifier {
    pub fn new(bell: bool, desktop: bool) -> Self {
        Self { bell, desktop }
    }

    /// Desktop notification command for `text`, if enabled and supported here
    fn desktop_command_for(&self, text: &str) -> Option<Command> {
        if self.desktop {
            desktop_command(text)
        } else {
            None
        }
    }
}

impl Notifier for TerminalNotifier {
    fn notify(&mut self, text: &str) {
        if self.bell {
            ring_bell();
        }
        if let Some(cmd) = self.desktop_command_for(text) {
            spawn_detached(cmd);
        }
    }
}

fn ring_bell() {
    let mut stdout = std::io::stdout();
    if let Err(e) = stdout.write_all(b"\x07").and_then(|_| stdout.flush()) {
        warn!(error = %e, "failed to ring terminal bell");
    }
}

/// Build the platform command for a desktop notification, if there is one
fn desktop_command(text: &str) -> Option<Command> {
    if cfg!(target_os = "macos") {
        let script = format!(
            r#"display notification "⏰ {}" with title "Nudge - Reminder" sound name "Glass""#,
            text.replace('\\', "\\\\").replace('"', "\\\"")
        );
        let mut cmd = Command::new("osascript");
        cmd.arg("-e").arg(script);
        Some(cmd)
    } else if cfg!(target_os = "linux") {
        let mut cmd = Command::new("notify-send");
        cmd.arg("Nudge - Reminder").arg(format!("⏰ {}", text));
        Some(cmd)
    } else {
        None
    }
}

/// Spawn the notification process and reap it off the UI thread
fn spawn_detached(mut cmd: Command) {
    match cmd.spawn() {
        Ok(mut child) => {
            std::thread::spawn(move || {
                let _ = child.wait();
            });
        }
        Err(e) => warn!(error = %e, "failed to spawn desktop notification"),
    }
}

/// Notifier that records every message, shared between clones
#[cfg(test)]
#[derive(Debug, Clone, Default)]
pub struct RecordingNotifier {
    pub messages: std::rc::Rc<std::cell::RefCell<Vec<String>>>,
}

#[cfg(test)]
impl RecordingNotifier {
    pub fn messages(&self) -> Vec<String> {
        self.messages.borrow().clone()
    }
}

#[cfg(test)]
impl Notifier for RecordingNotifier {
    fn notify(&mut self, text: &str) {
        self.messages.borrow_mut().push(text.to_string());
    }
}
