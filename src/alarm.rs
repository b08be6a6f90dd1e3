use crate::domain::{truncate_to_minute, Snapshot, Task, TaskId};
use chrono::NaiveDateTime;
use std::sync::Arc;
use std::time::{Duration, Instant};
use tracing::debug;

/// Default alarm poll interval in seconds
pub const DEFAULT_POLL_INTERVAL_SECS: u64 = 30;

/// Longest poll interval that cannot step over an alarm minute
pub const MAX_POLL_INTERVAL_SECS: u64 = 60;

/// A task whose alarm minute has arrived
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Alarm {
    pub id: TaskId,
    pub text: String,
}

/// Tasks due at `now` (truncated to the minute) that have not fired yet.
/// Matching is exact-minute equality; a missed minute is never caught up.
pub fn due_alarms(tasks: &[Task], now: NaiveDateTime) -> Vec<Alarm> {
    let minute = truncate_to_minute(now);
    tasks
        .iter()
        .filter(|t| t.is_due_at(minute))
        .map(|t| Alarm {
            id: t.id,
            text: t.text.clone(),
        })
        .collect()
}

#[derive(Debug)]
enum PollerState {
    Idle,
    Armed { watched: Snapshot, next_due: Instant },
}

/// Recurring alarm check bound to the lifetime of the UI.
///
/// The poller checks the snapshot it was armed with. Whoever owns the store
/// calls `rearm` after every mutation so the poller never works from a stale
/// collection; re-arming restarts the interval.
#[derive(Debug)]
pub struct AlarmPoller {
    interval: Duration,
    state: PollerState,
}

impl AlarmPoller {
    /// Intervals longer than `MAX_POLL_INTERVAL_SECS` are capped to it
    pub fn new(interval: Duration) -> Self {
        Self {
            interval: interval.min(Duration::from_secs(MAX_POLL_INTERVAL_SECS)),
            state: PollerState::Idle,
        }
    }

    pub fn is_armed(&self) -> bool {
        matches!(self.state, PollerState::Armed { .. })
    }

    /// Arm the poller. Only the first call after construction or `stop` has an effect.
    pub fn start(&mut self, snapshot: Snapshot, at: Instant) -> bool {
        if self.is_armed() {
            return false;
        }
        debug!(interval_secs = self.interval.as_secs(), tasks = snapshot.len(), "alarm poller armed");
        self.state = PollerState::Armed {
            watched: snapshot,
            next_due: deadline(at, self.interval),
        };
        true
    }

    /// Point an armed poller at a new snapshot. Same snapshot or idle poller: no-op.
    pub fn rearm(&mut self, snapshot: Snapshot, at: Instant) -> bool {
        let interval = self.interval;
        match &mut self.state {
            PollerState::Armed { watched, next_due } if !Arc::ptr_eq(watched, &snapshot) => {
                *watched = snapshot;
                *next_due = deadline(at, interval);
                true
            }
            _ => false,
        }
    }

    /// Disarm and release the watched snapshot
    pub fn stop(&mut self) {
        if self.is_armed() {
            debug!("alarm poller disarmed");
        }
        self.state = PollerState::Idle;
    }

    /// Run a tick if the interval has elapsed at `at`; `now` is the zone-local wall time
    pub fn poll(&mut self, at: Instant, now: NaiveDateTime) -> Vec<Alarm> {
        let interval = self.interval;
        match &mut self.state {
            PollerState::Armed { watched, next_due } if at >= *next_due => {
                *next_due = deadline(at, interval);
                due_alarms(watched, now)
            }
            _ => Vec::new(),
        }
    }
}

/// `at + interval`, or `at` itself if the sum is not representable
fn deadline(at: Instant, interval: Duration) -> Instant {
    at.checked_add(interval).unwrap_or(at)
}

impl Drop for AlarmPoller {
    fn drop(&mut self) {
        self.stop();
    }
}
