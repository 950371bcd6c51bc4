//! Transient toast notifications.
//!
//! ## Lifecycle
//!
//! ```text
//! notify() ──► Created ──(show_delay)──► Visible ──(display)──► Hidden ──(exit)──► removed
//! ```
//!
//! Each call to [`NotificationCenter::push`] schedules its own three
//! transitions. There is no queue, no deduplication and no rate limit:
//! overlapping toasts stack at the same top-right anchor and keep
//! independent timers.

use std::fmt;
use std::str::FromStr;
use std::time::Duration;

use serde::{Deserialize, Serialize};

use crate::config::NotificationTimings;
use crate::scheduler::Scheduler;
use crate::types::NotificationId;

/// Severity of a notification, which selects its colour.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Severity {
    Success,
    Error,
    #[default]
    Info,
}

impl Severity {
    /// CSS class appended to `notification`
    pub fn class(&self) -> &'static str {
        match self {
            Severity::Success => "success",
            Severity::Error => "error",
            Severity::Info => "info",
        }
    }

    /// Background colour of the toast
    pub fn color(&self) -> &'static str {
        match self {
            Severity::Success => "#2ecc71",
            Severity::Error => "#e74c3c",
            Severity::Info => "#3498db",
        }
    }
}

impl fmt::Display for Severity {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.class())
    }
}

impl FromStr for Severity {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "success" => Ok(Severity::Success),
            "error" => Ok(Severity::Error),
            "info" => Ok(Severity::Info),
            _ => Err(format!(
                "Invalid severity '{}'. Must be one of: success, error, info",
                s
            )),
        }
    }
}

/// Where a notification is in its lifecycle.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum NotificationPhase {
    /// Attached but still off-screen
    Created,
    /// Slid into view
    Visible,
    /// Sliding out; removed once the exit transition ends
    Hidden,
}

#[derive(Debug, Clone, PartialEq)]
pub struct Notification {
    pub id: NotificationId,
    pub message: String,
    pub severity: Severity,
    pub phase: NotificationPhase,
    /// Virtual time the notification was created at
    pub created_at: Duration,
}

impl Notification {
    pub fn is_visible(&self) -> bool {
        self.phase == NotificationPhase::Visible
    }
}

/// Anything that can raise a notification.
///
/// Widgets take a `&mut impl Notifier` rather than a concrete service so the
/// comment thread, contact form and gallery can be exercised against a
/// recording double.
pub trait Notifier {
    fn notify(&mut self, message: &str, severity: Severity);
}

/// Records notifications instead of displaying them.
impl Notifier for Vec<(String, Severity)> {
    fn notify(&mut self, message: &str, severity: Severity) {
        self.push((message.to_string(), severity));
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Transition {
    Show,
    Hide,
    Remove,
}

/// The notification service: owns live toasts and their timelines.
#[derive(Debug)]
pub struct NotificationCenter {
    timings: NotificationTimings,
    scheduler: Scheduler<(NotificationId, Transition)>,
    notifications: Vec<Notification>,
    next_id: u64,
}

impl Default for NotificationCenter {
    fn default() -> Self {
        Self::new(NotificationTimings::default())
    }
}

impl NotificationCenter {
    pub fn new(timings: NotificationTimings) -> Self {
        Self {
            timings,
            scheduler: Scheduler::new(),
            notifications: Vec::new(),
            next_id: 0,
        }
    }

    /// Attach a new toast and schedule its lifecycle
    pub fn push(&mut self, message: impl Into<String>, severity: Severity) -> NotificationId {
        let id = NotificationId(self.next_id);
        self.next_id += 1;

        let message = message.into();
        tracing::debug!(%id, %severity, %message, "Notification created");

        self.notifications.push(Notification {
            id,
            message,
            severity,
            phase: NotificationPhase::Created,
            created_at: self.scheduler.now(),
        });

        let t = self.timings;
        self.scheduler
            .schedule_after(t.show_delay, (id, Transition::Show));
        self.scheduler
            .schedule_after(t.display, (id, Transition::Hide));
        self.scheduler
            .schedule_after(t.display + t.exit, (id, Transition::Remove));

        id
    }

    /// Advance every toast's timeline. Returns the number of transitions applied.
    pub fn advance(&mut self, by: Duration) -> usize {
        let fired = self.scheduler.advance(by);
        let count = fired.len();

        for fired in fired {
            let (id, transition) = fired.event;
            match transition {
                Transition::Show => self.set_phase(id, NotificationPhase::Visible),
                Transition::Hide => self.set_phase(id, NotificationPhase::Hidden),
                Transition::Remove => {
                    self.notifications.retain(|n| n.id != id);
                    tracing::debug!(%id, "Notification removed");
                }
            }
        }

        count
    }

    fn set_phase(&mut self, id: NotificationId, phase: NotificationPhase) {
        if let Some(notification) = self.notifications.iter_mut().find(|n| n.id == id) {
            notification.phase = phase;
        }
    }

    /// Attached notifications in creation order
    pub fn notifications(&self) -> &[Notification] {
        &self.notifications
    }

    pub fn get(&self, id: NotificationId) -> Option<&Notification> {
        self.notifications.iter().find(|n| n.id == id)
    }

    pub fn visible(&self) -> impl Iterator<Item = &Notification> {
        self.notifications.iter().filter(|n| n.is_visible())
    }

    pub fn has_pending(&self) -> bool {
        self.scheduler.has_pending()
    }

    pub fn time_until_next(&self) -> Option<Duration> {
        self.scheduler.time_until_next()
    }

    pub fn now(&self) -> Duration {
        self.scheduler.now()
    }

    pub fn timings(&self) -> NotificationTimings {
        self.timings
    }
}

impl Notifier for NotificationCenter {
    fn notify(&mut self, message: &str, severity: Severity) {
        self.push(message, severity);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn ms(n: u64) -> Duration {
        Duration::from_millis(n)
    }

    #[test]
    fn severity_defaults_to_info() {
        assert_eq!(Severity::default(), Severity::Info);
        assert_eq!(Severity::Info.color(), "#3498db");
        assert_eq!(Severity::Success.color(), "#2ecc71");
        assert_eq!(Severity::Error.color(), "#e74c3c");
    }

    #[test]
    fn severity_parses_case_insensitively() {
        assert_eq!("SUCCESS".parse::<Severity>().unwrap(), Severity::Success);
        assert!("warning".parse::<Severity>().is_err());
    }

    #[test]
    fn lifecycle_follows_timings() {
        let mut center = NotificationCenter::default();
        let id = center.push("Saved", Severity::Success);

        assert_eq!(center.get(id).unwrap().phase, NotificationPhase::Created);

        center.advance(ms(99));
        assert_eq!(center.get(id).unwrap().phase, NotificationPhase::Created);

        center.advance(ms(1));
        assert!(center.get(id).unwrap().is_visible());

        center.advance(ms(4899));
        assert!(center.get(id).unwrap().is_visible());

        center.advance(ms(1));
        assert_eq!(center.get(id).unwrap().phase, NotificationPhase::Hidden);

        center.advance(ms(299));
        assert!(center.get(id).is_some());

        center.advance(ms(1));
        assert!(center.get(id).is_none());
        assert!(!center.has_pending());
    }

    #[test]
    fn concurrent_notifications_keep_independent_timers() {
        let mut center = NotificationCenter::default();
        let first = center.push("one", Severity::Info);
        center.advance(ms(2000));
        let second = center.push("two", Severity::Info);

        assert_eq!(center.get(second).unwrap().created_at, ms(2000));

        center.advance(ms(3300));
        assert!(center.get(first).is_none());
        assert!(center.get(second).unwrap().is_visible());

        center.advance(ms(2000));
        assert!(center.get(second).is_none());
    }

    #[test]
    fn identical_messages_are_not_merged() {
        let mut center = NotificationCenter::default();
        center.push("same", Severity::Info);
        center.push("same", Severity::Info);
        center.advance(ms(100));

        assert_eq!(center.visible().count(), 2);
    }

    #[test]
    fn vec_notifier_records_calls() {
        let mut log: Vec<(String, Severity)> = Vec::new();
        log.notify("hello", Severity::Error);
        assert_eq!(log, vec![("hello".to_string(), Severity::Error)]);
    }
}
