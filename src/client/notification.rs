use std::time::{Duration, Instant};

use crate::config::CATALOG_CONFIG;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NotificationKind {
    Success,
    Error,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Notification {
    /// unique per overlay. Dismiss requests name the notification they were issued for
    pub id: u64,
    pub text: String,
    pub kind: NotificationKind,
    pub shown_at: Instant,
}

/// A single slot of feedback for the latest admin action. A new notification supersedes the
/// current one immediately; nothing is queued and no history is kept.
///
/// Dismissal is keyed by notification id, so a close button or timer that belongs to a superseded
/// notification can't hide the one that replaced it.
#[derive(Debug)]
pub struct NotificationOverlay {
    current: Option<Notification>,
    shown: bool,
    next_id: u64,
    dismiss_after: Duration,
}

impl Default for NotificationOverlay {
    fn default() -> Self {
        Self::new(CATALOG_CONFIG.notifications.dismiss_after())
    }
}

impl NotificationOverlay {
    pub fn new(dismiss_after: Duration) -> Self {
        Self {
            current: None,
            shown: false,
            next_id: 1,
            dismiss_after,
        }
    }

    /// shows `text` right away. Returns the notification it superseded, if one was still on screen
    pub fn notify(&mut self, text: &str, kind: NotificationKind) -> Option<Notification> {
        let notification = Notification {
            id: self.next_id,
            text: text.to_string(),
            kind,
            shown_at: Instant::now(),
        };
        self.next_id += 1;
        let was_shown = self.shown;
        self.shown = true;
        let previous = self.current.replace(notification);
        previous.filter(|_| was_shown)
    }

    pub fn success(&mut self, text: &str) -> Option<Notification> {
        self.notify(text, NotificationKind::Success)
    }

    pub fn error(&mut self, text: &str) -> Option<Notification> {
        self.notify(text, NotificationKind::Error)
    }

    /// the notification on screen, if any
    pub fn current(&self) -> Option<&Notification> {
        self.current.as_ref().filter(|_| self.shown)
    }

    /// hides notification `id`. Does nothing if a newer notification has replaced it
    pub fn dismiss(&mut self, id: u64) -> bool {
        match &self.current {
            Some(current) if self.shown && current.id == id => {
                self.shown = false;
                true
            }
            _ => false,
        }
    }

    /// hides the current notification once it has been up for the dismiss duration
    pub fn expire(&mut self, now: Instant) -> bool {
        match &self.current {
            Some(current)
                if self.shown && now.saturating_duration_since(current.shown_at) >= self.dismiss_after =>
            {
                self.shown = false;
                true
            }
            _ => false,
        }
    }

    pub fn dismiss_after(&self) -> Duration {
        self.dismiss_after
    }
}
