//! Transient Notifications
//!
//! One notification slot per page. Showing a new message replaces the one on
//! screen; each display gets its own auto-dismiss timer, and a timer only
//! closes the display it was started for.

use gloo_timers::future::TimeoutFuture;
use leptos::prelude::*;
use leptos::task::spawn_local;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Severity {
    Success,
    Error,
    Warning,
    Info,
}

impl Severity {
    pub fn css_class(&self) -> &'static str {
        match self {
            Severity::Success => "alert success",
            Severity::Error => "alert error",
            Severity::Warning => "alert warning",
            Severity::Info => "alert info",
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct Notification {
    pub id: u64,
    pub message: String,
    pub severity: Severity,
}

/// Why a dismissal was requested
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DismissReason {
    Timeout,
    CloseButton,
}

#[derive(Debug, Clone, Default, PartialEq)]
pub struct NotificationSlot {
    current: Option<Notification>,
    next_id: u64,
}

impl NotificationSlot {
    /// Put a message on screen, replacing any current one. Returns its display id.
    pub fn show(&mut self, message: impl Into<String>, severity: Severity) -> u64 {
        self.next_id += 1;
        self.current = Some(Notification {
            id: self.next_id,
            message: message.into(),
            severity,
        });
        self.next_id
    }

    pub fn current(&self) -> Option<&Notification> {
        self.current.as_ref()
    }

    /// Close display `id` if it is still the one showing.
    /// Clicks elsewhere on the page are not a reason to close.
    pub fn dismiss(&mut self, id: u64, reason: DismissReason) -> bool {
        log::debug!("[NOTIFY] dismiss #{} ({:?})", id, reason);
        match &self.current {
            Some(n) if n.id == id => {
                self.current = None;
                true
            }
            _ => false,
        }
    }
}

/// Page-local handle for showing notifications
#[derive(Clone, Copy)]
pub struct Notifier {
    slot: RwSignal<NotificationSlot>,
    duration_ms: u32,
}

impl Notifier {
    pub fn new(duration_ms: u32) -> Self {
        Self {
            slot: RwSignal::new(NotificationSlot::default()),
            duration_ms,
        }
    }

    pub fn notify(&self, message: impl Into<String>, severity: Severity) {
        let message = message.into();
        log::info!("[NOTIFY] {:?}: {}", severity, message);
        let mut id = 0;
        self.slot.update(|slot| id = slot.show(message, severity));

        let slot = self.slot;
        let duration_ms = self.duration_ms;
        spawn_local(async move {
            TimeoutFuture::new(duration_ms).await;
            let _ = slot.try_update(|slot| slot.dismiss(id, DismissReason::Timeout));
        });
    }

    pub fn dismiss(&self, id: u64, reason: DismissReason) {
        self.slot.update(|slot| {
            slot.dismiss(id, reason);
        });
    }

    pub fn current(&self) -> Option<Notification> {
        self.slot.with(|slot| slot.current().cloned())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_message_replaces_current() {
        let mut slot = NotificationSlot::default();
        slot.show("Manager deleted successfully!", Severity::Success);
        slot.show("Manager Status: active", Severity::Info);

        let current = slot.current().unwrap();
        assert_eq!(current.message, "Manager Status: active");
        assert_eq!(current.severity, Severity::Info);
    }

    #[test]
    fn test_old_timer_does_not_close_newer_display() {
        let mut slot = NotificationSlot::default();
        let first = slot.show("first", Severity::Success);
        let second = slot.show("second", Severity::Error);

        assert!(!slot.dismiss(first, DismissReason::Timeout));
        assert_eq!(slot.current().unwrap().id, second);

        assert!(slot.dismiss(second, DismissReason::Timeout));
        assert!(slot.current().is_none());
    }

    #[test]
    fn test_close_button_dismisses_once() {
        let mut slot = NotificationSlot::default();
        let id = slot.show("saved", Severity::Success);

        assert!(slot.dismiss(id, DismissReason::CloseButton));
        assert!(slot.current().is_none());
        assert!(!slot.dismiss(id, DismissReason::CloseButton));
    }

    #[test]
    fn test_each_severity_has_its_own_style() {
        let classes = [Severity::Success, Severity::Error, Severity::Warning, Severity::Info]
            .map(|s| s.css_class());
        assert_eq!(classes, ["alert success", "alert error", "alert warning", "alert info"]);
    }
}
