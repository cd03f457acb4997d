#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum Severity {
    #[default]
    Info,
    Success,
    Warning,
    Error,
}

impl Severity {
    pub fn color(self) -> &'static str {
        match self {
            Severity::Success => "#27ae60",
            Severity::Error => "#e74c3c",
            Severity::Warning => "#f39c12",
            Severity::Info => "#667eea",
        }
    }

    pub fn class(self) -> &'static str {
        match self {
            Severity::Info => "notification-info",
            Severity::Success => "notification-success",
            Severity::Warning => "notification-warning",
            Severity::Error => "notification-error",
        }
    }
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Notification {
    pub id: u64,
    pub message: String,
    pub severity: Severity,
    /// Exit transition is running; removal follows.
    pub leaving: bool,
}

/// The single toast position. Presenting replaces whatever is showing.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct NotificationSlot {
    current: Option<Notification>,
    next_id: u64,
}

impl NotificationSlot {
    pub fn current(&self) -> Option<&Notification> {
        self.current.as_ref()
    }

    pub fn present(&mut self, message: impl Into<String>, severity: Severity) -> u64 {
        self.next_id += 1;
        self.current = Some(Notification {
            id: self.next_id,
            message: message.into(),
            severity,
            leaving: false,
        });
        self.next_id
    }

    /// Starts the exit transition for `id`. Stale ids are ignored so a timer
    /// from a replaced toast cannot touch the new one.
    pub fn begin_exit(&mut self, id: u64) -> bool {
        match self.current.as_mut() {
            Some(notification) if notification.id == id && !notification.leaving => {
                notification.leaving = true;
                true
            }
            _ => false,
        }
    }

    pub fn dismiss(&mut self, id: u64) -> bool {
        if self.current.as_ref().map(|n| n.id) == Some(id) {
            self.current = None;
            true
        } else {
            false
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn presenting_replaces_visible_notification() {
        let mut slot = NotificationSlot::default();
        let first = slot.present("Redirecting to employer portal...", Severity::Info);
        let second = slot.present("Feature coming soon!", Severity::Success);
        assert_ne!(first, second);
        let current = slot.current().unwrap();
        assert_eq!(current.id, second);
        assert_eq!(current.message, "Feature coming soon!");
        assert_eq!(current.severity.color(), "#27ae60");
    }

    #[test]
    fn stale_timers_do_not_touch_new_notification() {
        let mut slot = NotificationSlot::default();
        let first = slot.present("one", Severity::Info);
        let second = slot.present("two", Severity::Warning);
        assert!(!slot.begin_exit(first));
        assert!(!slot.dismiss(first));
        assert_eq!(slot.current().map(|n| n.id), Some(second));
    }

    #[test]
    fn exit_then_dismiss() {
        let mut slot = NotificationSlot::default();
        let id = slot.present("saved", Severity::Success);
        assert!(slot.begin_exit(id));
        assert!(!slot.begin_exit(id));
        assert!(slot.current().unwrap().leaving);
        assert!(slot.dismiss(id));
        assert!(slot.current().is_none());
    }

    #[test]
    fn default_severity_is_info() {
        assert_eq!(Severity::default(), Severity::Info);
        assert_eq!(Severity::default().color(), "#667eea");
        assert_eq!(Severity::Error.class(), "notification-error");
    }
}
