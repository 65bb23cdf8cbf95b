use log::{error, info};
use std::sync::Mutex;

/// User-notification sink for mutation outcomes (the toast analogue).
///
/// Mutations emit exactly one success or error message per attempt;
/// embedders decide how to present them.
pub trait Notify: Send + Sync {
    fn success(&self, message: &str);
    fn error(&self, message: &str);
}

/// Default sink: routes notifications to the log.
#[derive(Debug, Default, Clone, Copy)]
pub struct LogNotifier;

impl Notify for LogNotifier {
    fn success(&self, message: &str) {
        info!(target: "notifications", "{}", message);
    }

    fn error(&self, message: &str) {
        error!(target: "notifications", "{}", message);
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NotificationKind {
    Success,
    Error,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Notification {
    pub kind: NotificationKind,
    pub message: String,
}

/// In-memory sink that records every notification. Used in tests to assert
/// on exact message text.
#[derive(Debug, Default)]
pub struct MemoryNotifier {
    events: Mutex<Vec<Notification>>,
}

impl MemoryNotifier {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn events(&self) -> Vec<Notification> {
        match self.events.lock() {
            Ok(guard) => guard.clone(),
            Err(poisoned) => poisoned.into_inner().clone(),
        }
    }

    fn push(&self, kind: NotificationKind, message: &str) {
        let event = Notification {
            kind,
            message: message.to_string(),
        };
        match self.events.lock() {
            Ok(mut guard) => guard.push(event),
            Err(poisoned) => poisoned.into_inner().push(event),
        }
    }
}

impl Notify for MemoryNotifier {
    fn success(&self, message: &str) {
        self.push(NotificationKind::Success, message);
    }

    fn error(&self, message: &str) {
        self.push(NotificationKind::Error, message);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn memory_notifier_records_in_order() {
        let notifier = MemoryNotifier::new();
        notifier.success("Provider switched successfully");
        notifier.error("Failed to cancel job: job already completed");

        let events = notifier.events();
        assert_eq!(events.len(), 2);
        assert_eq!(events[0].kind, NotificationKind::Success);
        assert_eq!(events[1].kind, NotificationKind::Error);
        assert!(events[1].message.contains("job already completed"));
    }
}
