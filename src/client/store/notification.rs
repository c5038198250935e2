use std::{
    cell::{Cell, RefCell},
    rc::Rc,
};

use dioxus_logger::tracing;

use crate::client::model::notification::{Notification, NotificationKind};

/// Fire-and-forget sink for user-visible notifications.
///
/// Emitting never blocks or fails; the sink decides how to show the toast.
#[derive(Clone)]
pub struct Notifier {
    sink: Rc<dyn Fn(Notification)>,
    next_id: Rc<Cell<u64>>,
}

impl Notifier {
    pub fn new(sink: impl Fn(Notification) + 'static) -> Self {
        Self {
            sink: Rc::new(sink),
            next_id: Rc::new(Cell::new(1)),
        }
    }

    /// A notifier that drops everything.
    pub fn silent() -> Self {
        Self::new(|_| {})
    }

    /// A notifier that keeps every notification in the returned log.
    pub fn recording() -> (Self, NotificationLog) {
        let log = NotificationLog::default();
        let entries = log.entries.clone();
        let notifier = Self::new(move |notification| entries.borrow_mut().push(notification));
        (notifier, log)
    }

    pub fn success(&self, message: impl Into<String>) {
        self.emit(NotificationKind::Success, message.into());
    }

    pub fn error(&self, message: impl Into<String>) {
        self.emit(NotificationKind::Error, message.into());
    }

    fn emit(&self, kind: NotificationKind, message: String) {
        let id = self.next_id.get();
        self.next_id.set(id + 1);

        tracing::debug!("Notification {} ({:?}): {}", id, kind, message);

        (self.sink)(Notification { id, kind, message });
    }
}

/// Notifications captured by `Notifier::recording`.
#[derive(Clone, Default)]
pub struct NotificationLog {
    entries: Rc<RefCell<Vec<Notification>>>,
}

impl NotificationLog {
    pub fn all(&self) -> Vec<Notification> {
        self.entries.borrow().clone()
    }

    pub fn errors(&self) -> Vec<String> {
        self.messages(NotificationKind::Error)
    }

    pub fn successes(&self) -> Vec<String> {
        self.messages(NotificationKind::Success)
    }

    pub fn clear(&self) {
        self.entries.borrow_mut().clear();
    }

    fn messages(&self, kind: NotificationKind) -> Vec<String> {
        self.entries
            .borrow()
            .iter()
            .filter(|n| n.kind == kind)
            .map(|n| n.message.clone())
            .collect()
    }
}
