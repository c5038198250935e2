//! Client-side state that outlives a single view: persisted key-value storage,
//! the notification sink and the session store.

pub mod notification;
pub mod session;
pub mod storage;

#[cfg(test)]
mod test;

pub use notification::{NotificationLog, Notifier};
pub use session::SessionStore;
pub use storage::{KeyValueStore, MemoryStore, SessionPersistence, StoredSession};

#[cfg(feature = "web")]
pub use storage::BrowserStore;
