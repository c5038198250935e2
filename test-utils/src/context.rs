use serde_json::Value;
use tokio::task::JoinHandle;

use crate::api::{lock, RecordedRequest, SharedState};

/// A running fake management API.
///
/// The server task is aborted when the context is dropped, so every test gets an
/// isolated API on its own port.
pub struct TestContext {
    /// Base URL of the fake management API, e.g. `http://127.0.0.1:41234/api`.
    pub api_url: String,

    /// Base URL of the fake hypervisor-proxy API.
    pub proxmox_url: String,

    pub(crate) state: SharedState,
    pub(crate) server: JoinHandle<()>,
}

impl TestContext {
    /// Every request received so far, in arrival order.
    pub fn requests(&self) -> Vec<RecordedRequest> {
        lock(&self.state).requests.clone()
    }

    /// The most recent request, if any.
    pub fn last_request(&self) -> Option<RecordedRequest> {
        lock(&self.state).requests.last().cloned()
    }

    /// Current server collection held by the fake API.
    pub fn servers(&self) -> Vec<Value> {
        lock(&self.state).servers.clone()
    }

    /// Ids of the users with an open session, sorted.
    pub fn session_users(&self) -> Vec<String> {
        let mut users: Vec<String> = lock(&self.state).sessions.values().cloned().collect();
        users.sort();
        users
    }
}

impl Drop for TestContext {
    fn drop(&mut self) {
        self.server.abort();
    }
}
