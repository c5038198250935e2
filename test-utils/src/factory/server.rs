//! Server factory for creating test server JSON.

use serde_json::{json, Value};

use crate::factory::helpers::{next_id, CREATED_AT};

/// Factory for creating test servers with customizable fields.
pub struct ServerFactory {
    id: String,
    name: String,
    status: String,
    node: String,
    user_id: String,
}

impl ServerFactory {
    /// Creates a new ServerFactory with default values.
    ///
    /// Defaults:
    /// - name: `"server-{id}"`
    /// - status: `"running"`
    /// - node: `"node01"`
    /// - user_id: `"1"`
    pub fn new() -> Self {
        let id = next_id();
        Self {
            id: id.to_string(),
            name: format!("server-{}", id),
            status: "running".to_string(),
            node: "node01".to_string(),
            user_id: "1".to_string(),
        }
    }

    pub fn id(mut self, id: impl Into<String>) -> Self {
        self.id = id.into();
        self
    }

    pub fn name(mut self, name: impl Into<String>) -> Self {
        self.name = name.into();
        self
    }

    /// Sets the status: `"running"`, `"stopped"` or `"failed"`.
    pub fn status(mut self, status: impl Into<String>) -> Self {
        self.status = status.into();
        self
    }

    pub fn node(mut self, node: impl Into<String>) -> Self {
        self.node = node.into();
        self
    }

    pub fn user_id(mut self, user_id: impl Into<String>) -> Self {
        self.user_id = user_id.into();
        self
    }

    pub fn build(self) -> Value {
        let vmid = 100 + next_id();
        json!({
            "id": self.id,
            "name": self.name,
            "status": self.status,
            "vmid": vmid,
            "node": self.node,
            "cpu": 2,
            "memory": 4,
            "storage": 50,
            "ipAddress": format!("10.0.1.{}", vmid % 250 + 2),
            "osTemplate": "ubuntu-22.04",
            "userId": self.user_id,
            "createdAt": CREATED_AT,
        })
    }
}

impl Default for ServerFactory {
    fn default() -> Self {
        Self::new()
    }
}

/// Creates a running server with default values.
pub fn create_server() -> Value {
    ServerFactory::new().build()
}
