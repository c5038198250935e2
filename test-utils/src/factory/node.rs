//! Node factory for creating test hypervisor node JSON.

use serde_json::{json, Value};

use crate::factory::helpers::next_id;

/// Creates an online node named `name` with fixed capacity.
pub fn create_node(name: &str) -> Value {
    json!({
        "id": next_id().to_string(),
        "name": name,
        "status": "online",
        "cpuTotal": 16.0,
        "cpuUsed": 4.0,
        "memoryTotal": 64.0,
        "memoryUsed": 16.0,
        "storageTotal": 1000.0,
        "storageUsed": 250.0,
    })
}
