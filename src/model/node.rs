use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum NodeStatus {
    Online,
    Offline,
    Maintenance,
}

impl NodeStatus {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Online => "online",
            Self::Offline => "offline",
            Self::Maintenance => "maintenance",
        }
    }
}

/// A hypervisor host and its capacity.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct NodeDto {
    pub id: String,
    pub name: String,
    pub status: NodeStatus,
    pub cpu_total: f64,
    pub cpu_used: f64,
    pub memory_total: f64,
    pub memory_used: f64,
    pub storage_total: f64,
    pub storage_used: f64,
}

impl NodeDto {
    pub fn cpu_percent(&self) -> f64 {
        percent(self.cpu_used, self.cpu_total)
    }

    pub fn memory_percent(&self) -> f64 {
        percent(self.memory_used, self.memory_total)
    }

    pub fn storage_percent(&self) -> f64 {
        percent(self.storage_used, self.storage_total)
    }
}

fn percent(used: f64, total: f64) -> f64 {
    if total <= 0.0 {
        0.0
    } else {
        (used / total * 100.0).clamp(0.0, 100.0)
    }
}
