use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ServerStatus {
    Running,
    Stopped,
    /// Only ever reported by the hypervisor; no client action leads here.
    Failed,
}

impl ServerStatus {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Running => "running",
            Self::Stopped => "stopped",
            Self::Failed => "failed",
        }
    }
}

impl std::fmt::Display for ServerStatus {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A provisioned virtual machine.
///
/// `status` is only ever changed through `ServerLifecycle`; views never assign it.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ServerDto {
    pub id: String,
    pub name: String,
    pub status: ServerStatus,
    pub vmid: u32,
    pub node: String,
    pub cpu: u32,
    /// GB
    pub memory: u32,
    /// GB
    pub storage: u32,
    pub ip_address: String,
    pub os_template: String,
    pub user_id: String,
    pub created_at: DateTime<Utc>,
}

impl ServerDto {
    /// Case-insensitive search over name, address, status and node.
    pub fn matches(&self, term: &str) -> bool {
        let term = term.trim().to_lowercase();
        if term.is_empty() {
            return true;
        }

        self.name.to_lowercase().contains(&term)
            || self.ip_address.to_lowercase().contains(&term)
            || self.status.as_str().contains(&term)
            || self.node.to_lowercase().contains(&term)
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CreateServerDto {
    pub name: String,
    pub node: String,
    pub os_template: String,
    pub password: String,
    pub cpu: u32,
    pub memory: u32,
    pub storage: u32,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub plan_id: Option<String>,
}

/// Partial server update. Status is deliberately absent.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UpdateServerDto {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub cpu: Option<u32>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub memory: Option<u32>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub storage: Option<u32>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ServerAction {
    Start,
    Stop,
    Restart,
}

impl ServerAction {
    /// Path segment of the action endpoint, also used in messages.
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Start => "start",
            Self::Stop => "stop",
            Self::Restart => "restart",
        }
    }

    /// Whether the action is offered for a server in `status`.
    pub fn is_allowed(&self, status: ServerStatus) -> bool {
        match self {
            Self::Start => status != ServerStatus::Running,
            Self::Stop | Self::Restart => status != ServerStatus::Stopped,
        }
    }

    /// State the server is expected to reach once the action completes.
    pub fn target(&self) -> ServerStatus {
        match self {
            Self::Start | Self::Restart => ServerStatus::Running,
            Self::Stop => ServerStatus::Stopped,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum MetricsPeriod {
    Hour,
    #[default]
    Day,
    Week,
    Month,
}

impl MetricsPeriod {
    pub const ALL: [MetricsPeriod; 4] = [Self::Hour, Self::Day, Self::Week, Self::Month];

    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Hour => "hour",
            Self::Day => "day",
            Self::Week => "week",
            Self::Month => "month",
        }
    }

    pub fn parse(value: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|p| p.as_str() == value)
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct NetworkUsageDto {
    #[serde(rename = "in")]
    pub inbound: f64,
    #[serde(rename = "out")]
    pub outbound: f64,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ResourceUsageDto {
    pub cpu: f64,
    pub memory: f64,
    pub disk: f64,
    pub network: NetworkUsageDto,
    pub timestamp: DateTime<Utc>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ServerUsageDto {
    pub server_id: String,
    pub usage: Vec<ResourceUsageDto>,
}
