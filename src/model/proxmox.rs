use serde::{Deserialize, Serialize};

/// Connection settings for the Proxmox VE cluster behind the hypervisor proxy.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ProxmoxConfigDto {
    pub api_url: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub username: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub password: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub token: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub token_name: Option<String>,
    #[serde(rename = "verifySSL")]
    pub verify_ssl: bool,
    #[serde(default)]
    pub node_list: Vec<String>,
}

impl ProxmoxConfigDto {
    pub fn uses_token(&self) -> bool {
        self.token.as_deref().is_some_and(|t| !t.is_empty())
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ConnectionTestDto {
    pub success: bool,
    pub message: String,
}
