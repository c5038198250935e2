use url::Url;

use crate::{
    client::{
        api::{MockBackend, ProxmoxApi},
        model::error::AppError,
    },
    model::{
        node::{NodeDto, NodeStatus},
        proxmox::{ConnectionTestDto, ProxmoxConfigDto},
    },
};

const NODE_CPU: f64 = 32.0;
const NODE_MEMORY: f64 = 128.0;
const NODE_STORAGE: f64 = 2000.0;

/// The stored config as the API returns it: the password never leaves the backend.
fn redacted(config: &ProxmoxConfigDto) -> ProxmoxConfigDto {
    ProxmoxConfigDto {
        password: None,
        ..config.clone()
    }
}

impl ProxmoxApi for MockBackend {
    async fn get_proxmox_config(&self) -> Result<ProxmoxConfigDto, AppError> {
        self.read(|db| Ok(redacted(&db.proxmox)))
    }

    async fn save_proxmox_config(
        &self,
        config: &ProxmoxConfigDto,
    ) -> Result<ProxmoxConfigDto, AppError> {
        self.write(|db| {
            let mut saved = config.clone();
            saved.node_list = db.proxmox.node_list.clone();

            if saved.uses_token() {
                saved.username = None;
                saved.password = None;
            } else {
                saved.token = None;
                saved.token_name = None;
                // password is only sent when it changes
                if saved.password.is_none() {
                    saved.password = db.proxmox.password.clone();
                }
            }

            db.proxmox = saved;
            Ok(redacted(&db.proxmox))
        })
    }

    async fn test_proxmox_connection(
        &self,
        config: &ProxmoxConfigDto,
    ) -> Result<ConnectionTestDto, AppError> {
        let host = Url::parse(&config.api_url)
            .ok()
            .filter(|url| matches!(url.scheme(), "http" | "https"))
            .and_then(|url| url.host_str().map(str::to_string));

        let has_user = config
            .username
            .as_deref()
            .is_some_and(|u| !u.trim().is_empty());

        let result = match host {
            None => ConnectionTestDto {
                success: false,
                message: "Connection failed: invalid API URL".to_string(),
            },
            Some(_) if !config.uses_token() && !has_user => ConnectionTestDto {
                success: false,
                message: "Connection failed: no credentials configured".to_string(),
            },
            Some(host) => ConnectionTestDto {
                success: true,
                message: format!("Successfully connected to Proxmox VE at {}", host),
            },
        };

        Ok(result)
    }

    async fn sync_proxmox_nodes(&self) -> Result<Vec<NodeDto>, AppError> {
        self.write(|db| {
            let names: Vec<String> = if db.proxmox.node_list.is_empty() {
                db.nodes.iter().map(|n| n.name.clone()).collect()
            } else {
                db.proxmox.node_list.clone()
            };

            let nodes: Vec<NodeDto> = names
                .into_iter()
                .enumerate()
                .map(|(index, name)| {
                    let hosted = db.servers.iter().filter(|s| s.node == name);
                    let (cpu, memory, storage) = hosted.fold((0.0, 0.0, 0.0), |acc, s| {
                        (
                            acc.0 + s.cpu as f64,
                            acc.1 + s.memory as f64,
                            acc.2 + s.storage as f64,
                        )
                    });

                    NodeDto {
                        id: (index + 1).to_string(),
                        name,
                        status: NodeStatus::Online,
                        cpu_total: NODE_CPU,
                        cpu_used: cpu,
                        memory_total: NODE_MEMORY,
                        memory_used: memory,
                        storage_total: NODE_STORAGE,
                        storage_used: storage,
                    }
                })
                .collect();

            db.nodes = nodes.clone();
            Ok(nodes)
        })
    }
}
