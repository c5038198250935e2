use chrono::{DateTime, Duration, Utc};

use crate::{
    client::{
        api::{MockBackend, ServerApi},
        model::error::AppError,
    },
    model::server::{
        CreateServerDto, MetricsPeriod, NetworkUsageDto, ResourceUsageDto, ServerAction,
        ServerDto, ServerStatus, ServerUsageDto, UpdateServerDto,
    },
};

const FIRST_VMID: u32 = 100;
const ADDRESS_PREFIX: &str = "192.168.1.";

fn not_found() -> AppError {
    AppError::NotFound("Server not found".to_string())
}

impl ServerApi for MockBackend {
    async fn get_servers(&self) -> Result<Vec<ServerDto>, AppError> {
        self.read(|db| Ok(db.servers.clone()))
    }

    async fn get_server(&self, id: &str) -> Result<ServerDto, AppError> {
        self.read(|db| {
            db.servers
                .iter()
                .find(|s| s.id == id)
                .cloned()
                .ok_or_else(not_found)
        })
    }

    async fn create_server(&self, payload: &CreateServerDto) -> Result<ServerDto, AppError> {
        self.write(|db| {
            if payload.name.trim().is_empty() {
                return Err(AppError::Rejected("Server name is required".to_string()));
            }
            if !db.nodes.iter().any(|n| n.name == payload.node) {
                return Err(AppError::Rejected(format!("Unknown node '{}'", payload.node)));
            }
            if !db.os_templates.iter().any(|t| t.id == payload.os_template) {
                return Err(AppError::Rejected(format!(
                    "Unknown OS template '{}'",
                    payload.os_template
                )));
            }

            let owner = db.session_user()?.id.clone();
            let vmid = db
                .servers
                .iter()
                .map(|s| s.vmid)
                .max()
                .map_or(FIRST_VMID, |max| (max + 1).max(FIRST_VMID));
            let ip_address = free_address(&db.servers)
                .ok_or_else(|| AppError::Rejected("No free IP address left".to_string()))?;

            let server = ServerDto {
                id: db.allocate_id(),
                name: payload.name.trim().to_string(),
                status: ServerStatus::Running,
                vmid,
                node: payload.node.clone(),
                cpu: payload.cpu,
                memory: payload.memory,
                storage: payload.storage,
                ip_address,
                os_template: payload.os_template.clone(),
                user_id: owner,
                created_at: Utc::now(),
            };

            db.servers.push(server.clone());
            Ok(server)
        })
    }

    async fn update_server(
        &self,
        id: &str,
        payload: &UpdateServerDto,
    ) -> Result<ServerDto, AppError> {
        self.write(|db| {
            let server = db
                .servers
                .iter_mut()
                .find(|s| s.id == id)
                .ok_or_else(not_found)?;

            if let Some(name) = &payload.name {
                if name.trim().is_empty() {
                    return Err(AppError::Rejected("Server name is required".to_string()));
                }
                server.name = name.trim().to_string();
            }
            if let Some(cpu) = payload.cpu {
                server.cpu = cpu;
            }
            if let Some(memory) = payload.memory {
                server.memory = memory;
            }
            if let Some(storage) = payload.storage {
                server.storage = storage;
            }

            Ok(server.clone())
        })
    }

    async fn delete_server(&self, id: &str) -> Result<(), AppError> {
        self.write(|db| {
            let index = db
                .servers
                .iter()
                .position(|s| s.id == id)
                .ok_or_else(not_found)?;
            db.servers.remove(index);
            Ok(())
        })
    }

    async fn server_action(&self, id: &str, action: ServerAction) -> Result<(), AppError> {
        self.write(|db| {
            let server = db
                .servers
                .iter_mut()
                .find(|s| s.id == id)
                .ok_or_else(not_found)?;
            server.status = action.target();
            Ok(())
        })
    }

    async fn get_server_metrics(
        &self,
        id: &str,
        period: MetricsPeriod,
    ) -> Result<ServerUsageDto, AppError> {
        self.read(|db| {
            let server = db
                .servers
                .iter()
                .find(|s| s.id == id)
                .ok_or_else(not_found)?;
            Ok(metrics(server, period, Utc::now()))
        })
    }
}

/// Lowest host address in 192.168.1.100-254 not taken by another server.
fn free_address(servers: &[ServerDto]) -> Option<String> {
    (100..=254)
        .map(|host| format!("{}{}", ADDRESS_PREFIX, host))
        .find(|address| !servers.iter().any(|s| &s.ip_address == address))
}

/// Synthetic usage series. Same server and period always give the same shape;
/// only the timestamps follow `now`.
fn metrics(
    server: &ServerDto,
    period: MetricsPeriod,
    now: DateTime<Utc>,
) -> ServerUsageDto {
    let (points, step) = match period {
        MetricsPeriod::Hour => (12, Duration::minutes(5)),
        MetricsPeriod::Day => (24, Duration::hours(1)),
        MetricsPeriod::Week => (28, Duration::hours(6)),
        MetricsPeriod::Month => (30, Duration::days(1)),
    };
    let seed = server.vmid as f64;
    let running = server.status == ServerStatus::Running;

    let usage = (0..points)
        .map(|i| {
            let t = i as f64 + seed;
            let wave = (t * 0.7).sin() * 0.5 + 0.5;
            let (cpu, memory, inbound) = if running {
                (
                    10.0 + 60.0 * wave,
                    30.0 + 40.0 * (t * 0.3).cos().abs(),
                    50.0 + 200.0 * wave,
                )
            } else {
                (0.0, 0.0, 0.0)
            };

            ResourceUsageDto {
                cpu: round(cpu),
                memory: round(memory),
                disk: round(20.0 + seed % 50.0),
                network: NetworkUsageDto {
                    inbound: round(inbound),
                    outbound: round(inbound * 0.6),
                },
                timestamp: now - step * (points - 1 - i),
            }
        })
        .collect();

    ServerUsageDto {
        server_id: server.id.clone(),
        usage,
    }
}

fn round(value: f64) -> f64 {
    (value * 10.0).round() / 10.0
}
