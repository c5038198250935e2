use crate::{
    client::{
        api::{
            helper::{parse_response, send_request, serialize_json, Api},
            HttpBackend, ResourceGateway,
        },
        model::error::AppError,
    },
    model::{
        node::NodeDto,
        proxmox::{ConnectionTestDto, ProxmoxConfigDto},
    },
};

/// Hypervisor connection settings. Served by the hypervisor-proxy API.
#[allow(async_fn_in_trait)]
pub trait ProxmoxApi {
    async fn get_proxmox_config(&self) -> Result<ProxmoxConfigDto, AppError>;

    async fn save_proxmox_config(
        &self,
        config: &ProxmoxConfigDto,
    ) -> Result<ProxmoxConfigDto, AppError>;

    async fn test_proxmox_connection(
        &self,
        config: &ProxmoxConfigDto,
    ) -> Result<ConnectionTestDto, AppError>;

    /// Rebuilds the node collection from the hypervisor's current node list.
    async fn sync_proxmox_nodes(&self) -> Result<Vec<NodeDto>, AppError>;
}

impl ProxmoxApi for HttpBackend {
    async fn get_proxmox_config(&self) -> Result<ProxmoxConfigDto, AppError> {
        let response = send_request(self.get(Api::Proxmox, "/settings/proxmox")).await?;
        parse_response(response, Api::Proxmox).await
    }

    async fn save_proxmox_config(
        &self,
        config: &ProxmoxConfigDto,
    ) -> Result<ProxmoxConfigDto, AppError> {
        let body = serialize_json(config)?;

        let response = send_request(self.put(Api::Proxmox, "/settings/proxmox").body(body)).await?;
        parse_response(response, Api::Proxmox).await
    }

    async fn test_proxmox_connection(
        &self,
        config: &ProxmoxConfigDto,
    ) -> Result<ConnectionTestDto, AppError> {
        let body = serialize_json(config)?;

        let response =
            send_request(self.post(Api::Proxmox, "/settings/proxmox/test").body(body)).await?;
        parse_response(response, Api::Proxmox).await
    }

    async fn sync_proxmox_nodes(&self) -> Result<Vec<NodeDto>, AppError> {
        let response =
            send_request(self.post(Api::Proxmox, "/settings/proxmox/sync-nodes")).await?;
        parse_response(response, Api::Proxmox).await
    }
}

impl ProxmoxApi for ResourceGateway {
    async fn get_proxmox_config(&self) -> Result<ProxmoxConfigDto, AppError> {
        dispatch!(self, get_proxmox_config())
    }

    async fn save_proxmox_config(
        &self,
        config: &ProxmoxConfigDto,
    ) -> Result<ProxmoxConfigDto, AppError> {
        dispatch!(self, save_proxmox_config(config))
    }

    async fn test_proxmox_connection(
        &self,
        config: &ProxmoxConfigDto,
    ) -> Result<ConnectionTestDto, AppError> {
        dispatch!(self, test_proxmox_connection(config))
    }

    async fn sync_proxmox_nodes(&self) -> Result<Vec<NodeDto>, AppError> {
        dispatch!(self, sync_proxmox_nodes())
    }
}
