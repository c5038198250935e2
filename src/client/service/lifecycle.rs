//! Server lifecycle model.
//!
//! Owns every change to a server's `status`. Actions are requested through the
//! gateway; whether the view then re-reads the collection or sets the intended
//! status locally depends on the configured `TransitionMode`.
//!
//! | From               | Action  | To      |
//! |--------------------|---------|---------|
//! | stopped            | start   | running |
//! | running            | stop    | stopped |
//! | running or stopped | restart | running |
//!
//! `failed` is only ever reported by the hypervisor.

use dioxus_logger::tracing;

use crate::{
    client::{
        api::{ResourceGateway, ServerApi},
        config::{Config, TransitionMode},
        model::error::AppError,
        store::Notifier,
    },
    model::server::{CreateServerDto, ServerAction, ServerDto, ServerStatus},
};

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum TransitionOutcome {
    /// The action is not offered for the server's status; nothing was sent.
    Ignored,
    /// The request was accepted; re-read to learn the real status.
    RefreshRequired,
    /// The request was accepted and the intended status applied locally.
    Applied(ServerStatus),
}

/// Edit a finished request makes to a view's server collection.
///
/// Applied to whatever the collection holds once the request completes, so
/// changes from overlapping requests on different servers all survive.
#[derive(Clone, Debug, PartialEq)]
pub enum ServerChange {
    Unchanged,
    /// Fresh collection read after a refresh-mode action.
    Replaced(Vec<ServerDto>),
    Status { id: String, status: ServerStatus },
    Removed(String),
}

impl ServerChange {
    pub fn apply_to(self, servers: &mut Vec<ServerDto>) {
        match self {
            Self::Unchanged => {}
            Self::Replaced(fresh) => *servers = fresh,
            Self::Status { id, status } => {
                ServerLifecycle::apply(servers, &id, status);
            }
            Self::Removed(id) => servers.retain(|s| s.id != id),
        }
    }
}

#[derive(Clone)]
pub struct ServerLifecycle {
    gateway: ResourceGateway,
    mode: TransitionMode,
    notifier: Notifier,
}

impl ServerLifecycle {
    pub fn new(gateway: ResourceGateway, config: &Config, notifier: Notifier) -> Self {
        Self {
            gateway,
            mode: config.transition_mode,
            notifier,
        }
    }

    pub fn mode(&self) -> TransitionMode {
        self.mode
    }

    /// Requests `action` for `server` unless the UI guard forbids it.
    pub async fn request(
        &self,
        server: &ServerDto,
        action: ServerAction,
    ) -> Result<TransitionOutcome, AppError> {
        if !action.is_allowed(server.status) {
            tracing::debug!(
                "Ignoring {} for server {} in status {}",
                action.as_str(),
                server.id,
                server.status
            );
            return Ok(TransitionOutcome::Ignored);
        }

        self.gateway.server_action(&server.id, action).await?;
        self.notifier
            .success(format!("Server {} requested successfully", action.as_str()));

        let outcome = match self.mode {
            TransitionMode::Refresh => TransitionOutcome::RefreshRequired,
            TransitionMode::Optimistic => TransitionOutcome::Applied(action.target()),
        };
        tracing::debug!("Server {} {}: {:?}", server.id, action.as_str(), outcome);

        Ok(outcome)
    }

    /// Sets the status of server `id` in a view's copy of the collection.
    ///
    /// Returns whether a server was updated.
    pub fn apply(servers: &mut [ServerDto], id: &str, status: ServerStatus) -> bool {
        match servers.iter_mut().find(|s| s.id == id) {
            Some(server) => {
                server.status = status;
                true
            }
            None => false,
        }
    }

    /// Requests `action` for `server` and returns the edit its outcome calls for.
    pub async fn transition(
        &self,
        server: &ServerDto,
        action: ServerAction,
    ) -> Result<(TransitionOutcome, ServerChange), AppError> {
        let outcome = self.request(server, action).await?;
        let change = match outcome {
            TransitionOutcome::Ignored => ServerChange::Unchanged,
            TransitionOutcome::RefreshRequired => {
                ServerChange::Replaced(self.gateway.get_servers().await?)
            }
            TransitionOutcome::Applied(status) => ServerChange::Status {
                id: server.id.clone(),
                status,
            },
        };

        Ok((outcome, change))
    }

    /// Requests `action` for server `id` and brings `servers` up to date.
    pub async fn perform(
        &self,
        servers: &mut Vec<ServerDto>,
        id: &str,
        action: ServerAction,
    ) -> Result<TransitionOutcome, AppError> {
        let Some(server) = servers.iter().find(|s| s.id == id).cloned() else {
            let err = AppError::NotFound("Server not found".to_string());
            self.notifier.error(err.to_string());
            return Err(err);
        };

        let (outcome, change) = self.transition(&server, action).await?;
        change.apply_to(servers);

        Ok(outcome)
    }

    pub async fn create(&self, payload: &CreateServerDto) -> Result<ServerDto, AppError> {
        let server = self.gateway.create_server(payload).await?;

        tracing::info!("Created server {} ({})", server.id, server.name);
        self.notifier.success("Server created successfully!");

        Ok(server)
    }

    /// Deletes server `id`; the returned change drops it from a collection.
    pub async fn remove(&self, id: &str) -> Result<ServerChange, AppError> {
        self.gateway.delete_server(id).await?;

        tracing::info!("Deleted server {}", id);
        self.notifier.success("Server deleted successfully");

        Ok(ServerChange::Removed(id.to_string()))
    }

    /// Deletes server `id` and drops it from `servers` once the API confirmed.
    pub async fn delete(&self, servers: &mut Vec<ServerDto>, id: &str) -> Result<(), AppError> {
        self.remove(id).await?.apply_to(servers);
        Ok(())
    }
}
