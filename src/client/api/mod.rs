//! Resource gateway.
//!
//! One uniform contract over the management API's resources. Each resource group
//! is a trait (`ServerApi`, `UserApi`, ...) implemented three times with identical
//! signatures: by `HttpBackend` (the live API), by `MockBackend` (the simulated
//! backend kept in local storage) and by `ResourceGateway`, which picks one of the
//! two from the injected `Config` and adds the shared error policy:
//!
//! - every failure is normalized into an `AppError` whose message is shown once,
//!   through the gateway's `Notifier`, and then returned to the caller;
//! - nothing is retried, cached or deduplicated. Two concurrent reads are two
//!   independent round trips.

use std::rc::Rc;

use dioxus_logger::tracing;

use crate::client::{
    config::{ApiMode, Config},
    model::error::AppError,
    store::{KeyValueStore, Notifier},
};

/// Calls the same operation on whichever backend the gateway wraps and settles
/// the result through the gateway's error policy.
macro_rules! dispatch {
    ($gateway:expr, $method:ident ( $($arg:expr),* )) => {{
        let gateway = $gateway;
        let result = match &gateway.backend {
            $crate::client::api::Backend::Live(backend) => backend.$method($($arg),*).await,
            $crate::client::api::Backend::Mock(backend) => backend.$method($($arg),*).await,
        };
        gateway.settle(stringify!($method), result)
    }};
}

pub mod auth;
pub mod billing;
pub mod catalog;
pub mod helper;
pub mod http;
pub mod mock;
pub mod node;
pub mod proxmox;
pub mod server;
pub mod user;

#[cfg(test)]
mod test;

pub use auth::AuthApi;
pub use billing::BillingApi;
pub use catalog::CatalogApi;
pub use http::HttpBackend;
pub use mock::MockBackend;
pub use node::NodeApi;
pub use proxmox::ProxmoxApi;
pub use server::ServerApi;
pub use user::UserApi;

#[derive(Clone)]
pub enum Backend {
    Live(HttpBackend),
    Mock(MockBackend),
}

#[derive(Clone)]
pub struct ResourceGateway {
    backend: Backend,
    notifier: Notifier,
    notify: bool,
}

impl ResourceGateway {
    /// Builds the gateway for the configured mode.
    ///
    /// `store` only matters in mock mode, where it holds the simulated dataset.
    pub fn new(config: &Config, store: Rc<dyn KeyValueStore>, notifier: Notifier) -> Self {
        let backend = match config.api_mode {
            ApiMode::Live => Backend::Live(HttpBackend::new(config)),
            ApiMode::Mock => Backend::Mock(MockBackend::new(store)),
        };

        Self::with_backend(backend, notifier)
    }

    pub fn with_backend(backend: Backend, notifier: Notifier) -> Self {
        Self {
            backend,
            notifier,
            notify: true,
        }
    }

    pub fn mode(&self) -> ApiMode {
        match self.backend {
            Backend::Live(_) => ApiMode::Live,
            Backend::Mock(_) => ApiMode::Mock,
        }
    }

    /// A copy of this gateway that logs failures without notifying the user.
    pub fn quiet(&self) -> Self {
        Self {
            notify: false,
            ..self.clone()
        }
    }

    fn settle<T>(&self, operation: &str, result: Result<T, AppError>) -> Result<T, AppError> {
        match &result {
            Ok(_) => tracing::debug!("Gateway {} succeeded", operation),
            Err(err) if self.notify => {
                tracing::error!("Gateway {} failed: {}", operation, err);
                self.notifier.error(err.to_string());
            }
            Err(err) => tracing::warn!("Gateway {} failed: {}", operation, err),
        }

        result
    }
}
