use std::sync::{Arc, Mutex};

use serde_json::{json, Value};
use tokio::net::TcpListener;

use crate::{
    api::{self, ApiState, Failure, FailureBody},
    context::TestContext,
    error::TestError,
};

/// Builder for starting a fake management API with customizable data.
///
/// # Example
///
/// ```rust,ignore
/// use test_utils::{builder::TestBuilder, api::FailureBody, factory};
///
/// let test = TestBuilder::new()
///     .with_user(factory::user::create_admin(), "changeme")
///     .with_failure("GET", "/api/servers", 500, FailureBody::EmptyJson)
///     .build()
///     .await?;
/// ```
pub struct TestBuilder {
    state: ApiState,
}

impl Default for TestBuilder {
    fn default() -> Self {
        Self::new()
    }
}

impl TestBuilder {
    /// Creates a builder for an empty API with a default hypervisor config.
    pub fn new() -> Self {
        Self {
            state: ApiState {
                proxmox: json!({
                    "apiUrl": "https://pve.test:8006/api2/json",
                    "username": "root@pam",
                    "verifySSL": false,
                    "nodeList": []
                }),
                ..ApiState::default()
            },
        }
    }

    /// Adds a user account that can log in with `password`.
    ///
    /// # Arguments
    /// - `user` - User JSON as produced by `factory::user`
    /// - `password` - Password accepted by `POST /auth/login`
    pub fn with_user(mut self, user: Value, password: &str) -> Self {
        if let Some(email) = user["email"].as_str() {
            self.state
                .passwords
                .insert(email.to_string(), password.to_string());
        }
        self.state.users.push(user);
        self
    }

    pub fn with_server(mut self, server: Value) -> Self {
        self.state.servers.push(server);
        self
    }

    pub fn with_node(mut self, node: Value) -> Self {
        self.state.nodes.push(node);
        self
    }

    /// Makes every `method` request to `path` fail with `status` and `body`.
    ///
    /// `path` is the full request path without query, including the `/api` or
    /// `/proxmox/api` prefix.
    pub fn with_failure(mut self, method: &str, path: &str, status: u16, body: FailureBody) -> Self {
        self.state.failures.push(Failure {
            method: method.to_uppercase(),
            path: path.to_string(),
            status,
            body,
        });
        self
    }

    /// Binds an ephemeral port and starts serving.
    ///
    /// # Returns
    /// - `Ok(TestContext)` - Running API
    /// - `Err(TestError::Io)` - The listener could not be bound
    pub async fn build(self) -> Result<TestContext, TestError> {
        let state = Arc::new(Mutex::new(self.state));

        let listener = TcpListener::bind("127.0.0.1:0").await?;
        let addr = listener.local_addr()?;

        let app = api::router(state.clone());
        let server = tokio::spawn(async move {
            let _ = axum::serve(listener, app).await;
        });

        Ok(TestContext {
            api_url: format!("http://{}/api", addr),
            proxmox_url: format!("http://{}/proxmox/api", addr),
            state,
            server,
        })
    }
}
