use reqwest::{header::CONTENT_TYPE, Client, RequestBuilder, Response};
use dioxus_logger::tracing;
use serde::de::DeserializeOwned;

use crate::{
    client::model::error::{ApiError, AppError},
    model::api::ErrorDto,
};

/// Which of the two remote APIs a request targets.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Api {
    /// General management API.
    Management,
    /// Hypervisor-proxy API.
    Proxmox,
}

impl Api {
    fn label(&self) -> &'static str {
        match self {
            Self::Management => "API",
            Self::Proxmox => "Proxmox API",
        }
    }
}

/// Helper function to parse API responses with consistent error handling
pub async fn parse_response<T: DeserializeOwned>(
    response: Response,
    api: Api,
) -> Result<T, AppError> {
    if !response.status().is_success() {
        return Err(error_from_response(response, api).await);
    }

    response.json::<T>().await.map_err(|e| {
        ApiError {
            status: 500,
            message: format!("Failed to parse response: {}", e),
        }
        .into()
    })
}

/// Helper function to parse empty success responses (204 No Content, 201 Created, etc.)
pub async fn parse_empty_response(response: Response, api: Api) -> Result<(), AppError> {
    if !response.status().is_success() {
        return Err(error_from_response(response, api).await);
    }

    Ok(())
}

/// Normalizes a non-2xx response into a single message.
///
/// A JSON `{message}` body wins; JSON without a message falls back to the
/// status code; anything else is reported as unknown.
async fn error_from_response(response: Response, api: Api) -> AppError {
    let status = response.status().as_u16() as u64;

    let message = match response.text().await {
        Ok(body) => match serde_json::from_str::<ErrorDto>(&body) {
            Ok(ErrorDto {
                message: Some(message),
            }) if !message.trim().is_empty() => message,
            Ok(_) => format!("{} error: {}", api.label(), status),
            Err(_) => "Unknown error".to_string(),
        },
        Err(_) => "Unknown error".to_string(),
    };

    ApiError { status, message }.into()
}

/// Create a GET request with credentials and JSON content type
pub fn get(client: &Client, url: &str) -> RequestBuilder {
    with_credentials(client.get(url)).header(CONTENT_TYPE, "application/json")
}

/// Create a POST request with credentials and JSON content type
pub fn post(client: &Client, url: &str) -> RequestBuilder {
    with_credentials(client.post(url)).header(CONTENT_TYPE, "application/json")
}

/// Create a PUT request with credentials and JSON content type
pub fn put(client: &Client, url: &str) -> RequestBuilder {
    with_credentials(client.put(url)).header(CONTENT_TYPE, "application/json")
}

/// Create a DELETE request with credentials and JSON content type
pub fn delete(client: &Client, url: &str) -> RequestBuilder {
    with_credentials(client.delete(url)).header(CONTENT_TYPE, "application/json")
}

/// Lets the browser attach the session cookie to cross-origin API calls.
#[cfg(target_arch = "wasm32")]
fn with_credentials(request: RequestBuilder) -> RequestBuilder {
    request.fetch_credentials_include()
}

/// Native clients carry the session in the client's own cookie store.
#[cfg(not(target_arch = "wasm32"))]
fn with_credentials(request: RequestBuilder) -> RequestBuilder {
    request
}

/// Builds the client shared by every request of one backend.
///
/// Native targets keep a cookie store so the session cookie set by
/// `POST /auth/login` is sent on every later call.
pub fn client() -> Client {
    #[cfg(not(target_arch = "wasm32"))]
    let client = Client::builder().cookie_store(true).build();
    #[cfg(target_arch = "wasm32")]
    let client = Client::builder().build();

    client.unwrap_or_else(|err| {
        tracing::error!("Failed to build HTTP client, using defaults: {}", err);
        Client::new()
    })
}

/// Send a request and handle common errors
pub async fn send_request(request: RequestBuilder) -> Result<Response, AppError> {
    request.send().await.map_err(|e| {
        ApiError {
            status: 0,
            message: format!("Failed to send request: {}", e),
        }
        .into()
    })
}

/// Serialize a payload to JSON string
pub fn serialize_json<T: serde::Serialize>(payload: &T) -> Result<String, AppError> {
    serde_json::to_string(payload).map_err(|e| {
        ApiError {
            status: 500,
            message: format!("Failed to serialize request: {}", e),
        }
        .into()
    })
}
