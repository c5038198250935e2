//! Fake management and hypervisor-proxy API.
//!
//! Speaks the same JSON as the real service for the endpoints the panel's live
//! backend is tested against. Every request passes through `intercept`, which
//! records it and applies any failure injected through `TestBuilder::with_failure`.
//!
//! Sessions are per client: `POST /auth/login` sets a `sid` cookie and every
//! route except login and logout answers 401 unless the request carries a live one.

use std::{
    collections::HashMap,
    sync::{Arc, Mutex, MutexGuard},
};

use axum::{
    body::{to_bytes, Body},
    extract::{Path, Query, Request, State},
    http::{
        header::{CONTENT_TYPE, COOKIE, SET_COOKIE},
        HeaderMap, StatusCode,
    },
    middleware::{self, Next},
    response::{IntoResponse, Response},
    routing::{get, post},
    Extension, Json, Router,
};
use chrono::Utc;
use serde_json::{json, Value};

use crate::factory::helpers::next_id;

pub type SharedState = Arc<Mutex<ApiState>>;

#[derive(Default)]
pub struct ApiState {
    pub users: Vec<Value>,
    /// Password per email.
    pub passwords: HashMap<String, String>,
    /// User id per open session cookie value.
    pub sessions: HashMap<String, String>,
    pub servers: Vec<Value>,
    pub nodes: Vec<Value>,
    pub proxmox: Value,
    pub failures: Vec<Failure>,
    pub requests: Vec<RecordedRequest>,
}

/// Body returned by an injected failure.
#[derive(Clone, Debug)]
pub enum FailureBody {
    /// `{"message": ...}`
    Message(String),
    /// `{}`
    EmptyJson,
    /// A non-JSON body.
    PlainText(String),
}

#[derive(Clone, Debug)]
pub struct Failure {
    pub method: String,
    pub path: String,
    pub status: u16,
    pub body: FailureBody,
}

impl IntoResponse for Failure {
    fn into_response(self) -> Response {
        let status = StatusCode::from_u16(self.status).unwrap_or(StatusCode::INTERNAL_SERVER_ERROR);

        match self.body {
            FailureBody::Message(message) => (status, Json(json!({ "message": message }))).into_response(),
            FailureBody::EmptyJson => (status, Json(json!({}))).into_response(),
            FailureBody::PlainText(text) => (status, text).into_response(),
        }
    }
}

/// A request as received by the fake API.
#[derive(Clone, Debug, PartialEq)]
pub struct RecordedRequest {
    pub method: String,
    /// Path including the query string.
    pub path: String,
    pub content_type: Option<String>,
    pub body: Option<Value>,
}

pub(crate) fn lock(state: &SharedState) -> MutexGuard<'_, ApiState> {
    state.lock().unwrap_or_else(|poisoned| poisoned.into_inner())
}

const SESSION_COOKIE: &str = "sid";

/// User id of the session a protected request was made under.
#[derive(Clone, Debug)]
struct SessionUser(String);

fn message(status: StatusCode, message: &str) -> Response {
    (status, Json(json!({ "message": message }))).into_response()
}

pub fn router(state: SharedState) -> Router {
    let session = || middleware::from_fn_with_state(state.clone(), require_session);

    let public = Router::new()
        .route("/auth/login", post(login))
        .route("/auth/logout", post(logout));

    let protected = Router::new()
        .route("/auth/me", get(me))
        .route("/servers", get(list_servers).post(create_server))
        .route(
            "/servers/{id}",
            get(get_server).put(update_server).delete(delete_server),
        )
        .route("/servers/{id}/metrics", get(server_metrics))
        .route("/servers/{id}/{action}", post(server_action))
        .route("/nodes", get(list_nodes))
        .route("/users/{id}", get(get_user).put(update_user))
        .route_layer(session());

    let api = public.merge(protected);

    let proxmox = Router::new()
        .route("/settings/proxmox", get(get_proxmox))
        .route("/settings/proxmox/sync-nodes", post(sync_nodes))
        .route_layer(session());

    Router::new()
        .nest("/api", api)
        .nest("/proxmox/api", proxmox)
        .fallback(|| async { message(StatusCode::NOT_FOUND, "Not found") })
        .layer(middleware::from_fn_with_state(state.clone(), intercept))
        .with_state(state)
}

async fn intercept(State(state): State<SharedState>, request: Request, next: Next) -> Response {
    let (parts, body) = request.into_parts();
    let Ok(bytes) = to_bytes(body, usize::MAX).await else {
        return StatusCode::BAD_REQUEST.into_response();
    };

    let method = parts.method.to_string();
    let failure = {
        let mut state = lock(&state);
        state.requests.push(RecordedRequest {
            method: method.clone(),
            path: parts
                .uri
                .path_and_query()
                .map(|p| p.as_str().to_string())
                .unwrap_or_default(),
            content_type: parts
                .headers
                .get(CONTENT_TYPE)
                .and_then(|v| v.to_str().ok())
                .map(str::to_string),
            body: serde_json::from_slice(&bytes).ok(),
        });

        state
            .failures
            .iter()
            .find(|f| f.method == method && f.path == parts.uri.path())
            .cloned()
    };

    if let Some(failure) = failure {
        return failure.into_response();
    }

    next.run(Request::from_parts(parts, Body::from(bytes))).await
}

/// Value of the session cookie sent with a request, if any.
fn session_id(headers: &HeaderMap) -> Option<String> {
    headers
        .get_all(COOKIE)
        .iter()
        .filter_map(|value| value.to_str().ok())
        .flat_map(|value| value.split(';'))
        .find_map(|pair| {
            let (name, value) = pair.trim().split_once('=')?;
            (name == SESSION_COOKIE).then(|| value.to_string())
        })
}

async fn require_session(
    State(state): State<SharedState>,
    mut request: Request,
    next: Next,
) -> Response {
    let user_id = session_id(request.headers())
        .and_then(|sid| lock(&state).sessions.get(&sid).cloned());

    let Some(user_id) = user_id else {
        return message(StatusCode::UNAUTHORIZED, "Not authenticated");
    };

    request.extensions_mut().insert(SessionUser(user_id));
    next.run(request).await
}

async fn login(State(state): State<SharedState>, Json(body): Json<Value>) -> Response {
    let email = body["email"].as_str().unwrap_or_default();
    let password = body["password"].as_str().unwrap_or_default();

    let mut state = lock(&state);
    if state.passwords.get(email).map(String::as_str) != Some(password) {
        return message(StatusCode::UNAUTHORIZED, "Invalid email or password");
    }

    let Some(user) = state.users.iter().find(|u| u["email"] == email).cloned() else {
        return message(StatusCode::UNAUTHORIZED, "Invalid email or password");
    };
    let Some(user_id) = user["id"].as_str().map(str::to_string) else {
        return message(StatusCode::INTERNAL_SERVER_ERROR, "User without id");
    };

    let sid = format!("session-{}", next_id());
    state.sessions.insert(sid.clone(), user_id);

    let cookie = format!("{}={}; Path=/; HttpOnly", SESSION_COOKIE, sid);
    ([(SET_COOKIE, cookie)], Json(user)).into_response()
}

/// Ends the caller's session if it has one. Always succeeds.
async fn logout(State(state): State<SharedState>, headers: HeaderMap) -> Response {
    if let Some(sid) = session_id(&headers) {
        lock(&state).sessions.remove(&sid);
    }

    let expired = format!("{}=; Path=/; Max-Age=0", SESSION_COOKIE);
    (StatusCode::NO_CONTENT, [(SET_COOKIE, expired)]).into_response()
}

async fn me(
    State(state): State<SharedState>,
    Extension(SessionUser(user_id)): Extension<SessionUser>,
) -> Response {
    match lock(&state).users.iter().find(|u| u["id"] == user_id.as_str()) {
        Some(user) => Json(user.clone()).into_response(),
        None => message(StatusCode::UNAUTHORIZED, "Not authenticated"),
    }
}

async fn list_servers(State(state): State<SharedState>) -> Json<Value> {
    Json(Value::Array(lock(&state).servers.clone()))
}

async fn get_server(State(state): State<SharedState>, Path(id): Path<String>) -> Response {
    match lock(&state).servers.iter().find(|s| s["id"] == id.as_str()) {
        Some(server) => Json(server.clone()).into_response(),
        None => message(StatusCode::NOT_FOUND, "Server not found"),
    }
}

async fn create_server(
    State(state): State<SharedState>,
    Extension(SessionUser(user_id)): Extension<SessionUser>,
    Json(body): Json<Value>,
) -> Response {
    let mut state = lock(&state);
    let id = next_id();
    let server = json!({
        "id": id.to_string(),
        "name": body["name"],
        "status": "running",
        "vmid": 200 + id,
        "node": body["node"],
        "cpu": body["cpu"],
        "memory": body["memory"],
        "storage": body["storage"],
        "ipAddress": format!("10.0.0.{}", id % 250 + 2),
        "osTemplate": body["osTemplate"],
        "userId": user_id,
        "createdAt": Utc::now().to_rfc3339(),
    });

    state.servers.push(server.clone());
    (StatusCode::CREATED, Json(server)).into_response()
}

async fn update_server(
    State(state): State<SharedState>,
    Path(id): Path<String>,
    Json(body): Json<Value>,
) -> Response {
    let mut state = lock(&state);
    let Some(server) = state.servers.iter_mut().find(|s| s["id"] == id.as_str()) else {
        return message(StatusCode::NOT_FOUND, "Server not found");
    };

    merge(server, &body, &["name", "cpu", "memory", "storage"]);
    Json(server.clone()).into_response()
}

async fn delete_server(State(state): State<SharedState>, Path(id): Path<String>) -> Response {
    let mut state = lock(&state);
    let before = state.servers.len();
    state.servers.retain(|s| s["id"] != id.as_str());

    if state.servers.len() == before {
        return message(StatusCode::NOT_FOUND, "Server not found");
    }
    StatusCode::NO_CONTENT.into_response()
}

async fn server_action(
    State(state): State<SharedState>,
    Path((id, action)): Path<(String, String)>,
) -> Response {
    let status = match action.as_str() {
        "start" | "restart" => "running",
        "stop" => "stopped",
        _ => return message(StatusCode::NOT_FOUND, "Unknown action"),
    };

    let mut state = lock(&state);
    match state.servers.iter_mut().find(|s| s["id"] == id.as_str()) {
        Some(server) => {
            server["status"] = json!(status);
            StatusCode::NO_CONTENT.into_response()
        }
        None => message(StatusCode::NOT_FOUND, "Server not found"),
    }
}

async fn server_metrics(
    Path(id): Path<String>,
    Query(query): Query<HashMap<String, String>>,
) -> Json<Value> {
    let points = match query.get("period").map(String::as_str) {
        Some("hour") => 12,
        _ => 24,
    };

    let usage: Vec<Value> = (0..points)
        .map(|i| {
            json!({
                "cpu": 10.0 + i as f64,
                "memory": 40.0,
                "disk": 25.0,
                "network": { "in": 100.0, "out": 60.0 },
                "timestamp": Utc::now().to_rfc3339(),
            })
        })
        .collect();

    Json(json!({ "serverId": id, "usage": usage }))
}

async fn list_nodes(State(state): State<SharedState>) -> Json<Value> {
    Json(Value::Array(lock(&state).nodes.clone()))
}

async fn get_user(State(state): State<SharedState>, Path(id): Path<String>) -> Response {
    match lock(&state).users.iter().find(|u| u["id"] == id.as_str()) {
        Some(user) => Json(user.clone()).into_response(),
        None => message(StatusCode::NOT_FOUND, "User not found"),
    }
}

async fn update_user(
    State(state): State<SharedState>,
    Path(id): Path<String>,
    Json(body): Json<Value>,
) -> Response {
    let mut state = lock(&state);
    let Some(user) = state.users.iter_mut().find(|u| u["id"] == id.as_str()) else {
        return message(StatusCode::NOT_FOUND, "User not found");
    };

    merge(user, &body, &["name", "email", "role"]);
    Json(user.clone()).into_response()
}

async fn get_proxmox(State(state): State<SharedState>) -> Json<Value> {
    Json(lock(&state).proxmox.clone())
}

async fn sync_nodes(State(state): State<SharedState>) -> Json<Value> {
    Json(Value::Array(lock(&state).nodes.clone()))
}

/// Copies the listed keys present in `patch` onto `target`.
fn merge(target: &mut Value, patch: &Value, keys: &[&str]) {
    for key in keys {
        if let Some(value) = patch.get(*key) {
            target[*key] = value.clone();
        }
    }
}
