use std::{collections::HashMap, sync::Arc};

use axum::{
    extract::{Query, State},
    http::{header, HeaderMap, StatusCode},
    response::{IntoResponse, Response},
    routing::{get, post},
    Json, Router,
};
use serde::{Deserialize, Serialize};
use tokio::{net::TcpListener, sync::RwLock};
use uuid::Uuid;

/// Name of the cookie carrying the session id.
pub const SESSION_COOKIE: &str = "ubclaunchpad-inertia";

/// Container whose logs are served when the request names none.
pub const DEFAULT_CONTAINER: &str = "/inertia-daemon";

#[derive(Clone, Debug, Serialize, Deserialize, PartialEq, Eq)]
pub struct DaemonStatus {
    pub version: String,
    pub branch: String,
    pub commit_hash: String,
    pub commit_message: String,
    pub build_type: String,
    pub containers: Vec<String>,
    pub build_container_active: bool,
}

#[derive(Deserialize)]
pub struct Credentials {
    pub username: String,
    pub password: String,
}

#[derive(Deserialize)]
pub struct LogsQuery {
    pub stream: Option<String>,
    pub container: Option<String>,
}

/// Login accepted by the mock daemon.
#[derive(Clone, Debug)]
pub struct Config {
    pub username: String,
    pub password: String,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            username: "admin".to_string(),
            password: "admin".to_string(),
        }
    }
}

pub struct Daemon {
    users: HashMap<String, String>,
    sessions: HashMap<Uuid, String>,
    logs: HashMap<String, Vec<String>>,
    status: DaemonStatus,
}

impl Daemon {
    fn new(config: Config) -> Self {
        let mut users = HashMap::new();
        users.insert(config.username, config.password);

        let mut logs = HashMap::new();
        logs.insert(
            DEFAULT_CONTAINER.to_string(),
            vec![
                "Downloading build tools...".to_string(),
                "Checking for existing SSL certificates...".to_string(),
                "Serving daemon".to_string(),
            ],
        );
        logs.insert(
            "/web".to_string(),
            vec!["listening on :80".to_string()],
        );

        Self {
            users,
            sessions: HashMap::new(),
            logs,
            status: DaemonStatus {
                version: env!("CARGO_PKG_VERSION").to_string(),
                branch: "master".to_string(),
                commit_hash: "a1b2c3d".to_string(),
                commit_message: "Initial deploy".to_string(),
                build_type: "docker-compose".to_string(),
                containers: vec!["/web".to_string()],
                build_container_active: false,
            },
        }
    }

    fn session_user(&self, headers: &HeaderMap) -> Option<&str> {
        session_id(headers)
            .and_then(|id| self.sessions.get(&id))
            .map(String::as_str)
    }
}

pub type Db = Arc<RwLock<Daemon>>;

pub fn app() -> Router {
    app_with(Config::default())
}

pub fn app_with(config: Config) -> Router {
    let db: Db = Arc::new(RwLock::new(Daemon::new(config)));
    Router::new()
        .route("/", get(|| async { StatusCode::OK }))
        .route("/user/login", post(login))
        .route("/user/logout", post(logout))
        .route("/user/validate", get(validate))
        .route("/status", get(status))
        .route("/logs", post(logs))
        .with_state(db)
}

pub async fn run(listener: TcpListener) -> Result<(), std::io::Error> {
    run_with(listener, Config::default()).await
}

pub async fn run_with(listener: TcpListener, config: Config) -> Result<(), std::io::Error> {
    axum::serve(listener, app_with(config)).await
}

/// Extract the session id from the `Cookie` header, if any.
fn session_id(headers: &HeaderMap) -> Option<Uuid> {
    headers
        .get_all(header::COOKIE)
        .iter()
        .filter_map(|value| value.to_str().ok())
        .flat_map(|value| value.split(';'))
        .filter_map(|pair| pair.trim().strip_prefix(SESSION_COOKIE)?.strip_prefix('='))
        .find_map(|id| id.parse().ok())
}

// The web client sends a JSON body under a form content type, so the body is
// read as raw text instead of going through the `Json` extractor.
async fn login(State(db): State<Db>, body: String) -> Response {
    let Ok(credentials) = serde_json::from_str::<Credentials>(&body) else {
        return StatusCode::BAD_REQUEST.into_response();
    };

    let mut daemon = db.write().await;
    if daemon.users.get(&credentials.username) != Some(&credentials.password) {
        tracing::info!(username = %credentials.username, "rejected login");
        return StatusCode::UNAUTHORIZED.into_response();
    }

    let id = Uuid::new_v4();
    daemon.sessions.insert(id, credentials.username.clone());
    tracing::info!(username = %credentials.username, "user logged in");

    let cookie = format!("{SESSION_COOKIE}={id}; Path=/; HttpOnly");
    (StatusCode::OK, [(header::SET_COOKIE, cookie)]).into_response()
}

async fn logout(State(db): State<Db>, headers: HeaderMap) -> Response {
    if let Some(id) = session_id(&headers) {
        if let Some(username) = db.write().await.sessions.remove(&id) {
            tracing::info!(%username, "user logged out");
        }
    }
    let cookie = format!("{SESSION_COOKIE}=; Path=/; Max-Age=0");
    (StatusCode::OK, [(header::SET_COOKIE, cookie)]).into_response()
}

async fn validate(State(db): State<Db>, headers: HeaderMap) -> StatusCode {
    match db.read().await.session_user(&headers) {
        Some(_) => StatusCode::OK,
        None => StatusCode::UNAUTHORIZED,
    }
}

async fn status(
    State(db): State<Db>,
    headers: HeaderMap,
) -> Result<Json<DaemonStatus>, StatusCode> {
    let daemon = db.read().await;
    daemon.session_user(&headers).ok_or(StatusCode::UNAUTHORIZED)?;
    Ok(Json(daemon.status.clone()))
}

async fn logs(
    State(db): State<Db>,
    headers: HeaderMap,
    Query(query): Query<LogsQuery>,
) -> Result<String, StatusCode> {
    let daemon = db.read().await;
    daemon.session_user(&headers).ok_or(StatusCode::UNAUTHORIZED)?;

    let container = query.container.as_deref().unwrap_or(DEFAULT_CONTAINER);
    tracing::debug!(container, stream = ?query.stream, "serving logs");
    let lines = daemon.logs.get(container).ok_or(StatusCode::NOT_FOUND)?;

    let mut body = lines.join("\n");
    body.push('\n');
    Ok(body)
}
