//! End-to-end command runs against an in-process fake backend.

use std::collections::HashMap;
use std::path::Path;
use std::sync::Arc;
use std::sync::atomic::{AtomicUsize, Ordering};

use axum::extract::State;
use axum::http::{HeaderMap, StatusCode};
use axum::response::IntoResponse;
use axum::routing::{get, post};
use axum::{Form, Json, Router};
use clap::Parser;
use serde_json::{Value, json};
use stakr_cli::{Cli, CliError};

const EMAIL: &str = "ada@stakr.dev";
const PASSWORD: &str = "correct horse";
const TOKEN: &str = "tok-ada";

#[derive(Clone, Default)]
struct Backend {
    ready_probes: Arc<AtomicUsize>,
    /// `/ready` answers 503 this many times before succeeding.
    ready_after: usize,
    me_calls: Arc<AtomicUsize>,
}

async fn ready(State(backend): State<Backend>) -> StatusCode {
    let seen = backend.ready_probes.fetch_add(1, Ordering::SeqCst);
    if seen < backend.ready_after { StatusCode::SERVICE_UNAVAILABLE } else { StatusCode::OK }
}

async fn token(Form(form): Form<HashMap<String, String>>) -> impl IntoResponse {
    let known = form.get("username").map(String::as_str) == Some(EMAIL)
        || form.get("username").map(String::as_str) == Some("grace@stakr.dev");
    if known && form.get("password").map(String::as_str) == Some(PASSWORD) {
        (StatusCode::OK, Json(json!({ "access_token": TOKEN, "token_type": "bearer" })))
    } else {
        (StatusCode::UNAUTHORIZED, Json(json!({ "detail": "Incorrect username or password" })))
    }
}

async fn register(Json(body): Json<Value>) -> impl IntoResponse {
    if body["email"] == "taken@stakr.dev" {
        return (StatusCode::BAD_REQUEST, Json(json!({ "detail": "REGISTER_USER_ALREADY_EXISTS" })));
    }
    assert_eq!(body["first_name"], "Grace");
    assert_eq!(body["last_name"], "HOPPER");
    assert_eq!(body["job_title"], Value::Null);
    (StatusCode::CREATED, Json(json!({ "id": 2, "email": body["email"] })))
}

async fn me(State(backend): State<Backend>, headers: HeaderMap) -> impl IntoResponse {
    backend.me_calls.fetch_add(1, Ordering::SeqCst);
    let bearer = format!("Bearer {TOKEN}");
    if headers.get("authorization").and_then(|v| v.to_str().ok()) == Some(bearer.as_str()) {
        (StatusCode::OK, Json(json!({ "id": 7, "email": EMAIL, "first_name": "Ada", "is_active": true })))
    } else {
        (StatusCode::UNAUTHORIZED, Json(json!({ "detail": "Unauthorized" })))
    }
}

async fn version() -> Json<Value> {
    Json(json!({ "version": "1.4.2" }))
}

async fn spawn_backend(backend: Backend) -> String {
    let app = Router::new()
        .route("/ready", get(ready))
        .route("/auth/token", post(token))
        .route("/auth/register", post(register))
        .route("/auth/users/me", get(me))
        .route("/version", get(version))
        .with_state(backend);
    let listener = tokio::net::TcpListener::bind("127.0.0.1:0").await.unwrap();
    let addr = listener.local_addr().unwrap();
    tokio::spawn(async move {
        axum::serve(listener, app).await.unwrap();
    });
    format!("http://{addr}")
}

async fn run(api_url: &str, state: &Path, args: &[&str]) -> (Result<(), CliError>, String) {
    let state = state.to_str().unwrap();
    let mut argv = vec!["stakr-cli", "--api-url", api_url, "--state-file", state];
    argv.extend_from_slice(args);
    let cli = Cli::try_parse_from(argv).unwrap();
    let mut out = Vec::new();
    let result = stakr_cli::run(cli, &mut out).await;
    (result, String::from_utf8(out).unwrap())
}

fn stored(state: &Path) -> Value {
    std::fs::read_to_string(state).map_or(Value::Null, |raw| serde_json::from_str(&raw).unwrap())
}

#[tokio::test]
async fn ready_wait_retries_until_backend_answers() {
    let backend = Backend { ready_after: 2, ..Backend::default() };
    let probes = backend.ready_probes.clone();
    let url = spawn_backend(backend).await;
    let dir = tempfile::tempdir().unwrap();
    let state = dir.path().join("state.json");

    let (result, out) = run(&url, &state, &["ready", "--wait", "--interval-ms", "5"]).await;
    result.unwrap();
    assert_eq!(out, "ready after 3 probe(s)\n");
    assert_eq!(probes.load(Ordering::SeqCst), 3);
}

#[tokio::test]
async fn ready_without_wait_reports_a_starting_backend() {
    let url = spawn_backend(Backend { ready_after: 1, ..Backend::default() }).await;
    let dir = tempfile::tempdir().unwrap();

    let (result, _) = run(&url, &dir.path().join("s.json"), &["ready"]).await;
    assert!(matches!(result, Err(CliError::NotReady)));
}

#[tokio::test]
async fn login_me_logout_round_trip() {
    let url = spawn_backend(Backend::default()).await;
    let dir = tempfile::tempdir().unwrap();
    let state = dir.path().join("state.json");

    let (result, out) = run(&url, &state, &["login", "--email", " ADA@stakr.dev ", "--password", PASSWORD]).await;
    result.unwrap();
    assert_eq!(out, "Salut, ada\n");
    assert_eq!(stored(&state)["access_token"], TOKEN);

    let (result, out) = run(&url, &state, &["me"]).await;
    result.unwrap();
    assert!(out.starts_with("Salut, Ada\n"));
    assert!(out.contains("id:     7"));
    assert!(out.contains("status: Actif"));

    let (result, out) = run(&url, &state, &["logout"]).await;
    result.unwrap();
    assert_eq!(out, "Tu es déconnecté.\n");
    assert_eq!(stored(&state).get("access_token"), None);
}

#[tokio::test]
async fn login_failure_shows_backend_detail_in_banner() {
    let url = spawn_backend(Backend::default()).await;
    let dir = tempfile::tempdir().unwrap();
    let state = dir.path().join("state.json");

    let (result, _) = run(&url, &state, &["login", "--email", EMAIL, "--password", "wrong"]).await;
    let err = result.unwrap_err();
    assert_eq!(err.to_string(), "Incorrect username or password");
    assert_eq!(stored(&state).get("access_token"), None);
}

#[tokio::test]
async fn login_rejects_bad_email_before_calling_backend() {
    let url = spawn_backend(Backend::default()).await;
    let dir = tempfile::tempdir().unwrap();
    let state = dir.path().join("state.json");

    run(&url, &state, &["locale", "set", "en"]).await.0.unwrap();
    let (result, _) = run(&url, &state, &["login", "--email", "ada", "--password", PASSWORD]).await;
    assert!(matches!(result, Err(CliError::Rejected(_))));
}

#[tokio::test]
async fn stale_token_forces_exactly_one_logout() {
    let backend = Backend::default();
    let me_calls = backend.me_calls.clone();
    let url = spawn_backend(backend).await;
    let dir = tempfile::tempdir().unwrap();
    let state = dir.path().join("state.json");
    std::fs::write(&state, r#"{"access_token":"expired","refresh_token":"old"}"#).unwrap();

    let (result, out) = run(&url, &state, &["me"]).await;
    assert!(matches!(result, Err(CliError::Api(_))));
    assert_eq!(out, "Tu es déconnecté.\n");
    assert_eq!(me_calls.load(Ordering::SeqCst), 1);
    assert_eq!(stored(&state), json!({}));

    let (result, _) = run(&url, &state, &["me"]).await;
    assert!(matches!(result, Err(CliError::NotSignedIn)));
    assert_eq!(me_calls.load(Ordering::SeqCst), 1);
}

#[tokio::test]
async fn signup_registers_then_signs_in() {
    let url = spawn_backend(Backend::default()).await;
    let dir = tempfile::tempdir().unwrap();
    let state = dir.path().join("state.json");

    let args = [
        "signup", "--first-name", "grace", "--last-name", "hopper", "--email", "grace@stakr.dev", "--password",
        PASSWORD,
    ];
    let (result, out) = run(&url, &state, &args).await;
    result.unwrap();
    assert_eq!(out, "Salut, Grace\n");
    assert_eq!(stored(&state)["access_token"], TOKEN);
}

#[tokio::test]
async fn signup_with_taken_email_reports_it() {
    let url = spawn_backend(Backend::default()).await;
    let dir = tempfile::tempdir().unwrap();
    let state = dir.path().join("state.json");

    let args =
        ["signup", "--first-name", "Tom", "--last-name", "Taken", "--email", "taken@stakr.dev", "--password", PASSWORD];
    let (result, _) = run(&url, &state, &args).await;
    let err = result.unwrap_err();
    assert!(matches!(err, CliError::Rejected(_)));
    assert_eq!(stored(&state).get("access_token"), None);
}

#[tokio::test]
async fn version_and_locale_toggle_survive_restarts() {
    let url = spawn_backend(Backend::default()).await;
    let dir = tempfile::tempdir().unwrap();
    let state = dir.path().join("state.json");

    let (result, out) = run(&url, &state, &["version"]).await;
    result.unwrap();
    assert_eq!(out, "Version 1.4.2\n");

    let (_, out) = run(&url, &state, &["locale", "toggle"]).await;
    assert_eq!(out, "en\n");
    let (_, out) = run(&url, &state, &["locale"]).await;
    assert_eq!(out, "en\n");
    let (_, out) = run(&url, &state, &["status"]).await;
    assert!(out.contains("session: signed out"));
    assert!(out.contains("locale:  en"));
}
