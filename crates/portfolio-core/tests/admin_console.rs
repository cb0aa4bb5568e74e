//! Integration tests for the admin console against an in-process backend.
//!
//! A small axum router stands in for the real admin API on a random local
//! port; the console talks to it through the real reqwest client.

use std::collections::HashSet;
use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::Arc;

use axum::extract::{Path, State};
use axum::http::{HeaderMap, StatusCode};
use axum::routing::{delete, get, post, put};
use axum::{Json, Router};
use parking_lot::Mutex;
use serde_json::{json, Value};
use tempfile::TempDir;

use portfolio_core::api::wire::INVALID_RESPONSE;
use portfolio_core::console::{login_error_text, LOGIN_RETRY, MARKED_CONTACTED, MESSAGE_DELETED};
use portfolio_core::{
    AdminApi, AuthState, BannerKind, Credentials, Dashboard, GuardDecision, HttpAdminApi,
    LoginController, MemorySessionStore, PortfolioError, RouteGuard, SessionStore, SharedApi,
    SharedSession, Storage,
};

const TOKEN: &str = "abc";

// ============================================================================
// Stub Backend
// ============================================================================

#[derive(Default)]
struct Backend {
    messages: Mutex<Vec<Value>>,
    /// Ids whose mutations answer 500
    failing: Mutex<HashSet<String>>,
    /// Requests that reached a message endpoint
    hits: AtomicUsize,
}

type Shared = Arc<Backend>;

fn authorized(headers: &HeaderMap) -> bool {
    headers
        .get("authorization")
        .and_then(|v| v.to_str().ok())
        .map(|v| v == format!("Bearer {}", TOKEN))
        .unwrap_or(false)
}

async fn login(Json(body): Json<Value>) -> (StatusCode, Json<Value>) {
    match (body["username"].as_str(), body["password"].as_str()) {
        (Some("admin"), Some("secret")) => (StatusCode::OK, Json(json!({ "token": TOKEN }))),
        (Some("tokenless"), _) => (StatusCode::OK, Json(json!({ "ok": true }))),
        _ => (
            StatusCode::UNAUTHORIZED,
            Json(json!({ "error": "Invalid credentials" })),
        ),
    }
}

async fn list(State(backend): State<Shared>, headers: HeaderMap) -> (StatusCode, Json<Value>) {
    backend.hits.fetch_add(1, Ordering::SeqCst);
    if !authorized(&headers) {
        return (
            StatusCode::UNAUTHORIZED,
            Json(json!({ "message": "Unauthorized" })),
        );
    }
    let data = backend.messages.lock().clone();
    (StatusCode::OK, Json(json!({ "data": data })))
}

async fn mark_read(
    State(backend): State<Shared>,
    headers: HeaderMap,
    Path(id): Path<String>,
) -> (StatusCode, Json<Value>) {
    backend.hits.fetch_add(1, Ordering::SeqCst);
    if !authorized(&headers) {
        return (StatusCode::UNAUTHORIZED, Json(json!({})));
    }
    if backend.failing.lock().contains(&id) {
        return (StatusCode::INTERNAL_SERVER_ERROR, Json(json!({})));
    }
    for message in backend.messages.lock().iter_mut() {
        if message["_id"] == id.as_str() {
            message["read"] = json!(true);
        }
    }
    (StatusCode::OK, Json(json!({ "success": true })))
}

async fn remove(
    State(backend): State<Shared>,
    headers: HeaderMap,
    Path(id): Path<String>,
) -> (StatusCode, Json<Value>) {
    backend.hits.fetch_add(1, Ordering::SeqCst);
    if !authorized(&headers) {
        return (StatusCode::UNAUTHORIZED, Json(json!({})));
    }
    if backend.failing.lock().contains(&id) {
        return (
            StatusCode::INTERNAL_SERVER_ERROR,
            Json(json!({ "message": "Database unavailable" })),
        );
    }
    backend.messages.lock().retain(|m| m["_id"] != id.as_str());
    (StatusCode::OK, Json(json!({ "success": true })))
}

fn seed() -> Vec<Value> {
    ["m1", "m2", "m3"]
        .iter()
        .map(|id| {
            json!({
                "_id": id,
                "name": format!("Sender {}", id),
                "email": format!("{}@example.com", id),
                "subject": format!("About {}", id),
                "message": "Hello there",
                "read": false,
                "createdAt": "2025-03-01T12:00:00.000Z",
            })
        })
        .collect()
}

/// Test fixture: stub backend plus client-side wiring.
struct TestFixture {
    backend: Shared,
    api: SharedApi,
    base_url: String,
}

impl TestFixture {
    async fn new() -> Self {
        let backend: Shared = Arc::new(Backend::default());
        *backend.messages.lock() = seed();

        let app = Router::new()
            .route("/api/admin/login", post(login))
            .route("/api/admin/messages", get(list))
            .route("/api/admin/messages/{id}/read", put(mark_read))
            .route("/api/admin/messages/{id}", delete(remove))
            .with_state(backend.clone());

        // Bind to random port
        let listener = tokio::net::TcpListener::bind("127.0.0.1:0")
            .await
            .expect("Failed to bind");
        let addr = listener.local_addr().expect("Failed to get addr");
        let base_url = format!("http://{}", addr);

        tokio::spawn(async move {
            axum::serve(listener, app).await.unwrap();
        });

        let api: SharedApi = Arc::new(HttpAdminApi::new(&base_url).unwrap());

        TestFixture {
            backend,
            api,
            base_url,
        }
    }

    fn fail(&self, id: &str) {
        self.backend.failing.lock().insert(id.to_string());
    }

    fn hits(&self) -> usize {
        self.backend.hits.load(Ordering::SeqCst)
    }

    async fn dashboard(&self) -> Dashboard {
        let session: SharedSession = Arc::new(MemorySessionStore::with_token(TOKEN));
        let dashboard = Dashboard::new(self.api.clone(), session);
        dashboard.fetch_messages().await.unwrap();
        dashboard
    }
}

// ============================================================================
// Login
// ============================================================================

#[tokio::test]
async fn test_login_stores_token_and_guard_passes() {
    let fixture = TestFixture::new().await;
    let session: SharedSession = Arc::new(MemorySessionStore::new());
    let controller = LoginController::new(fixture.api.clone(), session.clone());

    controller
        .submit(&Credentials::new("admin", "secret"))
        .await
        .unwrap();

    assert_eq!(session.token().unwrap().as_deref(), Some(TOKEN));
    assert!(!controller.is_submitting());

    let mut guard = RouteGuard::new();
    assert_eq!(guard.check(session.as_ref()), AuthState::Authenticated);
    assert_eq!(guard.decision(), GuardDecision::Render);
}

#[tokio::test]
async fn test_login_without_token_field_is_invalid_response() {
    let fixture = TestFixture::new().await;
    let session: SharedSession = Arc::new(MemorySessionStore::new());
    let controller = LoginController::new(fixture.api.clone(), session.clone());

    let err = controller
        .submit(&Credentials::new("tokenless", "x"))
        .await
        .unwrap_err();

    assert!(matches!(err, PortfolioError::InvalidResponse(_)));
    assert_eq!(login_error_text(&err), INVALID_RESPONSE);
    assert!(!session.is_authenticated());
}

#[tokio::test]
async fn test_login_rejected_shows_backend_error() {
    let fixture = TestFixture::new().await;
    let session: SharedSession = Arc::new(MemorySessionStore::new());
    let controller = LoginController::new(fixture.api.clone(), session.clone());

    let err = controller
        .submit(&Credentials::new("admin", "wrong"))
        .await
        .unwrap_err();

    assert_eq!(err.status(), Some(401));
    assert_eq!(login_error_text(&err), "Invalid credentials");
    assert!(!session.is_authenticated());

    // Retry is allowed after a failure
    controller
        .submit(&Credentials::new("admin", "secret"))
        .await
        .unwrap();
    assert!(session.is_authenticated());
}

#[tokio::test]
async fn test_login_unreachable_backend() {
    // Grab a free port, then close it so nothing is listening
    let listener = tokio::net::TcpListener::bind("127.0.0.1:0").await.unwrap();
    let addr = listener.local_addr().unwrap();
    drop(listener);

    let api: SharedApi = Arc::new(HttpAdminApi::new(&format!("http://{}", addr)).unwrap());
    let session: SharedSession = Arc::new(MemorySessionStore::new());
    let controller = LoginController::new(api, session.clone());

    let err = controller
        .submit(&Credentials::new("admin", "secret"))
        .await
        .unwrap_err();

    assert!(matches!(err, PortfolioError::Network(_)));
    assert_eq!(login_error_text(&err), LOGIN_RETRY);
    assert!(!session.is_authenticated());
}

#[tokio::test]
async fn test_second_submit_while_pending_is_rejected() {
    let fixture = TestFixture::new().await;
    let session: SharedSession = Arc::new(MemorySessionStore::new());
    let controller = LoginController::new(fixture.api.clone(), session);
    let credentials = Credentials::new("admin", "secret");

    let (first, second) = tokio::join!(
        controller.submit(&credentials),
        controller.submit(&credentials)
    );

    assert!(first.is_ok());
    assert!(matches!(second, Err(PortfolioError::Busy(_))));
}

// ============================================================================
// Dashboard
// ============================================================================

#[tokio::test]
async fn test_fetch_maps_backend_records() {
    let fixture = TestFixture::new().await;
    let dashboard = fixture.dashboard().await;

    let snapshot = dashboard.snapshot();
    assert!(!snapshot.loading);
    assert_eq!(snapshot.banner, None);
    assert_eq!(snapshot.unread_count(), 3);

    let ids: Vec<_> = snapshot.messages.iter().map(|m| m.id.as_str()).collect();
    assert_eq!(ids, vec!["m1", "m2", "m3"]);
    assert_eq!(snapshot.messages[0].subject, "About m1");
    assert_eq!(snapshot.messages[0].body, "Hello there");
    assert!(snapshot.messages[0].created_at.is_some());
}

#[tokio::test]
async fn test_fetch_with_rejected_token_keeps_cache() {
    let fixture = TestFixture::new().await;
    let session: SharedSession = Arc::new(MemorySessionStore::with_token("stale"));
    let dashboard = Dashboard::new(fixture.api.clone(), session.clone());

    let err = dashboard.fetch_messages().await.unwrap_err();

    assert_eq!(err.status(), Some(401));
    let banner = dashboard.banner().unwrap();
    assert_eq!(banner.kind, BannerKind::Error);
    assert_eq!(banner.text, "Unauthorized");
    assert!(dashboard.messages().is_empty());
    // No redirect: the token stays until an explicit logout
    assert!(session.is_authenticated());
}

#[tokio::test]
async fn test_mark_read_flips_only_target() {
    let fixture = TestFixture::new().await;
    let dashboard = fixture.dashboard().await;
    let before = dashboard.messages();

    dashboard.mark_read("m1").await.unwrap();

    let after = dashboard.messages();
    assert!(after[0].read);
    assert_eq!(after[1..], before[1..]);
    assert_eq!(dashboard.banner().unwrap().text, MARKED_CONTACTED);
    assert_eq!(dashboard.snapshot().unread_count(), 2);
}

#[tokio::test]
async fn test_mark_read_server_error_leaves_cache() {
    let fixture = TestFixture::new().await;
    fixture.fail("m1");
    let dashboard = fixture.dashboard().await;
    let before = dashboard.messages();

    let err = dashboard.mark_read("m1").await.unwrap_err();

    assert_eq!(err.status(), Some(500));
    assert_eq!(dashboard.messages(), before);
    let banner = dashboard.banner().unwrap();
    assert_eq!(banner.kind, BannerKind::Error);
    assert_eq!(banner.text, "Failed to mark contacted");
}

#[tokio::test]
async fn test_remove_preserves_order() {
    let fixture = TestFixture::new().await;
    let dashboard = fixture.dashboard().await;

    dashboard.remove("m1").await.unwrap();

    let ids: Vec<_> = dashboard.messages().into_iter().map(|m| m.id).collect();
    assert_eq!(ids, vec!["m2", "m3"]);
    assert_eq!(dashboard.banner().unwrap().text, MESSAGE_DELETED);

    // Cache matches the backend after a refetch
    dashboard.fetch_messages().await.unwrap();
    let ids: Vec<_> = dashboard.messages().into_iter().map(|m| m.id).collect();
    assert_eq!(ids, vec!["m2", "m3"]);
}

#[tokio::test]
async fn test_remove_server_error_uses_body_message() {
    let fixture = TestFixture::new().await;
    fixture.fail("m1");
    let dashboard = fixture.dashboard().await;
    let before = dashboard.messages();

    assert!(dashboard.remove("m1").await.is_err());

    assert_eq!(dashboard.messages(), before);
    assert_eq!(dashboard.banner().unwrap().text, "Database unavailable");
}

#[tokio::test]
async fn test_same_id_mutation_rejected_without_request() {
    let fixture = TestFixture::new().await;
    let dashboard = fixture.dashboard().await;
    let hits_before = fixture.hits();

    let (first, second) = tokio::join!(dashboard.remove("m1"), dashboard.remove("m1"));

    assert!(first.is_ok());
    assert!(matches!(second, Err(PortfolioError::Busy(ref id)) if id == "m1"));
    assert_eq!(fixture.hits(), hits_before + 1);
    assert!(dashboard.busy().can_mutate("m1"));
}

#[tokio::test]
async fn test_different_ids_run_concurrently() {
    let fixture = TestFixture::new().await;
    let dashboard = fixture.dashboard().await;

    let (read, removed) = tokio::join!(dashboard.mark_read("m2"), dashboard.remove("m3"));
    read.unwrap();
    removed.unwrap();

    let messages = dashboard.messages();
    assert_eq!(messages.len(), 2);
    assert!(messages.iter().any(|m| m.id == "m2" && m.read));
    assert!(!messages.iter().any(|m| m.id == "m3"));
    assert!(dashboard.snapshot().busy.is_empty());
}

// ============================================================================
// Session and Guard
// ============================================================================

#[tokio::test]
async fn test_guard_without_token_redirects_without_network() {
    let fixture = TestFixture::new().await;
    let session = MemorySessionStore::new();

    let mut guard = RouteGuard::new();
    assert_eq!(guard.decision(), GuardDecision::Wait);
    guard.check(&session);

    assert_eq!(guard.decision(), GuardDecision::Redirect("/login"));
    assert_eq!(fixture.hits(), 0);
}

#[tokio::test]
async fn test_durable_session_login_then_logout() {
    let fixture = TestFixture::new().await;
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("session.redb");

    {
        let session: SharedSession = Arc::new(Storage::new(&path).unwrap());
        let controller = LoginController::new(fixture.api.clone(), session);
        controller
            .submit(&Credentials::new("admin", "secret"))
            .await
            .unwrap();
    }

    // A fresh process sees the stored token
    let session: SharedSession = Arc::new(Storage::new(&path).unwrap());
    let mut guard = RouteGuard::new();
    assert_eq!(guard.check(session.as_ref()), AuthState::Authenticated);

    let dashboard = Dashboard::new(fixture.api.clone(), session.clone());
    dashboard.fetch_messages().await.unwrap();
    assert_eq!(dashboard.messages().len(), 3);

    dashboard.logout().unwrap();
    let mut guard = RouteGuard::new();
    assert_eq!(guard.check(session.as_ref()), AuthState::Unauthenticated);
}

#[tokio::test]
async fn test_api_trait_object_reports_base_url() {
    let fixture = TestFixture::new().await;
    let api = HttpAdminApi::new(&fixture.base_url).unwrap();
    assert!(api.base_url().starts_with(&fixture.base_url));

    let messages = api.list_messages(TOKEN).await.unwrap();
    assert_eq!(messages.len(), 3);
}
