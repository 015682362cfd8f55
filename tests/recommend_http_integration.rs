//! Integration tests for the HTTP recommendation client.
//!
//! A fake recommendation service runs on an ephemeral port:
//! 1. The request is `POST /recommend` with a JSON body of the form
//! 2. A 2xx body becomes the shell's results
//! 3. Non-success statuses and unreachable hosts become the fixed error

use std::sync::{Arc, Mutex};
use std::time::Duration;

use axum::extract::State;
use axum::http::{HeaderMap, StatusCode};
use axum::routing::{get, post};
use axum::{Json, Router};
use serde_json::{json, Value};

use stacksense::adapters::http::{HttpClientConfig, HttpRecommendationClient};
use stacksense::application::{
    CheckHealthHandler, HealthCheckError, SubmitRecommendationHandler,
};
use stacksense::domain::form::FormData;
use stacksense::domain::shell::{AppShell, Completion, ShellPhase, REQUEST_FAILED_MESSAGE};
use stacksense::ports::{RecommendationError, RecommendationService};

// =============================================================================
// Fake Service
// =============================================================================

#[derive(Clone)]
struct FakeService {
    status: StatusCode,
    body: Value,
    received: Arc<Mutex<Vec<(Option<String>, Value)>>>,
}

impl FakeService {
    fn new(status: StatusCode, body: Value) -> Self {
        Self {
            status,
            body,
            received: Arc::new(Mutex::new(Vec::new())),
        }
    }

    fn received(&self) -> Vec<(Option<String>, Value)> {
        self.received.lock().unwrap().clone()
    }
}

async fn recommend(
    State(fake): State<FakeService>,
    headers: HeaderMap,
    Json(body): Json<Value>,
) -> (StatusCode, Json<Value>) {
    let content_type = headers
        .get("content-type")
        .and_then(|v| v.to_str().ok())
        .map(str::to_string);
    fake.received.lock().unwrap().push((content_type, body));
    (fake.status, Json(fake.body.clone()))
}

async fn root() -> Json<Value> {
    Json(json!({ "message": "Welcome to StackSense API" }))
}

/// Starts the fake service and returns its base URL.
async fn spawn(fake: FakeService) -> String {
    let app = Router::new()
        .route("/", get(root))
        .route("/recommend", post(recommend))
        .with_state(fake);

    let listener = tokio::net::TcpListener::bind("127.0.0.1:0").await.unwrap();
    let addr = listener.local_addr().unwrap();
    tokio::spawn(async move {
        axum::serve(listener, app).await.unwrap();
    });
    format!("http://{}", addr)
}

fn client(base_url: &str) -> Arc<dyn RecommendationService> {
    Arc::new(HttpRecommendationClient::new(HttpClientConfig::new(base_url)).unwrap())
}

fn sample_response() -> Value {
    json!({
        "project_name": "E-commerce Web App",
        "deployment_strategy": {
            "title": "Managed PaaS",
            "description": "Ship without running servers.",
            "recommended_platforms": ["Vercel", "Render"]
        },
        "results": [
            {
                "category": "Frontend",
                "top_pick": {
                    "technology": {
                        "id": "nextjs",
                        "name": "Next.js",
                        "description": "React framework with SSR",
                        "key_benefits": ["SEO: server-side rendering"]
                    },
                    "reason": ["Great for e-commerce"],
                    "score": 9.5
                },
                "alternatives": []
            },
            { "category": "Database", "top_pick": null, "alternatives": [] }
        ]
    })
}

// =============================================================================
// Tests
// =============================================================================

#[tokio::test]
async fn default_form_is_posted_as_json() {
    let fake = FakeService::new(StatusCode::OK, sample_response());
    let base_url = spawn(fake.clone()).await;
    let handler = SubmitRecommendationHandler::new(client(&base_url));
    let mut shell = AppShell::new();

    let completion = handler.handle(&mut shell).await.unwrap();

    assert_eq!(completion, Completion::Applied(ShellPhase::Showing));
    let received = fake.received();
    assert_eq!(received.len(), 1);
    let (content_type, body) = &received[0];
    assert_eq!(content_type.as_deref(), Some("application/json"));
    assert_eq!(
        body,
        &json!({
            "project_type": "Web App",
            "domain": "E-commerce",
            "expected_scale": "Small (Hundreds of users)",
            "team_size": "Solo Developer",
            "budget": "Tight / Bootstrapped",
            "priorities": ["Functionality & Correctness"],
            "hardware_integration": false
        })
    );
    let sent: FormData = serde_json::from_value(body.clone()).unwrap();
    assert_eq!(sent, FormData::default());
}

#[tokio::test]
async fn success_response_becomes_results() {
    let base_url = spawn(FakeService::new(StatusCode::OK, sample_response())).await;
    let handler = SubmitRecommendationHandler::new(client(&base_url));
    let mut shell = AppShell::new();

    handler.handle(&mut shell).await.unwrap();

    let results = shell.results().unwrap();
    assert_eq!(results.project_name, "E-commerce Web App");
    assert_eq!(results.results.len(), 2);
    assert!(results.results[1].top_pick.is_none());
    assert!(shell.error().is_none());
    assert!(!shell.is_loading());
}

#[tokio::test]
async fn server_error_shows_fixed_message() {
    let base_url = spawn(FakeService::new(
        StatusCode::INTERNAL_SERVER_ERROR,
        json!({ "detail": "engine exploded" }),
    ))
    .await;
    let handler = SubmitRecommendationHandler::new(client(&base_url));
    let mut shell = AppShell::new();

    handler.handle(&mut shell).await.unwrap();

    assert_eq!(shell.phase(), ShellPhase::Failed);
    assert!(shell.results().is_none());
    assert_eq!(shell.error(), Some(REQUEST_FAILED_MESSAGE));
}

#[tokio::test]
async fn status_error_keeps_body_for_logs() {
    let base_url = spawn(FakeService::new(
        StatusCode::UNPROCESSABLE_ENTITY,
        json!({ "detail": "bad budget" }),
    ))
    .await;

    let err = client(&base_url)
        .recommend(FormData::default())
        .await
        .unwrap_err();

    match err {
        RecommendationError::Status { status, body } => {
            assert_eq!(status, 422);
            assert!(body.contains("bad budget"));
        }
        other => panic!("expected status error, got {:?}", other),
    }
}

#[tokio::test]
async fn response_without_results_is_a_decode_error() {
    let base_url = spawn(FakeService::new(
        StatusCode::OK,
        json!({ "project_name": "Half" }),
    ))
    .await;

    let err = client(&base_url)
        .recommend(FormData::default())
        .await
        .unwrap_err();

    assert!(matches!(err, RecommendationError::Decode(_)));
    assert_eq!(err.user_message(), REQUEST_FAILED_MESSAGE);
}

#[tokio::test]
async fn unreachable_service_is_a_network_error() {
    // Bind then drop to get a port nobody listens on
    let listener = tokio::net::TcpListener::bind("127.0.0.1:0").await.unwrap();
    let addr = listener.local_addr().unwrap();
    drop(listener);

    let service = client(&format!("http://{}", addr));
    let err = service.recommend(FormData::default()).await.unwrap_err();
    assert!(matches!(err, RecommendationError::Network(_)));

    let handler = SubmitRecommendationHandler::new(service);
    let mut shell = AppShell::new();
    handler.handle(&mut shell).await.unwrap();
    assert_eq!(shell.error(), Some(REQUEST_FAILED_MESSAGE));
}

#[tokio::test]
async fn health_reads_welcome_message() {
    let base_url = spawn(FakeService::new(StatusCode::OK, sample_response())).await;

    let status = client(&format!("{}/", base_url)).health().await.unwrap();

    assert_eq!(status.message, "Welcome to StackSense API");
}

#[tokio::test]
async fn silent_service_does_not_block_health_check() {
    // Accepts connections and never writes a byte
    let listener = tokio::net::TcpListener::bind("127.0.0.1:0").await.unwrap();
    let addr = listener.local_addr().unwrap();
    tokio::spawn(async move {
        let mut held = Vec::new();
        while let Ok((socket, _)) = listener.accept().await {
            held.push(socket);
        }
    });

    let handler = CheckHealthHandler::new(client(&format!("http://{}", addr)))
        .with_limit(Duration::from_millis(200));
    let result = tokio::time::timeout(Duration::from_secs(5), handler.handle())
        .await
        .expect("health check must give up on its own");

    assert!(matches!(result, Err(HealthCheckError::TimedOut(_))));
}
