//! Mock blogging backend for integration tests.

#![allow(dead_code)]

use std::collections::VecDeque;
use std::sync::Arc;

use axum::body::to_bytes;
use axum::extract::{Request, State};
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::{Json, Router};
use tokio::net::TcpListener;
use tokio::sync::Mutex;

/// A captured request for assertions.
#[derive(Debug, Clone)]
pub struct CapturedRequest {
    pub method: String,
    pub path: String,
    pub authorization: Option<String>,
    pub content_type: Option<String>,
    pub body: Vec<u8>,
}

impl CapturedRequest {
    pub fn body_contains(&self, needle: &[u8]) -> bool {
        self.body.windows(needle.len()).any(|window| window == needle)
    }
}

#[derive(Clone, Default)]
struct Shared {
    requests: Arc<Mutex<Vec<CapturedRequest>>>,
    responses: Arc<Mutex<VecDeque<(StatusCode, serde_json::Value)>>>,
}

/// In-process HTTP server that captures every request and answers from a
/// scripted queue.
pub struct MockBackend {
    pub base_url: String,
    shared: Shared,
}

impl MockBackend {
    pub async fn start() -> Self {
        let shared = Shared::default();
        let app = Router::new()
            .fallback(handler)
            .with_state(shared.clone());
        let listener = TcpListener::bind("127.0.0.1:0")
            .await
            .expect("bind mock backend");
        let addr = listener.local_addr().expect("mock backend addr");
        tokio::spawn(async move {
            let _ = axum::serve(listener, app).await;
        });
        Self {
            base_url: format!("http://{addr}"),
            shared,
        }
    }

    /// Queue the next response. Responses are served in order; with the
    /// queue empty the mock answers 500.
    pub async fn enqueue(&self, status: StatusCode, body: serde_json::Value) {
        self.shared.responses.lock().await.push_back((status, body));
    }

    pub async fn captured(&self) -> Vec<CapturedRequest> {
        self.shared.requests.lock().await.clone()
    }
}

async fn handler(State(shared): State<Shared>, request: Request) -> Response {
    let method = request.method().to_string();
    let path = request.uri().path().to_string();
    let authorization = request
        .headers()
        .get("authorization")
        .and_then(|value| value.to_str().ok())
        .map(str::to_string);
    let content_type = request
        .headers()
        .get("content-type")
        .and_then(|value| value.to_str().ok())
        .map(str::to_string);
    let body = to_bytes(request.into_body(), usize::MAX)
        .await
        .unwrap_or_default()
        .to_vec();

    shared.requests.lock().await.push(CapturedRequest {
        method,
        path,
        authorization,
        content_type,
        body,
    });

    match shared.responses.lock().await.pop_front() {
        Some((status, body)) => (status, Json(body)).into_response(),
        None => (
            StatusCode::INTERNAL_SERVER_ERROR,
            Json(serde_json::json!({ "error": "no scripted response" })),
        )
            .into_response(),
    }
}
