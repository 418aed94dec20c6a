use std::sync::{Arc, Mutex};

use axum::{
    body::Bytes,
    extract::State,
    http::{header, HeaderMap, StatusCode},
    response::{IntoResponse, Response},
    routing::post,
    Router,
};
use readmegen_service::Converter;
use serde_json::{json, Value};
use tokio::net::TcpListener;

/// Build the app router around the given converter.
pub fn test_router(converter: Arc<dyn Converter>) -> Router {
    crate::routes::build_router(converter)
}

/// A running test server with base_url and background task handle.
pub struct TestServer {
    pub base_url: String,
    _handle: tokio::task::JoinHandle<()>,
}

/// Spawn the app on a random port. Returns the TestServer
/// with the `base_url` (e.g. "http://127.0.0.1:12345").
pub async fn spawn_test_server(converter: Arc<dyn Converter>) -> TestServer {
    let listener = TcpListener::bind("127.0.0.1:0").await.unwrap();
    let addr = listener.local_addr().unwrap();
    let base_url = format!("http://{addr}");
    let app = test_router(converter);
    let handle = tokio::spawn(async move {
        axum::serve(listener, app).await.unwrap();
    });
    TestServer {
        base_url,
        _handle: handle,
    }
}

/// One request as seen by the fake chat-completion endpoint.
#[derive(Debug, Clone)]
pub struct RecordedRequest {
    pub authorization: Option<String>,
    pub content_type: Option<String>,
    /// Decoded JSON body, or `Value::Null` if it was not JSON.
    pub body: Value,
}

/// An in-process stand-in for a chat-completion endpoint that answers every
/// request with a fixed status and body.
pub struct FakeUpstream {
    /// Full endpoint URL, suitable for `EndpointConfig::with_url`.
    pub url: String,
    recorded: Arc<Mutex<Vec<RecordedRequest>>>,
    _handle: tokio::task::JoinHandle<()>,
}

impl FakeUpstream {
    pub fn requests(&self) -> Vec<RecordedRequest> {
        self.recorded.lock().unwrap().clone()
    }

    pub fn hits(&self) -> usize {
        self.recorded.lock().unwrap().len()
    }
}

#[derive(Clone)]
struct FakeState {
    status: StatusCode,
    body: String,
    recorded: Arc<Mutex<Vec<RecordedRequest>>>,
}

/// Spawn a fake endpoint that replies with `status` and `body` as JSON.
pub async fn spawn_fake_upstream(status: StatusCode, body: &str) -> FakeUpstream {
    let recorded = Arc::new(Mutex::new(Vec::new()));
    let state = FakeState {
        status,
        body: body.to_string(),
        recorded: recorded.clone(),
    };
    let app = Router::new()
        .route("/v1/chat/completions", post(fake_completion))
        .with_state(state);

    let listener = TcpListener::bind("127.0.0.1:0").await.unwrap();
    let addr = listener.local_addr().unwrap();
    let handle = tokio::spawn(async move {
        axum::serve(listener, app).await.unwrap();
    });
    FakeUpstream {
        url: format!("http://{addr}/v1/chat/completions"),
        recorded,
        _handle: handle,
    }
}

/// Spawn a fake endpoint that succeeds with a single choice holding `content`.
pub async fn spawn_fake_completion(content: &str) -> FakeUpstream {
    let body = json!({
        "id": "chatcmpl-test",
        "object": "chat.completion",
        "model": "test-model",
        "choices": [{
            "index": 0,
            "message": { "role": "assistant", "content": content },
            "finish_reason": "stop"
        }],
        "usage": { "prompt_tokens": 1, "completion_tokens": 1, "total_tokens": 2 }
    });
    spawn_fake_upstream(StatusCode::OK, &body.to_string()).await
}

/// A URL on a port nothing is listening on.
pub async fn unreachable_url() -> String {
    let listener = TcpListener::bind("127.0.0.1:0").await.unwrap();
    let addr = listener.local_addr().unwrap();
    drop(listener);
    format!("http://{addr}/v1/chat/completions")
}

async fn fake_completion(
    State(state): State<FakeState>,
    headers: HeaderMap,
    body: Bytes,
) -> Response {
    let header_value = |name: header::HeaderName| {
        headers
            .get(name)
            .and_then(|v| v.to_str().ok())
            .map(String::from)
    };
    let request = RecordedRequest {
        authorization: header_value(header::AUTHORIZATION),
        content_type: header_value(header::CONTENT_TYPE),
        body: serde_json::from_slice(&body).unwrap_or(Value::Null),
    };
    state.recorded.lock().unwrap().push(request);

    (
        state.status,
        [(header::CONTENT_TYPE, "application/json")],
        state.body.clone(),
    )
        .into_response()
}
