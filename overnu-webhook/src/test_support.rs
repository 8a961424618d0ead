//! Local stand-in for the n8n webhook used by tests.

use std::sync::{
    atomic::{AtomicUsize, Ordering},
    Arc, Mutex,
};
use std::time::Duration;

use axum::{extract::State, http::StatusCode, routing::post, Json, Router};
use serde_json::Value;
use tokio::net::TcpListener;

pub const FAKE_TOKEN: &str = "test-token";

/// Delay of the `/slow` route.
pub const SLOW_REPLY: Duration = Duration::from_secs(2);

#[derive(Clone, Default)]
struct FakeState {
    calls: Arc<AtomicUsize>,
    received: Arc<Mutex<Vec<Value>>>,
}

impl FakeState {
    fn record(&self, body: Value) {
        self.calls.fetch_add(1, Ordering::SeqCst);
        self.received.lock().unwrap().push(body);
    }
}

/// Running fake n8n server.
pub struct FakeN8n {
    base: String,
    state: FakeState,
}

impl FakeN8n {
    /// Echoes `ack:<payload>` as plain text.
    pub fn hook_url(&self) -> String {
        format!("{}/hook", self.base)
    }

    /// Always answers `{"ok":true}` as text.
    pub fn json_url(&self) -> String {
        format!("{}/json", self.base)
    }

    /// Always answers 500.
    pub fn fail_url(&self) -> String {
        format!("{}/fail", self.base)
    }

    /// Answers after `SLOW_REPLY`.
    pub fn slow_url(&self) -> String {
        format!("{}/slow", self.base)
    }

    pub fn call_count(&self) -> usize {
        self.state.calls.load(Ordering::SeqCst)
    }

    pub fn received(&self) -> Vec<Value> {
        self.state.received.lock().unwrap().clone()
    }
}

async fn hook(State(state): State<FakeState>, Json(body): Json<Value>) -> String {
    let reply = match body.get("payload") {
        Some(Value::String(payload)) => format!("ack:{}", payload),
        Some(other) => format!("ack:{}", other),
        None => "ack:".to_string(),
    };
    state.record(body);
    reply
}

async fn json_reply(State(state): State<FakeState>, Json(body): Json<Value>) -> &'static str {
    state.record(body);
    r#"{"ok":true}"#
}

async fn slow(State(state): State<FakeState>, Json(body): Json<Value>) -> &'static str {
    state.record(body);
    tokio::time::sleep(SLOW_REPLY).await;
    "late"
}

async fn fail(State(state): State<FakeState>, Json(body): Json<Value>) -> (StatusCode, &'static str) {
    state.record(body);
    (StatusCode::INTERNAL_SERVER_ERROR, "boom")
}

pub async fn spawn_fake_n8n() -> FakeN8n {
    let state = FakeState::default();
    let app = Router::new()
        .route("/hook", post(hook))
        .route("/json", post(json_reply))
        .route("/slow", post(slow))
        .route("/fail", post(fail))
        .with_state(state.clone());

    let listener = TcpListener::bind("127.0.0.1:0").await.unwrap();
    let addr = listener.local_addr().unwrap();
    tokio::spawn(async move {
        axum::serve(listener, app).await.unwrap();
    });

    FakeN8n {
        base: format!("http://{}", addr),
        state,
    }
}

/// URL of a port nothing is listening on.
pub fn unreachable_url() -> String {
    let listener = std::net::TcpListener::bind("127.0.0.1:0").unwrap();
    let addr = listener.local_addr().unwrap();
    drop(listener);
    format!("http://{}/hook", addr)
}
