//! Mock hosted-model inference backend for integration tests
//!
//! Accepts `{inputs, parameters, options}` and returns a canned
//! `[{generated_text}]` payload, recording the prompt it was given.

use std::net::SocketAddr;
use std::sync::atomic::{AtomicU32, Ordering};
use std::sync::{Arc, Mutex};

use axum::extract::State;
use axum::http::StatusCode;
use axum::response::IntoResponse;
use axum::{Json, Router, routing};
use serde::Deserialize;
use serde_json::json;
use tokio_util::sync::CancellationToken;

/// Mock inference backend that returns predictable generations
pub struct MockInference {
    addr: SocketAddr,
    shutdown: CancellationToken,
    state: Arc<MockInferenceState>,
}

struct MockInferenceState {
    /// Number of requests to fail before succeeding (0 = never fail)
    fail_count: AtomicU32,
    /// Custom generated text (if set)
    generated_text: Option<String>,
    /// The `inputs` field of the most recent request
    last_inputs: Mutex<Option<String>>,
}

#[derive(Deserialize)]
struct InferenceRequest {
    inputs: String,
    #[allow(dead_code)]
    parameters: serde_json::Value,
    #[allow(dead_code)]
    options: serde_json::Value,
}

impl MockInference {
    /// Start the mock server, returning immediately
    pub async fn start() -> anyhow::Result<Self> {
        Self::start_inner(0, None).await
    }

    /// Start a mock server that fails the first `n` requests with 503
    pub async fn start_failing(n: u32) -> anyhow::Result<Self> {
        Self::start_inner(n, None).await
    }

    /// Start a mock server with custom generated text
    pub async fn start_with_generation(text: &str) -> anyhow::Result<Self> {
        Self::start_inner(0, Some(text.to_owned())).await
    }

    async fn start_inner(fail_count: u32, generated_text: Option<String>) -> anyhow::Result<Self> {
        let state = Arc::new(MockInferenceState {
            fail_count: AtomicU32::new(fail_count),
            generated_text,
            last_inputs: Mutex::new(None),
        });

        let app = Router::new()
            .route("/", routing::post(handle_generate))
            .with_state(Arc::clone(&state));

        let listener = tokio::net::TcpListener::bind("127.0.0.1:0").await?;
        let addr = listener.local_addr()?;
        let shutdown = CancellationToken::new();
        let shutdown_clone = shutdown.clone();

        tokio::spawn(async move {
            axum::serve(listener, app)
                .with_graceful_shutdown(async move {
                    shutdown_clone.cancelled().await;
                })
                .await
                .ok();
        });

        Ok(Self { addr, shutdown, state })
    }

    /// URL for configuring the mock as the inference endpoint
    pub fn url(&self) -> String {
        format!("http://{}/", self.addr)
    }

    /// The prompt the mock last received
    pub fn last_inputs(&self) -> Option<String> {
        self.state.last_inputs.lock().unwrap().clone()
    }
}

impl Drop for MockInference {
    fn drop(&mut self) {
        self.shutdown.cancel();
    }
}

async fn handle_generate(
    State(state): State<Arc<MockInferenceState>>,
    Json(request): Json<InferenceRequest>,
) -> impl IntoResponse {
    *state.last_inputs.lock().unwrap() = Some(request.inputs);

    let remaining = state.fail_count.load(Ordering::Relaxed);
    if remaining > 0 {
        state.fail_count.fetch_sub(1, Ordering::Relaxed);
        return (
            StatusCode::SERVICE_UNAVAILABLE,
            Json(json!({
                "error": "Model mock/companion is currently loading",
                "estimated_time": 20.0,
            })),
        )
            .into_response();
    }

    let text = state
        .generated_text
        .as_deref()
        .unwrap_or("Companion: Hello from the mock model");

    Json(json!([{ "generated_text": text }])).into_response()
}
