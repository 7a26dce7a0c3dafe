//! Mock identity provider for integration tests
//!
//! Serves the IAM-style apikey-for-token exchange with a canned token.

use std::net::SocketAddr;
use std::sync::Arc;
use std::sync::atomic::{AtomicU32, Ordering};

use axum::extract::State;
use axum::http::StatusCode;
use axum::response::IntoResponse;
use axum::{Json, Router, routing};
use serde_json::json;
use tokio_util::sync::CancellationToken;

pub const MOCK_ACCESS_TOKEN: &str = "mock-access-token";

/// Mock identity provider backend
pub struct MockIam {
    addr: SocketAddr,
    shutdown: CancellationToken,
    state: Arc<MockIamState>,
}

struct MockIamState {
    request_count: AtomicU32,
    /// Number of requests to fail before succeeding (0 = never fail)
    fail_count: AtomicU32,
}

impl MockIam {
    /// Start the mock server, returning immediately
    pub async fn start() -> anyhow::Result<Self> {
        Self::start_inner(0).await
    }

    /// Start a mock server that fails the first `n` requests with 400
    pub async fn start_failing(n: u32) -> anyhow::Result<Self> {
        Self::start_inner(n).await
    }

    async fn start_inner(fail_count: u32) -> anyhow::Result<Self> {
        let state = Arc::new(MockIamState {
            request_count: AtomicU32::new(0),
            fail_count: AtomicU32::new(fail_count),
        });

        let app = Router::new()
            .route("/identity/token", routing::post(handle_token))
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

    /// Token endpoint URL for configuring the mock as the identity provider
    pub fn token_url(&self) -> String {
        format!("http://{}/identity/token", self.addr)
    }

    /// Number of token requests received
    pub fn request_count(&self) -> u32 {
        self.state.request_count.load(Ordering::Relaxed)
    }
}

impl Drop for MockIam {
    fn drop(&mut self) {
        self.shutdown.cancel();
    }
}

async fn handle_token(State(state): State<Arc<MockIamState>>) -> impl IntoResponse {
    state.request_count.fetch_add(1, Ordering::Relaxed);

    let remaining = state.fail_count.load(Ordering::Relaxed);
    if remaining > 0 {
        state.fail_count.fetch_sub(1, Ordering::Relaxed);
        return (
            StatusCode::BAD_REQUEST,
            Json(json!({
                "errorCode": "BXNIM0415E",
                "errorMessage": "Provided API key could not be found.",
            })),
        )
            .into_response();
    }

    Json(json!({
        "access_token": MOCK_ACCESS_TOKEN,
        "token_type": "Bearer",
        "expires_in": 3600,
    }))
    .into_response()
}
