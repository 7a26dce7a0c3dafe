#![allow(clippy::must_use_candidate)]

mod care;
mod cors;
mod health;

use std::net::SocketAddr;

use axum::Router;
use carelink_config::Config;
use tower_http::trace::TraceLayer;

/// Assembled server with all routes and middleware
pub struct Server {
    router: Router,
    listen_address: SocketAddr,
}

impl Server {
    /// Build the server from configuration
    ///
    /// Relay clients are constructed once here and shared read-only
    /// across requests; missing credentials surface per request, so
    /// construction itself cannot fail.
    pub fn new(config: &Config) -> Self {
        let listen_address = config
            .server
            .listen_address
            .unwrap_or_else(|| SocketAddr::from(([0, 0, 0, 0], 5000)));

        let store = carelink_store::build_store(config);
        let speech = carelink_speech::build_service(config);
        let assistant = carelink_assistant::build_assistant(config);

        // Build base router with feature routes
        let mut app = Router::new();

        // Health check
        if config.server.health.enabled {
            app = app.route(&config.server.health.path, axum::routing::get(health::health_handler));
        }

        // Reminder routes
        app = app.merge(carelink_store::endpoint_router().with_state(store));

        // Speech token routes
        app = app.merge(carelink_speech::endpoint_router().with_state(speech));

        // Transcript route
        app = app.merge(carelink_assistant::endpoint_router().with_state(assistant));

        // Care notification routes
        app = app.merge(care::endpoint_router());

        // Tracing
        app = app.layer(TraceLayer::new_for_http());

        // CORS
        app = app.layer(cors::cors_layer(&config.server.cors));

        Self {
            router: app,
            listen_address,
        }
    }

    /// Get the configured listen address
    #[must_use]
    pub const fn listen_address(&self) -> SocketAddr {
        self.listen_address
    }

    /// Consume the server and return the inner router
    ///
    /// Useful for testing when the caller manages the listener
    pub fn into_router(self) -> Router {
        self.router
    }

    /// Start serving requests
    ///
    /// Blocks until the cancellation token is triggered.
    ///
    /// # Errors
    ///
    /// Returns an error if binding the TCP listener or serving fails
    pub async fn serve(self, shutdown: tokio_util::sync::CancellationToken) -> anyhow::Result<()> {
        let listener = tokio::net::TcpListener::bind(self.listen_address).await?;
        let local_addr = listener.local_addr()?;
        tracing::info!(%local_addr, "server listening");

        axum::serve(listener, self.router)
            .with_graceful_shutdown(async move {
                shutdown.cancelled().await;
                tracing::info!("graceful shutdown initiated");
            })
            .await?;

        Ok(())
    }
}
