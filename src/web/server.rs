//! Web server setup and run loop.

use axum::{
    routing::{get, post},
    Router,
};
use std::net::SocketAddr;
use tokio::net::TcpListener;
use tower_http::trace::TraceLayer;
use tracing::info;

use crate::error::{DeptSqlError, Result};
use crate::web::{handlers, AppState};

/// The web server hosting the question form.
pub struct WebServer {
    addr: SocketAddr,
    state: AppState,
}

impl WebServer {
    /// Creates a server bound to the given address.
    pub fn new(addr: SocketAddr, state: AppState) -> Self {
        Self { addr, state }
    }

    /// Builds the router. Exposed separately so tests can drive it without
    /// binding a socket.
    pub fn router(state: AppState) -> Router {
        Router::new()
            .route("/", get(handlers::home))
            .route("/ask", post(handlers::ask))
            .layer(TraceLayer::new_for_http())
            .with_state(state)
    }

    /// Runs the server until the process exits.
    pub async fn run(self) -> Result<()> {
        info!(address = %self.addr, "Starting web server");

        let app = Self::router(self.state);

        let listener = TcpListener::bind(self.addr)
            .await
            .map_err(|e| DeptSqlError::internal(format!("Failed to bind {}: {e}", self.addr)))?;

        axum::serve(listener, app)
            .await
            .map_err(|e| DeptSqlError::internal(format!("Server error: {e}")))?;

        Ok(())
    }
}
