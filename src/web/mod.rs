//! Web surface: one text input, one button, one result area.
//!
//! A deliberately small axum app. The HTML is rendered server-side from
//! inline templates; there is no static asset pipeline and no JS.

mod handlers;
mod server;
mod templates;

pub use server::WebServer;

use crate::pipeline::Pipeline;
use crate::session::Session;
use std::sync::Arc;
use tokio::sync::Mutex;

/// Shared application state for the web handlers.
///
/// The session mutex holds the one piece of cross-request state, the
/// failure counter. The demo is single-user, so one session is enough.
#[derive(Clone)]
pub struct AppState {
    pipeline: Arc<Pipeline>,
    session: Arc<Mutex<Session>>,
}

impl AppState {
    /// Creates the shared state around an assembled pipeline.
    pub fn new(pipeline: Pipeline) -> Self {
        Self {
            pipeline: Arc::new(pipeline),
            session: Arc::new(Mutex::new(Session::new())),
        }
    }
}
