//! HTTP API handlers

use axum::{extract::State, http::StatusCode, routing::get, routing::post, Json, Router};
use std::sync::{Arc, OnceLock};

use crate::config::SessionConfig;
use crate::session::SessionInfo;

/// Shared application state
#[derive(Clone)]
pub struct AppState {
    pub session: Arc<SessionConfig>,
}

impl AppState {
    pub fn new(session: SessionConfig) -> Self {
        Self {
            session: Arc::new(session),
        }
    }
}

static INSTALLED: OnceLock<AppState> = OnceLock::new();

/// Make the state reachable from server functions. Only the first call
/// takes effect; returns whether this call installed it.
pub fn install(state: AppState) -> bool {
    INSTALLED.set(state).is_ok()
}

/// Session of the installed state, if any.
pub fn current_session() -> Option<SessionInfo> {
    INSTALLED.get().map(|state| state.session.to_session_info())
}

/// GET /api/session - Current profile and granted permissions
pub async fn session_handler(State(state): State<AppState>) -> Json<SessionInfo> {
    Json(state.session.to_session_info())
}

/// POST /api/session/sign-out - Fire-and-forget sign-out
pub async fn sign_out_handler(State(state): State<AppState>) -> StatusCode {
    tracing::info!(email = ?state.session.email, "Sign-out requested");
    StatusCode::NO_CONTENT
}

/// API routes, ready to merge with the Dioxus router
pub fn router(state: AppState) -> Router {
    Router::new()
        .route("/api/session", get(session_handler))
        .route("/api/session/sign-out", post(sign_out_handler))
        .with_state(state)
}
