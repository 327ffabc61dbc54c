//! Axum routes for the advisor API.

use std::sync::Arc;

use axum::extract::State;
use axum::http::StatusCode;
use axum::response::{IntoResponse, Json, Response};
use axum::routing::{get, post};
use axum::Router;
use serde_json::{json, Value};
use tokio::net::TcpListener;
use tracing::{info, info_span, warn, Instrument};
use uuid::Uuid;

use crate::dispatcher::{DispatchError, Dispatcher};
use crate::types::{ChallengeRequest, ChallengeResult};

pub struct AppState {
    pub dispatcher: Dispatcher,
}

/// Error body shaped as `{"detail": "..."}`.
#[derive(Debug)]
pub struct ApiError {
    status: StatusCode,
    detail: String,
}

impl From<DispatchError> for ApiError {
    fn from(err: DispatchError) -> Self {
        let status = match err {
            DispatchError::EmptyChallenge => StatusCode::BAD_REQUEST,
            DispatchError::NoAdvisors | DispatchError::Advisor { .. } => {
                StatusCode::INTERNAL_SERVER_ERROR
            }
        };
        Self { status, detail: err.to_string() }
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        (self.status, Json(json!({ "detail": self.detail }))).into_response()
    }
}

pub fn router(state: Arc<AppState>) -> Router {
    let cors = tower_http::cors::CorsLayer::permissive();

    Router::new()
        .route("/", get(root))
        .route("/health", get(health))
        .route("/api/challenge", post(process_challenge))
        .with_state(state)
        .layer(cors)
}

/// Serve until Ctrl+C.
pub async fn serve(listener: TcpListener, state: Arc<AppState>) -> std::io::Result<()> {
    if let Ok(addr) = listener.local_addr() {
        info!("Business Advisor API listening on http://{}", addr);
    }
    axum::serve(listener, router(state))
        .with_graceful_shutdown(shutdown_signal())
        .await
}

async fn shutdown_signal() {
    wait_for_signal(tokio::signal::ctrl_c()).await
}

/// Resolves when `signal` fires. If the listener cannot be installed this never
/// resolves, so the server keeps running instead of shutting down at startup.
async fn wait_for_signal(signal: impl Future<Output = std::io::Result<()>>) {
    match signal.await {
        Ok(()) => info!("Shutdown signal received"),
        Err(e) => {
            warn!("Unable to listen for Ctrl+C, graceful shutdown disabled: {}", e);
            std::future::pending::<()>().await;
        }
    }
}

// GET /
async fn root() -> Json<Value> {
    Json(json!({
        "message": "Welcome to the Business Advisor API. Send POST requests to /api/challenge"
    }))
}

// GET /health
async fn health(State(state): State<Arc<AppState>>) -> Json<Value> {
    Json(json!({
        "status": "ok",
        "advisors": state.dispatcher.advisor_count(),
    }))
}

// POST /api/challenge
async fn process_challenge(
    State(state): State<Arc<AppState>>,
    Json(req): Json<ChallengeRequest>,
) -> Result<Json<ChallengeResult>, ApiError> {
    let span = info_span!("challenge", request_id = %Uuid::new_v4());
    async move {
        info!("Received challenge ({} chars)", req.char_count());
        let result = state.dispatcher.consult(&req.challenge).await?;
        info!("Returning {} advisor responses", result.advisor_responses.len());
        Ok::<_, ApiError>(Json(result))
    }
    .instrument(span)
    .await
}
