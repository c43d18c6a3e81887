use crate::{config::Config, engine::run::run_execution, engine::ExecuteResponse};

use anyhow::Context;
use axum::debug_handler;
use axum::{
    body::Body,
    extract::{rejection::JsonRejection, State},
    http::{Request, StatusCode},
    response::{IntoResponse, Response},
    routing::{get, post},
    Json, Router,
};
use serde::Deserialize;
use serde_json::Value;
use std::{sync::Arc, time::Duration};
use tokio::net::TcpListener;
use tower_http::trace::TraceLayer;
use tracing::Span;

/* ---------------- state ---------------- */

/// Read-only state shared by every request.
#[derive(Debug, Clone)]
pub struct AppState {
    default_binary_path: Arc<str>,
}

impl AppState {
    pub fn new(default_binary_path: impl Into<Arc<str>>) -> Self {
        Self {
            default_binary_path: default_binary_path.into(),
        }
    }

    pub fn from_config(cfg: &Config) -> Self {
        Self::new(cfg.execute.default_binary_path.as_str())
    }
}

/* ---------------- server ---------------- */

pub async fn serve(cfg: Config) -> anyhow::Result<()> {
    let app = router(AppState::from_config(&cfg));
    let listener = bind(&cfg).await?;

    tracing::info!(
        default_binary = %cfg.execute.default_binary_path,
        "binexpose listening on http://{}",
        listener.local_addr()?
    );

    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await?;

    tracing::info!("server stopped");
    Ok(())
}

/// Bind the configured host and port. Host names are resolved.
async fn bind(cfg: &Config) -> anyhow::Result<TcpListener> {
    let (host, port) = cfg.listen_addr();

    TcpListener::bind((host, port))
        .await
        .with_context(|| format!("Failed to bind {}:{}", host, port))
}

/// Route table with request tracing.
pub fn router(state: AppState) -> Router {
    Router::new()
        .route("/health", get(health))
        .route("/execute", post(execute))
        .with_state(state)
        .layer(
            TraceLayer::new_for_http()
                .make_span_with(|req: &Request<Body>| {
                    tracing::info_span!(
                        "http_request",
                        method = %req.method(),
                        path = %req.uri().path(),
                    )
                })
                .on_response(|res: &Response, latency: Duration, _span: &Span| {
                    tracing::info!(
                        status = res.status().as_u16(),
                        latency_ms = latency.as_millis(),
                        "request completed"
                    );
                }),
        )
}

async fn shutdown_signal() {
    if let Err(e) = tokio::signal::ctrl_c().await {
        tracing::error!("failed to listen for shutdown signal: {}", e);
        std::future::pending::<()>().await;
    }
    tracing::info!("shutdown signal received");
}

/* ---------------- request models ---------------- */

/// `null` and a missing key mean the same thing for both fields.
#[derive(Debug, Default, Deserialize)]
struct ExecuteRequest {
    /// Falls back to the configured default binary.
    #[serde(default)]
    binary_path: Option<String>,

    #[serde(default)]
    args: Option<Vec<String>>,
}

impl ExecuteRequest {
    /// Decode a request body.
    ///
    /// Only a JSON object is accepted. serde would otherwise read an array
    /// positionally into the struct fields.
    fn parse(payload: Result<Json<Value>, JsonRejection>) -> Result<Self, String> {
        let Json(value) = payload.map_err(|rejection| rejection.body_text())?;

        if !value.is_object() {
            return Err("Request body must be a JSON object".to_string());
        }

        serde_json::from_value(value).map_err(|e| format!("Invalid request body: {}", e))
    }
}

/* ---------------- endpoints ---------------- */

async fn health() -> &'static str {
    "ok"
}

#[debug_handler]
async fn execute(
    State(state): State<AppState>,
    payload: Result<Json<Value>, JsonRejection>,
) -> impl IntoResponse {
    let req = match ExecuteRequest::parse(payload) {
        Ok(req) => req,
        Err(message) => {
            tracing::warn!("rejected execute request: {}", message);
            return (
                StatusCode::BAD_REQUEST,
                Json(ExecuteResponse::Error(message)),
            )
                .into_response();
        }
    };

    let binary_path = req
        .binary_path
        .as_deref()
        .unwrap_or(&*state.default_binary_path);
    let args = req.args.unwrap_or_default();

    let response = run_execution(binary_path, &args).await;

    (StatusCode::OK, Json(response)).into_response()
}
