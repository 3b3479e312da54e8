use std::time::Instant;
use axum::Json;
use axum::extract::{Request, State};
use axum::middleware::Next;
use axum::response::Response;
use crate::AppState;
use crate::logger::log_request;
use crate::metrics::{MetricsSnapshot, Route};
use crate::models::{AppInfo, Status};

/// GET /: greeting and secrets, looked up fresh on every call.
pub async fn root(State(state): State<AppState>) -> Json<AppInfo> {

    Json(AppInfo::from_env(state.env.as_ref()))

}

/// GET /healthz is the readiness probe. Nothing downstream is checked.
pub async fn readiness() -> Json<Status> {

    Json(Status::READY)

}

/// GET /livez
pub async fn liveness() -> Json<Status> {

    Json(Status::ALIVE)

}

pub async fn metrics(State(state): State<AppState>) -> Json<MetricsSnapshot> {

    Json(state.metrics.snapshot())

}

// logs every request; per-route counters only move for successful responses
pub async fn track_request(
    State(state): State<AppState>,
    request: Request,
    next: Next
) -> Response {

    let method = request.method().clone();
    let path = request.uri().path().to_string();
    let started = Instant::now();

    let response = next.run(request).await;

    let latency_ms = started.elapsed().as_secs_f64() * 1000.0;
    let status = response.status().as_u16();

    let route = if response.status().is_success() {
        Route::from_path(&path)
    } else {
        Route::Other
    };

    state.metrics.record(route);
    tracing::debug!(%method, %path, status, latency_ms, "served request");
    log_request(state.log_path.as_deref(), method.as_str(), &path, status, latency_ms).await;

    response

}
