use axum::{Router, http::StatusCode, routing::get};

/// Liveness probe: the process is up and serving.
pub async fn healthz() -> StatusCode {
    StatusCode::OK
}

/// Readiness probe: the service is willing to take traffic.
pub async fn readyz() -> StatusCode {
    StatusCode::OK
}

/// Probe routes every staffdesk service mounts at its router root.
pub fn health_routes<S>() -> Router<S>
where
    S: Clone + Send + Sync + 'static,
{
    Router::new()
        .route("/healthz", get(healthz))
        .route("/readyz", get(readyz))
}
