use axum::{http::StatusCode, Json};

/// Liveness check, does not touch the backend
pub async fn ping() -> (StatusCode, Json<()>) {
    (StatusCode::OK, Json(()))
}
