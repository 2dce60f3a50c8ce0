use std::{path::Path, sync::Arc};

use axum::{extract::State, http::StatusCode, routing::get, Router};

use crate::main_lib::AppState;

#[utoipa::path(get, path = "/api/v1/healthz", responses((status = 200, description = "Health")))]
pub async fn healthz() -> &'static str {
    "ok"
}

#[utoipa::path(
    get,
    path = "/api/v1/readyz",
    responses(
        (status = 200, description = "Ready"),
        (status = 503, description = "Database file missing")
    )
)]
pub async fn readyz(State(state): State<Arc<AppState>>) -> (StatusCode, &'static str) {
    if Path::new(&state.db_path).exists() {
        (StatusCode::OK, "ok")
    } else {
        tracing::warn!("Database file {} is missing", state.db_path);
        (StatusCode::SERVICE_UNAVAILABLE, "database unavailable")
    }
}

pub fn router() -> Router<Arc<AppState>> {
    Router::new()
        .route("/healthz", get(healthz))
        .route("/readyz", get(readyz))
}
