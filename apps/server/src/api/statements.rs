use std::sync::Arc;

use axum::{
    body::Bytes,
    extract::{DefaultBodyLimit, State},
    routing::post,
    Json, Router,
};
use navfolio_core::statements::ImportSummary;

use crate::{error::ApiResult, main_lib::AppState};

/// Upload ceiling for a single statement.
const MAX_STATEMENT_BYTES: usize = 64 * 1024 * 1024;

#[utoipa::path(
    post,
    path = "/api/v1/statements/holdings",
    request_body(content = String, content_type = "text/csv"),
    responses(
        (status = 200, description = "Rows read and upserted"),
        (status = 400, description = "Malformed statement")
    )
)]
pub async fn import_holdings(
    State(state): State<Arc<AppState>>,
    body: Bytes,
) -> ApiResult<Json<ImportSummary>> {
    let summary = state.import_service.import_holdings(&body).await?;
    Ok(Json(summary))
}

#[utoipa::path(
    post,
    path = "/api/v1/statements/transactions",
    request_body(content = String, content_type = "text/csv"),
    responses(
        (status = 200, description = "Rows read and upserted"),
        (status = 400, description = "Malformed statement")
    )
)]
pub async fn import_transactions(
    State(state): State<Arc<AppState>>,
    body: Bytes,
) -> ApiResult<Json<ImportSummary>> {
    let summary = state.import_service.import_transactions(&body).await?;
    Ok(Json(summary))
}

pub fn router() -> Router<Arc<AppState>> {
    Router::new()
        .route("/statements/holdings", post(import_holdings))
        .route("/statements/transactions", post(import_transactions))
        .layer(DefaultBodyLimit::max(MAX_STATEMENT_BYTES))
}
