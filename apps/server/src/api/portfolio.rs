use std::sync::Arc;

use axum::{
    extract::{Query, State},
    http::HeaderValue,
    response::{IntoResponse, Response},
    routing::get,
    Json, Router,
};
use navfolio_core::holdings::HoldingFilter;
use serde::Deserialize;

use crate::{error::ApiResult, main_lib::AppState};

/// Number of holdings dropped from a summary because their metrics failed.
pub const SKIPPED_HOLDINGS_HEADER: &str = "x-skipped-holdings";

#[derive(Debug, Default, Deserialize, utoipa::IntoParams)]
#[serde(rename_all = "camelCase")]
#[into_params(rename_all = "camelCase", parameter_in = Query)]
pub struct SummaryQuery {
    /// Investor tax identifier (PAN).
    pub investor_id: Option<String>,
    pub folio: Option<String>,
    /// Return `{records, warnings}` instead of the bare record array.
    #[serde(default)]
    pub include_warnings: bool,
}

impl From<&SummaryQuery> for HoldingFilter {
    fn from(query: &SummaryQuery) -> Self {
        let non_empty = |value: &Option<String>| {
            value
                .as_deref()
                .map(str::trim)
                .filter(|s| !s.is_empty())
                .map(str::to_string)
        };
        HoldingFilter {
            investor_id: non_empty(&query.investor_id),
            folio_no: non_empty(&query.folio),
        }
    }
}

#[utoipa::path(
    get,
    path = "/api/v1/portfolio/summary",
    params(SummaryQuery),
    responses((status = 200, description = "One record per holding and scheme"))
)]
pub async fn get_portfolio_summary(
    State(state): State<Arc<AppState>>,
    Query(query): Query<SummaryQuery>,
) -> ApiResult<Response> {
    let filter = HoldingFilter::from(&query);
    let result = state.summary_service.summarize(&filter)?;

    let skipped = result.warnings.len();
    if skipped > 0 {
        tracing::warn!("Portfolio summary skipped {} holding(s)", skipped);
    }

    let mut response = if query.include_warnings {
        Json(result).into_response()
    } else {
        Json(result.records).into_response()
    };
    response
        .headers_mut()
        .insert(SKIPPED_HOLDINGS_HEADER, HeaderValue::from(skipped));
    Ok(response)
}

pub fn router() -> Router<Arc<AppState>> {
    Router::new().route("/portfolio/summary", get(get_portfolio_summary))
}
