use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use navfolio_core::errors::{DatabaseError, Error as CoreError};
use serde::Serialize;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum ApiError {
    #[error("{0}")]
    Core(#[from] CoreError),
}

#[derive(Serialize)]
struct ErrorBody {
    code: u16,
    message: String,
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let ApiError::Core(e) = &self;
        let status = match e {
            CoreError::Import(_) => StatusCode::BAD_REQUEST,
            CoreError::Database(DatabaseError::NotFound(_)) => StatusCode::NOT_FOUND,
            CoreError::Database(DatabaseError::UniqueViolation(_)) => StatusCode::CONFLICT,
            _ => StatusCode::INTERNAL_SERVER_ERROR,
        };
        let msg = e.to_string();
        if status.is_server_error() {
            tracing::error!("Request failed: {}", msg);
        }
        let body = Json(ErrorBody {
            code: status.as_u16(),
            message: msg,
        });
        (status, body).into_response()
    }
}

pub type ApiResult<T> = Result<T, ApiError>;

#[cfg(test)]
mod tests {
    use super::*;
    use navfolio_core::errors::CalculatorError;
    use navfolio_core::statements::ImportError;

    #[test]
    fn import_errors_are_client_errors() {
        let err = ApiError::from(CoreError::from(ImportError::MissingColumn(
            "FOLIOCHK".to_string(),
        )));
        assert_eq!(err.into_response().status(), StatusCode::BAD_REQUEST);
    }

    #[test]
    fn calculation_failures_are_server_errors() {
        let err = ApiError::from(CoreError::Calculation(CalculatorError::Overflow {
            folio_no: "F1".to_string(),
            scheme: "Equity Fund".to_string(),
            field: "total_cost",
        }));
        let response = err.into_response();
        assert_eq!(response.status(), StatusCode::INTERNAL_SERVER_ERROR);
    }

    #[test]
    fn missing_records_are_not_found() {
        let err = ApiError::from(CoreError::Database(DatabaseError::NotFound(
            "Record not found".to_string(),
        )));
        assert_eq!(err.into_response().status(), StatusCode::NOT_FOUND);
    }

    #[test]
    fn storage_failures_are_server_errors() {
        let err = ApiError::from(CoreError::Database(DatabaseError::QueryFailed(
            "disk I/O error".to_string(),
        )));
        assert_eq!(
            err.into_response().status(),
            StatusCode::INTERNAL_SERVER_ERROR
        );
    }
}
