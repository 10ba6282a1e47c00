use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde::{Deserialize, Serialize};
use thiserror::Error;
use tracing::error;
use utoipa::ToSchema;
use uuid::Uuid;

/// Standard API error response structure
///
/// Every failure, client or server side, serializes to this shape.
#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub struct ApiErrorResponse {
    /// Always `false` for failures
    pub success: bool,
    /// Human-readable error message
    #[schema(example = "Key not found")]
    pub message: String,
}

/// Main API error enum
#[derive(Error, Debug)]
pub enum ApiError {
    #[error("The request must have a body")]
    MissingBody,

    #[error("The request body must have a value property")]
    MissingValue,

    #[error("Value is not allowed")]
    RejectedValue,

    #[error("Key not found")]
    KeyNotFound,

    #[error("Database error: {0}")]
    Database(#[from] database_layer::DatabaseError),
}

impl ApiError {
    /// Get the HTTP status code for this error
    pub fn status_code(&self) -> StatusCode {
        match self {
            ApiError::MissingBody
            | ApiError::MissingValue
            | ApiError::RejectedValue
            | ApiError::KeyNotFound => StatusCode::BAD_REQUEST,
            ApiError::Database(db_err) if db_err.is_connection_failure() => {
                StatusCode::SERVICE_UNAVAILABLE
            }
            ApiError::Database(_) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }

    /// Get the error type string
    pub fn error_type(&self) -> &'static str {
        match self {
            ApiError::MissingBody => "missing_body",
            ApiError::MissingValue => "missing_value",
            ApiError::RejectedValue => "rejected_value",
            ApiError::KeyNotFound => "key_not_found",
            ApiError::Database(_) => "database_error",
        }
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let error_id = Uuid::new_v4().to_string();
        let status_code = self.status_code();

        // Log with correlation ID; the response body stays minimal.
        error!(
            error_id = %error_id,
            error_type = %self.error_type(),
            status_code = %status_code.as_u16(),
            error = %self,
            "API error occurred"
        );

        let body = ApiErrorResponse {
            success: false,
            message: self.to_string(),
        };

        (status_code, Json(body)).into_response()
    }
}

/// Type alias for API results
pub type ApiResult<T> = Result<T, ApiError>;

#[cfg(test)]
mod tests {
    use super::*;
    use database_layer::DatabaseError;

    #[test]
    fn client_errors_map_to_bad_request() {
        assert_eq!(ApiError::MissingBody.status_code(), StatusCode::BAD_REQUEST);
        assert_eq!(ApiError::MissingValue.status_code(), StatusCode::BAD_REQUEST);
        assert_eq!(ApiError::RejectedValue.status_code(), StatusCode::BAD_REQUEST);
        assert_eq!(ApiError::KeyNotFound.status_code(), StatusCode::BAD_REQUEST);
    }

    #[test]
    fn unreachable_store_maps_to_service_unavailable() {
        let err = ApiError::Database(DatabaseError::ConnectionFailed("refused".to_string()));
        assert_eq!(err.status_code(), StatusCode::SERVICE_UNAVAILABLE);
    }

    #[test]
    fn query_failure_maps_to_internal_server_error() {
        let err = ApiError::Database(DatabaseError::QueryFailed("bad statement".to_string()));
        assert_eq!(err.status_code(), StatusCode::INTERNAL_SERVER_ERROR);
    }

    #[test]
    fn error_body_carries_success_false_and_message() {
        let body = ApiErrorResponse {
            success: false,
            message: ApiError::KeyNotFound.to_string(),
        };
        let json = serde_json::to_value(&body).unwrap();
        assert_eq!(
            json,
            serde_json::json!({"success": false, "message": "Key not found"})
        );
    }
}
