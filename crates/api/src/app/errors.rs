//! The single boundary translating pipeline outcomes into transport
//! responses. Business code never builds responses itself.

use axum::Json;
use axum::http::StatusCode;
use axum::response::IntoResponse;
use serde_json::json;

use taphouse_core::{ServiceError, Violations};

pub fn service_error_to_response(err: ServiceError) -> axum::response::Response {
    match err {
        // Expected outcomes, carried through the same channel as success
        // values; interpreted here, never logged as errors.
        ServiceError::Validation(violations) => validation_failed_response(violations),
        ServiceError::NotFound => StatusCode::NOT_FOUND.into_response(),

        ServiceError::Store(e) => {
            tracing::error!(error = %e, "document store failure");
            json_error(StatusCode::INTERNAL_SERVER_ERROR, "store_error", e.to_string())
        }
    }
}

pub fn validation_failed_response(violations: Violations) -> axum::response::Response {
    (
        StatusCode::BAD_REQUEST,
        Json(json!({
            "error": "validation_failed",
            "violations": violations,
        })),
    )
        .into_response()
}

pub fn json_error(
    status: StatusCode,
    code: &'static str,
    message: impl Into<String>,
) -> axum::response::Response {
    (
        status,
        Json(json!({
            "error": code,
            "message": message.into(),
        })),
    )
        .into_response()
}
