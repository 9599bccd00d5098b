use axum::http::StatusCode;
use axum::response::IntoResponse;
use serde_json::json;

use moviedb_core::{DomainError, ValidationErrors};
use moviedb_infra::StoreError;

pub fn json_error(
    status: StatusCode,
    code: &'static str,
    message: impl Into<String>,
) -> axum::response::Response {
    (
        status,
        axum::Json(json!({
            "error": code,
            "message": message.into(),
        })),
    )
        .into_response()
}

/// 422 listing every rejected field.
pub fn validation_error_response(errors: ValidationErrors) -> axum::response::Response {
    let message = errors.to_string();
    (
        StatusCode::UNPROCESSABLE_ENTITY,
        axum::Json(json!({
            "error": "validation_error",
            "message": message,
            "fields": errors.into_inner(),
        })),
    )
        .into_response()
}

pub fn not_found(kind: &str) -> axum::response::Response {
    json_error(StatusCode::NOT_FOUND, "not_found", format!("{kind} not found"))
}

pub fn domain_error_to_response(err: DomainError) -> axum::response::Response {
    match err {
        DomainError::Validation(errors) => validation_error_response(errors),
        DomainError::InvalidId(msg) => json_error(StatusCode::BAD_REQUEST, "invalid_id", msg),
        DomainError::NotFound => json_error(StatusCode::NOT_FOUND, "not_found", "not found"),
    }
}

/// Storage faults never leak SQL text to the client; the detail goes to the log.
pub fn store_error_to_response(kind: &str, err: StoreError) -> axum::response::Response {
    match err {
        StoreError::Conflict(msg) => {
            tracing::warn!(kind, error = %msg, "write rejected by a uniqueness constraint");
            json_error(
                StatusCode::INTERNAL_SERVER_ERROR,
                "storage_error",
                "internal storage error",
            )
        }
        StoreError::Unavailable(msg) => {
            tracing::error!(kind, error = %msg, "storage unavailable");
            json_error(
                StatusCode::SERVICE_UNAVAILABLE,
                "storage_unavailable",
                "storage is temporarily unavailable",
            )
        }
        StoreError::Database(msg) | StoreError::Decode(msg) => {
            tracing::error!(kind, error = %msg, "storage error");
            json_error(
                StatusCode::INTERNAL_SERVER_ERROR,
                "storage_error",
                "internal storage error",
            )
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn store_errors_map_to_server_statuses() {
        let cases = [
            (StoreError::Conflict("dup".into()), StatusCode::INTERNAL_SERVER_ERROR),
            (StoreError::Unavailable("down".into()), StatusCode::SERVICE_UNAVAILABLE),
            (StoreError::Database("boom".into()), StatusCode::INTERNAL_SERVER_ERROR),
            (StoreError::Decode("drift".into()), StatusCode::INTERNAL_SERVER_ERROR),
        ];
        for (err, status) in cases {
            assert_eq!(store_error_to_response("user", err).status(), status);
        }
    }

    #[test]
    fn constraint_violations_are_server_errors() {
        let resp = store_error_to_response("user", StoreError::Conflict("Duplicate entry".into()));
        assert!(resp.status().is_server_error());
    }

    #[test]
    fn domain_errors_map_to_client_statuses() {
        assert_eq!(
            domain_error_to_response(DomainError::invalid_id("abc")).status(),
            StatusCode::BAD_REQUEST
        );
        assert_eq!(
            domain_error_to_response(DomainError::not_found()).status(),
            StatusCode::NOT_FOUND
        );
    }
}
