use axum::{
    body::{Body, Bytes},
    extract::Request,
    http::StatusCode,
    middleware::Next,
    response::Response,
};
use http_body_util::LengthLimitError;
use serde::de::DeserializeOwned;
use serde_json::error::Category;

use moviedb_core::Validate;

use crate::app::errors;

/// Largest write body accepted before decoding.
pub const MAX_BODY_BYTES: usize = 64 * 1024;

/// Decode and validate a write payload before the handler runs.
///
/// Attach per route with `axum::middleware::from_fn(validate_body::<MovieInput>)`.
/// On success the validated `T::Output` is placed in the request extensions
/// (read it with `Extension<T::Output>`) and the original body is passed on.
/// On failure the request is answered here and the handler never runs.
pub async fn validate_body<T>(req: Request, next: Next) -> Response
where
    T: Validate + DeserializeOwned,
    T::Output: Clone + Send + Sync + 'static,
{
    let (mut parts, body) = req.into_parts();

    let bytes = match axum::body::to_bytes(body, MAX_BODY_BYTES).await {
        Ok(bytes) => bytes,
        Err(e) if is_length_limit(&e) => {
            return errors::json_error(
                StatusCode::PAYLOAD_TOO_LARGE,
                "body_too_large",
                format!("request body exceeds {MAX_BODY_BYTES} bytes"),
            );
        }
        Err(e) => {
            return errors::json_error(
                StatusCode::BAD_REQUEST,
                "invalid_body",
                format!("failed to read request body: {e}"),
            );
        }
    };

    let input: T = match decode_input(&bytes) {
        Ok(input) => input,
        Err(resp) => return resp,
    };

    match input.validate() {
        Ok(valid) => {
            parts.extensions.insert(valid);
            next.run(Request::from_parts(parts, Body::from(bytes))).await
        }
        Err(errs) => {
            tracing::debug!(path = %parts.uri.path(), errors = %errs, "write payload rejected");
            errors::validation_error_response(errs)
        }
    }
}

fn is_length_limit(err: &axum::Error) -> bool {
    let mut source: Option<&(dyn std::error::Error + 'static)> = Some(err);
    while let Some(e) = source {
        if e.is::<LengthLimitError>() {
            return true;
        }
        source = e.source();
    }
    false
}

/// Whitespace-only bodies decode as `{}` so every field is reported missing.
fn decode_input<T: DeserializeOwned>(bytes: &Bytes) -> Result<T, Response> {
    let raw: &[u8] = if bytes.iter().all(u8::is_ascii_whitespace) {
        b"{}"
    } else {
        &bytes[..]
    };

    serde_json::from_slice(raw).map_err(|e| match e.classify() {
        Category::Data => errors::json_error(
            StatusCode::UNPROCESSABLE_ENTITY,
            "invalid_body",
            e.to_string(),
        ),
        Category::Syntax | Category::Eof | Category::Io => {
            errors::json_error(StatusCode::BAD_REQUEST, "invalid_json", e.to_string())
        }
    })
}

#[cfg(test)]
mod tests {
    use moviedb_core::{MovieInput, UserInput};

    use super::*;

    fn decode<T: DeserializeOwned>(raw: &'static str) -> Result<T, StatusCode> {
        decode_input(&Bytes::from_static(raw.as_bytes())).map_err(|r| r.status())
    }

    #[test]
    fn empty_body_decodes_as_empty_object() {
        let input: UserInput = decode("").unwrap();
        let err = input.validate().unwrap_err();
        assert_eq!(
            err.fields().collect::<Vec<_>>(),
            vec!["firstname", "lastname", "email", "city", "language"]
        );
    }

    #[test]
    fn malformed_json_is_a_bad_request() {
        assert_eq!(
            decode::<UserInput>("{\"firstname\":").unwrap_err(),
            StatusCode::BAD_REQUEST
        );
        assert_eq!(
            decode::<UserInput>("not json").unwrap_err(),
            StatusCode::BAD_REQUEST
        );
    }

    #[test]
    fn wrong_shape_is_unprocessable() {
        assert_eq!(
            decode::<UserInput>("42").unwrap_err(),
            StatusCode::UNPROCESSABLE_ENTITY
        );
        assert_eq!(
            decode::<MovieInput>("{\"duration\": \"long\"}").unwrap_err(),
            StatusCode::UNPROCESSABLE_ENTITY
        );
    }

    #[tokio::test]
    async fn oversized_body_is_a_length_limit_error() {
        let body = Body::from(vec![b' '; MAX_BODY_BYTES + 1]);
        let err = axum::body::to_bytes(body, MAX_BODY_BYTES).await.unwrap_err();
        assert!(is_length_limit(&err));
    }

    #[test]
    fn numeric_year_is_accepted() {
        let input: MovieInput = decode(
            r#"{"title":"Metropolis","director":"Fritz Lang","year":1927,"color":"0","duration":153}"#,
        )
        .unwrap();
        assert_eq!(input.validate().unwrap().year, "1927");
    }
}
