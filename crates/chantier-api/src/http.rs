//! Shared HTTP response helpers.
//!
//! Maps status codes onto [`ApiError`] and decodes bodies so the client
//! methods stay focused on building requests.

use serde::de::DeserializeOwned;

use crate::error::ApiError;

/// Check an HTTP response for error statuses.
///
/// Returns the response unchanged on success. Handles:
/// - **401 Unauthorized** → [`ApiError::Unauthorized`]
/// - **Other non-success status** → [`ApiError::Status`] with the body.
pub async fn check_response(resp: reqwest::Response) -> Result<reqwest::Response, ApiError> {
    let status = resp.status();
    if status == reqwest::StatusCode::UNAUTHORIZED {
        return Err(ApiError::Unauthorized);
    }
    if !status.is_success() {
        return Err(ApiError::Status {
            status: status.as_u16(),
            body: resp.text().await.unwrap_or_default(),
        });
    }
    Ok(resp)
}

/// Decode a JSON body into `T`.
///
/// An empty body decodes as JSON `null`, so `()`, `Option<_>` and
/// `serde_json::Value` accept `204 No Content` replies.
pub async fn decode<T: DeserializeOwned>(resp: reqwest::Response) -> Result<T, ApiError> {
    let bytes = resp.bytes().await?;
    let body: &[u8] = if bytes.iter().all(u8::is_ascii_whitespace) {
        b"null"
    } else {
        &bytes
    };
    serde_json::from_slice(body).map_err(ApiError::Decode)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn mock_response(status: u16, body: &'static str) -> reqwest::Response {
        reqwest::Response::from(
            ::http::Response::builder()
                .status(status)
                .body(body)
                .unwrap(),
        )
    }

    #[tokio::test]
    async fn check_response_unauthorized() {
        let err = check_response(mock_response(401, "")).await.unwrap_err();
        assert!(matches!(err, ApiError::Unauthorized));
    }

    #[tokio::test]
    async fn check_response_keeps_error_body() {
        let err = check_response(mock_response(422, r#"{"detail":"bad"}"#))
            .await
            .unwrap_err();
        match err {
            ApiError::Status { status, body } => {
                assert_eq!(status, 422);
                assert_eq!(body, r#"{"detail":"bad"}"#);
            }
            other => panic!("unexpected error: {other:?}"),
        }
    }

    #[tokio::test]
    async fn check_response_forbidden_is_not_unauthorized() {
        let err = check_response(mock_response(403, "")).await.unwrap_err();
        assert_eq!(err.status(), Some(403));
        assert!(!matches!(err, ApiError::Unauthorized));
    }

    #[tokio::test]
    async fn check_response_success() {
        assert!(check_response(mock_response(201, "{}")).await.is_ok());
    }

    #[tokio::test]
    async fn decode_empty_body_as_null() {
        let value: serde_json::Value = decode(mock_response(204, "")).await.unwrap();
        assert!(value.is_null());
        let unit: () = decode(mock_response(204, "")).await.unwrap();
        assert_eq!(unit, ());
    }

    #[tokio::test]
    async fn decode_wrong_shape_is_decode_error() {
        let err = decode::<Vec<String>>(mock_response(200, r#"{"a":1}"#))
            .await
            .unwrap_err();
        assert!(matches!(err, ApiError::Decode(_)));
    }
}
