use axum::{
    http::{header, HeaderValue, StatusCode},
    response::{IntoResponse, Response},
    Json,
};
use std::fmt;

use crate::models::ErrorResponse;

/// Usage hint returned when the caller omits `rc`.
pub const MISSING_RC_MESSAGE: &str = "RC number required: /api/vehicle?rc=MH04KA0151";

/// Application-specific error types.
#[derive(Debug, Clone, PartialEq)]
pub enum AppError {
    /// The `rc` query parameter was absent or empty.
    MissingRc,
    /// Upstream request, body parsing, or result shaping failed.
    /// Carries the failure text, which is exposed to the caller as `details`.
    Upstream(String),
}

impl fmt::Display for AppError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            AppError::MissingRc => write!(f, "{}", MISSING_RC_MESSAGE),
            AppError::Upstream(msg) => write!(f, "Server error: {}", msg),
        }
    }
}

impl std::error::Error for AppError {}

impl IntoResponse for AppError {
    /// Maps each variant to its status code and error envelope.
    fn into_response(self) -> Response {
        let (status, body) = match self {
            AppError::MissingRc => {
                tracing::warn!("Lookup rejected: missing rc parameter");
                (
                    StatusCode::BAD_REQUEST,
                    ErrorResponse::new(MISSING_RC_MESSAGE, None),
                )
            }
            AppError::Upstream(details) => {
                tracing::error!("Upstream lookup failed: {}", details);
                (
                    StatusCode::INTERNAL_SERVER_ERROR,
                    ErrorResponse::new("Server error", Some(details)),
                )
            }
        };

        (
            status,
            [(
                header::ACCESS_CONTROL_ALLOW_ORIGIN,
                HeaderValue::from_static("*"),
            )],
            Json(body),
        )
            .into_response()
    }
}

impl From<reqwest::Error> for AppError {
    /// Converts a `reqwest::Error` into an `AppError`.
    ///
    /// The request URL carries the upstream API key, so it is stripped. The
    /// source chain is appended since reqwest's own message omits it.
    fn from(err: reqwest::Error) -> Self {
        let err = err.without_url();
        let mut message = err.to_string();
        let mut source = std::error::Error::source(&err);
        while let Some(cause) = source {
            message.push_str(": ");
            message.push_str(&cause.to_string());
            source = cause.source();
        }
        AppError::Upstream(message)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_missing_rc_is_bad_request() {
        let response = AppError::MissingRc.into_response();
        assert_eq!(response.status(), StatusCode::BAD_REQUEST);
        assert_eq!(
            response.headers()[header::ACCESS_CONTROL_ALLOW_ORIGIN],
            "*"
        );
    }

    #[test]
    fn test_upstream_is_internal_server_error() {
        let response = AppError::Upstream("fetch failed".to_string()).into_response();
        assert_eq!(response.status(), StatusCode::INTERNAL_SERVER_ERROR);
        assert_eq!(
            response.headers()[header::ACCESS_CONTROL_ALLOW_ORIGIN],
            "*"
        );
    }

    #[tokio::test]
    async fn test_reqwest_error_conversion_drops_url() {
        // Nothing listens on port 1
        let err = reqwest::get("http://127.0.0.1:1/api/vehicle?apikey=SECRETKEY&vehical=MH04")
            .await
            .unwrap_err();

        let AppError::Upstream(details) = AppError::from(err) else {
            panic!("expected Upstream error");
        };
        assert!(details.starts_with("error sending request"), "details: {}", details);
        assert!(!details.contains("SECRETKEY"), "details: {}", details);
    }

    #[test]
    fn test_display() {
        assert_eq!(
            AppError::Upstream("fetch failed".into()).to_string(),
            "Server error: fetch failed"
        );
        assert!(AppError::MissingRc.to_string().starts_with("RC number required"));
    }
}
