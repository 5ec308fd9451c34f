//! Classification error types.

use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use thiserror::Error;
use tracing::error;

/// Errors on the classification path.
///
/// None of these are recovered locally; they bubble to the request boundary
/// where they become a generic 500. The variants exist so the log line can
/// tell "model service down" apart from "model service returned garbage".
#[derive(Error, Debug)]
pub enum ClassifyError {
    /// The configured model host could not be combined into a valid URL.
    #[error("invalid prediction url for model host \"{host}\": {source}")]
    InvalidUrl {
        /// The configured model host.
        host: String,
        /// Underlying parse failure.
        source: url::ParseError,
    },

    /// The upstream request failed (connect, timeout, or body decode).
    #[error("upstream request failed: {0}")]
    Request(#[from] reqwest::Error),

    /// The upstream responded with a non-success status.
    #[error("model service returned HTTP {status}")]
    UpstreamStatus {
        /// Status code from the model service.
        status: StatusCode,
    },

    /// The upstream response carried no prediction.
    #[error("model service returned no result")]
    MissingResult,
}

impl IntoResponse for ClassifyError {
    fn into_response(self) -> Response {
        error!("classification failed: {}", self);
        (StatusCode::INTERNAL_SERVER_ERROR, "internal server error").into_response()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn classify_errors_map_to_500() {
        let response = ClassifyError::MissingResult.into_response();
        assert_eq!(response.status(), StatusCode::INTERNAL_SERVER_ERROR);

        let response = ClassifyError::UpstreamStatus {
            status: StatusCode::BAD_GATEWAY,
        }
        .into_response();
        assert_eq!(response.status(), StatusCode::INTERNAL_SERVER_ERROR);
    }

    #[test]
    fn error_messages_name_the_failure() {
        let err = ClassifyError::UpstreamStatus {
            status: StatusCode::SERVICE_UNAVAILABLE,
        };
        assert!(err.to_string().contains("503"));

        let err = ClassifyError::MissingResult;
        assert!(err.to_string().contains("no result"));
    }
}
