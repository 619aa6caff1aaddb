use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde::Serialize;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum AppError {
    #[error("Bad request: {0}")]
    BadRequest(String),

    #[error("Configuration error: {0}")]
    Config(String),

    #[error("1inch API error ({status}): {details}")]
    Upstream { status: StatusCode, details: String },

    #[error("Internal server error: {0}")]
    Internal(String),
}

/// Wire shape of every error the service emits. `details` carries upstream
/// error text verbatim and is omitted for client-correctable failures.
#[derive(Debug, Serialize)]
pub struct ErrorBody {
    pub message: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub details: Option<String>,
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let (status, body) = match self {
            AppError::BadRequest(message) => (
                StatusCode::BAD_REQUEST,
                ErrorBody {
                    message,
                    details: None,
                },
            ),
            AppError::Config(message) => (
                StatusCode::INTERNAL_SERVER_ERROR,
                ErrorBody {
                    message,
                    details: None,
                },
            ),
            // The upstream status is mirrored so callers see what the
            // balance API actually answered.
            AppError::Upstream { status, details } => (
                status,
                ErrorBody {
                    message: "1inch API Error".to_string(),
                    details: Some(details),
                },
            ),
            AppError::Internal(details) => (
                StatusCode::INTERNAL_SERVER_ERROR,
                ErrorBody {
                    message: "Internal server error".to_string(),
                    details: Some(details),
                },
            ),
        };

        (status, Json(body)).into_response()
    }
}

pub type Result<T> = std::result::Result<T, AppError>;

#[cfg(test)]
mod tests {
    use super::*;
    use axum::body::to_bytes;

    async fn body_json(response: Response) -> serde_json::Value {
        let bytes = to_bytes(response.into_body(), usize::MAX)
            .await
            .expect("body should be readable");
        serde_json::from_slice(&bytes).expect("body should be JSON")
    }

    #[tokio::test]
    async fn bad_request_maps_to_400_with_message() {
        let err = AppError::BadRequest("Missing chainId or address parameter".to_string());
        let response = err.into_response();

        assert_eq!(response.status(), StatusCode::BAD_REQUEST);
        let body = body_json(response).await;
        assert_eq!(body["message"], "Missing chainId or address parameter");
        assert!(body.get("details").is_none());
    }

    #[tokio::test]
    async fn config_error_maps_to_500_without_details() {
        let err = AppError::Config("API key not configured".to_string());
        let response = err.into_response();

        assert_eq!(response.status(), StatusCode::INTERNAL_SERVER_ERROR);
        let body = body_json(response).await;
        assert_eq!(body["message"], "API key not configured");
        assert!(body.get("details").is_none());
    }

    #[tokio::test]
    async fn upstream_status_is_mirrored_with_details() {
        let err = AppError::Upstream {
            status: StatusCode::TOO_MANY_REQUESTS,
            details: "rate limit exceeded".to_string(),
        };
        let response = err.into_response();

        assert_eq!(response.status(), StatusCode::TOO_MANY_REQUESTS);
        let body = body_json(response).await;
        assert_eq!(body["message"], "1inch API Error");
        assert_eq!(body["details"], "rate limit exceeded");
    }

    #[tokio::test]
    async fn internal_error_carries_error_text() {
        let err = AppError::Internal("connection reset".to_string());
        let response = err.into_response();

        assert_eq!(response.status(), StatusCode::INTERNAL_SERVER_ERROR);
        let body = body_json(response).await;
        assert_eq!(body["message"], "Internal server error");
        assert_eq!(body["details"], "connection reset");
    }
}
