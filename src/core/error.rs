// Errors surfaced by the HTTP layer

use crate::models::admin::ErrorResponse;
use axum::{
    http::StatusCode,
    response::{IntoResponse, Json, Response},
};
use thiserror::Error;

#[derive(Error, Debug)]
pub enum ApiError {
    #[error("Invalid API key")]
    InvalidApiKey,

    #[error("Invalid parameter: {0}")]
    InvalidParameter(String),

    #[error("Not found: {0}")]
    NotFound(String),

    #[error("Event queue is closed")]
    QueueClosed,
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let status = match &self {
            ApiError::InvalidApiKey => StatusCode::UNAUTHORIZED,
            ApiError::InvalidParameter(_) => StatusCode::BAD_REQUEST,
            ApiError::NotFound(_) => StatusCode::NOT_FOUND,
            ApiError::QueueClosed => StatusCode::SERVICE_UNAVAILABLE,
        };

        (
            status,
            Json(ErrorResponse {
                success: false,
                error: self.to_string(),
            }),
        )
            .into_response()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_status_codes() {
        assert_eq!(ApiError::InvalidApiKey.into_response().status(), StatusCode::UNAUTHORIZED);
        assert_eq!(
            ApiError::InvalidParameter("hash".to_string()).into_response().status(),
            StatusCode::BAD_REQUEST
        );
        assert_eq!(
            ApiError::NotFound("/nope".to_string()).into_response().status(),
            StatusCode::NOT_FOUND
        );
        assert_eq!(ApiError::QueueClosed.into_response().status(), StatusCode::SERVICE_UNAVAILABLE);
    }

    #[tokio::test]
    async fn test_error_body() {
        use axum::body::Body;
        use http_body_util::BodyExt;

        let response = ApiError::InvalidParameter("hash must not be empty".to_string()).into_response();
        let bytes = Body::new(response.into_body()).collect().await.unwrap().to_bytes();
        let body: ErrorResponse = serde_json::from_slice(&bytes).unwrap();

        assert!(!body.success);
        assert_eq!(body.error, "Invalid parameter: hash must not be empty");
    }
}
