use crate::core::error::ApiError;
use axum::http::Uri;

pub async fn fallback_handler(uri: Uri) -> ApiError {
    ApiError::NotFound(format!(
        "{}. Valid endpoints: /json/events, /json/propertiesTrackers/{{hash}}, \
         /json/propertiesFiles/{{hash}}, /json/propertiesGeneral/{{hash}}, /health",
        uri.path()
    ))
}

#[cfg(test)]
mod tests {
    use super::*;
    use axum::http::StatusCode;
    use axum::response::IntoResponse;

    #[tokio::test]
    async fn test_fallback_is_not_found() {
        let error = fallback_handler(Uri::from_static("/nope")).await;
        assert!(error.to_string().contains("/nope"));
        assert_eq!(error.into_response().status(), StatusCode::NOT_FOUND);
    }
}
