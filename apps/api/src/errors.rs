use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde_json::json;
use thiserror::Error;

/// Application-level error type.
/// Implements `IntoResponse` so Axum handlers can return `Result<T, AppError>`.
///
/// Every variant maps to a fixed, generic client message; diagnostic detail
/// (provider error bodies, unparseable model output) stays in server logs.
#[derive(Debug, Error)]
pub enum AppError {
    #[error("OpenAI API key is not configured")]
    MissingApiKey,

    #[error("provider call failed: {0}")]
    Provider(String),

    #[error("provider returned no completion content")]
    EmptyResponse,

    #[error("completion content is not valid JSON")]
    InvalidOutput(String),

    #[error("internal error: {0}")]
    Internal(#[from] anyhow::Error),
}

impl AppError {
    /// The message served to clients. Never carries diagnostic detail.
    pub fn client_message(&self) -> &'static str {
        match self {
            AppError::MissingApiKey => "Missing OpenAI API key on server",
            AppError::Provider(_) => "Failed to generate brand kit",
            AppError::EmptyResponse => "No content returned from AI",
            AppError::InvalidOutput(_) => "Invalid JSON from AI",
            AppError::Internal(_) => "Unexpected server error",
        }
    }
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        match &self {
            AppError::MissingApiKey => tracing::error!("OPENAI_API_KEY is not set"),
            AppError::Provider(detail) => tracing::error!("OpenAI API error: {detail}"),
            AppError::EmptyResponse => tracing::error!("completion contained no message content"),
            AppError::InvalidOutput(raw) => tracing::error!("failed to parse AI JSON: {raw}"),
            AppError::Internal(e) => tracing::error!("unexpected error: {e:?}"),
        }

        let body = Json(json!({ "error": self.client_message() }));
        (StatusCode::INTERNAL_SERVER_ERROR, body).into_response()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use http_body_util::BodyExt;

    /// Converts an `AppError` into its status code and parsed JSON body.
    async fn error_to_response(err: AppError) -> (StatusCode, serde_json::Value) {
        let response = err.into_response();
        let status = response.status();
        let bytes = response.into_body().collect().await.unwrap().to_bytes();
        let json: serde_json::Value = serde_json::from_slice(&bytes).unwrap();
        (status, json)
    }

    #[tokio::test]
    async fn missing_api_key_maps_to_500_with_config_message() {
        let (status, json) = error_to_response(AppError::MissingApiKey).await;
        assert_eq!(status, StatusCode::INTERNAL_SERVER_ERROR);
        assert_eq!(json["error"], "Missing OpenAI API key on server");
    }

    #[tokio::test]
    async fn provider_error_hides_diagnostic_detail() {
        let err = AppError::Provider("status 503: upstream overloaded".to_string());
        let (status, json) = error_to_response(err).await;
        assert_eq!(status, StatusCode::INTERNAL_SERVER_ERROR);
        assert_eq!(json["error"], "Failed to generate brand kit");
    }

    #[tokio::test]
    async fn empty_response_maps_to_no_content_message() {
        let (status, json) = error_to_response(AppError::EmptyResponse).await;
        assert_eq!(status, StatusCode::INTERNAL_SERVER_ERROR);
        assert_eq!(json["error"], "No content returned from AI");
    }

    #[tokio::test]
    async fn invalid_output_hides_raw_model_text() {
        let err = AppError::InvalidOutput("here are colors: red, blue".to_string());
        let (status, json) = error_to_response(err).await;
        assert_eq!(status, StatusCode::INTERNAL_SERVER_ERROR);
        assert_eq!(json["error"], "Invalid JSON from AI");
    }

    #[tokio::test]
    async fn internal_error_maps_to_unexpected_message() {
        let err = AppError::Internal(anyhow::anyhow!("request body was not an object"));
        let (status, json) = error_to_response(err).await;
        assert_eq!(status, StatusCode::INTERNAL_SERVER_ERROR);
        assert_eq!(json["error"], "Unexpected server error");
    }
}
