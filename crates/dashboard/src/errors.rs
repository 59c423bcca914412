use axum::{
    Json,
    http::StatusCode,
    response::{IntoResponse, Response},
};
use seed_data::db::SeedError;
use serde_json::json;
use thiserror::Error;
use tracing::error;

#[derive(Error, Debug)]
pub enum AppError {
    #[error("{0}")]
    Seed(#[from] SeedError),

    #[error("Not found")]
    NotFound,
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let (status, error_message) = match &self {
            // Seed failures surface the underlying message as-is.
            AppError::Seed(e) => {
                error!("Seed error: {e}");
                (StatusCode::INTERNAL_SERVER_ERROR, e.to_string())
            }
            AppError::NotFound => (StatusCode::NOT_FOUND, self.to_string()),
        };

        let body = Json(json!({
            "error": error_message,
        }));

        (status, body).into_response()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use axum::body::to_bytes;

    async fn render(err: AppError) -> (StatusCode, serde_json::Value) {
        let response = err.into_response();
        let status = response.status();
        let bytes = to_bytes(response.into_body(), usize::MAX).await.unwrap();
        (status, serde_json::from_slice(&bytes).unwrap())
    }

    #[tokio::test]
    async fn test_seed_error_is_500_with_raw_message() {
        let err = AppError::from(SeedError::Hash("salt too short".to_string()));
        let (status, body) = render(err).await;

        assert_eq!(status, StatusCode::INTERNAL_SERVER_ERROR);
        assert_eq!(body, json!({ "error": "salt too short" }));
    }

    #[tokio::test]
    async fn test_database_error_keeps_driver_message() {
        let err = AppError::from(SeedError::from(sqlx::Error::PoolTimedOut));
        let (status, body) = render(err).await;

        assert_eq!(status, StatusCode::INTERNAL_SERVER_ERROR);
        assert_eq!(body["error"], sqlx::Error::PoolTimedOut.to_string());
    }

    #[tokio::test]
    async fn test_not_found() {
        let (status, body) = render(AppError::NotFound).await;

        assert_eq!(status, StatusCode::NOT_FOUND);
        assert_eq!(body, json!({ "error": "Not found" }));
    }
}
