use axum::{Extension, Json, http::StatusCode};
use seed_data::db::{SeedOutcome, seed_database};
use serde::Serialize;

use crate::{database::Database, errors::AppError};

pub const SEED_SKIPPED_MESSAGE: &str = "Skipping database seed due to missing connection string";
pub const SEED_SUCCESS_MESSAGE: &str = "Database seeded successfully";

#[derive(Debug, Serialize)]
pub struct MessageResponse {
    pub message: &'static str,
}

/// Health check endpoint.
pub async fn health_check() -> StatusCode {
    StatusCode::OK
}

/// Creates the schema and inserts the placeholder data.
///
/// A missing connection string is answered with 200 and a skip message.
/// Any failure rolls the whole seed back and is reported as a 500.
pub async fn seed(Extension(db): Extension<Database>) -> Result<Json<MessageResponse>, AppError> {
    let message = match seed_database(db.pool().cloned()).await? {
        SeedOutcome::Skipped => SEED_SKIPPED_MESSAGE,
        SeedOutcome::Seeded(_) => SEED_SUCCESS_MESSAGE,
    };

    Ok(Json(MessageResponse { message }))
}

pub async fn not_found() -> AppError {
    AppError::NotFound
}
