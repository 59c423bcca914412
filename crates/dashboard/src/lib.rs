pub mod config;
pub mod database;
pub mod errors;
pub mod handlers;
pub mod request_id;

use axum::{
    Extension, Router,
    http::{HeaderValue, Method, header},
    middleware,
    routing::get,
};
use tower_http::{
    cors::{Any, CorsLayer},
    set_header::SetResponseHeaderLayer,
};

use crate::{
    database::Database,
    handlers::{health_check, not_found, seed},
    request_id::request_id_middleware,
};

pub fn create_router(db: Database) -> Router {
    let cors = CorsLayer::new()
        .allow_methods([Method::GET])
        .allow_headers(Any)
        .allow_origin(Any);

    Router::new()
        .route("/health", get(health_check))
        .route("/seed", get(seed))
        .fallback(not_found)
        .layer(Extension(db))
        .layer(cors)
        .layer(SetResponseHeaderLayer::overriding(
            header::X_CONTENT_TYPE_OPTIONS,
            HeaderValue::from_static("nosniff"),
        ))
        .layer(middleware::from_fn(request_id_middleware))
}

pub async fn run_server(db: Database, port: u16) -> anyhow::Result<()> {
    let app = create_router(db);

    let listener = tokio::net::TcpListener::bind(format!("0.0.0.0:{}", port)).await?;

    tracing::info!("Server running on http://0.0.0.0:{}", port);

    axum::serve(listener, app).await?;

    Ok(())
}
