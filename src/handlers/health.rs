use crate::db::{Connector, LazyConnection};
use crate::models::{ErrorResponse, HealthResponse, ReadyResponse};
use crate::utils::describe_error;
use axum::{extract::State, http::StatusCode, Json};
use std::sync::Arc;
use tracing::debug;

/// Health check endpoint
pub async fn health_check() -> Json<HealthResponse> {
    debug!("Health check requested");
    Json(HealthResponse {
        status: "ok".to_string(),
        message: "Server is running".to_string(),
    })
}

/// Readiness check endpoint, ready once the database connection is up
pub async fn ready_check<C: Connector>(
    State(db): State<Arc<LazyConnection<C>>>,
) -> Result<(StatusCode, Json<ReadyResponse>), (StatusCode, Json<ErrorResponse>)> {
    debug!("Readiness check requested");

    if let Err(e) = db.get_connection().await {
        return Err(ErrorResponse::reply(
            StatusCode::SERVICE_UNAVAILABLE,
            describe_error(&e),
        ));
    }

    Ok((
        StatusCode::OK,
        Json(ReadyResponse {
            status: "ok".to_string(),
            message: "Service is ready".to_string(),
            database: db.options().db_name.clone(),
        }),
    ))
}
