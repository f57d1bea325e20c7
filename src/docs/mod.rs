use utoipa::OpenApi;
use crate::models::*;

/// Health check endpoint
#[utoipa::path(
    get,
    path = "/api/health",
    responses(
        (status = 200, description = "Service is healthy", body = HealthResponse)
    )
)]
#[allow(dead_code)]
pub async fn health_check_doc() {}

/// Readiness check endpoint
#[utoipa::path(
    get,
    path = "/api/ready",
    responses(
        (status = 200, description = "Database connection is established", body = ReadyResponse),
        (status = 503, description = "Database is not configured or unreachable", body = ErrorResponse)
    )
)]
#[allow(dead_code)]
pub async fn ready_check_doc() {}

/// Loading placeholder image
#[utoipa::path(
    get,
    path = "/api/v1/placeholder",
    responses(
        (status = 200, description = "Shimmer SVG as a data URL", body = PlaceholderResponse)
    )
)]
#[allow(dead_code)]
pub async fn placeholder_doc() {}

/// Resolve an image size
#[utoipa::path(
    get,
    path = "/api/v1/image-size",
    params(ImageSizeQuery),
    responses(
        (status = 200, description = "Resolved size", body = ImageSizeResponse),
        (status = 400, description = "Invalid dimension", body = ErrorResponse)
    )
)]
#[allow(dead_code)]
pub async fn image_size_doc() {}

#[derive(OpenApi)]
#[openapi(
    paths(
        health_check_doc,
        ready_check_doc,
        placeholder_doc,
        image_size_doc,
    ),
    components(
        schemas(HealthResponse, ReadyResponse, ErrorResponse, PlaceholderResponse, ImageSizeResponse)
    ),
    tags(
        (name = "api", description = "API endpoints")
    )
)]
pub struct ApiDoc;
