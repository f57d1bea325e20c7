use crate::models::{ErrorResponse, ImageSizeQuery, ImageSizeResponse, PlaceholderResponse};
use crate::utils::{image_size as resolve_image_size, placeholder_data_url, AspectRatio, Dimension, ImageDimensions};
use axum::{extract::Query, http::StatusCode, Json};

/// Shimmer placeholder shown while an image is transforming
pub async fn placeholder() -> Json<PlaceholderResponse> {
    Json(PlaceholderResponse {
        data_url: placeholder_data_url(),
    })
}

/// Resolve the rendered width or height of an image
pub async fn image_size(
    Query(query): Query<ImageSizeQuery>,
) -> Result<(StatusCode, Json<ImageSizeResponse>), (StatusCode, Json<ErrorResponse>)> {
    let dimension = match Dimension::parse(&query.dimension) {
        Some(dimension) => dimension,
        None => {
            return Err(ErrorResponse::reply(
                StatusCode::BAD_REQUEST,
                format!("Invalid dimension '{}'. Use 'width' or 'height'.", query.dimension),
            ));
        }
    };

    // Unknown presets fall back to the default size
    let image = ImageDimensions {
        aspect_ratio: query.aspect_ratio.as_deref().and_then(AspectRatio::parse),
        width: query.width,
        height: query.height,
    };

    Ok((
        StatusCode::OK,
        Json(ImageSizeResponse {
            dimension: query.dimension.trim().to_lowercase(),
            size: resolve_image_size(&query.transformation, &image, dimension),
        }),
    ))
}
