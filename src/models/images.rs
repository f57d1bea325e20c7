use serde::{Deserialize, Serialize};
use utoipa::{IntoParams, ToSchema};

/// Response carrying the loading placeholder
#[derive(Serialize, Deserialize, ToSchema)]
pub struct PlaceholderResponse {
    pub data_url: String,
}

/// Query for the image size endpoint
#[derive(Deserialize, IntoParams)]
#[into_params(parameter_in = Query)]
pub struct ImageSizeQuery {
    /// Transformation type, e.g. `fill` or `restore`
    #[serde(rename = "type")]
    pub transformation: String,
    /// Aspect ratio key (`1:1`, `3:4`, `9:16`)
    pub aspect_ratio: Option<String>,
    pub width: Option<u32>,
    pub height: Option<u32>,
    /// `width` or `height`
    pub dimension: String,
}

/// Resolved image size
#[derive(Serialize, Deserialize, ToSchema)]
pub struct ImageSizeResponse {
    pub dimension: String,
    pub size: u32,
}
