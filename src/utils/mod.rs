pub mod debounce;
pub mod errors;
pub mod image;
pub mod merge;
pub mod query;

pub use debounce::Debouncer;
pub use errors::describe_error;
pub use image::{download_file_name, image_size, placeholder_data_url, AspectRatio, Dimension, ImageDimensions};
pub use merge::deep_merge;
pub use query::{form_url_query, remove_keys_from_query};
