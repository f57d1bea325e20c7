use tracing::error;

/// Log an error and turn it into a user-facing message
pub fn describe_error(err: &dyn std::error::Error) -> String {
    error!("{}", err);
    format!("Error: {}", err)
}
