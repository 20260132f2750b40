use crate::core::error::ApiError;
use tracing::warn;

/// Constant-time string equality
fn keys_match(provided: &str, expected: &str) -> bool {
    let (provided, expected) = (provided.as_bytes(), expected.as_bytes());
    if provided.len() != expected.len() {
        return false;
    }
    provided
        .iter()
        .zip(expected)
        .fold(0u8, |acc, (a, b)| acc | (a ^ b))
        == 0
}

/// Reject the request unless `provided` matches the configured key
pub fn authorize(provided: &str, expected: &str, action: &str) -> Result<(), ApiError> {
    if keys_match(provided, expected) {
        Ok(())
    } else {
        warn!(action = action, "Unauthorized request");
        Err(ApiError::InvalidApiKey)
    }
}
