/// Fallback when the server's error body carries no usable message
pub const GENERIC_API_ERROR: &str = "API request failed";

#[derive(Debug, thiserror::Error)]
pub enum ClientError {
    /// The server answered with a non-success status. `message` comes from
    /// the `error` field of the response body when present.
    #[error("{message}")]
    Api { status: u16, message: String },

    /// The request never completed, or the response body failed to decode.
    #[error("request failed: {0}")]
    Transport(#[from] reqwest::Error),
}

/// Pull the human-readable message out of an error body, falling back to a
/// generic one for empty or non-JSON bodies.
pub(crate) fn extract_error_message(body: &str) -> String {
    serde_json::from_str::<serde_json::Value>(body)
        .ok()
        .and_then(|v| v.get("error").and_then(|e| e.as_str()).map(String::from))
        .unwrap_or_else(|| GENERIC_API_ERROR.to_string())
}
