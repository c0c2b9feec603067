use thiserror::Error;

/// Errors that can occur while fetching the user count.
#[derive(Debug, Error)]
pub enum ApiError {
    /// The HTTP exchange failed: DNS, refused connection, timeout, or a
    /// non-success status code.
    #[error("request failed: {source}")]
    Network {
        #[source]
        source: reqwest::Error,
    },

    /// The endpoint answered but the body was not the expected JSON shape.
    #[error("malformed response: {source}")]
    Decode {
        #[source]
        source: serde_json::Error,
    },
}
