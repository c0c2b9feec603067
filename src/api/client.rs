use tracing::debug;

use super::error::ApiError;
use super::types::UserCountResponse;

/// Endpoint polled when no override is configured.
pub const DEFAULT_BASE_URL: &str = "https://staging.taplerr.com/api/";

/// Path of the user-count resource under the base URL.
const TOTAL_USERS_PATH: &str = "totalUser";

/// Client for the user-count API.
///
/// Wraps a shared `reqwest::Client`, so clones reuse the same connection
/// pool. One resource, no parameters, no retries; retrying is the caller's
/// business (the UI binds it to a key).
#[derive(Debug, Clone)]
pub struct ApiClient {
    client: reqwest::Client,
    endpoint: String,
}

impl ApiClient {
    /// Create a client for the given base URL (trailing slash optional).
    pub fn new(base_url: &str) -> Self {
        let endpoint = format!("{}/{}", base_url.trim_end_matches('/'), TOTAL_USERS_PATH);
        Self {
            client: reqwest::Client::new(),
            endpoint,
        }
    }

    /// Full URL of the user-count resource.
    pub fn endpoint(&self) -> &str {
        &self.endpoint
    }

    /// Fetch the current total user count.
    ///
    /// Transport failures and non-success statuses surface as
    /// [`ApiError::Network`]; a 2xx body that is not the expected JSON shape
    /// surfaces as [`ApiError::Decode`].
    pub async fn total_users(&self) -> Result<UserCountResponse, ApiError> {
        debug!(endpoint = %self.endpoint, "requesting user count");

        let response = self
            .client
            .get(&self.endpoint)
            .send()
            .await
            .map_err(|source| ApiError::Network { source })?
            .error_for_status()
            .map_err(|source| ApiError::Network { source })?;

        let body = response
            .bytes()
            .await
            .map_err(|source| ApiError::Network { source })?;

        let payload: UserCountResponse =
            serde_json::from_slice(&body).map_err(|source| ApiError::Decode { source })?;

        debug!(
            status = %payload.status,
            total_users = payload.total_users,
            "user count received"
        );
        Ok(payload)
    }
}
