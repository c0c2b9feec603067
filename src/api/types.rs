use serde::Deserialize;

/// Payload of `GET /totalUser`.
///
/// Both fields are optional on the wire: the endpoint has been observed to
/// omit them, in which case they fall back to `""` / `0` instead of failing
/// the decode. Unknown keys are ignored.
#[derive(Debug, Clone, PartialEq, Eq, Default, Deserialize)]
#[serde(default)]
pub struct UserCountResponse {
    /// Service-reported status string (for example `"ok"`). Not interpreted.
    pub status: String,
    /// Total number of registered users.
    pub total_users: u64,
}
