//! Authentication wire types.

use serde::{Deserialize, Serialize};

/// Login request body.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LoginRequest {
    pub email: String,
    pub password: String,
}

/// Successful login response.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct LoginResponse {
    /// Bearer token, persisted as-is
    pub access_token: String,
    /// Lifetime in seconds, informational only (the token's own `exp` claim
    /// is what expiry checks read)
    #[serde(default)]
    pub expires_in: Option<i64>,
}
