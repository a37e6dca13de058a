//! Endpoint paths and wire types.

use serde::{Deserialize, Serialize};

// ============================================================================
// Paths (relative to the API prefix)
// ============================================================================

pub(crate) const LOGIN: &str = "login/";

pub(crate) const CHECK_TOKEN: &str = "check-token";

pub(crate) const NEWS_LIST: &str = "news/list/";

pub(crate) const NEWS_DETAIL: &str = "news/detail/";

pub(crate) const NEWS_UPLOAD: &str = "news/upload/";

pub(crate) const NEWS_UPDATE: &str = "news/update/";

/// Page size requested when listing news.
pub const DEFAULT_NEWS_LIMIT: u32 = 100;

// ============================================================================
// Request/Response Types
// ============================================================================

/// Request body for login.
#[derive(Serialize)]
pub(crate) struct LoginRequest<'a> {
    pub phone_number: &'a str,
    pub password: &'a str,
}

/// Response from login.
#[derive(Deserialize)]
pub(crate) struct LoginResponse {
    pub access: String,
    pub refresh: String,
}

/// Request body for token renewal.
#[derive(Serialize)]
pub(crate) struct RefreshRequest<'a> {
    pub refresh: &'a str,
}

/// Response from token renewal. The server may rotate the refresh token.
#[derive(Deserialize)]
pub(crate) struct RefreshResponse {
    #[serde(default)]
    pub access: Option<String>,
    #[serde(default)]
    pub refresh: Option<String>,
}

/// Error body shapes the API emits on non-2xx responses.
#[derive(Debug, Default, Deserialize)]
pub(crate) struct ErrorBody {
    #[serde(default)]
    pub error: Option<String>,
    #[serde(default)]
    pub code: Option<String>,
    #[serde(default)]
    pub message: Option<String>,
    #[serde(default)]
    pub detail: Option<String>,
}
