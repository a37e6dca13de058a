//! Session wiring for CLI commands.

pub mod storage;

use std::sync::Arc;

use anyhow::{Context, Result};

use newsdesk_core::{ApiUrl, ClientConfig};
use newsdesk_http::HttpSession;

use crate::cli::ConnectionArgs;

/// Build an API session over the file-backed token store.
pub fn connect(connection: &ConnectionArgs) -> Result<HttpSession> {
    let api_url = ApiUrl::new(&connection.api_url).context("Invalid API URL")?;
    let store = storage::open_store(connection.session_file.as_deref())?;

    tracing::debug!(api_url = %api_url, session_file = %store.path().display(), "Opening session");

    let config = ClientConfig::new(api_url)
        .with_user_agent(concat!("newsdesk-cli/", env!("CARGO_PKG_VERSION")));

    HttpSession::new(config, Arc::new(store))
        .context("Failed to create API client")
}

/// Build a session and fail early when no credentials are stored.
pub fn require_login(connection: &ConnectionArgs) -> Result<HttpSession> {
    let session = connect(connection)?;
    if !session.has_credentials() {
        anyhow::bail!("No active session. Run 'newsdesk login' first.");
    }
    Ok(session)
}
