//! Whoami command implementation.

use anyhow::{Context, Result};
use clap::Args;
use serde_json::json;

use newsdesk_core::traits::AuthApi;

use crate::cli::ConnectionArgs;
use crate::output;
use crate::session;

#[derive(Args, Debug)]
pub struct WhoamiArgs {
    /// Print the result as JSON
    #[arg(long)]
    pub json: bool,
}

pub async fn run(connection: &ConnectionArgs, args: WhoamiArgs) -> Result<()> {
    let session = session::require_login(connection)?;

    let authenticated = session
        .is_authenticated()
        .await
        .context("Failed to check session")?;

    if args.json {
        return output::json(&json!({
            "api_url": session.client().config().base_url.as_str(),
            "authenticated": authenticated,
        }));
    }

    output::field("API", session.client().config().base_url.as_str());
    if authenticated {
        output::success("Session is valid");
    } else {
        output::error("Session was rejected. Run 'newsdesk login' again.");
    }

    Ok(())
}
