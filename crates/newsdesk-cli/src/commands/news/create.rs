//! Create news command implementation.

use anyhow::{Context, Result};
use clap::Args;
use colored::Colorize;

use newsdesk_core::traits::NewsApi;

use super::DraftArgs;
use crate::cli::ConnectionArgs;
use crate::output;
use crate::session;

#[derive(Args, Debug)]
pub struct CreateArgs {
    #[command(flatten)]
    pub draft: DraftArgs,
}

pub async fn run(connection: &ConnectionArgs, args: CreateArgs) -> Result<()> {
    let draft = args.draft.to_draft()?;
    let session = session::require_login(connection)?;

    eprintln!("{}", "Uploading article...".dimmed());

    let response = session
        .create_news(&draft)
        .await
        .context("Failed to create article")?;

    if args.draft.json {
        return output::json(&response);
    }

    output::success("Article created");
    if let Some(id) = response.get("id") {
        output::field("ID", &id.to_string());
    }

    Ok(())
}
