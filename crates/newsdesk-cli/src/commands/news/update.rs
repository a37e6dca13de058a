//! Update news command implementation.

use anyhow::{Context, Result};
use clap::Args;
use colored::Colorize;

use newsdesk_core::NewsId;
use newsdesk_core::traits::NewsApi;

use super::DraftArgs;
use crate::cli::ConnectionArgs;
use crate::output;
use crate::session;

#[derive(Args, Debug)]
pub struct UpdateArgs {
    /// Article id
    pub id: String,

    #[command(flatten)]
    pub draft: DraftArgs,
}

pub async fn run(connection: &ConnectionArgs, args: UpdateArgs) -> Result<()> {
    let draft = args.draft.to_draft()?;
    let session = session::require_login(connection)?;
    let id = NewsId::new(args.id);

    eprintln!("{}", "Uploading changes...".dimmed());

    let response = session
        .update_news(&id, &draft)
        .await
        .context("Failed to update article")?;

    if args.draft.json {
        return output::json(&response);
    }

    output::success("Article updated");
    output::field("ID", id.as_str());

    Ok(())
}
