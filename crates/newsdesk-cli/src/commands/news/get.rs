//! Get news command implementation.

use anyhow::{Context, Result};
use clap::Args;

use newsdesk_core::NewsId;
use newsdesk_core::traits::NewsApi;

use crate::cli::ConnectionArgs;
use crate::output;
use crate::session;

#[derive(Args, Debug)]
pub struct GetArgs {
    /// Article id
    pub id: String,

    /// Print the article as JSON
    #[arg(long)]
    pub json: bool,
}

pub async fn run(connection: &ConnectionArgs, args: GetArgs) -> Result<()> {
    let session = session::require_login(connection)?;

    let article = session
        .get_news(&NewsId::new(args.id))
        .await
        .context("Failed to fetch article")?;

    if args.json {
        output::json_pretty(&article)
    } else {
        output::article(&article);
        Ok(())
    }
}
