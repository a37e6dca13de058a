//! List news command implementation.

use anyhow::{Context, Result};
use clap::Args;
use colored::Colorize;

use newsdesk_core::traits::NewsApi;
use newsdesk_http::DEFAULT_NEWS_LIMIT;

use crate::cli::ConnectionArgs;
use crate::output;
use crate::session;

#[derive(Args, Debug)]
pub struct ListArgs {
    /// Maximum number of articles to return
    #[arg(long, default_value_t = DEFAULT_NEWS_LIMIT)]
    pub limit: u32,

    /// Print articles as JSON
    #[arg(long)]
    pub json: bool,
}

pub async fn run(connection: &ConnectionArgs, args: ListArgs) -> Result<()> {
    let session = session::require_login(connection)?;

    let articles = session
        .list_news(args.limit)
        .await
        .context("Failed to list news")?;

    if args.json {
        return output::json(&articles);
    }

    if articles.is_empty() {
        eprintln!("{}", "No articles found.".dimmed());
        return Ok(());
    }

    for article in &articles {
        output::article_line(article);
    }

    Ok(())
}
