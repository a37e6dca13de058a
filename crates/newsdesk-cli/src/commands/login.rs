//! Login command implementation.

use anyhow::{Context, Result};
use clap::Args;
use colored::Colorize;

use newsdesk_core::Credentials;
use newsdesk_core::traits::AuthApi;

use crate::cli::ConnectionArgs;
use crate::output;
use crate::session;

#[derive(Args, Debug)]
pub struct LoginArgs {
    /// Phone number registered with the account
    #[arg(long)]
    pub phone: String,

    /// Account password
    #[arg(long, env = "NEWSDESK_PASSWORD", hide_env_values = true)]
    pub password: String,
}

pub async fn run(connection: &ConnectionArgs, args: LoginArgs) -> Result<()> {
    let session = session::connect(connection)?;
    let credentials = Credentials::new(&args.phone, &args.password);

    eprintln!("{}", "Logging in...".dimmed());

    session
        .login(&credentials)
        .await
        .context("Failed to login")?;

    output::success("Logged in successfully");
    println!();
    output::field("API", session.client().config().base_url.as_str());
    output::field("Phone", credentials.phone_number());

    Ok(())
}
