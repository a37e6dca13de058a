//! Logout command implementation.

use anyhow::{Context, Result};
use clap::Args;

use newsdesk_core::traits::AuthApi;

use crate::cli::ConnectionArgs;
use crate::output;
use crate::session;

#[derive(Args, Debug)]
pub struct LogoutArgs {}

pub fn run(connection: &ConnectionArgs, _args: LogoutArgs) -> Result<()> {
    let session = session::connect(connection)?;

    session.logout().context("Failed to clear session")?;

    output::success("Logged out");
    Ok(())
}
