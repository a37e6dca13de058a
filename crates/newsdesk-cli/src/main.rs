//! newsdesk - command-line client for the newsdesk API.
//!
//! A thin wrapper over `newsdesk-http`, useful for exercising the API by hand
//! and for scripting against it.

mod cli;
mod commands;
mod output;
mod session;

use anyhow::Result;
use clap::Parser;
use tracing_subscriber::{EnvFilter, fmt, prelude::*};

use cli::{Cli, Commands};
use commands::{login, logout, news, refresh_token, whoami};

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();

    init_logging(cli.verbose, cli.json_logs);

    let connection = cli.connection;
    match cli.command {
        Commands::Login(args) => login::run(&connection, args).await,
        Commands::Logout(args) => logout::run(&connection, args),
        Commands::Whoami(args) => whoami::run(&connection, args).await,
        Commands::RefreshToken(args) => refresh_token::run(&connection, args).await,
        Commands::News(cmd) => news::handle(&connection, cmd).await,
    }
}

fn init_logging(verbosity: u8, json: bool) {
    let filter = match verbosity {
        0 => "warn",
        1 => "info",
        2 => "debug",
        _ => "trace",
    };

    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(filter));

    if json {
        tracing_subscriber::registry()
            .with(filter)
            .with(fmt::layer().json().with_writer(std::io::stderr))
            .init();
    } else {
        tracing_subscriber::registry()
            .with(filter)
            .with(fmt::layer().with_target(false).with_writer(std::io::stderr))
            .init();
    }
}
