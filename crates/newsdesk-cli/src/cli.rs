//! CLI argument definitions.

use std::path::PathBuf;

use clap::{Args, Parser, Subcommand};

use crate::commands::news::NewsCommand;
use crate::commands::{login, logout, refresh_token, whoami};

/// Command-line client for the newsdesk API.
#[derive(Parser, Debug)]
#[command(name = "newsdesk")]
#[command(author, version, about, long_about = None)]
pub struct Cli {
    /// Increase verbosity (-v, -vv, -vvv)
    #[arg(short, long, action = clap::ArgAction::Count, global = true)]
    pub verbose: u8,

    /// Output logs as JSON
    #[arg(long, global = true)]
    pub json_logs: bool,

    #[command(flatten)]
    pub connection: ConnectionArgs,

    #[command(subcommand)]
    pub command: Commands,
}

/// Where the API lives and where credentials are kept.
#[derive(Args, Debug, Clone)]
pub struct ConnectionArgs {
    /// API base URL
    #[arg(
        long,
        global = true,
        env = "NEWSDESK_API_URL",
        default_value = "http://localhost:8000"
    )]
    pub api_url: String,

    /// Session file (defaults to the platform data directory)
    #[arg(long, global = true, env = "NEWSDESK_SESSION_FILE")]
    pub session_file: Option<PathBuf>,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Log in and store the session tokens
    Login(login::LoginArgs),

    /// Forget the stored session tokens
    Logout(logout::LogoutArgs),

    /// Check whether the stored session is accepted by the server
    Whoami(whoami::WhoamiArgs),

    /// Renew the access token now
    RefreshToken(refresh_token::RefreshTokenArgs),

    /// News article operations
    News(NewsCommand),
}
