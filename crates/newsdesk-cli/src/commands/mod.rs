//! Subcommand implementations.

pub mod login;
pub mod logout;
pub mod news;
pub mod refresh_token;
pub mod whoami;
