//! newsdesk-http - Resilient HTTP request pipeline for the newsdesk API.
//!
//! All calls flow through [`ApiClient::execute`]: the descriptor is turned
//! into a request, GETs are put under a deadline, and a 401 on a protected
//! call is answered with one token renewal and one retry. The caller awaits a
//! single outcome and never sees the second attempt.
//!
//! # Example
//!
//! ```no_run
//! use std::sync::Arc;
//! use newsdesk_core::{ApiUrl, ClientConfig, Credentials, MemoryTokenStore};
//! use newsdesk_core::traits::{AuthApi, NewsApi};
//! use newsdesk_http::HttpSession;
//!
//! # async fn example() -> Result<(), newsdesk_core::Error> {
//! let config = ClientConfig::new(ApiUrl::new("https://news.example.com")?);
//! let session = HttpSession::new(config, Arc::new(MemoryTokenStore::new()))?;
//!
//! session.login(&Credentials::new("+15550100", "hunter2")).await?;
//! for article in session.list_news(100).await? {
//!     println!("{}: {}", article.id, article.title);
//! }
//! # Ok(())
//! # }
//! ```

mod cancel;
mod client;
mod endpoints;
mod renewal;
mod request;
mod session;

pub use client::ApiClient;
pub use endpoints::DEFAULT_NEWS_LIMIT;
pub use session::HttpSession;
