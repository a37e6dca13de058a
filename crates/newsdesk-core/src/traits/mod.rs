//! Service traits implemented by the HTTP session.

use async_trait::async_trait;

use crate::types::{NewsArticle, NewsDraft, NewsId};
use crate::{Credentials, Result};

/// Login, logout and the derived authenticated flag.
#[async_trait]
pub trait AuthApi: Send + Sync {
    /// Exchange credentials for a new pair and store it.
    async fn login(&self, credentials: &Credentials) -> Result<()>;

    /// Drop both halves of the stored pair.
    fn logout(&self) -> Result<()>;

    /// Probe a protected endpoint.
    ///
    /// Returns `Ok(false)` when the server refuses the session and `Err` only
    /// when the probe could not be answered at all.
    async fn is_authenticated(&self) -> Result<bool>;
}

/// News operations. All of them require authentication.
#[async_trait]
pub trait NewsApi: Send + Sync {
    /// List articles, at most `limit` of them.
    async fn list_news(&self, limit: u32) -> Result<Vec<NewsArticle>>;

    /// Fetch one article.
    async fn get_news(&self, id: &NewsId) -> Result<NewsArticle>;

    /// Create an article. Returns the server's acknowledgement as raw JSON.
    async fn create_news(&self, draft: &NewsDraft) -> Result<serde_json::Value>;

    /// Replace an article's content. Returns the server's acknowledgement as raw JSON.
    async fn update_news(&self, id: &NewsId, draft: &NewsDraft) -> Result<serde_json::Value>;
}
