//! Validated and domain types.

mod api_url;
pub mod news;

pub use api_url::ApiUrl;
pub use news::{MediaFile, NewsArticle, NewsDraft, NewsId};
