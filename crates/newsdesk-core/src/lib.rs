//! newsdesk-core - Core types and traits for the newsdesk API client.
//!
//! This crate is transport-free. It defines what a call looks like
//! ([`RequestDescriptor`]), where credentials live ([`TokenStore`]), how
//! failures are classified ([`Error`]) and the service traits the HTTP
//! pipeline in `newsdesk-http` implements.

pub mod config;
pub mod credentials;
pub mod descriptor;
pub mod error;
pub mod store;
pub mod tokens;
pub mod traits;
pub mod types;

pub use config::ClientConfig;
pub use credentials::Credentials;
pub use descriptor::{Body, Method, MultipartBody, Part, RequestDescriptor, TimeoutPolicy};
pub use error::{Error, ErrorKind};
pub use store::{FileTokenStore, MemoryTokenStore, TokenStore};
pub use tokens::{AccessToken, CredentialPair, RefreshToken};
pub use traits::{AuthApi, NewsApi};
pub use types::{ApiUrl, MediaFile, NewsArticle, NewsDraft, NewsId};

/// Result type alias using the crate's Error type.
pub type Result<T> = std::result::Result<T, Error>;
