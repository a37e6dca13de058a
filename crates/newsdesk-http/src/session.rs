//! Session over the client core: login, logout, probe and the news calls.

use std::sync::Arc;

use async_trait::async_trait;
use serde::de::DeserializeOwned;
use tracing::{debug, info, instrument, warn};

use newsdesk_core::traits::{AuthApi, NewsApi};
use newsdesk_core::{
    AccessToken, ClientConfig, CredentialPair, Credentials, Error, NewsArticle, NewsDraft, NewsId,
    RequestDescriptor, Result, TokenStore,
};

use crate::client::ApiClient;
use crate::endpoints::{
    CHECK_TOKEN, LOGIN, LoginRequest, LoginResponse, NEWS_DETAIL, NEWS_LIST, NEWS_UPDATE,
    NEWS_UPLOAD,
};

/// An API session backed by a token store.
///
/// The client core leaves credentials alone when renewal fails. The session
/// is the layer that reacts: whenever a call ends in `AuthExpired` or
/// `AuthRequired`, both halves of the stored pair are cleared, so the store
/// never keeps a dead access token or one without its refresh half.
#[derive(Debug, Clone)]
pub struct HttpSession {
    client: ApiClient,
}

impl HttpSession {
    pub fn new(config: ClientConfig, store: Arc<dyn TokenStore>) -> Result<Self> {
        Ok(Self {
            client: ApiClient::new(config, store)?,
        })
    }

    pub fn from_client(client: ApiClient) -> Self {
        Self { client }
    }

    pub fn client(&self) -> &ApiClient {
        &self.client
    }

    /// Returns true when an access token is stored. Presence alone does not
    /// mean the server will accept it; see [`AuthApi::is_authenticated`].
    pub fn has_credentials(&self) -> bool {
        self.client.store().access_token().is_some()
    }

    /// Renew the access token now.
    pub async fn refresh(&self) -> Result<AccessToken> {
        let result = self.client.renew().await;
        self.drop_dead_credentials(result)
    }

    async fn call<T: DeserializeOwned>(&self, descriptor: RequestDescriptor) -> Result<T> {
        let result = self.client.execute(&descriptor).await;
        self.drop_dead_credentials(result)
    }

    fn drop_dead_credentials<T>(&self, result: Result<T>) -> Result<T> {
        if let Err(ref e) = result
            && e.is_auth()
        {
            warn!(error = %e, kind = %e.kind(), "Session unusable, clearing stored credentials");
            if let Err(clear_err) = self.client.store().clear() {
                warn!(error = %clear_err, "Failed to clear stored credentials");
            }
        }
        result
    }
}

#[async_trait]
impl AuthApi for HttpSession {
    #[instrument(skip(self, credentials), fields(phone = credentials.phone_number()))]
    async fn login(&self, credentials: &Credentials) -> Result<()> {
        info!("Logging in");

        let descriptor = RequestDescriptor::post(LOGIN).json(&LoginRequest {
            phone_number: credentials.phone_number(),
            password: credentials.password(),
        })?;

        let response: LoginResponse = self.client.execute(&descriptor).await?;
        self.client
            .store()
            .store_pair(CredentialPair::new(response.access, response.refresh))?;

        debug!("Session created");
        Ok(())
    }

    fn logout(&self) -> Result<()> {
        info!("Logging out");
        self.client.store().clear()
    }

    #[instrument(skip(self))]
    async fn is_authenticated(&self) -> Result<bool> {
        let probe = RequestDescriptor::get(CHECK_TOKEN).authed();

        match self.call::<serde_json::Value>(probe).await {
            Ok(_) => Ok(true),
            Err(Error::Auth(_)) | Err(Error::Http(_)) => Ok(false),
            Err(e) => Err(e),
        }
    }
}

#[async_trait]
impl NewsApi for HttpSession {
    #[instrument(skip(self))]
    async fn list_news(&self, limit: u32) -> Result<Vec<NewsArticle>> {
        debug!("Listing news");
        self.call(RequestDescriptor::get(NEWS_LIST).query("limit", limit).authed())
            .await
    }

    #[instrument(skip(self), fields(%id))]
    async fn get_news(&self, id: &NewsId) -> Result<NewsArticle> {
        debug!("Getting article");
        self.call(RequestDescriptor::get(NEWS_DETAIL).query("id", id).authed())
            .await
    }

    #[instrument(skip(self, draft), fields(title = %draft.title))]
    async fn create_news(&self, draft: &NewsDraft) -> Result<serde_json::Value> {
        debug!(has_media = draft.media.is_some(), "Creating article");
        self.call(
            RequestDescriptor::post(NEWS_UPLOAD)
                .multipart(draft.to_multipart())
                .authed(),
        )
        .await
    }

    #[instrument(skip(self, draft), fields(%id))]
    async fn update_news(&self, id: &NewsId, draft: &NewsDraft) -> Result<serde_json::Value> {
        debug!(has_media = draft.media.is_some(), "Updating article");
        self.call(
            RequestDescriptor::put(NEWS_UPDATE)
                .query("id", id)
                .multipart(draft.to_multipart())
                .authed(),
        )
        .await
    }
}
