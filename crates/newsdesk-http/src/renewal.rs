//! Access token renewal.
//!
//! Renewals are single-flight per client: callers queue on the renewal gate,
//! and a caller that finds a newer access token than the one the server
//! rejected reuses it instead of exchanging the refresh token again.

use tracing::{debug, info, instrument, warn};

use newsdesk_core::error::AuthError;
use newsdesk_core::{AccessToken, CredentialPair, RefreshToken, RequestDescriptor, Result};

use crate::client::ApiClient;
use crate::endpoints::{RefreshRequest, RefreshResponse};

impl ApiClient {
    /// Exchange the stored refresh token for a new access token.
    ///
    /// The new access token (and a rotated refresh token, if the server sent
    /// one) is written to the token store. On failure the stored credentials
    /// are left untouched.
    ///
    /// # Errors
    ///
    /// [`AuthError::Required`] when no refresh token is stored, otherwise
    /// [`AuthError::Expired`] for any failed exchange.
    pub async fn renew(&self) -> Result<AccessToken> {
        let _turn = self.inner.renewal.lock().await;
        self.exchange().await
    }

    /// Renew after the server rejected `rejected`, reusing a concurrent renewal.
    pub(crate) async fn renew_after_rejection(
        &self,
        rejected: Option<&AccessToken>,
    ) -> Result<AccessToken> {
        let _turn = self.inner.renewal.lock().await;

        if let Some(current) = self.inner.store.access_token()
            && Some(&current) != rejected
        {
            debug!("Access token already renewed by a concurrent call");
            return Ok(current);
        }

        self.exchange().await
    }

    #[instrument(skip(self))]
    async fn exchange(&self) -> Result<AccessToken> {
        let Some(refresh) = self.inner.store.refresh_token() else {
            warn!("No refresh token available, skipping renewal");
            return Err(AuthError::Required.into());
        };

        info!("Renewing access token");

        let descriptor = RequestDescriptor::post(self.inner.config.refresh_path.as_str())
            .json(&RefreshRequest {
                refresh: refresh.as_str(),
            })?;

        let response = match self.attempt(&descriptor, None).await {
            Ok(response) => response,
            Err(e) => {
                warn!(error = %e, "Renewal request failed");
                return Err(AuthError::expired(None, format!("renewal request failed: {}", e)).into());
            }
        };

        let status = response.status.as_u16();
        if !response.status.is_success() {
            warn!(status, "Refresh token rejected");
            return Err(AuthError::expired(Some(status), "refresh token rejected").into());
        }

        let body: RefreshResponse = serde_json::from_slice(&response.body).map_err(|e| {
            AuthError::expired(Some(status), format!("malformed renewal response: {}", e))
        })?;

        let access = body
            .access
            .filter(|token| !token.is_empty())
            .map(AccessToken::new)
            .ok_or_else(|| AuthError::expired(Some(status), "renewal response has no access token"))?;

        match body.refresh.filter(|token| !token.is_empty()) {
            Some(rotated) => self.inner.store.store_pair(CredentialPair {
                access: access.clone(),
                refresh: RefreshToken::new(rotated),
            })?,
            None => self.inner.store.store_access(access.clone())?,
        }

        debug!("Access token renewed");
        Ok(access)
    }
}
