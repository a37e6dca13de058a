//! Client core: the single entry point every API wrapper goes through.

use std::sync::Arc;

use reqwest::StatusCode;
use serde::de::DeserializeOwned;
use tokio::sync::Mutex;
use tracing::{debug, instrument, trace, warn};

use newsdesk_core::error::{AuthError, HttpError, TransportError};
use newsdesk_core::{AccessToken, ClientConfig, Error, RequestDescriptor, Result, TokenStore};

use crate::cancel;
use crate::endpoints::ErrorBody;
use crate::request;

/// HTTP client for the newsdesk API.
///
/// Cheap to clone; clones share the connection pool, the token store and the
/// renewal gate.
#[derive(Debug, Clone)]
pub struct ApiClient {
    pub(crate) inner: Arc<ClientInner>,
}

#[derive(Debug)]
pub(crate) struct ClientInner {
    pub(crate) http: reqwest::Client,
    pub(crate) config: ClientConfig,
    pub(crate) store: Arc<dyn TokenStore>,
    /// Serializes renewals so concurrent 401s share one exchange.
    pub(crate) renewal: Mutex<()>,
}

/// Status and body of one completed attempt.
pub(crate) struct RawResponse {
    pub(crate) status: StatusCode,
    pub(crate) body: Vec<u8>,
}

impl ApiClient {
    /// Create a client over an injected token store.
    pub fn new(config: ClientConfig, store: Arc<dyn TokenStore>) -> Result<Self> {
        let http = reqwest::Client::builder()
            .user_agent(config.user_agent.clone())
            .build()
            .map_err(|e| TransportError::Request {
                message: format!("failed to build HTTP client: {}", e),
            })?;

        Ok(Self {
            inner: Arc::new(ClientInner {
                http,
                config,
                store,
                renewal: Mutex::new(()),
            }),
        })
    }

    pub fn config(&self) -> &ClientConfig {
        &self.inner.config
    }

    pub fn store(&self) -> &Arc<dyn TokenStore> {
        &self.inner.store
    }

    /// Execute a descriptor and decode the JSON response.
    ///
    /// A 401 on a protected call triggers one renewal and one retry; a second
    /// 401 is reported as [`AuthError::Expired`]. Every other failure is
    /// returned as-is without retrying.
    #[instrument(skip(self, descriptor), fields(method = %descriptor.method(), path = descriptor.path()))]
    pub async fn execute<T>(&self, descriptor: &RequestDescriptor) -> Result<T>
    where
        T: DeserializeOwned,
    {
        let token = if descriptor.requires_auth() {
            self.inner.store.access_token()
        } else {
            None
        };
        debug!(has_token = token.is_some(), "Sending request");

        let response = self.attempt(descriptor, token.as_ref()).await?;

        if response.status != StatusCode::UNAUTHORIZED || !descriptor.requires_auth() {
            return decode(response);
        }

        debug!("Access token rejected, renewing");
        let fresh = self.renew_after_rejection(token.as_ref()).await?;

        let retried = self.attempt(descriptor, Some(&fresh)).await?;
        if retried.status == StatusCode::UNAUTHORIZED {
            warn!("Request rejected again after renewal");
            return Err(AuthError::expired(Some(401), "rejected again after renewal").into());
        }

        decode(retried)
    }

    /// One network round trip, under the descriptor's deadline.
    pub(crate) async fn attempt(
        &self,
        descriptor: &RequestDescriptor,
        token: Option<&AccessToken>,
    ) -> Result<RawResponse> {
        let config = &self.inner.config;
        let request = request::build(&self.inner.http, config, descriptor, token)?;
        let deadline = cancel::deadline(descriptor.timeout_policy(), config.read_timeout);

        cancel::guard(deadline, async {
            let response = self
                .inner
                .http
                .execute(request)
                .await
                .map_err(transport_error)?;

            let status = response.status();
            let body = response
                .bytes()
                .await
                .map_err(|e| TransportError::Body {
                    message: e.to_string(),
                })?
                .to_vec();

            trace!(status = %status, len = body.len(), "Response received");
            Ok::<_, Error>(RawResponse { status, body })
        })
        .await?
    }
}

/// Map a final response to the caller's outcome.
pub(crate) fn decode<T: DeserializeOwned>(response: RawResponse) -> Result<T> {
    let status = response.status;

    if !status.is_success() {
        return Err(http_error(&response).into());
    }

    serde_json::from_slice(&response.body).map_err(|e| Error::Decode {
        status: status.as_u16(),
        message: e.to_string(),
    })
}

fn http_error(response: &RawResponse) -> HttpError {
    let body: ErrorBody = serde_json::from_slice(&response.body).unwrap_or_default();
    HttpError::new(
        response.status.as_u16(),
        body.error.or(body.code),
        body.message.or(body.detail),
    )
}

pub(crate) fn transport_error(err: reqwest::Error) -> Error {
    let message = err.to_string();
    if err.is_connect() {
        TransportError::Connection { message }.into()
    } else if err.is_body() || err.is_decode() {
        TransportError::Body { message }.into()
    } else {
        TransportError::Request { message }.into()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use newsdesk_core::{ApiUrl, ErrorKind, MemoryTokenStore};

    fn raw(status: u16, body: &str) -> RawResponse {
        RawResponse {
            status: StatusCode::from_u16(status).unwrap(),
            body: body.as_bytes().to_vec(),
        }
    }

    #[test]
    fn client_creation() {
        let config = ClientConfig::new(ApiUrl::new("https://news.example.com").unwrap());
        let client = ApiClient::new(config.clone(), Arc::new(MemoryTokenStore::new())).unwrap();
        assert_eq!(client.config(), &config);
    }

    #[test]
    fn decode_success_body() {
        let value: Vec<u32> = decode(raw(200, "[1,2,3]")).unwrap();
        assert_eq!(value, vec![1, 2, 3]);
    }

    #[test]
    fn decode_failure_is_an_outcome() {
        let err = decode::<serde_json::Value>(raw(200, "<html>")).unwrap_err();
        assert_eq!(err.kind(), ErrorKind::Decode);
        assert_eq!(err.status(), Some(200));
    }

    #[test]
    fn non_success_carries_status_and_detail() {
        let err =
            decode::<serde_json::Value>(raw(404, r#"{"detail": "Not found."}"#)).unwrap_err();
        assert_eq!(err.kind(), ErrorKind::Http);
        assert_eq!(err.status(), Some(404));
        assert!(err.to_string().contains("Not found."));
    }

    #[test]
    fn non_json_error_body_still_reports_status() {
        let err = decode::<serde_json::Value>(raw(502, "Bad Gateway")).unwrap_err();
        assert_eq!(err.status(), Some(502));
    }
}
