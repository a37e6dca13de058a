//! API base URL type.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;
use url::Url;

use crate::error::{Error, InvalidInputError};

/// A validated base URL for the API server.
///
/// Bearer tokens travel with every protected call, so the URL must use HTTPS.
/// Plain HTTP is accepted only for localhost.
///
/// # Example
///
/// ```
/// use newsdesk_core::ApiUrl;
///
/// let api = ApiUrl::new("https://news.example.com").unwrap();
/// assert_eq!(
///     api.endpoint("api/v1", "news/list/").unwrap().as_str(),
///     "https://news.example.com/api/v1/news/list/"
/// );
/// ```
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
pub struct ApiUrl(Url);

impl ApiUrl {
    /// Create a new API URL from a string, validating the format.
    pub fn new(s: impl AsRef<str>) -> Result<Self, Error> {
        let s = s.as_ref();
        let url = Url::parse(s).map_err(|e| InvalidInputError::ApiUrl {
            value: s.to_string(),
            reason: e.to_string(),
        })?;

        Self::validate(&url, s)?;
        Ok(Self(url))
    }

    /// Compose `{base}/{prefix}/{path}`, keeping any trailing slash on `path`.
    ///
    /// An empty `prefix` yields `{base}/{path}`.
    pub fn endpoint(&self, prefix: &str, path: &str) -> Result<Url, Error> {
        let base = self.0.as_str().trim_end_matches('/');
        let prefix = prefix.trim_matches('/');
        let path = path.trim_start_matches('/');

        let joined = if prefix.is_empty() {
            format!("{}/{}", base, path)
        } else {
            format!("{}/{}/{}", base, prefix, path)
        };

        Url::parse(&joined).map_err(|e| {
            InvalidInputError::Path {
                path: path.to_string(),
                reason: e.to_string(),
            }
            .into()
        })
    }

    /// Returns the base URL as a string.
    pub fn as_str(&self) -> &str {
        self.0.as_str()
    }

    /// Returns the host string.
    pub fn host(&self) -> Option<&str> {
        self.0.host_str()
    }

    fn validate(url: &Url, original: &str) -> Result<(), Error> {
        if url.cannot_be_a_base() {
            return Err(InvalidInputError::ApiUrl {
                value: original.to_string(),
                reason: "must be an absolute URL".to_string(),
            }
            .into());
        }

        let scheme = url.scheme();
        let is_localhost = url
            .host_str()
            .is_some_and(|h| h == "localhost" || h == "127.0.0.1" || h == "[::1]");

        if scheme != "https" && !(scheme == "http" && is_localhost) {
            return Err(InvalidInputError::ApiUrl {
                value: original.to_string(),
                reason: "must use HTTPS (HTTP allowed only for localhost)".to_string(),
            }
            .into());
        }

        if url.host_str().is_none() {
            return Err(InvalidInputError::ApiUrl {
                value: original.to_string(),
                reason: "must have a host".to_string(),
            }
            .into());
        }

        if url.query().is_some() || url.fragment().is_some() {
            return Err(InvalidInputError::ApiUrl {
                value: original.to_string(),
                reason: "must not carry a query or fragment".to_string(),
            }
            .into());
        }

        Ok(())
    }
}

impl fmt::Display for ApiUrl {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl FromStr for ApiUrl {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::new(s)
    }
}

impl Serialize for ApiUrl {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: serde::Serializer,
    {
        serializer.serialize_str(self.0.as_str())
    }
}

impl<'de> Deserialize<'de> for ApiUrl {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: serde::Deserializer<'de>,
    {
        let s = String::deserialize(deserializer)?;
        ApiUrl::new(&s).map_err(serde::de::Error::custom)
    }
}

impl AsRef<str> for ApiUrl {
    fn as_ref(&self) -> &str {
        self.0.as_str()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn valid_https_url() {
        let api = ApiUrl::new("https://news.example.com").unwrap();
        assert_eq!(api.host(), Some("news.example.com"));
    }

    #[test]
    fn valid_localhost_http() {
        let api = ApiUrl::new("http://127.0.0.1:8000").unwrap();
        assert_eq!(api.host(), Some("127.0.0.1"));
    }

    #[test]
    fn invalid_http_non_localhost() {
        assert!(ApiUrl::new("http://news.example.com").is_err());
    }

    #[test]
    fn invalid_relative_url() {
        assert!(ApiUrl::new("/api/v1").is_err());
    }

    #[test]
    fn rejects_query_string() {
        assert!(ApiUrl::new("https://news.example.com/?debug=1").is_err());
    }

    #[test]
    fn endpoint_handles_trailing_slashes() {
        let api = ApiUrl::new("https://news.example.com/").unwrap();
        assert_eq!(
            api.endpoint("/api/v1/", "/login/").unwrap().as_str(),
            "https://news.example.com/api/v1/login/"
        );
    }

    #[test]
    fn endpoint_keeps_base_path() {
        let api = ApiUrl::new("https://example.com/backend").unwrap();
        assert_eq!(
            api.endpoint("api/v1", "check-token").unwrap().as_str(),
            "https://example.com/backend/api/v1/check-token"
        );
    }

    #[test]
    fn endpoint_without_prefix() {
        let api = ApiUrl::new("https://cdn.example.com").unwrap();
        assert_eq!(
            api.endpoint("", "media/1.png").unwrap().as_str(),
            "https://cdn.example.com/media/1.png"
        );
    }
}
