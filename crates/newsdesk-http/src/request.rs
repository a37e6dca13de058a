//! Turns a [`RequestDescriptor`] into a transport-ready `reqwest::Request`.

use reqwest::header::{CONTENT_TYPE, HeaderValue};
use reqwest::multipart::{Form, Part as FormPart};
use tracing::trace;
use url::Url;

use newsdesk_core::descriptor::PartValue;
use newsdesk_core::error::{InvalidInputError, TransportError};
use newsdesk_core::{
    AccessToken, Body, ClientConfig, Method, MultipartBody, RequestDescriptor, Result,
};

/// Compose the target URL: base (or override) + path + query.
pub(crate) fn target_url(config: &ClientConfig, descriptor: &RequestDescriptor) -> Result<Url> {
    let mut url = match descriptor.base() {
        Some(base) => base.endpoint("", descriptor.path())?,
        None => config
            .base_url
            .endpoint(&config.api_prefix, descriptor.path())?,
    };

    if !descriptor.query_pairs().is_empty() {
        let mut pairs = url.query_pairs_mut();
        for (key, value) in descriptor.query_pairs() {
            pairs.append_pair(key, value);
        }
    }

    Ok(url)
}

/// Build the request for one attempt.
///
/// `token` is attached only when the descriptor requires auth. A missing
/// token is not an error here; the server's 401 drives renewal.
pub(crate) fn build(
    client: &reqwest::Client,
    config: &ClientConfig,
    descriptor: &RequestDescriptor,
    token: Option<&AccessToken>,
) -> Result<reqwest::Request> {
    let url = target_url(config, descriptor)?;
    trace!(%url, "building request");

    let mut builder = client.request(method(descriptor.method()), url);

    match descriptor.body() {
        Some(Body::Json(value)) => {
            let bytes = serde_json::to_vec(value).map_err(|e| InvalidInputError::Body {
                message: e.to_string(),
            })?;
            builder = builder
                .header(CONTENT_TYPE, HeaderValue::from_static("application/json"))
                .body(bytes);
        }
        Some(Body::Multipart(body)) => {
            builder = builder.multipart(form(body)?);
        }
        None => {}
    }

    if descriptor.requires_auth()
        && let Some(token) = token
    {
        builder = builder.bearer_auth(token.as_str());
    }

    builder.build().map_err(|e| {
        TransportError::Request {
            message: e.to_string(),
        }
        .into()
    })
}

fn method(method: Method) -> reqwest::Method {
    match method {
        Method::Get => reqwest::Method::GET,
        Method::Post => reqwest::Method::POST,
        Method::Put => reqwest::Method::PUT,
        Method::Patch => reqwest::Method::PATCH,
        Method::Delete => reqwest::Method::DELETE,
    }
}

/// A fresh form per attempt; `reqwest` forms are consumed on send.
fn form(body: &MultipartBody) -> Result<Form> {
    let mut form = Form::new();

    for part in body.parts() {
        form = match part.value() {
            PartValue::Text(text) => form.text(part.name().to_string(), text.clone()),
            PartValue::File {
                file_name,
                mime_type,
                bytes,
            } => {
                let mut file = FormPart::bytes(bytes.clone()).file_name(file_name.clone());
                if let Some(mime) = mime_type {
                    file = file
                        .mime_str(mime)
                        .map_err(|_| InvalidInputError::MediaType {
                            part: part.name().to_string(),
                            value: mime.clone(),
                        })?;
                }
                form.part(part.name().to_string(), file)
            }
        };
    }

    Ok(form)
}

#[cfg(test)]
mod tests {
    use super::*;
    use newsdesk_core::{ApiUrl, ErrorKind, NewsDraft, Part};
    use reqwest::header::AUTHORIZATION;
    use serde_json::json;

    fn config() -> ClientConfig {
        ClientConfig::new(ApiUrl::new("https://news.example.com").unwrap())
    }

    fn build_with(descriptor: &RequestDescriptor, token: Option<&str>) -> reqwest::Request {
        let token = token.map(AccessToken::new);
        build(&reqwest::Client::new(), &config(), descriptor, token.as_ref()).unwrap()
    }

    #[test]
    fn url_uses_api_prefix_and_query() {
        let descriptor = RequestDescriptor::get("news/detail/").query("id", 42);
        let request = build_with(&descriptor, None);
        assert_eq!(
            request.url().as_str(),
            "https://news.example.com/api/v1/news/detail/?id=42"
        );
        assert_eq!(request.method(), reqwest::Method::GET);
    }

    #[test]
    fn query_values_are_encoded() {
        let descriptor = RequestDescriptor::get("search").query("q", "a b&c");
        let request = build_with(&descriptor, None);
        assert_eq!(request.url().query(), Some("q=a+b%26c"));
    }

    #[test]
    fn no_query_means_no_question_mark() {
        let request = build_with(&RequestDescriptor::get("check-token"), None);
        assert!(!request.url().as_str().contains('?'));
    }

    #[test]
    fn base_override_skips_api_prefix() {
        let descriptor = RequestDescriptor::get("health")
            .base_override(ApiUrl::new("https://status.example.com").unwrap());
        let request = build_with(&descriptor, None);
        assert_eq!(request.url().as_str(), "https://status.example.com/health");
    }

    #[test]
    fn unauthenticated_descriptor_never_carries_authorization() {
        let descriptor = RequestDescriptor::get("news/list/");
        let request = build_with(&descriptor, Some("access-token"));
        assert!(request.headers().get(AUTHORIZATION).is_none());
    }

    #[test]
    fn authenticated_descriptor_carries_bearer() {
        let descriptor = RequestDescriptor::get("news/list/").authed();
        let request = build_with(&descriptor, Some("access-token"));
        assert_eq!(
            request.headers().get(AUTHORIZATION).unwrap(),
            "Bearer access-token"
        );
    }

    #[test]
    fn missing_token_is_not_an_error() {
        let descriptor = RequestDescriptor::get("news/list/").authed();
        let request = build_with(&descriptor, None);
        assert!(request.headers().get(AUTHORIZATION).is_none());
    }

    #[test]
    fn json_body_sets_content_type() {
        let descriptor = RequestDescriptor::post("login/")
            .json(&json!({"phone_number": "1", "password": "p"}))
            .unwrap();
        let request = build_with(&descriptor, None);

        assert_eq!(
            request.headers().get(CONTENT_TYPE).unwrap(),
            "application/json"
        );
        let bytes = request.body().and_then(|b| b.as_bytes()).unwrap();
        let sent: serde_json::Value = serde_json::from_slice(bytes).unwrap();
        assert_eq!(sent, json!({"phone_number": "1", "password": "p"}));
    }

    #[test]
    fn multipart_body_uses_form_content_type() {
        let descriptor = RequestDescriptor::post("news/upload/")
            .multipart(NewsDraft::new("Title", "Body").to_multipart())
            .authed();
        let request = build_with(&descriptor, Some("t"));

        let content_type = request
            .headers()
            .get(CONTENT_TYPE)
            .unwrap()
            .to_str()
            .unwrap();
        assert!(content_type.starts_with("multipart/form-data; boundary="));
    }

    #[test]
    fn bad_media_type_is_invalid_input() {
        let body = MultipartBody::new()
            .part(Part::file("media", "x.bin", vec![1]).with_mime_type("not a mime"));
        let descriptor = RequestDescriptor::post("news/upload/").multipart(body);

        let err = build(&reqwest::Client::new(), &config(), &descriptor, None).unwrap_err();
        assert_eq!(err.kind(), ErrorKind::InvalidInput);
    }
}
