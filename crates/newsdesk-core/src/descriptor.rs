//! Request descriptors: the immutable description of one outbound call.
//!
//! A [`RequestDescriptor`] is built once with the consuming builder methods
//! and then only read. The HTTP pipeline may send it twice (once more after
//! a token renewal), so bodies are plain data, not one-shot transport
//! objects.

use std::fmt;

use serde::Serialize;

use crate::error::{Error, InvalidInputError};
use crate::types::ApiUrl;

/// HTTP method of a descriptor.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Method {
    Get,
    Post,
    Put,
    Patch,
    Delete,
}

impl Method {
    pub fn as_str(&self) -> &'static str {
        match self {
            Method::Get => "GET",
            Method::Post => "POST",
            Method::Put => "PUT",
            Method::Patch => "PATCH",
            Method::Delete => "DELETE",
        }
    }
}

impl fmt::Display for Method {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Whether a call is cancelled when it outlives the configured read timeout.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TimeoutPolicy {
    /// Cancel after the client's read timeout.
    Bounded,
    /// Never cancel automatically.
    Unbounded,
}

impl TimeoutPolicy {
    /// Reads are bounded; writes may carry large uploads and are not.
    pub fn for_method(method: Method) -> Self {
        match method {
            Method::Get => TimeoutPolicy::Bounded,
            _ => TimeoutPolicy::Unbounded,
        }
    }
}

/// Request payload.
#[derive(Debug, Clone, PartialEq)]
pub enum Body {
    /// Serialized as JSON with `Content-Type: application/json`.
    Json(serde_json::Value),
    /// Sent as `multipart/form-data`; the transport picks the boundary.
    Multipart(MultipartBody),
}

/// Value of a single multipart part.
#[derive(Clone, PartialEq, Eq)]
pub enum PartValue {
    Text(String),
    File {
        file_name: String,
        mime_type: Option<String>,
        bytes: Vec<u8>,
    },
}

impl fmt::Debug for PartValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            PartValue::Text(text) => f.debug_tuple("Text").field(text).finish(),
            PartValue::File {
                file_name,
                mime_type,
                bytes,
            } => f
                .debug_struct("File")
                .field("file_name", file_name)
                .field("mime_type", mime_type)
                .field("len", &bytes.len())
                .finish(),
        }
    }
}

/// One named field of a multipart form.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Part {
    name: String,
    value: PartValue,
}

impl Part {
    pub fn text(name: impl Into<String>, value: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            value: PartValue::Text(value.into()),
        }
    }

    pub fn file(name: impl Into<String>, file_name: impl Into<String>, bytes: Vec<u8>) -> Self {
        Self {
            name: name.into(),
            value: PartValue::File {
                file_name: file_name.into(),
                mime_type: None,
                bytes,
            },
        }
    }

    /// Set the media type of a file part. No effect on text parts.
    pub fn with_mime_type(mut self, mime: impl Into<String>) -> Self {
        if let PartValue::File {
            ref mut mime_type, ..
        } = self.value
        {
            *mime_type = Some(mime.into());
        }
        self
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn value(&self) -> &PartValue {
        &self.value
    }
}

/// An ordered multipart form.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct MultipartBody {
    parts: Vec<Part>,
}

impl MultipartBody {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn text(self, name: impl Into<String>, value: impl Into<String>) -> Self {
        self.part(Part::text(name, value))
    }

    pub fn part(mut self, part: Part) -> Self {
        self.parts.push(part);
        self
    }

    pub fn parts(&self) -> &[Part] {
        &self.parts
    }
}

/// The immutable specification of one outbound call.
///
/// # Example
///
/// ```
/// use newsdesk_core::{Method, RequestDescriptor, TimeoutPolicy};
///
/// let descriptor = RequestDescriptor::get("news/list/")
///     .query("limit", 100)
///     .authed();
///
/// assert_eq!(descriptor.method(), Method::Get);
/// assert_eq!(descriptor.query_pairs()[0], ("limit".to_string(), "100".to_string()));
/// assert_eq!(descriptor.timeout_policy(), TimeoutPolicy::Bounded);
/// assert!(descriptor.requires_auth());
/// ```
#[derive(Debug, Clone, PartialEq)]
pub struct RequestDescriptor {
    method: Method,
    path: String,
    query: Vec<(String, String)>,
    body: Option<Body>,
    requires_auth: bool,
    base_override: Option<ApiUrl>,
    timeout: TimeoutPolicy,
}

impl RequestDescriptor {
    /// Start a descriptor. The timeout policy defaults from the method.
    pub fn new(method: Method, path: impl Into<String>) -> Self {
        Self {
            method,
            path: path.into(),
            query: Vec::new(),
            body: None,
            requires_auth: false,
            base_override: None,
            timeout: TimeoutPolicy::for_method(method),
        }
    }

    pub fn get(path: impl Into<String>) -> Self {
        Self::new(Method::Get, path)
    }

    pub fn post(path: impl Into<String>) -> Self {
        Self::new(Method::Post, path)
    }

    pub fn put(path: impl Into<String>) -> Self {
        Self::new(Method::Put, path)
    }

    pub fn patch(path: impl Into<String>) -> Self {
        Self::new(Method::Patch, path)
    }

    pub fn delete(path: impl Into<String>) -> Self {
        Self::new(Method::Delete, path)
    }

    /// Append a query parameter. Repeated keys are kept in order.
    pub fn query(mut self, key: impl Into<String>, value: impl fmt::Display) -> Self {
        self.query.push((key.into(), value.to_string()));
        self
    }

    /// Attach a JSON body.
    pub fn json<T: Serialize + ?Sized>(mut self, body: &T) -> Result<Self, Error> {
        let value = serde_json::to_value(body).map_err(|e| InvalidInputError::Body {
            message: e.to_string(),
        })?;
        self.body = Some(Body::Json(value));
        Ok(self)
    }

    /// Attach a multipart body.
    pub fn multipart(mut self, body: MultipartBody) -> Self {
        self.body = Some(Body::Multipart(body));
        self
    }

    /// Mark the call as requiring the bearer credential.
    pub fn authed(self) -> Self {
        self.with_auth(true)
    }

    pub fn with_auth(mut self, requires_auth: bool) -> Self {
        self.requires_auth = requires_auth;
        self
    }

    /// Send to `{base}/{path}` instead of the configured API root.
    pub fn base_override(mut self, base: ApiUrl) -> Self {
        self.base_override = Some(base);
        self
    }

    pub fn timeout_policy(&self) -> TimeoutPolicy {
        self.timeout
    }

    /// Override the method-derived timeout policy.
    pub fn with_timeout_policy(mut self, policy: TimeoutPolicy) -> Self {
        self.timeout = policy;
        self
    }

    pub fn method(&self) -> Method {
        self.method
    }

    pub fn path(&self) -> &str {
        &self.path
    }

    pub fn query_pairs(&self) -> &[(String, String)] {
        &self.query
    }

    pub fn body(&self) -> Option<&Body> {
        self.body.as_ref()
    }

    pub fn requires_auth(&self) -> bool {
        self.requires_auth
    }

    pub fn base(&self) -> Option<&ApiUrl> {
        self.base_override.as_ref()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn only_get_is_bounded_by_default() {
        assert_eq!(
            RequestDescriptor::get("a").timeout_policy(),
            TimeoutPolicy::Bounded
        );
        for descriptor in [
            RequestDescriptor::post("a"),
            RequestDescriptor::put("a"),
            RequestDescriptor::patch("a"),
            RequestDescriptor::delete("a"),
        ] {
            assert_eq!(descriptor.timeout_policy(), TimeoutPolicy::Unbounded);
        }
    }

    #[test]
    fn timeout_policy_can_be_overridden() {
        let descriptor =
            RequestDescriptor::post("search/").with_timeout_policy(TimeoutPolicy::Bounded);
        assert_eq!(descriptor.timeout_policy(), TimeoutPolicy::Bounded);
    }

    #[test]
    fn query_values_are_coerced_to_strings() {
        let descriptor = RequestDescriptor::get("news/list/")
            .query("limit", 100)
            .query("published", true)
            .query("ratio", 0.5)
            .query("tag", "a")
            .query("tag", "b");

        let pairs: Vec<(&str, &str)> = descriptor
            .query_pairs()
            .iter()
            .map(|(k, v)| (k.as_str(), v.as_str()))
            .collect();
        assert_eq!(
            pairs,
            vec![
                ("limit", "100"),
                ("published", "true"),
                ("ratio", "0.5"),
                ("tag", "a"),
                ("tag", "b"),
            ]
        );
    }

    #[test]
    fn json_body_is_captured_as_value() {
        let descriptor = RequestDescriptor::post("login/")
            .json(&json!({"phone_number": "1", "password": "p"}))
            .unwrap();
        assert_eq!(
            descriptor.body(),
            Some(&Body::Json(json!({"phone_number": "1", "password": "p"})))
        );
        assert!(!descriptor.requires_auth());
    }

    #[test]
    fn mime_type_ignored_on_text_part() {
        let part = Part::text("title", "x").with_mime_type("text/plain");
        assert_eq!(part.value(), &PartValue::Text("x".into()));
    }

    #[test]
    fn file_part_debug_omits_bytes() {
        let part = Part::file("media", "a.bin", vec![1, 2, 3, 4]);
        let debug = format!("{:?}", part);
        assert!(debug.contains("len: 4"));
        assert!(!debug.contains("[1, 2, 3, 4]"));
    }
}
