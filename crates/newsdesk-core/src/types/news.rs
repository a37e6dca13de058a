//! News domain types.

use std::fmt;

use serde::{Deserialize, Deserializer, Serialize, Serializer};

use crate::descriptor::{MultipartBody, Part};

/// Multipart field carrying the article title.
pub const FIELD_TITLE: &str = "title";
/// Multipart field carrying the article body text.
pub const FIELD_TEXT: &str = "text";
/// Multipart field carrying the article image.
pub const FIELD_MEDIA: &str = "media";

/// Identifier of a news article.
///
/// The server emits ids as integers or strings depending on the endpoint;
/// both are accepted and kept as their textual form.
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
pub struct NewsId(String);

impl NewsId {
    pub fn new(id: impl Into<String>) -> Self {
        Self(id.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for NewsId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl Serialize for NewsId {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(&self.0)
    }
}

impl<'de> Deserialize<'de> for NewsId {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        #[derive(Deserialize)]
        #[serde(untagged)]
        enum Repr {
            Int(i64),
            Str(String),
        }

        Ok(match Repr::deserialize(deserializer)? {
            Repr::Int(n) => NewsId(n.to_string()),
            Repr::Str(s) => NewsId(s),
        })
    }
}

/// A news article as returned by the list and detail endpoints.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct NewsArticle {
    pub id: NewsId,
    pub title: String,
    #[serde(default)]
    pub text: String,
    /// URL of the article image, when one was uploaded.
    #[serde(default)]
    pub image: Option<String>,
}

/// An image attached to a draft.
#[derive(Clone, PartialEq, Eq)]
pub struct MediaFile {
    pub file_name: String,
    pub mime_type: Option<String>,
    pub bytes: Vec<u8>,
}

impl MediaFile {
    pub fn new(file_name: impl Into<String>, bytes: Vec<u8>) -> Self {
        Self {
            file_name: file_name.into(),
            mime_type: None,
            bytes,
        }
    }

    pub fn with_mime_type(mut self, mime_type: impl Into<String>) -> Self {
        self.mime_type = Some(mime_type.into());
        self
    }
}

impl fmt::Debug for MediaFile {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("MediaFile")
            .field("file_name", &self.file_name)
            .field("mime_type", &self.mime_type)
            .field("len", &self.bytes.len())
            .finish()
    }
}

/// Content for creating or updating an article.
///
/// Drafts are always sent as multipart forms with the same field names for
/// create and update: `title`, `text` and, when present, `media`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NewsDraft {
    pub title: String,
    pub text: String,
    pub media: Option<MediaFile>,
}

impl NewsDraft {
    pub fn new(title: impl Into<String>, text: impl Into<String>) -> Self {
        Self {
            title: title.into(),
            text: text.into(),
            media: None,
        }
    }

    pub fn with_media(mut self, media: MediaFile) -> Self {
        self.media = Some(media);
        self
    }

    /// Encode the draft as a multipart body.
    pub fn to_multipart(&self) -> MultipartBody {
        let mut body = MultipartBody::new()
            .text(FIELD_TITLE, self.title.clone())
            .text(FIELD_TEXT, self.text.clone());

        if let Some(ref media) = self.media {
            let mut part = Part::file(FIELD_MEDIA, media.file_name.clone(), media.bytes.clone());
            if let Some(ref mime) = media.mime_type {
                part = part.with_mime_type(mime.clone());
            }
            body = body.part(part);
        }

        body
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::descriptor::PartValue;

    #[test]
    fn news_id_accepts_integers_and_strings() {
        let from_int: NewsId = serde_json::from_str("42").unwrap();
        let from_str: NewsId = serde_json::from_str("\"42\"").unwrap();
        assert_eq!(from_int, from_str);
        assert_eq!(from_int.as_str(), "42");
    }

    #[test]
    fn article_tolerates_missing_image() {
        let article: NewsArticle =
            serde_json::from_str(r#"{"id": 7, "title": "Hello", "text": "World"}"#).unwrap();
        assert_eq!(article.id.as_str(), "7");
        assert!(article.image.is_none());
    }

    #[test]
    fn draft_without_media_has_two_text_parts() {
        let body = NewsDraft::new("Title", "Body").to_multipart();
        let names: Vec<_> = body.parts().iter().map(|p| p.name()).collect();
        assert_eq!(names, vec!["title", "text"]);
    }

    #[test]
    fn draft_media_goes_into_media_field() {
        let draft = NewsDraft::new("Title", "Body")
            .with_media(MediaFile::new("cat.png", vec![0x89, 0x50]).with_mime_type("image/png"));
        let body = draft.to_multipart();

        let media = &body.parts()[2];
        assert_eq!(media.name(), "media");
        match media.value() {
            PartValue::File {
                file_name,
                mime_type,
                bytes,
            } => {
                assert_eq!(file_name, "cat.png");
                assert_eq!(mime_type.as_deref(), Some("image/png"));
                assert_eq!(bytes, &vec![0x89, 0x50]);
            }
            other => panic!("expected file part, got {:?}", other),
        }
    }
}
