//! News subcommand implementations.

mod create;
mod get;
mod list;
mod update;

use std::fs;
use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use clap::{Args, Subcommand};

use newsdesk_core::{MediaFile, NewsDraft};

use crate::cli::ConnectionArgs;

#[derive(Args, Debug)]
pub struct NewsCommand {
    #[command(subcommand)]
    pub command: NewsSubcommand,
}

#[derive(Subcommand, Debug)]
pub enum NewsSubcommand {
    /// List recent articles
    List(list::ListArgs),

    /// Fetch a single article
    Get(get::GetArgs),

    /// Publish a new article
    Create(create::CreateArgs),

    /// Replace the content of an existing article
    Update(update::UpdateArgs),
}

pub async fn handle(connection: &ConnectionArgs, cmd: NewsCommand) -> Result<()> {
    match cmd.command {
        NewsSubcommand::List(args) => list::run(connection, args).await,
        NewsSubcommand::Get(args) => get::run(connection, args).await,
        NewsSubcommand::Create(args) => create::run(connection, args).await,
        NewsSubcommand::Update(args) => update::run(connection, args).await,
    }
}

/// Article content shared by create and update.
#[derive(Args, Debug)]
pub struct DraftArgs {
    /// Article title
    #[arg(long)]
    pub title: String,

    /// Article body text
    #[arg(long)]
    pub text: String,

    /// Image file to attach
    #[arg(long)]
    pub media: Option<PathBuf>,

    /// MIME type of the image (guessed from the extension if omitted)
    #[arg(long, requires = "media")]
    pub media_type: Option<String>,

    /// Print the server response as JSON
    #[arg(long)]
    pub json: bool,
}

impl DraftArgs {
    pub fn to_draft(&self) -> Result<NewsDraft> {
        let draft = NewsDraft::new(&self.title, &self.text);
        match &self.media {
            Some(path) => Ok(draft.with_media(load_media(path, self.media_type.as_deref())?)),
            None => Ok(draft),
        }
    }
}

fn load_media(path: &Path, media_type: Option<&str>) -> Result<MediaFile> {
    let bytes =
        fs::read(path).with_context(|| format!("Failed to read media file {}", path.display()))?;

    let file_name = path
        .file_name()
        .and_then(|n| n.to_str())
        .context("Media path has no file name")?;

    let media = MediaFile::new(file_name, bytes);
    match media_type.or_else(|| guess_media_type(path)) {
        Some(mime) => Ok(media.with_mime_type(mime)),
        None => Ok(media),
    }
}

fn guess_media_type(path: &Path) -> Option<&'static str> {
    let ext = path.extension()?.to_str()?.to_ascii_lowercase();
    match ext.as_str() {
        "png" => Some("image/png"),
        "jpg" | "jpeg" => Some("image/jpeg"),
        "gif" => Some("image/gif"),
        "webp" => Some("image/webp"),
        "svg" => Some("image/svg+xml"),
        _ => None,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn guesses_common_image_types() {
        assert_eq!(guess_media_type(Path::new("a.PNG")), Some("image/png"));
        assert_eq!(guess_media_type(Path::new("b.jpeg")), Some("image/jpeg"));
        assert_eq!(guess_media_type(Path::new("notes.txt")), None);
        assert_eq!(guess_media_type(Path::new("no_extension")), None);
    }

    #[test]
    fn draft_with_media_reads_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("photo.jpg");
        fs::write(&path, b"jpeg bytes").unwrap();

        let args = DraftArgs {
            title: "Title".into(),
            text: "Text".into(),
            media: Some(path),
            media_type: None,
            json: false,
        };
        let draft = args.to_draft().unwrap();
        let media = draft.media.unwrap();

        assert_eq!(media.file_name, "photo.jpg");
        assert_eq!(media.mime_type.as_deref(), Some("image/jpeg"));
        assert_eq!(media.bytes, b"jpeg bytes");
    }

    #[test]
    fn explicit_media_type_wins() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("photo.bin");
        fs::write(&path, b"x").unwrap();

        let media = load_media(&path, Some("image/avif")).unwrap();
        assert_eq!(media.mime_type.as_deref(), Some("image/avif"));
    }

    #[test]
    fn missing_media_file_is_an_error() {
        let err = load_media(Path::new("/definitely/not/here.png"), None).unwrap_err();
        assert!(err.to_string().contains("Failed to read media file"));
    }
}
