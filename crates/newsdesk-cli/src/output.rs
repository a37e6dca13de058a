//! Output formatting helpers.

use anyhow::Result;
use colored::Colorize;
use serde::Serialize;

use newsdesk_core::NewsArticle;

/// Print a success message.
pub fn success(msg: &str) {
    println!("{} {}", "✓".green(), msg);
}

/// Print an error message.
pub fn error(msg: &str) {
    eprintln!("{} {}", "✗".red(), msg);
}

/// Print a labeled field.
pub fn field(label: &str, value: &str) {
    println!("{}: {}", label.dimmed(), value);
}

/// Print a value as compact JSON.
pub fn json<T: Serialize>(value: &T) -> Result<()> {
    let json = serde_json::to_string(value)?;
    println!("{}", json);
    Ok(())
}

/// Print a value as pretty-printed JSON.
pub fn json_pretty<T: Serialize>(value: &T) -> Result<()> {
    let json = serde_json::to_string_pretty(value)?;
    println!("{}", json);
    Ok(())
}

/// Print a one-line article summary.
pub fn article_line(article: &NewsArticle) {
    println!("{} {}", format!("[{}]", article.id).cyan(), article.title.bold());
}

/// Print an article in full.
pub fn article(article: &NewsArticle) {
    field("ID", article.id.as_str());
    field("Title", &article.title);
    if let Some(image) = &article.image {
        field("Image", image);
    }
    if !article.text.is_empty() {
        println!();
        println!("{}", article.text);
    }
}
