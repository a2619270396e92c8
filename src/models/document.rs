use serde::{Deserialize, Serialize};

use crate::services::snapshot;

/// Metadata fields collected by the post form before a check is run.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct DocumentMetadata {
    pub title: String,
    pub description: String,
    #[serde(default)]
    pub keyword: String,
    #[serde(default)]
    pub image_alt: String,
}

/// The editor's content at the moment of analysis. Always captured fresh;
/// never cached across edits.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct ContentSnapshot {
    pub html: String,
    pub plain_text: String,
    pub word_count: usize,
}

impl ContentSnapshot {
    /// Capture a snapshot from the editor's rendered HTML, deriving the
    /// plain text and word count.
    pub fn from_html(html: &str) -> Self {
        let plain_text = snapshot::extract_text(html);
        let word_count = plain_text.split_whitespace().count();
        Self {
            html: html.to_string(),
            plain_text,
            word_count,
        }
    }

    /// Build a snapshot from already-rendered values.
    pub fn from_parts(html: String, plain_text: String, word_count: usize) -> Self {
        Self {
            html,
            plain_text,
            word_count,
        }
    }

    /// Estimated reading time in minutes based on word count.
    /// Uses 200 words per minute as average reading speed.
    pub fn reading_time_minutes(&self) -> u32 {
        ((self.word_count as f64 / 200.0).ceil() as u32).max(1)
    }
}

/// A post draft as submitted to the CLI: the form's field set plus the
/// editor's rendered HTML.
#[derive(Debug, Clone, Deserialize)]
pub struct PostDraft {
    pub title: String,
    #[serde(default)]
    pub description: String,
    #[serde(default)]
    pub keyword: String,
    #[serde(default)]
    pub image_alt: String,
    #[serde(default)]
    pub content: String,
}

impl PostDraft {
    pub fn metadata(&self) -> DocumentMetadata {
        DocumentMetadata {
            title: self.title.clone(),
            description: self.description.clone(),
            keyword: self.keyword.clone(),
            image_alt: self.image_alt.clone(),
        }
    }

    pub fn snapshot(&self) -> ContentSnapshot {
        ContentSnapshot::from_html(&self.content)
    }
}
