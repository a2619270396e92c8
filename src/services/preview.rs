//! Search-result preview: the slug, title, and description lines a search
//! engine would show for the post, with placeholders for empty fields.

use crate::models::{DocumentMetadata, PreviewRecord};

use super::slug::generate_slug;

pub const TITLE_PLACEHOLDER: &str = "Your Blog Title";
pub const DESCRIPTION_PLACEHOLDER: &str = "Your meta description will appear here.";

/// Build the preview for the current form values. Pure and recomputed on
/// every call, so it can never show stale metadata.
pub fn render_preview(meta: &DocumentMetadata) -> PreviewRecord {
    PreviewRecord {
        slug: generate_slug(&meta.title),
        display_title: if meta.title.is_empty() {
            TITLE_PLACEHOLDER.to_string()
        } else {
            meta.title.clone()
        },
        display_description: if meta.description.is_empty() {
            DESCRIPTION_PLACEHOLDER.to_string()
        } else {
            meta.description.clone()
        },
    }
}
