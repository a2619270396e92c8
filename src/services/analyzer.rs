//! Rule-bucket SEO scorer.
//!
//! Each bucket independently either awards its fixed point weight or appends
//! exactly one suggestion to the report, never both. The weights sum to 100,
//! so a fully compliant document scores exactly 100 with no suggestions.

use crate::models::{ContentSnapshot, DocumentMetadata, SeoReport};

use super::snapshot;

const TITLE_MIN_CHARS: usize = 50;
const TITLE_MAX_CHARS: usize = 60;
const DESCRIPTION_MIN_CHARS: usize = 120;
const DESCRIPTION_MAX_CHARS: usize = 160;
/// How far into the plain text the opening-keyword check looks, in chars.
const OPENING_WINDOW_CHARS: usize = 300;
const MIN_WORD_COUNT: usize = 300;

/// Score the document against every rule bucket, in checklist order:
/// title, description, keyword, heading, image, alt text, content length.
pub fn analyze(meta: &DocumentMetadata, content: &ContentSnapshot) -> SeoReport {
    let mut score: u8 = 0;
    let mut suggestions = Vec::new();

    let title_chars = meta.title.chars().count();
    if (TITLE_MIN_CHARS..=TITLE_MAX_CHARS).contains(&title_chars) {
        score += 15;
    } else {
        suggestions.push("Title should be between 50–60 characters.".to_string());
    }

    let description_chars = meta.description.chars().count();
    if (DESCRIPTION_MIN_CHARS..=DESCRIPTION_MAX_CHARS).contains(&description_chars) {
        score += 15;
    } else {
        suggestions.push("Description should be between 120–160 characters.".to_string());
    }

    if meta.keyword.is_empty() {
        // A single suggestion replaces the three keyword checks.
        suggestions.push("Add a focus keyword for better analysis.".to_string());
    } else {
        let keyword = meta.keyword.to_lowercase();

        if meta.title.to_lowercase().contains(&keyword) {
            score += 10;
        } else {
            suggestions.push("Keyword missing in title.".to_string());
        }

        if meta.description.to_lowercase().contains(&keyword) {
            score += 10;
        } else {
            suggestions.push("Keyword missing in description.".to_string());
        }

        let opening: String = content
            .plain_text
            .chars()
            .take(OPENING_WINDOW_CHARS)
            .collect();
        if opening.to_lowercase().contains(&keyword) {
            score += 10;
        } else {
            suggestions.push("Keyword not found in first paragraph.".to_string());
        }
    }

    if snapshot::has_h1(&content.html) {
        score += 10;
    } else {
        suggestions.push("Add at least one H1 tag.".to_string());
    }

    let images = snapshot::img_tags(&content.html);
    if images.is_empty() {
        suggestions.push("Add at least one image.".to_string());
    } else {
        score += 5;
        // Alt text is only checked once an image exists.
        if images
            .iter()
            .all(|tag| snapshot::tag_has_attr(tag, "alt"))
        {
            score += 5;
        } else {
            suggestions.push("Add alt text to images.".to_string());
        }
    }

    if content.word_count > MIN_WORD_COUNT {
        score += 20;
    } else {
        suggestions.push("Add more content (minimum 300 words).".to_string());
    }

    tracing::debug!(score, failed_buckets = suggestions.len(), "seo analysis complete");

    SeoReport { score, suggestions }
}
