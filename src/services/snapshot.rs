//! Content snapshot helpers: plain-text extraction from editor HTML and the
//! structural probes the analyzer runs against it.

use once_cell::sync::Lazy;
use regex::Regex;

// Statically compiled regexes - avoids runtime panic and improves performance
static H1_REGEX: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"(?i)<h1(\s[^>]*)?>").expect("Invalid h1 regex pattern"));
static IMG_REGEX: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"(?i)<img(\s[^>]*)?/?>").expect("Invalid img regex pattern"));
static TAG_ATTR_REGEX: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r#"(?i)\s([a-z][a-z0-9-]*)(?:\s*=\s*("[^"]*"|'[^']*'|[^\s>]*))?"#)
        .expect("Invalid tag attribute regex pattern")
});

/// Extract plain text from rendered HTML: tags become separators, common
/// entities are decoded, and whitespace is collapsed to single spaces.
pub fn extract_text(html: &str) -> String {
    let text = strip_tags(html);
    let text = decode_entities(&text);
    text.split_whitespace().collect::<Vec<_>>().join(" ")
}

pub fn has_h1(html: &str) -> bool {
    H1_REGEX.is_match(html)
}

/// Every `<img>` tag in the document, as raw tag text.
pub fn img_tags(html: &str) -> Vec<&str> {
    IMG_REGEX.find_iter(html).map(|m| m.as_str()).collect()
}

/// Whether a tag carries the named attribute, with or without a value.
/// This parses the tag's attribute list rather than scanning for a raw
/// substring, so `salt="x"` does not count as `alt`.
pub fn tag_has_attr(tag: &str, name: &str) -> bool {
    TAG_ATTR_REGEX
        .captures_iter(tag)
        .any(|cap| cap[1].eq_ignore_ascii_case(name))
}

fn strip_tags(html: &str) -> String {
    let mut result = String::with_capacity(html.len());
    let mut in_tag = false;
    for ch in html.chars() {
        if ch == '<' {
            in_tag = true;
            // Tags separate words so adjacent blocks don't run together.
            result.push(' ');
        } else if ch == '>' {
            if in_tag {
                in_tag = false;
            } else {
                result.push(ch);
            }
        } else if !in_tag {
            result.push(ch);
        }
    }
    result
}

fn decode_entities(text: &str) -> String {
    text.replace("&amp;", "&")
        .replace("&lt;", "<")
        .replace("&gt;", ">")
        .replace("&quot;", "\"")
        .replace("&#39;", "'")
        .replace("&apos;", "'")
        .replace("&nbsp;", " ")
}
