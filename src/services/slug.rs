/// Generate a URL slug from a post title.
///
/// ASCII-only on purpose: any character outside `[a-z0-9]` acts as a
/// separator, including accented letters, which are not transliterated.
/// Runs of separators collapse to a single hyphen and the result never
/// starts or ends with one, so the function is idempotent.
pub fn generate_slug(title: &str) -> String {
    title
        .to_lowercase()
        .split(|c: char| !c.is_ascii_lowercase() && !c.is_ascii_digit())
        .filter(|s| !s.is_empty())
        .collect::<Vec<_>>()
        .join("-")
}

pub fn validate_slug(slug: &str) -> bool {
    if slug.is_empty() || slug.len() > 200 {
        return false;
    }
    slug.chars()
        .all(|c| c.is_ascii_lowercase() || c.is_ascii_digit() || c == '-')
}
