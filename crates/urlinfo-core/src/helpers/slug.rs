//! URL-safe slug generation.

/// Converts free text into a lower-case URL slug.
///
/// - Replaces every character outside `[A-Za-z0-9]` with `-`
/// - Collapses consecutive dashes
/// - Trims leading/trailing dashes
pub fn safe_slug(text: &str) -> String {
    let mut out = String::with_capacity(text.len());
    let mut prev_dash = false;

    for c in text.chars() {
        if c.is_ascii_alphanumeric() {
            out.push(c.to_ascii_lowercase());
            prev_dash = false;
        } else {
            if !prev_dash {
                out.push('-');
            }
            prev_dash = true;
        }
    }

    out.trim_matches('-').to_string()
}
