//! Path segment helpers for request URIs.

/// Splits a URI path on `/` after trimming every outer slash.
///
/// Unlike [`crate::url_model::UrlRecord::segments`], a root or empty path
/// yields a single empty segment.
pub fn segment_path(uri: &str) -> Vec<String> {
    uri.trim_matches('/').split('/').map(str::to_string).collect()
}

pub fn first_segment(segments: &[String]) -> Option<&str> {
    segments.first().map(String::as_str)
}

pub fn last_segment(segments: &[String]) -> Option<&str> {
    segments.last().map(String::as_str)
}

/// Where [`add_slash`] puts the slash.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SlashPosition {
    Start,
    End,
    Both,
}

/// Adds a `/` at the requested position(s) unless one is already there.
pub fn add_slash(uri: &str, position: SlashPosition) -> String {
    let mut out = uri.to_string();
    if matches!(position, SlashPosition::Start | SlashPosition::Both) && !out.starts_with('/') {
        out.insert(0, '/');
    }
    if matches!(position, SlashPosition::End | SlashPosition::Both) && !out.ends_with('/') {
        out.push('/');
    }
    out
}
