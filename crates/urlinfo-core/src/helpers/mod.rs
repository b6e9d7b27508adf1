//! Stateless string helpers that work alongside URL records.
//!
//! None of these read or build a [`crate::url_model::UrlRecord`].

mod segments;
mod slug;

pub use segments::{add_slash, first_segment, last_segment, segment_path, SlashPosition};
pub use slug::safe_slug;
