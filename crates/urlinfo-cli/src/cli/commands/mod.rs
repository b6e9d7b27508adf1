//! CLI command handlers, one per file.

mod completions;
mod current;
mod man;
mod parse;
mod segment;
mod slug;

pub use completions::run_completions;
pub use current::run_current;
pub use man::run_man;
pub use parse::{run_parse, Field};
pub use segment::run_segment;
pub use slug::run_slug;
