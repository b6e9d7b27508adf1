pub mod config;
pub mod helpers;
pub mod logging;
pub mod url_model;

pub use url_model::{AmbientContext, UrlRecord};
