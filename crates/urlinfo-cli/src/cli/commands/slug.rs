//! `urlinfo slug <text>` – print a URL-safe slug.

use anyhow::Result;
use urlinfo_core::helpers::safe_slug;

pub fn run_slug(text: &str) -> Result<()> {
    println!("{}", safe_slug(text));
    Ok(())
}
