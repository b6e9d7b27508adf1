//! `urlinfo current` – print the URL synthesized from the request context.

use anyhow::Result;
use urlinfo_core::url_model::AmbientContext;

pub fn run_current(context: &AmbientContext) -> Result<()> {
    println!("{}", context.current_url());
    Ok(())
}
