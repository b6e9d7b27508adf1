//! `urlinfo segment <uri>` – print path segments, or only the first/last one.

use anyhow::Result;
use urlinfo_core::helpers::{first_segment, last_segment, segment_path};

pub fn run_segment(uri: &str, first: bool, last: bool) -> Result<()> {
    let segments = segment_path(uri);
    for line in select(&segments, first, last) {
        println!("{line}");
    }
    Ok(())
}

fn select(segments: &[String], first: bool, last: bool) -> Vec<&str> {
    if first {
        first_segment(segments).into_iter().collect()
    } else if last {
        last_segment(segments).into_iter().collect()
    } else {
        segments.iter().map(String::as_str).collect()
    }
}
