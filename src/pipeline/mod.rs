// src/pipeline/mod.rs

//! Fetch pipeline and change detection.

mod diff;
mod fetch;

pub use diff::has_new_top;
pub use fetch::{FeedPipeline, process, sort_newest_first};
