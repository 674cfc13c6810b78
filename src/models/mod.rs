// src/models/mod.rs

//! Data models for the feed pipeline.

mod quake;

pub use quake::{DATE_FORMAT, Quake, parse_feed_date, remove_quake};
