// src/lib.rs

//! quakefeed library
//!
//! Fetches the USGS ShakeMap RSS feed and turns it into a sorted,
//! recency-filtered list of earthquake records, with a day-grouped view
//! for display and top-record change detection for notifications.

pub mod config;
pub mod error;
pub mod models;
pub mod parser;
pub mod pipeline;
pub mod sections;
pub mod transport;
