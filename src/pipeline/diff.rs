// src/pipeline/diff.rs

//! New-event detection between successive fetch results.
//!
//! Notification collaborators keep the previous result and compare the
//! top record of the next one: both lists are sorted most recent first,
//! so a changed element 0 means a new event arrived.

use crate::models::Quake;

/// True when `current` has a top record that `previous` did not have.
///
/// The comparison is structural equality of element 0. An empty `current`
/// never signals; a previously empty list signals as soon as any record
/// appears.
pub fn has_new_top(previous: &[Quake], current: &[Quake]) -> bool {
    match (previous.first(), current.first()) {
        (Some(prev), Some(curr)) => prev != curr,
        (None, Some(_)) => true,
        (_, None) => false,
    }
}
