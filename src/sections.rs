// src/sections.rs

//! Day-grouped view over a sorted record list.
//!
//! Display collaborators render the list grouped by calendar day. The
//! grouping is never stored: the underlying list can shrink between
//! queries (deletion by value), so every query rescans the live slice.
//! The slice is assumed sorted most recent first, which makes same-day
//! records contiguous and lets every query run as one linear pass.

use chrono::Datelike;

use crate::models::Quake;

/// Borrowed day-grouping view over a record slice.
///
/// Records without a timestamp are excluded; sorting sinks them to the
/// end, so each scan simply stops at the first undated record.
pub struct SectionIndex<'a> {
    quakes: &'a [Quake],
}

impl<'a> SectionIndex<'a> {
    /// Wrap a slice sorted most recent first.
    pub fn new(quakes: &'a [Quake]) -> Self {
        Self { quakes }
    }

    /// Number of maximal runs of consecutive same-day records.
    ///
    /// One record is one section; an empty list has zero sections.
    pub fn section_count(&self) -> usize {
        let mut count = 0;
        let mut previous = None;
        for key in self.day_keys() {
            if previous != Some(key) {
                count += 1;
                previous = Some(key);
            }
        }
        count
    }

    /// Number of records in the `section`th run, 0 if out of range.
    pub fn rows_in_section(&self, section: usize) -> usize {
        let mut current = None;
        let mut index = 0;
        let mut rows = 0;
        for key in self.day_keys() {
            if current.is_none() {
                current = Some(key);
            } else if current != Some(key) {
                if index == section {
                    return rows;
                }
                current = Some(key);
                index += 1;
                rows = 0;
            }
            rows += 1;
        }
        if current.is_some() && index == section {
            rows
        } else {
            0
        }
    }

    /// Record at the 2D coordinate, mapped back to the linear list.
    pub fn quake_at(&self, row: usize, section: usize) -> Option<&'a Quake> {
        let mut current = None;
        let mut sec = 0;
        let mut row_in_sec = 0;
        for (i, key) in self.day_keys().enumerate() {
            if current.is_none() {
                current = Some(key);
            } else if current != Some(key) {
                current = Some(key);
                sec += 1;
                row_in_sec = 0;
            }
            if sec == section && row_in_sec == row {
                return Some(&self.quakes[i]);
            }
            row_in_sec += 1;
        }
        None
    }

    /// Header text for a section, e.g. `October 8`.
    pub fn section_label(&self, section: usize) -> Option<String> {
        let quake = self.quake_at(0, section)?;
        let time = quake.time?;
        Some(format!("{} {}", time.format("%B"), time.day()))
    }

    /// (month, day) keys of the dated prefix of the slice.
    fn day_keys(&self) -> impl Iterator<Item = (u32, u32)> + '_ {
        self.quakes
            .iter()
            .map_while(|q| q.time.map(|t| (t.month(), t.day())))
    }
}
