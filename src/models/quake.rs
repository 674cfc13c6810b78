//! Quake record data structure.

use chrono::{DateTime, FixedOffset};
use serde::{Deserialize, Serialize};

/// Fixed date format of the feed's `pubDate` field,
/// e.g. `Thu, 08 Oct 2015 13:46:28 +0000`.
pub const DATE_FORMAT: &str = "%a, %d %b %Y %H:%M:%S %z";

/// One normalized earthquake report from the feed.
///
/// String fields default to empty and are built up by appending text
/// fragments during parse. Equality is structural over all seven fields;
/// collaborators rely on it for deletion-by-value and for the
/// "is the top record new" comparison, so there is no separate identity key.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
pub struct Quake {
    /// Latitude as received (decimal string)
    pub latitude: String,

    /// Longitude as received (decimal string)
    pub longitude: String,

    /// Occurrence timestamp parsed from `date_string`.
    ///
    /// `None` when the raw string does not match [`DATE_FORMAT`]. Such
    /// records are excluded by the recency filter and by sectioning, and
    /// sort as oldest (they sink to the end of the list).
    pub time: Option<DateTime<FixedOffset>>,

    /// Raw `pubDate` string as received
    pub date_string: String,

    /// Event title
    pub title: String,

    /// URL of the detail page
    pub link: String,

    /// Floored integer magnitude as a string, e.g. "4" for a 4.x event
    pub floor_magnitude: String,
}

impl Quake {
    /// Construct a record from raw field values, parsing the timestamp
    /// from the given date string.
    pub fn new(
        latitude: impl Into<String>,
        longitude: impl Into<String>,
        date_string: impl Into<String>,
        title: impl Into<String>,
        link: impl Into<String>,
        floor_magnitude: impl Into<String>,
    ) -> Self {
        let date_string = date_string.into();
        Self {
            latitude: latitude.into(),
            longitude: longitude.into(),
            time: parse_feed_date(&date_string),
            date_string,
            title: title.into(),
            link: link.into(),
            floor_magnitude: floor_magnitude.into(),
        }
    }

    /// Floored magnitude as an integer, if the field parses.
    pub fn magnitude(&self) -> Option<i64> {
        self.floor_magnitude.trim().parse().ok()
    }
}

/// Parse a feed date string with the fixed format; `None` on mismatch.
pub fn parse_feed_date(raw: &str) -> Option<DateTime<FixedOffset>> {
    DateTime::parse_from_str(raw, DATE_FORMAT).ok()
}

/// Remove every record structurally equal to `target` from the list.
///
/// Display collaborators delete by value, then recompute sectioning
/// against the shortened list.
pub fn remove_quake(quakes: &mut Vec<Quake>, target: &Quake) {
    quakes.retain(|q| q != target);
}
