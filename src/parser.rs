// src/parser.rs

//! Streaming feed parser.
//!
//! Converts the feed's XML body into an ordered list of [`Quake`] records.
//! The event loop drives a small builder with three states: outside an
//! item, inside an item with no recognized field, and inside an item
//! accumulating one field. Text content is always appended, never
//! overwritten, so a field split across several text events still
//! assembles correctly.

use quick_xml::Reader;
use quick_xml::events::Event;

use crate::error::{FeedError, Result};
use crate::models::{Quake, parse_feed_date};

/// Recognized item sub-elements, by their raw (prefixed) tag names.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Field {
    Latitude,
    Longitude,
    PubDate,
    Title,
    Link,
    Magnitude,
}

impl Field {
    fn from_name(name: &[u8]) -> Option<Self> {
        match name {
            b"geo:lat" => Some(Self::Latitude),
            b"geo:long" => Some(Self::Longitude),
            b"pubDate" => Some(Self::PubDate),
            b"title" => Some(Self::Title),
            b"link" => Some(Self::Link),
            b"dc:subject" => Some(Self::Magnitude),
            _ => None,
        }
    }
}

/// Record under construction plus the active field cursor.
#[derive(Debug, Default)]
struct RecordBuilder {
    current: Option<Quake>,
    field: Option<Field>,
}

impl RecordBuilder {
    fn start_element(&mut self, name: &[u8]) {
        if name == b"item" {
            self.current = Some(Quake::default());
            self.field = None;
        } else {
            // Unrecognized tags clear the cursor so stray text between
            // elements cannot leak into the previous field.
            self.field = Field::from_name(name);
        }
    }

    /// Append a text fragment to the active field, if any.
    ///
    /// A field tag outside any item has no backing record; the fragment
    /// is silently dropped.
    fn text(&mut self, fragment: &str) {
        let Some(quake) = self.current.as_mut() else {
            return;
        };
        match self.field {
            Some(Field::Latitude) => quake.latitude.push_str(fragment),
            Some(Field::Longitude) => quake.longitude.push_str(fragment),
            Some(Field::PubDate) => quake.date_string.push_str(fragment),
            Some(Field::Title) => quake.title.push_str(fragment),
            Some(Field::Link) => quake.link.push_str(fragment),
            Some(Field::Magnitude) => quake.floor_magnitude.push_str(fragment),
            None => {}
        }
    }

    fn end_element(&mut self, name: &[u8], records: &mut Vec<Quake>) {
        if name == b"item" {
            if let Some(quake) = self.current.take() {
                records.push(quake);
            }
        } else if name == b"pubDate" {
            // The raw date string is complete at this point.
            if let Some(quake) = self.current.as_mut() {
                quake.time = parse_feed_date(&quake.date_string);
            }
        }
        self.field = None;
    }
}

/// Parse a feed document into records, preserving document order.
///
/// Any well-formedness failure (unterminated tags, mismatched end tags,
/// invalid byte sequences, bad entity escapes) aborts the parse with
/// [`FeedError::Parse`]; partially built records are never returned.
pub fn parse(bytes: &[u8]) -> Result<Vec<Quake>> {
    let mut reader = Reader::from_reader(bytes);
    reader.config_mut().check_end_names = true;
    let mut buf = Vec::new();
    let mut builder = RecordBuilder::default();
    let mut records = Vec::new();
    let mut depth = 0usize;

    loop {
        match reader.read_event_into(&mut buf) {
            Ok(Event::Start(start)) => {
                depth += 1;
                builder.start_element(start.name().as_ref());
            }
            Ok(Event::Empty(empty)) => {
                let name = empty.name();
                builder.start_element(name.as_ref());
                builder.end_element(name.as_ref(), &mut records);
            }
            Ok(Event::Text(text)) => {
                let fragment = text.unescape().map_err(FeedError::parse)?;
                builder.text(&fragment);
            }
            Ok(Event::CData(cdata)) => {
                let fragment = std::str::from_utf8(cdata.as_ref()).map_err(FeedError::parse)?;
                builder.text(fragment);
            }
            Ok(Event::End(end)) => {
                depth = depth
                    .checked_sub(1)
                    .ok_or_else(|| FeedError::parse("unmatched closing tag"))?;
                builder.end_element(end.name().as_ref(), &mut records);
            }
            Ok(Event::Eof) => {
                // quick-xml reports EOF even with elements still open.
                if depth != 0 || builder.current.is_some() {
                    return Err(FeedError::parse("unexpected end of document"));
                }
                return Ok(records);
            }
            // Declarations, comments, processing instructions, doctypes.
            Ok(_) => {}
            Err(e) => return Err(FeedError::parse(e)),
        }
        buf.clear();
    }
}
