// src/pipeline/fetch.rs

//! Fetch orchestration: GET → status check → parse → filter → sort.

use std::cmp::Ordering;

use chrono::{DateTime, Duration, Utc};

use crate::config::FeedConfig;
use crate::error::{FeedError, Result};
use crate::models::Quake;
use crate::parser;
use crate::transport::{FeedTransport, HttpTransport};

/// Orchestrates one feed fetch end to end.
///
/// Every call to [`fetch`](FeedPipeline::fetch) builds its own record
/// buffer and returns it; the pipeline keeps no working state between
/// calls, so overlapping fetches are independent. Cancelling a fetch is
/// dropping its future.
pub struct FeedPipeline {
    config: FeedConfig,
    transport: Box<dyn FeedTransport>,
}

impl FeedPipeline {
    /// Create a pipeline backed by the HTTP transport.
    pub fn new(config: FeedConfig) -> Result<Self> {
        let transport = Box::new(HttpTransport::new(&config)?);
        Ok(Self { config, transport })
    }

    /// Create a pipeline with a custom transport.
    pub fn with_transport(config: FeedConfig, transport: Box<dyn FeedTransport>) -> Self {
        Self { config, transport }
    }

    /// Fetch, parse, filter and sort the feed.
    ///
    /// With `max_age_days = Some(d)` only records strictly newer than
    /// `now − d` days survive; with `None` no filtering occurs. The result
    /// is sorted most recent first; ties keep document order. Exactly one
    /// outcome (the list or one [`FeedError`]) is produced per call.
    pub async fn fetch(&self, max_age_days: Option<i64>) -> Result<Vec<Quake>> {
        let response = self.transport.get(&self.config.feed_url).await?;

        if !(200..=399).contains(&response.status) {
            return Err(FeedError::Status(response.status));
        }

        let quakes = process(&response.body, Utc::now(), max_age_days)?;
        log::debug!(
            "fetched {} record(s) from {}",
            quakes.len(),
            self.config.feed_url
        );
        Ok(quakes)
    }
}

/// Pure pipeline core: parse a response body, then filter and sort
/// against the given clock reading. Factored out of [`FeedPipeline::fetch`]
/// so tests can pin `now`.
pub fn process(
    body: &[u8],
    now: DateTime<Utc>,
    max_age_days: Option<i64>,
) -> Result<Vec<Quake>> {
    let mut quakes = parser::parse(body)?;

    if let Some(days) = max_age_days {
        let cutoff = now - Duration::days(days);
        // Records without a timestamp cannot satisfy a recency bound.
        quakes.retain(|q| match q.time {
            Some(t) => t.with_timezone(&Utc) > cutoff,
            None => false,
        });
    }

    sort_newest_first(&mut quakes);
    Ok(quakes)
}

/// Stable sort, most recent first; timestamp-less records sink to the end.
pub fn sort_newest_first(quakes: &mut [Quake]) {
    quakes.sort_by(|a, b| match (a.time, b.time) {
        (Some(a), Some(b)) => b.cmp(&a),
        (Some(_), None) => Ordering::Less,
        (None, Some(_)) => Ordering::Greater,
        (None, None) => Ordering::Equal,
    });
}

#[cfg(test)]
mod tests {
    use chrono::TimeZone;

    use super::*;

    fn quake(date: &str, title: &str) -> Quake {
        Quake::new("0.0", "0.0", date, title, "http://example.com", "4")
    }

    fn body(items: &[(&str, &str)]) -> Vec<u8> {
        let mut xml = String::from("<rss><channel>");
        for (date, title) in items {
            xml.push_str(&format!(
                "<item><title>{title}</title><pubDate>{date}</pubDate></item>"
            ));
        }
        xml.push_str("</channel></rss>");
        xml.into_bytes()
    }

    fn oct_8_2015() -> DateTime<Utc> {
        Utc.with_ymd_and_hms(2015, 10, 8, 23, 0, 0).unwrap()
    }

    #[test]
    fn sorts_newest_first() {
        let mut quakes = vec![
            quake("Sun, 04 Oct 2015 15:15:25 +0000", "old"),
            quake("Thu, 08 Oct 2015 13:46:28 +0000", "new"),
            quake("Tue, 06 Oct 2015 20:13:33 +0000", "mid"),
        ];
        sort_newest_first(&mut quakes);
        let titles: Vec<_> = quakes.iter().map(|q| q.title.as_str()).collect();
        assert_eq!(titles, ["new", "mid", "old"]);
    }

    #[test]
    fn sort_is_stable_for_equal_timestamps() {
        let mut quakes = vec![
            quake("Thu, 08 Oct 2015 13:46:28 +0000", "a"),
            quake("Thu, 08 Oct 2015 13:46:28 +0000", "b"),
            quake("Thu, 08 Oct 2015 13:46:28 +0000", "c"),
        ];
        sort_newest_first(&mut quakes);
        let titles: Vec<_> = quakes.iter().map(|q| q.title.as_str()).collect();
        assert_eq!(titles, ["a", "b", "c"]);
    }

    #[test]
    fn timestampless_records_sink_to_the_end() {
        let mut quakes = vec![
            quake("garbage", "undated"),
            quake("Thu, 08 Oct 2015 13:46:28 +0000", "dated"),
        ];
        sort_newest_first(&mut quakes);
        assert_eq!(quakes[0].title, "dated");
        assert_eq!(quakes[1].title, "undated");
    }

    #[test]
    fn filter_is_strict_and_drops_undated() {
        let feed = body(&[
            ("Thu, 08 Oct 2015 13:46:28 +0000", "recent"),
            ("Wed, 08 Oct 2014 13:46:28 +0000", "stale"),
            ("garbage", "undated"),
        ]);
        let quakes = process(&feed, oct_8_2015(), Some(30)).unwrap();
        let titles: Vec<_> = quakes.iter().map(|q| q.title.as_str()).collect();
        assert_eq!(titles, ["recent"]);
    }

    #[test]
    fn no_window_means_no_filtering() {
        let feed = body(&[
            ("Thu, 08 Oct 2015 13:46:28 +0000", "recent"),
            ("Wed, 08 Oct 2014 13:46:28 +0000", "stale"),
        ]);
        let quakes = process(&feed, oct_8_2015(), None).unwrap();
        assert_eq!(quakes.len(), 2);
    }

    #[test]
    fn processing_is_idempotent() {
        let feed = body(&[
            ("Tue, 06 Oct 2015 20:13:33 +0000", "b"),
            ("Thu, 08 Oct 2015 13:46:28 +0000", "a"),
        ]);
        let first = process(&feed, oct_8_2015(), Some(30)).unwrap();
        let second = process(&feed, oct_8_2015(), Some(30)).unwrap();
        assert_eq!(first, second);
    }

    #[test]
    fn malformed_body_is_a_parse_error() {
        let result = process(b"<rss><channel>", oct_8_2015(), None);
        assert!(matches!(result, Err(FeedError::Parse(_))));
    }
}
