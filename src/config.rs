// src/config.rs

//! Application configuration structures.

use std::fs;
use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::error::{FeedError, Result};

/// Feed client configuration.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct FeedConfig {
    /// URL of the earthquake RSS feed
    #[serde(default = "defaults::feed_url")]
    pub feed_url: String,

    /// User-Agent header for HTTP requests
    #[serde(default = "defaults::user_agent")]
    pub user_agent: String,

    /// Request timeout in seconds; doubles as the per-fetch deadline
    #[serde(default = "defaults::timeout")]
    pub timeout_secs: u64,

    /// Default recency window in days applied when the caller passes none
    #[serde(default = "defaults::max_age_days")]
    pub default_max_age_days: Option<i64>,
}

impl FeedConfig {
    /// Load configuration from a TOML file.
    pub fn load(path: impl AsRef<Path>) -> Result<Self> {
        let content = fs::read_to_string(path)?;
        Ok(toml::from_str(&content)?)
    }

    /// Load configuration or return default if loading fails.
    pub fn load_or_default(path: impl AsRef<Path>) -> Self {
        Self::load(&path).unwrap_or_else(|e| {
            log::warn!(
                "Config load failed from {:?}: {}. Using defaults.",
                path.as_ref(),
                e
            );
            Self::default()
        })
    }

    /// Validate configuration values for basic sanity.
    pub fn validate(&self) -> Result<()> {
        if self.user_agent.trim().is_empty() {
            return Err(FeedError::config("user_agent is empty"));
        }
        if self.timeout_secs == 0 {
            return Err(FeedError::config("timeout_secs must be > 0"));
        }
        if let Err(e) = url::Url::parse(&self.feed_url) {
            return Err(FeedError::config(format!(
                "feed_url '{}' is invalid: {e}",
                self.feed_url
            )));
        }
        if let Some(days) = self.default_max_age_days {
            if days <= 0 {
                return Err(FeedError::config("default_max_age_days must be > 0"));
            }
        }
        Ok(())
    }
}

impl Default for FeedConfig {
    fn default() -> Self {
        Self {
            feed_url: defaults::feed_url(),
            user_agent: defaults::user_agent(),
            timeout_secs: defaults::timeout(),
            default_max_age_days: defaults::max_age_days(),
        }
    }
}

mod defaults {
    pub fn feed_url() -> String {
        "http://earthquake.usgs.gov/earthquakes/shakemap/rss.xml".into()
    }
    pub fn user_agent() -> String {
        "Mozilla/5.0 (compatible; quakefeed/0.1)".into()
    }
    pub fn timeout() -> u64 {
        30
    }
    pub fn max_age_days() -> Option<i64> {
        Some(30)
    }
}

#[cfg(test)]
mod tests {
    use std::io::Write;

    use super::*;

    #[test]
    fn validate_default_config_ok() {
        assert!(FeedConfig::default().validate().is_ok());
    }

    #[test]
    fn validate_rejects_empty_user_agent() {
        let mut config = FeedConfig::default();
        config.user_agent = "  ".to_string();
        assert!(config.validate().is_err());
    }

    #[test]
    fn validate_rejects_zero_timeout() {
        let mut config = FeedConfig::default();
        config.timeout_secs = 0;
        assert!(config.validate().is_err());
    }

    #[test]
    fn validate_rejects_bad_feed_url() {
        let mut config = FeedConfig::default();
        config.feed_url = "not a url".to_string();
        assert!(config.validate().is_err());
    }

    #[test]
    fn validate_rejects_non_positive_window() {
        let mut config = FeedConfig::default();
        config.default_max_age_days = Some(0);
        assert!(config.validate().is_err());
    }

    #[test]
    fn load_reads_partial_toml_with_defaults() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        writeln!(file, "feed_url = \"https://example.com/feed.xml\"").unwrap();

        let config = FeedConfig::load(file.path()).unwrap();
        assert_eq!(config.feed_url, "https://example.com/feed.xml");
        assert_eq!(config.timeout_secs, 30);
        assert_eq!(config.default_max_age_days, Some(30));
    }

    #[test]
    fn load_or_default_falls_back_on_missing_file() {
        let config = FeedConfig::load_or_default("/nonexistent/config.toml");
        assert_eq!(config, FeedConfig::default());
    }
}
