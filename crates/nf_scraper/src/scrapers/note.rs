use chrono::{DateTime, Datelike, NaiveDate, NaiveDateTime};
use lazy_static::lazy_static;
use nf_core::ArticleRecord;
use regex::Regex;
use tracing::debug;

use super::hashtags;
use super::utils::first_capture;
use super::Scraper;

lazy_static! {
    static ref OG_TITLE: Regex = Regex::new(r#"<meta property="og:title" content="([^"]+)""#).unwrap();

    static ref AUTHOR_USER_NAME: Regex =
        Regex::new(r#"<span class="o-noteUser__name">([^<]+)</span>"#).unwrap();
    static ref AUTHOR_P_AUTHOR: Regex =
        Regex::new(r#"<div class="p-author__name">([^<]+)</div>"#).unwrap();
    static ref AUTHOR_LINK: Regex =
        Regex::new(r#"<a[^>]*class="[^"]*note-user-name[^"]*"[^>]*>([^<]+)</a>"#).unwrap();

    static ref TIME_DATETIME: Regex = Regex::new(r#"<time datetime="([^"]+)""#).unwrap();
    static ref JA_DATE: Regex = Regex::new(r"(\d{4}年\d{1,2}月\d{1,2}日)").unwrap();

    static ref OG_DESCRIPTION: Regex =
        Regex::new(r#"<meta property="og:description" content="([^"]+)""#).unwrap();
    static ref META_DESCRIPTION: Regex =
        Regex::new(r#"<meta name="description" content="([^"]+)""#).unwrap();
}

/// Scraper for note.com article pages.
#[derive(Debug, Clone, Default)]
pub struct NoteScraper;

impl NoteScraper {
    pub fn new() -> Self {
        Self
    }

    pub const DOMAIN: &'static str = "note.com";

    fn extract_title(&self, html: &str) -> Option<String> {
        first_capture(html, &[&*OG_TITLE])
    }

    /// Page templates render the author name in different places; the first
    /// template that matches decides, even when its text is blank.
    fn extract_author(&self, html: &str) -> Option<String> {
        first_capture(html, &[&*AUTHOR_USER_NAME, &*AUTHOR_P_AUTHOR, &*AUTHOR_LINK])
            .map(|author| author.trim().to_string())
            .filter(|author| !author.is_empty())
    }

    fn extract_publish_date(&self, html: &str) -> Option<String> {
        let raw = first_capture(html, &[&*TIME_DATETIME, &*JA_DATE])?;
        if raw.contains('年') {
            return Some(raw);
        }
        let formatted = format_ja_date(&raw);
        if formatted.is_none() {
            debug!("Ignoring unparsable timestamp {:?}", raw);
        }
        formatted
    }

    fn extract_summary(&self, html: &str) -> Option<String> {
        first_capture(html, &[&*OG_DESCRIPTION, &*META_DESCRIPTION])
    }
}

impl Scraper for NoteScraper {
    fn source(&self) -> &str {
        "note"
    }

    fn can_handle(&self, url: &str) -> bool {
        url.contains(Self::DOMAIN)
    }

    fn extract(&self, html: &str) -> ArticleRecord {
        let record = ArticleRecord {
            title: self.extract_title(html),
            author: self.extract_author(html),
            publish_date: self.extract_publish_date(html),
            tags: hashtags::extract_tags(html),
            summary: self.extract_summary(html),
        };
        debug!(
            title = record.title.is_some(),
            author = record.author.is_some(),
            publish_date = record.publish_date.is_some(),
            tags = record.tags.len(),
            summary = record.summary.is_some(),
            "Extracted article fields"
        );
        record
    }
}

const OFFSET_FORMATS: [&str; 4] = [
    "%Y-%m-%dT%H:%M:%S%.f%:z",
    "%Y-%m-%dT%H:%M%:z",
    "%Y-%m-%d %H:%M:%S%.f%:z",
    "%Y-%m-%d %H:%M%:z",
];

const NAIVE_FORMATS: [&str; 4] = [
    "%Y-%m-%dT%H:%M:%S%.f",
    "%Y-%m-%dT%H:%M",
    "%Y-%m-%d %H:%M:%S%.f",
    "%Y-%m-%d %H:%M",
];

/// Formats an ISO-8601 style timestamp as `{year}年{month}月{day}日`, using the
/// calendar date in the timestamp's own offset. Seconds are optional and the
/// date and time may be separated by `T` or a space.
pub fn format_ja_date(timestamp: &str) -> Option<String> {
    let normalized = match timestamp.strip_suffix('Z') {
        Some(rest) => format!("{}+00:00", rest),
        None => timestamp.to_string(),
    };

    let date = OFFSET_FORMATS
        .iter()
        .find_map(|fmt| DateTime::parse_from_str(&normalized, fmt).ok())
        .map(|dt| dt.date_naive())
        .or_else(|| {
            NAIVE_FORMATS
                .iter()
                .find_map(|fmt| NaiveDateTime::parse_from_str(&normalized, fmt).ok())
                .map(|dt| dt.date())
        })
        .or_else(|| NaiveDate::parse_from_str(&normalized, "%Y-%m-%d").ok())?;

    Some(format!("{}年{}月{}日", date.year(), date.month(), date.day()))
}
