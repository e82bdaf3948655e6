use nf_core::ArticleRecord;
use regex::Regex;

pub mod hashtags;
pub mod note;

pub trait Scraper: Send + Sync {
    /// Returns the name of the site
    fn source(&self) -> &str;

    /// Returns true if this scraper can handle the given URL
    fn can_handle(&self, url: &str) -> bool;

    /// Pulls article metadata out of raw page markup. Never fails: anything
    /// that cannot be found is left empty.
    fn extract(&self, html: &str) -> ArticleRecord;
}

/// Common utilities for scrapers
pub(crate) mod utils {
    use super::*;

    /// Tries `patterns` in order and returns the first capture group of the
    /// first pattern that matches.
    pub fn first_capture(html: &str, patterns: &[&Regex]) -> Option<String> {
        patterns
            .iter()
            .find_map(|pattern| pattern.captures(html))
            .and_then(|caps| caps.get(1))
            .map(|m| m.as_str().to_string())
    }
}
