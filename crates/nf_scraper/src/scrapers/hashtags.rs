//! Hashtag collection from the article body.
//!
//! Articles that already embed a front matter block are left alone: their
//! tags are expected to come from that block, so scanning is skipped.

use lazy_static::lazy_static;
use regex::Regex;
use std::collections::HashSet;
use tracing::debug;

const MAX_TAG_CHARS: usize = 50;
const METADATA_KEYS: [&str; 3] = ["title:", "tags:", "author:"];

lazy_static! {
    static ref ARTICLE_BLOCK: Regex = Regex::new(r"(?s)<article[^>]*>(.*?)</article>").unwrap();
    static ref HASHTAG: Regex = Regex::new(r"#([^\s\u{3000}<]+)").unwrap();
}

/// Inner markup of the first `<article>` element, or "" when there is none.
pub fn article_content(html: &str) -> &str {
    ARTICLE_BLOCK
        .captures(html)
        .and_then(|caps| caps.get(1))
        .map_or("", |m| m.as_str())
}

/// Whether the content already carries a `---` delimited metadata block.
pub fn has_front_matter(content: &str) -> bool {
    content.contains("---") && METADATA_KEYS.iter().any(|key| content.contains(key))
}

/// Tags for the page: empty when the article has its own front matter,
/// otherwise every distinct hashtag that passes the filters.
pub fn extract_tags(html: &str) -> Vec<String> {
    let content = article_content(html);
    if has_front_matter(content) {
        debug!("Article embeds front matter, skipping hashtag scan");
        return Vec::new();
    }
    scan_hashtags(content)
}

/// Distinct hashtags in first-seen order, minus overlong ones and ones with
/// a backslash.
pub fn scan_hashtags(content: &str) -> Vec<String> {
    let mut seen = HashSet::new();
    HASHTAG
        .captures_iter(content)
        .filter_map(|caps| caps.get(1))
        .map(|m| m.as_str())
        .filter(|tag| seen.insert(*tag))
        .filter(|tag| tag.chars().count() < MAX_TAG_CHARS && !tag.contains('\\'))
        .map(str::to_string)
        .collect()
}
