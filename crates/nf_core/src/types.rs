use serde::{Deserialize, Serialize};

/// Metadata pulled out of a single article page.
///
/// Every field starts empty; an absent field is a valid final state and is
/// simply left out of the generated front matter.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ArticleRecord {
    pub title: Option<String>,
    pub author: Option<String>,
    pub publish_date: Option<String>,
    pub tags: Vec<String>,
    pub summary: Option<String>,
}

impl ArticleRecord {
    pub fn new() -> Self {
        Self::default()
    }

    /// True when nothing at all could be extracted.
    pub fn is_empty(&self) -> bool {
        self.title.is_none()
            && self.author.is_none()
            && self.publish_date.is_none()
            && self.tags.is_empty()
            && self.summary.is_none()
    }
}
