use nf_core::{ArticleRecord, Error, Result};
use tracing::{info, warn};

use crate::fetch::{Fetcher, HttpFetcher};
use crate::scrapers::note::NoteScraper;
use crate::scrapers::Scraper;

type BoxedFetcher = Box<dyn Fetcher>;
type BoxedScraper = Box<dyn Scraper>;

/// Runs validate → fetch → extract for one URL.
pub struct ScraperManager {
    fetcher: BoxedFetcher,
    scraper: BoxedScraper,
}

impl ScraperManager {
    pub fn new(fetcher: BoxedFetcher, scraper: BoxedScraper) -> Self {
        Self { fetcher, scraper }
    }

    /// note.com scraper over a default HTTP client.
    pub fn for_note() -> Self {
        Self::new(Box::new(HttpFetcher::new()), Box::new(NoteScraper::new()))
    }

    /// Rejects URLs the scraper does not handle before any request is made.
    pub fn validate(&self, url: &str) -> Result<()> {
        if self.scraper.can_handle(url) {
            Ok(())
        } else {
            warn!("Rejected URL for {}: {}", self.scraper.source(), url);
            Err(Error::Validation(url.to_string()))
        }
    }

    pub async fn scrape_url(&self, url: &str) -> Result<ArticleRecord> {
        self.validate(url)?;
        let html = self.fetcher.fetch(url).await?;
        let record = self.scraper.extract(&html);
        info!("✨ Extracted metadata from {}", url);
        Ok(record)
    }
}
