pub mod fetch;
pub mod logging;
pub mod manager;
pub mod scrapers;

pub use fetch::{Fetcher, HttpFetcher};
pub use logging::init_logging;
pub use manager::ScraperManager;
pub use scrapers::Scraper;
pub use scrapers::note::NoteScraper;
