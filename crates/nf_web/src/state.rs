use nf_scraper::ScraperManager;

pub struct AppState {
    pub manager: ScraperManager,
}

impl AppState {
    pub fn new(manager: ScraperManager) -> Self {
        Self { manager }
    }
}
