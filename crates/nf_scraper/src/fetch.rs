use async_trait::async_trait;
use nf_core::Result;
use tracing::{debug, info};

/// Retrieves the raw markup of a page.
#[async_trait]
pub trait Fetcher: Send + Sync {
    async fn fetch(&self, url: &str) -> Result<String>;
}

/// Plain GET with reqwest defaults: no retries, no custom headers.
#[derive(Debug, Clone, Default)]
pub struct HttpFetcher {
    client: reqwest::Client,
}

impl HttpFetcher {
    pub fn new() -> Self {
        Self::default()
    }
}

#[async_trait]
impl Fetcher for HttpFetcher {
    async fn fetch(&self, url: &str) -> Result<String> {
        info!("🌐 Fetching {}", url);
        let response = self.client.get(url).send().await?.error_for_status()?;
        debug!("Got HTTP {} from {}", response.status(), url);
        let html = response.text().await?;
        info!("📄 Received {} bytes", html.len());
        Ok(html)
    }
}
