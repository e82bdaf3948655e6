use axum::{
    extract::{rejection::JsonRejection, State},
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use nf_core::{ArticleRecord, Error};
use serde::{Deserialize, Serialize};
use std::sync::Arc;
use tracing::{error, warn};

use crate::AppState;

#[derive(Debug, Deserialize)]
pub struct ScrapeRequest {
    pub url: Option<String>,
}

#[derive(Debug, Serialize, Deserialize)]
pub struct ErrorBody {
    pub error: String,
}

/// Error half of the scrape endpoint, rendered as `{"error": ...}`.
#[derive(Debug)]
pub enum ApiError {
    BadRequest(String),
    Scrape(Error),
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let (status, message) = match self {
            ApiError::BadRequest(message) => (StatusCode::BAD_REQUEST, message),
            ApiError::Scrape(Error::Validation(_)) => (
                StatusCode::BAD_REQUEST,
                "Invalid URL. Please provide a valid note.com URL.".to_string(),
            ),
            ApiError::Scrape(err) => {
                error!("Scrape failed: {}", err);
                (
                    StatusCode::INTERNAL_SERVER_ERROR,
                    "Failed to scrape the page. Please check the URL and try again.".to_string(),
                )
            }
        };
        (status, Json(ErrorBody { error: message })).into_response()
    }
}

pub async fn scrape(
    State(state): State<Arc<AppState>>,
    payload: Result<Json<ScrapeRequest>, JsonRejection>,
) -> Result<Json<ArticleRecord>, ApiError> {
    let Json(request) = payload.map_err(|rejection| {
        warn!("Rejected scrape request body: {}", rejection);
        ApiError::BadRequest("Invalid request".to_string())
    })?;

    let url = request.url.unwrap_or_default();
    let record = state.manager.scrape_url(&url).await.map_err(ApiError::Scrape)?;
    if record.is_empty() {
        warn!("No metadata found at {}", url);
    }
    Ok(Json(record))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::create_app;
    use async_trait::async_trait;
    use axum::body::{to_bytes, Body};
    use axum::http::Request;
    use nf_scraper::{Fetcher, NoteScraper, ScraperManager};
    use std::sync::atomic::{AtomicUsize, Ordering};
    use tower::ServiceExt;

    struct StaticFetcher {
        html: &'static str,
        calls: Arc<AtomicUsize>,
    }

    #[async_trait]
    impl Fetcher for StaticFetcher {
        async fn fetch(&self, _url: &str) -> nf_core::Result<String> {
            self.calls.fetch_add(1, Ordering::SeqCst);
            Ok(self.html.to_string())
        }
    }

    struct FailingFetcher;

    #[async_trait]
    impl Fetcher for FailingFetcher {
        async fn fetch(&self, _url: &str) -> nf_core::Result<String> {
            Err(Error::Fetch("HTTP status server error (503 Service Unavailable)".to_string()))
        }
    }

    const PAGE: &str = r#"<html><head>
<meta property="og:title" content="My Post">
<meta property="og:description" content="A short summary">
</head><body><article><p>#rust</p></article></body></html>"#;

    fn app_with(fetcher: impl Fetcher + 'static) -> axum::Router {
        let manager = ScraperManager::new(Box::new(fetcher), Box::new(NoteScraper::new()));
        create_app(AppState::new(manager))
    }

    fn scrape_request(body: &str) -> Request<Body> {
        Request::builder()
            .method("POST")
            .uri("/api/scrape")
            .header("content-type", "application/json")
            .body(Body::from(body.to_string()))
            .unwrap()
    }

    async fn read_body(response: Response) -> Vec<u8> {
        to_bytes(response.into_body(), usize::MAX).await.unwrap().to_vec()
    }

    #[tokio::test]
    async fn test_scrape_returns_record() {
        let calls = Arc::new(AtomicUsize::new(0));
        let app = app_with(StaticFetcher { html: PAGE, calls: calls.clone() });

        let response = app
            .oneshot(scrape_request(r#"{"url":"https://note.com/someone/n/nabc"}"#))
            .await
            .unwrap();

        assert_eq!(response.status(), StatusCode::OK);
        let record: ArticleRecord = serde_json::from_slice(&read_body(response).await).unwrap();
        assert_eq!(record.title.as_deref(), Some("My Post"));
        assert_eq!(record.summary.as_deref(), Some("A short summary"));
        assert_eq!(record.tags, vec!["rust"]);
        assert_eq!(calls.load(Ordering::SeqCst), 1);
    }

    #[tokio::test]
    async fn test_foreign_url_is_bad_request() {
        let calls = Arc::new(AtomicUsize::new(0));
        let app = app_with(StaticFetcher { html: PAGE, calls: calls.clone() });

        let response = app
            .oneshot(scrape_request(r#"{"url":"https://example.com/post/1"}"#))
            .await
            .unwrap();

        assert_eq!(response.status(), StatusCode::BAD_REQUEST);
        let body: ErrorBody = serde_json::from_slice(&read_body(response).await).unwrap();
        assert!(body.error.contains("note.com"));
        assert_eq!(calls.load(Ordering::SeqCst), 0);
    }

    #[tokio::test]
    async fn test_missing_url_is_bad_request() {
        let calls = Arc::new(AtomicUsize::new(0));
        let app = app_with(StaticFetcher { html: PAGE, calls: calls.clone() });

        let response = app.oneshot(scrape_request("{}")).await.unwrap();

        assert_eq!(response.status(), StatusCode::BAD_REQUEST);
        assert_eq!(calls.load(Ordering::SeqCst), 0);
    }

    #[tokio::test]
    async fn test_malformed_body_is_bad_request() {
        let calls = Arc::new(AtomicUsize::new(0));
        let app = app_with(StaticFetcher { html: PAGE, calls });

        let response = app.oneshot(scrape_request("not json")).await.unwrap();

        assert_eq!(response.status(), StatusCode::BAD_REQUEST);
        let body: ErrorBody = serde_json::from_slice(&read_body(response).await).unwrap();
        assert_eq!(body.error, "Invalid request");
    }

    #[tokio::test]
    async fn test_fetch_failure_is_server_error() {
        let app = app_with(FailingFetcher);

        let response = app
            .oneshot(scrape_request(r#"{"url":"https://note.com/someone/n/nabc"}"#))
            .await
            .unwrap();

        assert_eq!(response.status(), StatusCode::INTERNAL_SERVER_ERROR);
        let body: ErrorBody = serde_json::from_slice(&read_body(response).await).unwrap();
        assert!(body.error.starts_with("Failed to scrape the page"));
    }

    #[tokio::test]
    async fn test_cors_preflight_is_allowed() {
        let app = app_with(FailingFetcher);

        let response = app
            .oneshot(
                Request::builder()
                    .method("OPTIONS")
                    .uri("/api/scrape")
                    .header("origin", "https://example.com")
                    .header("access-control-request-method", "POST")
                    .body(Body::empty())
                    .unwrap(),
            )
            .await
            .unwrap();

        assert_eq!(response.status(), StatusCode::OK);
        assert_eq!(
            response.headers().get("access-control-allow-origin").unwrap(),
            "*"
        );
    }
}
