//! Sources of per-city listings and shops.
//!
//! The built-in mock source answers every city with the demonstration data
//! after a simulated delay. The HTTP source fetches JSON documents laid out
//! as `{base}/{city-slug}/listings.json` and `{base}/{city-slug}/shops.json`.

mod http;

use std::sync::Arc;
use std::time::Duration;

use thiserror::Error;

use crate::domain::{mock, Listing, Shop};

pub use http::{build_client, HttpCatalog};

/// Delay of the mock source when none is configured.
pub const DEFAULT_MOCK_DELAY: Duration = Duration::from_millis(1000);

#[derive(Debug, Error)]
pub enum CatalogError {
    #[error("Invalid data source URL: {0}")]
    InvalidBaseUrl(String),
    #[error("Network error: {0}")]
    Network(#[from] reqwest::Error),
    #[error("Request timed out")]
    Timeout,
    #[error("HTTP error: status {0}")]
    HttpStatus(u16),
    #[error("Response too large (exceeds {0} bytes)")]
    ResponseTooLarge(usize),
    #[error("Malformed catalog data: {0}")]
    Decode(#[from] serde_json::Error),
}

impl CatalogError {
    /// Whether the request is worth repeating.
    pub(crate) fn is_retryable(&self) -> bool {
        match self {
            CatalogError::Timeout | CatalogError::Network(_) => true,
            CatalogError::HttpStatus(status) => *status >= 500,
            CatalogError::InvalidBaseUrl(_)
            | CatalogError::ResponseTooLarge(_)
            | CatalogError::Decode(_) => false,
        }
    }
}

/// Listings and shops of one city.
#[derive(Debug, Clone)]
pub struct CityData {
    pub listings: Vec<Listing>,
    pub shops: Vec<Shop>,
}

/// A data source for the housing and shops sections.
///
/// Cheap to clone; clones share the HTTP client and cache.
#[derive(Debug, Clone)]
pub enum Catalog {
    Mock { delay: Duration },
    Http(Arc<HttpCatalog>),
}

impl Default for Catalog {
    fn default() -> Self {
        Catalog::Mock {
            delay: DEFAULT_MOCK_DELAY,
        }
    }
}

impl Catalog {
    pub fn mock(delay: Duration) -> Self {
        Catalog::Mock { delay }
    }

    /// HTTP catalog rooted at `base_url`.
    pub fn http(base_url: &str, client: reqwest::Client) -> Result<Self, CatalogError> {
        Ok(Catalog::Http(Arc::new(HttpCatalog::new(base_url, client)?)))
    }

    /// Short description for the status bar.
    pub fn describe(&self) -> String {
        match self {
            Catalog::Mock { .. } => "built-in data".to_string(),
            Catalog::Http(http) => http.base_url().to_string(),
        }
    }

    pub async fn listings(&self, city: &str) -> Result<Vec<Listing>, CatalogError> {
        match self {
            Catalog::Mock { delay } => {
                tokio::time::sleep(*delay).await;
                tracing::debug!(city = %city, "Serving built-in listings");
                Ok(mock::listings())
            }
            Catalog::Http(http) => http.listings(city).await,
        }
    }

    pub async fn shops(&self, city: &str) -> Result<Vec<Shop>, CatalogError> {
        match self {
            Catalog::Mock { delay } => {
                tokio::time::sleep(*delay).await;
                tracing::debug!(city = %city, "Serving built-in shops");
                Ok(mock::shops())
            }
            Catalog::Http(http) => http.shops(city).await,
        }
    }

    /// Load both collections of `city`.
    ///
    /// The two requests run concurrently; the first failure wins.
    pub async fn load_city(&self, city: &str) -> Result<CityData, CatalogError> {
        let (listings, shops) = futures::try_join!(self.listings(city), self.shops(city))?;
        Ok(CityData { listings, shops })
    }
}

/// URL path segment for a city name: `"New York"` becomes `"new-york"`.
pub fn city_slug(city: &str) -> String {
    let mut slug = String::with_capacity(city.len());
    for word in city
        .split(|c: char| !c.is_alphanumeric())
        .filter(|w| !w.is_empty())
    {
        if !slug.is_empty() {
            slug.push('-');
        }
        slug.extend(word.chars().flat_map(char::to_lowercase));
    }
    slug
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_city_slug() {
        assert_eq!(city_slug("New York"), "new-york");
        assert_eq!(city_slug("  Los   Angeles "), "los-angeles");
        assert_eq!(city_slug("St. Louis"), "st-louis");
        assert_eq!(city_slug("Chicago"), "chicago");
    }

    #[tokio::test(start_paused = true)]
    async fn test_mock_catalog_waits_then_serves_demo_data() {
        let catalog = Catalog::mock(Duration::from_millis(1000));
        let started = tokio::time::Instant::now();
        let data = catalog.load_city("Houston").await.unwrap();

        assert!(started.elapsed() >= Duration::from_millis(1000));
        // Both requests sleep concurrently
        assert!(started.elapsed() < Duration::from_millis(2000));
        assert_eq!(data.listings.len(), 3);
        assert_eq!(data.shops.len(), 4);
    }

    #[test]
    fn test_retryable_errors() {
        assert!(CatalogError::HttpStatus(503).is_retryable());
        assert!(!CatalogError::HttpStatus(404).is_retryable());
        assert!(CatalogError::Timeout.is_retryable());
        assert!(!CatalogError::ResponseTooLarge(1).is_retryable());
    }
}
