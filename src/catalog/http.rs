use std::fmt;
use std::num::NonZeroUsize;
use std::sync::{Arc, Mutex, PoisonError};
use std::time::Duration;

use futures::StreamExt;
use lru::LruCache;
use serde::de::DeserializeOwned;
use url::Url;

use super::{city_slug, CatalogError};
use crate::domain::{Listing, Shop};

const MAX_RETRIES: u32 = 2;
const REQUEST_TIMEOUT: Duration = Duration::from_secs(20);
const MAX_DOCUMENT_SIZE: usize = 5 * 1024 * 1024; // 5MB

/// Cities kept per collection.
const CACHE_CAPACITY: NonZeroUsize = match NonZeroUsize::new(8) {
    Some(n) => n,
    None => unreachable!(),
};

type Cache<T> = Mutex<LruCache<String, Arc<Vec<T>>>>;

/// Shared client for catalog requests: pooled connections, bounded redirects.
pub fn build_client() -> Result<reqwest::Client, CatalogError> {
    let client = reqwest::Client::builder()
        .redirect(redirect_policy())
        .pool_max_idle_per_host(4)
        .pool_idle_timeout(Duration::from_secs(30))
        .tcp_keepalive(Duration::from_secs(60))
        .timeout(Duration::from_secs(30))
        .user_agent(concat!("cityguide/", env!("CARGO_PKG_VERSION")))
        .build()?;
    Ok(client)
}

fn redirect_policy() -> reqwest::redirect::Policy {
    reqwest::redirect::Policy::custom(|attempt| {
        if attempt.previous().len() >= 3 {
            return attempt.error("Too many redirects (max 3)");
        }
        if attempt
            .previous()
            .iter()
            .any(|prev| prev.as_str() == attempt.url().as_str())
        {
            return attempt.error("Redirect loop detected");
        }
        tracing::debug!(to = %attempt.url(), hop = attempt.previous().len() + 1, "Following redirect");
        attempt.follow()
    })
}

/// JSON-over-HTTP catalog with a small per-city cache.
pub struct HttpCatalog {
    base: Url,
    client: reqwest::Client,
    listings: Cache<Listing>,
    shops: Cache<Shop>,
}

impl fmt::Debug for HttpCatalog {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("HttpCatalog")
            .field("base", &self.base.as_str())
            .finish_non_exhaustive()
    }
}

impl HttpCatalog {
    /// Only `http` and `https` bases are accepted.
    pub fn new(base_url: &str, client: reqwest::Client) -> Result<Self, CatalogError> {
        let mut base = Url::parse(base_url.trim())
            .map_err(|e| CatalogError::InvalidBaseUrl(format!("{base_url}: {e}")))?;
        if !matches!(base.scheme(), "http" | "https") {
            return Err(CatalogError::InvalidBaseUrl(format!(
                "{base_url}: scheme must be http or https"
            )));
        }
        if base.cannot_be_a_base() {
            return Err(CatalogError::InvalidBaseUrl(base_url.to_string()));
        }
        // Url::join replaces the last segment unless the path ends with '/'
        if !base.path().ends_with('/') {
            let path = format!("{}/", base.path());
            base.set_path(&path);
        }

        Ok(Self {
            base,
            client,
            listings: Mutex::new(LruCache::new(CACHE_CAPACITY)),
            shops: Mutex::new(LruCache::new(CACHE_CAPACITY)),
        })
    }

    pub fn base_url(&self) -> &str {
        self.base.as_str()
    }

    pub async fn listings(&self, city: &str) -> Result<Vec<Listing>, CatalogError> {
        self.cached_fetch(&self.listings, city, "listings.json").await
    }

    pub async fn shops(&self, city: &str) -> Result<Vec<Shop>, CatalogError> {
        self.cached_fetch(&self.shops, city, "shops.json").await
    }

    /// Number of cities with cached listings.
    pub fn cached_cities(&self) -> usize {
        self.listings
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .len()
    }

    async fn cached_fetch<T>(
        &self,
        cache: &Cache<T>,
        city: &str,
        document: &str,
    ) -> Result<Vec<T>, CatalogError>
    where
        T: DeserializeOwned + Clone,
    {
        let slug = city_slug(city);

        let hit = cache
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .get(&slug)
            .cloned();
        if let Some(items) = hit {
            tracing::debug!(city = %city, document, "Catalog cache hit");
            return Ok(items.as_ref().clone());
        }

        let url = self
            .base
            .join(&format!("{slug}/{document}"))
            .map_err(|e| CatalogError::InvalidBaseUrl(e.to_string()))?;
        let bytes = self.fetch_with_retry(&url).await?;
        let items: Vec<T> = serde_json::from_slice(&bytes)?;

        tracing::info!(city = %city, document, count = items.len(), "Catalog document loaded");
        cache
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .put(slug, Arc::new(items.clone()));
        Ok(items)
    }

    /// GET with exponential backoff on transient failures: 500ms, 1s.
    async fn fetch_with_retry(&self, url: &Url) -> Result<Vec<u8>, CatalogError> {
        let mut retry_count = 0;
        loop {
            match self.fetch_once(url).await {
                Ok(bytes) => return Ok(bytes),
                Err(e) if e.is_retryable() && retry_count < MAX_RETRIES => {
                    let delay = Duration::from_millis(500 << retry_count);
                    tracing::debug!(
                        url = %url,
                        error = %e,
                        retry = retry_count + 1,
                        delay_ms = delay.as_millis() as u64,
                        "Retrying catalog fetch after transient error"
                    );
                    tokio::time::sleep(delay).await;
                    retry_count += 1;
                }
                Err(e) => {
                    tracing::warn!(url = %url, error = %e, "Catalog fetch failed");
                    return Err(e);
                }
            }
        }
    }

    async fn fetch_once(&self, url: &Url) -> Result<Vec<u8>, CatalogError> {
        let response = tokio::time::timeout(REQUEST_TIMEOUT, self.client.get(url.as_str()).send())
            .await
            .map_err(|_| CatalogError::Timeout)?
            .map_err(CatalogError::Network)?;

        if !response.status().is_success() {
            return Err(CatalogError::HttpStatus(response.status().as_u16()));
        }

        read_limited_bytes(response, MAX_DOCUMENT_SIZE).await
    }
}

async fn read_limited_bytes(
    response: reqwest::Response,
    limit: usize,
) -> Result<Vec<u8>, CatalogError> {
    if let Some(len) = response.content_length() {
        if len > limit as u64 {
            return Err(CatalogError::ResponseTooLarge(limit));
        }
    }

    let mut bytes = Vec::new();
    let mut stream = response.bytes_stream();
    while let Some(chunk) = stream.next().await {
        let chunk = chunk.map_err(CatalogError::Network)?;
        if bytes.len().saturating_add(chunk.len()) > limit {
            return Err(CatalogError::ResponseTooLarge(limit));
        }
        bytes.extend_from_slice(&chunk);
    }
    Ok(bytes)
}
