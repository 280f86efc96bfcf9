use std::sync::Arc;
use std::time::Duration;

use moka::future::Cache;
use reqwest::Client;
use serde_json::Value;
use thiserror::Error;
use tokio::sync::Mutex;

use crate::models::{Location, Neighborhood};
use crate::services::mock::MockNeighborhoodGenerator;

/// Errors that can occur when retrieving neighborhood records
#[derive(Debug, Error)]
pub enum ProviderError {
    #[error("HTTP request failed: {0}")]
    RequestError(#[from] reqwest::Error),

    #[error("API returned error: {0}")]
    ApiError(String),

    #[error("Invalid response format: {0}")]
    InvalidResponse(String),
}

/// Neighborhood record provider.
///
/// Fetches attribute records from an external places API, caches results per
/// search area, and falls back to deterministic mock data when no API is
/// configured or the upstream call fails.
pub struct NeighborhoodProvider {
    client: Client,
    base_url: Option<String>,
    api_key: Option<String>,
    cache: Cache<String, Arc<Vec<Neighborhood>>>,
    mock: Mutex<MockNeighborhoodGenerator>,
    mock_count: usize,
}

impl NeighborhoodProvider {
    pub fn new(
        base_url: Option<String>,
        api_key: Option<String>,
        timeout_secs: u64,
        cache_capacity: u64,
        cache_ttl_secs: u64,
        mock_seed: u64,
        mock_count: usize,
    ) -> Result<Self, ProviderError> {
        let client = Client::builder()
            .timeout(Duration::from_secs(timeout_secs))
            .build()?;

        let cache = Cache::builder()
            .max_capacity(cache_capacity)
            .time_to_live(Duration::from_secs(cache_ttl_secs))
            .build();

        Ok(Self {
            client,
            base_url,
            api_key,
            cache,
            mock: Mutex::new(MockNeighborhoodGenerator::new(mock_seed)),
            mock_count,
        })
    }

    /// Retrieve neighborhood records around a center point.
    ///
    /// Results are cached per rounded search area for the configured TTL.
    pub async fn get_neighborhoods(
        &self,
        center: &Location,
        radius_km: f64,
    ) -> Result<Arc<Vec<Neighborhood>>, ProviderError> {
        let key = Self::area_key(center, radius_km);

        if let Some(cached) = self.cache.get(&key).await {
            tracing::trace!("Neighborhood cache hit: {}", key);
            return Ok(cached);
        }

        let neighborhoods = match &self.base_url {
            Some(base_url) => match self.fetch_remote(base_url, center, radius_km).await {
                Ok(records) => records,
                Err(e) => {
                    tracing::warn!(
                        "Places API fetch failed ({}), falling back to mock data",
                        e
                    );
                    self.generate_mock(center).await
                }
            },
            None => {
                tracing::debug!("No places API configured, serving mock data for {}", key);
                self.generate_mock(center).await
            }
        };

        let records = Arc::new(neighborhoods);
        self.cache.insert(key, Arc::clone(&records)).await;
        Ok(records)
    }

    async fn fetch_remote(
        &self,
        base_url: &str,
        center: &Location,
        radius_km: f64,
    ) -> Result<Vec<Neighborhood>, ProviderError> {
        let url = format!("{}/neighborhoods", base_url.trim_end_matches('/'));

        let mut request = self.client.get(&url).query(&[
            ("lat", center.latitude.to_string()),
            ("lon", center.longitude.to_string()),
            ("radiusKm", radius_km.to_string()),
        ]);
        if let Some(api_key) = &self.api_key {
            request = request.header("X-Api-Key", api_key);
        }

        let response = request.send().await?;
        if !response.status().is_success() {
            return Err(ProviderError::ApiError(format!(
                "Failed to fetch neighborhoods: {}",
                response.status()
            )));
        }

        let json: Value = response.json().await?;
        let records = json
            .get("neighborhoods")
            .and_then(|n| n.as_array())
            .or_else(|| json.as_array())
            .ok_or_else(|| ProviderError::InvalidResponse("Missing neighborhoods array".into()))?;

        let neighborhoods: Vec<Neighborhood> = records
            .iter()
            .filter_map(|record| serde_json::from_value(record.clone()).ok())
            .collect();

        tracing::debug!(
            "Fetched {} neighborhoods from places API ({} raw records)",
            neighborhoods.len(),
            records.len()
        );

        Ok(neighborhoods)
    }

    async fn generate_mock(&self, center: &Location) -> Vec<Neighborhood> {
        let mut generator = self.mock.lock().await;
        generator.generate(center, self.mock_count)
    }

    /// Cache key for a search area, rounded so nearby requests share entries
    fn area_key(center: &Location, radius_km: f64) -> String {
        format!(
            "area:{:.3}:{:.3}:{:.1}",
            center.latitude, center.longitude, radius_km
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn center() -> Location {
        Location {
            latitude: 45.52,
            longitude: -122.68,
            address: None,
            city: Some("Portland".to_string()),
            state: None,
            postal_code: None,
        }
    }

    fn mock_provider() -> NeighborhoodProvider {
        NeighborhoodProvider::new(None, None, 5, 100, 300, 42, 12).unwrap()
    }

    #[test]
    fn test_area_key_rounding() {
        let key = NeighborhoodProvider::area_key(&center(), 10.0);
        assert_eq!(key, "area:45.520:-122.680:10.0");
    }

    #[tokio::test]
    async fn test_mock_fallback_without_base_url() {
        let provider = mock_provider();
        let records = provider.get_neighborhoods(&center(), 10.0).await.unwrap();
        assert_eq!(records.len(), 12);
    }

    #[tokio::test]
    async fn test_cache_returns_same_records() {
        let provider = mock_provider();
        let first = provider.get_neighborhoods(&center(), 10.0).await.unwrap();
        let second = provider.get_neighborhoods(&center(), 10.0).await.unwrap();

        // Second call is served from cache, not re-generated
        assert!(Arc::ptr_eq(&first, &second));
    }

    #[tokio::test]
    async fn test_remote_fetch_with_mockito() {
        let mut server = mockito::Server::new_async().await;
        let body = serde_json::json!({ "neighborhoods": [] }).to_string();
        let mock = server
            .mock("GET", mockito::Matcher::Regex("^/neighborhoods.*".to_string()))
            .with_status(200)
            .with_header("content-type", "application/json")
            .with_body(body)
            .create_async()
            .await;

        let provider =
            NeighborhoodProvider::new(Some(server.url()), None, 5, 100, 300, 1, 4).unwrap();
        let records = provider
            .fetch_remote(&server.url(), &center(), 10.0)
            .await
            .unwrap();

        mock.assert_async().await;
        assert!(records.is_empty());
    }

    #[tokio::test]
    async fn test_remote_error_falls_back_to_mock() {
        let mut server = mockito::Server::new_async().await;
        server
            .mock("GET", mockito::Matcher::Regex("^/neighborhoods.*".to_string()))
            .with_status(500)
            .create_async()
            .await;

        let provider =
            NeighborhoodProvider::new(Some(server.url()), None, 5, 100, 300, 1, 6).unwrap();
        let records = provider.get_neighborhoods(&center(), 10.0).await.unwrap();

        assert_eq!(records.len(), 6);
    }
}
