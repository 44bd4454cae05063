//! Caching layer for provider lookups.
//!
//! Search and reverse results change slowly, so a TTL cache in front of
//! them absorbs repeat traffic (the same text re-typed, the map re-panned
//! over the same block) without spending provider quota. Fallback answers
//! are never cached: an outage must not pin stale data past the provider's
//! recovery. Directions stay uncached, they are expected to reflect live
//! traffic.

use std::sync::Arc;
use std::time::Duration;

use moka::future::Cache as MokaCache;

use crate::domain::{Itinerary, LatLng};

use super::client::{GeocodingClient, MIN_QUERY_LEN};
use super::convert::{PlaceHit, ResolvedLocation};
use super::fallback;

/// Reverse-geocode cache key: coordinate rounded to 4 decimals. Matches
/// the fallback label rounding, so every point within ~11 m shares an
/// entry.
type ReverseKey = (i64, i64);

fn reverse_key(point: LatLng) -> ReverseKey {
    (
        (point.latitude * 1e4).round() as i64,
        (point.longitude * 1e4).round() as i64,
    )
}

/// Configuration for the lookup cache.
#[derive(Debug, Clone)]
pub struct GeoCacheConfig {
    /// TTL for cached entries.
    pub ttl: Duration,

    /// Maximum number of cached entries per lookup kind.
    pub max_capacity: u64,
}

impl Default for GeoCacheConfig {
    fn default() -> Self {
        Self {
            ttl: Duration::from_secs(300),
            max_capacity: 1000,
        }
    }
}

/// Geocoding client with cached search and reverse lookups.
pub struct CachedGeocodingClient {
    client: GeocodingClient,
    searches: MokaCache<String, Arc<Vec<PlaceHit>>>,
    reverses: MokaCache<ReverseKey, Option<ResolvedLocation>>,
}

impl CachedGeocodingClient {
    /// Create a new cached client.
    pub fn new(client: GeocodingClient, config: &GeoCacheConfig) -> Self {
        let searches = MokaCache::builder()
            .time_to_live(config.ttl)
            .max_capacity(config.max_capacity)
            .build();
        let reverses = MokaCache::builder()
            .time_to_live(config.ttl)
            .max_capacity(config.max_capacity)
            .build();

        Self {
            client,
            searches,
            reverses,
        }
    }

    /// Search places, serving repeat queries from cache.
    ///
    /// Same contract as [`GeocodingClient::search_places`]; only live
    /// provider answers are cached.
    pub async fn search_places(&self, query: &str) -> Arc<Vec<PlaceHit>> {
        if query.len() < MIN_QUERY_LEN {
            return Arc::new(Vec::new());
        }

        let key = query.to_lowercase();
        if let Some(cached) = self.searches.get(&key).await {
            return cached;
        }

        match self.client.try_search(query).await {
            Ok(hits) => {
                let entry = Arc::new(hits);
                self.searches.insert(key, entry.clone()).await;
                entry
            }
            Err(e) => {
                tracing::warn!(error = %e, query, "place search failed, using fallback list");
                Arc::new(fallback::match_places(query))
            }
        }
    }

    /// Reverse-geocode, serving repeat positions from cache.
    ///
    /// Same contract as [`GeocodingClient::reverse_geocode`]; only live
    /// provider answers are cached, including "no feature here".
    pub async fn reverse_geocode(&self, point: LatLng) -> Option<ResolvedLocation> {
        let key = reverse_key(point);
        if let Some(cached) = self.reverses.get(&key).await {
            return cached;
        }

        match self.client.try_reverse(point).await {
            Ok(resolved) => {
                self.reverses.insert(key, resolved.clone()).await;
                resolved
            }
            Err(e) => {
                tracing::warn!(error = %e, "reverse geocode failed, labeling by coordinate");
                Some(fallback::reverse_label(point))
            }
        }
    }

    /// Fetch live directions. Never cached.
    pub async fn fetch_directions(&self, start: LatLng, end: LatLng) -> Option<Itinerary> {
        self.client.fetch_directions(start, end).await
    }

    /// Access the underlying client for operations that bypass the cache.
    pub fn client(&self) -> &GeocodingClient {
        &self.client
    }

    /// Number of cached search entries (for monitoring).
    pub fn search_entry_count(&self) -> u64 {
        self.searches.entry_count()
    }

    /// Number of cached reverse entries (for monitoring).
    pub fn reverse_entry_count(&self) -> u64 {
        self.reverses.entry_count()
    }
}
