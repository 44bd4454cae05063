//! Mapping-provider HTTP client.
//!
//! Wraps the provider's geocoding and routing endpoints behind the
//! fail-open contract: search and reverse lookups fall back to local data
//! on any transport or parse failure, directions surface `None`. All three
//! operations pace themselves from one shared timestamp.

use std::time::Duration;

use crate::domain::{Itinerary, LatLng};

use super::convert::{self, PlaceHit, ResolvedLocation};
use super::error::GeocodeError;
use super::fallback;
use super::throttle::RateLimiter;
use super::types::{GeocodeResponse, RoutingResponse};

/// Default base URL for the mapping provider.
const DEFAULT_BASE_URL: &str = "https://api.geoapify.com";

/// Default minimum spacing between search and directions calls.
const SEARCH_INTERVAL: Duration = Duration::from_millis(1000);

/// Default minimum spacing between reverse-geocode calls. Lighter than
/// search on purpose: map panning fires reverse lookups far more often
/// than keystrokes fire searches.
const REVERSE_INTERVAL: Duration = Duration::from_millis(500);

/// Queries shorter than this return empty without touching the provider.
pub(crate) const MIN_QUERY_LEN: usize = 3;

/// Configuration for the geocoding client.
#[derive(Debug, Clone)]
pub struct GeocodingConfig {
    /// Provider API key, sent as a query parameter
    pub api_key: String,
    /// Base URL for the provider (defaults to production)
    pub base_url: String,
    /// Country code search results are scoped to
    pub country_code: String,
    /// Request timeout in seconds
    pub timeout_secs: u64,
    /// Minimum spacing between search and directions calls
    pub search_interval: Duration,
    /// Minimum spacing between reverse-geocode calls
    pub reverse_interval: Duration,
}

impl GeocodingConfig {
    /// Create a new config with the given API key.
    pub fn new(api_key: impl Into<String>) -> Self {
        Self {
            api_key: api_key.into(),
            base_url: DEFAULT_BASE_URL.to_string(),
            country_code: "ph".to_string(),
            timeout_secs: 10,
            search_interval: SEARCH_INTERVAL,
            reverse_interval: REVERSE_INTERVAL,
        }
    }

    /// Set a custom base URL (for testing).
    pub fn with_base_url(mut self, url: impl Into<String>) -> Self {
        self.base_url = url.into();
        self
    }

    /// Set the call-spacing floors (for testing).
    pub fn with_intervals(mut self, search: Duration, reverse: Duration) -> Self {
        self.search_interval = search;
        self.reverse_interval = reverse;
        self
    }

    /// Set the request timeout.
    pub fn with_timeout(mut self, secs: u64) -> Self {
        self.timeout_secs = secs;
        self
    }
}

/// Throttled mapping-provider client with local fallback.
#[derive(Debug)]
pub struct GeocodingClient {
    http: reqwest::Client,
    config: GeocodingConfig,
    limiter: RateLimiter,
}

impl GeocodingClient {
    /// Create a new client with the given configuration.
    pub fn new(config: GeocodingConfig) -> Result<Self, GeocodeError> {
        let http = reqwest::Client::builder()
            .timeout(Duration::from_secs(config.timeout_secs))
            .build()?;

        Ok(Self {
            http,
            config,
            limiter: RateLimiter::new(),
        })
    }

    /// Search places by free-text query, scoped to the configured country.
    ///
    /// Queries under 3 characters return empty without touching the
    /// provider. Transport and parse failures fall back to the local place
    /// list; this method never fails.
    pub async fn search_places(&self, query: &str) -> Vec<PlaceHit> {
        if query.len() < MIN_QUERY_LEN {
            return Vec::new();
        }

        match self.try_search(query).await {
            Ok(hits) => hits,
            Err(e) => {
                tracing::warn!(error = %e, query, "place search failed, using fallback list");
                fallback::match_places(query)
            }
        }
    }

    /// Reverse-geocode a map position to a named location.
    ///
    /// `None` means the provider answered and found no feature at the
    /// point. Transport and parse failures produce a coordinate-derived
    /// label instead; this method never fails.
    pub async fn reverse_geocode(&self, point: LatLng) -> Option<ResolvedLocation> {
        match self.try_reverse(point).await {
            Ok(resolved) => resolved,
            Err(e) => {
                tracing::warn!(error = %e, "reverse geocode failed, labeling by coordinate");
                Some(fallback::reverse_label(point))
            }
        }
    }

    /// Fetch live driving directions between two points.
    ///
    /// `None` covers both "no route found" and provider failure. There is
    /// no synthetic directions fallback; the caller decides what a missing
    /// itinerary means.
    pub async fn fetch_directions(&self, start: LatLng, end: LatLng) -> Option<Itinerary> {
        match self.try_directions(start, end).await {
            Ok(itinerary) => itinerary,
            Err(e) => {
                tracing::warn!(error = %e, "directions fetch failed");
                None
            }
        }
    }

    /// Paced search against the provider. Used directly by the caching
    /// wrapper so fallback answers are not cached.
    pub(crate) async fn try_search(&self, query: &str) -> Result<Vec<PlaceHit>, GeocodeError> {
        self.limiter.pace(self.config.search_interval).await;

        let url = format!("{}/v1/geocode/search", self.config.base_url);
        let country = format!("countrycode:{}", self.config.country_code);
        let response = self
            .http
            .get(&url)
            .query(&[
                ("text", query),
                ("filter", country.as_str()),
                ("apiKey", self.config.api_key.as_str()),
            ])
            .send()
            .await?;

        let parsed: GeocodeResponse = parse_body(response).await?;
        Ok(convert::place_hits(parsed))
    }

    /// Paced reverse lookup against the provider.
    pub(crate) async fn try_reverse(
        &self,
        point: LatLng,
    ) -> Result<Option<ResolvedLocation>, GeocodeError> {
        self.limiter.pace(self.config.reverse_interval).await;

        let url = format!("{}/v1/geocode/reverse", self.config.base_url);
        let lat = point.latitude.to_string();
        let lon = point.longitude.to_string();
        let response = self
            .http
            .get(&url)
            .query(&[
                ("lat", lat.as_str()),
                ("lon", lon.as_str()),
                ("apiKey", self.config.api_key.as_str()),
            ])
            .send()
            .await?;

        let parsed: GeocodeResponse = parse_body(response).await?;
        Ok(parsed
            .features
            .first()
            .map(|f| convert::resolve_location(&f.properties)))
    }

    async fn try_directions(
        &self,
        start: LatLng,
        end: LatLng,
    ) -> Result<Option<Itinerary>, GeocodeError> {
        self.limiter.pace(self.config.search_interval).await;

        let url = format!("{}/v1/routing", self.config.base_url);
        let waypoints = format!(
            "{},{}|{},{}",
            start.latitude, start.longitude, end.latitude, end.longitude
        );
        let response = self
            .http
            .get(&url)
            .query(&[
                ("waypoints", waypoints.as_str()),
                ("mode", "drive"),
                ("apiKey", self.config.api_key.as_str()),
            ])
            .send()
            .await?;

        let parsed: RoutingResponse = parse_body(response).await?;
        Ok(convert::route_itinerary(parsed))
    }
}

/// Check the status and deserialize the body.
async fn parse_body<T: serde::de::DeserializeOwned>(
    response: reqwest::Response,
) -> Result<T, GeocodeError> {
    let status = response.status();

    if !status.is_success() {
        let body = response.text().await.unwrap_or_default();
        return Err(GeocodeError::Api {
            status: status.as_u16(),
            message: body,
        });
    }

    let body = response.text().await?;
    serde_json::from_str(&body).map_err(|e| GeocodeError::Json {
        message: e.to_string(),
    })
}
