//! Throttled gateway to the external mapping provider.
//!
//! Three operations: place search, reverse geocoding, and live driving
//! directions. Every outbound call paces itself from a shared timestamp,
//! and failures never reach the caller: search and reverse lookups fail
//! open to local district data, directions fail to `None`.

mod cache;
mod client;
mod convert;
mod error;
mod fallback;
mod throttle;
mod types;

pub use cache::{CachedGeocodingClient, GeoCacheConfig};
pub use client::{GeocodingClient, GeocodingConfig};
pub use convert::{BASE_FARE, PlaceHit, ResolvedLocation, estimate_fare};
pub use error::GeocodeError;
pub use throttle::RateLimiter;
