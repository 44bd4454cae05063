//! Application state for the web layer.

use std::sync::Arc;

use crate::geocoding::CachedGeocodingClient;
use crate::graph::TransitGraph;

/// Shared application state.
///
/// Contains the services needed to handle requests.
#[derive(Clone)]
pub struct AppState {
    /// Static district transit graph
    pub graph: Arc<TransitGraph>,

    /// Cached, throttled mapping-provider client
    pub geocoder: Arc<CachedGeocodingClient>,
}

impl AppState {
    /// Create a new app state.
    pub fn new(graph: TransitGraph, geocoder: CachedGeocodingClient) -> Self {
        Self {
            graph: Arc::new(graph),
            geocoder: Arc::new(geocoder),
        }
    }
}
