use std::net::SocketAddr;

use commute_server::geocoding::{
    CachedGeocodingClient, GeoCacheConfig, GeocodingClient, GeocodingConfig,
};
use commute_server::graph::district_graph;
use commute_server::web::{AppState, create_router};
use tracing_subscriber::EnvFilter;

#[tokio::main]
async fn main() {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .init();

    // Without a key every provider call fails over to the local district
    // data, which is still a usable offline mode.
    let api_key = std::env::var("GEO_API_KEY").unwrap_or_else(|_| {
        tracing::warn!("GEO_API_KEY not set; provider calls will fail over to local data");
        String::new()
    });

    let graph = district_graph();
    tracing::info!(terminals = graph.node_count(), "district graph loaded");

    let geocoding_config = GeocodingConfig::new(&api_key);
    let client = GeocodingClient::new(geocoding_config).expect("failed to create geocoding client");
    let geocoder = CachedGeocodingClient::new(client, &GeoCacheConfig::default());

    let state = AppState::new(graph, geocoder);
    let app = create_router(state);

    let addr = SocketAddr::from(([127, 0, 0, 1], 3000));
    tracing::info!(%addr, "commute planner listening");

    let listener = tokio::net::TcpListener::bind(addr)
        .await
        .expect("failed to bind");
    axum::serve(listener, app).await.expect("server error");
}
