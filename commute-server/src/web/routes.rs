//! HTTP route handlers.

use axum::{
    Json, Router,
    extract::{Query, State},
    http::StatusCode,
    response::IntoResponse,
    routing::{get, post},
};
use tower_http::trace::TraceLayer;

use crate::domain::LatLng;
use crate::planner;

use super::dto::*;
use super::state::AppState;

/// Create the application router.
pub fn create_router(state: AppState) -> Router {
    Router::new()
        .route("/health", get(health))
        .route("/api/terminals", get(list_terminals))
        .route("/api/places/search", get(search_places))
        .route("/api/places/reverse", get(reverse_geocode))
        .route("/api/route/graph", post(graph_route))
        .route("/api/route/live", post(live_route))
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}

/// Health check endpoint.
async fn health() -> &'static str {
    "ok"
}

/// List the district's terminals, for map markers.
async fn list_terminals(State(state): State<AppState>) -> Json<TerminalsResponse> {
    let terminals = state
        .graph
        .terminals()
        .map(|(_, terminal)| TerminalResult::from(terminal))
        .collect();

    Json(TerminalsResponse { terminals })
}

/// Place search for the autocomplete field.
async fn search_places(
    State(state): State<AppState>,
    Query(req): Query<PlaceSearchRequest>,
) -> Json<PlaceSearchResponse> {
    let places = state.geocoder.search_places(&req.q).await;

    Json(PlaceSearchResponse {
        places: places.iter().map(PlaceResult::from).collect(),
    })
}

/// Reverse-geocode a map position.
async fn reverse_geocode(
    State(state): State<AppState>,
    Query(req): Query<ReverseGeocodeRequest>,
) -> Result<Json<ReverseGeocodeResponse>, AppError> {
    let point = LatLng::new(req.lat, req.lng);

    match state.geocoder.reverse_geocode(point).await {
        Some(resolved) => Ok(Json(ReverseGeocodeResponse {
            short_name: resolved.short_name,
            area_label: resolved.area_label,
        })),
        None => Err(AppError::NotFound {
            message: "no known feature at this position".to_string(),
        }),
    }
}

/// Plan a route over the static district graph.
async fn graph_route(
    State(state): State<AppState>,
    Json(req): Json<GraphRouteRequest>,
) -> Result<Json<ItineraryResult>, AppError> {
    match planner::shortest_path(&state.graph, req.start, req.end, req.metric) {
        Some(itinerary) => Ok(Json(ItineraryResult::from(&itinerary))),
        None => Err(AppError::NotFound {
            message: "no route between these points".to_string(),
        }),
    }
}

/// Fetch live directions and expand them into the three variants.
async fn live_route(
    State(state): State<AppState>,
    Json(req): Json<LiveRouteRequest>,
) -> Result<Json<RouteVariantsResponse>, AppError> {
    match state.geocoder.fetch_directions(req.start, req.end).await {
        Some(base) => {
            let variants = planner::expand(&base);
            Ok(Json(RouteVariantsResponse {
                fastest: ItineraryResult::from(&variants.fastest),
                cheapest: ItineraryResult::from(&variants.cheapest),
                shortest: ItineraryResult::from(&variants.shortest),
            }))
        }
        None => Err(AppError::Unavailable {
            message: "live directions are unavailable, try again".to_string(),
        }),
    }
}

/// Error response for route handlers.
#[derive(Debug)]
pub enum AppError {
    NotFound { message: String },
    Unavailable { message: String },
}

impl IntoResponse for AppError {
    fn into_response(self) -> axum::response::Response {
        let (status, message) = match self {
            AppError::NotFound { message } => (StatusCode::NOT_FOUND, message),
            AppError::Unavailable { message } => (StatusCode::SERVICE_UNAVAILABLE, message),
        };

        tracing::debug!(status = %status, error = %message, "request failed");

        (status, Json(ErrorResponse { error: message })).into_response()
    }
}
