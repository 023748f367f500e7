//! HTTP routes for querying a loaded metro network

use std::sync::Arc;
use std::time::Duration;

use axum::error_handling::HandleErrorLayer;
use axum::extract::{Query, State};
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::routing::get;
use axum::{BoxError, Json, Router};
use metroroute_core::prelude::*;
use serde::{Deserialize, Serialize};
use tower::ServiceBuilder;
use tower_http::cors::CorsLayer;
use tower_http::trace::TraceLayer;

use crate::config::ServerConfig;

pub type SharedNetwork = Arc<MetroNetwork>;

#[derive(Debug, Deserialize)]
pub struct RouteQuery {
    pub from: String,
    pub to: String,
}

#[derive(Debug, Deserialize)]
pub struct ReachableQuery {
    pub from: String,
    pub max_minutes: Minutes,
}

#[derive(Debug, Serialize, Deserialize)]
pub struct ReachableEntry {
    pub station: Station,
    pub travel_time: Minutes,
}

#[derive(Debug, Serialize, Deserialize)]
pub struct ErrorResponse {
    pub error: String,
}

#[derive(Debug)]
pub enum ApiError {
    UnknownStation(String),
    NoRoute { from: String, to: String },
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let error = match self {
            ApiError::UnknownStation(id) => format!("Unknown station: {id}"),
            ApiError::NoRoute { from, to } => format!("No route from {from} to {to}"),
        };
        (StatusCode::NOT_FOUND, Json(ErrorResponse { error })).into_response()
    }
}

/// Routes without middleware
pub fn routes(network: SharedNetwork) -> Router {
    Router::new()
        .route("/health", get(health))
        .route("/stations", get(stations))
        .route("/routes/least-transfers", get(least_transfers))
        .route("/routes/fastest", get(fastest))
        .route("/reachable", get(reachable))
        .with_state(network)
}

/// Routes wrapped in tracing, CORS, timeout and concurrency limit layers
pub fn app(network: SharedNetwork, config: &ServerConfig) -> Router {
    routes(network).layer(
        ServiceBuilder::new()
            .layer(TraceLayer::new_for_http())
            .layer(CorsLayer::permissive())
            .layer(HandleErrorLayer::new(handle_middleware_error))
            .concurrency_limit(config.concurrency_limit)
            .timeout(Duration::from_secs(config.request_timeout_secs)),
    )
}

async fn handle_middleware_error(err: BoxError) -> (StatusCode, Json<ErrorResponse>) {
    if err.is::<tower::timeout::error::Elapsed>() {
        (
            StatusCode::REQUEST_TIMEOUT,
            Json(ErrorResponse {
                error: "Request timed out".to_string(),
            }),
        )
    } else {
        tracing::error!("Unhandled middleware error: {err}");
        (
            StatusCode::INTERNAL_SERVER_ERROR,
            Json(ErrorResponse {
                error: format!("Unhandled internal error: {err}"),
            }),
        )
    }
}

async fn health() -> &'static str {
    "ok"
}

async fn stations(State(network): State<SharedNetwork>) -> Json<Vec<Station>> {
    Json(network.stations().to_vec())
}

async fn least_transfers(
    State(network): State<SharedNetwork>,
    Query(query): Query<RouteQuery>,
) -> Result<Json<RouteSummary>, ApiError> {
    check_endpoints(&network, &query)?;
    let route = network.find_least_transfers(&query.from, &query.to);
    respond_with_route(route, query)
}

async fn fastest(
    State(network): State<SharedNetwork>,
    Query(query): Query<RouteQuery>,
) -> Result<Json<RouteSummary>, ApiError> {
    check_endpoints(&network, &query)?;
    let route = network.find_fastest_route(&query.from, &query.to);
    respond_with_route(route, query)
}

async fn reachable(
    State(network): State<SharedNetwork>,
    Query(query): Query<ReachableQuery>,
) -> Result<Json<Vec<ReachableEntry>>, ApiError> {
    let reached = reachable_within(&network, &query.from, query.max_minutes)
        .ok_or(ApiError::UnknownStation(query.from))?;

    Ok(Json(
        reached
            .into_iter()
            .map(|r| ReachableEntry {
                station: r.station.clone(),
                travel_time: r.travel_time,
            })
            .collect(),
    ))
}

fn check_endpoints(network: &MetroNetwork, query: &RouteQuery) -> Result<(), ApiError> {
    for id in [&query.from, &query.to] {
        if network.station_index(id).is_none() {
            return Err(ApiError::UnknownStation(id.clone()));
        }
    }
    Ok(())
}

fn respond_with_route(
    route: Option<Route<'_>>,
    query: RouteQuery,
) -> Result<Json<RouteSummary>, ApiError> {
    match route {
        Some(route) => {
            tracing::debug!(
                "{} -> {}: {} connections, {} min",
                query.from,
                query.to,
                route.connections(),
                route.travel_time()
            );
            Ok(Json(route.summary()))
        }
        None => Err(ApiError::NoRoute {
            from: query.from,
            to: query.to,
        }),
    }
}

#[cfg(test)]
mod tests {
    use axum::body::Body;
    use axum::http::Request;
    use serde::de::DeserializeOwned;
    use tower::ServiceExt;

    use super::*;

    fn network() -> SharedNetwork {
        let mut network = sample_network();
        network.add_station("Z1", "Depot", "Service");
        Arc::new(network)
    }

    async fn get_json<T: DeserializeOwned>(router: Router, uri: &str) -> (StatusCode, T) {
        let response = router
            .oneshot(Request::builder().uri(uri).body(Body::empty()).unwrap())
            .await
            .unwrap();
        let status = response.status();
        let body = axum::body::to_bytes(response.into_body(), usize::MAX)
            .await
            .unwrap();
        (status, serde_json::from_slice(&body).unwrap())
    }

    #[tokio::test]
    async fn health_check() {
        let response = routes(network())
            .oneshot(Request::builder().uri("/health").body(Body::empty()).unwrap())
            .await
            .unwrap();
        assert_eq!(response.status(), StatusCode::OK);
    }

    #[tokio::test]
    async fn fastest_route() {
        let (status, route): (_, RouteSummary) =
            get_json(routes(network()), "/routes/fastest?from=M1&to=K4").await;

        assert_eq!(status, StatusCode::OK);
        assert_eq!(route.station_ids(), ["M1", "M2", "K1", "K2", "K3", "K4"]);
        assert_eq!(route.travel_time, 25);
        assert_eq!(route.line_changes, 1);
    }

    #[tokio::test]
    async fn least_transfers_route() {
        let (status, route): (_, RouteSummary) =
            get_json(routes(network()), "/routes/least-transfers?from=T1&to=T4").await;

        assert_eq!(status, StatusCode::OK);
        assert_eq!(route.connections, 3);
        assert_eq!(route.to_string(), "Batıkent -> Demetevler -> Gar -> Kecioren");
    }

    #[tokio::test]
    async fn unknown_station_is_not_found() {
        let (status, body): (_, ErrorResponse) =
            get_json(routes(network()), "/routes/fastest?from=M1&to=Q7").await;

        assert_eq!(status, StatusCode::NOT_FOUND);
        assert_eq!(body.error, "Unknown station: Q7");
    }

    #[tokio::test]
    async fn unreachable_station_is_not_found() {
        let (status, body): (_, ErrorResponse) =
            get_json(routes(network()), "/routes/least-transfers?from=M1&to=Z1").await;

        assert_eq!(status, StatusCode::NOT_FOUND);
        assert_eq!(body.error, "No route from M1 to Z1");
    }

    #[tokio::test]
    async fn missing_query_parameter_is_rejected() {
        let response = routes(network())
            .oneshot(
                Request::builder()
                    .uri("/routes/fastest?from=M1")
                    .body(Body::empty())
                    .unwrap(),
            )
            .await
            .unwrap();
        assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    }

    #[tokio::test]
    async fn reachable_within_budget() {
        let (status, reached): (_, Vec<ReachableEntry>) =
            get_json(routes(network()), "/reachable?from=M1&max_minutes=7").await;

        assert_eq!(status, StatusCode::OK);
        let ids: Vec<&str> = reached.iter().map(|r| r.station.id.as_str()).collect();
        assert_eq!(ids, ["M1", "M2", "K1"]);
    }

    #[tokio::test]
    async fn stations_through_full_middleware_stack() {
        let config = ServerConfig::default();
        let (status, stations): (_, Vec<Station>) =
            get_json(app(network(), &config), "/stations").await;

        assert_eq!(status, StatusCode::OK);
        assert_eq!(stations.len(), 13);
        assert_eq!(stations[0].id, "K1");
    }
}
