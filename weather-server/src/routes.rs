//! Route definitions and handlers

use axum::{
    Json, Router,
    extract::{Query, State},
    routing::get,
};
use serde::{Deserialize, Serialize};
use tower_http::{cors::CorsLayer, services::ServeDir, trace::TraceLayer};
use tracing::debug;
use weather_core::UnitSystem;

use crate::{error::ApiError, state::AppState};

/// Query string of `GET /weather`.
#[derive(Debug, Deserialize)]
pub struct WeatherParams {
    #[serde(rename = "cityName")]
    pub city_name: Option<String>,
    pub units: Option<String>,
}

impl WeatherParams {
    /// Unrecognized values fall through to the provider default.
    fn unit_system(&self) -> Option<UnitSystem> {
        let raw = self.units.as_deref()?;
        match raw.parse() {
            Ok(units) => Some(units),
            Err(e) => {
                debug!("ignoring units parameter: {e}");
                None
            }
        }
    }
}

/// Geocode `cityName` and return the provider payload unchanged.
pub async fn get_weather(
    State(state): State<AppState>,
    Query(params): Query<WeatherParams>,
) -> Result<Json<serde_json::Value>, ApiError> {
    let units = params.unit_system();
    let payload = state.proxy.fetch(params.city_name.as_deref(), units).await?;

    Ok(Json(payload))
}

#[derive(Debug, Serialize)]
pub struct HealthResponse {
    pub status: &'static str,
    pub version: &'static str,
}

pub async fn health_check() -> Json<HealthResponse> {
    Json(HealthResponse { status: "ok", version: env!("CARGO_PKG_VERSION") })
}

/// Create the main router with all routes and middleware.
pub fn create_router(state: AppState) -> Router {
    let static_dir = state.static_dir.clone();

    let router = Router::new()
        .route("/weather", get(get_weather))
        .route("/health", get(health_check))
        .with_state(state);

    let router = match static_dir {
        Some(dir) => router.fallback_service(ServeDir::new(dir)),
        None => router,
    };

    router.layer(CorsLayer::permissive()).layer(TraceLayer::new_for_http())
}
