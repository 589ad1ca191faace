//! Rutas HTTP
//!
//! Ensambla el router completo de la API.

pub mod vehicle_routes;

use axum::{extract::State, http::StatusCode, response::Json, routing::get, Router};
use serde_json::json;
use tower_http::trace::TraceLayer;
use tracing::error;

use crate::middleware::cors::cors_from_config;
use crate::state::AppState;

/// Router completo con middleware y estado aplicados
pub fn create_app_router(state: AppState) -> Router {
    let cors = cors_from_config(&state.config.cors_origins);

    Router::new()
        .route("/health", get(health_check))
        .merge(vehicle_routes::create_vehicle_router())
        .layer(TraceLayer::new_for_http())
        .layer(cors)
        .with_state(state)
}

/// Health check con ping a la base de datos; 503 si no responde
async fn health_check(State(state): State<AppState>) -> (StatusCode, Json<serde_json::Value>) {
    let (status, database) = match sqlx::query("SELECT 1").execute(&state.pool).await {
        Ok(_) => (StatusCode::OK, "ok"),
        Err(e) => {
            error!("❌ Health check sin base de datos: {}", e);
            (StatusCode::SERVICE_UNAVAILABLE, "unavailable")
        }
    };

    let body = json!({
        "status": if status == StatusCode::OK { "ok" } else { "degraded" },
        "service": "vehicle-registry",
        "database": database,
        "timestamp": chrono::Utc::now().to_rfc3339(),
    });

    (status, Json(body))
}
