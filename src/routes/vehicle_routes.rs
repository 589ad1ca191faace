use axum::{
    extract::State,
    http::StatusCode,
    response::{IntoResponse, Response},
    routing::get,
    Json, Router,
};
use tracing::warn;

use crate::dto::vehicle_dto::{
    CreateVehicleRequest, DeleteVehicleParams, UpdateVehicleRequest, UpdatedVehicleResponse,
    VehicleStatusResponse,
};
use crate::models::vehicle::Vehicle;
use crate::state::AppState;
use crate::utils::errors::{AppError, AppResult};
use crate::utils::validation::{ApiPath, ApiQuery, ValidatedJson};

pub fn create_vehicle_router() -> Router<AppState> {
    Router::new()
        .route(
            "/vehicles",
            get(list_vehicles).post(create_vehicle).delete(delete_vehicle),
        )
        .route("/vehicles/:id", get(get_vehicle).put(update_vehicle))
}

async fn list_vehicles(State(state): State<AppState>) -> AppResult<Json<Vec<Vehicle>>> {
    let vehicles = state.vehicles.read_all().await?;
    Ok(Json(vehicles))
}

/// Un id inexistente responde 200 con `null`
async fn get_vehicle(
    State(state): State<AppState>,
    ApiPath(id): ApiPath<i64>,
) -> AppResult<Json<Option<Vehicle>>> {
    let vehicle = state.vehicles.read(id).await?;
    Ok(Json(vehicle))
}

async fn create_vehicle(
    State(state): State<AppState>,
    ValidatedJson(request): ValidatedJson<CreateVehicleRequest>,
) -> AppResult<Json<Vehicle>> {
    let vehicle = state.vehicles.create(request.into_new_vehicle()).await?;
    Ok(Json(vehicle))
}

/// Sólo `NotFound` se traduce a 404 sin cuerpo; el resto de errores se propaga
async fn update_vehicle(
    State(state): State<AppState>,
    ApiPath(id): ApiPath<i64>,
    ValidatedJson(request): ValidatedJson<UpdateVehicleRequest>,
) -> AppResult<Response> {
    match state.vehicles.update(id, request.into()).await {
        Ok(vehicle) => Ok(Json(UpdatedVehicleResponse::from(vehicle)).into_response()),
        Err(AppError::NotFound(message)) => {
            warn!("🔍 Update rechazado: {}", message);
            Ok(StatusCode::NOT_FOUND.into_response())
        }
        Err(e) => Err(e),
    }
}

/// Responde siempre 200; el resultado viaja en `status`
async fn delete_vehicle(
    State(state): State<AppState>,
    ApiQuery(params): ApiQuery<DeleteVehicleParams>,
) -> AppResult<Json<VehicleStatusResponse>> {
    let deleted = state.vehicles.delete(params.id).await?;
    Ok(Json(VehicleStatusResponse::for_delete(params.id, deleted)))
}
