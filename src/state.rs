//! Shared application state
//!
//! Este módulo define el estado compartido de la aplicación que se pasa
//! a través del router de Axum.

use std::sync::Arc;

use sqlx::SqlitePool;

use crate::config::environment::EnvironmentConfig;
use crate::repositories::vehicle_repository::SqliteVehicleRepository;
use crate::services::vehicle_service::VehicleService;

#[derive(Clone)]
pub struct AppState {
    pub pool: SqlitePool,
    pub config: EnvironmentConfig,
    pub vehicles: VehicleService,
}

impl AppState {
    pub fn new(pool: SqlitePool, config: EnvironmentConfig) -> Self {
        let store = Arc::new(SqliteVehicleRepository::new(pool.clone()));
        Self {
            pool,
            config,
            vehicles: VehicleService::new(store),
        }
    }
}
