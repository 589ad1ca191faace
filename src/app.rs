//! Arranque de la aplicación
//!
//! Conecta la base de datos, aplica migraciones, carga los datos iniciales
//! y construye el estado compartido antes de aceptar tráfico.

use anyhow::{Context, Result};
use tracing::{info, warn};

use crate::config::{DatabaseConfig, EnvironmentConfig};
use crate::database::{create_pool, seed_vehicles};
use crate::repositories::vehicle_repository::SqliteVehicleRepository;
use crate::state::AppState;

pub async fn bootstrap(config: EnvironmentConfig, database: &DatabaseConfig) -> Result<AppState> {
    if config.is_production() && database.is_in_memory() {
        warn!("⚠️ Base de datos en memoria en producción: los datos se pierden al reiniciar");
    }

    let pool = create_pool(database)
        .await
        .context("Error de base de datos")?;

    if config.seed_on_startup {
        let store = SqliteVehicleRepository::new(pool.clone());
        seed_vehicles(&store)
            .await
            .context("Error cargando datos iniciales")?;
    } else {
        info!("🌱 Carga inicial deshabilitada (SEED_ON_STARTUP=false)");
    }

    Ok(AppState::new(pool, config))
}
