//! Datos iniciales
//!
//! Carga un conjunto fijo de vehículos cuando la tabla está vacía.

use tracing::info;

use crate::models::vehicle::NewVehicle;
use crate::repositories::vehicle_repository::VehicleStore;
use crate::utils::errors::AppResult;

/// Vehículos insertados en un arranque con la base vacía
pub fn default_vehicles() -> Vec<NewVehicle> {
    vec![
        NewVehicle::new("Toyota", "Corolla", 2020, false),
        NewVehicle::new("Honda", "Civic", 2019, false),
        NewVehicle::new("Ford", "Focus", 2018, false),
        NewVehicle::new("VW", "Fusca Stringray", 1963, true),
    ]
}

/// Devuelve cuántos vehículos se insertaron (0 si ya había datos)
pub async fn seed_vehicles(store: &dyn VehicleStore) -> AppResult<usize> {
    let existing = store.count().await?;
    if existing > 0 {
        info!("🌱 Base con {} vehículos, se omite la carga inicial", existing);
        return Ok(0);
    }

    let vehicles = default_vehicles();
    store.insert_many(&vehicles).await?;
    info!("🌱 {} vehículos de ejemplo cargados", vehicles.len());
    Ok(vehicles.len())
}
