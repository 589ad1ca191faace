//! Servicio de vehículos
//!
//! Lógica de negocio sobre el `VehicleStore`: lectura, alta, baja y
//! actualización con fusión de campos.

use std::sync::Arc;

use tracing::{info, warn};

use crate::models::vehicle::{NewVehicle, Vehicle, VehiclePatch};
use crate::repositories::vehicle_repository::VehicleStore;
use crate::utils::errors::{not_found_error, AppResult};

#[derive(Clone)]
pub struct VehicleService {
    store: Arc<dyn VehicleStore>,
}

impl VehicleService {
    pub fn new(store: Arc<dyn VehicleStore>) -> Self {
        Self { store }
    }

    pub async fn read_all(&self) -> AppResult<Vec<Vehicle>> {
        self.store.list().await
    }

    /// `None` significa "no encontrado", no es un error
    pub async fn read(&self, id: i64) -> AppResult<Option<Vehicle>> {
        self.store.get(id).await
    }

    pub async fn create(&self, vehicle: NewVehicle) -> AppResult<Vehicle> {
        let created = self.store.insert(&vehicle).await?;
        info!("🚗 Vehículo creado: id={} {} {}", created.id, created.brand, created.model);
        Ok(created)
    }

    /// Devuelve `false` si el vehículo no existe
    pub async fn delete(&self, id: i64) -> AppResult<bool> {
        match self.read(id).await? {
            Some(vehicle) => {
                self.store.delete(&vehicle).await?;
                info!("🗑️ Vehículo eliminado: id={}", id);
                Ok(true)
            }
            None => {
                warn!("🔍 Vehículo {} no existe, nada que eliminar", id);
                Ok(false)
            }
        }
    }

    /// Falla con `AppError::NotFound` si el id no existe
    pub async fn update(&self, id: i64, patch: VehiclePatch) -> AppResult<Vehicle> {
        let existing = self
            .read(id)
            .await?
            .ok_or_else(|| not_found_error("Vehicle", &id.to_string()))?;

        let merged = patch.merge_onto(existing);
        let saved = self.store.save(&merged).await?;
        info!("✏️ Vehículo actualizado: id={}", saved.id);
        Ok(saved)
    }
}
