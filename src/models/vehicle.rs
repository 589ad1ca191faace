use serde::{Deserialize, Serialize};
use sqlx::FromRow;

/// Vehículo persistido en la tabla `vehicles`
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, FromRow)]
#[serde(rename_all = "camelCase")]
pub struct Vehicle {
    pub id: i64,
    pub brand: String,
    pub model: String,
    pub year: i32,
    pub is_classic: bool,
}

/// Vehículo todavía sin id asignado por la base de datos
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NewVehicle {
    pub brand: String,
    pub model: String,
    pub year: i32,
    pub is_classic: bool,
}

impl NewVehicle {
    pub fn new(brand: impl Into<String>, model: impl Into<String>, year: i32, is_classic: bool) -> Self {
        Self {
            brand: brand.into(),
            model: model.into(),
            year,
            is_classic,
        }
    }
}

/// Cambios a aplicar sobre un vehículo existente.
///
/// Los campos en `None` conservan el valor actual. `is_classic` no tiene
/// representación nula y siempre sobrescribe el valor almacenado.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct VehiclePatch {
    pub brand: Option<String>,
    pub model: Option<String>,
    pub year: Option<i32>,
    pub is_classic: bool,
}

impl VehiclePatch {
    /// Combina el patch con el registro existente; el id nunca cambia
    pub fn merge_onto(self, existing: Vehicle) -> Vehicle {
        Vehicle {
            id: existing.id,
            brand: self.brand.unwrap_or(existing.brand),
            model: self.model.unwrap_or(existing.model),
            year: self.year.unwrap_or(existing.year),
            is_classic: self.is_classic,
        }
    }
}
