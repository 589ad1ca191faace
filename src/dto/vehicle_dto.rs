use serde::{Deserialize, Serialize};
use validator::Validate;

use crate::models::vehicle::{NewVehicle, Vehicle, VehiclePatch};

// Request para crear un vehículo
#[derive(Debug, Deserialize, Validate)]
#[serde(rename_all = "camelCase")]
pub struct CreateVehicleRequest {
    #[validate(
        required(message = "brand is required"),
        length(min = 1, message = "brand must not be empty")
    )]
    pub brand: Option<String>,

    #[validate(
        required(message = "model is required"),
        length(min = 1, message = "model must not be empty")
    )]
    pub model: Option<String>,

    #[validate(required(message = "year must not be null"))]
    pub year: Option<i32>,

    #[serde(default)]
    pub is_classic: bool,
}

impl CreateVehicleRequest {
    /// Sólo debe llamarse después de `validate()`
    pub fn into_new_vehicle(self) -> NewVehicle {
        NewVehicle {
            brand: self.brand.unwrap_or_default(),
            model: self.model.unwrap_or_default(),
            year: self.year.unwrap_or_default(),
            is_classic: self.is_classic,
        }
    }
}

// Request para actualizar un vehículo; los campos ausentes conservan su valor
#[derive(Debug, Deserialize, Validate)]
#[serde(rename_all = "camelCase")]
pub struct UpdateVehicleRequest {
    #[validate(length(min = 1, message = "brand must not be empty"))]
    pub brand: Option<String>,

    #[validate(length(min = 1, message = "model must not be empty"))]
    pub model: Option<String>,

    pub year: Option<i32>,

    #[serde(default)]
    pub is_classic: bool,
}

impl From<UpdateVehicleRequest> for VehiclePatch {
    fn from(request: UpdateVehicleRequest) -> Self {
        Self {
            brand: request.brand,
            model: request.model,
            year: request.year,
            is_classic: request.is_classic,
        }
    }
}

// Response de actualización (sin id)
#[derive(Debug, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct UpdatedVehicleResponse {
    pub brand: String,
    pub model: String,
    pub year: i32,
    pub is_classic: bool,
}

impl From<Vehicle> for UpdatedVehicleResponse {
    fn from(vehicle: Vehicle) -> Self {
        Self {
            brand: vehicle.brand,
            model: vehicle.model,
            year: vehicle.year,
            is_classic: vehicle.is_classic,
        }
    }
}

// Parámetros de la eliminación: DELETE /vehicles?id={id}
#[derive(Debug, Deserialize)]
pub struct DeleteVehicleParams {
    pub id: i64,
}

// Response de eliminación; siempre viaja con HTTP 200
#[derive(Debug, Serialize, Deserialize, PartialEq, Eq)]
pub struct VehicleStatusResponse {
    pub status: bool,
    pub message: String,
}

impl VehicleStatusResponse {
    pub fn for_delete(id: i64, deleted: bool) -> Self {
        let message = if deleted {
            "Record removed!".to_string()
        } else {
            format!("Record {} not found!", id)
        };

        Self {
            status: deleted,
            message,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn create_request(value: serde_json::Value) -> CreateVehicleRequest {
        serde_json::from_value(value).expect("deserializable")
    }

    #[test]
    fn test_create_request_defaults_is_classic() {
        let request = create_request(json!({ "brand": "Toyota", "model": "Corolla", "year": 2020 }));
        assert!(request.validate().is_ok());
        assert_eq!(
            request.into_new_vehicle(),
            NewVehicle::new("Toyota", "Corolla", 2020, false)
        );
    }

    #[test]
    fn test_create_request_rejects_empty_brand() {
        let request = create_request(json!({ "brand": "", "model": "Corolla", "year": 2020 }));
        let errors = request.validate().unwrap_err();
        assert!(errors.field_errors().contains_key("brand"));
        assert!(!errors.field_errors().contains_key("model"));
    }

    #[test]
    fn test_create_request_requires_every_field() {
        let request = create_request(json!({ "isClassic": true }));
        let errors = request.validate().unwrap_err();
        let fields = errors.field_errors();
        assert!(fields.contains_key("brand"));
        assert!(fields.contains_key("model"));
        assert!(fields.contains_key("year"));
    }

    #[test]
    fn test_update_request_allows_partial_payload() {
        let request: UpdateVehicleRequest = serde_json::from_value(json!({ "year": 2001 })).unwrap();
        assert!(request.validate().is_ok());

        let patch = VehiclePatch::from(request);
        assert_eq!(patch.year, Some(2001));
        assert_eq!(patch.brand, None);
        assert!(!patch.is_classic);
    }

    #[test]
    fn test_update_request_rejects_supplied_empty_model() {
        let request: UpdateVehicleRequest = serde_json::from_value(json!({ "model": "" })).unwrap();
        assert!(request.validate().is_err());
    }

    #[test]
    fn test_delete_messages() {
        assert_eq!(VehicleStatusResponse::for_delete(3, true).message, "Record removed!");

        let missing = VehicleStatusResponse::for_delete(9, false);
        assert!(!missing.status);
        assert_eq!(missing.message, "Record 9 not found!");
    }
}
