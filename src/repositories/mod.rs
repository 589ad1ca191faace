//! Repositorios
//!
//! Capa de acceso a datos sobre SQLite.

pub mod vehicle_repository;

pub use vehicle_repository::{SqliteVehicleRepository, VehicleStore};
