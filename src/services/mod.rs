//! Services module
//!
//! Este módulo contiene la lógica de negocio de la aplicación.
//! Los servicios reciben sus dependencias por constructor y no conocen
//! los detalles de HTTP ni de SQL.

pub mod vehicle_service;

pub use vehicle_service::VehicleService;
