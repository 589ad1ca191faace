//! Modelos del sistema
//!
//! Este módulo contiene los modelos de datos que mapean exactamente
//! al schema SQLite de la tabla `vehicles`.

pub mod vehicle;

pub use vehicle::{NewVehicle, Vehicle, VehiclePatch};
