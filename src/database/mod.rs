//! Módulo de base de datos
//!
//! Maneja la conexión con SQLite, las migraciones y los datos iniciales.

pub mod connection;
pub mod seed;

pub use connection::create_pool;
pub use seed::seed_vehicles;
