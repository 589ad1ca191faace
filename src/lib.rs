//! Vehicle Registry
//!
//! API REST CRUD para registros de vehículos sobre SQLite.

pub mod app;
pub mod config;
pub mod database;
pub mod dto;
pub mod middleware;
pub mod models;
pub mod repositories;
pub mod routes;
pub mod services;
pub mod state;
pub mod utils;

pub use app::bootstrap;
pub use routes::create_app_router;
pub use state::AppState;
