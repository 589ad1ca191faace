//! Utilidades del sistema
//!
//! Este módulo contiene utilidades para manejo de errores y validación
//! de las peticiones entrantes.

pub mod errors;
pub mod validation;
