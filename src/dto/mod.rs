//! DTOs de la API
//!
//! Estructuras de request y response tal como viajan por HTTP.

pub mod vehicle_dto;
