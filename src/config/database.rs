//! Configuración de base de datos
//!
//! Este módulo maneja la conexión y configuración de SQLite con SQLx.

use std::str::FromStr;
use std::time::Duration;

use sqlx::sqlite::{SqliteConnectOptions, SqlitePool, SqlitePoolOptions};
use tracing::warn;

/// URL usada cuando no se define `DATABASE_URL`
pub const DEFAULT_DATABASE_URL: &str = "sqlite::memory:";

/// Configuración de la base de datos
#[derive(Debug, Clone)]
pub struct DatabaseConfig {
    pub url: String,
    pub max_connections: u32,
    pub min_connections: u32,
    pub connect_timeout: Duration,
    pub idle_timeout: Duration,
    pub max_lifetime: Duration,
}

impl Default for DatabaseConfig {
    fn default() -> Self {
        Self {
            url: DEFAULT_DATABASE_URL.to_string(),
            max_connections: 5,
            min_connections: 1,
            connect_timeout: Duration::from_secs(30),
            idle_timeout: Duration::from_secs(300),
            max_lifetime: Duration::from_secs(3600),
        }
    }
}

impl DatabaseConfig {
    /// Leer la configuración desde las variables de entorno
    pub fn from_env() -> Self {
        let defaults = Self::default();
        let max_connections = match std::env::var("DATABASE_MAX_CONNECTIONS") {
            Ok(raw) => raw.parse().unwrap_or_else(|_| {
                warn!("⚠️ DATABASE_MAX_CONNECTIONS inválido ('{}'), usando {}", raw, defaults.max_connections);
                defaults.max_connections
            }),
            Err(_) => defaults.max_connections,
        };

        Self {
            url: std::env::var("DATABASE_URL").unwrap_or(defaults.url),
            max_connections,
            ..defaults
        }
    }

    /// Configuración en memoria para tests
    pub fn in_memory() -> Self {
        Self::default()
    }

    /// Una base en memoria vive sólo mientras su conexión siga abierta
    pub fn is_in_memory(&self) -> bool {
        self.url.contains(":memory:") || self.url.contains("mode=memory")
    }

    /// Crear un nuevo pool de conexiones
    pub async fn create_pool(&self) -> Result<SqlitePool, sqlx::Error> {
        let options = SqliteConnectOptions::from_str(&self.url)?.create_if_missing(true);

        let pool_options = if self.is_in_memory() {
            // Cada conexión abriría una base distinta: se fija una sola que nunca expira
            SqlitePoolOptions::new()
                .max_connections(1)
                .min_connections(1)
                .idle_timeout(None)
                .max_lifetime(None)
        } else {
            SqlitePoolOptions::new()
                .max_connections(self.max_connections)
                .min_connections(self.min_connections)
                .idle_timeout(self.idle_timeout)
                .max_lifetime(self.max_lifetime)
        };

        pool_options
            .acquire_timeout(self.connect_timeout)
            .connect_with(options)
            .await
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_is_in_memory() {
        let config = DatabaseConfig::default();
        assert_eq!(config.url, DEFAULT_DATABASE_URL);
        assert!(config.is_in_memory());
    }

    #[test]
    fn test_file_url_is_not_in_memory() {
        let config = DatabaseConfig {
            url: "sqlite://data/vehicles.db".to_string(),
            ..Default::default()
        };
        assert!(!config.is_in_memory());
    }

    #[tokio::test]
    async fn test_in_memory_pool_shares_one_database() {
        let pool = DatabaseConfig::in_memory().create_pool().await.expect("pool");

        sqlx::query("CREATE TABLE scratch (value INTEGER)")
            .execute(&pool)
            .await
            .expect("create table");
        sqlx::query("INSERT INTO scratch (value) VALUES (1)")
            .execute(&pool)
            .await
            .expect("insert");

        let (count,): (i64,) = sqlx::query_as("SELECT COUNT(*) FROM scratch")
            .fetch_one(&pool)
            .await
            .expect("count");
        assert_eq!(count, 1);
    }
}
