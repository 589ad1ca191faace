//! Configuración de conexión a SQLite
//!
//! Este módulo abre el pool de conexiones y aplica las migraciones embebidas.

use anyhow::Result;
use sqlx::SqlitePool;
use tracing::info;

use crate::config::database::DatabaseConfig;

/// Crear un pool de conexiones a la base de datos y dejar el schema al día
pub async fn create_pool(config: &DatabaseConfig) -> Result<SqlitePool> {
    info!("🗄️ Conectando a la base de datos: {}", config.url);

    let pool = config.create_pool().await?;
    run_migrations(&pool).await?;

    info!("✅ Base de datos lista");
    Ok(pool)
}

/// Ejecutar migraciones de la base de datos
pub async fn run_migrations(pool: &SqlitePool) -> Result<(), sqlx::migrate::MigrateError> {
    sqlx::migrate!("./migrations").run(pool).await
}
