use async_trait::async_trait;
use sqlx::SqlitePool;

use crate::models::vehicle::{NewVehicle, Vehicle};
use crate::utils::errors::AppResult;

/// Operaciones de persistencia sobre la tabla `vehicles`.
///
/// Los errores de almacenamiento se devuelven sin transformar dentro de
/// `AppError::Database`.
#[async_trait]
pub trait VehicleStore: Send + Sync {
    /// Todos los vehículos, ordenados por id
    async fn list(&self) -> AppResult<Vec<Vehicle>>;

    async fn get(&self, id: i64) -> AppResult<Option<Vehicle>>;

    /// Inserta y devuelve el registro con el id asignado
    async fn insert(&self, vehicle: &NewVehicle) -> AppResult<Vehicle>;

    /// Upsert por id: inserta si no existe, sobrescribe si existe
    async fn save(&self, vehicle: &Vehicle) -> AppResult<Vehicle>;

    /// Inserta todos los registros en una única transacción
    async fn insert_many(&self, vehicles: &[NewVehicle]) -> AppResult<()>;

    async fn delete(&self, vehicle: &Vehicle) -> AppResult<()>;

    async fn count(&self) -> AppResult<i64>;
}

#[derive(Clone)]
pub struct SqliteVehicleRepository {
    pool: SqlitePool,
}

impl SqliteVehicleRepository {
    pub fn new(pool: SqlitePool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl VehicleStore for SqliteVehicleRepository {
    async fn list(&self) -> AppResult<Vec<Vehicle>> {
        let vehicles = sqlx::query_as::<_, Vehicle>(
            "SELECT id, brand, model, year, is_classic FROM vehicles ORDER BY id",
        )
        .fetch_all(&self.pool)
        .await?;

        Ok(vehicles)
    }

    async fn get(&self, id: i64) -> AppResult<Option<Vehicle>> {
        let vehicle = sqlx::query_as::<_, Vehicle>(
            "SELECT id, brand, model, year, is_classic FROM vehicles WHERE id = ?",
        )
        .bind(id)
        .fetch_optional(&self.pool)
        .await?;

        Ok(vehicle)
    }

    async fn insert(&self, vehicle: &NewVehicle) -> AppResult<Vehicle> {
        let vehicle = sqlx::query_as::<_, Vehicle>(
            r#"
            INSERT INTO vehicles (brand, model, year, is_classic)
            VALUES (?, ?, ?, ?)
            RETURNING id, brand, model, year, is_classic
            "#,
        )
        .bind(&vehicle.brand)
        .bind(&vehicle.model)
        .bind(vehicle.year)
        .bind(vehicle.is_classic)
        .fetch_one(&self.pool)
        .await?;

        Ok(vehicle)
    }

    async fn save(&self, vehicle: &Vehicle) -> AppResult<Vehicle> {
        let vehicle = sqlx::query_as::<_, Vehicle>(
            r#"
            INSERT INTO vehicles (id, brand, model, year, is_classic)
            VALUES (?, ?, ?, ?, ?)
            ON CONFLICT(id) DO UPDATE SET
                brand = excluded.brand,
                model = excluded.model,
                year = excluded.year,
                is_classic = excluded.is_classic
            RETURNING id, brand, model, year, is_classic
            "#,
        )
        .bind(vehicle.id)
        .bind(&vehicle.brand)
        .bind(&vehicle.model)
        .bind(vehicle.year)
        .bind(vehicle.is_classic)
        .fetch_one(&self.pool)
        .await?;

        Ok(vehicle)
    }

    async fn insert_many(&self, vehicles: &[NewVehicle]) -> AppResult<()> {
        let mut tx = self.pool.begin().await?;

        for vehicle in vehicles {
            sqlx::query("INSERT INTO vehicles (brand, model, year, is_classic) VALUES (?, ?, ?, ?)")
                .bind(&vehicle.brand)
                .bind(&vehicle.model)
                .bind(vehicle.year)
                .bind(vehicle.is_classic)
                .execute(&mut *tx)
                .await?;
        }

        tx.commit().await?;
        Ok(())
    }

    async fn delete(&self, vehicle: &Vehicle) -> AppResult<()> {
        sqlx::query("DELETE FROM vehicles WHERE id = ?")
            .bind(vehicle.id)
            .execute(&self.pool)
            .await?;

        Ok(())
    }

    async fn count(&self) -> AppResult<i64> {
        let (count,): (i64,) = sqlx::query_as("SELECT COUNT(*) FROM vehicles")
            .fetch_one(&self.pool)
            .await?;

        Ok(count)
    }
}
