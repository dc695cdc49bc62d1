//! Repository for the `bus_suppliers` table.

use sqlx::PgPool;
use tripdesk_core::types::DbId;

use crate::models::bus_supplier::{BusSupplier, CreateBusSupplier, UpdateBusSupplier};

const COLUMNS: &str = "id, name, address, website, contact_name, contact_phone, \
    contact_email, available_buses, created_at, updated_at";

pub struct BusSupplierRepo;

impl BusSupplierRepo {
    /// Insert a new supplier. Names are unique (`uq_bus_suppliers_name`).
    pub async fn create(pool: &PgPool, input: &CreateBusSupplier) -> Result<BusSupplier, sqlx::Error> {
        let query = format!(
            "INSERT INTO bus_suppliers
                (name, address, website, contact_name, contact_phone, contact_email, available_buses)
             VALUES ($1, $2, $3, $4, $5, $6, $7)
             RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, BusSupplier>(&query)
            .bind(&input.name)
            .bind(&input.address)
            .bind(&input.website)
            .bind(&input.contact_name)
            .bind(&input.contact_phone)
            .bind(&input.contact_email)
            .bind(input.available_buses)
            .fetch_one(pool)
            .await
    }

    pub async fn find_by_id(pool: &PgPool, id: DbId) -> Result<Option<BusSupplier>, sqlx::Error> {
        let query = format!("SELECT {COLUMNS} FROM bus_suppliers WHERE id = $1");
        sqlx::query_as::<_, BusSupplier>(&query)
            .bind(id)
            .fetch_optional(pool)
            .await
    }

    /// List all suppliers alphabetically.
    pub async fn list(pool: &PgPool) -> Result<Vec<BusSupplier>, sqlx::Error> {
        let query = format!("SELECT {COLUMNS} FROM bus_suppliers ORDER BY name ASC");
        sqlx::query_as::<_, BusSupplier>(&query).fetch_all(pool).await
    }

    /// Update a supplier. Groups reference suppliers by id, so a rename is
    /// visible to every group immediately.
    pub async fn update(
        pool: &PgPool,
        id: DbId,
        input: &UpdateBusSupplier,
    ) -> Result<Option<BusSupplier>, sqlx::Error> {
        let query = format!(
            "UPDATE bus_suppliers SET
                name = COALESCE($2, name),
                address = COALESCE($3, address),
                website = COALESCE($4, website),
                contact_name = COALESCE($5, contact_name),
                contact_phone = COALESCE($6, contact_phone),
                contact_email = COALESCE($7, contact_email),
                available_buses = COALESCE($8, available_buses),
                updated_at = NOW()
             WHERE id = $1
             RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, BusSupplier>(&query)
            .bind(id)
            .bind(&input.name)
            .bind(&input.address)
            .bind(&input.website)
            .bind(&input.contact_name)
            .bind(&input.contact_phone)
            .bind(&input.contact_email)
            .bind(input.available_buses)
            .fetch_optional(pool)
            .await
    }

    /// Delete a supplier. Groups using it keep their row with
    /// `bus_supplier_id` set to NULL.
    pub async fn delete(pool: &PgPool, id: DbId) -> Result<bool, sqlx::Error> {
        let result = sqlx::query("DELETE FROM bus_suppliers WHERE id = $1")
            .bind(id)
            .execute(pool)
            .await?;
        Ok(result.rows_affected() > 0)
    }
}
