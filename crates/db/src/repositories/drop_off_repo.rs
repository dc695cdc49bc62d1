//! Repository for the `drop_offs` table.

use sqlx::{PgExecutor, PgPool};
use tripdesk_core::types::DbId;

use crate::models::drop_off::DropOff;
use crate::models::roster::RosterEntry;

const COLUMNS: &str = "id, group_id, traveler_type, first_name, last_name, reason, dropped_at";

pub struct DropOffRepo;

impl DropOffRepo {
    /// Record a drop-off for a roster entry. Called from roster deletion,
    /// inside its transaction.
    pub async fn insert<'e, E>(
        executor: E,
        entry: &RosterEntry,
        reason: &str,
    ) -> Result<DropOff, sqlx::Error>
    where
        E: PgExecutor<'e>,
    {
        let query = format!(
            "INSERT INTO drop_offs (group_id, traveler_type, first_name, last_name, reason)
             VALUES ($1, $2, $3, $4, $5)
             RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, DropOff>(&query)
            .bind(entry.group_id)
            .bind(&entry.traveler_type)
            .bind(&entry.first_name)
            .bind(&entry.last_name)
            .bind(reason)
            .fetch_one(executor)
            .await
    }

    pub async fn find_by_id(pool: &PgPool, id: DbId) -> Result<Option<DropOff>, sqlx::Error> {
        let query = format!("SELECT {COLUMNS} FROM drop_offs WHERE id = $1");
        sqlx::query_as::<_, DropOff>(&query)
            .bind(id)
            .fetch_optional(pool)
            .await
    }

    /// List drop-offs, most recent first, filtered to one group when given.
    pub async fn list(pool: &PgPool, group_id: Option<DbId>) -> Result<Vec<DropOff>, sqlx::Error> {
        let query = format!(
            "SELECT {COLUMNS} FROM drop_offs
             WHERE ($1::BIGINT IS NULL OR group_id = $1)
             ORDER BY dropped_at DESC, id DESC"
        );
        sqlx::query_as::<_, DropOff>(&query)
            .bind(group_id)
            .fetch_all(pool)
            .await
    }

    /// Permanently delete a drop-off record. Returns `true` if a row was removed.
    pub async fn delete(pool: &PgPool, id: DbId) -> Result<bool, sqlx::Error> {
        let result = sqlx::query("DELETE FROM drop_offs WHERE id = $1")
            .bind(id)
            .execute(pool)
            .await?;
        Ok(result.rows_affected() > 0)
    }
}
