//! Repository for the `action_items` table.

use sqlx::PgPool;
use tripdesk_core::action_items::{priorities, statuses};
use tripdesk_core::types::DbId;

use crate::models::action_item::{ActionItem, CreateActionItem, UpdateActionItem};

const COLUMNS: &str = "id, group_id, title, description, due_date, priority, status, \
    assigned_to, created_at, updated_at";

pub struct ActionItemRepo;

impl ActionItemRepo {
    /// Insert a new action item. Defaults: priority `medium`, status `open`.
    pub async fn create(pool: &PgPool, input: &CreateActionItem) -> Result<ActionItem, sqlx::Error> {
        let query = format!(
            "INSERT INTO action_items
                (group_id, title, description, due_date, priority, status, assigned_to)
             VALUES ($1, $2, $3, $4, COALESCE($5, $8), COALESCE($6, $9), $7)
             RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, ActionItem>(&query)
            .bind(input.group_id)
            .bind(&input.title)
            .bind(&input.description)
            .bind(input.due_date)
            .bind(&input.priority)
            .bind(&input.status)
            .bind(&input.assigned_to)
            .bind(priorities::MEDIUM)
            .bind(statuses::OPEN)
            .fetch_one(pool)
            .await
    }

    pub async fn find_by_id(pool: &PgPool, id: DbId) -> Result<Option<ActionItem>, sqlx::Error> {
        let query = format!("SELECT {COLUMNS} FROM action_items WHERE id = $1");
        sqlx::query_as::<_, ActionItem>(&query)
            .bind(id)
            .fetch_optional(pool)
            .await
    }

    /// List action items by due date (undated last), filtered to one group when given.
    pub async fn list(pool: &PgPool, group_id: Option<DbId>) -> Result<Vec<ActionItem>, sqlx::Error> {
        let query = format!(
            "SELECT {COLUMNS} FROM action_items
             WHERE ($1::BIGINT IS NULL OR group_id = $1)
             ORDER BY due_date ASC NULLS LAST, id ASC"
        );
        sqlx::query_as::<_, ActionItem>(&query)
            .bind(group_id)
            .fetch_all(pool)
            .await
    }

    pub async fn count_by_status(pool: &PgPool, status: &str) -> Result<i64, sqlx::Error> {
        sqlx::query_scalar::<_, i64>("SELECT COUNT(*)::BIGINT FROM action_items WHERE status = $1")
            .bind(status)
            .fetch_one(pool)
            .await
    }

    pub async fn update(
        pool: &PgPool,
        id: DbId,
        input: &UpdateActionItem,
    ) -> Result<Option<ActionItem>, sqlx::Error> {
        let query = format!(
            "UPDATE action_items SET
                group_id = COALESCE($2, group_id),
                title = COALESCE($3, title),
                description = COALESCE($4, description),
                due_date = COALESCE($5, due_date),
                priority = COALESCE($6, priority),
                status = COALESCE($7, status),
                assigned_to = COALESCE($8, assigned_to),
                updated_at = NOW()
             WHERE id = $1
             RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, ActionItem>(&query)
            .bind(id)
            .bind(input.group_id)
            .bind(&input.title)
            .bind(&input.description)
            .bind(input.due_date)
            .bind(&input.priority)
            .bind(&input.status)
            .bind(&input.assigned_to)
            .fetch_optional(pool)
            .await
    }

    pub async fn delete(pool: &PgPool, id: DbId) -> Result<bool, sqlx::Error> {
        let result = sqlx::query("DELETE FROM action_items WHERE id = $1")
            .bind(id)
            .execute(pool)
            .await?;
        Ok(result.rows_affected() > 0)
    }
}
