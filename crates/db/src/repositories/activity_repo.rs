//! Repository for the append-only `activities` table.

use sqlx::{PgExecutor, PgPool};
use tripdesk_core::types::DbId;

use crate::models::activity::{Activity, ActivityQuery, CreateActivity};

const COLUMNS: &str = "id, group_id, activity_type, description, user_id, created_at";

/// Default and maximum page sizes for the activity feed.
const DEFAULT_LIMIT: i64 = 50;
const MAX_LIMIT: i64 = 500;

pub struct ActivityRepo;

impl ActivityRepo {
    /// Append an activity.
    ///
    /// Takes any executor so cascading operations can record their activity
    /// inside the same transaction as the primary write.
    pub async fn record<'e, E>(executor: E, input: &CreateActivity) -> Result<Activity, sqlx::Error>
    where
        E: PgExecutor<'e>,
    {
        let query = format!(
            "INSERT INTO activities (group_id, activity_type, description, user_id)
             VALUES ($1, $2, $3, $4)
             RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, Activity>(&query)
            .bind(input.group_id)
            .bind(input.activity_type)
            .bind(&input.description)
            .bind(input.user_id)
            .fetch_one(executor)
            .await
    }

    /// List activities, newest first, optionally restricted to one group.
    pub async fn list(pool: &PgPool, params: &ActivityQuery) -> Result<Vec<Activity>, sqlx::Error> {
        let limit = params.limit.unwrap_or(DEFAULT_LIMIT).clamp(1, MAX_LIMIT);
        let offset = params.offset.unwrap_or(0).max(0);
        let query = format!(
            "SELECT {COLUMNS} FROM activities
             WHERE ($1::BIGINT IS NULL OR group_id = $1)
             ORDER BY created_at DESC, id DESC
             LIMIT $2 OFFSET $3"
        );
        sqlx::query_as::<_, Activity>(&query)
            .bind(params.group_id)
            .bind(limit)
            .bind(offset)
            .fetch_all(pool)
            .await
    }

    /// Count activities of one type for a group.
    pub async fn count_for_group(
        pool: &PgPool,
        group_id: DbId,
        activity_type: &str,
    ) -> Result<i64, sqlx::Error> {
        sqlx::query_scalar::<_, i64>(
            "SELECT COUNT(*)::BIGINT FROM activities WHERE group_id = $1 AND activity_type = $2",
        )
        .bind(group_id)
        .bind(activity_type)
        .fetch_one(pool)
        .await
    }
}
