//! Repository for the `disney_experiences` table.

use sqlx::PgPool;
use tripdesk_core::types::DbId;

use crate::models::disney_experience::{
    CreateDisneyExperience, DisneyExperience, UpdateDisneyExperience,
};

const COLUMNS: &str = "id, roster_id, login, account_password, avatar, is_linked, \
    created_at, updated_at";

pub struct DisneyExperienceRepo;

impl DisneyExperienceRepo {
    /// Insert the account record for a traveler. At most one per roster entry
    /// (`uq_disney_experiences_roster`).
    pub async fn create(
        pool: &PgPool,
        input: &CreateDisneyExperience,
    ) -> Result<DisneyExperience, sqlx::Error> {
        let query = format!(
            "INSERT INTO disney_experiences (roster_id, login, account_password, avatar, is_linked)
             VALUES ($1, $2, $3, $4, COALESCE($5, false))
             RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, DisneyExperience>(&query)
            .bind(input.roster_id)
            .bind(&input.login)
            .bind(&input.account_password)
            .bind(&input.avatar)
            .bind(input.is_linked)
            .fetch_one(pool)
            .await
    }

    pub async fn find_by_id(pool: &PgPool, id: DbId) -> Result<Option<DisneyExperience>, sqlx::Error> {
        let query = format!("SELECT {COLUMNS} FROM disney_experiences WHERE id = $1");
        sqlx::query_as::<_, DisneyExperience>(&query)
            .bind(id)
            .fetch_optional(pool)
            .await
    }

    /// List records, filtered to travelers of one group when given.
    pub async fn list(
        pool: &PgPool,
        group_id: Option<DbId>,
    ) -> Result<Vec<DisneyExperience>, sqlx::Error> {
        sqlx::query_as::<_, DisneyExperience>(
            "SELECT d.id, d.roster_id, d.login, d.account_password, d.avatar, d.is_linked,
                    d.created_at, d.updated_at
             FROM disney_experiences d
             JOIN roster r ON r.id = d.roster_id
             WHERE ($1::BIGINT IS NULL OR r.group_id = $1)
             ORDER BY r.last_name ASC, r.first_name ASC, d.id ASC",
        )
        .bind(group_id)
        .fetch_all(pool)
        .await
    }

    pub async fn update(
        pool: &PgPool,
        id: DbId,
        input: &UpdateDisneyExperience,
    ) -> Result<Option<DisneyExperience>, sqlx::Error> {
        let query = format!(
            "UPDATE disney_experiences SET
                login = COALESCE($2, login),
                account_password = COALESCE($3, account_password),
                avatar = COALESCE($4, avatar),
                is_linked = COALESCE($5, is_linked),
                updated_at = NOW()
             WHERE id = $1
             RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, DisneyExperience>(&query)
            .bind(id)
            .bind(&input.login)
            .bind(&input.account_password)
            .bind(&input.avatar)
            .bind(input.is_linked)
            .fetch_optional(pool)
            .await
    }

    pub async fn delete(pool: &PgPool, id: DbId) -> Result<bool, sqlx::Error> {
        let result = sqlx::query("DELETE FROM disney_experiences WHERE id = $1")
            .bind(id)
            .execute(pool)
            .await?;
        Ok(result.rows_affected() > 0)
    }
}
