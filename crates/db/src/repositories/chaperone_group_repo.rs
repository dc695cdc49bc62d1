//! Repository for the `chaperone_groups` and `chaperone_group_members` tables.

use std::collections::HashMap;

use sqlx::{PgConnection, PgPool};
use tripdesk_core::types::DbId;

use crate::models::chaperone_group::{
    ChaperoneGroup, ChaperoneGroupWithStudents, CreateChaperoneGroup, UpdateChaperoneGroup,
};

const COLUMNS: &str = "id, group_id, name, chaperone_id, notes, created_at, updated_at";

pub struct ChaperoneGroupRepo;

impl ChaperoneGroupRepo {
    /// Insert a chaperone group and its student memberships in one transaction.
    pub async fn create(
        pool: &PgPool,
        input: &CreateChaperoneGroup,
    ) -> Result<ChaperoneGroupWithStudents, sqlx::Error> {
        let mut tx = pool.begin().await?;

        let query = format!(
            "INSERT INTO chaperone_groups (group_id, name, chaperone_id, notes)
             VALUES ($1, $2, $3, $4)
             RETURNING {COLUMNS}"
        );
        let chaperone_group = sqlx::query_as::<_, ChaperoneGroup>(&query)
            .bind(input.group_id)
            .bind(&input.name)
            .bind(input.chaperone_id)
            .bind(&input.notes)
            .fetch_one(&mut *tx)
            .await?;

        replace_students(&mut tx, chaperone_group.id, &input.student_ids).await?;
        let student_ids = students_of(&mut tx, chaperone_group.id).await?;

        tx.commit().await?;
        Ok(ChaperoneGroupWithStudents {
            chaperone_group,
            student_ids,
        })
    }

    pub async fn find_by_id(
        pool: &PgPool,
        id: DbId,
    ) -> Result<Option<ChaperoneGroupWithStudents>, sqlx::Error> {
        let query = format!("SELECT {COLUMNS} FROM chaperone_groups WHERE id = $1");
        let Some(chaperone_group) = sqlx::query_as::<_, ChaperoneGroup>(&query)
            .bind(id)
            .fetch_optional(pool)
            .await?
        else {
            return Ok(None);
        };

        let student_ids = sqlx::query_scalar::<_, DbId>(
            "SELECT roster_id FROM chaperone_group_members
             WHERE chaperone_group_id = $1 ORDER BY roster_id",
        )
        .bind(id)
        .fetch_all(pool)
        .await?;

        Ok(Some(ChaperoneGroupWithStudents {
            chaperone_group,
            student_ids,
        }))
    }

    pub async fn list(
        pool: &PgPool,
        group_id: Option<DbId>,
    ) -> Result<Vec<ChaperoneGroupWithStudents>, sqlx::Error> {
        let query = format!(
            "SELECT {COLUMNS} FROM chaperone_groups
             WHERE ($1::BIGINT IS NULL OR group_id = $1)
             ORDER BY id ASC"
        );
        let groups = sqlx::query_as::<_, ChaperoneGroup>(&query)
            .bind(group_id)
            .fetch_all(pool)
            .await?;

        let ids: Vec<DbId> = groups.iter().map(|g| g.id).collect();
        let memberships = sqlx::query_as::<_, (DbId, DbId)>(
            "SELECT chaperone_group_id, roster_id FROM chaperone_group_members
             WHERE chaperone_group_id = ANY($1)
             ORDER BY chaperone_group_id, roster_id",
        )
        .bind(&ids)
        .fetch_all(pool)
        .await?;

        let mut by_group: HashMap<DbId, Vec<DbId>> = HashMap::new();
        for (chaperone_group_id, roster_id) in memberships {
            by_group.entry(chaperone_group_id).or_default().push(roster_id);
        }

        Ok(groups
            .into_iter()
            .map(|chaperone_group| {
                let student_ids = by_group.remove(&chaperone_group.id).unwrap_or_default();
                ChaperoneGroupWithStudents {
                    chaperone_group,
                    student_ids,
                }
            })
            .collect())
    }

    /// Update a chaperone group. A supplied `student_ids` replaces the whole
    /// membership set.
    ///
    /// Returns `None` if no row with the given `id` exists.
    pub async fn update(
        pool: &PgPool,
        id: DbId,
        input: &UpdateChaperoneGroup,
    ) -> Result<Option<ChaperoneGroupWithStudents>, sqlx::Error> {
        let mut tx = pool.begin().await?;

        let query = format!(
            "UPDATE chaperone_groups SET
                name = COALESCE($2, name),
                chaperone_id = COALESCE($3, chaperone_id),
                notes = COALESCE($4, notes),
                updated_at = NOW()
             WHERE id = $1
             RETURNING {COLUMNS}"
        );
        let Some(chaperone_group) = sqlx::query_as::<_, ChaperoneGroup>(&query)
            .bind(id)
            .bind(&input.name)
            .bind(input.chaperone_id)
            .bind(&input.notes)
            .fetch_optional(&mut *tx)
            .await?
        else {
            return Ok(None);
        };

        if let Some(student_ids) = &input.student_ids {
            replace_students(&mut tx, id, student_ids).await?;
        }
        let student_ids = students_of(&mut tx, id).await?;

        tx.commit().await?;
        Ok(Some(ChaperoneGroupWithStudents {
            chaperone_group,
            student_ids,
        }))
    }

    pub async fn delete(pool: &PgPool, id: DbId) -> Result<bool, sqlx::Error> {
        let result = sqlx::query("DELETE FROM chaperone_groups WHERE id = $1")
            .bind(id)
            .execute(pool)
            .await?;
        Ok(result.rows_affected() > 0)
    }
}

async fn replace_students(
    conn: &mut PgConnection,
    chaperone_group_id: DbId,
    roster_ids: &[DbId],
) -> Result<(), sqlx::Error> {
    sqlx::query("DELETE FROM chaperone_group_members WHERE chaperone_group_id = $1")
        .bind(chaperone_group_id)
        .execute(&mut *conn)
        .await?;

    sqlx::query(
        "INSERT INTO chaperone_group_members (chaperone_group_id, roster_id)
         SELECT $1, roster_id FROM UNNEST($2::BIGINT[]) AS t(roster_id)
         ON CONFLICT (chaperone_group_id, roster_id) DO NOTHING",
    )
    .bind(chaperone_group_id)
    .bind(roster_ids)
    .execute(&mut *conn)
    .await?;
    Ok(())
}

async fn students_of(
    conn: &mut PgConnection,
    chaperone_group_id: DbId,
) -> Result<Vec<DbId>, sqlx::Error> {
    sqlx::query_scalar::<_, DbId>(
        "SELECT roster_id FROM chaperone_group_members
         WHERE chaperone_group_id = $1 ORDER BY roster_id",
    )
    .bind(chaperone_group_id)
    .fetch_all(&mut *conn)
    .await
}
