//! Repository for the `waiting_list` table.

use sqlx::PgPool;
use tripdesk_core::activity::{self, activity_types};
use tripdesk_core::types::DbId;

use crate::models::activity::CreateActivity;
use crate::models::roster::RosterEntry;
use crate::models::waiting_list::{
    CreateWaitingListEntry, UpdateWaitingListEntry, WaitingListEntry,
};
use crate::repositories::{ActivityRepo, RosterRepo};

const COLUMNS: &str = "id, group_id, traveler_type, first_name, last_name, gender, \
    date_of_birth, grade, email, phone, emergency_contact_name, emergency_contact_phone, \
    notes, created_at, updated_at";

pub struct WaitingListRepo;

impl WaitingListRepo {
    pub async fn create(
        pool: &PgPool,
        input: &CreateWaitingListEntry,
    ) -> Result<WaitingListEntry, sqlx::Error> {
        let query = format!(
            "INSERT INTO waiting_list (
                group_id, traveler_type, first_name, last_name, gender, date_of_birth, grade,
                email, phone, emergency_contact_name, emergency_contact_phone, notes
             ) VALUES ($1, $2, $3, $4, $5, $6, $7, $8, $9, $10, $11, $12)
             RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, WaitingListEntry>(&query)
            .bind(input.group_id)
            .bind(&input.traveler_type)
            .bind(&input.first_name)
            .bind(&input.last_name)
            .bind(&input.gender)
            .bind(input.date_of_birth)
            .bind(&input.grade)
            .bind(&input.email)
            .bind(&input.phone)
            .bind(&input.emergency_contact_name)
            .bind(&input.emergency_contact_phone)
            .bind(&input.notes)
            .fetch_one(pool)
            .await
    }

    pub async fn find_by_id(
        pool: &PgPool,
        id: DbId,
    ) -> Result<Option<WaitingListEntry>, sqlx::Error> {
        let query = format!("SELECT {COLUMNS} FROM waiting_list WHERE id = $1");
        sqlx::query_as::<_, WaitingListEntry>(&query)
            .bind(id)
            .fetch_optional(pool)
            .await
    }

    /// List waiting-list entries in arrival order, filtered to one group when given.
    pub async fn list(
        pool: &PgPool,
        group_id: Option<DbId>,
    ) -> Result<Vec<WaitingListEntry>, sqlx::Error> {
        let query = format!(
            "SELECT {COLUMNS} FROM waiting_list
             WHERE ($1::BIGINT IS NULL OR group_id = $1)
             ORDER BY created_at ASC, id ASC"
        );
        sqlx::query_as::<_, WaitingListEntry>(&query)
            .bind(group_id)
            .fetch_all(pool)
            .await
    }

    pub async fn update(
        pool: &PgPool,
        id: DbId,
        input: &UpdateWaitingListEntry,
    ) -> Result<Option<WaitingListEntry>, sqlx::Error> {
        let query = format!(
            "UPDATE waiting_list SET
                traveler_type = COALESCE($2, traveler_type),
                first_name = COALESCE($3, first_name),
                last_name = COALESCE($4, last_name),
                gender = COALESCE($5, gender),
                date_of_birth = COALESCE($6, date_of_birth),
                grade = COALESCE($7, grade),
                email = COALESCE($8, email),
                phone = COALESCE($9, phone),
                emergency_contact_name = COALESCE($10, emergency_contact_name),
                emergency_contact_phone = COALESCE($11, emergency_contact_phone),
                notes = COALESCE($12, notes),
                updated_at = NOW()
             WHERE id = $1
             RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, WaitingListEntry>(&query)
            .bind(id)
            .bind(&input.traveler_type)
            .bind(&input.first_name)
            .bind(&input.last_name)
            .bind(&input.gender)
            .bind(input.date_of_birth)
            .bind(&input.grade)
            .bind(&input.email)
            .bind(&input.phone)
            .bind(&input.emergency_contact_name)
            .bind(&input.emergency_contact_phone)
            .bind(&input.notes)
            .fetch_optional(pool)
            .await
    }

    /// Remove an entry without promoting it. Returns `true` if a row was removed.
    pub async fn delete(pool: &PgPool, id: DbId) -> Result<bool, sqlx::Error> {
        let result = sqlx::query("DELETE FROM waiting_list WHERE id = $1")
            .bind(id)
            .execute(pool)
            .await?;
        Ok(result.rows_affected() > 0)
    }

    /// Promote a waiting-list entry onto the roster.
    ///
    /// In one transaction: lock the entry, insert a roster row built by
    /// [`WaitingListEntry::to_roster_entry`], delete the entry and append a
    /// `promotion` activity. Returns `None` if the entry does not exist.
    pub async fn promote(
        pool: &PgPool,
        id: DbId,
        user_id: Option<DbId>,
    ) -> Result<Option<RosterEntry>, sqlx::Error> {
        let mut tx = pool.begin().await?;

        let query = format!("SELECT {COLUMNS} FROM waiting_list WHERE id = $1 FOR UPDATE");
        let existing = sqlx::query_as::<_, WaitingListEntry>(&query)
            .bind(id)
            .fetch_optional(&mut *tx)
            .await?;

        let Some(entry) = existing else {
            return Ok(None);
        };

        let roster_entry = RosterRepo::insert(&mut *tx, &entry.to_roster_entry()).await?;

        sqlx::query("DELETE FROM waiting_list WHERE id = $1")
            .bind(id)
            .execute(&mut *tx)
            .await?;

        ActivityRepo::record(
            &mut *tx,
            &CreateActivity {
                group_id: Some(entry.group_id),
                activity_type: activity_types::PROMOTION,
                description: activity::traveler_promoted(
                    &entry.first_name,
                    &entry.last_name,
                    &entry.traveler_type,
                ),
                user_id,
            },
        )
        .await?;

        tx.commit().await?;
        tracing::info!(
            waiting_list_id = id,
            roster_id = roster_entry.id,
            group_id = entry.group_id,
            "Waiting-list entry promoted to roster"
        );
        Ok(Some(roster_entry))
    }
}
