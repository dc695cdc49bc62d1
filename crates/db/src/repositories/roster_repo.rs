//! Repository for the `roster` table.

use sqlx::{PgExecutor, PgPool};
use tripdesk_core::activity::{self, activity_types, ROSTER_REMOVAL_REASON};
use tripdesk_core::types::DbId;

use crate::models::activity::CreateActivity;
use crate::models::roster::{CreateRosterEntry, RosterEntry, UpdateRosterEntry};
use crate::repositories::{ActivityRepo, DropOffRepo};

const COLUMNS: &str = "id, group_id, traveler_type, first_name, last_name, gender, \
    date_of_birth, grade, email, phone, emergency_contact_name, emergency_contact_phone, \
    magic_band_color, tshirt_size, meal_choice, has_insurance, room_occupancy, \
    requested_roommate, notes, created_at, updated_at";

pub struct RosterRepo;

impl RosterRepo {
    /// Insert a new roster entry.
    pub async fn create(pool: &PgPool, input: &CreateRosterEntry) -> Result<RosterEntry, sqlx::Error> {
        Self::insert(pool, input).await
    }

    /// Insert using any executor (pool or open transaction).
    pub async fn insert<'e, E>(executor: E, input: &CreateRosterEntry) -> Result<RosterEntry, sqlx::Error>
    where
        E: PgExecutor<'e>,
    {
        let query = format!(
            "INSERT INTO roster (
                group_id, traveler_type, first_name, last_name, gender, date_of_birth, grade,
                email, phone, emergency_contact_name, emergency_contact_phone, magic_band_color,
                tshirt_size, meal_choice, has_insurance, room_occupancy, requested_roommate, notes
             ) VALUES ($1, $2, $3, $4, $5, $6, $7, $8, $9, $10, $11, $12, $13, $14, $15, $16, $17, $18)
             RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, RosterEntry>(&query)
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
            .bind(&input.magic_band_color)
            .bind(&input.tshirt_size)
            .bind(&input.meal_choice)
            .bind(input.has_insurance)
            .bind(&input.room_occupancy)
            .bind(&input.requested_roommate)
            .bind(&input.notes)
            .fetch_one(executor)
            .await
    }

    pub async fn find_by_id(pool: &PgPool, id: DbId) -> Result<Option<RosterEntry>, sqlx::Error> {
        let query = format!("SELECT {COLUMNS} FROM roster WHERE id = $1");
        sqlx::query_as::<_, RosterEntry>(&query)
            .bind(id)
            .fetch_optional(pool)
            .await
    }

    /// List roster entries, filtered to one group when `group_id` is given.
    pub async fn list(pool: &PgPool, group_id: Option<DbId>) -> Result<Vec<RosterEntry>, sqlx::Error> {
        let query = format!(
            "SELECT {COLUMNS} FROM roster
             WHERE ($1::BIGINT IS NULL OR group_id = $1)
             ORDER BY last_name ASC, first_name ASC, id ASC"
        );
        sqlx::query_as::<_, RosterEntry>(&query)
            .bind(group_id)
            .fetch_all(pool)
            .await
    }

    /// Count how many of `ids` are roster entries of `group_id`.
    ///
    /// Used to check that room occupants and chaperone group members belong
    /// to the same trip. Duplicate ids are counted once.
    pub async fn count_in_group(
        pool: &PgPool,
        group_id: DbId,
        ids: &[DbId],
    ) -> Result<i64, sqlx::Error> {
        sqlx::query_scalar::<_, i64>(
            "SELECT COUNT(*)::BIGINT FROM roster WHERE group_id = $1 AND id = ANY($2)",
        )
        .bind(group_id)
        .bind(ids)
        .fetch_one(pool)
        .await
    }

    /// Update a roster entry. Only non-`None` fields in `input` are applied.
    ///
    /// Returns `None` if no row with the given `id` exists.
    pub async fn update(
        pool: &PgPool,
        id: DbId,
        input: &UpdateRosterEntry,
    ) -> Result<Option<RosterEntry>, sqlx::Error> {
        let query = format!(
            "UPDATE roster SET
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
                magic_band_color = COALESCE($12, magic_band_color),
                tshirt_size = COALESCE($13, tshirt_size),
                meal_choice = COALESCE($14, meal_choice),
                has_insurance = COALESCE($15, has_insurance),
                room_occupancy = COALESCE($16, room_occupancy),
                requested_roommate = COALESCE($17, requested_roommate),
                notes = COALESCE($18, notes),
                updated_at = NOW()
             WHERE id = $1
             RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, RosterEntry>(&query)
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
            .bind(&input.magic_band_color)
            .bind(&input.tshirt_size)
            .bind(&input.meal_choice)
            .bind(input.has_insurance)
            .bind(&input.room_occupancy)
            .bind(&input.requested_roommate)
            .bind(&input.notes)
            .fetch_optional(pool)
            .await
    }

    /// Remove a traveler from the roster, recording a drop-off.
    ///
    /// In one transaction: lock the row, insert a drop-off copying its
    /// identity with reason `"Removed from roster"`, append a `drop_off`
    /// activity naming the traveler, then delete the row. Returns `false` if
    /// the entry does not exist, in which case nothing is written.
    pub async fn delete_with_drop_off(
        pool: &PgPool,
        id: DbId,
        user_id: Option<DbId>,
    ) -> Result<bool, sqlx::Error> {
        let mut tx = pool.begin().await?;

        let query = format!("SELECT {COLUMNS} FROM roster WHERE id = $1 FOR UPDATE");
        let existing = sqlx::query_as::<_, RosterEntry>(&query)
            .bind(id)
            .fetch_optional(&mut *tx)
            .await?;

        let Some(entry) = existing else {
            return Ok(false);
        };

        let drop_off = DropOffRepo::insert(&mut *tx, &entry, ROSTER_REMOVAL_REASON).await?;

        ActivityRepo::record(
            &mut *tx,
            &CreateActivity {
                group_id: Some(entry.group_id),
                activity_type: activity_types::DROP_OFF,
                description: activity::traveler_dropped(
                    &entry.first_name,
                    &entry.last_name,
                    &entry.traveler_type,
                ),
                user_id,
            },
        )
        .await?;

        sqlx::query("DELETE FROM roster WHERE id = $1")
            .bind(id)
            .execute(&mut *tx)
            .await?;

        tx.commit().await?;
        tracing::info!(
            roster_id = id,
            drop_off_id = drop_off.id,
            group_id = entry.group_id,
            "Roster entry moved to drop-offs"
        );
        Ok(true)
    }
}
