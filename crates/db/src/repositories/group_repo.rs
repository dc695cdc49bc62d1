//! Repository for the `groups` table.
//!
//! Create, update and delete each append an activity in the same
//! transaction as the group write. When the target row does not exist no
//! activity is written.

use sqlx::PgPool;
use tripdesk_core::activity::{self, activity_types};
use tripdesk_core::types::{Date, DbId};

use crate::models::activity::CreateActivity;
use crate::models::group::{CreateGroup, Group, UpdateGroup};
use crate::repositories::ActivityRepo;

/// Column list shared across queries to avoid repetition.
const COLUMNS: &str = "id, school_name, group_name, location, start_date, end_date, \
    registration_date, director_name, director_email, bus_supplier_id, bus_count, \
    charter_number, transportation_cost_cents, deposit_amount_cents, deposit_due_date, \
    deposit_paid, contract_sent, contract_signed, workshop_registered, insurance_purchased, \
    money_collection_started, status, notes, created_at, updated_at";

/// Provides CRUD operations for groups.
pub struct GroupRepo;

impl GroupRepo {
    /// Insert a new group and its `created` activity, returning the group.
    ///
    /// Omitted flags default to `false` and `status` to `"pending"`. The
    /// date range is not checked here.
    pub async fn create(
        pool: &PgPool,
        input: &CreateGroup,
        user_id: Option<DbId>,
    ) -> Result<Group, sqlx::Error> {
        let mut tx = pool.begin().await?;

        let query = format!(
            "INSERT INTO groups (
                school_name, group_name, location, start_date, end_date, registration_date,
                director_name, director_email, bus_supplier_id, bus_count, charter_number,
                transportation_cost_cents, deposit_amount_cents, deposit_due_date, deposit_paid,
                contract_sent, contract_signed, workshop_registered, insurance_purchased,
                money_collection_started, status, notes
             ) VALUES (
                $1, $2, $3, $4, $5, $6, $7, $8, $9, $10, $11, $12, $13, $14,
                COALESCE($15, false), COALESCE($16, false), COALESCE($17, false),
                COALESCE($18, false), COALESCE($19, false), COALESCE($20, false),
                COALESCE($21, 'pending'), $22
             )
             RETURNING {COLUMNS}"
        );
        let group = sqlx::query_as::<_, Group>(&query)
            .bind(&input.school_name)
            .bind(&input.group_name)
            .bind(&input.location)
            .bind(input.start_date)
            .bind(input.end_date)
            .bind(input.registration_date)
            .bind(&input.director_name)
            .bind(&input.director_email)
            .bind(input.bus_supplier_id)
            .bind(input.bus_count)
            .bind(&input.charter_number)
            .bind(input.transportation_cost_cents)
            .bind(input.deposit_amount_cents)
            .bind(input.deposit_due_date)
            .bind(input.deposit_paid)
            .bind(input.contract_sent)
            .bind(input.contract_signed)
            .bind(input.workshop_registered)
            .bind(input.insurance_purchased)
            .bind(input.money_collection_started)
            .bind(&input.status)
            .bind(&input.notes)
            .fetch_one(&mut *tx)
            .await?;

        ActivityRepo::record(
            &mut *tx,
            &CreateActivity {
                group_id: Some(group.id),
                activity_type: activity_types::CREATED,
                description: activity::group_created(&group.school_name, &group.group_name),
                user_id,
            },
        )
        .await?;

        tx.commit().await?;
        tracing::info!(group_id = group.id, "Group created");
        Ok(group)
    }

    /// Find a group by its internal ID.
    pub async fn find_by_id(pool: &PgPool, id: DbId) -> Result<Option<Group>, sqlx::Error> {
        let query = format!("SELECT {COLUMNS} FROM groups WHERE id = $1");
        sqlx::query_as::<_, Group>(&query)
            .bind(id)
            .fetch_optional(pool)
            .await
    }

    /// List all groups ordered by trip start date.
    pub async fn list(pool: &PgPool) -> Result<Vec<Group>, sqlx::Error> {
        let query = format!("SELECT {COLUMNS} FROM groups ORDER BY start_date ASC, id ASC");
        sqlx::query_as::<_, Group>(&query).fetch_all(pool).await
    }

    /// List the groups that use a given bus supplier.
    pub async fn list_by_bus_supplier(
        pool: &PgPool,
        bus_supplier_id: DbId,
    ) -> Result<Vec<Group>, sqlx::Error> {
        let query = format!(
            "SELECT {COLUMNS} FROM groups WHERE bus_supplier_id = $1
             ORDER BY start_date ASC, id ASC"
        );
        sqlx::query_as::<_, Group>(&query)
            .bind(bus_supplier_id)
            .fetch_all(pool)
            .await
    }

    /// List groups whose trip starts on or after `from`, soonest first.
    pub async fn list_upcoming(
        pool: &PgPool,
        from: Date,
        limit: i64,
    ) -> Result<Vec<Group>, sqlx::Error> {
        let query = format!(
            "SELECT {COLUMNS} FROM groups WHERE start_date >= $1
             ORDER BY start_date ASC, id ASC
             LIMIT $2"
        );
        sqlx::query_as::<_, Group>(&query)
            .bind(from)
            .bind(limit)
            .fetch_all(pool)
            .await
    }

    /// Update a group and append an `updated` activity.
    ///
    /// Only non-`None` fields in `input` are applied; `updated_at` is always
    /// stamped. Returns `None` (and writes no activity) if no row with the
    /// given `id` exists. Repeating the same update yields the same row but
    /// one activity per call.
    pub async fn update(
        pool: &PgPool,
        id: DbId,
        input: &UpdateGroup,
        user_id: Option<DbId>,
    ) -> Result<Option<Group>, sqlx::Error> {
        Self::update_guarded(pool, id, input, user_id, |_| Ok::<(), sqlx::Error>(())).await
    }

    /// Like [`GroupRepo::update`], but first locks the stored row and hands it
    /// to `guard`. An `Err` from `guard` aborts the transaction unchanged.
    ///
    /// The guard sees the row as it is under the lock, so checks that combine
    /// stored and supplied values cannot race a concurrent update.
    pub async fn update_guarded<E, F>(
        pool: &PgPool,
        id: DbId,
        input: &UpdateGroup,
        user_id: Option<DbId>,
        guard: F,
    ) -> Result<Option<Group>, E>
    where
        E: From<sqlx::Error>,
        F: FnOnce(&Group) -> Result<(), E>,
    {
        let mut tx = pool.begin().await?;

        let query = format!("SELECT {COLUMNS} FROM groups WHERE id = $1 FOR UPDATE");
        let existing = sqlx::query_as::<_, Group>(&query)
            .bind(id)
            .fetch_optional(&mut *tx)
            .await?;

        let Some(existing) = existing else {
            return Ok(None);
        };
        guard(&existing)?;

        let query = format!(
            "UPDATE groups SET
                school_name = COALESCE($2, school_name),
                group_name = COALESCE($3, group_name),
                location = COALESCE($4, location),
                start_date = COALESCE($5, start_date),
                end_date = COALESCE($6, end_date),
                registration_date = COALESCE($7, registration_date),
                director_name = COALESCE($8, director_name),
                director_email = COALESCE($9, director_email),
                bus_supplier_id = COALESCE($10, bus_supplier_id),
                bus_count = COALESCE($11, bus_count),
                charter_number = COALESCE($12, charter_number),
                transportation_cost_cents = COALESCE($13, transportation_cost_cents),
                deposit_amount_cents = COALESCE($14, deposit_amount_cents),
                deposit_due_date = COALESCE($15, deposit_due_date),
                deposit_paid = COALESCE($16, deposit_paid),
                contract_sent = COALESCE($17, contract_sent),
                contract_signed = COALESCE($18, contract_signed),
                workshop_registered = COALESCE($19, workshop_registered),
                insurance_purchased = COALESCE($20, insurance_purchased),
                money_collection_started = COALESCE($21, money_collection_started),
                status = COALESCE($22, status),
                notes = COALESCE($23, notes),
                updated_at = NOW()
             WHERE id = $1
             RETURNING {COLUMNS}"
        );
        let group = sqlx::query_as::<_, Group>(&query)
            .bind(id)
            .bind(&input.school_name)
            .bind(&input.group_name)
            .bind(&input.location)
            .bind(input.start_date)
            .bind(input.end_date)
            .bind(input.registration_date)
            .bind(&input.director_name)
            .bind(&input.director_email)
            .bind(input.bus_supplier_id)
            .bind(input.bus_count)
            .bind(&input.charter_number)
            .bind(input.transportation_cost_cents)
            .bind(input.deposit_amount_cents)
            .bind(input.deposit_due_date)
            .bind(input.deposit_paid)
            .bind(input.contract_sent)
            .bind(input.contract_signed)
            .bind(input.workshop_registered)
            .bind(input.insurance_purchased)
            .bind(input.money_collection_started)
            .bind(&input.status)
            .bind(&input.notes)
            .fetch_one(&mut *tx)
            .await?;

        ActivityRepo::record(
            &mut *tx,
            &CreateActivity {
                group_id: Some(group.id),
                activity_type: activity_types::UPDATED,
                description: activity::group_updated(&group.school_name, &group.group_name),
                user_id,
            },
        )
        .await?;

        tx.commit().await?;
        tracing::info!(group_id = group.id, "Group updated");
        Ok(Some(group))
    }

    /// Delete a group and append a `deleted` activity.
    ///
    /// The row is read (and locked) first so its names are available for the
    /// activity description. Child rows are removed by `ON DELETE CASCADE`.
    /// Returns `false` (and writes no activity) if the group does not exist.
    pub async fn delete(
        pool: &PgPool,
        id: DbId,
        user_id: Option<DbId>,
    ) -> Result<bool, sqlx::Error> {
        let mut tx = pool.begin().await?;

        let query = format!("SELECT {COLUMNS} FROM groups WHERE id = $1 FOR UPDATE");
        let existing = sqlx::query_as::<_, Group>(&query)
            .bind(id)
            .fetch_optional(&mut *tx)
            .await?;

        let Some(group) = existing else {
            return Ok(false);
        };

        sqlx::query("DELETE FROM groups WHERE id = $1")
            .bind(id)
            .execute(&mut *tx)
            .await?;

        ActivityRepo::record(
            &mut *tx,
            &CreateActivity {
                group_id: Some(group.id),
                activity_type: activity_types::DELETED,
                description: activity::group_deleted(&group.school_name, &group.group_name),
                user_id,
            },
        )
        .await?;

        tx.commit().await?;
        tracing::info!(group_id = id, "Group deleted");
        Ok(true)
    }
}
