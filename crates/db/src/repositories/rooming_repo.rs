//! Repository for the `rooming_list` and `room_occupants` tables.
//!
//! Room rows and their occupant memberships are always written together in
//! one transaction.

use std::collections::HashMap;

use sqlx::{PgConnection, PgPool};
use tripdesk_core::types::DbId;

use crate::models::rooming::{CreateRoom, Room, RoomWithOccupants, UpdateRoom};

const COLUMNS: &str = "id, group_id, room_number, room_type, occupancy, gender, notes, \
    created_at, updated_at";

pub struct RoomingRepo;

impl RoomingRepo {
    /// Insert a room and its occupants.
    pub async fn create(pool: &PgPool, input: &CreateRoom) -> Result<RoomWithOccupants, sqlx::Error> {
        let mut tx = pool.begin().await?;

        let query = format!(
            "INSERT INTO rooming_list (group_id, room_number, room_type, occupancy, gender, notes)
             VALUES ($1, $2, $3, $4, $5, $6)
             RETURNING {COLUMNS}"
        );
        let room = sqlx::query_as::<_, Room>(&query)
            .bind(input.group_id)
            .bind(&input.room_number)
            .bind(&input.room_type)
            .bind(input.occupancy)
            .bind(&input.gender)
            .bind(&input.notes)
            .fetch_one(&mut *tx)
            .await?;

        replace_occupants(&mut tx, room.id, &input.occupant_ids).await?;
        let occupant_ids = occupants_of(&mut tx, room.id).await?;

        tx.commit().await?;
        Ok(RoomWithOccupants { room, occupant_ids })
    }

    pub async fn find_by_id(pool: &PgPool, id: DbId) -> Result<Option<RoomWithOccupants>, sqlx::Error> {
        let query = format!("SELECT {COLUMNS} FROM rooming_list WHERE id = $1");
        let Some(room) = sqlx::query_as::<_, Room>(&query)
            .bind(id)
            .fetch_optional(pool)
            .await?
        else {
            return Ok(None);
        };

        let occupant_ids = sqlx::query_scalar::<_, DbId>(
            "SELECT roster_id FROM room_occupants WHERE room_id = $1 ORDER BY roster_id",
        )
        .bind(id)
        .fetch_all(pool)
        .await?;

        Ok(Some(RoomWithOccupants { room, occupant_ids }))
    }

    /// List rooms with their occupants, filtered to one group when given.
    pub async fn list(
        pool: &PgPool,
        group_id: Option<DbId>,
    ) -> Result<Vec<RoomWithOccupants>, sqlx::Error> {
        let query = format!(
            "SELECT {COLUMNS} FROM rooming_list
             WHERE ($1::BIGINT IS NULL OR group_id = $1)
             ORDER BY room_number ASC, id ASC"
        );
        let rooms = sqlx::query_as::<_, Room>(&query)
            .bind(group_id)
            .fetch_all(pool)
            .await?;

        let room_ids: Vec<DbId> = rooms.iter().map(|r| r.id).collect();
        let memberships = sqlx::query_as::<_, (DbId, DbId)>(
            "SELECT room_id, roster_id FROM room_occupants
             WHERE room_id = ANY($1)
             ORDER BY room_id, roster_id",
        )
        .bind(&room_ids)
        .fetch_all(pool)
        .await?;

        let mut by_room: HashMap<DbId, Vec<DbId>> = HashMap::new();
        for (room_id, roster_id) in memberships {
            by_room.entry(room_id).or_default().push(roster_id);
        }

        Ok(rooms
            .into_iter()
            .map(|room| {
                let occupant_ids = by_room.remove(&room.id).unwrap_or_default();
                RoomWithOccupants { room, occupant_ids }
            })
            .collect())
    }

    /// Update a room. A supplied `occupant_ids` replaces the whole set.
    ///
    /// Returns `None` if no room with the given `id` exists.
    pub async fn update(
        pool: &PgPool,
        id: DbId,
        input: &UpdateRoom,
    ) -> Result<Option<RoomWithOccupants>, sqlx::Error> {
        let mut tx = pool.begin().await?;

        let query = format!(
            "UPDATE rooming_list SET
                room_number = COALESCE($2, room_number),
                room_type = COALESCE($3, room_type),
                occupancy = COALESCE($4, occupancy),
                gender = COALESCE($5, gender),
                notes = COALESCE($6, notes),
                updated_at = NOW()
             WHERE id = $1
             RETURNING {COLUMNS}"
        );
        let Some(room) = sqlx::query_as::<_, Room>(&query)
            .bind(id)
            .bind(&input.room_number)
            .bind(&input.room_type)
            .bind(input.occupancy)
            .bind(&input.gender)
            .bind(&input.notes)
            .fetch_optional(&mut *tx)
            .await?
        else {
            return Ok(None);
        };

        if let Some(occupant_ids) = &input.occupant_ids {
            replace_occupants(&mut tx, id, occupant_ids).await?;
        }
        let occupant_ids = occupants_of(&mut tx, id).await?;

        tx.commit().await?;
        Ok(Some(RoomWithOccupants { room, occupant_ids }))
    }

    /// Delete a room; its occupant rows go with it.
    pub async fn delete(pool: &PgPool, id: DbId) -> Result<bool, sqlx::Error> {
        let result = sqlx::query("DELETE FROM rooming_list WHERE id = $1")
            .bind(id)
            .execute(pool)
            .await?;
        Ok(result.rows_affected() > 0)
    }
}

async fn replace_occupants(
    conn: &mut PgConnection,
    room_id: DbId,
    roster_ids: &[DbId],
) -> Result<(), sqlx::Error> {
    sqlx::query("DELETE FROM room_occupants WHERE room_id = $1")
        .bind(room_id)
        .execute(&mut *conn)
        .await?;

    sqlx::query(
        "INSERT INTO room_occupants (room_id, roster_id)
         SELECT $1, roster_id FROM UNNEST($2::BIGINT[]) AS t(roster_id)
         ON CONFLICT (room_id, roster_id) DO NOTHING",
    )
    .bind(room_id)
    .bind(roster_ids)
    .execute(&mut *conn)
    .await?;
    Ok(())
}

async fn occupants_of(conn: &mut PgConnection, room_id: DbId) -> Result<Vec<DbId>, sqlx::Error> {
    sqlx::query_scalar::<_, DbId>(
        "SELECT roster_id FROM room_occupants WHERE room_id = $1 ORDER BY roster_id",
    )
    .bind(room_id)
    .fetch_all(&mut *conn)
    .await
}
