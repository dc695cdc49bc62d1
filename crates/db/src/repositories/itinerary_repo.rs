//! Repository for the `itineraries` table.

use sqlx::PgPool;
use tripdesk_core::types::DbId;

use crate::models::itinerary::{CreateItinerary, Itinerary, UpdateItinerary};

const COLUMNS: &str = "id, group_id, day_number, date, activity, start_time, end_time, \
    location, notes, created_at, updated_at";

pub struct ItineraryRepo;

impl ItineraryRepo {
    pub async fn create(pool: &PgPool, input: &CreateItinerary) -> Result<Itinerary, sqlx::Error> {
        let query = format!(
            "INSERT INTO itineraries
                (group_id, day_number, date, activity, start_time, end_time, location, notes)
             VALUES ($1, $2, $3, $4, $5, $6, $7, $8)
             RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, Itinerary>(&query)
            .bind(input.group_id)
            .bind(input.day_number)
            .bind(input.date)
            .bind(&input.activity)
            .bind(input.start_time)
            .bind(input.end_time)
            .bind(&input.location)
            .bind(&input.notes)
            .fetch_one(pool)
            .await
    }

    pub async fn find_by_id(pool: &PgPool, id: DbId) -> Result<Option<Itinerary>, sqlx::Error> {
        let query = format!("SELECT {COLUMNS} FROM itineraries WHERE id = $1");
        sqlx::query_as::<_, Itinerary>(&query)
            .bind(id)
            .fetch_optional(pool)
            .await
    }

    /// List itinerary entries in day/time order, filtered to one group when given.
    pub async fn list(pool: &PgPool, group_id: Option<DbId>) -> Result<Vec<Itinerary>, sqlx::Error> {
        let query = format!(
            "SELECT {COLUMNS} FROM itineraries
             WHERE ($1::BIGINT IS NULL OR group_id = $1)
             ORDER BY group_id ASC, day_number ASC, start_time ASC NULLS LAST, id ASC"
        );
        sqlx::query_as::<_, Itinerary>(&query)
            .bind(group_id)
            .fetch_all(pool)
            .await
    }

    pub async fn update(
        pool: &PgPool,
        id: DbId,
        input: &UpdateItinerary,
    ) -> Result<Option<Itinerary>, sqlx::Error> {
        let query = format!(
            "UPDATE itineraries SET
                day_number = COALESCE($2, day_number),
                date = COALESCE($3, date),
                activity = COALESCE($4, activity),
                start_time = COALESCE($5, start_time),
                end_time = COALESCE($6, end_time),
                location = COALESCE($7, location),
                notes = COALESCE($8, notes),
                updated_at = NOW()
             WHERE id = $1
             RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, Itinerary>(&query)
            .bind(id)
            .bind(input.day_number)
            .bind(input.date)
            .bind(&input.activity)
            .bind(input.start_time)
            .bind(input.end_time)
            .bind(&input.location)
            .bind(&input.notes)
            .fetch_optional(pool)
            .await
    }

    pub async fn delete(pool: &PgPool, id: DbId) -> Result<bool, sqlx::Error> {
        let result = sqlx::query("DELETE FROM itineraries WHERE id = $1")
            .bind(id)
            .execute(pool)
            .await?;
        Ok(result.rows_affected() > 0)
    }
}
