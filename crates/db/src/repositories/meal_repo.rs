//! Repository for the `meals` table.

use sqlx::PgPool;
use tripdesk_core::types::DbId;

use crate::models::meal::{CreateMeal, Meal, UpdateMeal};

const COLUMNS: &str = "id, group_id, meal_date, meal_time, turkey_count, ham_count, \
    chicken_count, veggie_count, salad_count, notes, created_at, updated_at";

pub struct MealRepo;

impl MealRepo {
    /// Insert a new meal plan. Omitted counts default to 0.
    pub async fn create(pool: &PgPool, input: &CreateMeal) -> Result<Meal, sqlx::Error> {
        let query = format!(
            "INSERT INTO meals (group_id, meal_date, meal_time, turkey_count, ham_count,
                                chicken_count, veggie_count, salad_count, notes)
             VALUES ($1, $2, $3, COALESCE($4, 0), COALESCE($5, 0), COALESCE($6, 0),
                     COALESCE($7, 0), COALESCE($8, 0), $9)
             RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, Meal>(&query)
            .bind(input.group_id)
            .bind(input.meal_date)
            .bind(input.meal_time)
            .bind(input.turkey_count)
            .bind(input.ham_count)
            .bind(input.chicken_count)
            .bind(input.veggie_count)
            .bind(input.salad_count)
            .bind(&input.notes)
            .fetch_one(pool)
            .await
    }

    pub async fn find_by_id(pool: &PgPool, id: DbId) -> Result<Option<Meal>, sqlx::Error> {
        let query = format!("SELECT {COLUMNS} FROM meals WHERE id = $1");
        sqlx::query_as::<_, Meal>(&query)
            .bind(id)
            .fetch_optional(pool)
            .await
    }

    pub async fn list(pool: &PgPool, group_id: Option<DbId>) -> Result<Vec<Meal>, sqlx::Error> {
        let query = format!(
            "SELECT {COLUMNS} FROM meals
             WHERE ($1::BIGINT IS NULL OR group_id = $1)
             ORDER BY meal_date ASC, meal_time ASC NULLS LAST, id ASC"
        );
        sqlx::query_as::<_, Meal>(&query)
            .bind(group_id)
            .fetch_all(pool)
            .await
    }

    pub async fn update(pool: &PgPool, id: DbId, input: &UpdateMeal) -> Result<Option<Meal>, sqlx::Error> {
        let query = format!(
            "UPDATE meals SET
                meal_date = COALESCE($2, meal_date),
                meal_time = COALESCE($3, meal_time),
                turkey_count = COALESCE($4, turkey_count),
                ham_count = COALESCE($5, ham_count),
                chicken_count = COALESCE($6, chicken_count),
                veggie_count = COALESCE($7, veggie_count),
                salad_count = COALESCE($8, salad_count),
                notes = COALESCE($9, notes),
                updated_at = NOW()
             WHERE id = $1
             RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, Meal>(&query)
            .bind(id)
            .bind(input.meal_date)
            .bind(input.meal_time)
            .bind(input.turkey_count)
            .bind(input.ham_count)
            .bind(input.chicken_count)
            .bind(input.veggie_count)
            .bind(input.salad_count)
            .bind(&input.notes)
            .fetch_optional(pool)
            .await
    }

    pub async fn delete(pool: &PgPool, id: DbId) -> Result<bool, sqlx::Error> {
        let result = sqlx::query("DELETE FROM meals WHERE id = $1")
            .bind(id)
            .execute(pool)
            .await?;
        Ok(result.rows_affected() > 0)
    }
}
