//! Meal (lunch plan) model and DTOs.

use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use tripdesk_core::types::{Date, DbId, Time, Timestamp};
use validator::Validate;

/// A row from the `meals` table.
#[derive(Debug, Clone, FromRow, Serialize)]
pub struct Meal {
    pub id: DbId,
    pub group_id: DbId,
    pub meal_date: Date,
    pub meal_time: Option<Time>,
    pub turkey_count: i32,
    pub ham_count: i32,
    pub chicken_count: i32,
    pub veggie_count: i32,
    pub salad_count: i32,
    pub notes: Option<String>,
    pub created_at: Timestamp,
    pub updated_at: Timestamp,
}

impl Meal {
    /// Sum of all five counts.
    pub fn total_meals(&self) -> i64 {
        [
            self.turkey_count,
            self.ham_count,
            self.chicken_count,
            self.veggie_count,
            self.salad_count,
        ]
        .iter()
        .map(|&c| i64::from(c))
        .sum()
    }

    pub fn with_total(self) -> MealWithTotal {
        let total_meals = self.total_meals();
        MealWithTotal {
            meal: self,
            total_meals,
        }
    }
}

/// A meal as returned by the API, with its derived total.
#[derive(Debug, Clone, Serialize)]
pub struct MealWithTotal {
    #[serde(flatten)]
    pub meal: Meal,
    pub total_meals: i64,
}

/// DTO for creating a meal plan. Omitted counts default to 0.
#[derive(Debug, Clone, Deserialize, Validate)]
pub struct CreateMeal {
    pub group_id: DbId,
    pub meal_date: Date,
    pub meal_time: Option<Time>,
    #[validate(range(min = 0, message = "must not be negative"))]
    pub turkey_count: Option<i32>,
    #[validate(range(min = 0, message = "must not be negative"))]
    pub ham_count: Option<i32>,
    #[validate(range(min = 0, message = "must not be negative"))]
    pub chicken_count: Option<i32>,
    #[validate(range(min = 0, message = "must not be negative"))]
    pub veggie_count: Option<i32>,
    #[validate(range(min = 0, message = "must not be negative"))]
    pub salad_count: Option<i32>,
    pub notes: Option<String>,
}

#[derive(Debug, Clone, Default, Deserialize, Validate)]
pub struct UpdateMeal {
    pub meal_date: Option<Date>,
    pub meal_time: Option<Time>,
    #[validate(range(min = 0, message = "must not be negative"))]
    pub turkey_count: Option<i32>,
    #[validate(range(min = 0, message = "must not be negative"))]
    pub ham_count: Option<i32>,
    #[validate(range(min = 0, message = "must not be negative"))]
    pub chicken_count: Option<i32>,
    #[validate(range(min = 0, message = "must not be negative"))]
    pub veggie_count: Option<i32>,
    #[validate(range(min = 0, message = "must not be negative"))]
    pub salad_count: Option<i32>,
    pub notes: Option<String>,
}
