//! Itinerary entry model and DTOs.

use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use tripdesk_core::types::{Date, DbId, Time, Timestamp};
use validator::Validate;

/// A row from the `itineraries` table.
#[derive(Debug, Clone, FromRow, Serialize)]
pub struct Itinerary {
    pub id: DbId,
    pub group_id: DbId,
    pub day_number: i32,
    pub date: Date,
    pub activity: String,
    pub start_time: Option<Time>,
    pub end_time: Option<Time>,
    pub location: Option<String>,
    pub notes: Option<String>,
    pub created_at: Timestamp,
    pub updated_at: Timestamp,
}

#[derive(Debug, Clone, Deserialize, Validate)]
pub struct CreateItinerary {
    pub group_id: DbId,
    #[validate(range(min = 1, message = "must be at least 1"))]
    pub day_number: i32,
    pub date: Date,
    #[validate(length(min = 1))]
    pub activity: String,
    pub start_time: Option<Time>,
    pub end_time: Option<Time>,
    pub location: Option<String>,
    pub notes: Option<String>,
}

#[derive(Debug, Clone, Default, Deserialize, Validate)]
pub struct UpdateItinerary {
    #[validate(range(min = 1, message = "must be at least 1"))]
    pub day_number: Option<i32>,
    pub date: Option<Date>,
    #[validate(length(min = 1))]
    pub activity: Option<String>,
    pub start_time: Option<Time>,
    pub end_time: Option<Time>,
    pub location: Option<String>,
    pub notes: Option<String>,
}
